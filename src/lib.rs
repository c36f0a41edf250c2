//! proxygen: a compile-time generator of guarded delegation proxies
//!
//! Given a descriptor of an interface or class marked for proxying, the
//! generator synthesizes a `Proxy_<Name>` subclass that wraps an instance
//! of the original type, routes every public method call through an
//! abstract predicate, and falls back to a policy-driven default return
//! value when the predicate vetoes the call. An optional after-call hook
//! observes (and may replace) forwarded results.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                  proxygen                     │
//! │                                               │
//! │  model     - source-type descriptors (input)  │
//! │  generate  - class + per-method generation    │
//! │  returns   - default-value policy registry    │
//! │  spec      - generated-class model + renderer │
//! │  sink      - output destinations              │
//! │                                               │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! Discovery of annotated declarations is an external concern: descriptors
//! arrive fully formed (the CLI loads them from JSON) and one
//! [`ClassGenerator`] run produces exactly one compilation unit through a
//! [`Sink`]. Runs are sequential and self-contained; only the stateless
//! [`PolicyRegistry`] and the mirroring table are shared between runs.
//!
//! ## Example
//!
//! ```
//! use proxygen::{ClassGenerator, GeneratorConfig, MemorySink, PolicyRegistry};
//! use proxygen::model::{MethodDescriptor, SourceKind, SourceType, TypeMember, TypeRef};
//!
//! let method = MethodDescriptor::new("getCount", TypeRef::Int);
//! let source = SourceType {
//!     package: "com.acme".into(),
//!     flat_name: "Counter".into(),
//!     qualified_name: "com.acme.Counter".into(),
//!     kind: SourceKind::Interface,
//!     members: vec![TypeMember::Method(method)],
//! };
//!
//! let registry = PolicyRegistry::new();
//! let mut sink = MemorySink::new();
//! let mut generator = ClassGenerator::new(&source, GeneratorConfig::default(), &registry);
//! assert!(generator.compose(&mut sink));
//! assert!(sink.units[0].2.contains("class Proxy_Counter"));
//! ```

pub mod config;
pub mod generate;
pub mod model;
pub mod returns;
pub mod sink;
pub mod spec;

pub use config::GeneratorConfig;
pub use generate::{ClassGenerator, GenerateError, MethodError, MirrorRule, MirrorTable};
pub use returns::{AdapterFactory, PolicyRegistry, ReturnPoet};
pub use sink::{FsSink, MemorySink, Sink, SinkError};
pub use spec::SourceUnit;
