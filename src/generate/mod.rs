//! Proxy class generation
//!
//! Drives one generation run: given a [`SourceType`] descriptor, composes
//! the `Proxy_<Name>` class spec (wrapped-instance field, constructor,
//! abstract predicate, one guarded forwarding method per source method, the
//! optional after-call hook, and the nested method-name constants type) and
//! serializes it through the sink exactly once.
//!
//! # Failure contract
//!
//! `compose` never panics past its boundary and never returns an error
//! value: a failed run yields `false`, the full diagnostic trace is
//! accumulated in the error buffer exposed by [`ClassGenerator::errors`],
//! and nothing is written to the sink. Per-member failures are collected so
//! every offender is reported before the run fails.

mod method;
mod mimic;

pub use mimic::{MirrorRule, MirrorTable};

use std::collections::BTreeMap;
use std::fmt::Write as _;

use thiserror::Error;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::model::{SourceKind, SourceType, TypeMember, TypeRef};
use crate::returns::PolicyRegistry;
use crate::sink::{Sink, SinkError};
use crate::spec::{
    quote_string, AnnotationSpec, FieldSpec, MethodSpec, Modifier, ParameterSpec, SourceUnit,
    TypeSpec,
};

/// Name of the generated predicate method.
const PREDICATE: &str = "predicate";
/// Name of the generated after-call hook method.
const AFTER_CALL: &str = "afterCall";
/// Name of the nested constants type enumerating intercepted methods.
const METHODS: &str = "Methods";

const NON_NULL: &str = "androidx.annotation.NonNull";
const STRING_DEF: &str = "androidx.annotation.StringDef";

/// A member that could not be turned into a forwarding method.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MethodError {
    /// The discovered member is not a recognized method representation.
    #[error("unexpected member on {owner}: {kind} '{name}' is not a generatable method")]
    UnexpectedMember {
        owner: String,
        kind: String,
        name: String,
    },

    /// A default-value marker on a void method has no value to yield.
    #[error("default-value marker on void method {owner}.{name} has no value to yield")]
    YieldOnVoid { owner: String, name: String },
}

/// A failure that aborts the whole generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The source type is neither an interface nor a class.
    #[error("unsupported source kind: {kind} ({name})")]
    UnsupportedKind { kind: &'static str, name: String },

    /// One or more members failed; the individual records precede this
    /// summary in the error buffer.
    #[error("method generation failed: {count} invalid member(s)")]
    InvalidMembers { count: usize },

    #[error("failed to emit generated class")]
    Sink(#[from] SinkError),
}

/// Upper-cased constant identifier for a method name.
pub(crate) fn to_constant_name(name: &str) -> String {
    name.to_uppercase()
}

/// Generator for one proxy class. Owns all run-local state; the policy
/// registry is shared and immutable.
pub struct ClassGenerator<'a> {
    source: &'a SourceType,
    config: GeneratorConfig,
    registry: &'a PolicyRegistry,
    mirror: MirrorTable,
    /// Resolved super type name: the wrapped instance's own type.
    super_type: TypeRef,
    /// Captured diagnostics; non-empty exactly when `compose` failed.
    errors: String,
    /// Set the first time any method carries the after-call marker.
    after_calls: bool,
    /// Intercepted method names, case-insensitively deduplicated, keyed on
    /// the lower-cased form so iteration order is stable.
    known_methods: BTreeMap<String, String>,
}

impl<'a> ClassGenerator<'a> {
    pub fn new(
        source: &'a SourceType,
        config: GeneratorConfig,
        registry: &'a PolicyRegistry,
    ) -> Self {
        let mut mirror = MirrorTable::with_defaults();
        for name in &config.mirror_allow {
            mirror.allow(name.clone());
        }

        Self {
            super_type: TypeRef::named(source.qualified_name.clone()),
            source,
            config,
            registry,
            mirror,
            errors: String::new(),
            after_calls: false,
            known_methods: BTreeMap::new(),
        }
    }

    /// Compose the proxy class and serialize it through the sink.
    ///
    /// Returns `true` on success. On failure the diagnostic trace is
    /// available via [`errors`](Self::errors) and nothing was persisted.
    pub fn compose(&mut self, sink: &mut dyn Sink) -> bool {
        match self.try_compose(sink) {
            Ok(()) => true,
            Err(err) => {
                let mut trace = err.to_string();
                let mut cause = std::error::Error::source(&err);
                while let Some(inner) = cause {
                    let _ = write!(trace, "\ncaused by: {}", inner);
                    cause = inner.source();
                }
                let _ = writeln!(self.errors, "{}", trace);
                false
            }
        }
    }

    /// Accumulated diagnostics of this run.
    pub fn errors(&self) -> &str {
        &self.errors
    }

    fn try_compose(&mut self, sink: &mut dyn Sink) -> Result<(), GenerateError> {
        if self.config.debug {
            debug!(source = %self.source.qualified_name, "composing proxy class");
        }

        let members = self.create_members();
        let mut class_spec = self.create_class(members)?;

        class_spec.add_method(self.create_constructor());
        class_spec.add_method(self.create_predicate());

        self.create_methods(&mut class_spec)?;

        // only declared when some forwarding method needs the hook
        if self.after_calls {
            class_spec.add_method(self.create_after_call());
        }

        self.create_names_of_methods(&mut class_spec);

        let unit = SourceUnit::new(self.source.package.clone(), class_spec);
        sink.write(&self.source.package, &unit)?;

        if self.config.debug {
            debug!(unit = %unit.type_name(), "emitted generated class");
        }
        Ok(())
    }

    fn create_members(&self) -> Vec<FieldSpec> {
        vec![FieldSpec::new("inner", self.super_type.clone())
            .modifier(Modifier::Protected)
            .modifier(Modifier::Final)]
    }

    fn create_class(&mut self, members: Vec<FieldSpec>) -> Result<TypeSpec, GenerateError> {
        let mut builder = TypeSpec::class(format!("Proxy_{}", self.source.flat_name));
        builder.add_modifier(Modifier::Public);
        builder.add_modifier(Modifier::Abstract);

        match self.source.kind {
            SourceKind::Interface => builder.add_interface(self.super_type.clone()),
            SourceKind::Class => builder.set_superclass(self.super_type.clone()),
            other => {
                return Err(GenerateError::UnsupportedKind {
                    kind: other.as_str(),
                    name: self.source.qualified_name.clone(),
                })
            }
        }

        for member in members {
            builder.add_field(member);
        }
        Ok(builder)
    }

    fn create_constructor(&self) -> MethodSpec {
        let mut builder = MethodSpec::constructor();
        builder.add_modifier(Modifier::Public);
        builder.add_parameter(
            ParameterSpec::new("instance", self.super_type.clone())
                .annotation(AnnotationSpec::new(NON_NULL)),
        );
        builder.code.add_statement("this.inner = instance");
        builder
    }

    /// Abstract gate deciding, per call and per actual arguments, whether
    /// forwarding to the wrapped instance is permitted.
    fn create_predicate(&self) -> MethodSpec {
        let mut builder = MethodSpec::method(PREDICATE);
        builder.add_modifier(Modifier::Public);
        builder.add_modifier(Modifier::Abstract);
        builder.set_returns(TypeRef::Boolean);

        builder.add_parameter(self.method_name_parameter());
        builder.add_parameter(ParameterSpec::new(
            "args",
            TypeRef::array(TypeRef::named("Object")),
        ));
        builder.set_varargs(true);
        builder
    }

    /// Abstract hook observing (and possibly replacing) a forwarded call's
    /// result, generic over the result type.
    fn create_after_call(&self) -> MethodSpec {
        let mut builder = MethodSpec::method(AFTER_CALL);
        builder.add_modifier(Modifier::Public);
        builder.add_modifier(Modifier::Abstract);
        builder.add_type_variable("R");
        builder.set_returns(TypeRef::named("R"));

        builder.add_parameter(self.method_name_parameter());
        builder.add_parameter(ParameterSpec::new("result", TypeRef::named("R")));
        builder
    }

    /// The method-name token parameter, constrained to the restricted
    /// string domain of the constants type.
    fn method_name_parameter(&self) -> ParameterSpec {
        ParameterSpec::new("methodName", TypeRef::named("String"))
            .annotation(AnnotationSpec::new(METHODS))
            .annotation(AnnotationSpec::new(NON_NULL))
    }

    /// Generate one forwarding method per discovered member, collecting
    /// every failure before surfacing the step's result.
    fn create_methods(&mut self, class_spec: &mut TypeSpec) -> Result<(), GenerateError> {
        let source = self.source;
        let mut failures: Vec<MethodError> = Vec::new();

        for member in &source.members {
            let descriptor = match member {
                TypeMember::Method(descriptor) => descriptor,
                TypeMember::Field { name } => {
                    failures.push(MethodError::UnexpectedMember {
                        owner: source.qualified_name.clone(),
                        kind: "field".to_string(),
                        name: name.clone(),
                    });
                    continue;
                }
                TypeMember::Other { kind, name } => {
                    failures.push(MethodError::UnexpectedMember {
                        owner: source.qualified_name.clone(),
                        kind: kind.clone(),
                        name: name.clone(),
                    });
                    continue;
                }
            };

            match self.create_method(descriptor) {
                Ok(spec) => class_spec.add_method(spec),
                Err(err) => failures.push(err),
            }
        }

        if failures.is_empty() {
            return Ok(());
        }
        // every offender lands in the buffer; one summary aborts the run
        for failure in &failures {
            let _ = writeln!(self.errors, "{}", failure);
        }
        Err(GenerateError::InvalidMembers {
            count: failures.len(),
        })
    }

    pub(crate) fn register_method_name(&mut self, name: &str) {
        self.known_methods
            .entry(name.to_lowercase())
            .or_insert_with(|| name.to_string());
    }

    /// Compose the nested constants type: one compile-time string constant
    /// per unique intercepted method name, with the closed-value-set marker
    /// enumerating exactly those constants.
    fn create_names_of_methods(&self, class_spec: &mut TypeSpec) {
        let mut names_type = TypeSpec::annotation_type(METHODS);
        names_type.add_modifier(Modifier::Public);

        let mut domain = Vec::with_capacity(self.known_methods.len());
        for original in self.known_methods.values() {
            let constant = to_constant_name(original);
            domain.push(format!("{}.{}", METHODS, constant));

            names_type.add_field(
                FieldSpec::new(constant, TypeRef::named("String"))
                    .modifier(Modifier::Public)
                    .modifier(Modifier::Static)
                    .modifier(Modifier::Final)
                    .initializer(quote_string(original)),
            );
        }

        names_type.add_annotation(
            AnnotationSpec::new(STRING_DEF).member("value", format!("{{{}}}", domain.join(", "))),
        );
        class_spec.add_nested(names_type);
    }
}
