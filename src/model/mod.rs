//! Source-type descriptors
//!
//! The input model for one generation run: a type marked for proxying, its
//! members, and the metadata attached to them. Descriptors are produced by
//! an external discovery pass and handed over serialized (the CLI reads them
//! as JSON), so the whole model derives serde traits.
//!
//! Two marker annotations carry generation semantics instead of being
//! mirrored verbatim: `Yield` (default-value policy on veto) and
//! `AfterCall` (post-forwarding hook). Everything else is plain metadata.

mod types;

pub use types::{NumericKind, TypeRef};

use serde::{Deserialize, Serialize};

/// Simple name of the default-value marker annotation.
pub const YIELD_MARKER: &str = "Yield";
/// Simple name of the post-forwarding hook marker annotation.
pub const AFTER_CALL_MARKER: &str = "AfterCall";

/// Symbolic value selectors understood by the built-in policy strategies.
pub mod selector {
    pub const TRUE: &str = "true";
    pub const FALSE: &str = "false";
    pub const ZERO: &str = "zero";
    pub const MAX: &str = "max";
    pub const MIN: &str = "min";
    pub const MINUS_ONE: &str = "-1";
    pub const THROWS: &str = "throws";
    pub const NULL: &str = "null";
    pub const EMPTY: &str = "empty";

    /// True for selectors the boolean strategy recognizes.
    pub fn is_bool_shaped(value: &str) -> bool {
        value == TRUE || value == FALSE
    }

    /// True for selectors the numeric strategy recognizes.
    pub fn is_number_shaped(value: &str) -> bool {
        matches!(value, ZERO | MAX | MIN | MINUS_ONE)
    }
}

/// Element kind of a source type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    Interface,
    Class,
    Enum,
    Annotation,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Interface => "interface",
            SourceKind::Class => "class",
            SourceKind::Enum => "enum",
            SourceKind::Annotation => "annotation",
        }
    }
}

/// The interface or class being proxied. Immutable input, one per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceType {
    /// Package the generated unit is emitted into.
    pub package: String,
    /// Flattened name, nested types joined with `_`.
    pub flat_name: String,
    /// Fully qualified name, used as the wrapped-instance type.
    pub qualified_name: String,
    pub kind: SourceKind,
    /// Candidate members as discovered; only methods are generatable.
    #[serde(default)]
    pub members: Vec<TypeMember>,
}

/// A raw member entry supplied by discovery.
///
/// Discovery hands over everything it saw on the type; the generator
/// accepts `Method` entries and reports the rest as unexpected symbols.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeMember {
    Method(MethodDescriptor),
    Field { name: String },
    Other { kind: String, name: String },
}

/// One method of the source type. Read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub params: Vec<ParameterDescriptor>,
    /// Trailing parameter is variadic.
    #[serde(default)]
    pub varargs: bool,
    pub return_type: TypeRef,
    #[serde(default)]
    pub throws: Vec<TypeRef>,
    #[serde(default)]
    pub annotations: Vec<AnnotationUse>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            varargs: false,
            return_type,
            throws: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn add_param(&mut self, name: impl Into<String>, ty: TypeRef) {
        self.params.push(ParameterDescriptor {
            name: name.into(),
            ty,
            annotations: Vec::new(),
        });
    }

    pub fn add_annotation(&mut self, ann: AnnotationUse) {
        self.annotations.push(ann);
    }

    /// First `Yield` marker, parsed. At most one is honored per method.
    pub fn yield_marker(&self) -> Option<YieldSpec> {
        self.annotations
            .iter()
            .find(|a| a.simple_name() == YIELD_MARKER)
            .map(YieldSpec::from_annotation)
    }

    /// Whether the method carries the `AfterCall` marker.
    pub fn after_call_marker(&self) -> bool {
        self.annotations
            .iter()
            .any(|a| a.simple_name() == AFTER_CALL_MARKER)
    }
}

/// One formal parameter of a method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub annotations: Vec<AnnotationUse>,
}

/// An annotation attached to a method or parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationUse {
    /// Qualified annotation name as discovered.
    pub name: String,
    #[serde(default)]
    pub args: Vec<(String, AnnotationValue)>,
}

impl AnnotationUse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.args.push((name.into(), value));
        self
    }

    /// Last segment of the qualified name (`a.b.C.Yield` -> `Yield`).
    pub fn simple_name(&self) -> &str {
        self.name
            .rsplit(|c| c == '.' || c == '$')
            .next()
            .unwrap_or(&self.name)
    }

    /// Reserved markers are consumed structurally, never mirrored.
    pub fn is_reserved_marker(&self) -> bool {
        let simple = self.simple_name();
        simple == YIELD_MARKER || simple == AFTER_CALL_MARKER
    }

    fn string_arg(&self, key: &str) -> Option<&str> {
        self.args.iter().find_map(|(name, value)| {
            if name != key {
                return None;
            }
            match value {
                AnnotationValue::Str(s) => Some(s.as_str()),
                AnnotationValue::Type(s) => Some(s.as_str()),
                _ => None,
            }
        })
    }
}

/// A literal annotation argument value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnnotationValue {
    Str(String),
    Bool(bool),
    Int(i64),
    /// A type literal, serialized by qualified name.
    Type(String),
}

/// Which policy strategy resolves a value selector into code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterKind {
    Bool,
    Number,
    Generic,
    /// Key into the custom-adapter registry.
    Custom(String),
}

impl AdapterKind {
    fn parse(raw: &str) -> Self {
        match raw {
            "bool" => AdapterKind::Bool,
            "number" => AdapterKind::Number,
            "generic" => AdapterKind::Generic,
            other => AdapterKind::Custom(other.to_string()),
        }
    }
}

impl std::fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdapterKind::Bool => write!(f, "bool"),
            AdapterKind::Number => write!(f, "number"),
            AdapterKind::Generic => write!(f, "generic"),
            AdapterKind::Custom(key) => write!(f, "{}", key),
        }
    }
}

/// Resolved default-value policy for one method.
///
/// Absent an explicit `Yield` marker the policy is "fail loudly": selector
/// `throws`, generic adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YieldSpec {
    pub value: String,
    pub adapter: AdapterKind,
}

impl Default for YieldSpec {
    fn default() -> Self {
        Self {
            value: selector::THROWS.to_string(),
            adapter: AdapterKind::Generic,
        }
    }
}

impl YieldSpec {
    fn from_annotation(ann: &AnnotationUse) -> Self {
        let mut spec = YieldSpec::default();
        if let Some(value) = ann.string_arg("value") {
            spec.value = value.to_string();
        }
        if let Some(adapter) = ann.string_arg("adapter") {
            spec.adapter = AdapterKind::parse(adapter);
        }
        spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yield_marker_defaults_to_throws() {
        let mut method = MethodDescriptor::new("getCount", TypeRef::Int);
        method.add_annotation(AnnotationUse::new("proxy.Yield"));

        let spec = method.yield_marker().expect("marker");
        assert_eq!(spec.value, selector::THROWS);
        assert_eq!(spec.adapter, AdapterKind::Generic);
    }

    #[test]
    fn yield_marker_parses_value_and_adapter() {
        let mut method = MethodDescriptor::new("isReady", TypeRef::Boolean);
        method.add_annotation(
            AnnotationUse::new("proxy.Yield")
                .arg("value", AnnotationValue::Str("false".into()))
                .arg("adapter", AnnotationValue::Str("bool".into())),
        );

        let spec = method.yield_marker().expect("marker");
        assert_eq!(spec.value, "false");
        assert_eq!(spec.adapter, AdapterKind::Bool);
    }

    #[test]
    fn custom_adapter_keys_are_preserved() {
        assert_eq!(
            AdapterKind::parse("com.acme.PageAdapter"),
            AdapterKind::Custom("com.acme.PageAdapter".into())
        );
    }

    #[test]
    fn reserved_markers_match_on_simple_name() {
        assert!(AnnotationUse::new("a.b.AutoGuard$AfterCall").is_reserved_marker());
        assert!(AnnotationUse::new("Yield").is_reserved_marker());
        assert!(!AnnotationUse::new("androidx.annotation.NonNull").is_reserved_marker());
    }

    #[test]
    fn descriptor_round_trips_through_json() {
        let mut method = MethodDescriptor::new("notify", TypeRef::Void);
        method.add_param("msg", TypeRef::named("String"));

        let source = SourceType {
            package: "com.acme".into(),
            flat_name: "Events".into(),
            qualified_name: "com.acme.Events".into(),
            kind: SourceKind::Interface,
            members: vec![TypeMember::Method(method)],
        };

        let json = serde_json::to_string(&source).expect("serialize");
        let back: SourceType = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.flat_name, "Events");
        assert_eq!(back.members.len(), 1);
    }
}
