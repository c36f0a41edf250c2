//! Metadata mirroring and signature mimicry.
//!
//! Generated methods reproduce the source method's shape: its annotations
//! (minus the two reserved markers), its parameter list with per-parameter
//! annotations and the trailing-variadic flag, and its declared thrown
//! types.
//!
//! Mirroring is table-driven. The table is resolved once at run setup and
//! maps annotation names to a reproduction rule. An unknown or
//! source-retention-only annotation is a declared skip, not an error: the
//! generated element simply carries fewer annotations.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{AnnotationUse, AnnotationValue, MethodDescriptor};
use crate::spec::{quote_string, AnnotationSpec, MethodSpec, ParameterSpec};

/// How one annotation kind is reproduced on generated elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorRule {
    Copy,
    Skip,
}

/// Declarative mirroring table, resolved at run setup.
#[derive(Debug, Clone)]
pub struct MirrorTable {
    rules: HashMap<String, MirrorRule>,
}

impl MirrorTable {
    /// Table seeded with the annotation kinds a generated proxy can carry.
    /// Source-retention-only kinds are declared skips.
    pub fn with_defaults() -> Self {
        let mut table = Self {
            rules: HashMap::new(),
        };
        for name in [
            "androidx.annotation.NonNull",
            "androidx.annotation.Nullable",
            "androidx.annotation.UiThread",
            "androidx.annotation.WorkerThread",
            "androidx.annotation.CallSuper",
            "java.lang.Deprecated",
            "java.lang.Override",
        ] {
            table.rules.insert(name.to_string(), MirrorRule::Copy);
        }
        // retained only in source, cannot appear on generated output
        table
            .rules
            .insert("java.lang.SuppressWarnings".to_string(), MirrorRule::Skip);
        table
    }

    /// Mark an additional annotation name as copyable.
    pub fn allow(&mut self, name: impl Into<String>) {
        self.rules.insert(name.into(), MirrorRule::Copy);
    }

    /// Rule for an annotation name; unknown kinds are skipped.
    pub fn rule(&self, name: &str) -> MirrorRule {
        self.rules.get(name).copied().unwrap_or(MirrorRule::Skip)
    }
}

impl Default for MirrorTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn render_value(value: &AnnotationValue) -> String {
    match value {
        AnnotationValue::Str(s) => quote_string(s),
        AnnotationValue::Bool(b) => b.to_string(),
        AnnotationValue::Int(i) => i.to_string(),
        AnnotationValue::Type(name) => format!("{}.class", name),
    }
}

/// Reproduce one annotation as an output spec.
fn mirror_annotation(ann: &AnnotationUse) -> AnnotationSpec {
    let mut spec = AnnotationSpec::new(ann.name.clone());
    for (name, value) in &ann.args {
        spec = spec.member(name.clone(), render_value(value));
    }
    spec
}

fn mirrored(annotations: &[AnnotationUse], table: &MirrorTable) -> Vec<AnnotationSpec> {
    let mut out = Vec::new();
    for ann in annotations {
        if ann.is_reserved_marker() {
            continue;
        }
        match table.rule(&ann.name) {
            MirrorRule::Copy => out.push(mirror_annotation(ann)),
            MirrorRule::Skip => {
                debug!(annotation = %ann.name, "skipping annotation with no mirroring rule");
            }
        }
    }
    out
}

/// Mirror the method's own annotations, excluding the reserved markers.
pub fn mimic_method_annotations(
    builder: &mut MethodSpec,
    method: &MethodDescriptor,
    table: &MirrorTable,
) {
    for spec in mirrored(&method.annotations, table) {
        builder.add_annotation(spec);
    }
}

/// Reproduce the parameter list verbatim (names, types, per-parameter
/// annotations, trailing-variadic flag) and return the comma-separated
/// argument list used to forward the call.
pub fn mimic_parameters(
    builder: &mut MethodSpec,
    method: &MethodDescriptor,
    table: &MirrorTable,
) -> String {
    let mut arguments = Vec::with_capacity(method.params.len());

    for param in &method.params {
        let mut spec = ParameterSpec::new(param.name.clone(), param.ty.clone());
        for ann in mirrored(&param.annotations, table) {
            spec = spec.annotation(ann);
        }
        builder.add_parameter(spec);
        arguments.push(param.name.clone());
    }

    builder.set_varargs(method.varargs);
    arguments.join(", ")
}

/// Reproduce the declared thrown types.
pub fn mimic_throws(builder: &mut MethodSpec, method: &MethodDescriptor) {
    for thrown in &method.throws {
        builder.add_exception(thrown.clone());
    }
}
