//! Generated-class spec model and renderer
//!
//! The output side of a generation run. The class generator composes a
//! [`TypeSpec`] through the builder types here, wraps it in a
//! [`SourceUnit`], and the sink persists the rendered text. Rendering is
//! pure and deterministic.

mod render;
mod types;

pub use render::{quote_string, render_unit};
pub use types::{
    AnnotationSpec, CodeBlock, FieldSpec, Line, MethodSpec, Modifier, ParameterSpec, TypeKind,
    TypeSpec,
};

/// A finished compilation unit: one generated type plus its package.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub package: String,
    pub type_spec: TypeSpec,
}

impl SourceUnit {
    pub fn new(package: impl Into<String>, type_spec: TypeSpec) -> Self {
        Self {
            package: package.into(),
            type_spec,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_spec.name
    }

    /// Serialize the unit to source text.
    pub fn render(&self) -> String {
        render_unit(&self.package, &self.type_spec)
    }
}
