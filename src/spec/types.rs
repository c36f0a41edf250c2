//! Specs for the generated compilation unit.
//!
//! Mutable builder structures the generator composes incrementally, then
//! renders exactly once. The model is deliberately small: it covers what a
//! generated proxy needs (a class, fields, methods with bodies, nested
//! constant-holding annotation types) and nothing more.

use crate::model::TypeRef;

/// Declaration modifiers, rendered in the order they were added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Public,
    Protected,
    Abstract,
    Static,
    Final,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
            Modifier::Final => "final",
        }
    }
}

/// An annotation applied to a generated element.
///
/// Member values are stored pre-rendered; the mirroring utility is
/// responsible for turning descriptor argument values into source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationSpec {
    pub name: String,
    pub members: Vec<(String, String)>,
}

impl AnnotationSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn member(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push((name.into(), value.into()));
        self
    }
}

/// A field declaration, optionally with an initializer expression.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub ty: TypeRef,
    pub modifiers: Vec<Modifier>,
    pub initializer: Option<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Vec::new(),
            initializer: None,
        }
    }

    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifiers.push(m);
        self
    }

    pub fn initializer(mut self, expr: impl Into<String>) -> Self {
        self.initializer = Some(expr.into());
        self
    }
}

/// A formal parameter of a generated method. Parameters are always
/// rendered `final`; a trailing variadic parameter is marked on the method.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    pub name: String,
    pub ty: TypeRef,
    pub annotations: Vec<AnnotationSpec>,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            annotations: Vec::new(),
        }
    }

    pub fn annotation(mut self, ann: AnnotationSpec) -> Self {
        self.annotations.push(ann);
        self
    }
}

/// One line of a method body.
#[derive(Debug, Clone)]
pub enum Line {
    /// A statement, terminated with `;` by the renderer.
    Statement(String),
    /// Opens a control-flow block (`if (...) {`).
    OpenBlock(String),
    /// Closes the innermost open block.
    CloseBlock,
    /// A `//` comment line.
    Comment(String),
}

/// An ordered method body, composed statement by statement.
#[derive(Debug, Clone, Default)]
pub struct CodeBlock {
    pub lines: Vec<Line>,
}

impl CodeBlock {
    pub fn add_statement(&mut self, stmt: impl Into<String>) {
        self.lines.push(Line::Statement(stmt.into()));
    }

    pub fn begin_control_flow(&mut self, head: impl Into<String>) {
        self.lines.push(Line::OpenBlock(head.into()));
    }

    pub fn end_control_flow(&mut self) {
        self.lines.push(Line::CloseBlock);
    }

    pub fn add_comment(&mut self, text: impl Into<String>) {
        self.lines.push(Line::Comment(text.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A method or constructor declaration.
#[derive(Debug, Clone)]
pub struct MethodSpec {
    /// `None` marks a constructor; the renderer substitutes the class name.
    pub name: Option<String>,
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<AnnotationSpec>,
    /// Generic type variables, e.g. `R`.
    pub type_variables: Vec<String>,
    pub return_type: TypeRef,
    pub params: Vec<ParameterSpec>,
    /// Trailing parameter renders as variadic.
    pub varargs: bool,
    pub throws: Vec<TypeRef>,
    /// Abstract methods render with no body regardless of `code`.
    pub is_abstract: bool,
    pub code: CodeBlock,
}

impl MethodSpec {
    pub fn method(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            modifiers: Vec::new(),
            annotations: Vec::new(),
            type_variables: Vec::new(),
            return_type: TypeRef::Void,
            params: Vec::new(),
            varargs: false,
            throws: Vec::new(),
            is_abstract: false,
            code: CodeBlock::default(),
        }
    }

    pub fn constructor() -> Self {
        let mut spec = Self::method("");
        spec.name = None;
        spec
    }

    pub fn add_modifier(&mut self, m: Modifier) {
        if m == Modifier::Abstract {
            self.is_abstract = true;
        }
        self.modifiers.push(m);
    }

    pub fn add_annotation(&mut self, ann: AnnotationSpec) {
        self.annotations.push(ann);
    }

    pub fn add_type_variable(&mut self, name: impl Into<String>) {
        self.type_variables.push(name.into());
    }

    pub fn set_returns(&mut self, ty: TypeRef) {
        self.return_type = ty;
    }

    pub fn add_parameter(&mut self, param: ParameterSpec) {
        self.params.push(param);
    }

    pub fn set_varargs(&mut self, varargs: bool) {
        self.varargs = varargs;
    }

    pub fn add_exception(&mut self, ty: TypeRef) {
        self.throws.push(ty);
    }
}

/// Kind of a generated type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    /// `@interface`, used for the constant-holding names type.
    AnnotationType,
}

/// A generated type: the proxy class itself or a nested member type.
#[derive(Debug, Clone)]
pub struct TypeSpec {
    pub name: String,
    pub kind: TypeKind,
    pub modifiers: Vec<Modifier>,
    pub annotations: Vec<AnnotationSpec>,
    /// At most one of `superclass` / `interfaces` is populated for proxies.
    pub superclass: Option<TypeRef>,
    pub interfaces: Vec<TypeRef>,
    pub fields: Vec<FieldSpec>,
    pub methods: Vec<MethodSpec>,
    pub nested: Vec<TypeSpec>,
}

impl TypeSpec {
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    pub fn annotation_type(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::AnnotationType)
    }

    fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            modifiers: Vec::new(),
            annotations: Vec::new(),
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            nested: Vec::new(),
        }
    }

    pub fn add_modifier(&mut self, m: Modifier) {
        self.modifiers.push(m);
    }

    pub fn add_annotation(&mut self, ann: AnnotationSpec) {
        self.annotations.push(ann);
    }

    pub fn set_superclass(&mut self, ty: TypeRef) {
        self.superclass = Some(ty);
    }

    pub fn add_interface(&mut self, ty: TypeRef) {
        self.interfaces.push(ty);
    }

    pub fn add_field(&mut self, field: FieldSpec) {
        self.fields.push(field);
    }

    pub fn add_method(&mut self, method: MethodSpec) {
        self.methods.push(method);
    }

    pub fn add_nested(&mut self, nested: TypeSpec) {
        self.nested.push(nested);
    }
}
