//! Type references shared by descriptors and generated specs.
//!
//! Covers the primitive types of the target dialect, named (possibly
//! generic) references and arrays. References render as fully qualified
//! source text, except `java.lang` names which the dialect resolves
//! implicitly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A type reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeRef {
    Void,

    // Primitive types
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,

    // Named type reference, optionally with generic arguments
    Named {
        name: String,
        #[serde(default)]
        args: Vec<TypeRef>,
    },

    // Array of an element type
    Array(Box<TypeRef>),
}

/// Numeric family of a type, used when synthesizing default numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Named {
            name: name.into(),
            args,
        }
    }

    pub fn array(elem: TypeRef) -> Self {
        TypeRef::Array(Box::new(elem))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Void)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            TypeRef::Boolean
                | TypeRef::Byte
                | TypeRef::Short
                | TypeRef::Int
                | TypeRef::Long
                | TypeRef::Char
                | TypeRef::Float
                | TypeRef::Double
        )
    }

    /// Reference types accept `null`; primitives and void do not.
    pub fn is_reference(&self) -> bool {
        matches!(self, TypeRef::Named { .. } | TypeRef::Array(_))
    }

    /// Boolean primitive or its boxed counterpart.
    pub fn is_boolean(&self) -> bool {
        match self {
            TypeRef::Boolean => true,
            TypeRef::Named { name, .. } => name == "java.lang.Boolean",
            _ => false,
        }
    }

    /// Numeric family covering both primitives and boxed counterparts.
    pub fn numeric_kind(&self) -> Option<NumericKind> {
        match self {
            TypeRef::Byte => Some(NumericKind::Byte),
            TypeRef::Short => Some(NumericKind::Short),
            TypeRef::Int => Some(NumericKind::Int),
            TypeRef::Long => Some(NumericKind::Long),
            TypeRef::Float => Some(NumericKind::Float),
            TypeRef::Double => Some(NumericKind::Double),
            TypeRef::Named { name, .. } => match name.as_str() {
                "java.lang.Byte" => Some(NumericKind::Byte),
                "java.lang.Short" => Some(NumericKind::Short),
                "java.lang.Integer" => Some(NumericKind::Int),
                "java.lang.Long" => Some(NumericKind::Long),
                "java.lang.Float" => Some(NumericKind::Float),
                "java.lang.Double" => Some(NumericKind::Double),
                _ => None,
            },
            _ => None,
        }
    }

    /// Base name without generic arguments, e.g. `java.util.List`.
    pub fn base_name(&self) -> Option<&str> {
        match self {
            TypeRef::Named { name, .. } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Void => write!(f, "void"),
            TypeRef::Boolean => write!(f, "boolean"),
            TypeRef::Byte => write!(f, "byte"),
            TypeRef::Short => write!(f, "short"),
            TypeRef::Int => write!(f, "int"),
            TypeRef::Long => write!(f, "long"),
            TypeRef::Char => write!(f, "char"),
            TypeRef::Float => write!(f, "float"),
            TypeRef::Double => write!(f, "double"),
            TypeRef::Named { name, args } => {
                write!(f, "{}", name)?;
                if !args.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
            TypeRef::Array(elem) => write!(f, "{}[]", elem),
        }
    }
}
