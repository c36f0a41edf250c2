//! Generic default-value strategy and the guaranteed `throws` fallback.

use super::number::zero_literal;
use super::ReturnPoet;
use crate::model::{selector, TypeRef};
use crate::spec::{quote_string, CodeBlock};

/// Handles `throws`, `null` and best-effort `empty` synthesis.
///
/// Its `throws` path is the terminal fallback of the whole registry: every
/// unresolvable request degrades to a thrown runtime failure, so generation
/// always produces valid code.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericReturns;

impl GenericReturns {
    /// Emit the veto failure statement. Always succeeds.
    pub fn compose_throws(&self, method: &str, code: &mut CodeBlock) {
        code.add_statement(format!(
            "throw new UnsupportedOperationException({})",
            quote_string(&format!("cannot call {}", method))
        ));
    }
}

/// Best-effort "empty" literal for a type, `None` when no sensible empty
/// value exists.
fn empty_literal(ty: &TypeRef) -> Option<String> {
    if let Some(kind) = ty.numeric_kind() {
        return Some(zero_literal(kind).to_string());
    }
    if ty.is_boolean() {
        return Some("false".to_string());
    }
    if let TypeRef::Array(elem) = ty {
        return Some(format!("new {}[0]", elem));
    }
    let base = ty.base_name()?;
    let simple = base.rsplit('.').next().unwrap_or(base);
    match simple {
        "String" | "CharSequence" => Some("\"\"".to_string()),
        "List" | "Collection" | "Iterable" | "ArrayList" => {
            Some("java.util.Collections.emptyList()".to_string())
        }
        "Set" => Some("java.util.Collections.emptySet()".to_string()),
        "Map" => Some("java.util.Collections.emptyMap()".to_string()),
        _ => None,
    }
}

impl ReturnPoet for GenericReturns {
    fn compose(
        &self,
        return_type: &TypeRef,
        selector: &str,
        method: &str,
        code: &mut CodeBlock,
    ) -> bool {
        match selector {
            selector::THROWS => {
                self.compose_throws(method, code);
                true
            }
            selector::NULL => {
                if !return_type.is_reference() {
                    return false;
                }
                code.add_statement("return null");
                true
            }
            selector::EMPTY => match empty_literal(return_type) {
                Some(literal) => {
                    code.add_statement(format!("return {}", literal));
                    true
                }
                None => false,
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Line;

    fn compose(ty: TypeRef, sel: &str) -> Option<String> {
        let mut code = CodeBlock::default();
        GenericReturns
            .compose(&ty, sel, "load", &mut code)
            .then(|| match &code.lines[0] {
                Line::Statement(s) => s.clone(),
                other => panic!("unexpected line: {:?}", other),
            })
    }

    #[test]
    fn throws_mentions_the_vetoed_method() {
        assert_eq!(
            compose(TypeRef::Int, "throws").as_deref(),
            Some("throw new UnsupportedOperationException(\"cannot call load\")")
        );
    }

    #[test]
    fn null_only_for_reference_types() {
        assert_eq!(
            compose(TypeRef::named("String"), "null").as_deref(),
            Some("return null")
        );
        assert_eq!(compose(TypeRef::Int, "null"), None);
    }

    #[test]
    fn empty_synthesizes_per_type() {
        assert_eq!(
            compose(TypeRef::named("String"), "empty").as_deref(),
            Some("return \"\"")
        );
        assert_eq!(
            compose(
                TypeRef::generic("java.util.List", vec![TypeRef::named("String")]),
                "empty"
            )
            .as_deref(),
            Some("return java.util.Collections.emptyList()")
        );
        assert_eq!(
            compose(TypeRef::array(TypeRef::Int), "empty").as_deref(),
            Some("return new int[0]")
        );
        assert_eq!(compose(TypeRef::named("com.acme.Widget"), "empty"), None);
    }

    #[test]
    fn unknown_selectors_decline() {
        assert_eq!(compose(TypeRef::Int, "whatever"), None);
    }
}
