//! Numeric default-value strategy.

use super::ReturnPoet;
use crate::model::{selector, NumericKind, TypeRef};
use crate::spec::CodeBlock;

/// Emits zero / extremum / minus-one literals across the numeric families.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberReturns;

/// Zero literal for a numeric family, shared with the generic strategy's
/// best-effort `empty` synthesis.
pub(crate) fn zero_literal(kind: NumericKind) -> &'static str {
    match kind {
        NumericKind::Byte => "(byte) 0",
        NumericKind::Short => "(short) 0",
        NumericKind::Int => "0",
        NumericKind::Long => "0L",
        NumericKind::Float => "0.0f",
        NumericKind::Double => "0.0",
    }
}

fn minus_one_literal(kind: NumericKind) -> &'static str {
    match kind {
        NumericKind::Byte => "(byte) -1",
        NumericKind::Short => "(short) -1",
        NumericKind::Int => "-1",
        NumericKind::Long => "-1L",
        NumericKind::Float => "-1.0f",
        NumericKind::Double => "-1.0",
    }
}

fn boxed_name(kind: NumericKind) -> &'static str {
    match kind {
        NumericKind::Byte => "Byte",
        NumericKind::Short => "Short",
        NumericKind::Int => "Integer",
        NumericKind::Long => "Long",
        NumericKind::Float => "Float",
        NumericKind::Double => "Double",
    }
}

impl ReturnPoet for NumberReturns {
    fn compose(
        &self,
        return_type: &TypeRef,
        selector: &str,
        _method: &str,
        code: &mut CodeBlock,
    ) -> bool {
        let kind = match return_type.numeric_kind() {
            Some(kind) => kind,
            None => return false,
        };
        let literal = match selector {
            selector::ZERO => zero_literal(kind).to_string(),
            selector::MAX => format!("{}.MAX_VALUE", boxed_name(kind)),
            selector::MIN => format!("{}.MIN_VALUE", boxed_name(kind)),
            selector::MINUS_ONE => minus_one_literal(kind).to_string(),
            _ => return false,
        };
        code.add_statement(format!("return {}", literal));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Line;

    fn compose(ty: TypeRef, sel: &str) -> Option<String> {
        let mut code = CodeBlock::default();
        NumberReturns
            .compose(&ty, sel, "getCount", &mut code)
            .then(|| match &code.lines[0] {
                Line::Statement(s) => s.clone(),
                other => panic!("unexpected line: {:?}", other),
            })
    }

    #[test]
    fn zero_and_minus_one_track_the_numeric_family() {
        assert_eq!(compose(TypeRef::Int, "zero").as_deref(), Some("return 0"));
        assert_eq!(compose(TypeRef::Long, "zero").as_deref(), Some("return 0L"));
        assert_eq!(
            compose(TypeRef::Double, "-1").as_deref(),
            Some("return -1.0")
        );
    }

    #[test]
    fn extremes_use_boxed_constants() {
        assert_eq!(
            compose(TypeRef::Int, "max").as_deref(),
            Some("return Integer.MAX_VALUE")
        );
        assert_eq!(
            compose(TypeRef::named("java.lang.Long"), "min").as_deref(),
            Some("return Long.MIN_VALUE")
        );
    }

    #[test]
    fn declines_non_numeric_types() {
        assert_eq!(compose(TypeRef::Boolean, "zero"), None);
        assert_eq!(compose(TypeRef::named("String"), "max"), None);
    }
}
