//! Boolean default-value strategy.

use super::ReturnPoet;
use crate::model::{selector, TypeRef};
use crate::spec::CodeBlock;

/// Emits `return true` / `return false` for boolean-typed methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolReturns;

impl ReturnPoet for BoolReturns {
    fn compose(
        &self,
        return_type: &TypeRef,
        selector: &str,
        _method: &str,
        code: &mut CodeBlock,
    ) -> bool {
        if !return_type.is_boolean() {
            return false;
        }
        match selector {
            selector::TRUE => code.add_statement("return true"),
            selector::FALSE => code.add_statement("return false"),
            _ => return false,
        }
        true
    }
}
