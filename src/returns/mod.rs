//! Return-value policy registry
//!
//! When the predicate vetoes a forwarding call, the generated method needs a
//! default-return fragment matching its declared return type. Strategies
//! implementing [`ReturnPoet`] each cover one family of selectors; the
//! [`PolicyRegistry`] picks a strategy by adapter, then by selector shape,
//! and guarantees a terminal `throws` fallback so resolution is total.
//!
//! Custom adapters are plain registered factories looked up by a stable
//! string key. There is no dynamic type loading: a key with no registration
//! degrades to the fallback.

mod boolean;
mod generic;
mod number;

pub use boolean::BoolReturns;
pub use generic::GenericReturns;
pub use number::NumberReturns;

use std::collections::HashMap;

use tracing::warn;

use crate::model::{selector, AdapterKind, TypeRef};
use crate::spec::CodeBlock;

/// A default-value strategy.
///
/// `compose` appends a complete early-return fragment for the given return
/// type and value selector and reports whether it produced anything. A
/// `false` means "not applicable here", never an error.
pub trait ReturnPoet {
    fn compose(
        &self,
        return_type: &TypeRef,
        selector: &str,
        method: &str,
        code: &mut CodeBlock,
    ) -> bool;
}

/// Constructor for a registered custom adapter.
pub type AdapterFactory = fn() -> Box<dyn ReturnPoet>;

/// Registry resolving a yield policy into a default-return code fragment.
///
/// Stateless apart from custom-adapter registrations; one registry can be
/// shared by any number of concurrent generation runs.
#[derive(Default)]
pub struct PolicyRegistry {
    custom: HashMap<String, AdapterFactory>,
}

impl PolicyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom adapter under its selector key.
    pub fn register(&mut self, key: impl Into<String>, factory: AdapterFactory) {
        self.custom.insert(key.into(), factory);
    }

    /// Resolve a (return type, selector) request into code. Total: every
    /// request ends in a produced fragment, falling back to `throws`.
    pub fn resolve(
        &self,
        adapter: &AdapterKind,
        return_type: &TypeRef,
        value: &str,
        method: &str,
        code: &mut CodeBlock,
    ) {
        let produced = match adapter {
            AdapterKind::Bool => BoolReturns.compose(return_type, value, method, code),
            AdapterKind::Number => NumberReturns.compose(return_type, value, method, code),
            AdapterKind::Generic => {
                // the generic adapter routes recognizably-shaped selectors
                // to the specialized strategies first
                if selector::is_bool_shaped(value) {
                    BoolReturns.compose(return_type, value, method, code)
                } else if selector::is_number_shaped(value) {
                    NumberReturns.compose(return_type, value, method, code)
                } else {
                    GenericReturns.compose(return_type, value, method, code)
                }
            }
            AdapterKind::Custom(key) => match self.custom.get(key) {
                Some(factory) => factory().compose(return_type, value, method, code),
                None => {
                    warn!(adapter = %key, "no adapter registered, falling back to throws");
                    false
                }
            },
        };

        if !produced {
            GenericReturns.compose_throws(method, code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Line;

    fn first_statement(code: &CodeBlock) -> &str {
        match &code.lines[0] {
            Line::Statement(s) => s,
            other => panic!("unexpected line: {:?}", other),
        }
    }

    #[test]
    fn generic_adapter_routes_bool_shaped_selectors() {
        let registry = PolicyRegistry::new();
        let mut code = CodeBlock::default();
        registry.resolve(
            &AdapterKind::Generic,
            &TypeRef::Boolean,
            "false",
            "isReady",
            &mut code,
        );
        assert_eq!(first_statement(&code), "return false");
    }

    #[test]
    fn mismatched_strategy_falls_back_to_throws() {
        let registry = PolicyRegistry::new();
        let mut code = CodeBlock::default();
        // boolean selector against an int-returning method is not applicable
        registry.resolve(
            &AdapterKind::Bool,
            &TypeRef::Int,
            "true",
            "getCount",
            &mut code,
        );
        assert_eq!(
            first_statement(&code),
            "throw new UnsupportedOperationException(\"cannot call getCount\")"
        );
    }

    #[test]
    fn unregistered_custom_adapter_falls_back_to_throws() {
        let registry = PolicyRegistry::new();
        let mut code = CodeBlock::default();
        registry.resolve(
            &AdapterKind::Custom("com.acme.Missing".into()),
            &TypeRef::Int,
            "zero",
            "getCount",
            &mut code,
        );
        assert!(first_statement(&code).starts_with("throw new UnsupportedOperationException"));
    }

    #[test]
    fn registered_custom_adapter_is_constructed_per_request() {
        struct AlwaysNull;
        impl ReturnPoet for AlwaysNull {
            fn compose(
                &self,
                _return_type: &TypeRef,
                _selector: &str,
                _method: &str,
                code: &mut CodeBlock,
            ) -> bool {
                code.add_statement("return null");
                true
            }
        }

        let mut registry = PolicyRegistry::new();
        registry.register("com.acme.NullAdapter", || Box::new(AlwaysNull));

        let mut code = CodeBlock::default();
        registry.resolve(
            &AdapterKind::Custom("com.acme.NullAdapter".into()),
            &TypeRef::named("String"),
            "anything",
            "load",
            &mut code,
        );
        assert_eq!(first_statement(&code), "return null");
    }
}
