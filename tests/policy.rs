use proxygen::model::{AdapterKind, TypeRef};
use proxygen::spec::{CodeBlock, Line};
use proxygen::{PolicyRegistry, ReturnPoet};

fn resolved(registry: &PolicyRegistry, adapter: AdapterKind, ty: TypeRef, value: &str) -> String {
    let mut code = CodeBlock::default();
    registry.resolve(&adapter, &ty, value, "sample", &mut code);
    assert!(!code.is_empty(), "resolution must always produce code");
    match &code.lines[0] {
        Line::Statement(s) => s.clone(),
        other => panic!("unexpected line: {:?}", other),
    }
}

#[test]
fn resolution_is_total_over_mismatched_pairs() {
    let registry = PolicyRegistry::new();
    let throws = "throw new UnsupportedOperationException(\"cannot call sample\")";

    // every mismatched (type, selector) pair still terminates in valid code
    let cases: Vec<(AdapterKind, TypeRef, &str)> = vec![
        (AdapterKind::Generic, TypeRef::named("String"), "zero"),
        (AdapterKind::Generic, TypeRef::Int, "null"),
        (AdapterKind::Bool, TypeRef::named("String"), "true"),
        (AdapterKind::Number, TypeRef::Boolean, "max"),
        (AdapterKind::Generic, TypeRef::Void, "nonsense"),
        (AdapterKind::Custom("unregistered".into()), TypeRef::Int, "zero"),
    ];
    for (adapter, ty, value) in cases {
        assert_eq!(resolved(&registry, adapter, ty, value), throws);
    }
}

#[test]
fn generic_adapter_routes_by_selector_shape() {
    let registry = PolicyRegistry::new();

    assert_eq!(
        resolved(&registry, AdapterKind::Generic, TypeRef::Boolean, "true"),
        "return true"
    );
    assert_eq!(
        resolved(&registry, AdapterKind::Generic, TypeRef::Float, "zero"),
        "return 0.0f"
    );
    assert_eq!(
        resolved(&registry, AdapterKind::Generic, TypeRef::named("String"), "empty"),
        "return \"\""
    );
}

#[test]
fn explicit_adapters_bypass_shape_detection() {
    let registry = PolicyRegistry::new();

    assert_eq!(
        resolved(&registry, AdapterKind::Number, TypeRef::Short, "-1"),
        "return (short) -1"
    );
    assert_eq!(
        resolved(&registry, AdapterKind::Bool, TypeRef::named("java.lang.Boolean"), "false"),
        "return false"
    );
}

#[test]
fn registered_adapter_takes_precedence_over_fallback() {
    struct FixedPage;
    impl ReturnPoet for FixedPage {
        fn compose(
            &self,
            _return_type: &TypeRef,
            selector: &str,
            _method: &str,
            code: &mut CodeBlock,
        ) -> bool {
            if selector != "first-page" {
                return false;
            }
            code.add_statement("return Page.first()");
            true
        }
    }

    let mut registry = PolicyRegistry::new();
    registry.register("com.acme.PageAdapter", || Box::new(FixedPage));

    let adapter = AdapterKind::Custom("com.acme.PageAdapter".into());
    assert_eq!(
        resolved(&registry, adapter.clone(), TypeRef::named("Page"), "first-page"),
        "return Page.first()"
    );
    // the adapter declining still terminates in the throws fallback
    assert!(resolved(&registry, adapter, TypeRef::named("Page"), "other")
        .starts_with("throw new UnsupportedOperationException"));
}
