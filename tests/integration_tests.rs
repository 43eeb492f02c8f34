//! Integration tests for condition evaluation and component resolution
//!
//! These tests drive the public API end to end against in-memory contexts.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wirebox_rs::kit::{ConditionError, ContextAdapter, WireboxError};
use wirebox_rs::wirebox::builder::Builder;
use wirebox_rs::wirebox::condition::{
    BeanCondition, Condition, FunctionCondition, MissingBeanCondition, MissingPropertyCondition,
    NotCondition, ProfileCondition, PropertyCondition, PropertyValueCondition,
};
use wirebox_rs::wirebox::conditional::Conditional;
use wirebox_rs::wirebox::context::PropertyContext;
use wirebox_rs::wirebox::loader::ManifestLoader;
use wirebox_rs::wirebox::registry::{ComponentDefinition, ComponentRegistry};

// ============================================================================
// Fixtures
// ============================================================================

static CONTEXT: Lazy<PropertyContext> = Lazy::new(|| {
    let mut ctx = PropertyContext::new();
    ctx.set_property("int", 3);
    ctx.set_property("bool", false);
    ctx.set_property("str", "this is a str");
    ctx.set_property("parent.child", 0);
    ctx.register_bean("app::BeanZero");
    ctx.register_bean("app::BeanOne");
    ctx.set_profile("test");
    ctx
});

/// Condition that records how often it was evaluated
#[derive(Debug)]
struct CountingCondition {
    result: bool,
    calls: Arc<AtomicUsize>,
}

impl CountingCondition {
    fn new(result: bool) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                result,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

impl Condition for CountingCondition {
    fn matches(&self, _ctx: &dyn ContextAdapter) -> Result<bool, ConditionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.result)
    }
}

fn all_conditions() -> Vec<Arc<dyn Condition>> {
    vec![
        Arc::new(FunctionCondition::new(|_| true)),
        Arc::new(PropertyCondition::new("parent")),
        Arc::new(MissingPropertyCondition::new("int")),
        Arc::new(PropertyValueCondition::new("int", "$>2&&$<4")),
        Arc::new(PropertyValueCondition::new("str", "nope")),
        Arc::new(BeanCondition::new("app::BeanOne")),
        Arc::new(MissingBeanCondition::new("Null")),
        Arc::new(ProfileCondition::new("prod")),
        Arc::new(Conditional::new().on_property("int").or().on_profile("x")),
    ]
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_empty_conditional_always_matches() {
    let empty = PropertyContext::new();
    assert!(Conditional::new().matches(&empty).unwrap());
    assert!(Conditional::new().matches(&*CONTEXT).unwrap());
}

#[test]
fn test_not_is_negation_for_every_variant() {
    for cond in all_conditions() {
        let expected = !cond.matches(&*CONTEXT).unwrap();
        let negated = NotCondition::from_arc(cond.clone());
        assert_eq!(negated.matches(&*CONTEXT).unwrap(), expected, "{:?}", cond);
    }
}

#[test]
fn test_property_and_missing_property_complement() {
    for path in ["int", "parent", "parent.child", "parent123", "bool", "nothing"] {
        assert_eq!(
            PropertyCondition::new(path).matches(&*CONTEXT).unwrap(),
            !MissingPropertyCondition::new(path)
                .matches(&*CONTEXT)
                .unwrap(),
            "{}",
            path
        );
    }
}

#[test]
fn test_short_circuit_never_calls_tail() {
    let (tail, calls) = CountingCondition::new(true);
    let cond = Conditional::new()
        .on(FunctionCondition::new(|_| false))
        .and()
        .on(tail);
    assert!(!cond.matches(&*CONTEXT).unwrap());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_dangling_operator_fails() {
    let cond = Conditional::new().on(FunctionCondition::new(|_| true)).and();
    let err = cond.matches(&*CONTEXT).unwrap_err();
    assert!(err.is_dangling_operator());
}

#[test]
fn test_default_and_equals_explicit_and() {
    for c1 in all_conditions() {
        for c2 in all_conditions() {
            let implicit = Conditional::new().on_arc(c1.clone()).on_arc(c2.clone());
            let explicit = Conditional::new()
                .on_arc(c1.clone())
                .and()
                .on_arc(c2.clone());
            assert_eq!(
                implicit.matches(&*CONTEXT).unwrap(),
                explicit.matches(&*CONTEXT).unwrap()
            );
        }
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_scenario_property_prefix() {
    let mut ctx = PropertyContext::new();
    ctx.set_property("int", 3);
    ctx.set_property("parent.child", 0);

    assert!(PropertyCondition::new("parent").matches(&ctx).unwrap());
    assert!(!PropertyCondition::new("parent123").matches(&ctx).unwrap());
}

#[test]
fn test_scenario_numeric_template() {
    let mut ctx = PropertyContext::new();
    ctx.set_property("int", 3);

    assert!(PropertyValueCondition::new("int", "$>2&&$<4")
        .matches(&ctx)
        .unwrap());
    assert!(!PropertyValueCondition::new("int", "$>5").matches(&ctx).unwrap());
}

#[test]
fn test_scenario_string_template() {
    let mut ctx = PropertyContext::new();
    ctx.set_property("str", "this is a str");

    assert!(PropertyValueCondition::new("str", "\"$\"==\"this is a str\"")
        .matches(&ctx)
        .unwrap());
}

#[test]
fn test_scenario_and_chain() {
    let cond = Conditional::new()
        .on_property_value("int", 3)
        .and()
        .on_property_value("bool", false);

    let mut ctx = PropertyContext::new();
    ctx.set_property("int", 3);
    ctx.set_property("bool", false);
    assert!(cond.matches(&ctx).unwrap());

    ctx.set_property("bool", true);
    assert!(!cond.matches(&ctx).unwrap());
}

#[test]
fn test_scenario_or_then_default_and() {
    let mut ctx = PropertyContext::new();
    ctx.set_property("int", 3);
    ctx.set_property("bool", false);

    let cond = Conditional::new()
        .on_property_value("int", 2)
        .or()
        .on_property_value("bool", false)
        .on_property_value("bool", false);
    assert!(cond.matches(&ctx).unwrap());
}

#[test]
fn test_scenario_not_profile() {
    let mut ctx = PropertyContext::new();
    ctx.set_profile("test");

    let cond = NotCondition::new(ProfileCondition::new("test"));
    assert!(!cond.matches(&ctx).unwrap());
}

#[test]
fn test_missing_values_are_not_errors() {
    let empty = PropertyContext::new();
    assert!(!PropertyValueCondition::new("bool", true).matches(&empty).unwrap());
    assert!(!BeanCondition::new("Null").matches(&empty).unwrap());
    assert!(MissingBeanCondition::new("Null").matches(&empty).unwrap());
    assert!(!ProfileCondition::new("test").matches(&empty).unwrap());
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_concurrent_evaluation_across_threads() {
    let cond = Conditional::new()
        .on_property("parent")
        .and()
        .on_property_value("int", "$>2&&$<4")
        .or()
        .on_profile("prod")
        .build()
        .unwrap();

    let mut other = PropertyContext::new();
    other.set_property("int", 10);
    other.set_property("parent", "x");

    std::thread::scope(|s| {
        for i in 0..8 {
            let cond = &cond;
            let other = &other;
            s.spawn(move || {
                for _ in 0..100 {
                    if i % 2 == 0 {
                        assert!(cond.matches(&*CONTEXT).unwrap());
                    } else {
                        assert!(!cond.matches(other).unwrap());
                    }
                }
            });
        }
    });
}

#[tokio::test]
async fn test_shared_conditional_in_blocking_tasks() {
    let cond = Arc::new(
        Conditional::new()
            .on_bean("app::BeanOne")
            .on_condition_not(ProfileCondition::new("prod"))
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cond = cond.clone();
            tokio::task::spawn_blocking(move || cond.matches(&*CONTEXT))
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().unwrap());
    }
}

// ============================================================================
// Registry and manifests
// ============================================================================

#[test]
fn test_registry_resolution_order() {
    let mut registry = ComponentRegistry::new();
    registry
        .register(
            ComponentDefinition::new("redis", "app::RedisCache")
                .with_condition(Conditional::new().on_property("redis")),
        )
        .unwrap();
    registry
        .register(
            ComponentDefinition::new("memory", "app::MemoryCache")
                .with_condition(Conditional::new().on_missing_bean("redis")),
        )
        .unwrap();

    let resolution = registry.resolve(&*CONTEXT).unwrap();
    assert_eq!(resolution.included_names(), vec!["memory"]);

    let mut ctx = CONTEXT.clone();
    ctx.set_property("redis.host", "localhost");
    let resolution = registry.resolve(&ctx).unwrap();
    assert_eq!(resolution.included_names(), vec!["redis"]);
}

#[test]
fn test_manifest_end_to_end() {
    let yaml = r#"
name: e2e
context:
  properties:
    int: 3
    str: "this is a str"
  profiles: [test]
components:
  - name: by_template
    type: app::A
    when:
      - on_property_value: { path: str, expected: "\"$\"==\"this is a str\"" }
  - name: by_profile
    type: app::B
    when:
      - on_profile: prod
      - or
      - on_bean: app::A
  - name: never
    type: app::C
    when:
      - on_property_value: { path: int, expected: "3" }
"#;
    let def = ManifestLoader::parse_manifest(yaml).unwrap();
    let wiring = Builder::build_from_def(&def).unwrap();
    let ctx = wiring.context.unwrap();

    let resolution = wiring.registry.resolve(&ctx).unwrap();
    assert_eq!(resolution.included_names(), vec!["by_template", "by_profile"]);
    assert!(!resolution.is_included("never"));

    let json = serde_json::to_value(&resolution).unwrap();
    assert_eq!(json["included"][0]["type"], "app::A");
}

#[test]
fn test_manifest_with_malformed_expression_fails_resolution() {
    let yaml = r#"
name: bad
context:
  properties: { int: 3 }
components:
  - name: bad
    type: app::Bad
    when:
      - on_property_value: { path: int, expected: "$ >" }
"#;
    let def = ManifestLoader::parse_manifest(yaml).unwrap();
    let wiring = Builder::build_from_def(&def).unwrap();
    let ctx = wiring.context.unwrap();

    let err = wiring.registry.resolve(&ctx).unwrap_err();
    assert!(matches!(
        err,
        WireboxError::Condition(ConditionError::Expression(_))
    ));
}

#[test]
fn test_manifest_dangling_connector_keeps_condition_kind() {
    let yaml = r#"
name: broken
components:
  - name: x
    type: app::X
    when:
      - on_property: a
      - or
"#;
    let def = ManifestLoader::parse_manifest(yaml).unwrap();
    let err = Builder::build_from_def(&def).unwrap_err();

    assert!(matches!(&err, WireboxError::Component { name, .. } if name == "x"));
    assert!(err
        .condition_error()
        .is_some_and(ConditionError::is_dangling_operator));
}

#[test]
fn test_manifest_rejects_non_finite_property() {
    let yaml = r#"
name: inf
context:
  properties:
    limit: .inf
components:
  - name: capped
    type: app::Capped
    when:
      - on_property_value: { path: limit, expected: "$ > 1" }
"#;
    let def = ManifestLoader::parse_manifest(yaml).unwrap();
    let err = Builder::build_from_def(&def).unwrap_err();
    assert!(matches!(err, WireboxError::Config(msg) if msg.contains("'limit'")));
}
