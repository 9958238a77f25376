//! End-to-end tests from criteria text to compiled predicates.
//!
//! These exercise the full parse-then-compile path the search entry point
//! uses, with stub resolvers standing in for the host's player list and
//! registry cache.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use uuid::Uuid;
use worldlog_criteria::{
    compile, BindValue, CriteriaError, CriteriaParser, InvokerContext, PlayerDirectory,
};
use worldlog_types::{BlockPos, Category, RegistryId, RegistryResolver};

struct StubDirectory {
    alice: Uuid,
}

impl PlayerDirectory for StubDirectory {
    fn resolve(&self, selector: &str) -> Vec<Uuid> {
        if selector == "Alice" {
            vec![self.alice]
        } else {
            Vec::new()
        }
    }
}

fn fixture() -> (CriteriaParser, Uuid) {
    let registry = Arc::new(RegistryResolver::new());
    registry.insert("minecraft:stone", RegistryId::from(4));
    registry.insert("minecraft:overworld", RegistryId::from(1));
    registry.insert("minecraft:the_nether", RegistryId::from(2));
    let alice = Uuid::new_v4();
    let parser = CriteriaParser::new(registry, Arc::new(StubDirectory { alice }));
    (parser, alice)
}

fn overworld_invoker(x: i32, y: i32, z: i32) -> InvokerContext {
    InvokerContext {
        position: BlockPos::new(x, y, z),
        dimension: RegistryId::from(1),
    }
}

#[test]
fn scenario_from_text_to_placement_predicate() {
    let (parser, alice) = fixture();
    let criteria = parser
        .parse("target:Alice block:minecraft:stone range:10 action:broken")
        .unwrap();
    let compiled = compile(&criteria, &overworld_invoker(100, 64, 200)).unwrap();

    assert_eq!(compiled.dispatch, &[Category::Placement]);
    assert_eq!(compiled.limit, 10);
    let sql = compiled.placement.where_sql();
    assert!(sql.ends_with("placed = FALSE"));
    assert!(sql.contains("x BETWEEN"));
    assert_eq!(
        compiled.placement.binds().first(),
        Some(&BindValue::Uuids(vec![alice]))
    );
    // Cube corners around (100, 64, 200) with radius 10, faces inclusive.
    assert!(compiled.placement.binds().contains(&BindValue::Int(90)));
    assert!(compiled.placement.binds().contains(&BindValue::Int(110)));
    assert!(compiled.placement.binds().contains(&BindValue::Int(210)));
}

#[test]
fn invalid_action_text_fails_at_compile_not_parse() {
    let (parser, _) = fixture();
    let criteria = parser.parse("action:flying").unwrap();
    let err = compile(&criteria, &overworld_invoker(0, 0, 0)).unwrap_err();
    assert_eq!(err, CriteriaError::InvalidAction("flying".to_owned()));
    assert_eq!(err.to_string(), "invalid action: flying");
}

#[test]
fn explicit_dimension_replaces_the_invoker_dimension() {
    let (parser, _) = fixture();
    let criteria = parser.parse("dimension:minecraft:the_nether").unwrap();
    let compiled = compile(&criteria, &overworld_invoker(0, 0, 0)).unwrap();
    assert_eq!(compiled.grief.binds(), &[BindValue::Int(2)]);
}

#[test]
fn quoted_target_resolves_like_a_bare_one() {
    let (parser, alice) = fixture();
    let criteria = parser.parse("target:\"Alice\"").unwrap();
    assert_eq!(criteria.targets, Some(vec![alice]));
}

#[test]
fn default_dispatch_never_touches_grief() {
    let (parser, _) = fixture();
    let criteria = parser.parse("limit:3").unwrap();
    let compiled = compile(&criteria, &overworld_invoker(0, 0, 0)).unwrap();
    assert!(!compiled.dispatch.contains(&Category::Grief));
    assert_eq!(compiled.limit, 3);
}
