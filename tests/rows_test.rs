//! Tests for the visible-row model

use std::fs;

use rstest::{fixture, rstest};

use treegrid::domain::{attach_paths, visible_rows, ExpansionState, Node};
use treegrid::util::testing;

#[fixture]
fn demo_forest() -> Vec<Node> {
    testing::init_test_setup();
    let raw = fs::read_to_string("tests/resources/groups.json").unwrap();
    let forest: Vec<Node> = serde_json::from_str(&raw).unwrap();
    attach_paths(&forest).unwrap()
}

fn count_nodes(forest: &[Node]) -> usize {
    let mut count = 0;
    let mut stack: Vec<&Node> = forest.iter().collect();
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.children.iter());
    }
    count
}

// ============================================================
// Expand All / Collapse All Tests
// ============================================================

#[rstest]
fn given_expand_all_when_building_rows_then_every_node_is_visible(demo_forest: Vec<Node>) {
    let mut state = ExpansionState::new();
    state.expand_all(&demo_forest);

    let rows = visible_rows(&demo_forest, &state);
    assert_eq!(rows.len(), count_nodes(&demo_forest));
}

#[rstest]
fn given_collapse_all_when_building_rows_then_only_roots_are_visible(demo_forest: Vec<Node>) {
    let mut state = ExpansionState::new();
    state.expand_all(&demo_forest);
    state.collapse_all();

    let rows = visible_rows(&demo_forest, &state);
    assert_eq!(rows.len(), demo_forest.len());
    assert_eq!(rows[0].node.id, "1");
}

#[test]
fn given_three_node_chain_when_expand_all_then_collapse_all_then_only_root_remains() {
    let chain = Node::new("1", "Root").with_children(vec![
        Node::new("1-1", "Mid").with_children(vec![Node::new("1-1-1", "Leaf")]),
    ]);
    let forest = attach_paths(&[chain]).unwrap();

    let mut state = ExpansionState::new();
    state.expand_all(&forest);
    assert_eq!(visible_rows(&forest, &state).len(), 3);

    state.collapse_all();
    let rows = visible_rows(&forest, &state);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].node.id, "1");
}

// ============================================================
// Seeded State Tests
// ============================================================

#[test]
fn given_seeded_parent_when_building_rows_then_child_is_visible() {
    let forest =
        attach_paths(&[Node::new("1", "Root").with_children(vec![Node::new("1-1", "Child")])])
            .unwrap();

    let seeded = ExpansionState::from_seed([("1".to_string(), true)]);
    let ids: Vec<&str> = visible_rows(&forest, &seeded)
        .iter()
        .map(|r| r.node.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1", "1-1"]);

    let empty = ExpansionState::new();
    let ids: Vec<&str> = visible_rows(&forest, &empty)
        .iter()
        .map(|r| r.node.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1"]);
}

#[rstest]
fn given_preexpanded_fixture_when_building_rows_then_preorder_matches(demo_forest: Vec<Node>) {
    let raw = fs::read_to_string("tests/resources/preexpanded.json").unwrap();
    let state: ExpansionState = serde_json::from_str(&raw).unwrap();

    let ids: Vec<&str> = visible_rows(&demo_forest, &state)
        .iter()
        .map(|r| r.node.id.as_str())
        .collect();
    // Global and Europe open: Europe's children appear, deeper levels stay hidden
    assert_eq!(
        ids,
        vec!["1", "1-1", "1-1-1", "1-1-2", "1-1-3", "1-2", "1-3"]
    );
}

// ============================================================
// Hidden Descendant Tests
// ============================================================

#[rstest]
fn given_expanded_descendants_under_collapsed_ancestor_then_they_stay_hidden(
    demo_forest: Vec<Node>,
) {
    // Everything below Europe is marked expanded, but Europe itself is not
    let state = ExpansionState::from_seed([
        ("1".to_string(), true),
        ("1-1-1".to_string(), true),
        ("1-1-1-1".to_string(), true),
    ]);

    let ids: Vec<&str> = visible_rows(&demo_forest, &state)
        .iter()
        .map(|r| r.node.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1", "1-1", "1-2", "1-3"]);
}

// ============================================================
// Row Invariant Tests
// ============================================================

#[rstest]
fn given_full_expansion_when_building_rows_then_depth_equals_path_len(demo_forest: Vec<Node>) {
    let mut state = ExpansionState::new();
    state.expand_all(&demo_forest);

    for row in visible_rows(&demo_forest, &state) {
        assert_eq!(row.depth, row.node.path.len(), "row {}", row.node.id);
        assert_eq!(row.can_expand, !row.node.children.is_empty());
    }
}

#[rstest]
fn given_identical_inputs_when_building_rows_twice_then_sequences_match(demo_forest: Vec<Node>) {
    let state = ExpansionState::from_seed([("1".to_string(), true), ("1-2".to_string(), true)]);

    let first: Vec<(String, usize)> = visible_rows(&demo_forest, &state)
        .iter()
        .map(|r| (r.node.id.clone(), r.depth))
        .collect();
    let second: Vec<(String, usize)> = visible_rows(&demo_forest, &state)
        .iter()
        .map(|r| (r.node.id.clone(), r.depth))
        .collect();
    assert_eq!(first, second);
}

#[rstest]
fn given_toggle_of_unknown_id_when_building_rows_then_nothing_changes(demo_forest: Vec<Node>) {
    let mut state = ExpansionState::new();
    let before = visible_rows(&demo_forest, &state).len();

    state.toggle("no-such-node");
    // Unknown ids are recorded but never match a node, so rows are unaffected
    let after = visible_rows(&demo_forest, &state).len();
    assert_eq!(before, after);
}
