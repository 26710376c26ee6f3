// Nested-set numbering and parent-chain walking, no database involved

use std::collections::HashMap;

use redmine_schema::db::tree::{
    compute_bounds, depths, parent_chain, NestedSetBounds, Numbering, TreeError, TreeNode,
    TreeRecord,
};
use redmine_schema::AppError;

fn node(id: i32, parent_id: Option<i32>, key: &str) -> TreeNode<String> {
    TreeNode {
        id,
        parent_id,
        sort_key: key.to_string(),
    }
}

fn by_id(bounds: &[NestedSetBounds]) -> HashMap<i32, NestedSetBounds> {
    bounds.iter().map(|b| (b.id, *b)).collect()
}

#[test]
fn continuous_numbering_orders_siblings_by_key() {
    // 1 "alpha" -> { 3 "beta", 2 "gamma" -> { 4 "delta" } }, 5 "omega"
    let nodes = vec![
        node(5, None, "omega"),
        node(2, Some(1), "gamma"),
        node(1, None, "alpha"),
        node(4, Some(2), "delta"),
        node(3, Some(1), "beta"),
    ];
    let bounds = compute_bounds(&nodes, Numbering::Continuous).unwrap();

    let order: Vec<i32> = bounds.iter().map(|b| b.id).collect();
    assert_eq!(order, vec![1, 3, 2, 4, 5]);

    let b = by_id(&bounds);
    assert_eq!((b[&1].lft, b[&1].rgt), (1, 8));
    assert_eq!((b[&3].lft, b[&3].rgt), (2, 3));
    assert_eq!((b[&2].lft, b[&2].rgt), (4, 7));
    assert_eq!((b[&4].lft, b[&4].rgt), (5, 6));
    assert_eq!((b[&5].lft, b[&5].rgt), (9, 10));
    assert!(bounds.iter().all(|b| b.root_id == 0));
    assert!(b[&1].contains(&b[&4]));
    assert!(!b[&1].contains(&b[&5]));
}

#[test]
fn per_root_numbering_restarts_at_one() {
    let nodes: Vec<TreeNode<i32>> = vec![
        TreeNode { id: 10, parent_id: None, sort_key: 10 },
        TreeNode { id: 11, parent_id: Some(10), sort_key: 11 },
        TreeNode { id: 20, parent_id: None, sort_key: 20 },
        TreeNode { id: 21, parent_id: Some(20), sort_key: 21 },
        TreeNode { id: 22, parent_id: Some(21), sort_key: 22 },
    ];
    let bounds = compute_bounds(&nodes, Numbering::PerRoot).unwrap();
    let b = by_id(&bounds);

    assert_eq!(b[&10], NestedSetBounds { id: 10, root_id: 10, lft: 1, rgt: 4 });
    assert_eq!(b[&11], NestedSetBounds { id: 11, root_id: 10, lft: 2, rgt: 3 });
    assert_eq!(b[&20], NestedSetBounds { id: 20, root_id: 20, lft: 1, rgt: 6 });
    assert_eq!(b[&21], NestedSetBounds { id: 21, root_id: 20, lft: 2, rgt: 5 });
    assert_eq!(b[&22], NestedSetBounds { id: 22, root_id: 20, lft: 3, rgt: 4 });
}

#[test]
fn computed_bounds_nest_children_inside_parents() {
    let nodes = vec![
        node(1, None, "a"),
        node(2, Some(1), "b"),
        node(3, Some(1), "c"),
        node(4, Some(3), "d"),
        node(5, Some(3), "e"),
        node(6, None, "f"),
    ];
    let bounds = compute_bounds(&nodes, Numbering::Continuous).unwrap();
    let b = by_id(&bounds);

    for n in &nodes {
        let own = b[&n.id];
        assert!(own.lft < own.rgt);
        if let Some(parent) = n.parent_id {
            assert!(b[&parent].contains(&own));
            assert!(!own.contains(&b[&parent]));
        }
    }
    assert!(!b[&2].contains(&b[&3]));
    assert!(!b[&3].contains(&b[&2]));
    assert_eq!(b[&1].descendant_count(), 4);
    assert_eq!(b[&3].descendant_count(), 2);
    assert!(b[&2].is_leaf());
    assert!(!b[&3].is_leaf());
}

#[test]
fn missing_parent_is_rejected() {
    let nodes = vec![node(1, None, "a"), node(2, Some(99), "b")];
    let err = compute_bounds(&nodes, Numbering::Continuous).unwrap_err();
    assert_eq!(err, TreeError::MissingParent { id: 2, parent_id: 99 });
}

#[test]
fn cycle_is_rejected() {
    let nodes = vec![
        node(1, None, "a"),
        node(2, Some(3), "b"),
        node(3, Some(2), "c"),
    ];
    let err = compute_bounds(&nodes, Numbering::Continuous).unwrap_err();
    assert_eq!(err, TreeError::Cycle { id: 2 });
}

#[test]
fn duplicate_id_is_rejected() {
    let nodes = vec![node(1, None, "a"), node(1, None, "b")];
    assert_eq!(
        compute_bounds(&nodes, Numbering::Continuous).unwrap_err(),
        TreeError::DuplicateId(1)
    );
}

#[test]
fn empty_forest_has_no_bounds() {
    let nodes: Vec<TreeNode<i32>> = Vec::new();
    assert!(compute_bounds(&nodes, Numbering::PerRoot).unwrap().is_empty());
}

#[test]
fn depths_follow_preorder_bounds() {
    let nodes = vec![
        node(1, None, "a"),
        node(2, Some(1), "b"),
        node(3, Some(2), "c"),
        node(4, Some(1), "d"),
        node(5, None, "e"),
    ];
    let bounds = compute_bounds(&nodes, Numbering::Continuous).unwrap();
    assert_eq!(depths(&bounds), vec![0, 1, 2, 1, 0]);

    let per_root = compute_bounds(&nodes, Numbering::PerRoot).unwrap();
    assert_eq!(depths(&per_root), vec![0, 1, 2, 1, 0]);
}

#[derive(Debug, Clone)]
struct Page {
    id: i32,
    parent_id: Option<i32>,
}

impl TreeRecord for Page {
    fn record_id(&self) -> i32 {
        self.id
    }
    fn parent_record_id(&self) -> Option<i32> {
        self.parent_id
    }
}

fn page_store(pages: &[(i32, Option<i32>)]) -> HashMap<i32, Page> {
    pages
        .iter()
        .map(|&(id, parent_id)| (id, Page { id, parent_id }))
        .collect()
}

#[test]
fn parent_chain_returns_nearest_first_root_last() {
    let store = page_store(&[(1, None), (2, Some(1)), (3, Some(2))]);
    let chain: Vec<i32> = parent_chain(&store[&3], |id| {
        store
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("page {}", id)))
    })
    .unwrap()
    .into_iter()
    .map(|p| p.id)
    .collect();
    assert_eq!(chain, vec![2, 1]);

    let root_chain = parent_chain(&store[&1], |id| {
        store
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("page {}", id)))
    })
    .unwrap();
    assert!(root_chain.is_empty());
}

#[test]
fn parent_chain_detects_cycles() {
    let store = page_store(&[(1, Some(3)), (2, Some(1)), (3, Some(2))]);
    let err = parent_chain(&store[&1], |id| {
        store
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("page {}", id)))
    })
    .unwrap_err();
    assert!(matches!(err, AppError::Hierarchy { .. }));
}

#[test]
fn parent_chain_propagates_lookup_errors() {
    let store = page_store(&[(2, Some(1))]);
    let err = parent_chain(&store[&2], |id| {
        store
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("page {}", id)))
    })
    .unwrap_err();
    assert!(err.is_not_found());
}
