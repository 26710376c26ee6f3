//! Self-referencing hierarchies.
//!
//! Projects and issues keep a nested-set encoding (`lft`/`rgt`, plus `root_id`
//! for issues) next to their `parent_id`. The bounds are derived data: this
//! module recomputes them from the parent references, and walks parent chains
//! for the tables that only store `parent_id`.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::db::models::{Board, Enumeration, Issue, Message, Project, WikiPage};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedSetBounds {
    pub id: i32,
    pub root_id: i32,
    pub lft: i32,
    pub rgt: i32,
}

impl NestedSetBounds {
    /// True when `other` is this node or one of its descendants.
    pub fn contains(&self, other: &NestedSetBounds) -> bool {
        self.root_id == other.root_id && self.lft <= other.lft && other.rgt <= self.rgt
    }

    pub fn is_leaf(&self) -> bool {
        self.rgt == self.lft + 1
    }

    pub fn descendant_count(&self) -> i32 {
        (self.rgt - self.lft - 1) / 2
    }
}

/// How bounds are numbered across a forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numbering {
    /// One sequence for the whole forest (projects). Every node is tagged
    /// with root id 0.
    Continuous,
    /// Every root starts again at 1 and tags its subtree with its id (issues).
    PerRoot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<K> {
    pub id: i32,
    pub parent_id: Option<i32>,
    /// Sibling order; ties fall back to the id.
    pub sort_key: K,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("node {id} references missing parent {parent_id}")]
    MissingParent { id: i32, parent_id: i32 },

    #[error("node {id} is part of a parent cycle")]
    Cycle { id: i32 },

    #[error("node {0} appears more than once")]
    DuplicateId(i32),
}

impl From<TreeError> for AppError {
    fn from(err: TreeError) -> Self {
        AppError::hierarchy(err.to_string())
    }
}

/// Computes nested-set bounds for every node, returned in pre-order.
pub fn compute_bounds<K: Ord>(
    nodes: &[TreeNode<K>],
    numbering: Numbering,
) -> Result<Vec<NestedSetBounds>, TreeError> {
    let mut index: HashMap<i32, usize> = HashMap::with_capacity(nodes.len());
    for (i, node) in nodes.iter().enumerate() {
        if index.insert(node.id, i).is_some() {
            return Err(TreeError::DuplicateId(node.id));
        }
    }

    let mut roots: Vec<usize> = Vec::new();
    let mut children: HashMap<i32, Vec<usize>> = HashMap::new();
    for (i, node) in nodes.iter().enumerate() {
        match node.parent_id {
            None => roots.push(i),
            Some(parent_id) => {
                if !index.contains_key(&parent_id) {
                    return Err(TreeError::MissingParent {
                        id: node.id,
                        parent_id,
                    });
                }
                children.entry(parent_id).or_default().push(i);
            }
        }
    }

    let by_key = |a: &usize, b: &usize| {
        nodes[*a]
            .sort_key
            .cmp(&nodes[*b].sort_key)
            .then(nodes[*a].id.cmp(&nodes[*b].id))
    };
    roots.sort_by(by_key);
    for siblings in children.values_mut() {
        siblings.sort_by(by_key);
    }

    let mut out: Vec<NestedSetBounds> = Vec::with_capacity(nodes.len());
    let mut counter = 0;
    for &root in &roots {
        if numbering == Numbering::PerRoot {
            counter = 0;
        }
        let root_id = match numbering {
            Numbering::Continuous => 0,
            Numbering::PerRoot => nodes[root].id,
        };

        // (node index, position in `out`, next child to visit)
        let mut stack: Vec<(usize, usize, usize)> = Vec::new();
        counter += 1;
        out.push(NestedSetBounds {
            id: nodes[root].id,
            root_id,
            lft: counter,
            rgt: 0,
        });
        stack.push((root, out.len() - 1, 0));

        while let Some(top) = stack.last_mut() {
            let (node, slot, next) = *top;
            let kids = children.get(&nodes[node].id);
            match kids.and_then(|k| k.get(next)) {
                Some(&child) => {
                    top.2 += 1;
                    counter += 1;
                    out.push(NestedSetBounds {
                        id: nodes[child].id,
                        root_id,
                        lft: counter,
                        rgt: 0,
                    });
                    stack.push((child, out.len() - 1, 0));
                }
                None => {
                    counter += 1;
                    out[slot].rgt = counter;
                    stack.pop();
                }
            }
        }
    }

    if out.len() < nodes.len() {
        let reached: HashSet<i32> = out.iter().map(|b| b.id).collect();
        let stuck = nodes
            .iter()
            .filter(|n| !reached.contains(&n.id))
            .map(|n| n.id)
            .min()
            .unwrap_or_default();
        return Err(TreeError::Cycle { id: stuck });
    }

    Ok(out)
}

/// Depth of each node of a pre-ordered bounds list (roots are 0).
pub fn depths(ordered: &[NestedSetBounds]) -> Vec<usize> {
    let mut open: Vec<(i32, i32)> = Vec::new();
    ordered
        .iter()
        .map(|b| {
            while let Some(&(root_id, rgt)) = open.last() {
                if root_id != b.root_id || rgt < b.lft {
                    open.pop();
                } else {
                    break;
                }
            }
            let depth = open.len();
            open.push((b.root_id, b.rgt));
            depth
        })
        .collect()
}

/// A record that points at its parent through `parent_id`.
pub trait TreeRecord {
    fn record_id(&self) -> i32;
    fn parent_record_id(&self) -> Option<i32>;
}

/// Loads ancestors of `start`, nearest first and root last.
pub fn parent_chain<T, E, F>(start: &T, mut load: F) -> Result<Vec<T>, E>
where
    T: TreeRecord,
    E: From<TreeError>,
    F: FnMut(i32) -> Result<T, E>,
{
    let mut seen = HashSet::from([start.record_id()]);
    let mut chain = Vec::new();
    let mut next = start.parent_record_id();
    while let Some(parent_id) = next {
        if !seen.insert(parent_id) {
            return Err(TreeError::Cycle { id: parent_id }.into());
        }
        let parent = load(parent_id)?;
        next = parent.parent_record_id();
        chain.push(parent);
    }
    Ok(chain)
}

impl TreeRecord for Project {
    fn record_id(&self) -> i32 {
        self.id
    }
    fn parent_record_id(&self) -> Option<i32> {
        self.parent_id
    }
}

impl TreeRecord for Issue {
    fn record_id(&self) -> i32 {
        self.id
    }
    fn parent_record_id(&self) -> Option<i32> {
        self.parent_id
    }
}

impl TreeRecord for WikiPage {
    fn record_id(&self) -> i32 {
        self.id
    }
    fn parent_record_id(&self) -> Option<i32> {
        self.parent_id
    }
}

impl TreeRecord for Message {
    fn record_id(&self) -> i32 {
        self.id
    }
    fn parent_record_id(&self) -> Option<i32> {
        self.parent_id
    }
}

impl TreeRecord for Board {
    fn record_id(&self) -> i32 {
        self.id
    }
    fn parent_record_id(&self) -> Option<i32> {
        self.parent_id
    }
}

impl TreeRecord for Enumeration {
    fn record_id(&self) -> i32 {
        self.id
    }
    fn parent_record_id(&self) -> Option<i32> {
        self.parent_id
    }
}
