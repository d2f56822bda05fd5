//! Test utilities for generating record collections and tree shapes.
//!
//! Shared between the unit tests and the criterion benches so both exercise
//! the same patterns: the small canonical fixture, uniform trees with a
//! fixed branching factor, and single deep chains.

use crate::core::{Parent, Record};
use serde_json::{json, Value};

/// The canonical eight-record fixture: one root, two branches, two leaves
/// carrying a null payload.
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new(1, Parent::Root),
        Record::with_kind(2, 1, json!("test")),
        Record::with_kind(3, 1, json!("test")),
        Record::with_kind(4, 2, json!("test")),
        Record::with_kind(5, 2, json!("test")),
        Record::with_kind(6, 2, json!("test")),
        Record::with_kind(7, 4, Value::Null),
        Record::with_kind(8, 4, Value::Null),
    ]
}

/// Configuration for generating a uniform tree, where every node above the
/// leaf level has the same number of children.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Number of levels below the root
    pub depth: usize,
    /// Children per internal node
    pub branching: usize,
}

impl TreeConfig {
    /// Wide, shallow shape: large child lists, short ancestor chains.
    pub fn wide() -> Self {
        Self {
            depth: 3,
            branching: 20,
        }
    }

    /// Narrow, deep shape: binary branching, longer ancestor chains.
    pub fn deep() -> Self {
        Self {
            depth: 12,
            branching: 2,
        }
    }
}

/// Generate a uniform tree in breadth-first order, ids numbered from 1, so
/// every parent appears in the list before its children.
pub fn generate_uniform_tree(config: &TreeConfig) -> Vec<Record> {
    let mut records = vec![Record::new(1, Parent::Root)];
    let mut level: Vec<i64> = vec![1];
    let mut next_id: i64 = 2;

    for _ in 0..config.depth {
        let mut next_level = Vec::with_capacity(level.len() * config.branching);
        for &parent in &level {
            for _ in 0..config.branching {
                records.push(Record::new(next_id, parent));
                next_level.push(next_id);
                next_id += 1;
            }
        }
        level = next_level;
    }

    records
}

/// Generate a single parent chain of `len` records with node 1 at the top.
pub fn generate_chain(len: usize) -> Vec<Record> {
    (1..=len as i64)
        .map(|id| {
            if id == 1 {
                Record::new(1, Parent::Root)
            } else {
                Record::new(id, id - 1)
            }
        })
        .collect()
}
