use crate::core::{Key, Parent, Record};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use thiserror::Error;
use tracing::debug;

/// Error raised while linking records into the tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A record names a parent that is not present anywhere in the input.
    /// Construction aborts; the caller owns referential integrity.
    #[error("record `{child}` references missing parent `{parent}`")]
    MissingParent { child: Key, parent: Key },
}

/// A stored record plus the arena slots of its direct children, in the
/// order they were linked. Never exposed; queries return [Record] clones
/// with the child list stripped.
#[derive(Debug, Clone)]
struct Node {
    record: Record,
    children: Vec<u32>,
}

impl Node {
    fn new(record: Record) -> Self {
        Node {
            record,
            children: Vec::new(),
        }
    }
}

/// Read-mostly index over flat parent-referencing records.
///
/// Nodes live in a registration-order arena; a canonical-key map points at
/// arena slots. Slot order doubles as linking order, which keeps every
/// child list in original input order without an ordered map. The index is
/// immutable once built, so it can be shared read-only across threads.
///
/// # Example
/// ```
/// use treeframe::{Record, TreeIndex};
///
/// let index = TreeIndex::build(vec![
///     Record::new(1, "root"),
///     Record::new(2, 1),
///     Record::new(3, 2),
/// ])
/// .unwrap();
///
/// let chain = index.get_ancestors(3).unwrap();
/// assert_eq!(chain.len(), 2);
/// assert_eq!(chain[0].id, 2.into());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeIndex {
    /// Input records exactly as supplied, backing `all_items`.
    items: Vec<Record>,
    /// Arena of distinct nodes, in first-registration order.
    nodes: Vec<Node>,
    /// Canonical key -> slot in `nodes`.
    slots: FxHashMap<String, u32>,
}

impl TreeIndex {
    /// Builds the index from an ordered sequence of records.
    ///
    /// Registration runs first over the whole input: each record is keyed by
    /// the canonical form of its id, and a duplicate id overwrites the
    /// earlier node in place (last write wins, original slot kept). Linking
    /// then walks the arena in slot order and appends every non-root node to
    /// its parent's child list, so it only starts once all nodes exist.
    ///
    /// # Arguments
    /// * `items` - Flat records in their original order; retained verbatim
    ///
    /// # Returns
    /// The built index, or [BuildError::MissingParent] if any record names a
    /// parent id absent from the input. Cyclic parent chains are not
    /// detected here and make the traversal queries non-terminating.
    pub fn build(items: impl IntoIterator<Item = Record>) -> Result<Self, BuildError> {
        let items: Vec<Record> = items.into_iter().collect();

        let mut nodes: Vec<Node> = Vec::with_capacity(items.len());
        let mut slots: FxHashMap<String, u32> =
            FxHashMap::with_capacity_and_hasher(items.len(), Default::default());

        for record in &items {
            match slots.entry(record.id.canonical().into_owned()) {
                Entry::Occupied(entry) => {
                    nodes[*entry.get() as usize] = Node::new(record.clone());
                }
                Entry::Vacant(entry) => {
                    entry.insert(nodes.len() as u32);
                    nodes.push(Node::new(record.clone()));
                }
            }
        }

        let mut roots = 0usize;
        for slot in 0..nodes.len() {
            let parent = match &nodes[slot].record.parent {
                Parent::Root => {
                    roots += 1;
                    continue;
                }
                Parent::Id(key) => key.clone(),
            };

            let parent_slot = slots.get(parent.canonical().as_ref()).copied().ok_or_else(|| {
                BuildError::MissingParent {
                    child: nodes[slot].record.id.clone(),
                    parent: parent.clone(),
                }
            })?;
            nodes[parent_slot as usize].children.push(slot as u32);
        }

        debug!(
            items = items.len(),
            nodes = nodes.len(),
            roots,
            "indexed flat records"
        );

        Ok(TreeIndex {
            items,
            nodes,
            slots,
        })
    }

    fn slot(&self, id: &Key) -> Option<u32> {
        self.slots.get(id.canonical().as_ref()).copied()
    }

    /// Returns the original input sequence unchanged, duplicates included.
    pub fn all_items(&self) -> &[Record] {
        &self.items
    }

    /// Returns the record registered under `id`, or `None` if the id is
    /// unknown. Duplicated ids resolve to the last record supplied.
    pub fn get_item(&self, id: impl Into<Key>) -> Option<Record> {
        let slot = self.slot(&id.into())?;
        Some(self.nodes[slot as usize].record.clone())
    }

    /// Returns the direct children of `id` in input order, or `None` if the
    /// id is unknown. A childless node yields an empty vector.
    pub fn get_children(&self, id: impl Into<Key>) -> Option<Vec<Record>> {
        let slot = self.slot(&id.into())?;
        let children = self.nodes[slot as usize]
            .children
            .iter()
            .map(|&child| self.nodes[child as usize].record.clone())
            .collect();
        Some(children)
    }

    /// Returns every descendant of `id` in depth-first pre-order: each child
    /// is followed by its own entire subtree before the next sibling.
    ///
    /// Uses an explicit stack so pathologically deep trees cannot overflow
    /// the call stack; the visitation order matches the recursive form.
    /// `None` for an unknown id, an empty vector for a childless node.
    pub fn get_descendants(&self, id: impl Into<Key>) -> Option<Vec<Record>> {
        let slot = self.slot(&id.into())?;

        let mut descendants = Vec::new();
        let mut stack: Vec<u32> = self.nodes[slot as usize]
            .children
            .iter()
            .rev()
            .copied()
            .collect();

        while let Some(next) = stack.pop() {
            let node = &self.nodes[next as usize];
            descendants.push(node.record.clone());
            stack.extend(node.children.iter().rev());
        }

        Some(descendants)
    }

    /// Returns the ancestor chain of `id`, nearest parent first, ending at a
    /// top-level node. `None` for an unknown id, an empty vector for a node
    /// whose own parent is already the root sentinel.
    pub fn get_ancestors(&self, id: impl Into<Key>) -> Option<Vec<Record>> {
        let mut slot = self.slot(&id.into())?;

        let mut ancestors = Vec::new();
        while let Parent::Id(parent) = &self.nodes[slot as usize].record.parent {
            // every parent link was resolved during build
            slot = self.slots[parent.canonical().as_ref()];
            ancestors.push(self.nodes[slot as usize].record.clone());
        }

        Some(ancestors)
    }

    /// Number of distinct indexed nodes; duplicate input ids collapse, so
    /// this can be smaller than `all_items().len()`.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` names an indexed node, under either spelling.
    pub fn contains(&self, id: impl Into<Key>) -> bool {
        self.slot(&id.into()).is_some()
    }

    /// Top-level records (parent is the sentinel), in registration order.
    pub fn roots(&self) -> Vec<Record> {
        self.nodes
            .iter()
            .filter(|node| node.record.parent.is_root())
            .map(|node| node.record.clone())
            .collect()
    }
}
