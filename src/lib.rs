//! Read-mostly tree index over flat parent-referencing records.
//!
//! A [TreeIndex] is built once from an ordered list of [Record]s, each
//! naming its own id and its parent's id (or the `"root"` sentinel), and
//! then answers id lookups, direct-children listings, full descendant sets
//! in pre-order, and ancestor chains, in any order and volume, without
//! rebuilding.

pub mod core;
pub mod test_utils;
pub mod tree;

pub use crate::core::{Key, Parent, Record, ROOT_SENTINEL};
pub use crate::tree::{BuildError, TreeIndex};

#[cfg(test)]
mod tests {
    use crate::{Record, TreeIndex};

    #[test]
    fn test_basic_functionality() {
        let index = TreeIndex::build(vec![
            Record::new(1, "root"),
            Record::new(2, 1),
            Record::new(3, 1),
        ])
        .unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.get_children(1).unwrap().len(), 2);
        assert_eq!(index.get_ancestors(3).unwrap().len(), 1);
        assert_eq!(index.get_item(4), None);
    }
}
