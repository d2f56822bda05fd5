pub mod index;

pub use index::{BuildError, TreeIndex};
