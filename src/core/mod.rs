pub mod key;
pub mod record;

pub use key::Key;
pub use record::{Parent, Record, ROOT_SENTINEL};
