pub mod adapters;
pub mod memory;
pub mod readable;

pub use adapters::FileContentAdapter;
pub use memory::{InMemoryContentDao, InMemoryDao, InMemoryTargetingGroupDao};
pub use readable::ReadableDao;
