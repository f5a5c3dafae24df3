pub mod content;
pub mod context;
pub mod targeting_group;
