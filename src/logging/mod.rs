pub mod logger;
pub mod selection_log;
