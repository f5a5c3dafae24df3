//! 广告选择核心：按投放定向过滤候选广告，并按点击率或均匀随机挑选唯一胜出者。

pub mod config;
pub mod dao;
pub mod error;
pub mod logging;
pub mod model;
pub mod selection;
pub mod targeting;

pub use error::{ConfigError, DaoError, DaoResult};
pub use model::content::{AdvertisementContent, GeneratedAdvertisement};
pub use model::context::RequestContext;
pub use model::targeting_group::TargetingGroup;
pub use selection::engine::AdvertisementSelector;
pub use selection::policy::RankingPolicy;
pub use targeting::evaluator::{TargetingEvaluator, TargetingVerdict};
