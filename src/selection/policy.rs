// src/selection/policy.rs

use std::fmt;

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 合格候选及其所有定向组中的最高点击率
#[derive(Debug, Clone, Copy)]
pub struct RankedCandidate<'a, T> {
    pub item: &'a T,
    pub best_click_through_rate: f64,
}

/// **排序策略**
/// 每个引擎实例构造时固定一种，不会混用
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RankingPolicy {
    /// 选最高点击率，平分时取候选列表中靠前者
    #[default]
    HighestClickThroughRate,
    /// 在合格候选中均匀随机
    UniformRandom,
}

impl RankingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingPolicy::HighestClickThroughRate => "highest_click_through_rate",
            RankingPolicy::UniformRandom => "uniform_random",
        }
    }

    /// 从合格候选中挑出唯一胜出者的下标；候选为空时返回 None
    /// `candidates` 必须保持原始候选列表的相对顺序
    pub fn pick<T, R: Rng>(
        &self,
        candidates: &[RankedCandidate<'_, T>],
        rng: &mut R,
    ) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        match self {
            RankingPolicy::HighestClickThroughRate => {
                let mut best = 0;
                for (index, candidate) in candidates.iter().enumerate().skip(1) {
                    // 严格大于：平分保留先出现者
                    if candidate.best_click_through_rate > candidates[best].best_click_through_rate {
                        best = index;
                    }
                }
                Some(best)
            }
            RankingPolicy::UniformRandom => Some(rng.gen_range(0..candidates.len())),
        }
    }
}

impl fmt::Display for RankingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
