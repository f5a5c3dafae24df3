// src/selection/engine.rs

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, warn, Level};

use crate::dao::readable::ReadableDao;
use crate::error::DaoResult;
use crate::logging::selection_log::SelectionLog;
use crate::model::content::{AdvertisementContent, GeneratedAdvertisement};
use crate::model::context::RequestContext;
use crate::model::targeting_group::TargetingGroup;
use crate::selection::policy::{RankedCandidate, RankingPolicy};
use crate::targeting::evaluator::TargetingEvaluator;

/// 按 marketplace_id 读取候选广告
pub type ContentDao = dyn ReadableDao<str, Vec<AdvertisementContent>>;
/// 按 content_id 读取定向组
pub type TargetingGroupDao = dyn ReadableDao<str, Vec<TargetingGroup>>;

/// **广告选择引擎**
///
/// 读取候选广告，逐个判定定向组，再按排序策略挑出唯一的广告。
/// 引擎本身不持有任何可变状态，可以在多个线程间共享；
/// 随机源要么由调用方按次传入，要么使用线程本地的 `thread_rng`。
#[derive(Clone)]
pub struct AdvertisementSelector {
    content_dao: Arc<ContentDao>,
    targeting_group_dao: Arc<TargetingGroupDao>,
    evaluator: Arc<dyn TargetingEvaluator>,
    policy: RankingPolicy,
}

impl AdvertisementSelector {
    pub fn new(
        content_dao: Arc<ContentDao>,
        targeting_group_dao: Arc<TargetingGroupDao>,
        evaluator: Arc<dyn TargetingEvaluator>,
        policy: RankingPolicy,
    ) -> Self {
        Self {
            content_dao,
            targeting_group_dao,
            evaluator,
            policy,
        }
    }

    pub fn policy(&self) -> RankingPolicy {
        self.policy
    }

    /// 选出要渲染的广告，随机策略使用线程本地随机源
    pub fn select_advertisement(
        &self,
        customer_id: &str,
        marketplace_id: &str,
    ) -> DaoResult<GeneratedAdvertisement> {
        self.select_advertisement_with_rng(customer_id, marketplace_id, &mut rand::thread_rng())
    }

    /// 选出要渲染的广告
    ///
    /// - marketplace_id 为空：告警并直接返回空广告，不访问数据源
    /// - 没有任何合格候选：返回空广告
    /// - 数据源读取失败：错误原样返回
    pub fn select_advertisement_with_rng<R: Rng>(
        &self,
        customer_id: &str,
        marketplace_id: &str,
        rng: &mut R,
    ) -> DaoResult<GeneratedAdvertisement> {
        if marketplace_id.is_empty() {
            warn!(customer_id, "MarketplaceId cannot be empty. Returning empty ad.");
            return Ok(GeneratedAdvertisement::Empty);
        }

        let context = RequestContext::new(customer_id, marketplace_id);
        let contents = self.content_dao.get(marketplace_id)?;

        let mut eligible = Vec::new();
        for content in &contents {
            let groups = self.targeting_group_dao.get(&content.content_id)?;
            if let Some(best_click_through_rate) = self.eligible_score(&context, &groups) {
                eligible.push(RankedCandidate {
                    item: content,
                    best_click_through_rate,
                });
            }
        }

        let winner = self
            .policy
            .pick(&eligible, rng)
            .map(|index| eligible[index].item.clone());

        if tracing::enabled!(Level::DEBUG) {
            let mut log = SelectionLog::new(&context, self.policy);
            log.candidate_count = contents.len();
            log.eligible_count = eligible.len();
            if let Some(content) = &winner {
                log.set_winner(&content.content_id);
            }
            debug!(selection = %log.to_json(), "advertisement selection finished");
        }

        Ok(winner.map_or(GeneratedAdvertisement::Empty, GeneratedAdvertisement::Content))
    }

    /// 至少一个定向组判定为 True 时合格，返回所有定向组中的最高点击率
    fn eligible_score(&self, context: &RequestContext, groups: &[TargetingGroup]) -> Option<f64> {
        let eligible = groups
            .iter()
            .any(|group| self.evaluator.evaluate(context, group).is_true());
        if !eligible {
            return None;
        }
        groups
            .iter()
            .map(|group| group.click_through_rate)
            .reduce(f64::max)
    }
}
