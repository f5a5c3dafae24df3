// src/logging/selection_log.rs

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::context::RequestContext;
use crate::selection::policy::RankingPolicy;

/// **广告选择日志**，每次完成选择记录一条
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SelectionLog {
    pub timestamp: String,                  // 记录时间（RFC 3339）
    pub request_id: Uuid,                   // 本次选择的唯一标识
    pub customer_id: String,
    pub marketplace_id: String,
    pub policy: RankingPolicy,
    pub candidate_count: usize,             // 候选广告数
    pub eligible_count: usize,              // 通过定向的广告数
    pub winning_content_id: Option<String>, // None 表示返回空广告
}

impl SelectionLog {
    pub fn new(context: &RequestContext, policy: RankingPolicy) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            request_id: Uuid::new_v4(),
            customer_id: context.customer_id.clone(),
            marketplace_id: context.marketplace_id.clone(),
            policy,
            candidate_count: 0,
            eligible_count: 0,
            winning_content_id: None,
        }
    }

    pub fn set_winner(&mut self, content_id: &str) {
        self.winning_content_id = Some(content_id.to_string());
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
