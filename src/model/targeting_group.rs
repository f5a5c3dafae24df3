// src/model/targeting_group.rs

use serde::{Deserialize, Serialize};

use crate::targeting::predicates::TargetingPredicate;

/// 定向组：隶属于某个广告素材，带点击率和一组定向谓词
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TargetingGroup {
    pub targeting_group_id: String,
    pub content_id: String,
    pub click_through_rate: f64,    // 非负
    #[serde(default)]
    pub targeting_predicates: Vec<TargetingPredicate>,
}

impl TargetingGroup {
    pub fn new(targeting_group_id: &str, content_id: &str, click_through_rate: f64) -> Self {
        Self {
            targeting_group_id: targeting_group_id.to_string(),
            content_id: content_id.to_string(),
            click_through_rate,
            targeting_predicates: Vec::new(),
        }
    }

    pub fn with_predicate(mut self, predicate: TargetingPredicate) -> Self {
        self.targeting_predicates.push(predicate);
        self
    }
}
