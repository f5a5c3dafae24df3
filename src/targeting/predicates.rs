// src/targeting/predicates.rs

use serde::{Deserialize, Serialize};

use crate::model::context::RequestContext;
use crate::model::targeting_group::TargetingGroup;
use crate::targeting::evaluator::{TargetingEvaluator, TargetingVerdict};

/// 定向谓词类型
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PredicateKind {
    /// 可识别客户（customer_id 非空）
    Recognized,
    /// 市场白名单
    Marketplace { marketplace_ids: Vec<String> },
    /// 客户白名单；客户未知时无法判定
    Customer { customer_ids: Vec<String> },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TargetingPredicate {
    #[serde(flatten)]
    pub kind: PredicateKind,
    #[serde(default)]
    pub inverse: bool,
}

impl TargetingPredicate {
    pub fn new(kind: PredicateKind) -> Self {
        Self { kind, inverse: false }
    }

    pub fn inverted(kind: PredicateKind) -> Self {
        Self { kind, inverse: true }
    }

    pub fn evaluate(&self, context: &RequestContext) -> TargetingVerdict {
        let verdict = match &self.kind {
            PredicateKind::Recognized => TargetingVerdict::from(context.is_recognized()),
            PredicateKind::Marketplace { marketplace_ids } => {
                TargetingVerdict::from(marketplace_ids.iter().any(|id| *id == context.marketplace_id))
            }
            PredicateKind::Customer { customer_ids } => {
                if !context.is_recognized() {
                    TargetingVerdict::Indeterminate
                } else {
                    TargetingVerdict::from(customer_ids.iter().any(|id| *id == context.customer_id))
                }
            }
        };
        if self.inverse {
            verdict.invert()
        } else {
            verdict
        }
    }
}

/// 按谓词求值的定向判定器
/// 任一谓词为 False 则整组为 False；否则有 Indeterminate 则为 Indeterminate；空谓词组视为 True
#[derive(Debug, Clone, Copy, Default)]
pub struct PredicateTargetingEvaluator;

impl TargetingEvaluator for PredicateTargetingEvaluator {
    fn evaluate(&self, context: &RequestContext, group: &TargetingGroup) -> TargetingVerdict {
        let mut verdict = TargetingVerdict::True;
        for predicate in &group.targeting_predicates {
            match predicate.evaluate(context) {
                TargetingVerdict::False => return TargetingVerdict::False,
                TargetingVerdict::Indeterminate => verdict = TargetingVerdict::Indeterminate,
                TargetingVerdict::True => {}
            }
        }
        verdict
    }
}
