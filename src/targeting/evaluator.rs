// src/targeting/evaluator.rs

use serde::{Deserialize, Serialize};

use crate::model::context::RequestContext;
use crate::model::targeting_group::TargetingGroup;

/// 定向判定结果（三态）
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TargetingVerdict {
    True,
    False,
    Indeterminate,
}

impl TargetingVerdict {
    /// 只有 `True` 视为命中，`False` 与 `Indeterminate` 都不合格
    pub fn is_true(self) -> bool {
        self == TargetingVerdict::True
    }

    /// 反转：True <-> False，Indeterminate 保持不变
    pub fn invert(self) -> Self {
        match self {
            TargetingVerdict::True => TargetingVerdict::False,
            TargetingVerdict::False => TargetingVerdict::True,
            TargetingVerdict::Indeterminate => TargetingVerdict::Indeterminate,
        }
    }
}

impl From<bool> for TargetingVerdict {
    fn from(value: bool) -> Self {
        if value {
            TargetingVerdict::True
        } else {
            TargetingVerdict::False
        }
    }
}

/// **定向判定器**
/// 对选择引擎而言必须是无副作用的纯函数，可被并发调用
pub trait TargetingEvaluator: Send + Sync {
    fn evaluate(&self, context: &RequestContext, group: &TargetingGroup) -> TargetingVerdict;
}

impl<F> TargetingEvaluator for F
where
    F: Fn(&RequestContext, &TargetingGroup) -> TargetingVerdict + Send + Sync,
{
    fn evaluate(&self, context: &RequestContext, group: &TargetingGroup) -> TargetingVerdict {
        self(context, group)
    }
}
