// src/model/context.rs

use serde::{Deserialize, Serialize};

/// 单次选择请求的上下文，仅用于定向判定
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// 客户 ID，不做校验，允许为空
    pub customer_id: String,
    /// 市场 ID
    pub marketplace_id: String,
}

impl RequestContext {
    pub fn new(customer_id: &str, marketplace_id: &str) -> Self {
        Self {
            customer_id: customer_id.to_string(),
            marketplace_id: marketplace_id.to_string(),
        }
    }

    /// 客户是否可识别（customer_id 非空）
    pub fn is_recognized(&self) -> bool {
        !self.customer_id.is_empty()
    }
}
