// src/model/content.rs

use serde::{Deserialize, Serialize};

/// 广告素材，渲染内容对选择逻辑是不透明的
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AdvertisementContent {
    pub content_id: String,
    pub marketplace_id: String,
    #[serde(default)]
    pub renderable_content: String,
}

impl AdvertisementContent {
    pub fn new(content_id: &str, marketplace_id: &str, renderable_content: &str) -> Self {
        Self {
            content_id: content_id.to_string(),
            marketplace_id: marketplace_id.to_string(),
            renderable_content: renderable_content.to_string(),
        }
    }
}

/// **选择结果**
/// 要么是选中的广告素材，要么是显式的空广告
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratedAdvertisement {
    Content(AdvertisementContent),
    Empty,
}

impl GeneratedAdvertisement {
    pub fn content(&self) -> Option<&AdvertisementContent> {
        match self {
            GeneratedAdvertisement::Content(content) => Some(content),
            GeneratedAdvertisement::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, GeneratedAdvertisement::Empty)
    }

    pub fn content_id(&self) -> Option<&str> {
        self.content().map(|c| c.content_id.as_str())
    }
}

impl From<AdvertisementContent> for GeneratedAdvertisement {
    fn from(content: AdvertisementContent) -> Self {
        GeneratedAdvertisement::Content(content)
    }
}
