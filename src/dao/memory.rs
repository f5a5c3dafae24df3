// src/dao/memory.rs

use std::collections::HashMap;

use crate::dao::readable::ReadableDao;
use crate::error::DaoResult;
use crate::model::content::AdvertisementContent;
use crate::model::targeting_group::TargetingGroup;

/// 内存数据源：构造时按 key 分组，读取时克隆出列表
#[derive(Debug, Clone)]
pub struct InMemoryDao<V> {
    entries: HashMap<String, Vec<V>>,
}

/// 按 marketplace_id 索引广告素材
pub type InMemoryContentDao = InMemoryDao<AdvertisementContent>;
/// 按 content_id 索引定向组
pub type InMemoryTargetingGroupDao = InMemoryDao<TargetingGroup>;

impl<V> InMemoryDao<V> {
    /// 按 `key_fn` 分组，同一 key 下保持输入顺序
    pub fn grouped_by<F>(values: Vec<V>, key_fn: F) -> Self
    where
        F: Fn(&V) -> &str,
    {
        let mut entries: HashMap<String, Vec<V>> = HashMap::new();
        for value in values {
            let key = key_fn(&value).to_string();
            entries.entry(key).or_default().push(value);
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }
}

impl InMemoryDao<AdvertisementContent> {
    pub fn new(contents: Vec<AdvertisementContent>) -> Self {
        Self::grouped_by(contents, |c| c.marketplace_id.as_str())
    }
}

impl InMemoryDao<TargetingGroup> {
    pub fn new(groups: Vec<TargetingGroup>) -> Self {
        Self::grouped_by(groups, |g| g.content_id.as_str())
    }
}

impl<V> ReadableDao<str, Vec<V>> for InMemoryDao<V>
where
    V: Clone + Send + Sync,
{
    fn get(&self, key: &str) -> DaoResult<Vec<V>> {
        Ok(self.entries.get(key).cloned().unwrap_or_default())
    }
}
