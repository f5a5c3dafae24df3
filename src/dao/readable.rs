// src/dao/readable.rs

use crate::error::DaoResult;

/// **只读数据源**
/// 找不到 key 时返回空列表（`Ok(vec![])`），`Err` 只用于真实的读取故障
pub trait ReadableDao<K: ?Sized, V>: Send + Sync {
    fn get(&self, key: &K) -> DaoResult<V>;
}
