// src/dao/adapters.rs

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::dao::memory::{InMemoryContentDao, InMemoryTargetingGroupDao};
use crate::error::{DaoError, DaoResult};
use crate::model::content::AdvertisementContent;
use crate::model::targeting_group::TargetingGroup;

/// 从 JSON 文件读取广告素材与定向组
/// 文件内容均为 JSON 数组；读取或解析失败直接报错，不会静默返回空列表
pub struct FileContentAdapter {
    pub content_file: String,
    pub targeting_file: String,
}

impl FileContentAdapter {
    pub fn new(content_file: &str, targeting_file: &str) -> Self {
        Self {
            content_file: content_file.to_string(),
            targeting_file: targeting_file.to_string(),
        }
    }

    pub fn load_contents(&self) -> DaoResult<Vec<AdvertisementContent>> {
        let contents: Vec<AdvertisementContent> = read_json_array(&self.content_file)?;
        if let Some(bad) = contents.iter().find(|c| c.content_id.is_empty()) {
            return Err(DaoError::InvalidRecord(format!(
                "content in marketplace {} has an empty content_id",
                bad.marketplace_id
            )));
        }
        Ok(contents)
    }

    pub fn load_targeting_groups(&self) -> DaoResult<Vec<TargetingGroup>> {
        let groups: Vec<TargetingGroup> = read_json_array(&self.targeting_file)?;
        for group in &groups {
            let ctr = group.click_through_rate;
            if !ctr.is_finite() || ctr < 0.0 {
                return Err(DaoError::InvalidRecord(format!(
                    "targeting group {} has invalid click_through_rate {}",
                    group.targeting_group_id, ctr
                )));
            }
        }
        Ok(groups)
    }

    /// 一次性加载两份文件，构造内存数据源
    pub fn load(&self) -> DaoResult<(InMemoryContentDao, InMemoryTargetingGroupDao)> {
        let contents = self.load_contents()?;
        let groups = self.load_targeting_groups()?;
        info!(
            content_file = %self.content_file,
            targeting_file = %self.targeting_file,
            contents = contents.len(),
            targeting_groups = groups.len(),
            "Loaded advertisement data"
        );
        Ok((InMemoryContentDao::new(contents), InMemoryTargetingGroupDao::new(groups)))
    }
}

fn read_json_array<T: DeserializeOwned>(path: &str) -> DaoResult<Vec<T>> {
    let content = fs::read_to_string(Path::new(path)).map_err(|source| DaoError::Io {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DaoError::Parse {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::readable::ReadableDao;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_contents_and_groups() {
        let contents = write_temp(
            r#"[{"content_id":"a","marketplace_id":"1","renderable_content":"<b>A</b>"}]"#,
        );
        let groups = write_temp(
            r#"[{"targeting_group_id":"g1","content_id":"a","click_through_rate":0.25,
                 "targeting_predicates":[{"kind":"recognized"}]}]"#,
        );
        let adapter = FileContentAdapter::new(
            contents.path().to_str().unwrap(),
            groups.path().to_str().unwrap(),
        );
        let (content_dao, group_dao) = adapter.load().unwrap();
        assert_eq!(content_dao.get("1").unwrap()[0].renderable_content, "<b>A</b>");
        assert_eq!(group_dao.get("a").unwrap()[0].targeting_predicates.len(), 1);
    }

    #[test]
    fn rejects_negative_ctr() {
        let contents = write_temp("[]");
        let groups = write_temp(
            r#"[{"targeting_group_id":"g1","content_id":"a","click_through_rate":-0.5}]"#,
        );
        let adapter = FileContentAdapter::new(
            contents.path().to_str().unwrap(),
            groups.path().to_str().unwrap(),
        );
        assert!(matches!(adapter.load(), Err(DaoError::InvalidRecord(_))));
    }

    #[test]
    fn missing_and_malformed_files_are_errors() {
        let adapter = FileContentAdapter::new("/nonexistent/content.json", "/nonexistent/t.json");
        assert!(matches!(adapter.load_contents(), Err(DaoError::Io { .. })));

        let broken = write_temp("{not json");
        let adapter = FileContentAdapter::new(broken.path().to_str().unwrap(), "");
        assert!(matches!(adapter.load_contents(), Err(DaoError::Parse { .. })));
    }
}
