// src/config/config_manager.rs

use std::fs;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::dao::adapters::FileContentAdapter;
use crate::error::{ConfigError, DaoResult};
use crate::selection::engine::AdvertisementSelector;
use crate::selection::policy::RankingPolicy;
use crate::targeting::predicates::PredicateTargetingEvaluator;

pub const DEFAULT_CONTENT_FILE: &str = "static/content.json";
pub const DEFAULT_TARGETING_FILE: &str = "static/targeting_groups.json";

/// 选择服务配置，可从 JSON 文件读取，缺省字段使用默认值
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SelectionConfig {
    pub policy: RankingPolicy,
    pub seed: Option<u64>,          // 随机策略的种子，None 表示使用熵源
    pub content_file: String,       // 广告素材 JSON
    pub targeting_file: String,     // 定向组 JSON
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            policy: RankingPolicy::default(),
            seed: None,
            content_file: DEFAULT_CONTENT_FILE.to_string(),
            targeting_file: DEFAULT_TARGETING_FILE.to_string(),
        }
    }
}

/// 命令行传入的覆盖项，优先级高于配置文件
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub policy: Option<RankingPolicy>,
    pub seed: Option<u64>,
    pub content_file: Option<String>,
    pub targeting_file: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ConfigManager {
    config: SelectionConfig,
}

impl ConfigManager {
    pub fn new(config: SelectionConfig) -> Result<Self, ConfigError> {
        if config.content_file.trim().is_empty() {
            return Err(ConfigError::Invalid("content_file must not be empty".to_string()));
        }
        if config.targeting_file.trim().is_empty() {
            return Err(ConfigError::Invalid("targeting_file must not be empty".to_string()));
        }
        Ok(ConfigManager { config })
    }

    pub fn from_file(path: &str) -> Result<SelectionConfig, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 先读配置文件（可选），再叠加命令行覆盖项
    pub fn resolve(config_file: Option<&str>, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => SelectionConfig::default(),
        };
        if let Some(policy) = overrides.policy {
            config.policy = policy;
        }
        if overrides.seed.is_some() {
            config.seed = overrides.seed;
        }
        if let Some(content_file) = overrides.content_file {
            config.content_file = content_file;
        }
        if let Some(targeting_file) = overrides.targeting_file {
            config.targeting_file = targeting_file;
        }
        Self::new(config)
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// 从配置的数据文件构造选择引擎
    pub fn build_selector(&self) -> DaoResult<AdvertisementSelector> {
        let adapter = FileContentAdapter::new(&self.config.content_file, &self.config.targeting_file);
        let (content_dao, targeting_group_dao) = adapter.load()?;
        Ok(AdvertisementSelector::new(
            Arc::new(content_dao),
            Arc::new(targeting_group_dao),
            Arc::new(PredicateTargetingEvaluator),
            self.config.policy,
        ))
    }

    pub fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn cli_overrides_win_over_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"policy":"uniform_random","seed":3,"content_file":"a.json"}}"#).unwrap();

        let manager = ConfigManager::resolve(
            file.path().to_str(),
            ConfigOverrides {
                seed: Some(9),
                ..ConfigOverrides::default()
            },
        )
        .unwrap();
        let config = manager.config();
        assert_eq!(config.policy, RankingPolicy::UniformRandom);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.content_file, "a.json");
        assert_eq!(config.targeting_file, DEFAULT_TARGETING_FILE);
    }

    #[test]
    fn defaults_without_file() {
        let manager = ConfigManager::resolve(None, ConfigOverrides::default()).unwrap();
        assert_eq!(manager.config(), &SelectionConfig::default());
    }

    #[test]
    fn rejects_empty_paths() {
        let overrides = ConfigOverrides {
            targeting_file: Some("  ".to_string()),
            ..ConfigOverrides::default()
        };
        assert!(matches!(
            ConfigManager::resolve(None, overrides),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "policy = nope").unwrap();
        assert!(matches!(
            ConfigManager::from_file(file.path().to_str().unwrap()),
            Err(ConfigError::Parse(_))
        ));
    }
}
