//! 搜索配置
//!
//! 难度决定搜索深度和（困难模式下的）时间预算。配置一经创建不再修改，
//! 更换难度时重新创建。

use std::path::Path;
use std::time::Duration;

use gomoku_core::Difficulty;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::movegen::MAX_CANDIDATES;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 解析错误
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// 搜索深度不合法
    #[error("Invalid search depth: {depth}")]
    InvalidDepth { depth: u8 },

    /// 候选数量上限不合法
    #[error("Invalid candidate cap: {cap}")]
    InvalidCandidateCap { cap: usize },
}

/// 搜索配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub difficulty: Difficulty,
    pub max_depth: u8,
    /// 迭代加深的时间预算，None 表示固定深度搜索
    pub time_budget_ms: Option<u64>,
    pub max_candidates: usize,
}

/// 配置文件中的覆盖项，缺省字段沿用难度预设
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SearchConfigOverrides {
    #[serde(default)]
    difficulty: Option<Difficulty>,
    #[serde(default)]
    max_depth: Option<u8>,
    #[serde(default, deserialize_with = "present")]
    time_budget_ms: Option<Option<u64>>,
    #[serde(default)]
    max_candidates: Option<usize>,
}

/// 区分“字段缺省”和“显式 null”
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl SearchConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                difficulty,
                max_depth: 2,
                time_budget_ms: None,
                max_candidates: MAX_CANDIDATES,
            },
            Difficulty::Medium => Self {
                difficulty,
                max_depth: 4,
                time_budget_ms: None,
                max_candidates: MAX_CANDIDATES,
            },
            Difficulty::Hard => Self {
                difficulty,
                max_depth: 5,
                time_budget_ms: Some(3000),
                max_candidates: MAX_CANDIDATES,
            },
        }
    }

    /// 从 JSON 文本读取配置
    ///
    /// ```
    /// use gomoku_ai::SearchConfig;
    ///
    /// let config = SearchConfig::from_json(r#"{ "difficulty": "hard", "time_budget_ms": 500 }"#).unwrap();
    /// assert_eq!(config.max_depth, 5);
    /// assert_eq!(config.time_budget_ms, Some(500));
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let overrides: SearchConfigOverrides = serde_json::from_str(text)?;
        let mut config = Self::from_difficulty(overrides.difficulty.unwrap_or_default());
        if let Some(depth) = overrides.max_depth {
            config.max_depth = depth;
        }
        if let Some(budget) = overrides.time_budget_ms {
            config.time_budget_ms = budget;
        }
        if let Some(cap) = overrides.max_candidates {
            config.max_candidates = cap;
        }
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件读取配置
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidDepth {
                depth: self.max_depth,
            });
        }
        if self.max_candidates == 0 {
            return Err(ConfigError::InvalidCandidateCap {
                cap: self.max_candidates,
            });
        }
        Ok(())
    }

    /// 时间预算
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_ms.map(Duration::from_millis)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_config() {
        let easy = SearchConfig::from_difficulty(Difficulty::Easy);
        assert_eq!(easy.max_depth, 2);
        assert_eq!(easy.time_budget(), None);

        let medium = SearchConfig::from_difficulty(Difficulty::Medium);
        assert_eq!(medium.max_depth, 4);
        assert_eq!(medium, SearchConfig::default());

        let hard = SearchConfig::from_difficulty(Difficulty::Hard);
        assert_eq!(hard.max_depth, 5);
        assert_eq!(hard.time_budget(), Some(Duration::from_millis(3000)));
        assert_eq!(hard.max_candidates, MAX_CANDIDATES);
    }

    #[test]
    fn test_from_json_overrides() {
        let config = SearchConfig::from_json(r#"{ "difficulty": "easy", "max_depth": 3 }"#).unwrap();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.time_budget_ms, None);

        // 显式 null 关闭困难模式的时间预算
        let config = SearchConfig::from_json(r#"{ "difficulty": "hard", "time_budget_ms": null }"#).unwrap();
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.time_budget_ms, None);

        let config = SearchConfig::from_json("{}").unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            SearchConfig::from_json(r#"{ "max_depth": 0 }"#),
            Err(ConfigError::InvalidDepth { depth: 0 })
        ));
        assert!(matches!(
            SearchConfig::from_json(r#"{ "max_candidates": 0 }"#),
            Err(ConfigError::InvalidCandidateCap { cap: 0 })
        ));
        assert!(matches!(
            SearchConfig::from_json(r#"{ "depth": 3 }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            SearchConfig::load("/nonexistent/gomoku.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_serialize_roundtrip_through_overrides() {
        let hard = SearchConfig::from_difficulty(Difficulty::Hard);
        let json = serde_json::to_string(&hard).unwrap();
        assert_eq!(SearchConfig::from_json(&json).unwrap(), hard);
    }
}
