use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "keyword-board";
const DEFAULT_DATA_FILE: &str = "data.js";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_topics")]
    pub topics: Vec<String>,
    #[serde(default = "default_period")]
    pub default_period: String,
    /// Falls back to `data.js` in the working directory.
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_topics() -> Vec<String> {
    vec![
        "정치".to_string(),
        "경제".to_string(),
        "사회".to_string(),
        "장년".to_string(),
    ]
}

fn default_period() -> String {
    "today".to_string()
}

fn default_transition_ms() -> u64 {
    300
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            topics: default_topics(),
            default_period: default_period(),
            data_path: None,
            transition_ms: default_transition_ms(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(APP_DIR);

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        Ok(dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)?;
        Self::from_json(&content)
    }

    /// Parse and normalize a config document without touching the disk.
    pub fn from_json(content: &str) -> Result<Self> {
        let mut config: Config = serde_json::from_str(content)?;
        config.normalize();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    fn normalize(&mut self) {
        let mut seen: Vec<String> = Vec::with_capacity(self.topics.len());
        for topic in self.topics.drain(..) {
            if !topic.is_empty() && !seen.contains(&topic) {
                seen.push(topic);
            }
        }
        self.topics = if seen.is_empty() { default_topics() } else { seen };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_drops_blank_and_duplicate_topics() {
        let mut config = Config {
            topics: vec![
                "경제".to_string(),
                String::new(),
                "경제".to_string(),
                "사회".to_string(),
            ],
            ..Config::default()
        };
        config.normalize();
        assert_eq!(config.topics, vec!["경제".to_string(), "사회".to_string()]);
    }

    #[test]
    fn normalize_restores_default_topics_when_empty() {
        let mut config = Config {
            topics: Vec::new(),
            ..Config::default()
        };
        config.normalize();
        assert_eq!(config.topics, default_topics());
    }
}
