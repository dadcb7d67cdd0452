use healthmate_core::lang::Lang;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::warn;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConf,
    pub facilities: FacilityConf,
    pub analysis: AnalysisConf,
    pub default_lang: Lang,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConf {
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct FacilityConf {
    pub endpoint: String,
    pub radius_m: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AnalysisConf {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    pub referer: String,
    pub title: String,
}

impl Default for ServerConf {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

impl Default for FacilityConf {
    fn default() -> Self {
        Self {
            endpoint: "https://overpass-api.de/api/interpreter".into(),
            radius_m: 10_000,
            timeout_secs: 30,
        }
    }
}

impl Default for AnalysisConf {
    fn default() -> Self {
        Self {
            endpoint: "https://openrouter.ai/api/v1/chat/completions".into(),
            model: "x-ai/grok-4.1-fast".into(),
            max_tokens: 150,
            timeout_secs: 20,
            referer: "healthmate".into(),
            title: "Healthmate".into(),
        }
    }
}

pub async fn load_config() -> AppConfig {
    let path = std::env::var("HEALTHMATE_CONFIG").unwrap_or_else(|_| "healthmate.yaml".into());
    load_config_from(&path).await
}

async fn load_config_from(path: &str) -> AppConfig {
    if Path::new(path).exists() {
        let txt = fs::read_to_string(path).await.unwrap_or_default();
        if txt.trim().is_empty() {
            return AppConfig::default();
        }
        serde_yaml::from_str(&txt).unwrap_or_else(|e| {
            warn!("invalid config at {path}: {e}");
            AppConfig::default()
        })
    } else {
        warn!("no {path}, using default config");
        AppConfig::default()
    }
}

/// Bearer token for the chat endpoint. Kept out of the config file.
pub fn ai_api_key() -> String {
    std::env::var("HEALTHMATE_AI_KEY").unwrap_or_default()
}
