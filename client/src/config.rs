//! 客戶端設定與棋子目錄載入

use crate::constants::{
    BUILTIN_CATALOG_TOML, CONFIG_FILE_NAME, CONFIG_PATH_ENV_VAR, DATA_DIRECTORY_PATH,
    DEFAULT_BATTLES,
};
use anyhow::Context;
use placement::alias::BattleId;
use placement::catalog::PieceCatalog;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 客戶端設定檔（TOML）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// 大廳顯示的對戰 ID
    pub battles: Vec<BattleId>,
    /// 棋子目錄路徑
    pub catalog_path: PathBuf,
    /// 預先連接的帳戶地址
    pub account: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            battles: DEFAULT_BATTLES.to_vec(),
            catalog_path: PathBuf::from(DATA_DIRECTORY_PATH).join("pieces.toml"),
            account: None,
        }
    }
}

/// 設定檔路徑：環境變數優先，否則使用資料目錄下的預設檔名
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DATA_DIRECTORY_PATH).join(CONFIG_FILE_NAME))
}

pub fn parse_config(content: &str) -> anyhow::Result<ClientConfig> {
    toml::from_str(content).context("解析客戶端設定失敗")
}

pub fn load_config(path: &Path) -> anyhow::Result<ClientConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("讀取設定檔失敗：{}", path.display()))?;
    parse_config(&content).with_context(|| format!("設定檔：{}", path.display()))
}

/// 載入設定，失敗時使用預設值
pub fn load_config_or_default(path: &Path) -> ClientConfig {
    match load_config(path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "client config loaded");
            config
        }
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "using default client config");
            ClientConfig::default()
        }
    }
}

pub fn load_catalog(path: &Path) -> anyhow::Result<PieceCatalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("讀取棋子目錄失敗：{}", path.display()))?;
    let catalog = PieceCatalog::from_toml(&content)
        .with_context(|| format!("棋子目錄：{}", path.display()))?;
    Ok(catalog)
}

/// 載入棋子目錄，失敗時改用內建目錄
pub fn load_catalog_or_builtin(path: &Path) -> anyhow::Result<PieceCatalog> {
    match load_catalog(path) {
        Ok(catalog) => {
            tracing::info!(path = %path.display(), pieces = catalog.len(), "piece catalog loaded");
            Ok(catalog)
        }
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "using builtin piece catalog");
            PieceCatalog::from_toml(BUILTIN_CATALOG_TOML).context("內建棋子目錄無效")
        }
    }
}
