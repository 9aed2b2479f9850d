//! 扫描档案加载（TOML）
use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

use crate::config::ScanConfig;

/// 档案文件结构：所有字段可省略，省略即沿用默认配置
#[derive(Debug, Clone, Deserialize)]
struct ProfileFile {
    #[serde(default)]
    pub target_sum: Option<i64>,
    /// 分隔符以整个字符串给出，逐字符入集合
    #[serde(default)]
    pub separators: Option<String>,
    #[serde(default)]
    pub stopwords: Vec<String>,
    #[serde(default)]
    pub remove_stopwords: Option<bool>,
    #[serde(default)]
    pub stopword_ignore_case: Option<bool>,
    #[serde(default)]
    pub remove_duplicates: Option<bool>,
    #[serde(default)]
    pub line_by_line: Option<bool>,
}

/// 从 TOML 档案文件构建扫描配置（缺省字段取 `ScanConfig::default`）
pub fn load_profile(path: &Path) -> Result<ScanConfig> {
    let txt = std::fs::read_to_string(path)?;
    parse_profile(&txt)
}

fn parse_profile(txt: &str) -> Result<ScanConfig> {
    let parsed: ProfileFile = toml::from_str(txt)?;
    let mut cfg = ScanConfig::default();

    if let Some(t) = parsed.target_sum { cfg.target_sum = t; }
    if let Some(s) = parsed.separators { cfg.separators = s.chars().collect(); }
    if !parsed.stopwords.is_empty() { cfg.stopwords = parsed.stopwords.into_iter().collect(); }
    if let Some(v) = parsed.remove_stopwords { cfg.remove_stopwords = v; }
    if let Some(v) = parsed.stopword_ignore_case { cfg.stopword_ignore_case = v; }
    if let Some(v) = parsed.remove_duplicates { cfg.remove_duplicates = v; }
    if let Some(v) = parsed.line_by_line { cfg.line_by_line = v; }

    Ok(cfg)
}
