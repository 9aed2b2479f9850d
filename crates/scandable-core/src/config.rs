//! 扫描配置与统计信息（模块）
use std::collections::HashSet;
use thiserror::Error;

/// 默认目标和（原出处的 23）
pub const DEFAULT_TARGET_SUM: i64 = 23;

/// 默认分隔符：空白 + 常见标点
pub const DEFAULT_SEPARATORS: &str = " \t\r\n.,;:!?\"'`()[]{}<>-_/\\|";

/// 扫描配置。整次扫描期间只读，构造一次后不再修改。
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// 每个包的字符码之和须恰好等于该目标值（必须为正）
    pub target_sum: i64,
    /// 分隔符集合；分隔符绝不会出现在 token 内部
    pub separators: HashSet<char>,
    /// 是否启用停用词过滤
    pub remove_stopwords: bool,
    /// 停用词表（精确匹配）
    pub stopwords: HashSet<String>,
    /// 停用词匹配是否忽略 ASCII 大小写（默认否，精确匹配）
    pub stopword_ignore_case: bool,
    /// 是否对最终结果去重（保留首次出现的顺序）
    pub remove_duplicates: bool,
    /// 逐行模式：token 不跨行；行号随命中一起上报
    pub line_by_line: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            target_sum: DEFAULT_TARGET_SUM,
            separators: DEFAULT_SEPARATORS.chars().collect(),
            remove_stopwords: false,
            stopwords: HashSet::new(),
            stopword_ignore_case: false,
            remove_duplicates: false,
            line_by_line: false,
        }
    }
}

/// 配置校验错误（由外层加载器在扫描前触发，核心算法自身对任何输入都有定义行为）
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("target sum must be strictly positive, got {0}")]
    NonPositiveTarget(i64),
    #[error("separator set must contain at least one character")]
    EmptySeparators,
}

impl ScanConfig {
    /// 扫描前的快速失败校验：
    /// - 目标和必须为正（非正目标让一切非空词判负，没有使用意义）
    /// - 分隔符集合至少一个字符（与原模型的不变式一致）
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_sum <= 0 {
            return Err(ConfigError::NonPositiveTarget(self.target_sum));
        }
        if self.separators.is_empty() {
            return Err(ConfigError::EmptySeparators);
        }
        Ok(())
    }
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub words_matched: usize,
    pub outputs_written: usize,
}
