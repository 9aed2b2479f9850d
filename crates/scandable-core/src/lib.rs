//! 核心扫描库：在文本中寻找“可切分”（scandable）的词
//!
//! 设计要点：
//! - 码和切分为单趟贪心：正字符码下包内累加和严格递增，首次越界即判负，无需回溯。
//! - 流水线为纯函数组合：分词 → 过滤 → 切分 → 去重，各阶段由只读配置记录驱动，
//!   不用继承或动态分发表达可变行为。
//! - 输出为流式 JSON 数组；目录输入按文件名排序，保证稳定顺序与可复现性。
//! - n-完全数判定独立成模块，扫描核心对它没有依赖。

mod config;
mod dedupe;
mod filter;
mod findings;
mod packet;
mod perfect;
mod profile;
mod scan;
mod tokenize;
mod types;

pub use config::{ConfigError, ScanConfig, ScanStats, DEFAULT_SEPARATORS, DEFAULT_TARGET_SUM};
pub use dedupe::{dedupe, dedupe_by};
pub use filter::{filter_tokens, keep_token};
pub use findings::WordMatch;
pub use packet::{scan_word, Packet, PartitionResult};
pub use perfect::{divisor_sum, is_perfect};
pub use profile::load_profile;
pub use scan::{scan_and_write, scan_lines, scan_text};
pub use tokenize::{tokenize, Tokens};
pub use types::OutputItem;
