//! 命中项：可切分的词及其切分信息
use crate::packet::Packet;

/// 单个可切分词的命中记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    /// 命中的词原文
    pub word: String,
    /// 来源行号（1 起）；仅逐行模式填写，整文模式为 None
    pub line: Option<u32>,
    /// 贪心切分得到的包序列（正码值下该切分唯一）
    pub packets: Vec<Packet>,
}
