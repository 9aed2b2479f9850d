//! 码和切分引擎（单词级判定）
use serde::Serialize;

/// 一个“包”（packet）：词内一段连续字符，其字符码之和恰好等于目标值。
/// 记录为字节半开区间 `[start, end)`，保证 `&word[start..end]` 能精确还原该包。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Packet {
    pub start: usize,
    pub end: usize,
}

/// 切分结果：可切分时给出完整的包序列（覆盖整个词、无剩余字符），否则判负。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionResult {
    Scandable(Vec<Packet>),
    NotScandable,
}

impl PartitionResult {
    pub fn is_scandable(&self) -> bool {
        matches!(self, PartitionResult::Scandable(_))
    }
}

/// 判定一个词在目标和 `target` 下是否可切分（scandable）。
/// 算法为单趟贪心，无回溯：
/// - 从左到右累加字符码（Unicode 码点值；ASCII 范围即 ASCII 值）
/// - 累加和恰好等于 `target` 时关闭当前包并清零
/// - 一旦越过 `target` 立即判负（正字符码下包内累加和严格递增，越过即无解）
/// - 扫描结束时所有字符必须都落在已关闭的包内，残留半包判负
///
/// 特例：空词对任意 `target` 都可切分（零个包）；`target <= 0` 时任何非空词判负。
/// 纯函数，对任意 `&str` 输入（含非 ASCII）都不会 panic。
pub fn scan_word(word: &str, target: i64) -> PartitionResult {
    // 非正目标：只有空词能以“零个包”满足定义
    if target <= 0 {
        return if word.is_empty() {
            PartitionResult::Scandable(Vec::new())
        } else {
            PartitionResult::NotScandable
        };
    }

    let mut packets: Vec<Packet> = Vec::new();
    let mut sum: i64 = 0;
    let mut start: usize = 0;

    for (idx, ch) in word.char_indices() {
        sum += i64::from(u32::from(ch));
        if sum == target {
            let end = idx + ch.len_utf8();
            packets.push(Packet { start, end });
            start = end;
            sum = 0;
        } else if sum > target {
            return PartitionResult::NotScandable;
        }
    }

    // start == len 意味着最后一个包恰好关闭在最后一个字符上
    // （仅检查 sum == 0 会被码值为 0 的 NUL 字符绕过，故以覆盖位置为准）
    if start == word.len() {
        PartitionResult::Scandable(packets)
    } else {
        PartitionResult::NotScandable
    }
}
