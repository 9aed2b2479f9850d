//! 公共类型（对外暴露）
use serde::Serialize;

use crate::packet::Packet;

/// 输出项结构（对应 result.json 的单个元素）
#[derive(Debug, Clone, Serialize)]
pub struct OutputItem<'a> {
    pub word: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    pub packets: &'a [Packet],
}
