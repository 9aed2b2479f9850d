//! 分词器：按分隔符集合切出候选词
use std::collections::HashSet;

/// token 迭代器：产出原文中“连续非分隔符字符”的极大段，零拷贝。
/// 普通迭代器，可随时重新从头调用 [`tokenize`]，输入有限则产出必有限。
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
    separators: &'a HashSet<char>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let tail = &self.text[self.pos..];
        let mut start: Option<usize> = None;

        for (i, ch) in tail.char_indices() {
            if self.separators.contains(&ch) {
                if let Some(s) = start {
                    // token 结束于该分隔符之前，下次从分隔符之后继续
                    self.pos += i + ch.len_utf8();
                    return Some(&tail[s..i]);
                }
                // 连续分隔符不会产生空 token，继续跳过
            } else if start.is_none() {
                start = Some(i);
            }
        }

        self.pos = self.text.len();
        start.map(|s| &tail[s..])
    }
}

/// 对一段文本分词。分隔符集合为空时整段文本即一个极大 token（不是错误）。
/// 逐行模式下由调用方按行逐次调用，token 天然不跨行。
pub fn tokenize<'a>(text: &'a str, separators: &'a HashSet<char>) -> Tokens<'a> {
    Tokens { text, pos: 0, separators }
}
