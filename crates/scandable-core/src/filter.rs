//! 过滤阶段：丢弃空 token 与停用词
use crate::config::ScanConfig;

/// 单 token 判定：空串无条件丢弃；启用停用词过滤时按词表精确匹配丢弃
/// （默认大小写敏感，可通过 `stopword_ignore_case` 放宽为 ASCII 不敏感）。
pub fn keep_token(token: &str, cfg: &ScanConfig) -> bool {
    if token.is_empty() {
        return false;
    }
    if cfg.remove_stopwords {
        let hit = if cfg.stopword_ignore_case {
            cfg.stopwords.iter().any(|s| s.eq_ignore_ascii_case(token))
        } else {
            cfg.stopwords.contains(token)
        };
        if hit {
            return false;
        }
    }
    true
}

/// 序列版本：保序、不修改 token 本身
pub fn filter_tokens<'a, I>(tokens: I, cfg: &'a ScanConfig) -> impl Iterator<Item = &'a str>
where
    I: Iterator<Item = &'a str> + 'a,
{
    tokens.filter(move |t| keep_token(t, cfg))
}
