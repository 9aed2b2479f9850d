//! 去重：保留每个词的首次出现，维持来源顺序
use std::collections::HashSet;
use std::hash::Hash;

/// 按 key 去重。`enabled` 为假时原样返回；为真时仅保留每个 key 的
/// 首个条目，顺序不变（插入序集合语义，不是重排序）。
pub fn dedupe_by<T, K, F>(items: Vec<T>, enabled: bool, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    if !enabled {
        return items;
    }
    let mut seen: HashSet<K> = HashSet::new();
    items.into_iter().filter(|it| seen.insert(key(it))).collect()
}

/// 字符串序列的便捷版本
pub fn dedupe(words: Vec<String>, enabled: bool) -> Vec<String> {
    dedupe_by(words, enabled, |w| w.clone())
}
