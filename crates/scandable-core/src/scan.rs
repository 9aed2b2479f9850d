//! 扫描主流程：分词 → 过滤 → 码和切分 → 去重
use anyhow::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

use crate::config::{ScanConfig, ScanStats};
use crate::dedupe::dedupe_by;
use crate::filter::filter_tokens;
use crate::findings::WordMatch;
use crate::packet::{scan_word, PartitionResult};
use crate::tokenize::tokenize;
use crate::types::OutputItem;

/// 扫描一个“单元”（整份文档或单独一行）：逐 token 判定可切分性
fn scan_unit(unit: &str, line: Option<u32>, cfg: &ScanConfig) -> Vec<WordMatch> {
    let mut out = Vec::new();
    for token in filter_tokens(tokenize(unit, &cfg.separators), cfg) {
        if let PartitionResult::Scandable(packets) = scan_word(token, cfg.target_sum) {
            out.push(WordMatch { word: token.to_string(), line, packets });
        }
    }
    out
}

/// 整文模式：整份文档视作一个单元，命中不带行号
pub fn scan_text(text: &str, cfg: &ScanConfig) -> Vec<WordMatch> {
    let matches = scan_unit(text, None, cfg);
    dedupe_by(matches, cfg.remove_duplicates, |m| m.word.clone())
}

/// 逐行模式：按来源顺序逐行扫描（行号 1 起），各行结果拼接后
/// 做一次全局去重（启用时），而不是按行各自去重
pub fn scan_lines<'a, I>(lines: I, cfg: &ScanConfig) -> Vec<WordMatch>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = Vec::new();
    for (i, line) in lines.into_iter().enumerate() {
        out.extend(scan_unit(line, Some(i as u32 + 1), cfg));
    }
    dedupe_by(out, cfg.remove_duplicates, |m| m.word.clone())
}

/// 扫描单个文件（不做去重，去重在写出端统一处理）
fn scan_file(path: &Path, cfg: &ScanConfig) -> Result<Vec<WordMatch>> {
    if cfg.line_by_line {
        // 逐行读取，不整读文件；切分器无跨调用状态，逐行处理是安全的
        let reader = BufReader::new(File::open(path)?);
        let mut out = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            out.extend(scan_unit(&line, Some(i as u32 + 1), cfg));
        }
        Ok(out)
    } else {
        let buf = std::fs::read_to_string(path)?;
        Ok(scan_unit(&buf, None, cfg))
    }
}

/// 扫描文件或目录并将结果以 JSON 数组流式写入 `out`
/// 稳定性保证：
/// - 目录输入：仅取第一层文件并按文件名排序，输出顺序可复现
/// - 去重启用时全局生效（跨行、跨文件），保留首次出现
pub fn scan_and_write(input: &Path, out: &mut dyn Write, cfg: &ScanConfig) -> Result<ScanStats> {
    let mut stats = ScanStats::default();

    let mut files: Vec<PathBuf> = vec![];
    if input.is_dir() {
        // 数据集为单层目录，这里限制深度为 1
        for entry in WalkDir::new(input).min_depth(1).max_depth(1) {
            let entry = match entry { Ok(e) => e, Err(_) => continue };
            if entry.file_type().is_file() { files.push(entry.into_path()); }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    } else {
        files.push(input.to_path_buf());
    }

    write!(out, "[")?;
    let mut first = true;
    // 流式写出时用在线 seen 集合实现“全局保首”去重，与先收集再去重等价
    let mut seen: std::collections::HashSet<String> = std::collections::HashSet::new();

    for path in files {
        let matches = match scan_file(&path, cfg) {
            Ok(m) => m,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable file");
                continue;
            }
        };
        stats.files_scanned += 1;
        stats.words_matched += matches.len();

        for m in matches {
            if cfg.remove_duplicates && !seen.insert(m.word.clone()) {
                continue;
            }
            if !first { write!(out, ",")?; } else { first = false; }
            let item = OutputItem { word: &m.word, line: m.line, packets: &m.packets };
            serde_json::to_writer(&mut *out, &item)?;
            stats.outputs_written += 1;
        }
    }
    write!(out, "]")?;

    Ok(stats)
}
