//! 文件/目录驱动的端到端测试
use scandable_core::{scan_and_write, ScanConfig};
use std::fs;
use std::path::PathBuf;

/// 建立一次性临时目录（进程号 + 名称后缀，避免并行测试互踩）
fn temp_dir(suffix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("scandable-it-{}-{suffix}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn cfg_168() -> ScanConfig {
    ScanConfig { target_sum: 168, ..Default::default() }
}

fn run(input: &std::path::Path, cfg: &ScanConfig) -> (serde_json::Value, scandable_core::ScanStats) {
    let mut buf: Vec<u8> = Vec::new();
    let stats = scan_and_write(input, &mut buf, cfg).unwrap();
    (serde_json::from_slice(&buf).unwrap(), stats)
}

fn words(v: &serde_json::Value) -> Vec<&str> {
    v.as_array().unwrap().iter().map(|it| it["word"].as_str().unwrap()).collect()
}

#[test]
fn directory_scan_is_ordered_by_file_name() {
    let dir = temp_dir("dir-order");
    // 故意乱序创建，输出仍须按文件名排序
    fs::write(dir.join("b.txt"), "Ag").unwrap();
    fs::write(dir.join("a.txt"), "aG xx").unwrap();

    let (json, stats) = run(&dir, &cfg_168());
    assert_eq!(words(&json), vec!["aG", "Ag"]);
    assert_eq!(stats.files_scanned, 2);
    assert_eq!(stats.outputs_written, 2);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn dedup_applies_across_files() {
    let dir = temp_dir("cross-file-dedup");
    fs::write(dir.join("a.txt"), "aG aG").unwrap();
    fs::write(dir.join("b.txt"), "aG Ag").unwrap();

    let cfg = ScanConfig { remove_duplicates: true, ..cfg_168() };
    let (json, stats) = run(&dir, &cfg);
    assert_eq!(words(&json), vec!["aG", "Ag"]);
    // 命中 4 个，写出 2 个
    assert_eq!(stats.words_matched, 4);
    assert_eq!(stats.outputs_written, 2);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn single_file_line_mode_reports_line_numbers() {
    let dir = temp_dir("line-mode");
    let file = dir.join("input.txt");
    fs::write(&file, "xx aG\nAg\n").unwrap();

    let cfg = ScanConfig { line_by_line: true, ..cfg_168() };
    let (json, _) = run(&file, &cfg);
    let items = json.as_array().unwrap();
    assert_eq!(words(&json), vec!["aG", "Ag"]);
    assert_eq!(items[0]["line"], 1);
    assert_eq!(items[1]["line"], 2);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn whole_document_mode_omits_line_field() {
    let dir = temp_dir("whole-doc");
    let file = dir.join("input.txt");
    fs::write(&file, "aG").unwrap();

    let (json, _) = run(&file, &cfg_168());
    let item = &json.as_array().unwrap()[0];
    assert!(item.get("line").is_none());
    // 包切分随结果上报：单包覆盖整词（字节区间）
    assert_eq!(item["packets"][0]["start"], 0);
    assert_eq!(item["packets"][0]["end"], 2);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unreadable_entries_are_skipped_not_fatal() {
    let dir = temp_dir("skip-bad");
    fs::write(dir.join("a.txt"), "aG").unwrap();
    // 无效 UTF-8：整读失败，应跳过而不是中断
    fs::write(dir.join("b.bin"), [0xff, 0xfe, 0x00]).unwrap();

    let (json, stats) = run(&dir, &cfg_168());
    assert_eq!(words(&json), vec!["aG"]);
    assert_eq!(stats.files_scanned, 1);

    let _ = fs::remove_dir_all(&dir);
}
