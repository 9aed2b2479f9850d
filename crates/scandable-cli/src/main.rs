use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use scandable_core::{divisor_sum, load_profile, scan_and_write, ScanConfig};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "scandable", version, about = "可切分词扫描器 / n-完全数判定")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 扫描文件或目录，生成 result.json（可切分词列表）
    Scan {
        /// 输入文件或目录（目录时仅扫描第一层文件）
        #[arg(long)]
        input: PathBuf,

        /// 输出文件（JSON 数组）
        #[arg(long, default_value = "./result.json")]
        output: PathBuf,

        /// 目标和（默认 23；必须为正）
        #[arg(long)]
        target: Option<i64>,

        /// 分隔符集合，按整串给出、逐字符生效（默认空白 + 常见标点）
        #[arg(long)]
        separators: Option<String>,

        /// 停用词（可重复给出；给出即启用停用词过滤）
        #[arg(long = "stopword")]
        stopwords: Vec<String>,

        /// 停用词匹配忽略 ASCII 大小写（默认精确匹配）
        #[arg(long)]
        ignore_stopword_case: bool,

        /// 对结果去重（保留首次出现）
        #[arg(long)]
        dedup: bool,

        /// 逐行模式：token 不跨行，命中带行号
        #[arg(long)]
        line_by_line: bool,

        /// 扫描档案文件（TOML）；命令行参数覆盖档案值
        #[arg(long)]
        profile: Option<PathBuf>,
    },
    /// 判定 n-完全数：真因数之和是否等于目标值
    Perfect {
        /// 要判定的数（与 --from/--to 二选一）
        number: Option<u64>,

        /// 目标值 n（默认 23）
        #[arg(long, default_value_t = 23)]
        target: u64,

        /// 区间起点（含）
        #[arg(long)]
        from: Option<u64>,

        /// 区间终点（含）
        #[arg(long)]
        to: Option<u64>,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            input,
            output,
            target,
            separators,
            stopwords,
            ignore_stopword_case,
            dedup,
            line_by_line,
            profile,
        } => {
            info!(?input, ?output, "starting scan");

            // 配置来源：默认值 ← 档案文件 ← 命令行参数，后者覆盖前者
            let mut cfg = match profile {
                Some(p) => load_profile(&p).context("load profile")?,
                None => ScanConfig::default(),
            };
            if let Some(t) = target { cfg.target_sum = t; }
            if let Some(s) = separators { cfg.separators = s.chars().collect(); }
            if !stopwords.is_empty() {
                cfg.stopwords.extend(stopwords);
                cfg.remove_stopwords = true;
            }
            if ignore_stopword_case { cfg.stopword_ignore_case = true; }
            if dedup { cfg.remove_duplicates = true; }
            if line_by_line { cfg.line_by_line = true; }

            // 快速失败：非法配置在扫描前拒绝
            cfg.validate().context("invalid scan configuration")?;

            // 以缓冲方式打开输出文件，按 JSON 数组流式写入
            let mut out = BufWriter::new(File::create(&output).context("create output file")?);
            let stats = scan_and_write(&input, &mut out, &cfg).context("scan failed")?;
            out.flush().ok();

            info!(
                files_scanned = stats.files_scanned,
                words_matched = stats.words_matched,
                outputs_written = stats.outputs_written,
                "scan finished"
            );
        }
        Commands::Perfect { number, target, from, to } => {
            // 单个数或闭区间，二选一
            let (lo, hi) = match (number, from, to) {
                (Some(n), None, None) => (n, n),
                (None, Some(a), Some(b)) if a <= b => (a, b),
                (None, Some(_), Some(_)) => bail!("--from must not exceed --to"),
                _ => bail!("give either NUMBER or both --from and --to"),
            };
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            for n in lo..=hi {
                let sum = divisor_sum(n);
                let verdict = if sum == target { "perfect" } else { "not perfect" };
                writeln!(w, "{n}: {verdict} (divisor sum {sum}, target {target})")?;
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
