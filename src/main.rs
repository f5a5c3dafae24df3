// src/main.rs

use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing::{error, info};

use ad_selection::config::{ConfigManager, ConfigOverrides};
use ad_selection::logging::logger;
use ad_selection::{ConfigError, DaoError, RankingPolicy};

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dao(#[from] DaoError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(author = "whiteCcinn", version = "1.0", about = "Select the advertisement to render for a customer")]
struct CliArgs {
    /// 市场 ID，为空时返回空广告
    #[arg(short, long, default_value = "")]
    marketplace: String,
    #[arg(short, long, default_value = "")]
    customer: String,
    #[arg(long, value_enum)]
    policy: Option<RankingPolicy>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    content_file: Option<String>,
    #[arg(long)]
    targeting_file: Option<String>,
    /// JSON 配置文件，命令行参数优先
    #[arg(long)]
    config: Option<String>,
    #[arg(long, default_value = "logs")]
    log_dir: String,
}

fn run(args: CliArgs) -> Result<(), AppError> {
    let overrides = ConfigOverrides {
        policy: args.policy,
        seed: args.seed,
        content_file: args.content_file,
        targeting_file: args.targeting_file,
    };
    let manager = ConfigManager::resolve(args.config.as_deref(), overrides)?;
    info!(
        policy = %manager.config().policy,
        seed = ?manager.config().seed,
        "Advertisement selection starting"
    );

    let selector = manager.build_selector()?;
    let advertisement = selector.select_advertisement_with_rng(
        &args.customer,
        &args.marketplace,
        &mut manager.rng(),
    )?;

    info!(
        marketplace_id = %args.marketplace,
        content_id = ?advertisement.content_id(),
        "Advertisement selected"
    );
    println!("{}", serde_json::to_string_pretty(&advertisement)?);
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // 初始化全局 tracing 日志
    let _guard = match logger::init(&args.log_dir, "ad_selection.json") {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Unable to set global tracing subscriber: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Advertisement selection failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
