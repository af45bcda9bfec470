//! dbs CLI
//!
//! XML 스키마 문서를 읽어 요약, DDL, 참조 검사 결과를 출력합니다.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dbs_sql::Dialect;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "dbs")]
#[command(author, version, about = "Inspect XML schema documents and generate DDL", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show tables, columns and grants
    Inspect {
        /// Schema document
        file: PathBuf,

        /// Only show this table
        #[arg(long)]
        table: Option<String>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print CREATE TABLE statements
    Ddl {
        /// Schema document
        file: PathBuf,

        /// SQL dialect (overrides DBS_DIALECT)
        #[arg(long)]
        dialect: Option<Dialect>,

        /// Also print GRANT statements
        #[arg(long)]
        grants: bool,

        /// Use CREATE TABLE IF NOT EXISTS
        #[arg(long)]
        if_not_exists: bool,
    },

    /// Check that every foreign key points at a known table and column
    Check {
        /// Schema document
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    // 환경변수 로드
    dotenvy::dotenv().ok();

    // 로깅 초기화 (stdout은 출력 전용)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "dbs=info,dbs_core=info,dbs_sql=info".into()
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // 명령 실행
    match cli.command {
        Commands::Inspect { file, table, format } => {
            commands::inspect::run(&file, table.as_deref(), format)
        }
        Commands::Ddl {
            file,
            dialect,
            grants,
            if_not_exists,
        } => {
            // 설정 로드 (ddl만 사용)
            let config = Config::from_env()?.with_overrides(dialect, if_not_exists);
            tracing::debug!("config: {:?}", config);
            commands::ddl::run(&file, &config, grants)
        }
        Commands::Check { file } => commands::check::run(&file),
    }
}
