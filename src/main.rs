use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cold_storage_toolbox::config::{self, DEFAULT_CONFIG_FILE};
use cold_storage_toolbox::i18n::{self, keys, Translator};
use cold_storage_toolbox::report::{self, OutputFormat};
use cold_storage_toolbox::repository::{ProjectRepository, TomlFileRepository};
use cold_storage_toolbox::{app, telemetry};
use tracing::warn;

#[derive(Parser)]
#[command(name = "cold_storage_toolbox_cli")]
#[command(about = "Cold storage cooling load calculator", long_about = None)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// 프로젝트 입력 파일 경로
    #[arg(long, global = true, default_value = TomlFileRepository::DEFAULT_FILE)]
    project: PathBuf,

    /// 표시 언어 (auto/ko/en)
    #[arg(long, global = true, default_value = "auto")]
    lang: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 저장된 프로젝트로 냉동 부하를 계산해 출력한다
    Evaluate {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// 결과를 저장할 파일. 없으면 stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// 단계별 대화형 입력 (기본 명령)
    Wizard,
    /// 단열재/제품/적재 방식 표를 출력한다
    Tables,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 선택한 명령을 실행한다.
fn main() {
    telemetry::init_tracing("warn");
    let cli = Cli::parse();
    let error_tr = Translator::new(&i18n::resolve_language(&cli.lang, None));
    if let Err(err) = try_run(cli) {
        eprintln!("{}: {err}", error_tr.t(keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default_from(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(&cfg.language));
    let tr = Translator::new_with_pack(&lang, None);
    let repo = TomlFileRepository::new(&cli.project);

    match cli.command.unwrap_or(Commands::Wizard) {
        Commands::Evaluate { format, output } => {
            let project = repo.load()?;
            let breakdown = project.to_inputs().evaluate(&cfg.engine);
            if !breakdown.is_clean() {
                warn!(diagnostics = ?breakdown.diagnostics, "evaluation used fallback values");
            }
            let text = report::render(&breakdown, format, &cfg.default_units, &tr)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, text)?;
                    eprintln!("{} {}", tr.t(keys::REPORT_WRITTEN), path.display());
                }
                None => print!("{text}"),
            }
        }
        Commands::Wizard => app::run(&mut cfg, &cli.config, &tr, &repo)?,
        Commands::Tables => print!("{}", report::render_tables(&cfg.default_units, &tr)),
    }
    Ok(())
}
