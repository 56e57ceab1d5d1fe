use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::{Config, ConfigError};
use crate::i18n::{keys, Translator};
use crate::report;
use crate::repository::{ProjectRepository, RepositoryError};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 프로젝트 저장/로드 오류
    #[error("프로젝트 저장소 오류: {0}")]
    Repository(#[from] RepositoryError),
}

/// 대화형 입력 마법사의 메인 루프를 실행한다.
///
/// 각 단계 입력이 끝날 때마다 프로젝트를 저장소에 저장하므로 중간에 종료해도 입력이 남는다.
pub fn run(
    config: &mut Config,
    config_path: &Path,
    tr: &Translator,
    repo: &dyn ProjectRepository,
) -> Result<(), AppError> {
    let mut project = repo.load()?;
    loop {
        let choice = ui_cli::main_menu(tr)?;
        match choice {
            MenuChoice::Room => ui_cli::edit_room(tr, config, &mut project.room)?,
            MenuChoice::Conditions => {
                ui_cli::edit_conditions(tr, config, &mut project.conditions)?
            }
            MenuChoice::Construction => {
                ui_cli::edit_construction(tr, config, &mut project.construction)?
            }
            MenuChoice::Product => ui_cli::edit_product(tr, config, &mut project.product)?,
            MenuChoice::Results => {
                let breakdown = project.to_inputs().evaluate(&config.engine);
                if !breakdown.is_clean() {
                    warn!(diagnostics = ?breakdown.diagnostics, "evaluation used fallback values");
                }
                println!();
                print!("{}", report::render_text(&breakdown, &config.default_units, tr));
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save_to(config_path)?;
            }
            MenuChoice::Exit => {
                repo.save(&project)?;
                config.save_to(config_path)?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
        if matches!(
            choice,
            MenuChoice::Room
                | MenuChoice::Conditions
                | MenuChoice::Construction
                | MenuChoice::Product
        ) {
            repo.save(&project)?;
            info!(step = ?choice, "wizard step saved");
        }
    }
    Ok(())
}
