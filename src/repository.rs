//! 프로젝트 입력 저장소. 계산 엔진은 이 모듈을 호출하지 않는다.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::{debug, info};

use crate::project::RawProject;

/// 프로젝트 저장/로드 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("프로젝트 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("프로젝트 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 입력 단계 레코드를 보관하는 저장소.
pub trait ProjectRepository {
    /// 저장된 프로젝트를 읽는다. 저장된 것이 없으면 기본값을 돌려준다.
    fn load(&self) -> Result<RawProject, RepositoryError>;
    fn save(&self, project: &RawProject) -> Result<(), RepositoryError>;
}

/// TOML 파일 하나에 프로젝트를 저장한다.
#[derive(Debug, Clone)]
pub struct TomlFileRepository {
    path: PathBuf,
}

impl TomlFileRepository {
    pub const DEFAULT_FILE: &'static str = "project.toml";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for TomlFileRepository {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FILE)
    }
}

impl ProjectRepository for TomlFileRepository {
    fn load(&self) -> Result<RawProject, RepositoryError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no stored project, using defaults");
            return Ok(RawProject::default());
        }
        let content = fs::read_to_string(&self.path)?;
        let project = toml::from_str(&content)?;
        info!(path = %self.path.display(), "project loaded");
        Ok(project)
    }

    fn save(&self, project: &RawProject) -> Result<(), RepositoryError> {
        let content = toml::to_string_pretty(project)?;
        fs::write(&self.path, content)?;
        info!(path = %self.path.display(), "project saved");
        Ok(())
    }
}

/// 프로세스 메모리에만 보관하는 저장소.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    slot: Mutex<Option<RawProject>>,
}

impl MemoryRepository {
    pub fn with_project(project: RawProject) -> Self {
        Self {
            slot: Mutex::new(Some(project)),
        }
    }
}

impl ProjectRepository for MemoryRepository {
    fn load(&self) -> Result<RawProject, RepositoryError> {
        let slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(slot.clone().unwrap_or_default())
    }

    fn save(&self, project: &RawProject) -> Result<(), RepositoryError> {
        let mut slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(project.clone());
        Ok(())
    }
}
