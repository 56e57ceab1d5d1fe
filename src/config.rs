use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::engine::EngineSettings;
use crate::units::*;

/// 기본 설정 파일 이름
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI 기준. 내부 계산 기본값.
    SI,
    /// 영국식/야드파운드법
    Imperial,
}

/// 결과 표시용 물리량별 단위 설정을 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub temperature: TemperatureUnit,
    pub length: LengthUnit,
    pub area: AreaUnit,
    pub volume: VolumeUnit,
    pub mass: MassUnit,
    pub power: PowerUnit,
    pub energy: EnergyUnit,
    pub heat_transfer: HeatTransferUnit,
}

impl DefaultUnits {
    /// 단위 시스템 프리셋에 해당하는 단위 세트.
    pub fn preset(system: UnitSystem) -> Self {
        match system {
            UnitSystem::SI => Self {
                temperature: TemperatureUnit::Celsius,
                length: LengthUnit::Meter,
                area: AreaUnit::SquareMeter,
                volume: VolumeUnit::CubicMeter,
                mass: MassUnit::Kilogram,
                power: PowerUnit::Kilowatt,
                energy: EnergyUnit::KilowattHour,
                heat_transfer: HeatTransferUnit::WPerSquareMeterK,
            },
            UnitSystem::Imperial => Self {
                temperature: TemperatureUnit::Fahrenheit,
                length: LengthUnit::Foot,
                area: AreaUnit::SquareFoot,
                volume: VolumeUnit::CubicFoot,
                mass: MassUnit::Pound,
                power: PowerUnit::TonRefrigeration,
                energy: EnergyUnit::Btu,
                heat_transfer: HeatTransferUnit::BtuPerHourSquareFootF,
            },
        }
    }
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self::preset(UnitSystem::SI)
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/ko/en)
    pub language: String,
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
    /// 침입 공기 상수 등 계산 엔진 설정
    pub engine: EngineSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            unit_system: UnitSystem::SI,
            default_units: DefaultUnits::default(),
            engine: EngineSettings::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본 설정을 그 경로에 저장한다.
pub fn load_or_default_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }

    /// 단위 시스템을 바꾸고 표시 단위를 프리셋으로 맞춘다.
    pub fn apply_unit_preset(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = DefaultUnits::preset(system);
    }
}
