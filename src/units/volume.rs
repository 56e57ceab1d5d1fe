use serde::{Deserialize, Serialize};

use super::ScaledUnit;

/// 방 체적 단위. 기준은 m³.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    Liter,
    CubicFoot,
}

impl VolumeUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::CubicMeter => "m³",
            VolumeUnit::Liter => "L",
            VolumeUnit::CubicFoot => "ft³",
        }
    }
}

impl ScaledUnit for VolumeUnit {
    fn base_factor(self) -> f64 {
        match self {
            VolumeUnit::CubicMeter => 1.0,
            VolumeUnit::Liter => 1e-3,
            VolumeUnit::CubicFoot => 0.028_316_846_6,
        }
    }
}

pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    super::convert_scaled(value, from, to)
}
