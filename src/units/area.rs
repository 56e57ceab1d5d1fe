use serde::{Deserialize, Serialize};

use super::ScaledUnit;

/// 벽/천장/바닥/문 면적 단위. 기준은 m².
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareFoot,
}

impl AreaUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "m²",
            AreaUnit::SquareFoot => "ft²",
        }
    }
}

impl ScaledUnit for AreaUnit {
    fn base_factor(self) -> f64 {
        match self {
            AreaUnit::SquareMeter => 1.0,
            AreaUnit::SquareFoot => 0.092_903_04,
        }
    }
}

pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    super::convert_scaled(value, from, to)
}
