use serde::{Deserialize, Serialize};

use super::ScaledUnit;

/// 제품 질량/저장량 단위. 기준은 kg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Tonne,
    Pound,
}

impl MassUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Tonne => "t",
            MassUnit::Pound => "lb",
        }
    }
}

impl ScaledUnit for MassUnit {
    fn base_factor(self) -> f64 {
        match self {
            MassUnit::Kilogram => 1.0,
            MassUnit::Tonne => 1000.0,
            MassUnit::Pound => 0.453_592_37,
        }
    }
}

pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    super::convert_scaled(value, from, to)
}
