use serde::{Deserialize, Serialize};

use super::ScaledUnit;

/// 방/문 치수 표시 단위. 기준은 m.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Foot,
    Inch,
}

impl LengthUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Foot => "ft",
            LengthUnit::Inch => "in",
        }
    }
}

impl ScaledUnit for LengthUnit {
    fn base_factor(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Millimeter => 1e-3,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Inch => 0.0254,
        }
    }
}

pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    super::convert_scaled(value, from, to)
}
