use serde::{Deserialize, Serialize};

use super::ScaledUnit;

/// 단열 패널 열관류율(U) 단위. 기준은 W/m²K. 열저항(R)은 같은 단위계의 역수로 표시한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatTransferUnit {
    WPerSquareMeterK,
    BtuPerHourSquareFootF,
}

impl HeatTransferUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            HeatTransferUnit::WPerSquareMeterK => "W/m²K",
            HeatTransferUnit::BtuPerHourSquareFootF => "Btu/h·ft²·°F",
        }
    }

    /// 같은 단위계의 열저항 단위 기호
    pub fn resistance_symbol(self) -> &'static str {
        match self {
            HeatTransferUnit::WPerSquareMeterK => "m²K/W",
            HeatTransferUnit::BtuPerHourSquareFootF => "h·ft²·°F/Btu",
        }
    }
}

impl ScaledUnit for HeatTransferUnit {
    fn base_factor(self) -> f64 {
        match self {
            HeatTransferUnit::WPerSquareMeterK => 1.0,
            HeatTransferUnit::BtuPerHourSquareFootF => 5.678_263,
        }
    }
}

pub fn convert_heat_transfer(value: f64, from: HeatTransferUnit, to: HeatTransferUnit) -> f64 {
    super::convert_scaled(value, from, to)
}

/// 열저항(R)을 변환한다. R = 1/U 이므로 배율이 역수가 된다.
pub fn convert_thermal_resistance(value: f64, from: HeatTransferUnit, to: HeatTransferUnit) -> f64 {
    super::convert_scaled(value, to, from)
}
