use serde::{Deserialize, Serialize};

use super::ScaledUnit;

/// 열량 단위. 기준은 kJ (제품 열량이 kJ/day로 계산되므로).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Kilojoule,
    Megajoule,
    KilowattHour,
    Btu,
}

impl EnergyUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::Kilojoule => "kJ",
            EnergyUnit::Megajoule => "MJ",
            EnergyUnit::KilowattHour => "kWh",
            EnergyUnit::Btu => "Btu",
        }
    }
}

impl ScaledUnit for EnergyUnit {
    fn base_factor(self) -> f64 {
        match self {
            EnergyUnit::Kilojoule => 1.0,
            EnergyUnit::Megajoule => 1000.0,
            EnergyUnit::KilowattHour => 3600.0,
            EnergyUnit::Btu => 1.055_056,
        }
    }
}

pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    super::convert_scaled(value, from, to)
}
