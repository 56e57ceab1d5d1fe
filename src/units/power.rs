use serde::{Deserialize, Serialize};

use super::ScaledUnit;

/// 하루 초(s)
pub const SECONDS_PER_DAY: f64 = 24.0 * 3600.0;

/// 냉동능력 단위. 내부 기준은 kW이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    /// 미국 냉동톤 (12 000 Btu/h)
    TonRefrigeration,
    BtuPerHour,
    KcalPerHour,
}

impl PowerUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            PowerUnit::Watt => "W",
            PowerUnit::Kilowatt => "kW",
            PowerUnit::TonRefrigeration => "TR",
            PowerUnit::BtuPerHour => "Btu/h",
            PowerUnit::KcalPerHour => "kcal/h",
        }
    }
}

impl ScaledUnit for PowerUnit {
    fn base_factor(self) -> f64 {
        match self {
            PowerUnit::Watt => 1e-3,
            PowerUnit::Kilowatt => 1.0,
            PowerUnit::TonRefrigeration => 3.516_853,
            PowerUnit::BtuPerHour => 3.516_853 / 12_000.0,
            PowerUnit::KcalPerHour => 0.001_163,
        }
    }
}

pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    super::convert_scaled(value, from, to)
}

/// 하루 동안의 열량[kJ/day]을 24시간 균등 분배한 평균 동력[kW]으로 환산한다.
pub fn kj_per_day_to_kw(kj_per_day: f64) -> f64 {
    kj_per_day / SECONDS_PER_DAY
}

/// W → kW
pub fn watts_to_kw(watts: f64) -> f64 {
    convert_power(watts, PowerUnit::Watt, PowerUnit::Kilowatt)
}
