use serde::{Deserialize, Serialize};

use super::ScaledUnit;

/// 온도 단위. 계산 기준은 °C이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

/// 온도차(ΔT)의 배율. 1 단위 차이가 몇 K인지.
impl ScaledUnit for TemperatureUnit {
    fn base_factor(self) -> f64 {
        match self {
            TemperatureUnit::Kelvin | TemperatureUnit::Celsius => 1.0,
            TemperatureUnit::Fahrenheit => 5.0 / 9.0,
        }
    }
}

fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value - 273.15,
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
    }
}

fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_c + 273.15,
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Fahrenheit => value_c * 9.0 / 5.0 + 32.0,
    }
}

/// 절대 온도(설계 외기, 실내, 제품 온도)를 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    from_celsius(to_celsius(value, from), to)
}

/// 온도차를 변환한다. 영점 없이 배율만 적용한다.
pub fn convert_temperature_diff(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    super::convert_scaled(value, from, to)
}
