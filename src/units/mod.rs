//! 단위 정의 및 변환 모듈 모음.
//!
//! 부하 계산은 항상 SI(kW, m, °C) 기준으로 수행하고, 여기의 변환은 표시용으로만 쓴다.
//! 예외는 [`power::kj_per_day_to_kw`]와 [`power::watts_to_kw`]로, 계산 엔진이 kJ/day·W 항을
//! kW 항과 합산하기 전에 반드시 거친다.

pub mod area;
pub mod energy;
pub mod heat_transfer;
pub mod length;
pub mod mass;
pub mod power;
pub mod temperature;
pub mod volume;

pub use area::{convert_area, AreaUnit};
pub use energy::{convert_energy, EnergyUnit};
pub use heat_transfer::{convert_heat_transfer, convert_thermal_resistance, HeatTransferUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use power::{convert_power, kj_per_day_to_kw, watts_to_kw, PowerUnit, SECONDS_PER_DAY};
pub use temperature::{convert_temperature, convert_temperature_diff, TemperatureUnit};
pub use volume::{convert_volume, VolumeUnit};

/// 기준 단위에 대한 배율 하나로 변환되는 단위. 온도처럼 영점이 다른 단위는 해당하지 않는다.
pub trait ScaledUnit: Copy {
    /// 이 단위의 1이 기준 단위로 얼마인지
    fn base_factor(self) -> f64;
}

/// 배율 단위 사이의 변환.
pub fn convert_scaled<U: ScaledUnit>(value: f64, from: U, to: U) -> f64 {
    value * from.base_factor() / to.base_factor()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn refrigeration_ton_in_kw() {
        let tr = convert_power(1.0, PowerUnit::TonRefrigeration, PowerUnit::Kilowatt);
        assert!(close(tr, 3.516_853));
        let btu = convert_power(12_000.0, PowerUnit::BtuPerHour, PowerUnit::TonRefrigeration);
        assert!(close(btu, 1.0));
    }

    #[test]
    fn daily_energy_spreads_over_a_day() {
        assert!(close(kj_per_day_to_kw(86_400.0), 1.0));
        assert!(close(watts_to_kw(150.0), 0.15));
    }

    #[test]
    fn room_quantities_to_imperial() {
        assert!(close(convert_length(1.0, LengthUnit::Foot, LengthUnit::Meter), 0.3048));
        assert!(close(
            convert_area(1.0, AreaUnit::SquareMeter, AreaUnit::SquareFoot),
            1.0 / 0.092_903_04
        ));
        assert!(close(convert_volume(30.0, VolumeUnit::CubicMeter, VolumeUnit::Liter), 30_000.0));
        assert!(close(convert_mass(1.0, MassUnit::Tonne, MassUnit::Kilogram), 1000.0));
        assert!(close(
            convert_energy(1.0, EnergyUnit::KilowattHour, EnergyUnit::Kilojoule),
            3600.0
        ));
    }

    #[test]
    fn temperature_difference_has_no_offset() {
        let (c, f) = (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
        assert!(close(convert_temperature_diff(53.0, c, f), 95.4));
        assert!(close(convert_temperature(-18.0, c, f), -0.4));
    }

    #[test]
    fn resistance_scales_inversely() {
        let si = HeatTransferUnit::WPerSquareMeterK;
        let ip = HeatTransferUnit::BtuPerHourSquareFootF;
        let u = convert_heat_transfer(0.147, si, ip);
        let r = convert_thermal_resistance(1.0 / 0.147, si, ip);
        assert!(close(u * r, 1.0));
    }
}
