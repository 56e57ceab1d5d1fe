use serde::{Deserialize, Serialize};

use crate::inputs::{finite_or_zero, non_negative};
use crate::units::kj_per_day_to_kw;

/// 침입 공기 계산 상수. config.toml의 `[engine.infiltration]`에서 바꿀 수 있다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfiltrationSettings {
    /// 자연 환기 횟수 [1/h]
    pub air_changes_per_hour: f64,
    /// 공기 체적 열용량 ρ·cp [kJ/m³·K]
    pub air_heat_capacity_kj_per_m3k: f64,
    /// 문 1회 개방 시 문 면적당 유입 열량 [kJ/m²]
    pub door_opening_heat_kj_per_m2: f64,
}

impl Default for InfiltrationSettings {
    fn default() -> Self {
        Self {
            air_changes_per_hour: 0.5,
            // ρ 1.2 kg/m³ × cp 1.005 kJ/kg·K
            air_heat_capacity_kj_per_m3k: 1.206,
            // 2 m² 문, 개방 60초, 유속 0.5 m/s, ΔT 약 53 K 기준 추정치
            door_opening_heat_kj_per_m2: 950.0,
        }
    }
}

/// 침입 공기 부하 [kW].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InfiltrationLoad {
    pub air_change_kw: f64,
    pub door_opening_kw: f64,
}

impl InfiltrationLoad {
    pub fn total_kw(&self) -> f64 {
        self.air_change_kw + self.door_opening_kw
    }
}

/// 환기(교체 공기) 냉각 부하. Q = V·ACH·ρcp·ΔT / 3600.
pub fn air_change_load(volume_m3: f64, delta_t_k: f64, settings: &InfiltrationSettings) -> f64 {
    let volume = non_negative(volume_m3);
    let ach = non_negative(settings.air_changes_per_hour);
    let rho_cp = non_negative(settings.air_heat_capacity_kj_per_m3k);
    // m³/h × kJ/m³K × K = kJ/h
    volume * ach * rho_cp * finite_or_zero(delta_t_k) / 3600.0
}

/// 문 개방 부하. Q = A_door·N·q_open, 하루 평균 kW로 환산한다.
pub fn door_opening_load(
    door_area_m2: f64,
    openings_per_day: f64,
    settings: &InfiltrationSettings,
) -> f64 {
    let kj_per_day = non_negative(door_area_m2)
        * non_negative(openings_per_day)
        * non_negative(settings.door_opening_heat_kj_per_m2);
    kj_per_day_to_kw(kj_per_day)
}

/// 환기 부하와 문 개방 부하를 함께 계산한다.
pub fn infiltration_load(
    volume_m3: f64,
    door_area_m2: f64,
    openings_per_day: f64,
    delta_t_k: f64,
    settings: &InfiltrationSettings,
) -> InfiltrationLoad {
    InfiltrationLoad {
        air_change_kw: air_change_load(volume_m3, delta_t_k, settings),
        door_opening_kw: door_opening_load(door_area_m2, openings_per_day, settings),
    }
}
