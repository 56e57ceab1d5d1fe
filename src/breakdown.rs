//! 1회 평가 결과(부하 내역)를 표현한다.

use serde::{Deserialize, Serialize};

use crate::construction::ThermalRating;
use crate::geometry::RoomAreas;
use crate::inputs::{AmbientConditions, RoomGeometry};
use crate::loads::{InternalLoad, ProductLoad, StorageCapacity, TransmissionLoad};
use crate::tables::{ProductProperties, ProductType};

/// 계산 중 대체값을 사용했거나 결과가 퇴화했음을 알린다.
///
/// 진짜 0 부하와 "입력이 잘못되어 0이 된" 결과를 구분하는 용도다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnostic {
    /// 단열재 코드를 알 수 없어 U=0으로 계산함
    UnknownInsulationType,
    /// 단열 두께가 표에 없어 U=0으로 계산함
    UntabulatedInsulationThickness,
    /// 제품 코드를 알 수 없어 열물성을 0으로 계산함
    UnknownProductType,
    /// 적재 방식을 알 수 없어 중립 계수(1.0)를 적용함
    UnknownStorageType,
    /// 실내 온도가 외기보다 높아 전열/환기 부하가 음수임
    NegativeTemperatureDifference,
    /// 최대 저장량이 0이라 이용률을 0%로 보고함
    ZeroStorageCapacity,
    /// 총 냉동능력이 0 이하라 풀다운 시간을 정의할 수 없음
    NonPositiveCoolingLoad,
    /// 허용 범위를 넘는 숫자를 한계값으로 잘라 계산함
    InputOutOfRange,
}

impl Diagnostic {
    pub fn code(self) -> &'static str {
        match self {
            Diagnostic::UnknownInsulationType => "unknown_insulation_type",
            Diagnostic::UntabulatedInsulationThickness => "untabulated_insulation_thickness",
            Diagnostic::UnknownProductType => "unknown_product_type",
            Diagnostic::UnknownStorageType => "unknown_storage_type",
            Diagnostic::NegativeTemperatureDifference => "negative_temperature_difference",
            Diagnostic::ZeroStorageCapacity => "zero_storage_capacity",
            Diagnostic::NonPositiveCoolingLoad => "non_positive_cooling_load",
            Diagnostic::InputOutOfRange => "input_out_of_range",
        }
    }
}

/// 제품 관련 입력 요약.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub product: Option<ProductType>,
    pub properties: ProductProperties,
    pub daily_load_kg: f64,
    pub incoming_temp_c: f64,
    pub outgoing_temp_c: f64,
}

/// 부하 계산 결과 전체.
///
/// 모든 부하는 kW 단위이다. 같은 입력으로 두 번 평가하면 `==`로 같은 값이 나온다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBreakdown {
    pub room: RoomGeometry,
    pub areas: RoomAreas,
    pub conditions: AmbientConditions,
    /// ΔT = 외기 - 실내 [K]
    pub temperature_difference_k: f64,
    pub construction: ThermalRating,
    pub transmission: TransmissionLoad,
    pub product_info: ProductSummary,
    pub product: ProductLoad,
    /// 적용된 환기 횟수 [1/h]
    pub air_change_rate_per_h: f64,
    pub air_infiltration_kw: f64,
    pub door_openings_per_day: f64,
    pub door_load_kw: f64,
    pub working_hours: f64,
    pub internal: InternalLoad,
    pub total_load_kw: f64,
    pub safety_margin_kw: f64,
    pub total_load_with_safety_kw: f64,
    /// 안전율 포함 능력으로 24시간 운전 시 일일 에너지 [kWh/day]
    pub daily_energy_kwh: f64,
    pub storage: StorageCapacity,
    /// 풀다운 시간 추정치 [h]. 냉동능력이 0이면 `None`.
    pub pull_down_estimate_h: Option<f64>,
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadBreakdown {
    pub fn volume_m3(&self) -> f64 {
        self.areas.volume_m3
    }

    /// 대체값 없이 정상 계산되었는지 여부.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has(&self, diagnostic: Diagnostic) -> bool {
        self.diagnostics.contains(&diagnostic)
    }
}
