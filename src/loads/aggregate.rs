use serde::{Deserialize, Serialize};

use crate::inputs::non_negative;
use crate::tables::{ProductProperties, StorageType, NEUTRAL_STORAGE_FACTOR};

use super::{InfiltrationLoad, InternalLoad, ProductLoad, TransmissionLoad};

/// 장비 선정용 안전율(10%)
pub const SAFETY_FRACTION: f64 = 0.10;

/// 전체 부하 합계 [kW].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadTotals {
    pub total_kw: f64,
    pub safety_margin_kw: f64,
    pub total_with_safety_kw: f64,
}

/// 각 항목 부하를 더하고 안전율을 적용한다.
pub fn aggregate(
    transmission: &TransmissionLoad,
    product: &ProductLoad,
    infiltration: &InfiltrationLoad,
    internal: &InternalLoad,
) -> LoadTotals {
    let total_kw = transmission.total_kw
        + product.total_kw
        + infiltration.total_kw()
        + internal.total_kw;
    let total_with_safety_kw = total_kw * (1.0 + SAFETY_FRACTION);
    LoadTotals {
        total_kw,
        safety_margin_kw: total_with_safety_kw - total_kw,
        total_with_safety_kw,
    }
}

/// 저장 용량과 이용률.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorageCapacity {
    pub storage: Option<StorageType>,
    /// 적용된 적재 계수. 적재 방식을 모르면 중립값 1.0.
    pub storage_factor: f64,
    /// 최대 저장량 [kg]
    pub maximum_kg: f64,
    /// 이용률 [%]. 최대 저장량이 0이면 0.
    pub utilization_pct: f64,
}

/// 최대 저장량 = 체적 × 밀도 × 적재 효율 × 적재 계수, 이용률 = 일일 입고량 / 최대 저장량.
pub fn storage_capacity(
    volume_m3: f64,
    properties: &ProductProperties,
    storage: Option<StorageType>,
    daily_load_kg: f64,
) -> StorageCapacity {
    let storage_factor = storage.map_or(NEUTRAL_STORAGE_FACTOR, StorageType::factor);
    let maximum_kg = non_negative(volume_m3)
        * non_negative(properties.density_kg_per_m3)
        * non_negative(properties.storage_efficiency)
        * storage_factor;
    let utilization_pct = if maximum_kg > 0.0 {
        non_negative(daily_load_kg) / maximum_kg * 100.0
    } else {
        0.0
    };
    StorageCapacity {
        storage,
        storage_factor,
        maximum_kg,
        utilization_pct,
    }
}

/// 풀다운 시간 추정치 [h].
///
/// 제품에서 제거할 일일 총 열량을 안전율 포함 냉동능력으로 나눈다. 다른 열부하를 함께
/// 처리한다는 점을 무시하므로 하한에 가까운 근사값이다. 능력이 0 이하이면 `None`.
pub fn pull_down_hours(product_heat_kj: f64, total_with_safety_kw: f64) -> Option<f64> {
    if total_with_safety_kw > 0.0 {
        Some(non_negative(product_heat_kj) / (total_with_safety_kw * 3600.0))
    } else {
        None
    }
}
