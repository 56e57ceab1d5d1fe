//! 계산 엔진에 들어가는 입력 레코드.
//!
//! 숫자 필드는 화면 입력을 변환한 값이라 NaN/무한대/음수가 섞일 수 있다. 엔진은 이를
//! 신뢰하지 않고 [`finite_or_zero`], [`non_negative`]로 다시 정리한 뒤 사용한다.

use serde::{Deserialize, Serialize};

use crate::tables::{InsulationThickness, InsulationType, ProductType, StorageType};

/// 방 치수 [m].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomGeometry {
    pub length_m: f64,
    pub width_m: f64,
    pub height_m: f64,
    pub door_width_m: f64,
    pub door_height_m: f64,
}

impl RoomGeometry {
    fn values(&self) -> [f64; 5] {
        [
            self.length_m,
            self.width_m,
            self.height_m,
            self.door_width_m,
            self.door_height_m,
        ]
    }

    /// 모든 치수를 0 이상 유한값으로 정리한 사본.
    pub fn sanitized(&self) -> Self {
        Self {
            length_m: non_negative(self.length_m),
            width_m: non_negative(self.width_m),
            height_m: non_negative(self.height_m),
            door_width_m: non_negative(self.door_width_m),
            door_height_m: non_negative(self.door_height_m),
        }
    }
}

impl Default for RoomGeometry {
    fn default() -> Self {
        Self {
            length_m: 4.0,
            width_m: 3.0,
            height_m: 2.5,
            door_width_m: 1.0,
            door_height_m: 2.0,
        }
    }
}

/// 벽/천장/바닥 단열 사양.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Construction {
    /// `None`이면 입력 단계에서 알 수 없는 단열재 코드가 들어온 것이다.
    pub insulation: Option<InsulationType>,
    /// 단열 두께 [mm]. 표에 없는 값도 그대로 보관한다.
    pub thickness_mm: u32,
}

impl Default for Construction {
    fn default() -> Self {
        Self {
            insulation: Some(InsulationType::Puf),
            thickness_mm: InsulationThickness::RECOMMENDED.mm(),
        }
    }
}

/// 외기/실내 설계 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientConditions {
    pub external_temp_c: f64,
    pub internal_temp_c: f64,
    /// 일일 운전 시간 [h/day]
    pub operating_hours: f64,
}

impl AmbientConditions {
    /// ΔT = 외기 - 실내 [K]
    pub fn temperature_difference(&self) -> f64 {
        finite_or_zero(self.external_temp_c) - finite_or_zero(self.internal_temp_c)
    }

    pub fn sanitized(&self) -> Self {
        Self {
            external_temp_c: finite_or_zero(self.external_temp_c),
            internal_temp_c: finite_or_zero(self.internal_temp_c),
            operating_hours: non_negative(self.operating_hours).min(24.0),
        }
    }
}

impl Default for AmbientConditions {
    fn default() -> Self {
        Self {
            external_temp_c: 35.0,
            internal_temp_c: -18.0,
            operating_hours: 24.0,
        }
    }
}

/// 저장 제품 정보.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductProfile {
    pub product: Option<ProductType>,
    /// 일일 입고량 [kg/day]
    pub daily_load_kg: f64,
    pub incoming_temp_c: f64,
    pub outgoing_temp_c: f64,
    pub storage: Option<StorageType>,
}

impl Default for ProductProfile {
    fn default() -> Self {
        Self {
            product: Some(ProductType::Beef),
            daily_load_kg: 1000.0,
            incoming_temp_c: 25.0,
            outgoing_temp_c: -18.0,
            storage: Some(StorageType::Boxed),
        }
    }
}

/// 운영 부하(인원, 조명, 장비, 문 개방).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationalLoads {
    pub number_of_people: f64,
    /// 1인 실내 체류 시간 [h/day]
    pub working_hours: f64,
    pub door_openings_per_day: f64,
    pub lighting_w: f64,
    pub equipment_w: f64,
}

impl Default for OperationalLoads {
    fn default() -> Self {
        Self {
            number_of_people: 2.0,
            working_hours: 4.0,
            door_openings_per_day: 15.0,
            lighting_w: 150.0,
            equipment_w: 300.0,
        }
    }
}

/// 입력 숫자 하나가 가질 수 있는 최대 크기.
///
/// 치수를 세 번 곱하고 ΔT와 상수를 더 곱해도 f64 범위를 넘지 않는다.
pub const INPUT_LIMIT: f64 = 1e9;

/// NaN/무한대를 0으로 바꾸고 나머지는 ±[`INPUT_LIMIT`]로 자른다.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(-INPUT_LIMIT, INPUT_LIMIT)
    } else {
        0.0
    }
}

/// 유한하지만 [`INPUT_LIMIT`]를 넘어 잘리는 값인지.
pub fn exceeds_limit(value: f64) -> bool {
    value.is_finite() && value.abs() > INPUT_LIMIT
}

/// 유한하지 않거나 음수인 값을 0으로 바꾼다. 치수, 질량, 횟수, 전력에 쓴다.
pub fn non_negative(value: f64) -> f64 {
    finite_or_zero(value).max(0.0)
}

/// 평가 입력 중 [`INPUT_LIMIT`]를 넘는 숫자가 하나라도 있는지.
pub(crate) fn any_exceeds_limit(
    room: &RoomGeometry,
    conditions: &AmbientConditions,
    product: &ProductProfile,
    operations: &OperationalLoads,
) -> bool {
    room.values()
        .into_iter()
        .chain([
            conditions.external_temp_c,
            conditions.internal_temp_c,
            product.daily_load_kg,
            product.incoming_temp_c,
            product.outgoing_temp_c,
            operations.number_of_people,
            operations.door_openings_per_day,
            operations.lighting_w,
            operations.equipment_w,
        ])
        .any(exceeds_limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huge_finite_values_are_clamped() {
        assert_eq!(finite_or_zero(1e200), INPUT_LIMIT);
        assert_eq!(finite_or_zero(-1e200), -INPUT_LIMIT);
        assert_eq!(non_negative(f64::MAX), INPUT_LIMIT);
        assert_eq!(non_negative(f64::INFINITY), 0.0);
        assert!(exceeds_limit(1e10));
        assert!(!exceeds_limit(f64::NAN));
        assert!(!exceeds_limit(INPUT_LIMIT));
    }
}
