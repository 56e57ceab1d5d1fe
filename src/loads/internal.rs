use serde::{Deserialize, Serialize};

use crate::inputs::{non_negative, OperationalLoads};
use crate::units::watts_to_kw;

/// 작업자 1인 발열량 [kW] (저온 작업 기준)
pub const PEOPLE_HEAT_KW: f64 = 0.407;

/// 내부 발열 부하 [kW].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InternalLoad {
    pub people_kw: f64,
    pub lighting_kw: f64,
    pub equipment_kw: f64,
    pub total_kw: f64,
}

/// 인원, 조명, 장비 발열을 계산한다.
///
/// 인원 부하는 하루 중 체류 비율(working_hours/24)로 평균한다. 체류 시간은 0~24h로 제한한다.
pub fn internal_load(ops: &OperationalLoads) -> InternalLoad {
    let occupied_fraction = non_negative(ops.working_hours).min(24.0) / 24.0;
    let people_kw = non_negative(ops.number_of_people) * PEOPLE_HEAT_KW * occupied_fraction;
    let lighting_kw = watts_to_kw(non_negative(ops.lighting_w));
    let equipment_kw = watts_to_kw(non_negative(ops.equipment_w));
    InternalLoad {
        people_kw,
        lighting_kw,
        equipment_kw,
        total_kw: people_kw + lighting_kw + equipment_kw,
    }
}
