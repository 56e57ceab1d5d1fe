use serde::{Deserialize, Serialize};

use crate::geometry::RoomAreas;
use crate::inputs::finite_or_zero;

/// 외피 전열 부하 [kW].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TransmissionLoad {
    pub walls_kw: f64,
    pub ceiling_kw: f64,
    pub floor_kw: f64,
    pub total_kw: f64,
}

/// 벽/천장/바닥을 통한 전열 부하를 계산한다. Q = U·A·ΔT / 1000.
///
/// ΔT가 0 이하이면 부하도 0 이하가 된다. 실내가 외기보다 따뜻한 입력은 호출 측 오류로 본다.
pub fn transmission_load(
    areas: &RoomAreas,
    u_factor_w_m2k: f64,
    delta_t_k: f64,
) -> TransmissionLoad {
    let u = finite_or_zero(u_factor_w_m2k);
    let dt = finite_or_zero(delta_t_k);
    let surface = |area_m2: f64| u * area_m2 * dt / 1000.0;

    let walls_kw = surface(areas.wall_m2);
    let ceiling_kw = surface(areas.ceiling_m2);
    let floor_kw = surface(areas.floor_m2);
    TransmissionLoad {
        walls_kw,
        ceiling_kw,
        floor_kw,
        total_kw: walls_kw + ceiling_kw + floor_kw,
    }
}
