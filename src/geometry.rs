use serde::{Deserialize, Serialize};

use crate::inputs::{non_negative, RoomGeometry};

/// 방 치수에서 유도한 면적/체적.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RoomAreas {
    /// 벽 전체 면적(문 면적 미차감) [m²]
    pub wall_m2: f64,
    pub ceiling_m2: f64,
    pub floor_m2: f64,
    pub door_m2: f64,
    pub volume_m3: f64,
}

/// 벽/천장/바닥/문 면적과 체적을 계산한다.
///
/// 각 치수는 곱하기 전에 0..=[`INPUT_LIMIT`](crate::inputs::INPUT_LIMIT) 범위로 클램프하므로 음수 면적이나 무한대가 나오지 않는다.
pub fn compute_areas(room: &RoomGeometry) -> RoomAreas {
    let length = non_negative(room.length_m);
    let width = non_negative(room.width_m);
    let height = non_negative(room.height_m);
    let door_width = non_negative(room.door_width_m);
    let door_height = non_negative(room.door_height_m);

    let plan = length * width;
    RoomAreas {
        wall_m2: 2.0 * (length + width) * height,
        ceiling_m2: plan,
        floor_m2: plan,
        door_m2: door_width * door_height,
        volume_m3: plan * height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_dimension_zeroes_dependent_areas() {
        let areas = compute_areas(&RoomGeometry {
            length_m: -4.0,
            width_m: 3.0,
            height_m: 2.5,
            door_width_m: 1.0,
            door_height_m: f64::NAN,
        });
        assert_eq!(areas.ceiling_m2, 0.0);
        assert_eq!(areas.volume_m3, 0.0);
        assert_eq!(areas.door_m2, 0.0);
        // 길이만 0이 되므로 벽 면적은 2·(0+3)·2.5
        assert!((areas.wall_m2 - 15.0).abs() < 1e-12);
    }
}
