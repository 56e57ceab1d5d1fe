use serde::{Deserialize, Serialize};

use crate::inputs::Construction;
use crate::tables::{self, InsulationType};

/// 단열 사양의 열성능 평가 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalRating {
    pub insulation: Option<InsulationType>,
    pub thickness_mm: u32,
    /// 열관류율 U [W/m²K]. 표에 없는 조합이면 0.
    pub u_factor_w_m2k: f64,
    /// 열저항 R [m²K/W]. U가 0이면 정의되지 않으므로 `None`.
    pub r_value_m2k_w: Option<f64>,
}

impl ThermalRating {
    /// U값을 표에서 찾았는지 여부.
    pub fn is_tabulated(&self) -> bool {
        self.u_factor_w_m2k > 0.0
    }
}

/// 단열재 종류/두께로 U값과 R값을 구한다.
pub fn evaluate_construction(construction: &Construction) -> ThermalRating {
    let u = construction
        .insulation
        .and_then(|ins| tables::u_factor_for(ins, construction.thickness_mm))
        .unwrap_or(0.0);
    ThermalRating {
        insulation: construction.insulation,
        thickness_mm: construction.thickness_mm,
        u_factor_w_m2k: u,
        r_value_m2k_w: r_value(u),
    }
}

/// R = 1/U. U가 0 이하이면 `None`.
pub fn r_value(u_factor: f64) -> Option<f64> {
    if u_factor > 0.0 {
        Some(1.0 / u_factor)
    } else {
        None
    }
}
