use serde::{Deserialize, Serialize};

use crate::inputs::{finite_or_zero, non_negative};
use crate::tables::ProductProperties;
use crate::units::kj_per_day_to_kw;

/// 제품 냉각/동결 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct ProductHeatInput {
    /// 일일 입고량 [kg/day]
    pub mass_kg: f64,
    /// 입고 온도 [°C]
    pub incoming_temp_c: f64,
    /// 출고(목표) 온도 [°C]
    pub outgoing_temp_c: f64,
    pub properties: ProductProperties,
}

/// 하루 동안 제거해야 하는 제품 열량 [kJ/day].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductHeat {
    pub sensible_above_kj: f64,
    pub latent_kj: f64,
    pub sensible_below_kj: f64,
}

impl ProductHeat {
    pub fn total_kj(&self) -> f64 {
        self.sensible_above_kj + self.latent_kj + self.sensible_below_kj
    }
}

/// 제품 부하를 24시간 평균 동력으로 환산한 값 [kW].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductLoad {
    pub sensible_above_kw: f64,
    pub latent_kw: f64,
    pub sensible_below_kw: f64,
    pub total_kw: f64,
}

/// 동결점 이상 현열, 동결 잠열, 동결점 이하 현열을 각각 계산한다.
///
/// 두 현열 항의 조건(입고 > 동결점, 동결점 > 출고)은 서로 독립적으로 검사하며,
/// 조건을 만족하지 않는 항은 정확히 0이다. 잠열은 항상 1회 적용한다.
pub fn product_heat(input: ProductHeatInput) -> ProductHeat {
    let m = non_negative(input.mass_kg);
    let t_in = finite_or_zero(input.incoming_temp_c);
    let t_out = finite_or_zero(input.outgoing_temp_c);
    let p = input.properties;
    let t_f = p.freezing_point_c;

    let sensible_above_kj = if t_in > t_f {
        m * p.specific_heat_above_kj_per_kgk * (t_in - t_f)
    } else {
        0.0
    };
    let latent_kj = m * p.latent_heat_kj_per_kg;
    let sensible_below_kj = if t_f > t_out {
        m * p.specific_heat_below_kj_per_kgk * (t_f - t_out)
    } else {
        0.0
    };
    ProductHeat {
        sensible_above_kj,
        latent_kj,
        sensible_below_kj,
    }
}

/// 일일 열량을 kW로 환산한다.
pub fn product_load(heat: &ProductHeat) -> ProductLoad {
    let sensible_above_kw = kj_per_day_to_kw(heat.sensible_above_kj);
    let latent_kw = kj_per_day_to_kw(heat.latent_kj);
    let sensible_below_kw = kj_per_day_to_kw(heat.sensible_below_kj);
    ProductLoad {
        sensible_above_kw,
        latent_kw,
        sensible_below_kw,
        total_kw: sensible_above_kw + latent_kw + sensible_below_kw,
    }
}
