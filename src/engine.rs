//! 냉동 부하 계산 엔진.
//!
//! 다섯 개의 입력 레코드를 받아 [`LoadBreakdown`]을 만드는 순수 함수다. 입출력도, 내부 상태도
//! 없으므로 입력이 바뀔 때마다 다시 호출하면 된다.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::breakdown::{Diagnostic, LoadBreakdown, ProductSummary};
use crate::construction::evaluate_construction;
use crate::geometry::compute_areas;
use crate::inputs::{
    any_exceeds_limit, finite_or_zero, non_negative, AmbientConditions, Construction,
    OperationalLoads, ProductProfile, RoomGeometry,
};
use crate::loads::{self, InfiltrationSettings};
use crate::tables::ProductProperties;

/// 엔진에서 조정 가능한 상수 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub infiltration: InfiltrationSettings,
}

/// 한 번의 평가에 필요한 입력 전체.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EvaluationInputs {
    pub room: RoomGeometry,
    pub construction: Construction,
    pub conditions: AmbientConditions,
    pub product: ProductProfile,
    pub operations: OperationalLoads,
}

impl EvaluationInputs {
    pub fn evaluate(&self, settings: &EngineSettings) -> LoadBreakdown {
        evaluate_with(
            settings,
            &self.room,
            &self.construction,
            &self.conditions,
            &self.product,
            &self.operations,
        )
    }
}

/// 기본 설정으로 부하를 계산한다.
pub fn evaluate(
    room: &RoomGeometry,
    construction: &Construction,
    conditions: &AmbientConditions,
    product: &ProductProfile,
    operations: &OperationalLoads,
) -> LoadBreakdown {
    evaluate_with(
        &EngineSettings::default(),
        room,
        construction,
        conditions,
        product,
        operations,
    )
}

/// 지정한 설정으로 부하를 계산한다. 어떤 입력에도 실패하지 않는다.
pub fn evaluate_with(
    settings: &EngineSettings,
    room: &RoomGeometry,
    construction: &Construction,
    conditions: &AmbientConditions,
    product_profile: &ProductProfile,
    operations: &OperationalLoads,
) -> LoadBreakdown {
    let mut diagnostics = Vec::new();
    if any_exceeds_limit(room, conditions, product_profile, operations) {
        diagnostics.push(Diagnostic::InputOutOfRange);
    }

    let room = room.sanitized();
    let areas = compute_areas(&room);
    let rating = evaluate_construction(construction);
    if construction.insulation.is_none() {
        diagnostics.push(Diagnostic::UnknownInsulationType);
    } else if !rating.is_tabulated() {
        diagnostics.push(Diagnostic::UntabulatedInsulationThickness);
    }

    let delta_t = conditions.temperature_difference();
    if delta_t < 0.0 {
        diagnostics.push(Diagnostic::NegativeTemperatureDifference);
    }

    let transmission =
        loads::transmission::transmission_load(&areas, rating.u_factor_w_m2k, delta_t);

    let properties = match product_profile.product {
        Some(p) => p.properties(),
        None => {
            diagnostics.push(Diagnostic::UnknownProductType);
            ProductProperties::ZEROED
        }
    };
    let heat = loads::product::product_heat(loads::product::ProductHeatInput {
        mass_kg: product_profile.daily_load_kg,
        incoming_temp_c: product_profile.incoming_temp_c,
        outgoing_temp_c: product_profile.outgoing_temp_c,
        properties,
    });
    let product_load = loads::product::product_load(&heat);

    let infiltration = loads::infiltration::infiltration_load(
        areas.volume_m3,
        areas.door_m2,
        operations.door_openings_per_day,
        delta_t,
        &settings.infiltration,
    );
    let internal = loads::internal::internal_load(operations);
    let totals =
        loads::aggregate::aggregate(&transmission, &product_load, &infiltration, &internal);

    if product_profile.storage.is_none() {
        diagnostics.push(Diagnostic::UnknownStorageType);
    }
    let storage = loads::aggregate::storage_capacity(
        areas.volume_m3,
        &properties,
        product_profile.storage,
        product_profile.daily_load_kg,
    );
    if storage.maximum_kg <= 0.0 {
        diagnostics.push(Diagnostic::ZeroStorageCapacity);
    }

    let pull_down =
        loads::aggregate::pull_down_hours(heat.total_kj(), totals.total_with_safety_kw);
    if pull_down.is_none() {
        diagnostics.push(Diagnostic::NonPositiveCoolingLoad);
    }

    debug!(
        total_kw = totals.total_with_safety_kw,
        volume_m3 = areas.volume_m3,
        diagnostics = diagnostics.len(),
        "cooling load evaluated"
    );

    LoadBreakdown {
        room,
        areas,
        conditions: conditions.sanitized(),
        temperature_difference_k: delta_t,
        construction: rating,
        transmission,
        product_info: ProductSummary {
            product: product_profile.product,
            properties,
            daily_load_kg: non_negative(product_profile.daily_load_kg),
            incoming_temp_c: finite_or_zero(product_profile.incoming_temp_c),
            outgoing_temp_c: finite_or_zero(product_profile.outgoing_temp_c),
        },
        product: product_load,
        air_change_rate_per_h: non_negative(settings.infiltration.air_changes_per_hour),
        air_infiltration_kw: infiltration.air_change_kw,
        door_openings_per_day: non_negative(operations.door_openings_per_day),
        door_load_kw: infiltration.door_opening_kw,
        working_hours: non_negative(operations.working_hours).min(24.0),
        internal,
        total_load_kw: totals.total_kw,
        safety_margin_kw: totals.safety_margin_kw,
        total_load_with_safety_kw: totals.total_with_safety_kw,
        daily_energy_kwh: totals.total_with_safety_kw * 24.0,
        storage,
        pull_down_estimate_h: pull_down,
        diagnostics,
    }
}
