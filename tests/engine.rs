use cold_storage_toolbox::{
    evaluate, evaluate_with,
    inputs::{
        AmbientConditions, Construction, OperationalLoads, ProductProfile, RoomGeometry,
        INPUT_LIMIT,
    },
    loads::InfiltrationSettings,
    tables::{InsulationType, ProductType, StorageType},
    Diagnostic, EngineSettings, EvaluationInputs,
};

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

fn default_breakdown() -> cold_storage_toolbox::LoadBreakdown {
    EvaluationInputs::default().evaluate(&EngineSettings::default())
}

#[test]
fn default_scenario_totals() {
    let b = default_breakdown();
    assert!(b.is_clean(), "diagnostics={:?}", b.diagnostics);
    assert!(close(b.volume_m3(), 30.0, 1e-12));
    assert!(close(b.areas.wall_m2, 35.0, 1e-12));
    assert!(close(b.temperature_difference_k, 53.0, 1e-12));
    assert!(close(b.transmission.total_kw, 0.459669, 1e-9));
    assert!(close(b.product.total_kw, 344_548.0 / 86_400.0, 1e-9));
    assert!(close(b.air_infiltration_kw, 0.266325, 1e-9));
    assert!(close(b.door_load_kw, 28_500.0 / 86_400.0, 1e-9));
    assert!(close(b.internal.total_kw, 0.585_666_7, 1e-6));
    assert!(close(b.total_load_kw, 5.629_346, 1e-5), "total={}", b.total_load_kw);
    assert!(close(b.total_load_with_safety_kw, 6.192_280, 1e-5));
    assert!(close(b.daily_energy_kwh, b.total_load_with_safety_kw * 24.0, 1e-9));
    assert!(close(b.storage.maximum_kg, 12_048.75, 1e-6));
    assert!(close(b.storage.utilization_pct, 8.2996, 1e-3));
    let pull_down = b.pull_down_estimate_h.expect("positive capacity");
    assert!(close(pull_down, 15.456, 1e-2), "pull_down={pull_down}");
}

#[test]
fn total_is_sum_of_components() {
    let b = default_breakdown();
    let sum = b.transmission.total_kw
        + b.product.total_kw
        + b.air_infiltration_kw
        + b.door_load_kw
        + b.internal.total_kw;
    assert!(close(b.total_load_kw, sum, 1e-12));
    assert!(close(b.safety_margin_kw, 0.1 * b.total_load_kw, 1e-12));
    let t = b.transmission;
    assert!(close(t.total_kw, t.walls_kw + t.ceiling_kw + t.floor_kw, 1e-12));
}

#[test]
fn evaluation_is_idempotent() {
    let inputs = EvaluationInputs::default();
    let settings = EngineSettings::default();
    assert_eq!(inputs.evaluate(&settings), inputs.evaluate(&settings));
}

#[test]
fn free_function_matches_inputs_method() {
    let i = EvaluationInputs::default();
    let b = evaluate(&i.room, &i.construction, &i.conditions, &i.product, &i.operations);
    assert_eq!(b, default_breakdown());
}

#[test]
fn unknown_codes_fall_back_with_diagnostics() {
    let b = evaluate(
        &RoomGeometry::default(),
        &Construction {
            insulation: None,
            thickness_mm: 150,
        },
        &AmbientConditions::default(),
        &ProductProfile {
            product: None,
            storage: None,
            ..ProductProfile::default()
        },
        &OperationalLoads::default(),
    );
    assert_eq!(b.construction.u_factor_w_m2k, 0.0);
    assert_eq!(b.construction.r_value_m2k_w, None);
    assert_eq!(b.transmission.total_kw, 0.0);
    assert_eq!(b.product.total_kw, 0.0);
    assert_eq!(b.storage.storage_factor, 1.0);
    assert_eq!(b.storage.maximum_kg, 0.0);
    assert_eq!(b.storage.utilization_pct, 0.0);
    for d in [
        Diagnostic::UnknownInsulationType,
        Diagnostic::UnknownProductType,
        Diagnostic::UnknownStorageType,
        Diagnostic::ZeroStorageCapacity,
    ] {
        assert!(b.has(d), "missing {d:?}");
    }
    assert!(b.total_load_with_safety_kw > 0.0);
}

#[test]
fn untabulated_thickness_is_flagged() {
    let construction = Construction {
        insulation: Some(InsulationType::Eps),
        thickness_mm: 90,
    };
    let i = EvaluationInputs {
        construction,
        ..EvaluationInputs::default()
    };
    let b = i.evaluate(&EngineSettings::default());
    assert_eq!(b.construction.u_factor_w_m2k, 0.0);
    assert!(b.has(Diagnostic::UntabulatedInsulationThickness));
    assert!(!b.has(Diagnostic::UnknownInsulationType));
}

#[test]
fn warmer_inside_gives_negative_transmission() {
    let i = EvaluationInputs {
        conditions: AmbientConditions {
            external_temp_c: 10.0,
            internal_temp_c: 20.0,
            operating_hours: 24.0,
        },
        ..EvaluationInputs::default()
    };
    let b = i.evaluate(&EngineSettings::default());
    assert!(b.transmission.total_kw < 0.0);
    assert!(b.air_infiltration_kw < 0.0);
    assert!(b.has(Diagnostic::NegativeTemperatureDifference));
}

#[test]
fn zero_room_has_no_pull_down_when_nothing_to_cool() {
    let i = EvaluationInputs {
        room: RoomGeometry {
            length_m: 0.0,
            width_m: 0.0,
            height_m: 0.0,
            door_width_m: 0.0,
            door_height_m: 0.0,
        },
        product: ProductProfile {
            daily_load_kg: 0.0,
            ..ProductProfile::default()
        },
        operations: OperationalLoads {
            number_of_people: 0.0,
            working_hours: 0.0,
            door_openings_per_day: 0.0,
            lighting_w: 0.0,
            equipment_w: 0.0,
        },
        ..EvaluationInputs::default()
    };
    let b = i.evaluate(&EngineSettings::default());
    assert_eq!(b.total_load_with_safety_kw, 0.0);
    assert_eq!(b.pull_down_estimate_h, None);
    assert!(b.has(Diagnostic::NonPositiveCoolingLoad));
    assert!(b.has(Diagnostic::ZeroStorageCapacity));
}

#[test]
fn infiltration_settings_scale_air_change_load() {
    let base = default_breakdown();
    let settings = EngineSettings {
        infiltration: InfiltrationSettings {
            air_changes_per_hour: 1.0,
            ..InfiltrationSettings::default()
        },
    };
    let i = EvaluationInputs::default();
    let b = evaluate_with(
        &settings,
        &i.room,
        &i.construction,
        &i.conditions,
        &i.product,
        &i.operations,
    );
    assert!(close(b.air_infiltration_kw, 2.0 * base.air_infiltration_kw, 1e-12));
    assert_eq!(b.air_change_rate_per_h, 1.0);
    assert_eq!(b.door_load_kw, base.door_load_kw);
}

#[test]
fn ice_cream_bulk_storage_uses_its_properties() {
    let i = EvaluationInputs {
        product: ProductProfile {
            product: Some(ProductType::IceCream),
            storage: Some(StorageType::Bulk),
            ..ProductProfile::default()
        },
        ..EvaluationInputs::default()
    };
    let b = i.evaluate(&EngineSettings::default());
    assert!(close(b.storage.maximum_kg, 30.0 * 550.0 * 0.55 * 0.95, 1e-9));
    assert_eq!(b.product_info.properties.freezing_point_c, -5.6);
}

#[test]
fn huge_dimensions_are_clamped_not_overflowed() {
    let b = evaluate(
        &RoomGeometry {
            length_m: 1e200,
            width_m: 1e200,
            height_m: 1e200,
            door_width_m: 1.0,
            door_height_m: 2.0,
        },
        &Construction::default(),
        &AmbientConditions {
            external_temp_c: 0.0,
            internal_temp_c: 0.0,
            operating_hours: 24.0,
        },
        &ProductProfile::default(),
        &OperationalLoads::default(),
    );
    assert!(b.has(Diagnostic::InputOutOfRange));
    assert!(!b.has(Diagnostic::ZeroStorageCapacity));
    assert_eq!(b.room.length_m, INPUT_LIMIT);
    assert!(b.volume_m3().is_finite() && b.volume_m3() > 0.0);
    assert!(b.total_load_kw.is_finite());
    assert!(close(
        b.total_load_with_safety_kw,
        b.total_load_kw * 1.1,
        1e-9 * b.total_load_kw.abs()
    ));
    assert!(b.storage.utilization_pct.is_finite());
    assert!(b.pull_down_estimate_h.is_some());
}

#[test]
fn ordinary_inputs_are_not_flagged_out_of_range() {
    assert!(!default_breakdown().has(Diagnostic::InputOutOfRange));
}
