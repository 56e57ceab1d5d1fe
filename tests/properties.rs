use cold_storage_toolbox::geometry::compute_areas;
use cold_storage_toolbox::inputs::{AmbientConditions, RoomGeometry};
use cold_storage_toolbox::{EngineSettings, EvaluationInputs};
use proptest::prelude::*;

fn room_strategy() -> impl Strategy<Value = RoomGeometry> {
    (0.0..50.0f64, 0.0..50.0f64, 0.0..15.0f64, 0.0..5.0f64, 0.0..5.0f64).prop_map(
        |(length_m, width_m, height_m, door_width_m, door_height_m)| RoomGeometry {
            length_m,
            width_m,
            height_m,
            door_width_m,
            door_height_m,
        },
    )
}

proptest! {
    #[test]
    fn volume_and_floor_follow_dimensions(room in room_strategy()) {
        let a = compute_areas(&room);
        let volume = room.length_m * room.width_m * room.height_m;
        prop_assert!((a.volume_m3 - volume).abs() <= 1e-9 * volume.max(1.0));
        prop_assert_eq!(a.ceiling_m2, a.floor_m2);
        prop_assert!(a.wall_m2 >= 0.0);
    }

    #[test]
    fn safety_margin_is_ten_percent(
        room in room_strategy(),
        external in -20.0..50.0f64,
        internal in -40.0..10.0f64,
    ) {
        let inputs = EvaluationInputs {
            room,
            conditions: AmbientConditions {
                external_temp_c: external,
                internal_temp_c: internal,
                operating_hours: 24.0,
            },
            ..EvaluationInputs::default()
        };
        let b = inputs.evaluate(&EngineSettings::default());
        let expected = b.total_load_kw * 1.1;
        let tol = 1e-9 * expected.abs().max(1.0);
        prop_assert!((b.total_load_with_safety_kw - expected).abs() <= tol);
        prop_assert_eq!(b.storage.maximum_kg > 0.0, b.volume_m3() > 0.0);
        if b.storage.maximum_kg <= 0.0 {
            prop_assert_eq!(b.storage.utilization_pct, 0.0);
        }
    }

    #[test]
    fn garbage_text_never_breaks_evaluation(s in "[0-9a-z.+ -]{0,4}") {
        let mut project = cold_storage_toolbox::project::RawProject::default();
        project.room.length = s.clone();
        project.conditions.external_temp = s.clone();
        project.construction.insulation_thickness = s.clone();
        project.product.daily_load = s;
        let b = project.to_inputs().evaluate(&EngineSettings::default());
        prop_assert!(b.total_load_with_safety_kw.is_finite());
        prop_assert!(b.storage.utilization_pct.is_finite());
    }

    #[test]
    fn huge_exponents_keep_totals_finite(
        dims in proptest::collection::vec("[0-9]e[0-9]{1,3}", 3),
        temp in "-?[0-9]e[0-9]{1,3}",
        mass in "[0-9]e[0-9]{1,3}",
    ) {
        let mut project = cold_storage_toolbox::project::RawProject::default();
        project.room.length = dims[0].clone();
        project.room.width = dims[1].clone();
        project.room.height = dims[2].clone();
        project.conditions.external_temp = temp;
        project.product.daily_load = mass;
        let b = project.to_inputs().evaluate(&EngineSettings::default());
        prop_assert!(b.total_load_kw.is_finite());
        let expected = b.total_load_kw * 1.1;
        let tol = 1e-9 * expected.abs().max(1.0);
        prop_assert!((b.total_load_with_safety_kw - expected).abs() <= tol);
        prop_assert!(b.storage.utilization_pct.is_finite());
        if let Some(h) = b.pull_down_estimate_h {
            prop_assert!(h.is_finite());
        }
    }
}
