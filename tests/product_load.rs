use cold_storage_toolbox::loads::product::{product_heat, product_load, ProductHeatInput};
use cold_storage_toolbox::tables::ProductType;

fn beef(mass: f64, t_in: f64, t_out: f64) -> ProductHeatInput {
    ProductHeatInput {
        mass_kg: mass,
        incoming_temp_c: t_in,
        outgoing_temp_c: t_out,
        properties: ProductType::Beef.properties(),
    }
}

#[test]
fn beef_default_heat_terms() {
    let heat = product_heat(beef(1000.0, 25.0, -18.0));
    assert!((heat.sensible_above_kj - 83_838.0).abs() < 1e-6);
    assert!((heat.latent_kj - 233_000.0).abs() < 1e-6);
    assert!((heat.sensible_below_kj - 27_710.0).abs() < 1e-6);
    let load = product_load(&heat);
    assert!((load.total_kw - heat.total_kj() / 86_400.0).abs() < 1e-12);
}

#[test]
fn incoming_below_freezing_drops_above_term_only() {
    let heat = product_heat(beef(500.0, -5.0, -18.0));
    assert_eq!(heat.sensible_above_kj, 0.0);
    assert!(heat.latent_kj > 0.0);
    assert!(heat.sensible_below_kj > 0.0);
}

#[test]
fn outgoing_above_freezing_drops_below_term_only() {
    let heat = product_heat(beef(500.0, 10.0, 2.0));
    assert!(heat.sensible_above_kj > 0.0);
    assert_eq!(heat.sensible_below_kj, 0.0);
    // 잠열은 온도 범위와 무관하게 포함된다
    assert_eq!(heat.latent_kj, 500.0 * 233.0);
}

#[test]
fn zero_mass_gives_zero_load() {
    let load = product_load(&product_heat(beef(0.0, 25.0, -18.0)));
    assert_eq!(load.total_kw, 0.0);
}

#[test]
fn incoming_at_freezing_point_has_no_above_term() {
    let tf = ProductType::Beef.properties().freezing_point_c;
    let heat = product_heat(beef(500.0, tf, -18.0));
    assert_eq!(heat.sensible_above_kj, 0.0);
    assert!(heat.sensible_below_kj > 0.0);
}

#[test]
fn outgoing_at_freezing_point_has_no_below_term() {
    let tf = ProductType::Beef.properties().freezing_point_c;
    let heat = product_heat(beef(500.0, 10.0, tf));
    assert!(heat.sensible_above_kj > 0.0);
    assert_eq!(heat.sensible_below_kj, 0.0);

    let held = product_heat(beef(500.0, tf, tf));
    assert_eq!(held.sensible_above_kj, 0.0);
    assert_eq!(held.sensible_below_kj, 0.0);
}
