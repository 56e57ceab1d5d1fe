use cold_storage_toolbox::construction::{evaluate_construction, r_value};
use cold_storage_toolbox::inputs::Construction;
use cold_storage_toolbox::tables::{u_factor_for, InsulationThickness, InsulationType};

#[test]
fn puf_150_rating() {
    let rating = evaluate_construction(&Construction::default());
    assert_eq!(rating.u_factor_w_m2k, 0.147);
    let r = rating.r_value_m2k_w.expect("tabulated");
    assert_eq!(r, 1.0 / rating.u_factor_w_m2k);
    assert!(rating.is_tabulated());
}

#[test]
fn every_tabulated_pair_has_positive_u() {
    for ins in InsulationType::ALL {
        for t in InsulationThickness::ALL {
            let u = u_factor_for(ins, t.mm()).expect("tabulated");
            assert!(u > 0.0);
        }
    }
}

#[test]
fn puf_beats_eps_beats_rockwool() {
    for t in InsulationThickness::ALL {
        let puf = u_factor_for(InsulationType::Puf, t.mm()).unwrap();
        let eps = u_factor_for(InsulationType::Eps, t.mm()).unwrap();
        let rw = u_factor_for(InsulationType::Rockwool, t.mm()).unwrap();
        assert!(puf < eps && eps < rw);
    }
}

#[test]
fn r_value_undefined_for_zero_u() {
    assert_eq!(r_value(0.0), None);
    assert_eq!(r_value(-1.0), None);
    assert_eq!(r_value(0.25), Some(4.0));
}
