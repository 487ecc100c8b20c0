//! End-to-end runs over the recorded lab data.

use aero_lab::data;
use aero_lab::domain::{AnalysisConfig, PolarPoint, SimulatedPolar};
use aero_lab::pipeline::{analyze_experiments, group_by_airfoil, match_airfoils, wake_drag};

#[test]
fn aerodynamic_centers_sit_near_quarter_chord() {
    let summaries = analyze_experiments(&data::experiments(), &AnalysisConfig::default());
    assert_eq!(summaries.len(), 4);

    for s in &summaries {
        let r = s.regression.expect("every lab experiment has a linear region");
        assert_eq!(r.n, 6);
        assert!(r.slope.is_finite());
        assert!((r.aerodynamic_center_offset - (0.25 - r.slope)).abs() < 1e-15);
        // Thin-airfoil theory puts the aerodynamic center close to c/4.
        assert!(r.distance_from_quarter_chord() < 0.1, "{}: h_ac={}", s.name, r.aerodynamic_center_offset);
        assert!(s.excluded.iter().all(|p| p.angle_deg > 16.0));
    }

    let exp1 = &summaries[0];
    let r = exp1.regression.unwrap();
    assert!((r.slope - (-3.538_720e-4)).abs() < 1e-9, "slope={}", r.slope);
    assert!((r.aerodynamic_center_offset - 0.250_353_87).abs() < 1e-8);
}

#[test]
fn tighter_cutoff_uses_fewer_points() {
    let config = AnalysisConfig {
        aoa_cutoff_deg: 8.0,
        ..AnalysisConfig::default()
    };
    let summaries = analyze_experiments(&data::experiments(), &config);
    assert!(summaries.iter().all(|s| s.sums.n == 4));

    let config = AnalysisConfig {
        aoa_cutoff_deg: -10.0,
        ..AnalysisConfig::default()
    };
    let summaries = analyze_experiments(&data::experiments(), &config);
    assert!(summaries.iter().all(|s| s.regression.is_none()));
}

#[test]
fn coarse_simulation_is_interpolated_and_ranked() {
    let exp = data::matcher_polar();

    // Odd angles only, so every experimental angle needs interpolation.
    let rows = (-3..=9).flat_map(|k| {
        let alpha = 2.0 * k as f64 + 1.0;
        [
            ("linear", PolarPoint::new(alpha, 0.5 + 0.07 * alpha, -0.08)),
            ("flat", PolarPoint::new(alpha, 0.8, -0.08)),
        ]
    });
    let mut simulated = group_by_airfoil(rows);
    simulated.push(SimulatedPolar {
        airfoil: "empty".into(),
        points: Vec::new(),
    });

    let report = match_airfoils(&exp, &simulated, &AnalysisConfig::default());
    assert_eq!(report.combined.len(), 2);
    assert_eq!(report.combined[0].airfoil, "linear");
    assert_eq!(report.cl_only[0].airfoil, "linear");
    assert!(report.combined[0].score.combined < report.combined[1].score.combined);
}

#[test]
fn wake_survey_drag_coefficient() {
    let est = wake_drag(&data::wake_survey(), &AnalysisConfig::default()).unwrap();
    assert_eq!(est.n_stations, 21);
    assert!((est.drag_coefficient - 0.3912).abs() < 1e-4);
    assert!((est.height_min - 0.1016).abs() < 1e-12);
    assert!((est.velocity_min - 8.666143).abs() < 1e-12);
    assert!((est.velocity_max - 11.8494).abs() < 1e-12);
}

#[test]
fn config_from_json_drives_pipeline() {
    let config = AnalysisConfig::from_json_str(r#"{ "aoa_cutoff_deg": 4.0, "top_n": 1 }"#).unwrap();
    let summaries = analyze_experiments(&data::experiments(), &config);
    assert!(summaries.iter().all(|s| s.included.len() == 3));
}
