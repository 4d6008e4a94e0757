use sallenkey::design::{solve_stage, Denormalization, ResistorSearch};
use sallenkey::units::Engineering;
use sallenkey::{DesignError, FilterDesign, FilterSpec, Reference};

const TOL: f64 = 1e-9;

fn assert_rel(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() <= tol * a.abs().max(b.abs()),
        "{}: {} vs {}",
        msg,
        a,
        b
    );
}

/// Magnitude of the cascaded stage responses at `f` Hz.
fn cascade_gain(design: &FilterDesign<f64>, f: f64) -> f64 {
    let w = 2.0 * core::f64::consts::PI * f;
    design
        .iter()
        .map(|stage| {
            let c = stage.components();
            let re = 1.0 - w * w * c.r1 * c.r2 * c.c1 * c.c2;
            let im = w * c.damping_term();
            1.0 / (re * re + im * im).sqrt()
        })
        .product()
}

// ── Validation happens before any stage is solved ───────────────────

#[test]
fn odd_order_rejected_up_front() {
    for (res, cap) in [(Some(1.0), None), (None, Some(1e-9)), (None, None)] {
        assert_eq!(
            FilterSpec::from_options(3, None, res, cap),
            Err(DesignError::InvalidOrder)
        );
    }
}

#[test]
fn reference_must_be_exactly_one() {
    assert_eq!(
        FilterSpec::from_options(4, Some(1e3), Some(1e3), Some(1e-9)),
        Err(DesignError::ConflictingReference)
    );
    assert_eq!(
        FilterSpec::<f64>::from_options(4, Some(1e3), None, None),
        Err(DesignError::MissingReference)
    );
}

// ── Cascade structure ───────────────────────────────────────────────

#[test]
fn stage_count_and_order() {
    for n in [2, 4, 6, 8] {
        let spec = FilterSpec::new(n, None, Reference::Resistance(1.0_f64)).unwrap();
        let design = FilterDesign::solve(&spec).unwrap();
        assert_eq!(design.len(), n / 2);
        for (i, stage) in design.iter().enumerate() {
            assert_eq!(stage.index(), i + 1);
            assert_eq!(*stage, solve_stage(&spec, i + 1).unwrap());
        }
    }
}

// ── Scaling behaviour seen from the outside ─────────────────────────

#[test]
fn normalized_values_recoverable() {
    let spec = FilterSpec::new(6, Some(3.3e3_f64), Reference::Resistance(2.2e3)).unwrap();
    let scale = Denormalization::from_spec(&spec);
    for stage in &FilterDesign::solve(&spec).unwrap() {
        let back = scale.invert(stage.components());
        let n = stage.normalized();
        assert_rel(back.r1, n.r1, TOL, "r1");
        assert_rel(back.r2, n.r2, TOL, "r2");
        assert_rel(back.c1, n.c1, TOL, "c1");
        assert_rel(back.c2, n.c2, TOL, "c2");
    }
}

#[test]
fn cutoff_scales_every_component() {
    let base = FilterSpec::new(4, Some(100.0_f64), Reference::Capacitance(1e-9)).unwrap();
    let fast = FilterSpec::new(4, Some(1000.0_f64), Reference::Capacitance(1e-9)).unwrap();
    let a = FilterDesign::solve(&base).unwrap();
    let b = FilterDesign::solve(&fast).unwrap();
    for (sa, sb) in a.iter().zip(b.iter()) {
        assert_eq!(sa.ratio(), sb.ratio());
        assert_rel(sb.r1(), 10.0 * sa.r1(), TOL, "r1");
        assert_rel(sb.r2(), 10.0 * sa.r2(), TOL, "r2");
        assert_rel(sb.c1(), 10.0 * sa.c1(), TOL, "c1");
        assert_rel(sb.c2(), 10.0 * sa.c2(), TOL, "c2");
    }
}

#[test]
fn unit_prototype_is_butterworth() {
    // With R0 = 1 and no cutoff the cascade is the unit-frequency prototype
    let spec = FilterSpec::new(8, None, Reference::Resistance(1.0_f64)).unwrap();
    let design = FilterDesign::solve(&spec).unwrap();
    let fc = 1.0 / (2.0 * core::f64::consts::PI);
    assert_rel(cascade_gain(&design, fc), core::f64::consts::FRAC_1_SQRT_2, 1e-9, "-3 dB");
    assert_rel(cascade_gain(&design, 1e-6), 1.0, 1e-9, "DC");
    assert!(cascade_gain(&design, 10.0 * fc) < 1e-7);
}

// ── Capacitor-fixed edge cases ──────────────────────────────────────

#[test]
fn capacitor_fixed_rejects_unphysical_design() {
    let spec = FilterSpec::new(10, Some(1e3_f64), Reference::Capacitance(1e-9)).unwrap();
    let err = FilterDesign::solve(&spec).unwrap_err();
    assert_eq!(err, DesignError::NonPositiveComponent { stage: 2 });
    assert_eq!(err.to_string(), "stage 2 solves to a non-positive component value");
}

#[test]
fn capacitor_ratios_are_integers() {
    let spec = FilterSpec::new(8, Some(1e3_f64), Reference::Capacitance(10e-9)).unwrap();
    let design = FilterDesign::solve_with(&spec, &ResistorSearch::default()).unwrap();
    for stage in &design {
        let ratio = stage.ratio().unwrap() as f64;
        assert_rel(stage.c1() / stage.c2(), ratio, TOL, "c1/c2");
    }
}

// ── Report text ─────────────────────────────────────────────────────

#[test]
fn stage_report_uses_prefixes() {
    let spec = FilterSpec::new(2, None, Reference::Resistance(10e3_f64)).unwrap();
    let design = FilterDesign::solve(&spec).unwrap();
    let text = design.stages()[0].to_string();
    assert!(text.contains("r1: 10 kOhms"), "{text}");
    assert!(text.contains("r2: 10 kOhms"), "{text}");
    assert_eq!(format!("{:.2}", Engineering::new(design.stages()[0].c1(), "F")), "141.42 uF");
}
