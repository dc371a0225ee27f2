use sv::{State, C64};

fn hadamard() -> [[C64; 2]; 2] {
    let s = 1.0 / 2.0_f64.sqrt();
    [
        [C64::new(s, 0.0), C64::new(s, 0.0)],
        [C64::new(s, 0.0), C64::new(-s, 0.0)],
    ]
}

#[test]
fn bell_pair_amplitudes() {
    let mut psi = State::new_zero(2);

    psi.apply_1q(0, hadamard());
    psi.apply_cnot(0, 1);

    let s = 1.0 / 2.0_f64.sqrt();
    assert!((psi.amp(0).re - s).abs() < 1e-12);
    assert!((psi.amp(3).re - s).abs() < 1e-12);
    assert!(psi.prob(1) < 1e-12, "Found |01> in Bell state");
    assert!(psi.prob(2) < 1e-12, "Found |10> in Bell state");
    assert!((psi.norm_sqr() - 1.0).abs() < 1e-12);
}

#[test]
fn cz_phases_bell_pair() {
    let mut psi = State::new_zero(2);

    psi.apply_1q(0, hadamard());
    psi.apply_cnot(0, 1);
    psi.apply_cz(0, 1);

    let s = 1.0 / 2.0_f64.sqrt();
    assert!((psi.amp(0).re - s).abs() < 1e-12);
    assert!((psi.amp(3).re + s).abs() < 1e-12);
}
