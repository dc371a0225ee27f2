use solver::LayeredAnsatz;

#[test]
fn default_rotation_budget() {
    assert_eq!(LayeredAnsatz::new(1).rotation_count(), 1);
    assert_eq!(LayeredAnsatz::new(2).rotation_count(), 3);
    assert_eq!(LayeredAnsatz::new(3).rotation_count(), 7);

    assert_eq!(LayeredAnsatz::new(2).param_count(), 9);
    assert_eq!(LayeredAnsatz::new(3).param_count(), 21);
}

#[test]
fn zero_parameters_leave_the_zero_state() {
    for n in 1..=3 {
        let ansatz = LayeredAnsatz::new(n);
        let psi = ansatz.prepare(&vec![0.0; ansatz.param_count()]);

        // Rot(0,0,0) = I and CNOTs fix |0...0⟩
        assert!((psi.prob(0) - 1.0).abs() < 1e-12, "n = {}", n);
    }
}

#[test]
fn prepared_state_is_normalized() {
    let ansatz = LayeredAnsatz::new(3);
    let params: Vec<f64> = (0..ansatz.param_count())
        .map(|i| 0.1 * i as f64 - 0.7)
        .collect();

    let psi = ansatz.prepare(&params);
    assert!((psi.norm_sqr() - 1.0).abs() < 1e-12);
}

#[test]
fn explicit_rotation_budget() {
    let ansatz = LayeredAnsatz::with_rotations(2, 5);
    assert_eq!(ansatz.param_count(), 15);

    let psi = ansatz.prepare(&vec![0.0; 15]);
    assert!((psi.prob(0) - 1.0).abs() < 1e-12);
}
