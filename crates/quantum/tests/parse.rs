use quantum::hamiltonian::{Hamiltonian, ParseError};
use quantum::pauli::Pauli;

#[test]
fn parses_line_separated_terms() {
    let h = Hamiltonian::parse("+ 0.5 Z0 Z1\n- 0.25 X0 X2\n").unwrap();

    assert_eq!(h.terms().len(), 2);
    assert_eq!(h.n_qubits(), 3);

    assert!((h.terms()[0].coeff - 0.5).abs() < 1e-15);
    assert_eq!(
        h.terms()[0].ops.factors(),
        &[(0, Pauli::Z), (1, Pauli::Z)]
    );

    assert!((h.terms()[1].coeff + 0.25).abs() < 1e-15);
    assert_eq!(
        h.terms()[1].ops.factors(),
        &[(0, Pauli::X), (2, Pauli::X)]
    );
}

#[test]
fn parses_legacy_s_separated_terms() {
    let h = Hamiltonian::parse("- 1.0 Z0S+ 0.5 X0 X1S- 0.25 Y1").unwrap();

    assert_eq!(h.terms().len(), 3);
    assert_eq!(h.n_qubits(), 2);
    assert!((h.terms()[2].coeff + 0.25).abs() < 1e-15);
}

#[test]
fn identity_term_has_no_factors() {
    let h = Hamiltonian::parse("- 0.32 I").unwrap();

    assert_eq!(h.n_qubits(), 1);
    assert!(h.terms()[0].ops.is_identity());
    assert!((h.terms()[0].coeff + 0.32).abs() < 1e-15);
}

#[test]
fn rejects_bad_sign() {
    let err = Hamiltonian::parse("* 0.5 Z0").unwrap_err();
    assert!(matches!(err, ParseError::BadSign { .. }), "{err}");
}

#[test]
fn rejects_bad_coefficient() {
    let err = Hamiltonian::parse("+ abc Z0").unwrap_err();
    assert!(matches!(err, ParseError::BadCoefficient { .. }), "{err}");
}

#[test]
fn rejects_bad_pauli_token() {
    let err = Hamiltonian::parse("+ 0.5 Q3").unwrap_err();
    assert!(matches!(err, ParseError::BadPauli { .. }), "{err}");

    let err = Hamiltonian::parse("+ 0.5 Z").unwrap_err();
    assert!(matches!(err, ParseError::BadPauli { .. }), "{err}");
}

#[test]
fn rejects_duplicate_qubit_in_one_term() {
    let err = Hamiltonian::parse("+ 0.5 Z0 X0").unwrap_err();
    assert!(matches!(err, ParseError::DuplicateQubit { qubit: 0, .. }), "{err}");
}

#[test]
fn rejects_empty_input() {
    assert!(matches!(Hamiltonian::parse(""), Err(ParseError::Empty)));
    assert!(matches!(Hamiltonian::parse("  \n \n"), Err(ParseError::Empty)));
}

#[test]
fn rejects_truncated_term() {
    let err = Hamiltonian::parse("+ 0.5").unwrap_err();
    assert!(matches!(err, ParseError::TruncatedTerm(_)), "{err}");
}
