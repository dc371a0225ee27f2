use crate::hamiltonian::Hamiltonian;
use crate::pauli::PauliString;
use sv::{State, C64};

/// Expectation value ⟨ψ|P|ψ⟩ of a Pauli string.
pub fn expect_pauli(psi: &State, ops: &PauliString) -> f64 {
    let mut acc = C64::new(0.0, 0.0);

    for j in 0..psi.dim() {
        let a = psi.amp(j);
        if a.norm_sqr() == 0.0 {
            continue;
        }
        let (jp, phase) = ops.apply_basis(j);
        acc += psi.amp(jp).conj() * phase * a;
    }

    acc.re
}

/// Expectation value ⟨ψ|H|ψ⟩.
pub fn energy(psi: &State, h: &Hamiltonian) -> f64 {
    h.terms()
        .iter()
        .map(|t| t.coeff * expect_pauli(psi, &t.ops))
        .sum()
}
