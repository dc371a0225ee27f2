use crate::hamiltonian::Hamiltonian;
use faer::{Mat, Side};
use sv::C64;

/// Dense matrix of the Hamiltonian in the computational basis.
pub fn to_matrix(h: &Hamiltonian) -> Mat<C64> {
    let dim = 1usize << h.n_qubits();
    let mut m = Mat::<C64>::zeros(dim, dim);

    for term in h.terms() {
        for j in 0..dim {
            let (jp, phase) = term.ops.apply_basis(j);
            let cur = m.read(jp, j);
            m.write(jp, j, cur + phase.scale(term.coeff));
        }
    }

    m
}

/// Eigenvalues of the Hamiltonian, ascending.
pub fn eigenvalues(h: &Hamiltonian) -> Vec<f64> {
    let m = to_matrix(h);
    let mut evs = m.selfadjoint_eigenvalues(Side::Lower);
    evs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    evs
}

/// Exact ground-state energy by full diagonalization.
pub fn ground_energy(h: &Hamiltonian) -> f64 {
    eigenvalues(h)[0]
}
