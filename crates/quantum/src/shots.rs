use crate::gates::{hadamard, y_to_z};
use crate::hamiltonian::Hamiltonian;
use crate::measurement::sample_index;
use crate::pauli::{Pauli, PauliString};
use rng::SeedRng;
use sv::State;

/// Estimate ⟨ψ|P|ψ⟩ from projective measurements.
///
/// The state is rotated so every factor becomes a Z measurement, then
/// sampled `shots` times; each shot contributes the product of ±1
/// eigenvalues over the string's support.
pub fn estimate_pauli_shots(
    psi: &State,
    ops: &PauliString,
    rng: &mut SeedRng,
    shots: usize,
) -> f64 {
    if ops.is_identity() {
        return 1.0;
    }
    if shots == 0 {
        return 0.0;
    }

    let mut rotated = psi.clone();
    for &(q, p) in ops.factors() {
        match p {
            Pauli::X => rotated.apply_1q(q, hadamard()),
            Pauli::Y => rotated.apply_1q(q, y_to_z()),
            Pauli::Z => {}
        }
    }

    let mut sum = 0.0;
    for _ in 0..shots {
        let outcome = sample_index(&rotated, rng);
        let mut value = 1.0;
        for &(q, _) in ops.factors() {
            if (outcome >> q) & 1 == 1 {
                value = -value;
            }
        }
        sum += value;
    }

    sum / shots as f64
}

/// Estimate ⟨ψ|H|ψ⟩ via shots, term by term.
pub fn estimate_energy_shots(
    psi: &State,
    h: &Hamiltonian,
    rng: &mut SeedRng,
    shots: usize,
) -> f64 {
    h.terms()
        .iter()
        .map(|t| t.coeff * estimate_pauli_shots(psi, &t.ops, rng, shots))
        .sum()
}
