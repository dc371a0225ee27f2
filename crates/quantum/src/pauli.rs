use sv::C64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pauli {
    X,
    Y,
    Z,
}

/// Product of single-qubit Pauli factors on distinct qubits.
///
/// Identity factors are not stored; the empty string is the identity
/// operator. Factors are kept sorted by qubit index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PauliString {
    factors: Vec<(usize, Pauli)>,
}

impl PauliString {
    pub fn identity() -> Self {
        Self { factors: Vec::new() }
    }

    /// Build from (qubit, Pauli) factors. Qubits must be distinct.
    pub fn new(mut factors: Vec<(usize, Pauli)>) -> Self {
        factors.sort_by_key(|&(q, _)| q);
        debug_assert!(
            factors.windows(2).all(|w| w[0].0 != w[1].0),
            "duplicate qubit in Pauli string"
        );
        Self { factors }
    }

    pub fn factors(&self) -> &[(usize, Pauli)] {
        &self.factors
    }

    pub fn is_identity(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn max_qubit(&self) -> Option<usize> {
        self.factors.last().map(|&(q, _)| q)
    }

    /// Action on a computational basis state: P|j⟩ = phase · |j'⟩.
    pub fn apply_basis(&self, index: usize) -> (usize, C64) {
        let mut out = index;
        let mut phase = C64::new(1.0, 0.0);

        for &(q, p) in &self.factors {
            let bit = (index >> q) & 1;
            match p {
                Pauli::X => {
                    out ^= 1 << q;
                }
                Pauli::Y => {
                    out ^= 1 << q;
                    phase *= if bit == 0 {
                        C64::new(0.0, 1.0)
                    } else {
                        C64::new(0.0, -1.0)
                    };
                }
                Pauli::Z => {
                    if bit == 1 {
                        phase = -phase;
                    }
                }
            }
        }

        (out, phase)
    }
}
