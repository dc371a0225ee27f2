use num_complex::Complex64;

pub type C64 = Complex64;

/// Dense statevector over n qubits.
///
/// Basis indices are little-endian: bit q of the index is the value of
/// qubit q, so `|index = 5⟩` on three qubits means q0 = 1, q1 = 0, q2 = 1.
#[derive(Clone)]
pub struct State {
    amps: Vec<C64>,
    n: usize,
}

impl State {
    /// |0...0⟩ on n qubits.
    pub fn new_zero(n: usize) -> Self {
        assert!(n >= 1, "State needs at least one qubit");
        let mut amps = vec![C64::new(0.0, 0.0); 1 << n];
        amps[0] = C64::new(1.0, 0.0);
        Self { amps, n }
    }

    pub fn n_qubits(&self) -> usize {
        self.n
    }

    pub fn dim(&self) -> usize {
        self.amps.len()
    }

    pub fn amp(&self, index: usize) -> C64 {
        self.amps[index]
    }

    pub fn amps(&self) -> &[C64] {
        &self.amps
    }

    pub fn norm_sqr(&self) -> f64 {
        self.amps.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Probability of observing basis state `index`.
    pub fn prob(&self, index: usize) -> f64 {
        self.amps[index].norm_sqr()
    }

    /// Apply a single-qubit gate u (row-major, basis order |0⟩, |1⟩) to qubit q.
    pub fn apply_1q(&mut self, q: usize, u: [[C64; 2]; 2]) {
        assert!(q < self.n, "qubit {} out of range", q);
        let mask = 1usize << q;

        for i in 0..self.amps.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amps[i];
                let b = self.amps[j];
                self.amps[i] = u[0][0] * a + u[0][1] * b;
                self.amps[j] = u[1][0] * a + u[1][1] * b;
            }
        }
    }

    /// CNOT with arbitrary control and target qubits.
    pub fn apply_cnot(&mut self, control: usize, target: usize) {
        assert!(control < self.n && target < self.n && control != target);
        let cmask = 1usize << control;
        let tmask = 1usize << target;

        for i in 0..self.amps.len() {
            if i & cmask != 0 && i & tmask == 0 {
                let j = i | tmask;
                self.amps.swap(i, j);
            }
        }
    }

    /// CZ on an arbitrary qubit pair.
    pub fn apply_cz(&mut self, a: usize, b: usize) {
        assert!(a < self.n && b < self.n && a != b);
        let amask = 1usize << a;
        let bmask = 1usize << b;

        for (i, amp) in self.amps.iter_mut().enumerate() {
            if i & amask != 0 && i & bmask != 0 {
                *amp = -*amp;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{State, C64};

    fn pauli_x() -> [[C64; 2]; 2] {
        let z = C64::new(0.0, 0.0);
        let o = C64::new(1.0, 0.0);
        [[z, o], [o, z]]
    }

    #[test]
    fn zero_state_is_basis_zero() {
        let psi = State::new_zero(3);
        assert_eq!(psi.dim(), 8);
        assert!((psi.prob(0) - 1.0).abs() < 1e-15);
        assert!((psi.norm_sqr() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn x_flips_target_qubit() {
        let mut psi = State::new_zero(2);
        psi.apply_1q(1, pauli_x());

        // q1 = 1 → index 2
        assert!((psi.prob(2) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn cnot_flips_only_when_control_set() {
        let mut psi = State::new_zero(2);
        psi.apply_cnot(0, 1);
        assert!((psi.prob(0) - 1.0).abs() < 1e-15, "control clear");

        psi.apply_1q(0, pauli_x());
        psi.apply_cnot(0, 1);
        assert!((psi.prob(3) - 1.0).abs() < 1e-15, "control set");
    }
}
