use quantum::gates::rot;
use quantum::noise::depolarizing_1q;
use rng::SeedRng;
use sv::State;

/// Layered variational circuit: per-qubit Rot layers interleaved with
/// CNOT rings, leftover rotation triples on the last wires.
///
/// With R rotation triples on n qubits, floor(R/n) full layers are
/// applied (a Rot on every qubit, then the entangling ring) and the
/// remaining R mod n triples go to wires n-1, n-2, ... in that order.
/// The single-triple case is one Rot on wire 0.
pub struct LayeredAnsatz {
    n_qubits: usize,
    n_rotations: usize,
}

impl LayeredAnsatz {
    /// Default rotation budget: 2^n - 1 triples.
    pub fn new(n_qubits: usize) -> Self {
        assert!(n_qubits >= 1);
        Self {
            n_qubits,
            n_rotations: (1usize << n_qubits) - 1,
        }
    }

    pub fn with_rotations(n_qubits: usize, n_rotations: usize) -> Self {
        assert!(n_qubits >= 1 && n_rotations >= 1);
        Self {
            n_qubits,
            n_rotations,
        }
    }

    pub fn n_qubits(&self) -> usize {
        self.n_qubits
    }

    pub fn rotation_count(&self) -> usize {
        self.n_rotations
    }

    /// Flat parameter length: three Euler angles per rotation triple.
    pub fn param_count(&self) -> usize {
        3 * self.n_rotations
    }

    pub fn prepare(&self, params: &[f64]) -> State {
        self.build(params, &mut |_| {})
    }

    /// Like `prepare`, with a depolarizing kick on every qubit after
    /// each rotation layer.
    pub fn prepare_noisy(&self, params: &[f64], p: f64, rng: &mut SeedRng) -> State {
        let n = self.n_qubits;
        self.build(params, &mut |psi| {
            for q in 0..n {
                depolarizing_1q(psi, q, p, rng);
            }
        })
    }

    fn build(&self, params: &[f64], after_layer: &mut dyn FnMut(&mut State)) -> State {
        assert_eq!(
            params.len(),
            self.param_count(),
            "expected {} parameters",
            self.param_count()
        );

        let n = self.n_qubits;
        let r = self.n_rotations;
        let mut psi = State::new_zero(n);

        if r > 1 {
            let layers = r / n;
            let extra = r - layers * n;

            for layer in 0..layers {
                for q in 0..n {
                    self.apply_rot(&mut psi, q, params, layer * n + q);
                }
                self.entangle(&mut psi);
                after_layer(&mut psi);
            }

            // leftover triples on the last wires, highest wire first
            for (k, set) in (r - extra..r).enumerate() {
                self.apply_rot(&mut psi, n - 1 - k, params, set);
            }
            if extra > 0 {
                after_layer(&mut psi);
            }
        } else {
            self.apply_rot(&mut psi, 0, params, 0);
            after_layer(&mut psi);
        }

        psi
    }

    fn apply_rot(&self, psi: &mut State, q: usize, params: &[f64], set: usize) {
        let p = &params[3 * set..3 * set + 3];
        psi.apply_1q(q, rot(p[0], p[1], p[2]));
    }

    fn entangle(&self, psi: &mut State) {
        let n = self.n_qubits;
        if n < 2 {
            return;
        }
        for q in 0..n - 1 {
            psi.apply_cnot(q, q + 1);
        }
        // closing the ring only makes sense beyond two qubits
        if n > 2 {
            psi.apply_cnot(n - 1, 0);
        }
    }
}
