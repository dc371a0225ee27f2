use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

/// Deterministic RNG chained through SHAKE256.
///
/// Every draw absorbs the current state, a step counter, and a caller
/// context label, then squeezes the next state together with the output
/// bytes. Two instances built from the same seed produce the same stream.
pub struct SeedRng {
    state: [u8; 32],
    counter: u64,
}

impl SeedRng {
    pub fn new(seed: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[seed, b"SEED_RNG_INIT"], &mut state);
        Self { state, counter: 0 }
    }

    /// Derive an independent stream labelled by `label`.
    pub fn fork(&self, label: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[&self.state, b"FORK", label], &mut state);
        Self { state, counter: 0 }
    }

    pub fn next_u64(&mut self, ctx: &[u8]) -> u64 {
        self.counter += 1;

        let mut buf = [0u8; 40];
        let counter_bytes = self.counter.to_be_bytes();
        shake(&[&self.state, &counter_bytes, ctx], &mut buf);

        self.state.copy_from_slice(&buf[..32]);

        let mut out = [0u8; 8];
        out.copy_from_slice(&buf[32..]);
        u64::from_be_bytes(out)
    }

    /// Uniform draw in [0, 1).
    pub fn next_f64(&mut self, ctx: &[u8]) -> f64 {
        // 53 mantissa bits
        let bits = self.next_u64(ctx) >> 11;
        (bits as f64) * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform draw in [lo, hi).
    pub fn uniform(&mut self, lo: f64, hi: f64, ctx: &[u8]) -> f64 {
        lo + (hi - lo) * self.next_f64(ctx)
    }
}

fn shake(parts: &[&[u8]], out: &mut [u8]) {
    let mut h = Shake256::default();
    for p in parts {
        h.update(p);
    }
    let mut r = h.finalize_xof();
    r.read(out);
}
