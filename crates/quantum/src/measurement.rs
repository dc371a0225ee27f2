use rng::SeedRng;
use sv::State;

/// Sample a computational-basis outcome from |ψ|².
pub fn sample_index(psi: &State, rng: &mut SeedRng) -> usize {
    let total: f64 = (0..psi.dim()).map(|i| psi.prob(i)).sum();
    if total == 0.0 {
        return 0;
    }

    let mut x = rng.next_f64(b"SAMPLE_INDEX") * total;
    for i in 0..psi.dim() {
        let p = psi.prob(i);
        if x < p {
            return i;
        }
        x -= p;
    }

    // rounding pushed x past the last bucket
    psi.dim() - 1
}
