use crate::adam::Adam;
use crate::ansatz::LayeredAnsatz;
use crate::grad::parameter_shift;
use quantum::expectation::energy;
use quantum::hamiltonian::Hamiltonian;
use quantum::shots::estimate_energy_shots;
use rayon::prelude::*;
use rng::SeedRng;
use std::f64::consts::FRAC_PI_2;

#[derive(Clone, Debug)]
pub struct VqeOptions {
    /// Hard cap on optimizer iterations.
    pub iterations: usize,
    /// Adam stepsize.
    pub stepsize: f64,
    /// Early-stop threshold on |E_k - E_{k-1}|.
    pub conv_tol: f64,
    /// Print progress every this many iterations (0 = silent).
    pub log_every: usize,
}

impl Default for VqeOptions {
    fn default() -> Self {
        Self {
            iterations: 200,
            stepsize: 0.1,
            conv_tol: 1e-6,
            log_every: 10,
        }
    }
}

#[derive(Clone, Debug)]
pub struct VqeReport {
    pub energy: f64,
    pub params: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
    /// (iteration, energy) rows, one per executed iteration.
    pub history: Vec<(usize, f64)>,
}

/// Minimize the analytic energy expectation.
pub fn run_vqe(
    h: &Hamiltonian,
    ansatz: &LayeredAnsatz,
    opts: &VqeOptions,
    seed: &str,
) -> VqeReport {
    let energy_fn = |p: &[f64]| energy(&ansatz.prepare(p), h);
    minimize(init_params(ansatz, seed), opts, energy_fn)
}

/// Minimize the shot-estimated energy.
pub fn run_vqe_shots(
    h: &Hamiltonian,
    ansatz: &LayeredAnsatz,
    opts: &VqeOptions,
    shots: usize,
    seed: &str,
) -> VqeReport {
    let base = SeedRng::new(seed.as_bytes());
    let energy_fn = |p: &[f64]| {
        let mut rng = rng_for_params(&base, p);
        estimate_energy_shots(&ansatz.prepare(p), h, &mut rng, shots)
    };
    minimize(init_params(ansatz, seed), opts, energy_fn)
}

/// Minimize the shot-estimated energy under depolarizing noise,
/// averaging over independent trajectories.
pub fn run_vqe_noisy(
    h: &Hamiltonian,
    ansatz: &LayeredAnsatz,
    opts: &VqeOptions,
    trajectories: usize,
    shots: usize,
    p: f64,
    seed: &str,
) -> VqeReport {
    assert!(trajectories > 0);
    let base = SeedRng::new(seed.as_bytes());
    let energy_fn =
        |params: &[f64]| noisy_energy(h, ansatz, params, trajectories, shots, p, &base);
    minimize(init_params(ansatz, seed), opts, energy_fn)
}

fn noisy_energy(
    h: &Hamiltonian,
    ansatz: &LayeredAnsatz,
    params: &[f64],
    trajectories: usize,
    shots: usize,
    p: f64,
    base: &SeedRng,
) -> f64 {
    let eval_rng = rng_for_params(base, params);

    let energies: Vec<f64> = (0..trajectories)
        .into_par_iter()
        .map(|t| {
            let mut rng = eval_rng.fork(format!("traj-{}", t).as_bytes());
            let psi = ansatz.prepare_noisy(params, p, &mut rng);
            estimate_energy_shots(&psi, h, &mut rng, shots)
        })
        .collect();

    // summed in trajectory order so the result is seed-deterministic
    energies.iter().sum::<f64>() / trajectories as f64
}

fn init_params(ansatz: &LayeredAnsatz, seed: &str) -> Vec<f64> {
    let mut rng = SeedRng::new(seed.as_bytes()).fork(b"param-init");
    (0..ansatz.param_count())
        .map(|_| rng.uniform(-FRAC_PI_2, FRAC_PI_2, b"PARAM_INIT"))
        .collect()
}

/// Independent deterministic stream per parameter vector, so repeated
/// evaluations at the same point agree and shifted points decorrelate.
fn rng_for_params(base: &SeedRng, params: &[f64]) -> SeedRng {
    let mut label = Vec::with_capacity(params.len() * 8);
    for p in params {
        label.extend_from_slice(&p.to_le_bytes());
    }
    base.fork(&label)
}

fn minimize<F>(mut params: Vec<f64>, opts: &VqeOptions, energy_fn: F) -> VqeReport
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    let mut adam = Adam::new(params.len(), opts.stepsize);
    let mut history = Vec::with_capacity(opts.iterations);
    let mut prev = energy_fn(&params);
    let mut e = prev;
    let mut converged = false;
    let mut ran = 0;

    for iter in 0..opts.iterations {
        let grad = parameter_shift(&params, &energy_fn);
        adam.step(&mut params, &grad);
        e = energy_fn(&params);

        history.push((iter, e));
        ran = iter + 1;

        if opts.log_every > 0 && iter % opts.log_every == 0 {
            println!(" Energy for iteration {} : {:.8}", iter, e);
        }

        if (e - prev).abs() < opts.conv_tol {
            converged = true;
            break;
        }
        prev = e;
    }

    VqeReport {
        energy: e,
        params,
        iterations: ran,
        converged,
        history,
    }
}
