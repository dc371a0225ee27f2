use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;

use quantum::exact::ground_energy;
use quantum::hamiltonian::Hamiltonian;
use solver::output::write_csv;
use solver::{run_vqe, run_vqe_noisy, run_vqe_shots, LayeredAnsatz, VqeOptions, VqeReport};

/// Variational quantum eigensolver over Pauli-sum Hamiltonians
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Hamiltonian file (stdin when omitted)
    input: Option<PathBuf>,

    /// Energy evaluation: analytic | shots | noisy
    #[arg(long, value_enum, default_value_t = Mode::Analytic)]
    mode: Mode,

    /// Maximum optimizer iterations
    #[arg(long, default_value_t = 200)]
    iterations: usize,

    /// Adam stepsize
    #[arg(long, default_value_t = 0.1)]
    stepsize: f64,

    /// Early-stop tolerance on the energy change per iteration
    #[arg(long, default_value_t = 1e-6)]
    conv_tol: f64,

    /// Number of shots per term for shot-based modes
    #[arg(long, default_value_t = 50)]
    shots: usize,

    /// Number of trajectories for noisy VQE
    #[arg(long, default_value_t = 5)]
    trajectories: usize,

    /// Depolarizing noise probability
    #[arg(long, default_value_t = 0.01)]
    p: f64,

    /// Override the rotation-triple count (default 2^n - 1)
    #[arg(long)]
    rotations: Option<usize>,

    /// RNG seed (full reproducibility)
    #[arg(long, default_value = "default-seed")]
    seed: String,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Write per-iteration convergence rows to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Also diagonalize exactly and report the gap to the true ground energy
    #[arg(long)]
    exact: bool,
}

#[derive(ValueEnum, Clone, Debug)]
enum Mode {
    Analytic,
    Shots,
    Noisy,
}

fn validate(args: &Args) -> Result<()> {
    ensure!(args.rotations != Some(0), "--rotations must be at least 1");
    if matches!(args.mode, Mode::Noisy) {
        ensure!(
            args.trajectories > 0,
            "--trajectories must be at least 1 in noisy mode"
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    validate(&args)?;

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("Failed to build Rayon thread pool")?;
    }

    let input = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let h = Hamiltonian::parse(&input).context("Failed to parse Hamiltonian")?;
    let ansatz = match args.rotations {
        Some(r) => LayeredAnsatz::with_rotations(h.n_qubits(), r),
        None => LayeredAnsatz::new(h.n_qubits()),
    };

    println!(
        "{} qubits, {} terms, {} parameters",
        h.n_qubits(),
        h.terms().len(),
        ansatz.param_count()
    );

    let opts = VqeOptions {
        iterations: args.iterations,
        stepsize: args.stepsize,
        conv_tol: args.conv_tol,
        log_every: 10,
    };

    let report: VqeReport = match args.mode {
        Mode::Analytic => run_vqe(&h, &ansatz, &opts, &args.seed),
        Mode::Shots => run_vqe_shots(&h, &ansatz, &opts, args.shots, &args.seed),
        Mode::Noisy => run_vqe_noisy(
            &h,
            &ansatz,
            &opts,
            args.trajectories,
            args.shots,
            args.p,
            &args.seed,
        ),
    };

    if report.converged {
        println!("Converged after {} iterations", report.iterations);
    } else {
        println!("Iteration cap reached ({})", report.iterations);
    }
    println!(
        " Ground state Energy of given Hamiltonian is : {:.6}",
        report.energy
    );

    if args.exact {
        let exact = ground_energy(&h);
        println!(
            "Exact ground energy: {:.6} (gap {:.2e})",
            exact,
            report.energy - exact
        );
    }

    if let Some(path) = &args.csv {
        write_csv(path, &report.history)
            .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
    }

    Ok(())
}
