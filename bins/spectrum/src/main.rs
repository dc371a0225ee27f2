use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

use quantum::exact::eigenvalues;
use quantum::hamiltonian::Hamiltonian;

/// Exact eigenvalues of a Pauli-sum Hamiltonian
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Hamiltonian file (stdin when omitted)
    input: Option<PathBuf>,

    /// How many of the lowest eigenvalues to print (0 = all)
    #[arg(long, default_value_t = 4)]
    levels: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

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
    let evs = eigenvalues(&h);

    let shown = if args.levels == 0 {
        evs.len()
    } else {
        args.levels.min(evs.len())
    };

    println!("{} qubits, {} terms", h.n_qubits(), h.terms().len());
    for (k, e) in evs.iter().take(shown).enumerate() {
        println!("E{} = {:.6}", k, e);
    }

    Ok(())
}
