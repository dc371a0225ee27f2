use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Dump convergence rows as `iteration,energy` CSV.
pub fn write_csv<P: AsRef<Path>>(path: P, rows: &[(usize, f64)]) -> io::Result<()> {
    let mut f = File::create(path)?;
    writeln!(f, "iteration,energy")?;
    for (iter, energy) in rows {
        writeln!(f, "{},{}", iter, energy)?;
    }
    Ok(())
}
