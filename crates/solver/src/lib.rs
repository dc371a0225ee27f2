pub mod adam;
pub mod ansatz;
pub mod grad;
pub mod output;
pub mod vqe;

pub use ansatz::LayeredAnsatz;
pub use vqe::{run_vqe, run_vqe_noisy, run_vqe_shots, VqeOptions, VqeReport};
