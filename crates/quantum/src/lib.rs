pub mod exact;
pub mod expectation;
pub mod gates;
pub mod hamiltonian;
pub mod measurement;
pub mod noise;
pub mod pauli;
pub mod shots;
