//! Upload gateway adapters.

mod simulated;

pub use simulated::SimulatedUploadGateway;
