//! gridnode core — configuration, error types, demand contract.

pub mod config;
pub mod demand;
pub mod error;

pub use config::NodeConfig;
pub use demand::{DemandVector, JobDemand, COMPUTE_HEADER, STORAGE_HEADER};
pub use error::{Error, Result};
