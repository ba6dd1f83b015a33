

pub mod config;
pub mod error;

pub use config::{AdvisorConfig, SkinTypePolicy};
pub use error::{AdvisorError, Result};
