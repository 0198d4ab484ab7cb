pub mod config;
pub mod db;
pub mod dsn;
pub mod error;
pub mod service;

pub use config::Config;
pub use error::ProvisionError;
pub use service::{ProvisionOutcome, Provisioner};
