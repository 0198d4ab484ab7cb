pub mod admin_resolver;
pub mod provisioner;

pub use admin_resolver::{AdminIdentity, resolve};
pub use provisioner::{ProvisionOutcome, Provisioner};
