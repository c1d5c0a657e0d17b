//! Secret store implementations

mod aws;

pub use aws::AwsSecretsManagerStore;
