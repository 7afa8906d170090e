//! The SSM API surface consumed by the document handlers, plus a mock for tests.

pub mod error;
pub mod mock;
pub mod ssm_client;

pub use error::*;
pub use ssm_client::*;
