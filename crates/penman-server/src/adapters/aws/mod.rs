//! AWS plumbing shared by the Bedrock and S3 adapters
//!
//! - credentials: Static access keys (optionally with a session token)
//! - sigv4: Signature Version 4 request signing
//! - transport: Signed HTTP sends with bounded retries

mod credentials;
pub mod sigv4;
mod transport;

pub use credentials::AwsCredentials;
pub use transport::AwsTransport;
