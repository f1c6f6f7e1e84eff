// Re-export the API module components
pub use self::{
    client::ApiClient,
    errors::ApiClientError,
    models::{CompilerMetadata, MetadataSettings, VerificationOutcome, VerificationRequest},
    types::VerifyErrorCode,
};

// Module declarations
mod client;
mod errors;
mod models;
mod types;
