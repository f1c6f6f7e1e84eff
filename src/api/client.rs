use log::debug;
use reqwest::blocking::{self, Client};

use super::errors::ApiClientError;
use super::models::{VerificationOutcome, VerificationRequest, VerifyPayload, VerifyResponse};
use crate::errors::RequestFailure;
use crate::network::Network;
use crate::remapping::parse_remappings;
use crate::resolver::{build_closure, SourceMap};

#[derive(Clone)]
pub struct ApiClient {
    network: Network,
    client: Client,
}

impl ApiClient {
    /// # Errors
    ///
    /// Fails if the endpoint `Url` cannot be a base. We rely on that
    /// invariant when building requests.
    pub fn new(network: Network) -> Result<Self, ApiClientError> {
        if network.endpoint().cannot_be_a_base() {
            Err(ApiClientError::CannotBeBase(network.endpoint().clone()))
        } else {
            Ok(Self {
                network,
                client: blocking::Client::new(),
            })
        }
    }

    #[must_use]
    pub const fn network(&self) -> &Network {
        &self.network
    }

    /// Runs the whole pipeline for one request: parse the remapping
    /// rules out of the compiler metadata, reduce the caller's file map
    /// to the import closure, submit.
    ///
    /// # Errors
    ///
    /// Will return `Err` on malformed remapping rules, a caller
    /// contract violation. Transport failures are not an `Err`, they
    /// come back as a `TransportFailure` outcome.
    pub fn verify_contract(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationOutcome, ApiClientError> {
        let remappings = parse_remappings(&request.metadata.settings.remappings)?;
        let sources = build_closure(&request.source_files, &remappings);
        debug!(
            "submitting {} of {} known source files for {}",
            sources.len(),
            request.source_files.len(),
            request.address
        );
        Ok(self.submit(request, &sources))
    }

    /// Performs the single POST exchange with the precomputed source
    /// set. Any failure to obtain and decode a server response maps to
    /// the synthetic `TransportFailure` outcome, distinct from all
    /// server result codes.
    pub fn submit(&self, request: &VerificationRequest, sources: &SourceMap) -> VerificationOutcome {
        let payload = VerifyPayload::new(request, sources);
        let url = self.network.endpoint().clone();

        let response = match self.client.post(url.clone()).json(&payload).send() {
            Ok(response) => response,
            Err(err) => return VerificationOutcome::transport_failure(err.to_string()),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return VerificationOutcome::transport_failure(
                RequestFailure::new(url, status, body).to_string(),
            );
        }

        match response.json::<VerifyResponse>() {
            Ok(decoded) => VerificationOutcome::from_response(decoded),
            Err(err) => VerificationOutcome::transport_failure(err.to_string()),
        }
    }
}
