use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

use super::types::VerifyErrorCode;
use crate::address::ContractAddress;
use crate::resolver::SourceMap;

/// Slice of the solc metadata the verifier needs: the remapping rules
/// the sources were compiled with.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CompilerMetadata {
    #[serde(default)]
    pub settings: MetadataSettings,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MetadataSettings {
    #[serde(default)]
    pub remappings: Vec<String>,
}

/// Everything the external compilation collaborator supplies for one
/// verification call.
#[derive(Clone, Debug)]
pub struct VerificationRequest {
    pub address: ContractAddress,
    pub language: String,
    pub compiler: String,
    pub optimize: bool,
    pub optimize_runs: u32,
    pub source_files: SourceMap,
    pub evm_version: String,
    pub via_ir: bool,
    pub libraries: String,
    pub metadata: CompilerMetadata,
    pub optimizer_details: String,
}

/// Ensures the version string carries a leading `v` exactly once, the
/// format the explorer expects.
#[must_use]
pub fn normalize_compiler_version(version: &str) -> String {
    format!("v{}", version.trim().trim_start_matches('v'))
}

/// Outgoing wire request. `source_files` is the computed closure, not
/// the caller's full map, and `metadata` is cleared because the
/// explorer recomputes it server-side.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerifyPayload<'a> {
    pub address: &'a str,
    pub language: &'a str,
    pub compiler: String,
    pub optimize: bool,
    pub optimize_runs: u32,
    pub source_files: &'a SourceMap,
    pub evm_version: &'a str,
    #[serde(rename = "viaIR")]
    pub via_ir: bool,
    pub libraries: &'a str,
    pub metadata: &'static str,
    pub optimizer_details: &'a str,
}

impl<'a> VerifyPayload<'a> {
    pub(crate) fn new(request: &'a VerificationRequest, sources: &'a SourceMap) -> Self {
        Self {
            address: request.address.as_ref(),
            language: &request.language,
            compiler: normalize_compiler_version(&request.compiler),
            optimize: request.optimize,
            optimize_runs: request.optimize_runs,
            source_files: sources,
            evm_version: &request.evm_version,
            via_ir: request.via_ir,
            libraries: &request.libraries,
            metadata: "",
            optimizer_details: &request.optimizer_details,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerifyResponse {
    pub error_code: VerifyErrorCode,
    #[serde(default)]
    pub contract_name: Option<String>,
    #[serde(default)]
    pub error_msg: Option<String>,
}

/// Decoded terminal outcome of one verification call.
#[derive(Debug)]
pub struct VerificationOutcome {
    code: VerifyErrorCode,
    contract_name: Option<String>,
    message: Option<String>,
}

impl VerificationOutcome {
    pub(crate) fn from_response(response: VerifyResponse) -> Self {
        Self {
            code: response.error_code,
            contract_name: response.contract_name,
            message: response.error_msg,
        }
    }

    pub(crate) fn transport_failure(detail: impl Into<String>) -> Self {
        Self {
            code: VerifyErrorCode::TransportFailure,
            contract_name: None,
            message: Some(detail.into()),
        }
    }

    #[must_use]
    pub const fn code(&self) -> VerifyErrorCode {
        self.code
    }

    pub fn contract_name(&self) -> Option<&str> {
        self.contract_name.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code.is_success()
    }

    pub fn suggestions(&self) -> Vec<&'static str> {
        match self.code {
            VerifyErrorCode::CompilerVersionFormat => vec![
                "Use the long compiler version form, e.g. v0.7.6+commit.7338295f",
                "The commit hash suffix is required",
            ],
            VerifyErrorCode::BytecodeMismatch => vec![
                "Check that optimizer settings match the deployed build",
                "Verify the compiler version matches the one used at deployment",
                "Confirm the submitted sources are the ones that were deployed",
            ],
            VerifyErrorCode::CompilationError => vec![
                "Check that all imported files are present in the submitted set",
                "Verify that remappings cover every library import",
            ],
            _ => vec![],
        }
    }
}

impl Display for VerificationOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.code {
            VerifyErrorCode::Verified => write!(
                f,
                "verified successfully as {}",
                self.contract_name.as_deref().unwrap_or("unknown contract")
            ),
            VerifyErrorCode::AlreadyVerified => write!(f, "contract is already verified"),
            VerifyErrorCode::NoSourceFile => write!(f, "no source file provided"),
            VerifyErrorCode::InitCodeNotFound => {
                write!(f, "contract creation code not found on chain")
            }
            VerifyErrorCode::CompilerVersionFormat => write!(
                f,
                "compiler version format incorrect, long form required (e.g. v0.7.6+commit.7338295f)"
            ),
            VerifyErrorCode::BytecodeMismatch => {
                write!(f, "deployed bytecode does not match compiled output")
            }
            VerifyErrorCode::UnsupportedLanguage => write!(f, "unsupported language"),
            VerifyErrorCode::CompilationError => write!(
                f,
                "compilation failed: {}",
                self.message.as_deref().unwrap_or("unknown failure")
            ),
            VerifyErrorCode::TransportFailure => write!(
                f,
                "network failure before the server responded: {}",
                self.message.as_deref().unwrap_or("unknown failure")
            ),
            VerifyErrorCode::Unknown => {
                write!(f, "verification failed with an unrecognized result code")
            }
        }
    }
}
