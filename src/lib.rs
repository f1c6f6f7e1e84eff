//! # FEVM Contract Verifier
//!
//! A Rust library for verifying FEVM smart contracts on the Filfox
//! block explorer. Given the complete set of source files a contract
//! was compiled from, it computes the minimal import closure that has
//! to be submitted and performs the verification exchange.
//!
//! ## Features
//!
//! - **Import Closure Resolution**: Breadth-first traversal over import
//!   statements, re-pathed through compiler remappings, so only the
//!   files a contract actually depends on are transferred
//! - **Multi-network Support**: Filecoin mainnet and the Calibration
//!   testnet, selected by chain id
//! - **Type Safety**: Strong typing for contract addresses and result
//!   codes
//! - **Error Handling**: Error types with actionable suggestions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fevm_verifier::{api::ApiClient, network::Network};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Calibration testnet
//! let client = ApiClient::new(Network::from_chain_id(314159)?)?;
//! # Ok(())
//! # }
//! ```

/// Contract address validation
pub mod address;

/// API client and types for the verification service
pub mod api;

/// Error types shared across modules
pub mod errors;

/// Lexical import statement extraction
pub mod imports;

/// Chain id to verification endpoint configuration
pub mod network;

/// Compiler remapping rule parsing and matching
pub mod remapping;

/// Import closure resolution over the available source files
pub mod resolver;
