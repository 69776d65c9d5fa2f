use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the levy workspace.
///
/// Pair-level failures (transport, status, decode, timeout) are absorbed by
/// the aggregator and surfaced through per-pair report metadata rather than
/// aborting a request, so this type is serializable and cheap to clone.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LevyError {
    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A provider call failed at the transport level.
    #[error("{provider} failed: {msg}")]
    Provider {
        /// Provider name that failed.
        provider: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The upstream endpoint answered with a non-success HTTP status.
    #[error("{provider} returned status {code}")]
    Status {
        /// Provider name that produced the response.
        provider: String,
        /// HTTP status code.
        code: u16,
    },

    /// The upstream body could not be decoded.
    #[error("{provider} returned an undecodable body: {msg}")]
    Decode {
        /// Provider name that produced the body.
        provider: String,
        /// Human-readable decode error.
        msg: String,
    },

    /// A single (window, land) provider call exceeded the configured timeout.
    #[error("provider timed out: {provider}")]
    ProviderTimeout {
        /// Provider name that timed out.
        provider: String,
    },

    /// The overall aggregation exceeded the configured deadline.
    #[error("request timed out")]
    RequestTimeout,

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl LevyError {
    /// Helper: build a `Provider` error with the provider name and message.
    pub fn provider(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Status` error for a non-success HTTP response.
    pub fn status(provider: impl Into<String>, code: u16) -> Self {
        Self::Status {
            provider: provider.into(),
            code,
        }
    }

    /// Helper: build a `Decode` error for an unparseable body.
    pub fn decode(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Decode {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(provider: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            provider: provider.into(),
        }
    }
}
