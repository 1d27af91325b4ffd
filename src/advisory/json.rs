//! JSON encoding of the advisory exchange.
//!
//! The request body is
//! `{"player_sum": 18, "dealer_sum": 10, "has_ace": false, "can_double_down": true}`
//! and the response carries `mixed` and `normal` objects, each with a
//! `recommendation` and a `reasoning`. Extra response fields are ignored.

use alloc::string::{String, ToString};
use core::future::Future;

use crate::error::AdvisoryError;

use super::{Advisor, Advisory, AdvisoryRequest};

/// Encodes a request body.
///
/// # Errors
///
/// Returns [`AdvisoryError::Malformed`] if serialization fails.
pub fn encode_request(request: &AdvisoryRequest) -> Result<String, AdvisoryError> {
    serde_json::to_string(request).map_err(|err| AdvisoryError::Malformed(err.to_string()))
}

/// Decodes a response body.
///
/// # Errors
///
/// Returns [`AdvisoryError::Malformed`] if the body is not a valid advisory,
/// including recommendations other than hit, stand or double down.
pub fn decode_advisory(body: &str) -> Result<Advisory, AdvisoryError> {
    serde_json::from_str(body).map_err(|err| AdvisoryError::Malformed(err.to_string()))
}

/// Carries an encoded request to a remote advisor and returns its reply body.
pub trait Transport {
    /// Sends `body` and resolves to the response body.
    fn post(&self, body: String) -> impl Future<Output = Result<String, AdvisoryError>> + Send;
}

/// An advisor that talks JSON over a [`Transport`].
#[derive(Debug, Clone)]
pub struct JsonAdvisor<T> {
    transport: T,
}

impl<T> JsonAdvisor<T> {
    /// Creates an advisor over `transport`.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: Transport + Sync> Advisor for JsonAdvisor<T> {
    fn advise(
        &self,
        request: AdvisoryRequest,
    ) -> impl Future<Output = Result<Advisory, AdvisoryError>> + Send {
        async move {
            let body = encode_request(&request)?;
            let reply = self.transport.post(body).await?;
            decode_advisory(&reply)
        }
    }
}
