//! Background form submission.
//!
//! Forms submit their fields form-encoded to the form's action URL with the
//! method the form declares, carrying the `X-Requested-With:
//! XMLHttpRequest` header. The server answers with a small JSON envelope:
//! `{"success": bool, "message": ..., "redirect": ...}`.

use serde::Deserialize;
use thiserror::Error;

use crate::form::{Form, Method};

/// The JSON envelope returned by the server.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
}

/// What a settled submission amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server reported success. `redirect` is a server-provided URL the
    /// host may navigate to.
    Accepted {
        message: String,
        redirect: Option<String>,
    },
    /// The server reported failure.
    Rejected { message: String },
    /// The request never produced a usable response.
    TransportFailed,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Failure to obtain a response envelope.
///
/// Both variants are surfaced to the user as the generic network-error
/// notification; the distinction exists for logging.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("response was not a submission envelope")]
    BadEnvelope(#[source] reqwest::Error),
}

/// Sends forms. Holds the shared HTTP client.
#[derive(Debug, Clone, Default)]
pub struct Submitter {
    http: reqwest::Client,
}

impl Submitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Send the form and decode the response envelope.
    ///
    /// No retry and no timeout beyond the transport's own.
    pub async fn send(&self, form: &Form) -> Result<SubmitResponse, SubmitError> {
        let action = form.action();
        let pairs = form.pairs();

        let request = match form.submit_method() {
            Method::Post => self.http.post(&action).form(&pairs),
            Method::Get => self.http.get(&action).query(&pairs),
        };

        let response = request
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await?;

        response
            .json::<SubmitResponse>()
            .await
            .map_err(SubmitError::BadEnvelope)
    }
}
