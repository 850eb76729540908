//! HTTP eligibility collaborator
//!
//! Adapter over a remote verification endpoint:
//! `GET {base_url}/voters/{id}` answers 404 for an invalid identity or a
//! JSON body `{"status": "ABLE" | "UNABLE"}` for a valid one. Transport
//! failures and timeouts surface as `VerifierError` and are never treated
//! as a verdict.

use async_trait::async_trait;
use plenum_application::{EligibilityVerifier, Verification, VerifierError};
use plenum_domain::{EligibilityVerdict, VoterId};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct VerdictPayload {
    status: EligibilityVerdict,
}

/// Verifier calling a remote eligibility service over HTTP
pub struct HttpEligibilityVerifier {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEligibilityVerifier {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl EligibilityVerifier for HttpEligibilityVerifier {
    async fn verify(&self, voter_id: &VoterId) -> Result<Verification, VerifierError> {
        let url = format!(
            "{}/voters/{}",
            self.base_url.trim_end_matches('/'),
            voter_id
        );
        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                VerifierError::Timeout
            } else {
                VerifierError::ConnectionError(e.to_string())
            }
        })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Verification::Invalid);
        }
        if !response.status().is_success() {
            return Err(VerifierError::RequestFailed(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        let payload: VerdictPayload = response
            .json()
            .await
            .map_err(|e| VerifierError::RequestFailed(e.to_string()))?;
        Ok(Verification::Valid(payload.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_payload_parsing() {
        let payload: VerdictPayload = serde_json::from_str(r#"{"status":"ABLE"}"#).unwrap();
        assert_eq!(payload.status, EligibilityVerdict::Able);

        let payload: VerdictPayload = serde_json::from_str(r#"{"status":"UNABLE"}"#).unwrap();
        assert_eq!(payload.status, EligibilityVerdict::Unable);

        assert!(serde_json::from_str::<VerdictPayload>(r#"{"status":"MAYBE"}"#).is_err());
    }
}
