//! HTTP adapter for the account service's transfer endpoint.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use banco_transfer_core::{PortError, TransferOutcome, TransferRequest, TransferServicePort};

use crate::config::TransferClientConfig;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransferMoneyRequest<'a> {
    from_account_id: &'a str,
    to_account_id: &'a str,
    amount: f64,
    description: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransferMoneyResponse {
    success: bool,
    #[serde(default)]
    message: String,
}

#[derive(Debug)]
pub struct HttpAccountService {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpAccountService {
    pub fn new(config: &TransferClientConfig) -> Result<Self, PortError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| PortError::Transport(format!("failed to build http client: {e}")))?;
        Ok(Self {
            base_url: config
                .account_service_base_url
                .trim_end_matches('/')
                .to_owned(),
            client,
        })
    }

    fn transfer_url(&self) -> String {
        format!("{}/api/accounts/transfer", self.base_url)
    }
}

impl TransferServicePort for HttpAccountService {
    fn transfer_money(&self, request: &TransferRequest) -> Result<TransferOutcome, PortError> {
        let body = TransferMoneyRequest {
            from_account_id: request.source_account.as_str(),
            to_account_id: request.destination_account.as_str(),
            amount: request.amount.value(),
            description: &request.description,
        };

        let url = self.transfer_url();
        tracing::debug!(%url, "posting transfer");
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| PortError::Transport(format!("transfer request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| PortError::Transport(format!("failed to read transfer response: {e}")))?;
        if !status.is_success() {
            return Err(PortError::Transport(format!(
                "account service returned {status}"
            )));
        }

        let parsed: TransferMoneyResponse = serde_json::from_str(&text)
            .map_err(|e| PortError::Validation(format!("malformed transfer response: {e}")))?;
        if parsed.success {
            Ok(TransferOutcome::Completed)
        } else {
            Ok(TransferOutcome::Declined {
                reason: parsed.message,
            })
        }
    }
}
