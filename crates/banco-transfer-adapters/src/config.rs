use banco_transfer_core::DEFAULT_REDIRECT_DELAY_MS;

#[derive(Debug, Clone)]
pub struct TransferClientConfig {
    pub account_service_base_url: String,
    pub request_timeout_ms: u64,
    pub redirect_delay_ms: u64,
}

impl Default for TransferClientConfig {
    fn default() -> Self {
        Self {
            account_service_base_url: "http://localhost:3000".to_owned(),
            request_timeout_ms: 15_000,
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
        }
    }
}
