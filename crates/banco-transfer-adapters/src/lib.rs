pub mod account_service;
pub mod clock;
pub mod config;
pub mod scheduler;

pub use account_service::HttpAccountService;
pub use clock::SystemClock;
pub use config::TransferClientConfig;
pub use scheduler::TokioRedirectScheduler;
