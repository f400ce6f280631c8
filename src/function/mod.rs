pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod output;
pub mod report;

pub use self::client::ApiClient;
pub use self::config::Config;
pub use self::error::ExportError;
pub use self::export::run_export;
pub use self::report::{ExportSummary, ExportedReport};
