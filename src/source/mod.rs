use crate::{domain::BoardPayload, error::Result};
use async_trait::async_trait;

pub mod file_source;
pub mod http_source;

pub use file_source::FileSource;
pub use http_source::HttpSource;

/// Supplier of the users and tickets a board is built from
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches and decodes one complete payload
    async fn fetch(&self) -> Result<BoardPayload>;

    /// Human-readable location, used in log events
    fn describe(&self) -> String;
}
