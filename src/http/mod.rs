//! HTTP layer — URL builder, response validator and `StockfighterHttp`.

pub mod client;
pub mod response;
pub mod url;

pub use client::StockfighterHttp;
pub use response::{validate, Payload};
pub use url::ApiUrls;
