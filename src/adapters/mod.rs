// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod sink;

pub use http::HttpPartnerSource;
pub use sink::TracingSink;
