pub mod categories;
pub mod engine;
pub mod render;
pub mod section;

pub use crate::domain::model::{CategoryBucket, CategoryCount, Partner, PartnerId};
pub use crate::domain::ports::{ConfigProvider, DiagnosticSink, PartnerSource, Storage};
pub use crate::utils::error::Result;
