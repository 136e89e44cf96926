pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use adapters::{HttpPartnerSource, TracingSink};
pub use core::{
    categories::count_categories,
    engine::{SectionEngine, SectionReport},
    render::render_section,
    section::{PartnersSection, SectionView, DEFAULT_PARTNER_LIMIT},
};
pub use domain::model::{CategoryBucket, CategoryCount, Partner, PartnerId};
pub use domain::ports::{DiagnosticSink, PartnerSource};
pub use utils::error::{Result, SectionError};
