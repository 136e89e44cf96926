use crate::adapters::TracingSink;
use crate::core::section::PartnersSection;
use crate::core::{CategoryCount, ConfigProvider, DiagnosticSink, PartnerSource, Storage};
use crate::utils::error::{Result, SectionError};
use crate::utils::monitor::SystemMonitor;
use serde::Serialize;
use std::sync::Arc;

/// Outcome of one section run.
#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub output_path: String,
    pub partners_rendered: usize,
    pub categories: Vec<CategoryCount>,
}

/// Mounts a section, waits for its load, renders it and stores the HTML.
pub struct SectionEngine<S: Storage, C: ConfigProvider> {
    source: Arc<dyn PartnerSource>,
    sink: Arc<dyn DiagnosticSink>,
    storage: S,
    config: C,
    monitor: SystemMonitor,
}

impl<S: Storage, C: ConfigProvider> SectionEngine<S, C> {
    pub fn new(source: Arc<dyn PartnerSource>, storage: S, config: C) -> Self {
        Self::new_with_monitoring(source, storage, config, false)
    }

    pub fn new_with_monitoring(
        source: Arc<dyn PartnerSource>,
        storage: S,
        config: C,
        monitor_enabled: bool,
    ) -> Self {
        Self {
            source,
            sink: Arc::new(TracingSink),
            storage,
            config,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub async fn run(&self) -> Result<SectionReport> {
        tracing::info!("Starting partners section render");
        self.monitor.log_stats("Start");

        let section = PartnersSection::with_limit(self.config.max_partners());
        if let Some(load) = section.mount(Arc::clone(&self.source), Arc::clone(&self.sink)) {
            load.await.map_err(|e| SectionError::ProcessingError {
                message: format!("Partner load task failed: {}", e),
            })?;
        }
        self.monitor.log_stats("Load");

        let view = section.view();
        tracing::info!("Rendering {} partners", view.partners.len());
        for category in &view.categories {
            tracing::debug!("{}: {}", category.name, category.count);
        }
        let html = section.render();
        self.monitor.log_stats("Render");

        let filename = self.config.output_filename();
        tracing::debug!("Writing section ({} bytes) to storage", html.len());
        self.storage.write_file(filename, html.as_bytes()).await?;
        self.monitor.log_final_stats();

        let output_path = self.storage.location(filename);
        tracing::info!("Section saved to: {}", output_path);

        Ok(SectionReport {
            output_path,
            partners_rendered: view.partners.len(),
            categories: view.categories,
        })
    }
}
