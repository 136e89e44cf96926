use crate::core::DiagnosticSink;
use crate::utils::error::SectionError;

/// Default sink: logs swallowed errors at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, context: &str, error: &SectionError) {
        tracing::error!(
            category = ?error.category(),
            severity = ?error.severity(),
            "{}: {}",
            context,
            error
        );
    }
}
