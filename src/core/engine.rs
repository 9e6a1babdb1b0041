use crate::core::parser::RosterParser;
use crate::core::{ConfigProvider, ParseOutcome, Storage};
use crate::utils::error::Result;

/// Ties the file source to the parser: one blocking read of the whole
/// file, one parse pass with the configured limits.
pub struct RosterEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RosterEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn load_roster(&self, path: &str) -> Result<ParseOutcome> {
        tracing::info!("Loading roster from {}", path);
        let text = self.storage.read_file(path)?;

        let parser = RosterParser::new(self.config.limits());
        let outcome = parser.parse_str(&text);

        tracing::info!(
            "Parsed {} courses ({} diagnostics)",
            outcome.roster.courses.len(),
            outcome.diagnostics.len()
        );
        for diagnostic in &outcome.diagnostics {
            tracing::warn!(line = diagnostic.line, "{}", diagnostic.kind);
        }

        Ok(outcome)
    }
}
