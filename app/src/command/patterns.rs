use sift_config::{Config, OutputFormat};
use sift_core::Extractor;

use crate::render;

/// Strategy for listing the pattern table in evaluation order.
#[derive(Debug, Clone, Copy)]
pub struct PatternsStrategy;

impl super::CommandStrategy for PatternsStrategy {
    /// Output format override.
    type Input = Option<OutputFormat>;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let format = match input {
            Some(format) => format,
            None => Config::load_or_default()?.output.format,
        };

        let extractor = Extractor::new()?;
        print!("{}", render::render_patterns(extractor.patterns(), format)?);
        Ok(())
    }
}
