use sift_config::Config;
use sift_core::Extractor;
use tracing::info;

/// Strategy for displaying configuration information.
///
/// This strategy outputs:
/// - Config file location and whether it exists
/// - Effective output settings
/// - The pattern table size
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::config_path()?;
        let exists = config_path.exists();
        let config = Config::load_or_default()?;

        println!("=== sift Configuration ===\n");

        println!("Config File:");
        println!("  Path: {}", config_path.display());
        if exists {
            println!("  Status: Found");
        } else {
            println!("  Status: Not found (using defaults, run 'sift init' to create)");
        }
        println!();

        println!("Output:");
        println!("  Format: {}", config.output.format);
        println!("  Show Empty: {}", config.output.show_empty);
        println!("  Pretty JSON: {}", config.output.pretty_json);
        println!();

        info!("Compiling pattern table");
        let extractor = Extractor::new()?;
        println!("Patterns:");
        for def in extractor.patterns() {
            println!("  {} {} ({})", def.icon, def.name, def.category);
        }

        Ok(())
    }
}
