use sift_config::Config;

/// Strategy for initializing the configuration.
///
/// Creates the default configuration file at `~/sift/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::create_config()?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("🔧 Configuration options:");
        println!("   - output.format: default report format (text, json, html)");
        println!("   - output.show_empty: also list categories without matches");
        println!("   - output.pretty_json: indent JSON output");
        println!();
        println!("📝 Try it: sift extract --sample mixed");
        Ok(())
    }
}
