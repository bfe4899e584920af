use crate::samples::{self, SAMPLES};

/// Strategy for listing the sample corpus, or printing one sample.
#[derive(Debug, Clone, Copy)]
pub struct SamplesStrategy;

impl super::CommandStrategy for SamplesStrategy {
    /// Sample to print; all samples are listed when absent.
    type Input = Option<String>;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let Some(name) = input else {
            let width = SAMPLES.iter().map(|s| s.name.len()).max().unwrap_or_default();
            for sample in SAMPLES {
                println!("{:<width$}  {}", sample.name, sample.description);
            }
            println!();
            println!("Run 'sift extract --sample <name>' to analyze one.");
            return Ok(());
        };

        let sample = samples::find(&name).ok_or_else(|| {
            anyhow::anyhow!("Unknown sample '{name}'. Run 'sift samples' to list them.")
        })?;
        println!("{}", sample.text);
        Ok(())
    }
}
