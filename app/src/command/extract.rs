use anyhow::Context;
use rayon::prelude::*;
use sift_config::{Config, OutputFormat};
use sift_core::{ExtractionReport, Extractor};
use std::io::IsTerminal;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::info;

use crate::render::{self, RenderOptions};
use crate::samples;

/// Input parameters for the Extract command strategy.
#[derive(Debug, Clone, Default)]
pub struct ExtractInput {
    /// Files to analyze
    pub files: Vec<PathBuf>,
    /// Inline text to analyze
    pub text: Option<String>,
    /// Name of a built-in sample to analyze
    pub sample: Option<String>,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Show categories without matches
    pub show_empty: bool,
}

/// One input document, labelled for display.
#[derive(Debug, Clone)]
pub struct Document {
    pub label: String,
    pub bytes: Vec<u8>,
}

/// Strategy for executing the Extract command.
///
/// Collects every requested document, extracts them in parallel and prints
/// one rendered report per document in input order.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let mut options = RenderOptions::from(&config.output);
        if let Some(format) = input.format {
            options.format = format;
        }
        options.show_empty |= input.show_empty;

        let documents = collect_documents(&input).await?;
        info!("Extracting from {} document(s)", documents.len());

        let extractor = Extractor::new()?;
        let reports = extract_documents(extractor, &documents)?;

        let labelled: Vec<(&str, &ExtractionReport)> = documents
            .iter()
            .map(|doc| doc.label.as_str())
            .zip(reports.iter())
            .collect();

        print!("{}", render::render_documents(&labelled, &options)?);
        Ok(())
    }
}

/// Gather documents from inline text, a sample, files, or stdin when none
/// of those were given.
async fn collect_documents(input: &ExtractInput) -> anyhow::Result<Vec<Document>> {
    let mut documents = Vec::new();

    if let Some(text) = &input.text {
        documents.push(Document {
            label: "--text".to_string(),
            bytes: text.clone().into_bytes(),
        });
    }

    if let Some(name) = &input.sample {
        let sample = samples::find(name).ok_or_else(|| {
            anyhow::anyhow!("Unknown sample '{name}'. Run 'sift samples' to list them.")
        })?;
        documents.push(Document {
            label: format!("sample:{}", sample.name),
            bytes: sample.text.as_bytes().to_vec(),
        });
    }

    documents.extend(read_files(&input.files).await?);

    if documents.is_empty() {
        documents.push(read_stdin().await?);
    }

    Ok(documents)
}

/// Read every file concurrently, returning documents in argument order.
async fn read_files(paths: &[PathBuf]) -> anyhow::Result<Vec<Document>> {
    let reads: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| {
            tokio::spawn(async move {
                let bytes = tokio::fs::read(&path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                Ok::<_, anyhow::Error>(Document {
                    label: path.display().to_string(),
                    bytes,
                })
            })
        })
        .collect();

    let mut documents = Vec::with_capacity(reads.len());
    for read in reads {
        documents.push(read.await.context("File read task failed")??);
    }
    Ok(documents)
}

async fn read_stdin() -> anyhow::Result<Document> {
    if std::io::stdin().is_terminal() {
        eprintln!(
            "Paste text to analyze, then press Ctrl-D. For example:\n  {}",
            samples::placeholder(rotation_seed())
        );
    }

    let mut bytes = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut bytes)
        .await
        .context("Failed to read stdin")?;

    Ok(Document {
        label: "stdin".to_string(),
        bytes,
    })
}

fn rotation_seed() -> usize {
    usize::try_from(std::process::id()).unwrap_or_default()
}

/// Extract every document in parallel, keeping input order.
pub fn extract_documents(
    extractor: Extractor,
    documents: &[Document],
) -> anyhow::Result<Vec<ExtractionReport>> {
    documents
        .par_iter()
        .map(|doc| {
            extractor
                .extract_bytes(&doc.bytes)
                .with_context(|| format!("Cannot extract from {}", doc.label))
        })
        .collect()
}
