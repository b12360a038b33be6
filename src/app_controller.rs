use anyhow::{Result, Context, anyhow};
use log::{warn, info, debug};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::errors::WorksheetError;
use crate::file_utils::FileManager;
use crate::translation::{PassageTranslator, TranslationService};
use crate::worksheet::{self, WorksheetDocument, WorksheetRequest};

// @module: Application controller for worksheet generation

/// Output serialization of a worksheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    // @format: Printable HTML page
    #[default]
    Html,
    // @format: Structured JSON document
    Json,
}

impl OutputFormat {
    // @returns: File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

/// One worksheet generation request from the command line
#[derive(Debug, Clone)]
pub struct GenerateJob {
    /// English passage file
    pub english_path: PathBuf,
    /// Korean reference file, sentence-aligned with the passage
    pub korean_path: Option<PathBuf>,
    /// Output file; defaults to `<passage>.<variant>.<ext>` next to the passage
    pub output_path: Option<PathBuf>,
    /// Output format
    pub format: OutputFormat,
    /// Ask the configured AI provider for the Korean reference
    pub use_ai: bool,
    /// Overwrite an existing output file
    pub force_overwrite: bool,
}

/// Main application controller for worksheet generation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Translation collaborator
    translator: Arc<dyn PassageTranslator>,
}

impl Controller {
    // @method: Create a new controller backed by the remote translation service
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        let translator = Arc::new(TranslationService::new(config.translation.clone()));
        Ok(Self { config, translator })
    }

    // @method: Create a controller with a custom translator
    pub fn with_translator(config: Config, translator: Arc<dyn PassageTranslator>) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config, translator })
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Request a Korean translation of the passage from the configured provider
    pub async fn translate_passage(&self, english_text: &str) -> Result<String> {
        if english_text.trim().is_empty() {
            return Err(WorksheetError::EmptyInput.into());
        }

        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(format!("Translating with {}", self.config.translation.provider));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let start = Instant::now();
        let result = self.translator
            .translate(english_text, &self.config.translation.provider, &self.config.translation.api_key)
            .await;
        spinner.finish_and_clear();

        let translation = result?;
        info!("AI translation completed in {}", Self::format_duration(start.elapsed()));
        Ok(translation)
    }

    /// Assemble a worksheet from the passage and optional Korean reference
    pub fn build_document(&self, english_text: &str, korean_text: &str) -> Result<WorksheetDocument> {
        let settings = &self.config.worksheet;
        let request = WorksheetRequest::new(settings.title.clone(), settings.variant, english_text)
            .subtitle(settings.subtitle.clone())
            .korean_text(korean_text)
            .show_reference(settings.show_reference);

        Ok(worksheet::assemble(&request)?)
    }

    /// Serialize a document in the requested format
    pub fn render(&self, document: &WorksheetDocument, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Html => Ok(worksheet::render_document(document)),
            OutputFormat::Json => serde_json::to_string_pretty(document)
                .context("Failed to serialize worksheet to JSON"),
        }
    }

    /// Run the main workflow; returns the written file, or `None` when skipped
    pub async fn run(&self, job: GenerateJob) -> Result<Option<PathBuf>> {
        if !FileManager::file_exists(&job.english_path) {
            return Err(anyhow!("Input file does not exist: {:?}", job.english_path));
        }

        let output_path = job.output_path.clone().unwrap_or_else(|| {
            FileManager::generate_output_path(&job.english_path, self.config.worksheet.variant.id(), job.format.extension())
        });

        // Checked first so a skipped file never costs an API call
        if output_path.exists() && !job.force_overwrite {
            warn!("Skipping, worksheet already exists: {:?} (use -f to force overwrite)", output_path);
            return Ok(None);
        }

        let english_text = FileManager::read_to_string(&job.english_path)?;
        let mut korean_text = match &job.korean_path {
            Some(path) => FileManager::read_to_string(path)?,
            None => String::new(),
        };

        if job.use_ai {
            if !korean_text.trim().is_empty() {
                warn!("Replacing the supplied Korean text with the AI translation");
            }
            korean_text = self.translate_passage(&english_text).await?;
        }

        // A failure here leaves any existing output untouched
        let document = self.build_document(&english_text, &korean_text)?;
        let content = self.render(&document, job.format)?;

        FileManager::write_to_file(&output_path, &content)?;
        info!(
            "Worksheet generated ({} sentences, 1 page): {}",
            document.sentence_count(),
            output_path.display()
        );

        Ok(Some(output_path))
    }

    /// Translate a passage file, writing the Korean text to `output` when given
    pub async fn run_translate(&self, input: &Path, output: Option<&Path>) -> Result<String> {
        let english_text = FileManager::read_to_string(input)?;
        let translation = self.translate_passage(&english_text).await?;

        let english_count = worksheet::segment(&english_text).len();
        let korean_count = worksheet::segment(&translation).len();
        if english_count != korean_count {
            warn!(
                "Translation has {} sentences but the passage has {}; adjust it before generating a worksheet",
                korean_count, english_count
            );
        }

        if let Some(path) = output {
            FileManager::write_to_file(path, &translation)?;
            info!("Success: {}", path.display());
        } else {
            debug!("No output file given, returning translation to caller");
        }

        Ok(translation)
    }

    // Format duration in a human-readable format
    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
