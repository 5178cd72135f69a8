use anyhow::{anyhow, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::document_assembler::{DocumentAssembler, JobMetadata, MarkdownAssembler};
use crate::errors::ExtractionError;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::pdf_extractor::PageExtractor;
use crate::text_processor::{OverlapMerger, ParagraphSegmenter};
use crate::translation::{
    ChunkSplitter, TranslationJob, TranslationOrchestrator, TranslationService,
};

// @module: Application controller for book translation

/// Main application controller for book translation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.source_language.is_empty() && !self.config.target_language.is_empty()
    }

    /// Run the main workflow for a single input document
    pub async fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let multi_progress = MultiProgress::new();
        self.run_with_progress(input_file, output_dir, &multi_progress, force_overwrite).await
    }

    /// Run every document in a folder through the pipeline
    pub async fn run_folder(&self, input_dir: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let files = FileManager::find_files(&input_dir, "pdf")?;
        if files.is_empty() {
            return Err(anyhow!("No PDF files found in {:?}", input_dir));
        }

        info!("Found {} PDF files to process", files.len());
        let multi_progress = MultiProgress::new();

        let mut failures = 0;
        for file in files {
            if let Err(e) = self
                .run_with_progress(file.clone(), output_dir.clone(), &multi_progress, force_overwrite)
                .await
            {
                warn!("Skipping {:?} after error: {}", file, e);
                failures += 1;
            }
        }

        if failures > 0 {
            warn!("{} files failed to translate", failures);
        }
        Ok(())
    }

    /// Extract and merge a document without translating it.
    ///
    /// Writes the merged text (context markers included) next to where the
    /// translated output would go; useful for inspecting what the model
    /// would be asked to translate.
    pub fn extract_only(&self, input_file: &Path, output_dir: &Path) -> Result<PathBuf> {
        FileManager::ensure_dir(output_dir)?;

        let merged = self.extract_and_merge(input_file)?;
        let output_path = FileManager::generate_output_path(
            input_file,
            output_dir,
            &self.config.source_language,
            "txt",
        );
        FileManager::write_to_file(&output_path, &merged)?;

        info!("Merged text written to {:?}", output_path);
        Ok(output_path)
    }

    /// Run the controller with progress reporting
    async fn run_with_progress(
        &self,
        input_file: PathBuf,
        output_dir: PathBuf,
        multi_progress: &MultiProgress,
        force_overwrite: bool,
    ) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        if !input_file.exists() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        FileManager::ensure_dir(&output_dir)?;

        // Check if a translation already exists
        let output_path = FileManager::generate_output_path(
            &input_file,
            &output_dir,
            &self.config.target_language,
            "md",
        );
        if output_path.exists() && !force_overwrite {
            warn!("Skipping file, translation already exists (use -f to force overwrite)");
            return Ok(());
        }

        // Setup failures must surface before any chunk is processed
        self.config.validate()?;
        let service = TranslationService::new(
            self.config.translation.clone(),
            &self.config.source_language,
            &self.config.target_language,
        )?;
        service.validate_endpoint()?;

        // Extract, merge, and split
        let chunks = {
            let merged = self.extract_and_merge(&input_file)?;
            let splitter = ChunkSplitter::new(self.config.document.max_chunk_size);
            splitter.split(&merged)
        };
        if chunks.is_empty() {
            return Err(ExtractionError::NoContent(input_file.display().to_string()).into());
        }

        // Translate with a progress bar
        let total_chunks = chunks.len() as u64;
        let progress_bar = multi_progress.add(ProgressBar::new(total_chunks));
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));

        info!(
            "🚀 BookwAI: {} -> {} with {}",
            language_utils::get_language_name(&self.config.source_language)?,
            language_utils::get_language_name(&self.config.target_language)?,
            self.config.translation.provider.model
        );
        info!("Translating {} chunks, please wait…", total_chunks);
        progress_bar.set_message("Translating");

        let orchestrator = TranslationOrchestrator::new(
            Duration::from_millis(self.config.translation.common.rate_limit_delay_ms),
            self.config.translation.common.concurrent_requests,
        );

        let pb = Arc::new(progress_bar);
        let pb_callback = Arc::clone(&pb);
        let units = orchestrator
            .translate_all(
                &chunks,
                &self.config.source_language,
                &self.config.target_language,
                &service,
                move |completed, _total| {
                    pb_callback.set_position(completed as u64);
                },
            )
            .await;

        pb.finish_and_clear();

        let job = TranslationJob::new(chunks, units);
        let failed = job.failed_count();
        if failed > 0 {
            warn!("{} of {} chunks failed and carry error markers", failed, job.len());
        }

        // Hand the ordered pairing to the document assembler
        let metadata = JobMetadata::new(
            language_utils::get_language_name(&self.config.source_language)?,
            language_utils::get_language_name(&self.config.target_language)?,
            job.len(),
            self.config.translation.provider.model.clone(),
            self.config.translation.provider.endpoint.clone(),
        );
        let assembler = MarkdownAssembler::new(&output_path);
        let written = assembler.assemble(&job, &metadata)?;

        info!(
            "Translation complete in {}. Output: {:?}",
            Self::format_duration(start_time.elapsed()),
            written
        );
        Ok(())
    }

    /// Extract per-page text and merge it with context overlap
    fn extract_and_merge(&self, input_file: &Path) -> Result<String> {
        let pages = PageExtractor::extract_pages(input_file)?;

        let segmenter = ParagraphSegmenter::new(self.config.document.min_paragraph_chars);
        let merger = OverlapMerger::new(self.config.document.overlap_paragraphs, segmenter);
        let merged = merger.merge(&pages);

        if merged.trim().is_empty() {
            return Err(ExtractionError::NoContent(input_file.display().to_string()).into());
        }
        Ok(merged)
    }

    /// Format a duration as a human-readable string
    fn format_duration(duration: Duration) -> String {
        let total_secs = duration.as_secs();
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let seconds = total_secs % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
