/*!
 * Output document assembly.
 *
 * The core hands the assembler a complete, index-aligned, ordered pairing of
 * original chunks and translation outcomes plus job metadata; the assembler
 * must not reorder, merge, or drop entries. The production implementation
 * writes a bilingual Markdown document.
 */

use std::fs;
use std::path::{Path, PathBuf};
use chrono::{DateTime, Local};
use log::info;

use crate::errors::AssemblyError;
use crate::translation::TranslationJob;

/// Metadata describing one translation job, written into the output header.
#[derive(Debug, Clone)]
pub struct JobMetadata {
    /// Source language name
    pub source_language: String,
    /// Target language name
    pub target_language: String,
    /// Number of translated sections (chunks)
    pub section_count: usize,
    /// Name of the translation engine
    pub engine_name: String,
    /// Model identifier used for the job
    pub model: String,
    /// Service endpoint used for the job
    pub endpoint: String,
    /// When the document was generated
    pub generated_at: DateTime<Local>,
}

impl JobMetadata {
    /// Create metadata stamped with the current local time
    pub fn new(
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        section_count: usize,
        model: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        JobMetadata {
            source_language: source_language.into(),
            target_language: target_language.into(),
            section_count,
            engine_name: "OpenAI-Compatible Service".to_string(),
            model: model.into(),
            endpoint: endpoint.into(),
            generated_at: Local::now(),
        }
    }
}

/// Consumer of the final ordered (original, translated) pairing.
pub trait DocumentAssembler {
    /// Write the assembled document, returning the path it was written to
    fn assemble(&self, job: &TranslationJob, metadata: &JobMetadata) -> Result<PathBuf, AssemblyError>;
}

/// Writes the job as a bilingual Markdown document.
pub struct MarkdownAssembler {
    /// Where the document is written
    output_path: PathBuf,
}

impl MarkdownAssembler {
    /// Create an assembler targeting the given output path
    pub fn new<P: AsRef<Path>>(output_path: P) -> Self {
        MarkdownAssembler {
            output_path: output_path.as_ref().to_path_buf(),
        }
    }

    /// Render the full document as a string
    pub fn render(job: &TranslationJob, metadata: &JobMetadata) -> String {
        let mut doc = String::new();

        doc.push_str("# Book Translation\n\n");
        doc.push_str(&format!("- Original Language: {}\n", metadata.source_language));
        doc.push_str(&format!("- Target Language: {}\n", metadata.target_language));
        doc.push_str(&format!("- Total Sections: {}\n", metadata.section_count));
        doc.push_str(&format!("- Translation Engine: {}\n", metadata.engine_name));
        doc.push_str(&format!("- Model: {}\n", metadata.model));
        doc.push_str(&format!("- Endpoint: {}\n", metadata.endpoint));
        doc.push_str(&format!(
            "- Generated on: {}\n\n",
            metadata.generated_at.format("%Y-%m-%d %H:%M:%S")
        ));

        for (i, (original, translated)) in job.pairs().enumerate() {
            doc.push_str(&format!("## Section {}\n\n", i + 1));
            doc.push_str("### Original Text\n\n");
            doc.push_str(original);
            doc.push_str("\n\n### Translated Text\n\n");
            doc.push_str(&translated);
            doc.push_str("\n\n---\n\n");
        }

        doc
    }
}

impl DocumentAssembler for MarkdownAssembler {
    fn assemble(&self, job: &TranslationJob, metadata: &JobMetadata) -> Result<PathBuf, AssemblyError> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = Self::render(job, metadata);
        fs::write(&self.output_path, content)?;

        info!("Output document saved: {}", self.output_path.display());
        Ok(self.output_path.clone())
    }
}
