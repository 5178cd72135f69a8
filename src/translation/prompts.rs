/*!
 * Prompt templates for book translation.
 *
 * The system instruction carries the language pair and the glossary policy;
 * the chunk text travels separately as user content. Both are fixed for the
 * lifetime of a job.
 */

use crate::translation::glossary::Glossary;

/// System prompt template for chunk translation.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// The default system prompt for technical book translation.
    pub const BOOK_TRANSLATOR: &'static str = r#"You are a professional translator specializing in software and technical documentation. Translate the following text from {source_language} to {target_language}.

IMPORTANT TRANSLATION RULES:
1. Maintain the original formatting, structure, and meaning
2. {glossary_rules}
3. For technical terms not listed above, prefer keeping them in English if they are commonly used in software development
4. Keep numbers, dates, and proper nouns as they are
5. If you see [CONTEXT FROM PREVIOUS PAGE: ...], translate that context as well to maintain continuity
6. Only provide the translation, no explanations or additional text"#;

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the default book translator template.
    pub fn book_translator() -> Self {
        Self::new(Self::BOOK_TRANSLATOR)
    }

    /// Render the template with the given language pair and glossary.
    ///
    /// Languages are addressed by their English names, not ISO codes.
    pub fn render(&self, source_language: &str, target_language: &str, glossary: &Glossary) -> String {
        self.template
            .replace("{source_language}", source_language)
            .replace("{target_language}", target_language)
            .replace("{glossary_rules}", glossary.render_rules().trim_end())
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::book_translator()
    }
}
