/*!
 * Non-translatable terminology glossary.
 *
 * Technical books keep their software vocabulary in English; the glossary
 * lists the designated terms, grouped by category, and renders the policy
 * block injected verbatim into every translation instruction for a job.
 */

/// A category of terms the translator must leave untranslated.
#[derive(Debug, Clone)]
pub struct GlossaryCategory {
    /// Category label shown in the instruction ("Tools", "Protocols", ...)
    pub label: String,

    /// The terms themselves, verbatim
    pub terms: Vec<String>,
}

impl GlossaryCategory {
    /// Create a category from a label and a term list
    pub fn new(label: &str, terms: &[&str]) -> Self {
        GlossaryCategory {
            label: label.to_string(),
            terms: terms.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Fixed glossary of non-translatable terms for one translation job.
///
/// Immutable once the job starts: every chunk in a job is translated under
/// the same glossary policy.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    categories: Vec<GlossaryCategory>,
}

impl Glossary {
    /// Create an empty glossary
    pub fn new() -> Self {
        Glossary::default()
    }

    /// The built-in glossary for software and technical documentation
    pub fn software_terms() -> Self {
        let categories = vec![
            GlossaryCategory::new(
                "Programming concepts",
                &["Run", "Build", "Deploy", "Debug", "Compile", "Refactor", "Test"],
            ),
            GlossaryCategory::new(
                "Software patterns",
                &["Domain Driven Design", "MVC", "MVVM", "Repository Pattern", "Factory Pattern"],
            ),
            GlossaryCategory::new(
                "Development terms",
                &["Sprint", "Backlog", "User Story", "Bug", "Feature", "Hotfix", "Release"],
            ),
            GlossaryCategory::new(
                "Technical terms",
                &["API", "SDK", "Framework", "Library", "Module", "Package", "Dependency"],
            ),
            GlossaryCategory::new(
                "Code-related",
                &["Function", "Method", "Class", "Object", "Variable", "Parameter", "Import"],
            ),
            GlossaryCategory::new(
                "Tools",
                &["Git", "Docker", "Kubernetes", "Jenkins", "Jira", "VS Code"],
            ),
            GlossaryCategory::new(
                "Platforms",
                &["AWS", "Azure", "Google Cloud", "GitHub", "GitLab", "Bitbucket"],
            ),
            GlossaryCategory::new(
                "Databases",
                &["MySQL", "PostgreSQL", "MongoDB", "Redis", "SQLite"],
            ),
            GlossaryCategory::new(
                "Protocols",
                &["HTTP", "HTTPS", "REST", "GraphQL", "WebSocket", "TCP", "SSH"],
            ),
            GlossaryCategory::new(
                "File formats",
                &["JSON", "XML", "CSV", "YAML", "Markdown", "HTML", "CSS"],
            ),
            GlossaryCategory::new(
                "Version control",
                &["Commit", "Push", "Pull", "Merge", "Branch", "Fork", "Repository"],
            ),
            GlossaryCategory::new(
                "DevOps",
                &["CI/CD", "Pipeline", "Container", "Microservices", "Serverless"],
            ),
        ];

        Glossary { categories }
    }

    /// Append extra terms under a dedicated category.
    ///
    /// Used for per-project vocabulary supplied via configuration; an empty
    /// list leaves the glossary unchanged.
    pub fn with_extra_terms(mut self, terms: &[String]) -> Self {
        if !terms.is_empty() {
            self.categories.push(GlossaryCategory {
                label: "Project-specific terms".to_string(),
                terms: terms.to_vec(),
            });
        }
        self
    }

    /// Whether the glossary has any terms at all
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|c| c.terms.is_empty())
    }

    /// Total number of terms across categories
    pub fn term_count(&self) -> usize {
        self.categories.iter().map(|c| c.terms.len()).sum()
    }

    /// Render the keep-in-English policy block for the system instruction.
    ///
    /// The block is injected verbatim so the external capability preserves
    /// the designated vocabulary untranslated.
    pub fn render_rules(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut rules = String::from("DO NOT translate technical terms - keep them in English:\n");
        for category in &self.categories {
            if category.terms.is_empty() {
                continue;
            }
            rules.push_str(&format!("- {}: {}\n", category.label, category.terms.join(", ")));
        }
        rules
    }
}
