//! Assistant text-asset catalog
//!
//! The assistant layer drives the LLM with one template file per feature,
//! plus standalone instruction and canned-response files. This module maps
//! each asset to its location under the static root and loads the set, so
//! missing files surface at startup instead of on first use.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::DomainError;

/// One text asset per assistant feature. The v1 set is one template per
/// intent; the v2 set drives the function-calling flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    FunctionalityClassification,
    Greeting,
    Intent,
    ContextExtraction,
    QuestionCategorization,
    Weather,
    BookDetails,
    Joke,
    OtherInquiry,
    TimingCategorization,
    V2Answer,
    V2Ask,
    V2Functions,
    V2BookVerify,
    EventExtraction,
    HelpResponse,
}

impl PromptKind {
    /// Declaration order; `PromptCatalog` indexes by position in this array.
    pub const ALL: [PromptKind; 16] = [
        PromptKind::FunctionalityClassification,
        PromptKind::Greeting,
        PromptKind::Intent,
        PromptKind::ContextExtraction,
        PromptKind::QuestionCategorization,
        PromptKind::Weather,
        PromptKind::BookDetails,
        PromptKind::Joke,
        PromptKind::OtherInquiry,
        PromptKind::TimingCategorization,
        PromptKind::V2Answer,
        PromptKind::V2Ask,
        PromptKind::V2Functions,
        PromptKind::V2BookVerify,
        PromptKind::EventExtraction,
        PromptKind::HelpResponse,
    ];

    /// Location relative to the static root
    pub fn rel_path(&self) -> &'static str {
        match self {
            PromptKind::FunctionalityClassification => "prompts/v1/functionality_template.txt",
            PromptKind::Greeting => "prompts/v1/greet_template.txt",
            PromptKind::Intent => "prompts/v1/intent_template.txt",
            PromptKind::ContextExtraction => "prompts/v1/context_extraction_template.txt",
            PromptKind::QuestionCategorization => "prompts/v1/question_categories_template.txt",
            PromptKind::Weather => "prompts/v1/weather_template.txt",
            PromptKind::BookDetails => "prompts/v1/book_details_template.txt",
            PromptKind::Joke => "prompts/v1/joke_prompt.txt",
            PromptKind::OtherInquiry => "prompts/v1/other_inquiry_template.txt",
            PromptKind::TimingCategorization => "prompts/v1/timing_request_categories_template.txt",
            PromptKind::V2Answer => "prompts/v2/ana_v2_answer.txt",
            PromptKind::V2Ask => "prompts/v2/ana_v2_ask.txt",
            PromptKind::V2Functions => "prompts/v2/ana_v2_functions.txt",
            PromptKind::V2BookVerify => "prompts/v2/ana_v2_book_verify.txt",
            PromptKind::EventExtraction => "instructions/event_extraction.txt",
            PromptKind::HelpResponse => "responses/help_response.txt",
        }
    }

    pub fn path(&self, static_dir: &Path) -> PathBuf {
        static_dir.join(self.rel_path())
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rel_path())
    }
}

/// Every assistant text asset of one static root, loaded verbatim
#[derive(Debug)]
pub struct PromptCatalog {
    // One entry per PromptKind, in PromptKind::ALL order
    texts: Vec<String>,
}

impl PromptCatalog {
    /// Read every asset under `static_dir`. Fails on the first missing or
    /// unreadable file, naming the asset.
    pub fn load(static_dir: &Path) -> Result<Self, DomainError> {
        let mut texts = Vec::with_capacity(PromptKind::ALL.len());
        for kind in PromptKind::ALL {
            let path = kind.path(static_dir);
            let text = std::fs::read_to_string(&path).map_err(|e| {
                DomainError::Internal(format!(
                    "failed to read prompt template {}: {}",
                    path.display(),
                    e
                ))
            })?;
            texts.push(text);
        }
        Ok(Self { texts })
    }

    /// Assets absent from `static_dir`, for startup diagnostics
    pub fn missing(static_dir: &Path) -> Vec<PromptKind> {
        PromptKind::ALL
            .into_iter()
            .filter(|kind| !kind.path(static_dir).is_file())
            .collect()
    }

    /// Total: `load` fills one slot per kind, and the discriminant is the
    /// position in `PromptKind::ALL`.
    pub fn get(&self, kind: PromptKind) -> &str {
        &self.texts[kind as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_static_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ana_static_{}_{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
        dir
    }

    fn write_asset(dir: &Path, kind: PromptKind, text: &str) {
        let path = kind.path(dir);
        std::fs::create_dir_all(path.parent().expect("Asset path should have a parent"))
            .expect("Failed to create asset dir");
        std::fs::write(path, text).expect("Failed to write asset");
    }

    #[test]
    fn load_reads_every_asset() {
        let dir = temp_static_dir("full");
        for kind in PromptKind::ALL {
            write_asset(&dir, kind, &format!("text for {}", kind));
        }

        let catalog = PromptCatalog::load(&dir).expect("Failed to load catalog");
        for kind in PromptKind::ALL {
            assert_eq!(catalog.get(kind), format!("text for {}", kind));
        }
        assert!(PromptCatalog::missing(&dir).is_empty());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn assets_resolve_under_versioned_layout() {
        let root = Path::new("static");
        assert_eq!(
            PromptKind::Greeting.path(root),
            Path::new("static/prompts/v1/greet_template.txt")
        );
        assert_eq!(
            PromptKind::V2Answer.path(root),
            Path::new("static/prompts/v2/ana_v2_answer.txt")
        );
        assert_eq!(
            PromptKind::EventExtraction.path(root),
            Path::new("static/instructions/event_extraction.txt")
        );
        assert_eq!(
            PromptKind::HelpResponse.path(root),
            Path::new("static/responses/help_response.txt")
        );
    }

    #[test]
    fn missing_asset_is_reported() {
        let dir = temp_static_dir("partial");
        write_asset(&dir, PromptKind::Greeting, "hello");
        write_asset(&dir, PromptKind::V2Ask, "ask");
        write_asset(&dir, PromptKind::HelpResponse, "help");

        let missing = PromptCatalog::missing(&dir);
        assert_eq!(missing.len(), PromptKind::ALL.len() - 3);
        assert!(!missing.contains(&PromptKind::Greeting));
        assert!(!missing.contains(&PromptKind::V2Ask));
        assert!(!missing.contains(&PromptKind::HelpResponse));
        assert!(missing.contains(&PromptKind::Joke));
        assert!(missing.contains(&PromptKind::V2Functions));
        assert!(missing.contains(&PromptKind::EventExtraction));

        let err = PromptCatalog::load(&dir).expect_err("Load should fail");
        assert!(err.to_string().contains("prompt template"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
