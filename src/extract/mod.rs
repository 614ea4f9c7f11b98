//! Code-fence extraction from assistant text.
//!
//! Scans free-form text for triple-backtick fenced regions and produces an
//! ordered sequence of segments: plain text spans interleaved with
//! candidate artifacts. Rendering the segments is the consumer's problem;
//! this layer returns data only.
//!
//! # Module structure
//! - `heuristics` - title/description/filename strategies (ArtifactNaming)

mod heuristics;

pub use heuristics::{ArtifactNaming, DefaultNaming};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Artifact, CodeFile, Language};

// Opening marker, optional language tag, non-greedy multi-line body,
// closing marker. An unterminated fence fails the match and the region
// stays plain text.
static FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```(\w+)?\n?(.*?)```").unwrap());

/// A candidate artifact produced by the extractor.
///
/// Holds the heuristic metadata alongside the fenced body; call
/// [`CodeArtifact::into_artifact`] to mint a store-ready [`Artifact`].
#[derive(Debug, Clone, PartialEq)]
pub struct CodeArtifact {
    pub title: String,
    pub description: String,
    pub filename: String,
    pub language: Language,
    pub code: String,
}

impl CodeArtifact {
    /// Convert into a single-file [`Artifact`] with a fresh id.
    pub fn into_artifact(self) -> Artifact {
        let file = CodeFile::new(self.filename, self.code, self.language);
        Artifact::new(self.title, self.description, vec![file])
    }
}

/// One span of scanned text, in original order.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Plain text between fences
    Text(String),
    /// An extracted fenced region
    Artifact(CodeArtifact),
}

/// Scan `content` for fenced code regions using the default naming chain.
pub fn extract_segments(content: &str) -> Vec<Segment> {
    extract_segments_with(&DefaultNaming, content)
}

/// Scan `content` for fenced code regions with a caller-supplied naming
/// strategy.
///
/// Guarantees:
/// - segments appear in original left-to-right order;
/// - whitespace-only text between fences is dropped;
/// - fenced bodies that trim to nothing produce no artifact;
/// - if nothing at all is extracted, the whole input comes back as one
///   plain-text segment (content is never silently dropped).
pub fn extract_segments_with<N: ArtifactNaming>(naming: &N, content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    let mut counter = 1;

    for caps in FENCE_RE.captures_iter(content) {
        let whole = caps.get(0).expect("match group 0 always present");

        if whole.start() > cursor {
            let before = &content[cursor..whole.start()];
            if !before.trim().is_empty() {
                segments.push(Segment::Text(before.to_string()));
            }
        }

        let language = caps
            .get(1)
            .map(|tag| Language::from_tag(tag.as_str()))
            .unwrap_or(Language::Text);
        let code = caps.get(2).map(|body| body.as_str().trim()).unwrap_or("");

        if !code.is_empty() {
            segments.push(Segment::Artifact(CodeArtifact {
                title: naming.title(language, code, counter),
                description: naming.description(language, code),
                filename: naming.filename(language, code, counter),
                language,
                code: code.to_string(),
            }));
            counter += 1;
        }

        cursor = whole.end();
    }

    if cursor < content.len() {
        let rest = &content[cursor..];
        if !rest.trim().is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }
    }

    // Identity fallback: never return an empty scan for non-empty input
    if segments.is_empty() {
        return vec![Segment::Text(content.to_string())];
    }

    segments
}
