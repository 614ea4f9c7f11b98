//! Best-effort title, description, and filename heuristics.
//!
//! Everything here is regex-driven guesswork over the first lines of a
//! fenced block. The chain lives behind [`ArtifactNaming`] so alternative
//! strategies can replace it without touching extraction control flow.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Language;

static FUNCTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:function|def|const|let|var)\s+(\w+)").unwrap());
static CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:class|interface|type)\s+(\w+)").unwrap());
static COMPONENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:export\s+)?(?:default\s+)?(?:function|const)\s+(\w+Component|\w+Page)")
        .unwrap()
});
static FILENAME_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?://|#|<!--)\s*(?:file:|filename:)?\s*([^\s]+\.\w+)").unwrap());
static DECL_IDENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:function|const)\s+(\w+)").unwrap());

/// Naming strategy for extracted artifacts.
///
/// `counter` is the 1-based index of the artifact within the scanned text.
pub trait ArtifactNaming {
    fn title(&self, language: Language, code: &str, counter: usize) -> String;
    fn description(&self, language: Language, code: &str) -> String;
    fn filename(&self, language: Language, code: &str, counter: usize) -> String;
}

/// The default heuristic chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultNaming;

impl ArtifactNaming for DefaultNaming {
    fn title(&self, language: Language, code: &str, counter: usize) -> String {
        // Declarations in the first 10 lines win over the static tables
        for line in code.lines().take(10) {
            let trimmed = line.trim();

            if let Some(caps) = FUNCTION_RE.captures(trimmed) {
                return format!("{} Function", &caps[1]);
            }

            if let Some(caps) = CLASS_RE.captures(trimmed) {
                let kind = if language == Language::Typescript {
                    "Interface"
                } else {
                    "Class"
                };
                return format!("{} {}", &caps[1], kind);
            }

            if let Some(caps) = COMPONENT_RE.captures(trimmed) {
                return caps[1].to_string();
            }
        }

        match language {
            Language::Javascript => "JavaScript Code".to_string(),
            Language::Typescript => "TypeScript Code".to_string(),
            Language::Python => "Python Script".to_string(),
            Language::Html => "HTML Template".to_string(),
            Language::Css => "CSS Styles".to_string(),
            Language::Json => "JSON Data".to_string(),
            Language::Yaml => "YAML Configuration".to_string(),
            _ => format!("{} Code {}", language.display_name(), counter),
        }
    }

    fn description(&self, language: Language, code: &str) -> String {
        let line_count = code.split('\n').count();

        if code.contains("import") || code.contains("require") {
            return format!("{} lines with imports and dependencies", line_count);
        }
        if code.contains("function") || code.contains("def ") {
            return format!("{} lines containing function definitions", line_count);
        }
        if code.contains("class ") {
            return format!("{} lines with class definitions", line_count);
        }

        match language {
            Language::Html => format!("HTML template with {} lines", line_count),
            Language::Css => format!("CSS styles with {} lines", line_count),
            Language::Json => format!("JSON configuration with {} lines", line_count),
            _ => {
                let tag = language.tag();
                if line_count == 1 {
                    format!("Single line of {} code", tag)
                } else if line_count < 10 {
                    format!("Short {} snippet ({} lines)", tag, line_count)
                } else if line_count < 50 {
                    format!("Medium {} code block ({} lines)", tag, line_count)
                } else {
                    format!("Large {} code file ({} lines)", tag, line_count)
                }
            }
        }
    }

    fn filename(&self, language: Language, code: &str, counter: usize) -> String {
        // A leading comment naming a file wins; the file:/filename: marker
        // is optional, any dotted token counts
        for line in code.lines().take(5) {
            if let Some(caps) = FILENAME_COMMENT_RE.captures(line) {
                return caps[1].to_string();
            }
        }

        // Exported component with a render body reads as a .tsx module
        if code.contains("export default") && code.contains("return") {
            if let Some(caps) = DECL_IDENT_RE.captures(code) {
                return format!("{}.tsx", &caps[1]);
            }
        }

        format!("code-{}.{}", counter, language.extension())
    }
}
