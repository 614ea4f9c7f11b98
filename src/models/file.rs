use serde::{Deserialize, Serialize};

/// Languages the backend and extractor understand.
///
/// This is a closed set: fence tags and backend payloads outside it are
/// mapped to `Text` rather than rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Html,
    Css,
    Javascript,
    Typescript,
    Jsx,
    Tsx,
    Python,
    Json,
    Yaml,
    Markdown,
    Text,
}

impl Language {
    /// Map a fence tag (e.g. `js`, `py`, `tsx`) onto the closed set.
    ///
    /// Unrecognized tags fall back to `Text` so extraction never fails on
    /// an exotic language marker.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "html" => Language::Html,
            "css" => Language::Css,
            "javascript" | "js" => Language::Javascript,
            "typescript" | "ts" => Language::Typescript,
            "jsx" => Language::Jsx,
            "tsx" => Language::Tsx,
            "python" | "py" => Language::Python,
            "json" => Language::Json,
            "yaml" | "yml" => Language::Yaml,
            "markdown" | "md" => Language::Markdown,
            _ => Language::Text,
        }
    }

    /// File extension used when synthesizing filenames.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Html => "html",
            Language::Css => "css",
            Language::Javascript => "js",
            Language::Typescript => "ts",
            Language::Jsx => "jsx",
            Language::Tsx => "tsx",
            Language::Python => "py",
            Language::Json => "json",
            Language::Yaml => "yml",
            Language::Markdown => "md",
            Language::Text => "txt",
        }
    }

    /// The wire/tag spelling of this language.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Html => "html",
            Language::Css => "css",
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
            Language::Jsx => "jsx",
            Language::Tsx => "tsx",
            Language::Python => "python",
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::Markdown => "markdown",
            Language::Text => "text",
        }
    }

    /// Human-readable name for titles ("JavaScript", "Python", ...).
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Javascript => "JavaScript",
            Language::Typescript => "TypeScript",
            Language::Jsx => "JSX",
            Language::Tsx => "TSX",
            Language::Python => "Python",
            Language::Json => "JSON",
            Language::Yaml => "YAML",
            Language::Markdown => "Markdown",
            Language::Text => "Text",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A generated code file, either reported by a tool call or extracted from
/// a fenced block in assistant text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeFile {
    pub filename: String,
    pub content: String,
    pub language: Language,
}

impl CodeFile {
    pub fn new(
        filename: impl Into<String>,
        content: impl Into<String>,
        language: Language,
    ) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
            language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_aliases() {
        assert_eq!(Language::from_tag("js"), Language::Javascript);
        assert_eq!(Language::from_tag("ts"), Language::Typescript);
        assert_eq!(Language::from_tag("py"), Language::Python);
        assert_eq!(Language::from_tag("yml"), Language::Yaml);
        assert_eq!(Language::from_tag("md"), Language::Markdown);
    }

    #[test]
    fn test_from_tag_case_insensitive() {
        assert_eq!(Language::from_tag("Python"), Language::Python);
        assert_eq!(Language::from_tag("HTML"), Language::Html);
    }

    #[test]
    fn test_from_tag_unknown_falls_back_to_text() {
        assert_eq!(Language::from_tag("cobol"), Language::Text);
        assert_eq!(Language::from_tag(""), Language::Text);
    }

    #[test]
    fn test_extension_table() {
        assert_eq!(Language::Javascript.extension(), "js");
        assert_eq!(Language::Yaml.extension(), "yml");
        assert_eq!(Language::Text.extension(), "txt");
    }

    #[test]
    fn test_language_serializes_lowercase() {
        let file = CodeFile::new("a.ts", "let x = 1;", Language::Typescript);
        let json = serde_json::to_string(&file).unwrap();
        assert!(json.contains(r#""language":"typescript""#));
    }

    #[test]
    fn test_language_deserializes_from_wire() {
        let file: CodeFile = serde_json::from_str(
            r#"{"filename":"app.py","content":"print(1)","language":"python"}"#,
        )
        .unwrap();
        assert_eq!(file.language, Language::Python);
    }
}
