//! Command-line argument parsing for the atelier binary.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Probe the backend health endpoint
    Health,
    /// Send one prompt and stream the response (default)
    Chat { prompt: String },
    /// No prompt given; print usage
    Usage,
}

/// Options that apply to every command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    /// Override the backend base URL
    pub base_url: Option<String>,
}

/// Parse command-line arguments.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
pub fn parse_args<I>(args: I) -> (CliCommand, CliOptions)
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut prompt_words: Vec<String> = Vec::new();
    let mut args = args.skip(1); // program name

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return (CliCommand::Version, options),
            "--health" => return (CliCommand::Health, options),
            "--base-url" => {
                options.base_url = args.next();
            }
            _ => prompt_words.push(arg),
        }
    }

    if prompt_words.is_empty() {
        (CliCommand::Usage, options)
    } else {
        (
            CliCommand::Chat {
                prompt: prompt_words.join(" "),
            },
            options,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(parts: &[&str]) -> (CliCommand, CliOptions) {
        let args: Vec<String> = std::iter::once("atelier")
            .chain(parts.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]).0, CliCommand::Version);
        assert_eq!(parse(&["-V"]).0, CliCommand::Version);
    }

    #[test]
    fn test_parse_health_flag() {
        assert_eq!(parse(&["--health"]).0, CliCommand::Health);
    }

    #[test]
    fn test_parse_prompt_words_joined() {
        let (command, _) = parse(&["write", "a", "fib", "function"]);
        assert_eq!(
            command,
            CliCommand::Chat {
                prompt: "write a fib function".to_string()
            }
        );
    }

    #[test]
    fn test_parse_base_url_option() {
        let (command, options) = parse(&["--base-url", "http://10.0.0.5:8000", "hello"]);
        assert_eq!(options.base_url.as_deref(), Some("http://10.0.0.5:8000"));
        assert_eq!(
            command,
            CliCommand::Chat {
                prompt: "hello".to_string()
            }
        );
    }

    #[test]
    fn test_no_args_is_usage() {
        assert_eq!(parse(&[]).0, CliCommand::Usage);
    }
}
