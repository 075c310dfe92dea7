//! Command-line argument parsing.

use crate::config::{ClientConfig, FetchMode};
use crate::error::ConfigError;

/// What the binary should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Fetch once, print the catalog as plain text and exit
    Once,
    /// Run the interactive terminal view (default)
    RunTui,
}

/// Parsed command line: the command plus configuration overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub command: CliCommand,
    pub api_base: Option<String>,
    pub parallel: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            command: CliCommand::RunTui,
            api_base: None,
            parallel: false,
        }
    }
}

impl CliOptions {
    /// Overlay the flags on a configuration resolved from the environment.
    pub fn apply(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(api_base) = &self.api_base {
            config = config.with_api_base(api_base.clone());
        }
        if self.parallel {
            config = config.with_fetch_mode(FetchMode::Parallel);
        }
        config
    }
}

/// Parse command-line arguments, skipping the program name.
///
/// `--version` wins over everything else. Unknown arguments are ignored.
///
/// ```
/// use gimme::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["gimme".to_string(), "--once".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Once);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliOptions, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                options.command = CliCommand::Version;
                return Ok(options);
            }
            "--once" => options.command = CliCommand::Once,
            "--parallel" => options.parallel = true,
            "--api-base" => {
                let value = args.next().ok_or(ConfigError::InvalidValue {
                    key: "--api-base",
                    value: String::new(),
                    reason: "expected a URL",
                })?;
                options.api_base = Some(value);
            }
            other => {
                if let Some(value) = other.strip_prefix("--api-base=") {
                    options.api_base = Some(value.to_string());
                }
            }
        }
    }
    Ok(options)
}
