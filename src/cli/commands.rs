use std::io::{self, Read};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::gateway::{ConversionGateway, ConvertError, DEFAULT_MODEL, GeminiClient};
use crate::models::ConversionDirection;
use crate::tui::run_interactive;
use crate::utils::logging::log_file_path;
use crate::utils::{LogTarget, get_log_dir, init_tracing, sanitize_for_display};

#[derive(Parser)]
#[command(name = "uni-bijoy")]
#[command(version = "0.1.0")]
#[command(about = "Convert Bengali text between Unicode and Bijoy 52 encoding", long_about = None)]
pub struct Cli {
    /// Gemini model used for conversion
    #[arg(long, global = true, default_value = DEFAULT_MODEL)]
    pub model: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert text once and print the result
    Convert {
        /// Conversion direction
        #[arg(long, value_enum, default_value_t = ConversionDirection::UnicodeToBijoy)]
        direction: ConversionDirection,

        /// Text to convert (read from stdin when omitted)
        text: Option<String>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert { direction, text }) => {
            convert_once(&cli.model, direction, text)?;
        }
        None => {
            run_tui(&cli.model)?;
        }
    }

    Ok(())
}

fn build_gateway(model: &str) -> Result<ConversionGateway> {
    let client = GeminiClient::from_env(Some(model.to_string()))
        .context("Set GEMINI_API_KEY (or API_KEY) to your Gemini API key")?;
    info!(model = client.model(), "using Gemini model");
    Ok(ConversionGateway::new(client))
}

fn run_tui(model: &str) -> Result<()> {
    let log_dir = get_log_dir()?;
    init_tracing(LogTarget::File(log_dir.clone()))?;

    let gateway = build_gateway(model)?;
    run_interactive(gateway).with_context(|| {
        format!("TUI exited with an error (see {})", log_file_path(&log_dir).display())
    })
}

fn convert_once(model: &str, direction: ConversionDirection, text: Option<String>) -> Result<()> {
    init_tracing(LogTarget::Stderr)?;

    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("Failed to read text from stdin")?;
            buf
        }
    };

    if text.trim().is_empty() {
        bail!(ConvertError::EmptyInput);
    }

    let gateway = build_gateway(model)?;
    let converted = gateway.convert(&text, direction)?;
    println!("{}", sanitize_for_display(&converted));

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_invocation_runs_tui() {
        let cli = Cli::try_parse_from(["uni-bijoy"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_convert_defaults_to_unicode_to_bijoy() {
        let cli = Cli::try_parse_from(["uni-bijoy", "convert", "আমি"]).unwrap();
        match cli.command {
            Some(Commands::Convert { direction, text }) => {
                assert_eq!(direction, ConversionDirection::UnicodeToBijoy);
                assert_eq!(text.as_deref(), Some("আমি"));
            }
            None => panic!("expected convert subcommand"),
        }
    }

    #[test]
    fn test_convert_direction_and_model_flags() {
        let cli = Cli::try_parse_from([
            "uni-bijoy",
            "convert",
            "--direction",
            "bijoy-to-unicode",
            "--model",
            "gemini-2.5-flash",
        ])
        .unwrap();

        assert_eq!(cli.model, "gemini-2.5-flash");
        match cli.command {
            Some(Commands::Convert { direction, text }) => {
                assert_eq!(direction, ConversionDirection::BijoyToUnicode);
                assert!(text.is_none());
            }
            None => panic!("expected convert subcommand"),
        }
    }

    #[test]
    fn test_unknown_direction_is_rejected() {
        let result = Cli::try_parse_from(["uni-bijoy", "convert", "--direction", "sideways"]);
        assert!(result.is_err());
    }
}
