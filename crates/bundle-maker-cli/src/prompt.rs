//! Collecting the bundle inputs from flags, config defaults and prompts.

use bundle_maker_core::domain::ScaffoldRequest;
use tracing::debug;

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

pub const BUNDLE_PROMPT: &str = "Enter the Bundle Name";
pub const VENDOR_PROMPT: &str = "Enter the Vendor Name";
pub const VERSION_PROMPT: &str = "Enter the Bundle Version";

/// Source of interactive answers.
pub trait Prompter {
    /// Ask for a line of text; an empty answer returns `default` when given.
    fn ask(&self, prompt: &str, default: Option<&str>) -> CliResult<String>;
}

/// Terminal prompts through `dialoguer`.
#[cfg(feature = "interactive")]
pub struct TerminalPrompter;

#[cfg(feature = "interactive")]
impl Prompter for TerminalPrompter {
    fn ask(&self, prompt: &str, default: Option<&str>) -> CliResult<String> {
        use dialoguer::{Input, theme::ColorfulTheme};

        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }

        input.interact_text().map_err(|e| match e {
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
                CliError::Cancelled
            }
            other => CliError::Prompt {
                message: other.to_string(),
            },
        })
    }
}

/// The prompter for this run, or `None` when prompting is disabled.
pub fn terminal_prompter(no_input: bool) -> CliResult<Option<Box<dyn Prompter>>> {
    use std::io::IsTerminal as _;

    if no_input || !std::io::stdin().is_terminal() {
        return Ok(None);
    }

    #[cfg(feature = "interactive")]
    {
        Ok(Some(Box::new(TerminalPrompter)))
    }
    #[cfg(not(feature = "interactive"))]
    {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}

/// Build the request from flags, falling back to config defaults, then prompts.
///
/// The vendor falls back to `defaults.vendor`; the version prompt offers
/// `defaults.version`.  Missing names are left to the request builder, which
/// rejects them before anything is written.
pub fn collect_request(
    args: &NewArgs,
    config: &AppConfig,
    prompter: Option<&dyn Prompter>,
) -> CliResult<ScaffoldRequest> {
    let default_version = config.defaults.version.as_str();

    let mut bundle = args.bundle.clone();
    let mut vendor = args.vendor.clone().or_else(|| config.defaults.vendor.clone());
    let mut version = args.version.clone();

    if let Some(prompter) = prompter {
        if bundle.is_none() {
            bundle = Some(prompter.ask(BUNDLE_PROMPT, None)?);
        }
        if vendor.is_none() {
            vendor = Some(prompter.ask(VENDOR_PROMPT, None)?);
        }
        if version.is_none() {
            version = Some(prompter.ask(VERSION_PROMPT, Some(default_version))?);
        }
    }

    let mut builder = ScaffoldRequest::builder()
        .version(version.unwrap_or_else(|| default_version.to_string()));
    if let Some(bundle) = bundle {
        builder = builder.bundle_name(bundle);
    }
    if let Some(vendor) = vendor {
        builder = builder.vendor_name(vendor);
    }

    let request = builder.build().map_err(|e| CliError::Core(e.into()))?;
    debug!(request = %request, "Inputs collected");
    Ok(request)
}
