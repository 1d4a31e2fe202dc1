use std::str::FromStr;

use anyhow::{anyhow, Error};
use clap::Parser;
use strum::{Display, VariantNames};

/// The format to use for the composed result
#[derive(Debug, Default, Clone, Display, VariantNames, PartialEq, Eq)]
#[non_exhaustive]
#[strum(serialize_all = "snake_case")]
pub(crate) enum OutputFormat {
    /// Just the rewritten URL
    #[default]
    Url,
    /// A labeled listing of the decoded directive terms
    Parts,
    /// The URL and the decoded terms as a JSON object
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(format: &str) -> Result<Self, Self::Err> {
        match format.to_lowercase().as_str() {
            "url" => Ok(OutputFormat::Url),
            "parts" | "fields" => Ok(OutputFormat::Parts),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format {format}")),
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "fragedit",
    version,
    about = "Edit the text fragment (`#:~:text=`) of a URL",
    long_about = "Decode the text fragment of a URL into its four terms \
(prefix, text start, text end, suffix), optionally replace any of them, \
and print the rewritten URL with a spec-compliant, percent-encoded hash."
)]
pub(crate) struct FrageditOptions {
    /// The URL to edit
    pub(crate) url: String,

    /// Replace the text start term (the target text to highlight)
    #[arg(short = 's', long, value_name = "TEXT")]
    pub(crate) text_start: Option<String>,

    /// Replace the text end term (bounds a target text range)
    #[arg(short = 'e', long, value_name = "TEXT")]
    pub(crate) text_end: Option<String>,

    /// Replace the prefix term (context immediately before the match)
    #[arg(short = 'p', long, value_name = "TEXT")]
    pub(crate) prefix: Option<String>,

    /// Replace the suffix term (context immediately after the match)
    #[arg(short = 'x', long, value_name = "TEXT")]
    pub(crate) suffix: Option<String>,

    /// Remove the text fragment from the URL entirely
    #[arg(
        long,
        conflicts_with_all = ["text_start", "text_end", "prefix", "suffix"]
    )]
    pub(crate) remove: bool,

    /// Output format of the result [possible values: url, parts, json]
    #[arg(short, long, default_value = "url", value_name = "FORMAT")]
    pub(crate) format: OutputFormat,

    /// Pass many times for more log output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::OutputFormat;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("url".parse::<OutputFormat>().unwrap(), OutputFormat::Url);
        assert_eq!(
            "PARTS".parse::<OutputFormat>().unwrap(),
            OutputFormat::Parts
        );
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
