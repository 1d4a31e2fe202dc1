//! `fragedit` edits the text fragment (`#:~:text=`) of a URL from the
//! command line.
//!
//! Decode the terms of an existing deep link:
//! ```sh
//! fragedit --format parts "https://example.com/#:~:text=foo-,hello,world,-bar"
//! ```
//!
//! Replace the highlighted text and print the rewritten URL:
//! ```sh
//! fragedit --text-start "new target" "https://example.com/#:~:text=old"
//! ```
//!
//! Drop the text fragment altogether (a plain `#section` hash is kept):
//! ```sh
//! fragedit --remove "https://example.com/#:~:text=hello"
//! ```
#![warn(clippy::all, clippy::pedantic)]
#![deny(anonymous_parameters, macro_use_extern_crate)]

use anyhow::Result;
use clap::Parser;
use console::style;
use log::{error, LevelFilter};
use serde::Serialize;

use fragedit_lib::{EditorSession, TextFragmentParts};

mod options;

use crate::options::{FrageditOptions, OutputFormat};

/// A C-like enum that can be cast to `i32` and used as process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitCode {
    Success = 0,
    // NOTE: exit code 1 is used for any `Result::Err` bubbled up to `main()`
    // using the `?` operator.
    #[allow(unused)]
    UnexpectedFailure = 1,
    InvalidUrl = 2,
}

fn main() -> Result<()> {
    // std::process::exit doesn't guarantee that all destructors will be run,
    // therefore we wrap the main code in another function to ensure that.
    // See: https://doc.rust-lang.org/stable/std/process/fn.exit.html
    let exit_code = run_main()?;
    std::process::exit(exit_code);
}

fn run_main() -> Result<i32> {
    let opts = FrageditOptions::parse();
    init_logging(opts.verbose);

    let mut session = EditorSession::new();
    session.set_url(&opts.url);

    if !session.is_valid() {
        error!("Please enter a valid URL: {}", opts.url);
        return Ok(ExitCode::InvalidUrl as i32);
    }

    if opts.remove {
        session.clear_text_fragment();
    }
    if let Some(prefix) = opts.prefix {
        session.set_prefix(prefix);
    }
    if let Some(text_start) = opts.text_start {
        session.set_text_start(text_start);
    }
    if let Some(text_end) = opts.text_end {
        session.set_text_end(text_end);
    }
    if let Some(suffix) = opts.suffix {
        session.set_suffix(suffix);
    }

    match opts.format {
        OutputFormat::Url => println!("{}", session.output()),
        OutputFormat::Parts => print_parts(&session),
        OutputFormat::Json => print_json(&session)?,
    }

    Ok(ExitCode::Success as i32)
}

/// Initialize the logging system with the given verbosity level.
fn init_logging(verbose: u8) {
    // Base level for all modules; overridden by RUST_LOG if it's set.
    let env = env_logger::Env::default().filter_or("RUST_LOG", "warn");

    let mut builder = env_logger::Builder::from_env(env);
    builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if std::env::var("RUST_LOG").is_err() {
        let level_filter = match verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        builder
            .filter_module("fragedit", level_filter)
            .filter_module("fragedit_lib", level_filter);
    }

    builder.init();
}

/// Labeled listing of the decoded directive terms plus the composed URL.
fn print_parts(session: &EditorSession) {
    let parts = session.parts();
    let output = session.output();
    for (label, value) in [
        ("prefix", parts.prefix()),
        ("text start", parts.text_start()),
        ("text end", parts.text_end()),
        ("suffix", parts.suffix()),
        ("url", output.as_str()),
    ] {
        println!("{}: {value}", style(format!("{label:>10}")).dim());
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    url: String,
    parts: &'a TextFragmentParts,
}

fn print_json(session: &EditorSession) -> Result<()> {
    let output = JsonOutput {
        url: session.output(),
        parts: session.parts(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
