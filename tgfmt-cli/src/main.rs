//! tgfmt command-line front end
//!
//! Reads Telegram-flavoured HTML and prints the plain text and message
//! entities as Bot API JSON.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use tgfmt_entity::FormattedText;
use tgfmt_html::{
    HtmlParseResult, ParseWarning, parse_html, parse_html_with_warnings, validate_html,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// tgfmt: Telegram HTML to plain text and message entities
#[derive(Parser, Debug)]
#[command(name = "tgfmt")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Convert inline HTML
    tgfmt --html '<b>bold <i>italic</i></b>'

    # Convert a file, showing what the parser had to repair
    tgfmt --warnings message.html

    # Join fragments with a separator
    tgfmt --html '<b>one</b>' --html '<i>two</i>' --separator ' | '

    # Fail when the markup is not clean
    echo '<b>unclosed' | tgfmt --check
"#)]
struct Cli {
    /// Path to an HTML file; stdin is read when neither this nor --html is given
    #[arg(value_name = "FILE", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Parse HTML string directly instead of a file; repeat to join fragments
    #[arg(long, value_name = "HTML")]
    html: Vec<String>,

    /// Plain text placed between joined fragments
    #[arg(long, value_name = "TEXT", default_value = "")]
    separator: String,

    /// HTML parsed on its own and placed before the output
    #[arg(long, value_name = "HTML")]
    prefix: Option<String>,

    /// Print parse warnings to stderr
    #[arg(short, long)]
    warnings: bool,

    /// Only check the input: print warnings and exit with status 1 if there are any
    #[arg(long)]
    check: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Log parser decisions (same as RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let inputs = read_inputs(&cli)?;
    debug!(fragments = inputs.len(), "read input");

    if cli.check {
        return Ok(check(&inputs));
    }

    let results: Vec<HtmlParseResult> = inputs
        .iter()
        .map(|html| parse_html_with_warnings(html))
        .collect();
    if cli.warnings {
        for (index, result) in results.iter().enumerate() {
            print_warnings(&fragment_label(index, inputs.len()), &result.warnings);
        }
    }

    let body = FormattedText::concat(
        results.into_iter().map(|result| result.formatted),
        &cli.separator,
    );
    let formatted = match &cli.prefix {
        Some(prefix) => {
            let mut formatted = parse_html(prefix);
            formatted.append(body);
            formatted
        }
        None => body,
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&formatted)
    } else {
        serde_json::to_string(&formatted)
    }
    .context("failed to serialize the result")?;
    println!("{json}");
    Ok(ExitCode::SUCCESS)
}

/// Install the log subscriber. Logs go to stderr so stdout stays JSON.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Collect the HTML to convert: every --html fragment, else the file, else stdin.
fn read_inputs(cli: &Cli) -> anyhow::Result<Vec<String>> {
    if !cli.html.is_empty() {
        return Ok(cli.html.clone());
    }
    let html = if let Some(ref path) = cli.path {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    } else {
        let mut html = String::new();
        let _ = io::stdin()
            .read_to_string(&mut html)
            .context("failed to read stdin")?;
        html
    };
    Ok(vec![html])
}

/// Validate every fragment, reporting what is wrong with each.
fn check(inputs: &[String]) -> ExitCode {
    let mut clean = true;
    for (index, html) in inputs.iter().enumerate() {
        let validation = validate_html(html);
        print_warnings(&fragment_label(index, inputs.len()), &validation.warnings);
        clean &= validation.is_valid;
    }
    if clean {
        eprintln!("{}", "ok".green());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn fragment_label(index: usize, count: usize) -> String {
    if count > 1 {
        format!("html #{}", index + 1)
    } else {
        "html".to_string()
    }
}

fn print_warnings(label: &str, warnings: &[ParseWarning]) {
    for warning in warnings {
        eprintln!("{}", format!("[tgfmt {label}] ⚠ {warning}").yellow());
    }
}
