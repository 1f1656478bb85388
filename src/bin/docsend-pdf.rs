//! CLI binary for docsend-pdf.
//!
//! The form: collects the link and optional credentials from flags or
//! interactive prompts, fetches the PDF and writes it to disk.

use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use docsend_pdf::{
    default_download_file_name, save_pdf, ConversionRequest, DocsendClient, DocsendPdfError,
    FetchConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Public deck, saved as <YYMMDD_HHMM>_Document.pdf in the current directory
  docsend-pdf https://docsend.com/view/abc123

  # Email-gated deck with a custom file name
  docsend-pdf https://docsend.com/view/abc123 --email me@example.com --file-name "Acme Seed"

  # Passcode-protected deck into a specific directory
  docsend-pdf https://docsend.com/view/abc123 --passcode hunter2 -d ~/Decks

  # Fill in the form interactively
  docsend-pdf -i

ENVIRONMENT VARIABLES:
  DOCSEND_PDF_ENDPOINT    Override the conversion API endpoint
  RUST_LOG                Override the log filter (e.g. docsend_pdf=debug)
"#;

/// Download DocSend links as PDF files.
#[derive(Parser, Debug)]
#[command(
    name = "docsend-pdf",
    version,
    about = "Download DocSend links as PDF files via the docsend2pdf API",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// DocSend URL (e.g. https://docsend.com/view/...). Prompted for when omitted.
    url: Option<String>,

    /// Email address, if the document requires one.
    #[arg(short, long)]
    email: Option<String>,

    /// Passcode, if the document requires one.
    #[arg(short, long)]
    passcode: Option<String>,

    /// PDF file name without extension. Default: <YYMMDD_HHMM>_Document.
    #[arg(short = 'n', long)]
    file_name: Option<String>,

    /// Directory to save the PDF into.
    #[arg(short = 'd', long, default_value = ".")]
    output_dir: PathBuf,

    /// Conversion API endpoint.
    #[arg(long, env = "DOCSEND_PDF_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Prompt for every form field, even those given as flags.
    #[arg(short, long)]
    interactive: bool,

    /// Disable the spinner.
    #[arg(long)]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Values collected by the form, before normalisation.
#[derive(Debug, Default)]
struct FormInput {
    url: String,
    email: Option<String>,
    passcode: Option<String>,
    file_name: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // The spinner provides all the feedback that matters; keep INFO logs
    // from tearing through it unless asked for.
    let show_progress = !cli.quiet && !cli.no_progress && io::stderr().is_terminal();
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // Every failure is reported, none is fatal beyond this submission.
    match run(&cli, show_progress).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", red("✘"), red(&format!("Error: {e:#}")));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, show_progress: bool) -> Result<()> {
    let form = collect_form(cli)?;

    // Short-circuit before the network: the URL is the only required field.
    let request = ConversionRequest::new(
        &form.url,
        form.email.as_deref(),
        form.passcode.as_deref(),
    )?;

    let client = DocsendClient::new(build_config(cli)?)?;

    let spinner = show_progress.then(fetch_spinner);
    let result = client.fetch(&request).await;
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let pdf = result.map_err(describe)?;

    let file_name = default_download_file_name(form.file_name.as_deref());
    let path = save_pdf(&pdf, &cli.output_dir, &file_name)?;

    if !cli.quiet {
        eprintln!("{} {}", green("✔"), bold("PDF is ready."));
        eprintln!("   {} bytes  →  {}", pdf.len(), bold(&path.display().to_string()));
    }
    Ok(())
}

/// Map CLI args to `FetchConfig`.
fn build_config(cli: &Cli) -> Result<FetchConfig> {
    FetchConfig::builder()
        .endpoint(cli.endpoint.as_str())
        .timeout_secs(cli.timeout)
        .build()
        .context("Failed to configure client")
}

/// Gather form fields from flags, prompting for what is missing.
fn collect_form(cli: &Cli) -> Result<FormInput> {
    collect_form_with(cli, io::stdin().is_terminal())
}

fn collect_form_with(cli: &Cli, can_prompt: bool) -> Result<FormInput> {
    let prompt = cli.interactive || cli.url.is_none();
    if !prompt || !can_prompt {
        // Without a terminal the flags are all we have; a missing URL is
        // reported by validation.
        return Ok(form_from_flags(cli));
    }

    let theme = ColorfulTheme::default();
    let text = |label: &str, initial: Option<&String>| -> Result<String> {
        let mut input = Input::<String>::with_theme(&theme)
            .with_prompt(label)
            .allow_empty(true);
        if let Some(v) = initial {
            input = input.with_initial_text(v.as_str());
        }
        input.interact_text().context("Failed to read input")
    };

    let url = text("DocSend URL *", cli.url.as_ref())?;
    let email = text("Email (optional, if required)", cli.email.as_ref())?;
    let passcode = Password::with_theme(&theme)
        .with_prompt("Passcode (optional, if required)")
        .allow_empty_password(true)
        .interact()
        .context("Failed to read passcode")?;
    let file_name = text("PDF file name (optional)", cli.file_name.as_ref())?;

    Ok(FormInput {
        url,
        email: Some(email),
        passcode: Some(passcode).filter(|p| !p.is_empty()).or_else(|| cli.passcode.clone()),
        file_name: Some(file_name),
    })
}

fn form_from_flags(cli: &Cli) -> FormInput {
    FormInput {
        url: cli.url.clone().unwrap_or_default(),
        email: cli.email.clone(),
        passcode: cli.passcode.clone(),
        file_name: cli.file_name.clone(),
    }
}

fn fetch_spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}  {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]),
    );
    bar.set_message("Fetching PDF…");
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

/// Attach a hint to errors the user can act on.
fn describe(e: DocsendPdfError) -> anyhow::Error {
    match e {
        DocsendPdfError::Api { status: 401 | 403, .. } => {
            anyhow::Error::new(e).context("The document may require --email or --passcode")
        }
        other => other.into(),
    }
}
