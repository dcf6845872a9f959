//! docbind CLI - template variable inspection and placeholder correction

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use docbind::{json, CleanReport, DocBind, JsonFormat, VariablePattern};

#[derive(Parser)]
#[command(name = "docbind")]
#[command(version)]
#[command(about = "Inspect template variables and correct placeholder names", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Correct mis-cased placeholder names in a document
    Clean {
        /// Input document (JSON)
        #[arg(value_name = "DOC")]
        input: PathBuf,

        /// Variables file (JSON)
        #[arg(long, value_name = "FILE")]
        vars: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Only report corrections, do not write the document
        #[arg(long)]
        dry_run: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Print the correction report as JSON
        #[arg(long)]
        report: bool,

        #[command(flatten)]
        delimiters: Delimiters,
    },

    /// List the keys declared by a variables file
    Keys {
        /// Variables file (JSON)
        #[arg(value_name = "FILE")]
        vars: PathBuf,
    },

    /// List the placeholder names found in a document
    Tokens {
        /// Input document (JSON)
        #[arg(value_name = "DOC")]
        input: PathBuf,

        #[command(flatten)]
        delimiters: Delimiters,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct Delimiters {
    /// Placeholder opening delimiter
    #[arg(long, env = "DOCBIND_PREFIX", default_value = VariablePattern::DEFAULT_PREFIX)]
    prefix: String,

    /// Placeholder closing delimiter
    #[arg(long, env = "DOCBIND_SUFFIX", default_value = VariablePattern::DEFAULT_SUFFIX)]
    suffix: String,
}

impl Delimiters {
    fn builder(&self) -> docbind::Result<DocBind> {
        DocBind::new().with_delimiters(&self.prefix, &self.suffix)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Clean {
            input,
            vars,
            output,
            dry_run,
            compact,
            report,
            delimiters,
        } => cmd_clean(
            &input,
            &vars,
            output.as_deref(),
            dry_run,
            compact,
            report,
            &delimiters,
        ),
        Commands::Keys { vars } => cmd_keys(&vars),
        Commands::Tokens { input, delimiters } => cmd_tokens(&input, &delimiters),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_clean(
    input: &Path,
    vars: &Path,
    output: Option<&Path>,
    dry_run: bool,
    compact: bool,
    print_report: bool,
    delimiters: &Delimiters,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = json::read_document(input)?;
    let variables = json::read_variables(vars)?;
    log::debug!("Loaded {} variables from {}", variables.len(), vars.display());

    let mut bind = delimiters.builder()?;
    if dry_run {
        bind = bind.dry_run();
    }
    let report = bind.clean(&mut doc, &variables);

    if print_report {
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report, dry_run);
    }

    if dry_run {
        return Ok(());
    }

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    if let Some(path) = output {
        json::write_document(&doc, path, format)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json::to_json(&doc, format)?);
    }

    Ok(())
}

fn print_summary(report: &CleanReport, dry_run: bool) {
    for correction in &report.corrections {
        eprintln!(
            "  {} {} {}",
            correction.from.yellow(),
            "->".dimmed(),
            correction.to.green()
        );
    }

    let verb = if dry_run { "would be rewritten" } else { "rewritten" };
    eprintln!(
        "{} {} of {} runs {} ({} paragraphs)",
        "Done!".green().bold(),
        report.runs_rewritten,
        report.runs_scanned,
        verb,
        report.paragraph_count
    );
}

fn cmd_keys(vars: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let variables = json::read_variables(vars)?;
    let keys = DocBind::new().keys(&variables);

    println!("{}", "Declared Keys".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for key in keys.sorted() {
        println!("{} {}", key.name().bold(), format!("({})", key.kind()).dimmed());
    }
    println!();
    println!("{}: {}", "Total".bold(), keys.len());

    Ok(())
}

fn cmd_tokens(input: &Path, delimiters: &Delimiters) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = json::read_document(input)?;
    for token in delimiters.builder()?.tokens(&mut doc) {
        println!("{}", token);
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docbind".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Template variable binding and placeholder correction tool");
    println!();
    println!("License: MIT");
}
