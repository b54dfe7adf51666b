//! contrast-rules CLI: WCAG 2.1 color-contrast checking.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use contrast_rules::report::{generate_report, pair_report, OutputFormat};
use contrast_rules::types::{ColorPair, PairOutcome};
use contrast_rules::{checker, engine, Color, ComplianceLevel};

/// WCAG 2.1 color-contrast checker
#[derive(Parser)]
#[command(name = "contrast-rules")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check one background/text color pair
    Check {
        /// Background color (hex, e.g. #1e293b)
        background: String,

        /// Text color (hex)
        text: String,

        /// WCAG conformance level
        #[arg(long, default_value = "aa")]
        level: LevelArg,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// Check a JSON file of color pairs
    Batch {
        /// JSON array of {"background", "text", "level"?} entries ("-" for stdin)
        file: PathBuf,

        /// WCAG conformance level for entries without their own
        #[arg(long, default_value = "aa")]
        level: LevelArg,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(long, short)]
        verbose: bool,
    },
}

/// WCAG conformance level CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LevelArg {
    /// Level AA - minimum contrast 4.5:1
    Aa,
    /// Level AAA - enhanced contrast 7.0:1
    Aaa,
}

impl From<LevelArg> for ComplianceLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Aa => ComplianceLevel::AA,
            LevelArg::Aaa => ComplianceLevel::AAA,
        }
    }
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("contrast_rules=debug")
    } else {
        EnvFilter::new("contrast_rules=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { background, text, level, format, verbose } => {
            init_logging(verbose);
            let background: Color = background.parse()?;
            let text: Color = text.parse()?;
            let result = checker::evaluate(background, text, level.into());
            let outcome = PairOutcome { background, text, result };
            println!("{}", pair_report(&outcome, format.into()));

            if !result.passes {
                std::process::exit(1);
            }
        }

        Commands::Batch { file, level, format, output, verbose } => {
            init_logging(verbose);
            let pairs = read_pairs(&file)?;
            let outcome = engine::evaluate_all(&pairs, level.into());
            let report = generate_report(&outcome, format.into());
            write_output(&report, output.as_deref())?;

            if outcome.has_failures() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Read batch entries from a JSON file, or stdin for "-"
fn read_pairs(path: &Path) -> anyhow::Result<Vec<ColorPair>> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&raw)?)
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
