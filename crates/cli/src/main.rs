mod echo;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use swiftread_core::{
    ContentProcessor, GroqConfig, GroqRewriter, IdentityRewriter, JsonConfig, ProcessorConfig, Rewriter, TextConfig,
    convert_to_json, convert_to_text, count_words, fetch_file, fetch_stdin,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use echo::{
    format_size, print_banner, print_cleanup_details, print_error, print_info, print_step, print_success,
    print_timing_summary, print_warning,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const TOTAL_STEPS: usize = 4;

/// Output format for cleaned content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Clean extracted web page text into a linear stream for speed reading
#[derive(Parser, Debug)]
#[command(name = "swiftread")]
#[command(author = "Swiftread Contributors")]
#[command(version)]
#[command(about = "Clean extracted web page text for speed reading", long_about = None)]
struct Args {
    /// Text file with extracted page content, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Maximum words per chunk sent to the model
    #[arg(long, value_name = "NUM")]
    max_words: Option<usize>,

    /// Maximum number of concurrent model calls
    #[arg(long, value_name = "NUM")]
    concurrency: Option<usize>,

    /// Chat model used for cleanup
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    /// Model request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Skip the model and only re-chunk the text (no API key needed)
    #[arg(long)]
    passthrough: bool,

    /// Wrap text output at this width (0 = no wrapping)
    #[arg(long, default_value = "0", value_name = "COLS")]
    line_width: usize,

    /// Prefix text output with a statistics header
    #[arg(long)]
    header: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "swiftread=debug,swiftread_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_rewriter(args: &Args) -> anyhow::Result<Arc<dyn Rewriter>> {
    if args.passthrough {
        return Ok(Arc::new(IdentityRewriter));
    }

    let mut config =
        GroqConfig::from_env().context("Model settings unavailable (set GROQ_API_KEY or pass --passthrough)")?;
    if let Some(model) = &args.model {
        config = config.with_model(model.as_str());
    }
    if let Some(timeout) = args.timeout {
        config = config.with_timeout(timeout);
    }

    let rewriter = GroqRewriter::new(config).context("Failed to create model client")?;
    Ok(Arc::new(rewriter))
}

fn build_processor_config(args: &Args) -> anyhow::Result<ProcessorConfig> {
    let mut config = ProcessorConfig::from_env().context("Invalid pipeline settings")?;
    if let Some(max_words) = args.max_words {
        config.max_words = max_words;
    }
    if let Some(concurrency) = args.concurrency {
        config.max_concurrency = concurrency;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let started = Instant::now();
    let mut timings = Vec::new();

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let step_started = Instant::now();
    let raw_text = if args.input == "-" {
        if args.verbose {
            print_step(1, TOTAL_STEPS, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")?
    } else {
        if args.verbose {
            print_step(1, TOTAL_STEPS, &format!("Reading from file {}", args.input.bright_white()));
        }
        fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };
    timings.push(("Read".to_string(), step_started.elapsed()));

    let original_words = count_words(&raw_text);
    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(raw_text.len()).bright_white());
        eprintln!("  {} {}", "Words:".dimmed(), original_words.to_string().bright_white());
        eprintln!();
    }

    let config = build_processor_config(&args)?;
    let rewriter = build_rewriter(&args)?;
    debug!(?config, rewriter = rewriter.name(), "pipeline configured");

    if args.verbose {
        print_step(2, TOTAL_STEPS, &format!("Configured {} rewriter", rewriter.name()));
        eprintln!(
            "  {} {}",
            "Chunking:".dimmed(),
            format!("{} words/chunk, {} concurrent calls", config.max_words, config.max_concurrency).bright_white()
        );
        eprintln!();
        print_step(3, TOTAL_STEPS, "Cleaning content");
    }

    let step_started = Instant::now();
    let processor = ContentProcessor::with_config(config, rewriter);
    let cleaned = processor.process(&raw_text).await;
    timings.push(("Cleanup".to_string(), step_started.elapsed()));

    if args.verbose {
        print_cleanup_details(original_words, &cleaned);
    }

    let output = match args.format {
        OutputFormat::Text => {
            let config = TextConfig { line_width: args.line_width, include_header: args.header };
            convert_to_text(&cleaned, &config)
        }
        OutputFormat::Json => {
            let config = JsonConfig { pretty: args.pretty, ..Default::default() };
            convert_to_json(&cleaned, &config).context("Failed to convert to JSON")?
        }
    };

    if args.verbose {
        print_step(4, TOTAL_STEPS, "Writing output");
        eprintln!("  {} {}", "Format:".dimmed(), format!("{:?}", args.format).bright_white());
        eprintln!();
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", output);
        }
    }

    if !cleaned.succeeded {
        let reason = cleaned.error.as_deref().unwrap_or("unknown error");
        print_error(&format!("Cleanup failed, original text returned: {}", reason));
    } else if cleaned.chunks_failed > 0 {
        print_warning(&format!(
            "{} of {} chunks could not be cleaned and were kept as-is",
            cleaned.chunks_failed, cleaned.chunks_processed
        ));
    }

    if args.verbose {
        print_timing_summary(started.elapsed(), &timings);
    }

    Ok(())
}
