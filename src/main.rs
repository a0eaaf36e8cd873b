use anyhow::{anyhow, Result};
use clap::Parser;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufWriter};

use hpb_benchgen::config::Config;
use hpb_benchgen::harness::HarnessGenerator;
use hpb_benchgen::message::MessageSpec;

#[derive(Parser)]
#[command(name = "hpb-benchgen")]
#[command(about = "Generate a C harness referencing hpb message parse/serialize functions")]
#[command(version)]
struct Cli {
    /// Header to include, copied verbatim into the #include directive
    #[arg(allow_hyphen_values = true)]
    include: String,

    /// Message type name, optionally suffixed with a count (e.g. Message100)
    #[arg(allow_hyphen_values = true)]
    message_spec: String,

    /// Harness settings file (TOML); built-in defaults when omitted
    #[arg(short, long)]
    config: Option<String>,

    /// Write the harness to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // -v flags win over the configured level; RUST_LOG wins over both
    let log_level = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .init();

    debug!("hpb-benchgen v{}", env!("CARGO_PKG_VERSION"));

    let spec = MessageSpec::parse(&cli.message_spec)?;
    debug!("Message spec {:?} -> base {:?}, count {}", cli.message_spec, spec.base, spec.count);

    let generator = HarnessGenerator::new(&cli.include, &spec, &config.harness);

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| anyhow!("Failed to create output file {}: {}", path, e))?;
            generator.write_to(BufWriter::new(file))?;
            info!("Wrote {} variant(s) of {} to {}", spec.variant_count(), spec.base, path);
        }
        None => {
            generator.write_to(BufWriter::new(io::stdout().lock()))?;
            debug!("Wrote {} variant(s) of {} to stdout", spec.variant_count(), spec.base);
        }
    }

    Ok(())
}
