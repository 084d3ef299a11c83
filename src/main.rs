// This is the command-line entry point for the WebP batch converter.
// The lib.rs file holds everything else; this file only wires flags,
// logging and Ctrl-C to it.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use webp_batch_lib::core::{ConsoleSink, TallySink};
use webp_batch_lib::{CancelToken, ConverterSettings, convert_folder};

/// Exit status when the batch ran but some files failed
const EXIT_PARTIAL_FAILURE: u8 = 2;

/// Convert every JPEG/PNG in a folder to WebP.
#[derive(Parser, Debug)]
#[command(name = "webp-batch", version, about)]
struct Cli {
    /// Folder with the source images [default: ./ALL-IMG]
    #[arg(short, long, value_name = "DIR")]
    input: Option<PathBuf>,

    /// Folder receiving the .webp files, created if missing [default: ./WEBP]
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Resize images before encoding
    #[arg(long)]
    resize: bool,

    /// Derive the missing dimension from the source proportions
    #[arg(long)]
    keep_aspect_ratio: bool,

    /// Target width in pixels (0 = unset)
    #[arg(long, value_name = "PX")]
    width: Option<u32>,

    /// Target height in pixels (0 = unset)
    #[arg(long, value_name = "PX")]
    height: Option<u32>,

    /// WebP quality, 100 = lossless [default: 85]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=100))]
    quality: Option<u32>,

    /// JSON settings file; flags given on the command line win
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Layers defaults, then the settings file, then explicit flags.
    fn settings(&self) -> anyhow::Result<ConverterSettings> {
        let mut settings = match &self.config {
            Some(path) => ConverterSettings::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ConverterSettings::default(),
        };

        if let Some(input) = &self.input {
            settings.input_folder = input.clone();
        }
        if let Some(output) = &self.output {
            settings.output_folder = output.clone();
        }
        settings.resize |= self.resize;
        settings.keep_aspect_ratio |= self.keep_aspect_ratio;
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(quality) = self.quality {
            settings.quality = quality;
        }

        Ok(settings)
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false)
        .with_writer(std::io::stderr) // stdout carries the conversion log
        .compact()
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let settings = cli.settings()?;
    debug!("Effective settings: {:?}", settings);
    let request = settings.into_request();

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, stopping after the current file");
                cancel.cancel();
            }
        });
    }

    let mut sink = TallySink::new(ConsoleSink);
    convert_folder(request, cancel, &mut sink)
        .await
        .context("conversion did not start")?;

    if sink.failed() > 0 {
        warn!("{} of {} images failed", sink.failed(), sink.failed() + sink.succeeded());
        return Ok(ExitCode::from(EXIT_PARTIAL_FAILURE));
    }
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    info!("=== WebP batch converter {} ===", env!("CARGO_PKG_VERSION"));

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
