use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use passthrough_gateway::application::translator::ResponseTranslator;
use passthrough_gateway::domain::ports::{GatewayConfigurationBox, RawResponseRecorderBox};
use passthrough_gateway::infrastructure::config::PassthroughConfig;
use passthrough_gateway::infrastructure::printer::{JsonResponsePrinter, TextResponsePrinter};
use passthrough_gateway::interfaces::form::callback_reader::CallbackReader;
use passthrough_gateway::interfaces::json::response_writer::ResponseWriter;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RawFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Form-encoded callback body. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// JSON gateway configuration file. Falls back to environment variables.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Record callbacks as authorize only, regardless of configuration.
    #[arg(long)]
    authorize_only: bool,

    /// Format of the raw response stored on each translated response.
    #[arg(long, value_enum, default_value_t = RawFormat::Text)]
    raw_format: RawFormat,

    /// Treat every input line as a separate callback and emit one JSON
    /// response per line.
    #[arg(long)]
    lines: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            PassthroughConfig::from_json_reader(file).into_diagnostic()?
        }
        None => PassthroughConfig::from_env().into_diagnostic()?,
    };
    if cli.authorize_only {
        config.perform_authorize_and_capture = false;
    }
    tracing::debug!(?config, "loaded gateway configuration");
    let config: GatewayConfigurationBox = Box::new(config);

    let recorder: RawResponseRecorderBox = match cli.raw_format {
        RawFormat::Text => Box::new(TextResponsePrinter),
        RawFormat::Json => Box::new(JsonResponsePrinter),
    };
    let translator = ResponseTranslator::new(recorder);

    let source: Box<dyn Read> = match &cli.input {
        Some(path) => Box::new(File::open(path).into_diagnostic()?),
        None => Box::new(io::stdin().lock()),
    };
    let reader = CallbackReader::new(source);

    let stdout = io::stdout();
    if cli.lines {
        let mut writer = ResponseWriter::new(stdout.lock());
        for callback in reader.callbacks() {
            match callback.and_then(|params| translator.translate(&params, &*config)) {
                Ok(response) => writer.write_response(&response).into_diagnostic()?,
                Err(e) => {
                    eprintln!("Error translating callback: {}", e);
                }
            }
        }
        writer.flush().into_diagnostic()?;
    } else {
        let params = reader.read_callback().into_diagnostic()?;
        let response = translator
            .translate(&params, &*config)
            .into_diagnostic()?;
        let mut writer = ResponseWriter::pretty(stdout.lock());
        writer.write_response(&response).into_diagnostic()?;
        writer.flush().into_diagnostic()?;
    }

    Ok(())
}
