//! `rxr`: command-line entry point for the RxR dashboard.

mod commands;
mod config;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rxr_assistant::{Assistant, ChatSession, OpenAiClient};
use rxr_messages::{BookingNotifier, BookingRequest, PhoneNumber, TwilioCredentials, TwilioGateway};
use rxr_store_json::JsonAddressLog;
use rxr_types::ServiceType;
use rxr_utils::LogFormat;
use rxr_verification::AddressVerifier;

use crate::config::DashboardConfig;

#[derive(Parser)]
#[command(name = "rxr", about = "RxR Mobile Detailing dashboard tools")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "RXR_CONFIG")]
    config: Option<PathBuf>,

    /// JSON file holding the address log.
    #[arg(long, env = "RXR_ADDRESS_LOG")]
    address_log: Option<PathBuf>,

    /// Directory uploaded proof documents are archived into.
    #[arg(long, env = "RXR_UPLOAD_DIR")]
    upload_dir: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "RXR_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log output: "human" or "json".
    #[arg(long, env = "RXR_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Verify the address in a document's text against the log.
    Verify {
        /// Document text. Read from stdin when neither --text nor --file is given.
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        /// Plain-text file to read the document from.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Archive an uploaded proof document, extract its text, and verify it.
    Intake {
        path: PathBuf,
    },
    /// Inspect the address log.
    Log {
        #[command(subcommand)]
        action: LogAction,
    },
    /// Render a booking confirmation, optionally sending it by SMS.
    Reply {
        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        vehicle: String,

        /// Service label or slug, e.g. "Interior + Exterior" or "interior-exterior".
        #[arg(long)]
        service: ServiceType,

        /// Send the message instead of only printing it.
        #[arg(long)]
        send: bool,

        #[arg(long, env = "TWILIO_SID", hide_env_values = true)]
        twilio_sid: Option<String>,

        #[arg(long, env = "TWILIO_AUTH", hide_env_values = true)]
        twilio_auth: Option<String>,

        /// Sending number; falls back to `sms.from_number` in the config file.
        #[arg(long, env = "TWILIO_NUMBER")]
        twilio_number: Option<String>,
    },
    /// Ask the pricing assistant. Starts an interactive session without --prompt.
    Chat {
        #[arg(long)]
        prompt: Option<String>,

        #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
        api_key: String,
    },
    /// Print the effective configuration as TOML.
    Config,
}

#[derive(clap::Subcommand)]
enum LogAction {
    /// Print every record in the log.
    List,
}

fn load_config(cli: &Cli) -> anyhow::Result<DashboardConfig> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if let Some(path) = &cli.address_log {
        config.address_log_path = path.clone();
    }
    if let Some(dir) = &cli.upload_dir {
        config.upload_dir = dir.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    rxr_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Verify { text, file } => {
            let text = commands::read_verify_input(text, file.as_deref())?;
            let verifier = AddressVerifier::new(JsonAddressLog::open(&config.address_log_path));
            commands::verify(&verifier, &text, &mut out)?;
        }
        Command::Intake { path } => {
            let verifier = AddressVerifier::new(JsonAddressLog::open(&config.address_log_path));
            commands::intake(&config, verifier, &path, &mut out)?;
        }
        Command::Log {
            action: LogAction::List,
        } => {
            let verifier = AddressVerifier::new(JsonAddressLog::open(&config.address_log_path));
            commands::list_log(&verifier, &mut out)?;
        }
        Command::Reply {
            name,
            phone,
            vehicle,
            service,
            send,
            twilio_sid,
            twilio_auth,
            twilio_number,
        } => {
            let request = BookingRequest::new(&name, &phone, &vehicle, service)?;
            if !send {
                commands::preview_reply(&request, &config.sms.signature, &mut out)?;
            } else {
                let from = twilio_number
                    .or_else(|| config.sms.from_number.clone())
                    .context("no sending number: set TWILIO_NUMBER or sms.from_number")?;
                let credentials = TwilioCredentials {
                    account_sid: twilio_sid.context("TWILIO_SID is required with --send")?,
                    auth_token: twilio_auth.context("TWILIO_AUTH is required with --send")?,
                    from: PhoneNumber::parse(&from)?,
                };
                let gateway = TwilioGateway::with_api_base(credentials, config.sms.api_base.clone());
                let notifier = BookingNotifier::new(gateway, config.sms.signature.clone());
                commands::send_reply(&notifier, &request, &mut out).await?;
            }
        }
        Command::Chat { prompt, api_key } => {
            let client = OpenAiClient::with_api_base(api_key, config.assistant.api_base.clone());
            let assistant = Assistant::new(client, config.assistant.model.clone());
            let mut session = ChatSession::new(config.assistant.system_prompt.clone());
            if prompt.is_none() {
                writeln!(out, "RxR assistant ready. Type 'exit' to quit.")?;
            }
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            commands::chat(&assistant, &mut session, prompt.as_deref(), stdin, &mut out).await?;
        }
        Command::Config => {
            write!(out, "{}", config.to_toml_string()?)?;
        }
    }

    out.flush()?;
    Ok(())
}
