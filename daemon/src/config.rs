//! Dashboard configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use rxr_assistant::DEFAULT_MODEL;
use rxr_intake::CommandTextExtractor;
use rxr_messages::Signature;
use rxr_utils::LogFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Configuration for the dashboard.
///
/// Loaded from a TOML file via [`DashboardConfig::from_toml_file`] or built
/// programmatically (e.g. for tests). Secrets are never read from the file;
/// they come from the environment through the CLI.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// JSON file holding accepted Family Plan addresses.
    #[serde(default = "default_address_log_path")]
    pub address_log_path: PathBuf,

    /// Directory where raw proof-of-address uploads are archived.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub assistant: AssistantConfig,

    #[serde(default)]
    pub sms: SmsConfig,

    #[serde(default)]
    pub extractor: ExtractorConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_openai_base")]
    pub api_base: String,

    /// First message of every chat session.
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SmsConfig {
    #[serde(default = "default_twilio_base")]
    pub api_base: String,

    /// Sender number; `TWILIO_NUMBER` overrides it.
    #[serde(default)]
    pub from_number: Option<String>,

    #[serde(default)]
    pub signature: Signature,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExtractorConfig {
    #[serde(default = "default_pdf_program")]
    pub pdf_program: String,

    #[serde(default = "default_ocr_program")]
    pub ocr_program: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_address_log_path() -> PathBuf {
    PathBuf::from("address_log.json")
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploaded_verifications")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_openai_base() -> String {
    rxr_assistant::client::DEFAULT_API_BASE.to_string()
}

fn default_twilio_base() -> String {
    rxr_messages::twilio::DEFAULT_API_BASE.to_string()
}

fn default_pdf_program() -> String {
    CommandTextExtractor::DEFAULT_PDF_PROGRAM.to_string()
}

fn default_ocr_program() -> String {
    CommandTextExtractor::DEFAULT_OCR_PROGRAM.to_string()
}

pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are RxR's assistant. Help with car detailing questions in a friendly, professional tone.
RxR offers the following services and pricing:
- Interior Detail Only: $230
- Exterior Detail Only: $230
- Full Combo (Interior + Exterior): $400
- Paint Sealant / Ceramic Coating: $225-$350
- Trim Restoration: Call for estimate
- Bug/Tar Removal: Starting at $30
- Carpet Stain Removal: Starting at $30
- Rain-X Glass Treatment: $15
- Paint Correction: Custom quote
- Overspray Removal: Starting at $50
Subscription plans:
- Basic: $100/mo
- Premium: $200/mo
- Family Plan: $250/mo
New subscribers must get a full $400 detail to start. Proof of address is required for the Family Plan.";

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            address_log_path: default_address_log_path(),
            upload_dir: default_upload_dir(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            assistant: AssistantConfig::default(),
            sms: SmsConfig::default(),
            extractor: ExtractorConfig::default(),
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_openai_base(),
            system_prompt: default_system_prompt(),
        }
    }
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            api_base: default_twilio_base(),
            from_number: None,
            signature: Signature::default(),
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            pdf_program: default_pdf_program(),
            ocr_program: default_ocr_program(),
        }
    }
}
