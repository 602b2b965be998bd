//! Subcommand handlers. Each one writes its result to `out`; logs go to stderr.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context};
use rxr_assistant::{Assistant, ChatSession, CompletionClient};
use rxr_intake::{CommandTextExtractor, IntakeService, UploadArchive};
use rxr_messages::{render_confirmation, BookingNotifier, BookingRequest, Signature, SmsGateway};
use rxr_store::AddressLogStore;
use rxr_verification::AddressVerifier;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::config::DashboardConfig;

/// Words that end an interactive chat.
const CHAT_EXIT_WORDS: [&str; 2] = ["exit", "quit"];

pub fn verify<S: AddressLogStore>(
    verifier: &AddressVerifier<S>,
    text: &str,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let outcome = verifier.verify(text)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?;
    Ok(())
}

pub fn intake<S: AddressLogStore>(
    config: &DashboardConfig,
    verifier: AddressVerifier<S>,
    path: &Path,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let extractor = CommandTextExtractor::new(
        config.extractor.pdf_program.clone(),
        config.extractor.ocr_program.clone(),
    );
    let service = IntakeService::new(UploadArchive::new(&config.upload_dir), extractor, verifier);
    let report = service.submit_file(path)?;

    writeln!(out, "{}", report.decision.user_message())?;
    writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}

pub fn list_log<S: AddressLogStore>(
    verifier: &AddressVerifier<S>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let records = verifier.records()?;
    writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
    Ok(())
}

pub fn preview_reply(
    request: &BookingRequest,
    signature: &Signature,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    writeln!(out, "{}", render_confirmation(request, signature))?;
    Ok(())
}

/// Print the confirmation, then send it through the notifier's gateway.
pub async fn send_reply<G: SmsGateway>(
    notifier: &BookingNotifier<G>,
    request: &BookingRequest,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    writeln!(out, "{}", notifier.preview(request))?;
    let receipt = notifier
        .confirm(request)
        .await
        .with_context(|| format!("failed to send message to {}", request.customer_name))?;
    writeln!(
        out,
        "Message sent to {} ({}, {})",
        request.customer_name, receipt.id, receipt.status
    )?;
    Ok(())
}

/// One-shot question when `prompt` is given, otherwise a line-by-line loop on `input`.
pub async fn chat<C, R>(
    assistant: &Assistant<C>,
    session: &mut ChatSession,
    prompt: Option<&str>,
    input: R,
    out: &mut dyn Write,
) -> anyhow::Result<()>
where
    C: CompletionClient,
    R: AsyncBufRead + Unpin,
{
    if let Some(prompt) = prompt {
        let reply = assistant.ask(session, prompt).await?;
        writeln!(out, "{reply}")?;
        return Ok(());
    }

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if CHAT_EXIT_WORDS.contains(&line.to_ascii_lowercase().as_str()) {
            break;
        }
        match assistant.ask(session, line).await {
            Ok(reply) => writeln!(out, "{reply}")?,
            Err(e) => writeln!(out, "[error] {e}")?,
        }
    }
    Ok(())
}

/// Read `--text`, `--file`, or stdin, in that order of preference.
pub fn read_verify_input(text: Option<String>, file: Option<&Path>) -> anyhow::Result<String> {
    match (text, file) {
        (Some(_), Some(_)) => bail!("pass either --text or --file, not both"),
        (Some(text), None) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        (None, None) => {
            let mut buf = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf)
                .context("failed to read document text from stdin")?;
            Ok(buf)
        }
    }
}
