//! Runs one tool end to end: resolve, validate, then execute or analyze.
//!
//! Usage: `tool-runner <tool-id> <input-file> [selection-value]`
//!
//! Remote tools need `TEXTSMITH_PROCESSOR_URL` to point at the processor
//! endpoint. The selection value fills the tool's required field, e.g.
//! `tool-runner language-translation article.txt french`.

use anyhow::{Context, Result, bail};
use tracing::info;

use tool_analysis::run as run_local;
use tool_pipeline::{
    ContentSource, DirectoryResultSink, FileContentSource, HttpProcessor, Outcome,
    ProcessorConfig, ResultSink, execute, validate,
};
use tool_primitives::{SelectionBag, SelectionField, Tool, standard_catalog};
use tool_prompts::resolve;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let mut args = std::env::args().skip(1);
    let tool_id = args.next().context("usage: tool-runner <tool-id> <input-file> [selection]")?;
    let input_path = args.next().context("missing input file argument")?;
    let selection = args.next();

    let Some(tool) = standard_catalog().get_str(&tool_id) else {
        bail!("unknown tool id `{tool_id}`; run with a catalog identifier");
    };

    info!(tool = %tool.id(), name = tool.name(), "running tool");

    let input = FileContentSource::new(&input_path).read_text().await?;
    let selections = fill_required_selection(tool, selection);
    validate(tool, &input, &selections)?;

    let output = if tool.is_local_analysis() {
        run_local(tool.id().as_str(), &input).context("local analysis produced no report")?
    } else {
        let instruction = resolve(tool.id().as_str(), &selections);
        if let Some(instruction) = &instruction {
            info!(instruction = instruction.as_str(), "resolved instruction");
        }

        let processor = HttpProcessor::new(ProcessorConfig::from_env()?)?;
        let outcome = execute(&processor, &input, tool.id().as_str(), instruction.as_ref()).await;

        if let Outcome::Failure { .. } = &outcome {
            println!("{}", outcome.display_text());
            return Ok(());
        }
        outcome.display_text()
    };

    println!("{output}");

    let sink = DirectoryResultSink::new(".");
    sink.write_text(&tool.result_file_name(), &output).await?;
    info!(file = %tool.result_file_name(), "result saved");

    Ok(())
}

/// Assigns the provided value to whichever selection field the tool needs.
fn fill_required_selection(tool: &Tool, value: Option<String>) -> SelectionBag {
    let bag = SelectionBag::new();
    match (tool.required_selection(), value) {
        (Some(SelectionField::TargetLanguage), Some(value)) => bag.with_language(value),
        (Some(SelectionField::Tone), Some(value)) => bag.with_tone(value),
        (Some(SelectionField::LengthDirection), Some(value)) => bag.with_length(value),
        (Some(SelectionField::Voice), Some(value)) => bag.with_voice(value),
        (Some(SelectionField::SpeechForm), Some(value)) => bag.with_speech(value),
        _ => bag,
    }
}
