//! Output of the non-interactive subcommands.
//!
//! Everything here writes to a caller-supplied writer so the binary can hand
//! in stdout while tests hand in a buffer.

use std::io::Write;

use anyhow::{Context, Result};
use promptgenius_core::about::ABOUT;
use promptgenius_core::{Audience, Choice, FormState, Goal, OutputType, Tone};
use promptgenius_prompts::assemble_prompt;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::clipboard::Clipboard;
use crate::config::GenerateArgs;

/// The `--json` document: the resolved form plus the prompt built from it.
pub fn generate_json(form: &FormState, prompt: &str) -> Value {
    json!({ "form": form, "prompt": prompt })
}

/// Resolve the form, write the prompt (or its JSON document) to `out`, and
/// copy it when a clipboard is given.
///
/// The clipboard must not share `out`: an OSC 52 sequence in the middle of
/// redirected output would corrupt it.
pub fn generate<W: Write>(
    args: &GenerateArgs,
    clipboard: Option<&mut dyn Clipboard>,
    out: &mut W,
) -> Result<String> {
    let form = args.resolve_form()?;
    let prompt = assemble_prompt(&form).context("cannot generate prompt")?;
    info!("generated prompt ({} chars)", prompt.len());

    if args.json {
        let doc = generate_json(&form, &prompt);
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
    } else {
        writeln!(out, "{prompt}")?;
    }
    out.flush()?;

    if let Some(clipboard) = clipboard {
        match clipboard.write_text(&prompt) {
            Ok(()) => eprintln!("Copied to clipboard ({})", clipboard.name()),
            Err(e) => error!("failed to copy text: {e}"),
        }
    }
    Ok(prompt)
}

/// The four lookup tables, one `--<flag>` block each.
pub fn options_listing() -> String {
    let mut out = String::new();
    push_table::<OutputType>(&mut out, "output-type");
    push_table::<Goal>(&mut out, "goal");
    push_table::<Tone>(&mut out, "tone");
    push_table::<Audience>(&mut out, "audience");
    out
}

fn push_table<C: Choice>(out: &mut String, flag: &str) {
    out.push_str(&format!("--{flag}\n"));
    for choice in C::ALL {
        out.push_str(&format!("  {:<14} {}\n", choice.as_str(), choice.label()));
    }
    out.push('\n');
}

pub fn about_text() -> String {
    ABOUT.to_plain_text()
}
