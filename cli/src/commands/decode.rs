use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use hexpng_core::encoder::encode_plain;
use hexpng_core::{decode_detailed, DecodeOptions, Signature, Style};
use tracing::{debug, info, warn};

use crate::utils::{absolutize, group_thousands, resolve_output};

#[derive(Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub input: DecodeInput,

    /// Output file name
    #[arg(short, long)]
    pub output: PathBuf,

    /// Hex of the signature marking the payload start
    #[arg(long, default_value = "89504e470d0a1a0a", env = "HEXPNG_SIGNATURE")]
    pub signature: Signature,

    /// Force a layout instead of detecting it (plain or xxd)
    #[arg(long)]
    pub style: Option<Style>,
}

/// Exactly one source of hex text.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct DecodeInput {
    /// Path to a hex dump text file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Hex dump text (raw or xxd format)
    #[arg(short, long)]
    pub text: Option<String>,
}

/// Execute the decode command
pub fn execute(args: &DecodeArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    if text.trim().is_empty() {
        bail!("no hex dump data found");
    }

    let options = DecodeOptions {
        signature: args.signature.clone(),
        style: args.style,
    };
    let decoded = decode_detailed(&text, &options)?;
    if decoded.signature_offset > 0 {
        warn!(skipped = decoded.signature_offset, "skipped leading bytes before signature");
    }
    debug!(style = %decoded.style, candidate = decoded.candidate_len, "decoded");

    let output = resolve_output(&args.output, args.input.file.as_deref())?;
    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory {}", dir.display()))?;
    }
    std::fs::write(&output, &decoded.data)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(bytes = decoded.data.len(), path = %output.display(), "payload written");

    let head = &decoded.data[..args.signature.len()];
    println!("Payload written to: {}", absolutize(&output)?.display());
    println!("File size: {} bytes", group_thousands(decoded.data.len()));
    println!("Signature verified: {}", encode_plain(head));
    Ok(())
}

fn read_input(input: &DecodeInput) -> Result<String> {
    match (&input.file, &input.text) {
        (Some(path), _) => {
            if !path.exists() {
                bail!("input file not found: {}", path.display());
            }
            let raw = std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            // Lossy: stray bytes surface as invalid hex characters with a position
            Ok(String::from_utf8_lossy(&raw).into_owned())
        }
        (None, Some(text)) => Ok(text.clone()),
        (None, None) => bail!("provide either --file or --text"),
    }
}

