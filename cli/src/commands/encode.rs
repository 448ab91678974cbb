use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use hexpng_core::{write_encoded, Style};
use tracing::{debug, info};

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input PNG or other binary file
    pub input: PathBuf,

    /// Output text file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output style: plain or xxd
    #[arg(short, long, default_value = "plain", env = "HEXPNG_STYLE")]
    pub style: Style,
}

/// Execute the encode command
pub fn execute(args: &EncodeArgs) -> Result<()> {
    if !args.input.exists() {
        bail!("input file not found: {}", args.input.display());
    }
    let data = std::fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    debug!(bytes = data.len(), style = %args.style, "encoding");

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            let written = write_encoded(&mut writer, &data, args.style)
                .and_then(|n| writer.flush().map(|_| n))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(chars = written, "hex dump written");
            println!("Hexdump written to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_encoded(&mut out, &data, args.style).context("failed to write to stdout")?;
            // Annotated lines already end in '\n'
            if args.style == Style::Plain {
                writeln!(out).context("failed to write to stdout")?;
            }
            out.flush().context("failed to write to stdout")?;
        }
    }
    Ok(())
}
