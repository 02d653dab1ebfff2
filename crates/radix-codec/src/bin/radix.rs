//! `radix` — encode a file as Base16/32/58/62/64/85 text, or decode it back.
//!
//! Usage:
//!   radix encode <FILE> --format base64 [--out-dir DIR]
//!   radix decode <FILE.base64> [--format F] [--out-dir DIR] [--length N]
//!
//! Encoding writes `<DIR>/<file name>.<format>`. Decoding takes the format
//! from the file's last extension unless `--format` is given, and writes
//! `<DIR>/<file name without that extension>`, or `<DIR>/<file name>.decoded`
//! when the extension does not name the format.

use clap::{Parser, Subcommand};
use eyre::WrapErr;
use radix_codec::{from_base85_exact, Format};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "radix", version, about = "Encode and decode files as printable text")]
struct Opts {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Encode a file.
    Encode {
        path: PathBuf,
        /// base16, base32, base58, base62, base64 or base85.
        #[arg(long, short, env = "RADIX_FORMAT")]
        format: Format,
        #[arg(long, env = "RADIX_OUT_DIR", default_value = "output")]
        out_dir: PathBuf,
    },
    /// Decode a file, detecting the format from its extension.
    Decode {
        path: PathBuf,
        #[arg(long, short)]
        format: Option<Format>,
        #[arg(long, env = "RADIX_OUT_DIR", default_value = "output")]
        out_dir: PathBuf,
        /// Original payload length, trims the zero fill of Base85 text.
        #[arg(long)]
        length: Option<usize>,
    },
    /// List the supported formats.
    Formats,
}

/// Initializes a tracing Subscriber for logging
fn subscriber() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> eyre::Result<()> {
    subscriber();
    match Opts::parse().cmd {
        Cmd::Encode {
            path,
            format,
            out_dir,
        } => encode(&path, format, &out_dir),
        Cmd::Decode {
            path,
            format,
            out_dir,
            length,
        } => decode(&path, format, &out_dir, length),
        Cmd::Formats => {
            for format in Format::ALL {
                println!("{:<8} {}", format, format.description());
            }
            Ok(())
        }
    }
}

fn file_name(path: &Path) -> eyre::Result<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| eyre::eyre!("invalid file name: {}", path.display()))
}

fn encode(path: &Path, format: Format, out_dir: &Path) -> eyre::Result<()> {
    let payload = fs::read(path).wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let text = radix_codec::encode(format, &payload)
        .wrap_err_with(|| format!("failed to encode {}", path.display()))?;

    let output = out_dir.join(format!("{}.{}", file_name(path)?, format.extension()));
    write(&output, text.as_bytes())?;
    println!(
        "{} -> {} ({format}, {} bytes)",
        path.display(),
        output.display(),
        payload.len()
    );
    Ok(())
}

fn decode(
    path: &Path,
    format: Option<Format>,
    out_dir: &Path,
    length: Option<usize>,
) -> eyre::Result<()> {
    let detected = Format::from_extension(path);
    let format = match (format, &detected) {
        (Some(format), _) => format,
        (None, Ok(format)) => *format,
        (None, Err(err)) => {
            eyre::bail!("cannot tell the format of {}: {err}", path.display())
        }
    };
    debug!(%format, path = %path.display(), "decoding file");

    let text = fs::read(path).wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let payload = match (format, length) {
        (Format::Base85, Some(len)) => from_base85_exact(&text, len),
        (_, Some(_)) => eyre::bail!("--length only applies to base85"),
        (_, None) => radix_codec::decode(format, &text),
    }
    .wrap_err_with(|| format!("failed to decode {}", path.display()))?;

    // Strip the extension only when it named the format.
    let name = file_name(path)?;
    let name = match (detected, path.file_stem().and_then(|stem| stem.to_str())) {
        (Ok(ext), Some(stem)) if ext == format => stem.to_string(),
        _ => format!("{name}.decoded"),
    };
    let output = out_dir.join(name);
    write(&output, &payload)?;
    println!(
        "{} -> {} ({format}, {} bytes)",
        path.display(),
        output.display(),
        payload.len()
    );
    Ok(())
}

fn write(output: &Path, contents: &[u8]) -> eyre::Result<()> {
    if let Some(dir) = output.parent() {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create {}", dir.display()))?;
    }
    fs::write(output, contents).wrap_err_with(|| format!("failed to write {}", output.display()))
}
