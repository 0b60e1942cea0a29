//! Contact Book - Main entry point
//!
//! Runs the interactive assistant bot on stdin/stdout. Logs go to stderr so
//! they never mix with the bot's replies.

use anyhow::{Context, Result};
use contact_book::{dispatch, Config, ContactServiceImpl};
use std::io::{self, BufRead, Write};
use std::borrow::Cow;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Configuration loaded (birthday window: {} days)",
        config.birthday_window_days
    );

    // The session owns the only service instance
    let mut service = ContactServiceImpl::new(&config);

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();
    let mut buffer = Vec::new();

    println!("Welcome to the assistant bot!");
    loop {
        print!("Enter a command: ");
        stdout.flush().context("Failed to flush stdout")?;

        buffer.clear();
        let read = stdin
            .read_until(b'\n', &mut buffer)
            .context("Failed to read input")?;
        if read == 0 {
            info!("Input closed, ending session");
            println!();
            break;
        }

        let line = decode_line(&buffer);

        if let Some(reply) = dispatch(&mut service, &config, &line) {
            println!("{}", reply.text);
            if reply.exit {
                break;
            }
        }
    }

    info!("Session ended");
    Ok(())
}

/// Decode one input line, replacing invalid UTF-8 instead of failing.
fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    let line = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = line {
        warn!("Input line is not valid UTF-8, decoding lossily");
    }
    line
}
