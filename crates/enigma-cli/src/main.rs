//! Enigma command-line binary.
//!
//! # Usage
//!
//! ```bash
//! # Encipher an argument with all rotors at A
//! enigma HELLO WORLD
//!
//! # Start the rotors at Q, E, V and write five-letter groups
//! echo "attack at dawn" | enigma --window QEV --group 5
//! ```

use std::io::{self, Read, Write};

use clap::Parser;
use enigma_cli::{RunConfig, run, strip_line_ending};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Enigma machine simulator
#[derive(Parser, Debug)]
#[command(name = "enigma")]
#[command(about = "Three-rotor Enigma machine simulator")]
#[command(version)]
struct Args {
    /// Starting rotor window, slow to fast
    #[arg(short, long, default_value = "AAA")]
    window: String,

    /// Write ciphertext in groups of this many letters
    #[arg(short, long)]
    group: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Text to encipher (read from stdin when omitted)
    text: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let text = if args.text.is_empty() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        args.text.join(" ")
    };

    let config = RunConfig { window: args.window, group: args.group };

    let output = match run(&config, strip_line_ending(&text)) {
        Ok(output) => output,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e.into());
        },
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;

    Ok(())
}
