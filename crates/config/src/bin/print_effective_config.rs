//! Print the effective agent config (file values + defaults) as a field dump.

use std::io;
use std::io::Write;
use traceprobe_config::{load_agent_config, AgentConfig, RawProperties};

fn main() -> std::process::ExitCode {
    match run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            std::process::ExitCode::from(1)
        },
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_agent_config(path)?,
        None => AgentConfig::from_properties(RawProperties::new()),
    };

    let mut output = config.to_string();
    output.push('\n');

    let mut stdout = io::stdout();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
