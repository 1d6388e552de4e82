use clap::Parser;
use healmate::core::classifier::classify_message;
use healmate::core::config::{self, CliOverrides};
use healmate::core::state::trim_draft;
use healmate::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "healmate", about = "Diabetes care chat assistant")]
struct Args {
    /// Answer a single message on stdout instead of starting the TUI
    #[arg(long, value_name = "MESSAGE")]
    ask: Option<String>,

    /// Log file path (overrides config and HEALMATE_LOG_FILE)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Read first, report after the logger is up
    let config_load = config::read_config();
    let cli = CliOverrides {
        log_file: args.log_file,
        log_level: args.log_level,
    };
    let resolved = config::resolve(&config_load.config(), &cli);

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
    config_load.finish();

    log::info!("HealMate starting up as '{}'", resolved.assistant_name);

    if let Some(message) = args.ask {
        let message = trim_draft(&message);
        if !message.is_empty() {
            println!("{}", classify_message(message).text());
        }
        return Ok(());
    }

    tui::run(resolved)
}
