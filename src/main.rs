use clap::Parser;
use lifedeck::core::config;
use lifedeck::{Mode, tui};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "lifedeck", about = "Terminal control deck for a Game of Life server")]
struct Args {
    /// Board variant to control
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Username patterns are saved under
    #[arg(short, long)]
    user: Option<String>,

    /// Base URL of the simulator server
    #[arg(short, long)]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to lifedeck.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("lifedeck.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    let resolved = config::resolve(
        &file_config,
        args.mode,
        args.user.as_deref(),
        args.server.as_deref(),
    );

    log::info!(
        "Lifedeck starting up: mode={:?}, server={}",
        resolved.mode,
        resolved.server_base_url
    );

    tui::run(resolved)
}
