use charsheet::LogLevel;
use charsheet::core::config;
use charsheet::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "charsheet", about = "Terminal character sheet editor")]
struct Args {
    /// Directory characters are saved to and loaded from
    #[arg(long)]
    characters_dir: Option<PathBuf>,

    /// Directory holding the srd_*.json reference files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log file, written in the current directory by default
    #[arg(long, default_value = "charsheet.log")]
    log_file: PathBuf,

    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
    }

    log::info!("Character editor starting up");

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {}, using defaults", e);
            log::warn!("Falling back to default config: {}", e);
            config::CharsheetConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        args.characters_dir.as_deref(),
        args.data_dir.as_deref(),
    );
    log::info!(
        "Characters in {}, reference data in {}",
        resolved.characters_dir.display(),
        resolved.data_dir.display()
    );

    tui::run(resolved)
}
