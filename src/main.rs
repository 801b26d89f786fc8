mod clean;
mod error;
mod export;
mod extract;
mod fetch;
mod flatten;
mod keywords;
mod matcher;
mod surname;
mod types;

use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::info;

use error::Result;
use extract::PairScanner;

#[derive(Parser)]
#[command(
    name = "fight_extract",
    about = "UFC event fight-card extractor"
)]
struct Cli {
    /// UFC event number
    #[arg(default_value_t = 324)]
    event: u32,

    /// Output spreadsheet path (default: ufc_<event>_<timestamp>.xlsx)
    #[arg(short, long)]
    out: Option<String>,

    /// Parse a saved HTML file instead of fetching the event page
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Also dump the card as JSON next to the spreadsheet
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let html = match &cli.input {
        Some(path) => {
            info!("Reading {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => {
            let url = fetch::event_url(cli.event);
            info!("Fetching {url}");
            fetch::fetch_page(&url)?
        }
    };

    let text = flatten::flatten_html(&html);
    let pairs = PairScanner::new().scan_text(&text);

    println!("Fights found:");
    for pair in &pairs {
        println!("{} vs {}", pair.fighter1, pair.fighter2);
    }

    if pairs.is_empty() {
        println!("No fights found to save.");
        return Ok(());
    }

    let out = cli
        .out
        .clone()
        .unwrap_or_else(|| default_output_name(cli.event));
    let filename = export::write_xlsx(&pairs, &out)?;
    println!("\nExcel file created: {filename}");
    println!("Total fights saved: {}", pairs.len());

    if cli.json {
        let json_name = json_output_name(&filename);
        export::write_json(&pairs, &json_name)?;
        info!("JSON dump written to {json_name}");
    }

    Ok(())
}

fn default_output_name(event: u32) -> String {
    let stamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("ufc_{event}_{stamp}.xlsx")
}

fn json_output_name(xlsx_name: &str) -> String {
    match xlsx_name.strip_suffix(".xlsx") {
        Some(stem) => format!("{stem}.json"),
        None => format!("{xlsx_name}.json"),
    }
}
