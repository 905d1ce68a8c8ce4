use std::path::PathBuf;

use clap::Parser;

use yt_uploads::api::YouTubeClient;
use yt_uploads::config::{load_env, resolve_api_key, terminal_width};
use yt_uploads::error::Result;
use yt_uploads::{output, pipeline};

#[derive(Parser)]
#[command(name = "yt-uploads")]
#[command(about = "List every upload of a YouTube channel with durations and titles")]
#[command(version)]
struct Cli {
    /// Channel URL (/channel/<id>, /user/<name>, /c/<handle> or /@<handle>)
    channel: String,

    /// Write tab-separated output to a file instead of the terminal
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YouTube Data API key (defaults to the YOUTUBE_API_KEY environment variable)
    #[arg(short = 'k', long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    load_env();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let api_key = resolve_api_key(cli.api_key)?;
    let client = YouTubeClient::new(api_key)?;

    eprintln!("Fetching uploads for {}...", cli.channel);
    let records = pipeline::run(&client, &cli.channel).await?;

    if records.is_empty() {
        println!("No uploads found for channel: {}", cli.channel);
        return Ok(());
    }

    match cli.output {
        Some(path) => {
            output::write_tsv(&path, &records)?;
            eprintln!("Wrote {} video(s) to {}", records.len(), path.display());
        }
        None => {
            print!("{}", output::render_table(&records, terminal_width()));
        }
    }

    Ok(())
}
