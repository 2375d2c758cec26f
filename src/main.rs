use bookrack::http;
use bookrack::service::BookService;
use bookrack::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookrackd", version, about = "Serve the bookrack catalog over HTTP")]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:4000")]
    listen: String,

    /// Directory holding the book documents (defaults to the platform data dir)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG overrides the default level.
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?.start()?;

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => ProjectDirs::from("com", "bookrack", "bookrack")
            .ok_or("Could not determine a data directory; pass --data-dir")?
            .data_dir()
            .to_path_buf(),
    };
    log::info!("book documents in {}", data_dir.display());

    let store = FileStore::open(data_dir);
    let service = http::shared(BookService::new(store));
    http::serve(service, &cli.listen).await?;
    Ok(())
}
