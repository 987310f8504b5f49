//! Look up a movie on OMDb from the command line.
//!
//! ```text
//! OMDB_API_KEY=... cargo run --example lookup -- "Toy Story" --rating Metacritic
//! ```

use clap::Parser;
use omdb_minder::{OmdbClient, OmdbConfig, rating_source};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// OMDb lookup demo
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Movie title to look up
    title: String,
    /// OMDb API key (or set OMDB_API_KEY env var)
    #[arg(short, long, env = "OMDB_API_KEY")]
    api_key: Option<String>,
    /// Rating source to print (default: all known sources)
    #[arg(short, long)]
    rating: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("omdb_minder=info")))
        .init();

    let mut client = OmdbClient::new(OmdbConfig::from_env())?;
    if let Some(key) = args.api_key {
        client.set_api_key(key);
    }

    let movie = client.fetch_movie(&args.title)?;
    print!("{}", movie.basic_info());
    if !movie.is_found() {
        if let Some(error) = &movie.error {
            eprintln!("OMDb: {}", error);
        }
        return Ok(());
    }

    let sources = match &args.rating {
        Some(source) => vec![source.as_str()],
        None => vec![
            rating_source::INTERNET_MOVIE_DATABASE,
            rating_source::ROTTEN_TOMATOES,
            rating_source::METACRITIC,
        ],
    };

    for source in sources {
        match movie.rating_by_source(source) {
            Ok(value) => println!("{}: {}", source, value),
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}
