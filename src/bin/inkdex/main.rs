use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use spdlog::{error, info, warn};

use inkdex::error::IngestError;
use inkdex::ingest::ingest;
use inkdex::logger::configure_logger;
use inkdex::manifest::render_manifest;
use inkdex::text_utils::format_date_time;

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "inkdex.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    /// Write the published-post manifest to this file
    #[arg(short, long)]
    manifest: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config_path.map(PathBuf::from);

    let config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run inkdex --help");
            bail!("could not load configuration");
        }
    };

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("Ingesting posts from {}", config.paths.posts_dir.display());

    let collection = match ingest(&config) {
        Ok(collection) => collection,
        Err(IngestError::Validation(errors)) => {
            for err in &errors {
                error!("{}", err);
            }
            bail!("{} file(s) failed validation", errors.len());
        }
        Err(err) => {
            error!("{}", err);
            bail!("ingestion pass aborted");
        }
    };

    for post in collection.all() {
        let (date, _time) = format_date_time(&post.front.pub_datetime);
        let marker = if post.front.draft { "  (draft)" } else { "" };
        println!("{}  {}{}", date, post.slug, marker);
    }

    let tags = collection.tags();
    if !tags.is_empty() {
        let counts: Vec<String> = tags
            .iter()
            .map(|(tag, count)| format!("{}({})", tag, count))
            .collect();
        println!("Tags: {}", counts.join(" "));
    }

    if let Some(manifest_path) = args.manifest {
        let manifest = render_manifest(&collection, &config.site)?;
        fs::write(&manifest_path, manifest)?;
        info!("Manifest written to {}", manifest_path.display());
    }

    Ok(())
}
