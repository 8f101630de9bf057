use anyhow::Result;
use restblocks_config::Config;
use restblocks_engine::{
    io,
    parsing::{ParseOptions, parse_document, snapshot},
};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

fn parse_options(config: &Config) -> ParseOptions {
    ParseOptions {
        min_marker_length: config.min_marker_length,
        allow_titles: config.allow_titles,
        max_nesting_depth: config.max_nesting_depth,
    }
}

/// Prints the outline of one document, one element per line.
fn print_outline(path: &Path, options: &ParseOptions) -> Result<()> {
    let rope = io::read_document(path)?;
    let doc = parse_document(&rope, options);
    log::info!(
        "{}: {} top-level elements",
        path.display(),
        doc.elements.len()
    );

    for line in snapshot::normalize(&rope, &doc).elements {
        println!("{line}");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // Determine document path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let document_path = if args.len() == 2 {
        PathBuf::from(&args[1])
    } else if args.len() == 1 {
        match &config.default_document {
            Some(path) => path.clone(),
            None => {
                eprintln!("Error: No document path provided and no default_document configured");
                eprintln!("Usage: {} <document-path>", args[0]);
                eprintln!("Or set default_document in {}", config_path.display());
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [document-path]", args[0]);
        process::exit(1);
    };

    let options = parse_options(&config);

    if document_path.is_dir() {
        io::validate_document_dir(&document_path)?;
        let files = io::scan_documents(&document_path)?;
        if files.is_empty() {
            log::warn!("No documents found under {}", document_path.display());
        }
        for file in files {
            println!("## {}", file.display());
            if let Err(e) = print_outline(&file, &options) {
                log::warn!("Skipping {}: {e}", file.display());
            }
        }
        return Ok(());
    }

    print_outline(&document_path, &options)
}
