use anyhow::{Context, Result};
use langsync_config::Config;
use langsync_engine::{CollectionPaths, check_consistency, generate_collections, io};
use std::{env, path::PathBuf, process};

/// Works out the site layout from the command line, falling back to the
/// config file. Exits with usage on failure.
fn resolve_config() -> (Config, bool) {
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    if args.len() == 2 {
        // CLI argument provided - use the default layout under it
        (Config::for_site_root(PathBuf::from(&args[1])), false)
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => (config, true),
            Ok(None) => {
                eprintln!("Error: No site root provided and no config file found");
                eprintln!("Usage: {} <site-root>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <site-root>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [site-root]", args[0]);
        process::exit(1);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let (config, from_config) = resolve_config();
    let posts_path = config.posts_path();

    if let Err(e) = io::validate_posts_dir(&posts_path) {
        let source = if from_config {
            format!(" from config file '{}'", Config::config_path().display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Posts path '{}'{} is invalid: {e}",
            posts_path.display(),
            source
        );
        process::exit(1);
    }

    let paths = CollectionPaths {
        tags: config.tags_path(),
        categories: config.categories_path(),
        pages: config.pages_path(),
        posts_per_page: config.posts_per_page,
    };
    for dir in [&paths.tags, &paths.categories, &paths.pages] {
        io::ensure_dir(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let folders = io::collect_folders(&posts_path, config.read_limit)
        .with_context(|| format!("reading posts from {}", posts_path.display()))?;

    let violations = check_consistency(&folders);
    if !violations.is_empty() {
        for violation in &violations {
            eprintln!("{violation}");
        }
        log::error!(
            "{} inconsistencies found, collection pages not generated",
            violations.len()
        );
        process::exit(1);
    }

    generate_collections(&folders, &paths).context("generating collection pages")?;
    log::info!("Generated collection pages for {} folders", folders.len());

    Ok(())
}
