use clap::Parser;
use pixelfind::io::load_rgba_image;
use pixelfind::{ClipRegion, MatchLocation, Matcher, MatcherConfig, SearchOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "pixelfind CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for the search.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchConfigJson {
    pixel_tolerance: f32,
    image_tolerance: f32,
    parallel: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct ClipJson {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

impl From<ClipJson> for ClipRegion {
    fn from(value: ClipJson) -> Self {
        ClipRegion::new(value.x, value.y, value.width, value.height)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    haystack_path: String,
    needle_path: String,
    output_path: Option<String>,
    all_matches: bool,
    search: SearchConfigJson,
    clip: Option<ClipJson>,
}

#[derive(Debug, Serialize)]
struct MatchRecord {
    x: usize,
    y: usize,
}

impl From<MatchLocation> for MatchRecord {
    fn from(value: MatchLocation) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    found: bool,
    first: Option<MatchRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    all: Option<Vec<MatchRecord>>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("pixelfind=debug".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.haystack_path.is_empty() || config.needle_path.is_empty() {
        return Err("haystack_path and needle_path must be set in the config".into());
    }

    let haystack = load_rgba_image(&config.haystack_path)?;
    let needle = load_rgba_image(&config.needle_path)?;
    tracing::info!(
        haystack_width = haystack.width(),
        haystack_height = haystack.height(),
        needle_width = needle.width(),
        needle_height = needle.height(),
        "images loaded"
    );

    let matcher = Matcher::new().with_config(MatcherConfig {
        options: SearchOptions::new(
            config.search.pixel_tolerance,
            config.search.image_tolerance,
        ),
        clip: config.clip.map(ClipRegion::from),
        parallel: config.search.parallel,
    });

    let output = if config.all_matches {
        let all = matcher.find_all(needle.view(), haystack.view())?;
        Output {
            found: !all.is_empty(),
            first: all.first().copied().map(MatchRecord::from),
            all: Some(all.into_iter().map(MatchRecord::from).collect()),
        }
    } else {
        let first = matcher.find(needle.view(), haystack.view())?;
        Output {
            found: first.is_some(),
            first: first.map(MatchRecord::from),
            all: None,
        }
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
