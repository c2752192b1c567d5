use clap::{Parser, Subcommand};
use fingerprint_common::experiment::title_for;
use fingerprint_common::params::{
    FingerprintParams, DEFAULT_HASH_FUNCTION, DEFAULT_SALT_PERCENT, DEFAULT_SIZE,
    DEFAULT_SMOOTH_RADIUS,
};
use fingerprint_common::request::{ExperimentRequest, FingerprintRequest};
use fingerprint_common::response::{EncodedImage, ExperimentResult, FingerprintResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod client;
mod config;

use client::ServiceClient;

#[derive(Parser)]
#[command(name = "fingerprint-cli")]
#[command(about = "Generate text fingerprints and run hash map experiments on a fingerprint service")]
struct Cli {
    /// Service base URL (default: config file, then http://127.0.0.1:5000)
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Config file (default: ~/.config/hash-fingerprint/client.toml)
    #[arg(long, global = true)]
    config: Option<String>,
    /// Log requests and responses to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fingerprint a text and write the raw and enhanced images
    Generate {
        /// Text to fingerprint
        #[arg(long, short, conflicts_with = "text_file", required_unless_present = "text_file")]
        text: Option<String>,
        /// Read the text from a file instead
        #[arg(long)]
        text_file: Option<PathBuf>,
        /// Hash map dimension
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: u32,
        /// Hash function identifier understood by the service
        #[arg(long, default_value = DEFAULT_HASH_FUNCTION)]
        hash_function: String,
        /// Salt level in percent (0-100)
        #[arg(long, default_value_t = DEFAULT_SALT_PERCENT)]
        salt_percent: u32,
        /// Smoothing radius for the enhanced image
        #[arg(long, default_value_t = DEFAULT_SMOOTH_RADIUS)]
        smooth_radius: u32,
        /// Directory for raw.png and enhanced.png
        #[arg(long, short, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Run a predefined experiment and print its raw data
    Experiment {
        /// collision, lookup, distribution or hashfunction
        #[arg(long = "type", short = 't', default_value = "collision")]
        kind: String,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn generate(
    client: &ServiceClient,
    text: Option<String>,
    text_file: Option<PathBuf>,
    params: FingerprintParams,
    out_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = match (text, text_file) {
        (Some(t), _) => t,
        (None, Some(path)) => fs::read_to_string(&path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?,
        (None, None) => String::new(),
    };

    // Validate before any network traffic
    let request = FingerprintRequest::new(&text, params)?;
    let result = client.generate(&request)?;

    fs::create_dir_all(out_dir)?;
    write_image(&out_dir.join("raw.png"), &result.raw_image)?;
    write_image(&out_dir.join("enhanced.png"), &result.enhanced_image)?;
    print!("{}", format_stats(&result));
    Ok(())
}

fn write_image(path: &Path, image: &EncodedImage) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = image.decode()?;
    fs::write(path, &bytes)?;
    println!("Image written to: {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

fn format_stats(result: &FingerprintResult) -> String {
    result
        .stats
        .entries()
        .iter()
        .map(|e| format!("{:<20} {}\n", e.label, e.value))
        .collect()
}

fn format_experiment(result: &ExperimentResult) -> String {
    format!(
        "{}\n{}\n\nRaw Data\n{}\n",
        result.title(),
        result.description(),
        result.pretty_payload()
    )
}

fn experiment(client: &ServiceClient, kind: String) -> Result<(), Box<dyn std::error::Error>> {
    let request = ExperimentRequest::new(kind);
    if request.known().is_none() {
        tracing::warn!(
            "{:?} is not a known experiment type; output will be titled {:?}",
            request.kind,
            title_for(&request.kind)
        );
    }
    let result = client.experiment(&request)?;
    print!("{}", format_experiment(&result));
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file_config = config::read_file_config(cli.config.as_deref())?;
    let service = config::resolve(file_config, cli.base_url);
    let client = ServiceClient::new(service)?;

    match cli.command {
        Commands::Generate {
            text,
            text_file,
            size,
            hash_function,
            salt_percent,
            smooth_radius,
            out_dir,
        } => {
            let params = FingerprintParams {
                size,
                hash_function,
                salt_percent,
                smooth_radius,
            };
            generate(&client, text, text_file, params, &out_dir)
        }
        Commands::Experiment { kind } => experiment(&client, kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fingerprint_common::response::{decode_experiment_response, FingerprintStats};

    #[test]
    fn generate_defaults_match_service_defaults() {
        let cli = Cli::try_parse_from(["fingerprint-cli", "generate", "--text", "hello"]).unwrap();
        match cli.command {
            Commands::Generate {
                size,
                hash_function,
                salt_percent,
                smooth_radius,
                ..
            } => {
                assert_eq!(size, 128);
                assert_eq!(hash_function, "String Length");
                assert_eq!(salt_percent, 5);
                assert_eq!(smooth_radius, 2);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn generate_requires_some_text_source() {
        assert!(Cli::try_parse_from(["fingerprint-cli", "generate"]).is_err());
    }

    #[test]
    fn text_and_text_file_conflict() {
        let parsed = Cli::try_parse_from([
            "fingerprint-cli",
            "generate",
            "--text",
            "a",
            "--text-file",
            "b.txt",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn experiment_type_flag() {
        let cli = Cli::try_parse_from([
            "fingerprint-cli",
            "--base-url",
            "http://h:1",
            "experiment",
            "--type",
            "lookup",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://h:1"));
        assert!(matches!(cli.command, Commands::Experiment { ref kind } if kind == "lookup"));
    }

    #[test]
    fn stats_printed_in_fixed_order() {
        let result = FingerprintResult {
            raw_image: EncodedImage::new("iVBORw0KGgo="),
            enhanced_image: EncodedImage::new("iVBORw0KGgo="),
            stats: FingerprintStats {
                total_words: 100,
                unique_words: 80,
                collisions: 5,
                max_collision_level: 3,
            },
        };
        let lines: Vec<String> = format_stats(&result)
            .lines()
            .map(|l| l.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect();
        assert_eq!(
            lines,
            vec![
                "Total Words 100",
                "Unique Words 80",
                "Collisions 5",
                "Max Collision Level 3",
            ]
        );
    }

    #[test]
    fn experiment_output_has_title_and_raw_data() {
        let result = decode_experiment_response("hashfunction", r#"{"a":1}"#).unwrap();
        let out = format_experiment(&result);
        assert!(out.starts_with("Hash Function Comparison\n"));
        assert!(out.contains("Raw Data\n{\n  \"a\": 1\n}"));
    }

    #[test]
    fn blank_text_fails_before_any_request() {
        let client = ServiceClient::new(config::resolve(
            config::FileConfig::default(),
            Some("http://127.0.0.1:9".into()),
        ))
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let err = generate(
            &client,
            Some("   ".into()),
            None,
            FingerprintParams::default(),
            dir.path(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Please enter some text first.");
        assert!(!dir.path().join("raw.png").exists());
    }
}
