//! Browser extension update manifest writer CLI

use clap::Parser;
use colored::*;
use env_logger::Env;
use extupdate::config::EnvOverrides;
use extupdate::{run, AssetKind, RunConfig};

/// Configuration comes from the `INPUT_*` variables set by the release
/// workflow; each flag overrides the matching variable.
#[derive(Parser)]
#[command(name = "extupdate")]
#[command(about = "Write Firefox update.json and Chrome update.xml for an extension release", long_about = None)]
#[command(version)]
struct Cli {
    /// Extension name; selects the output folder [INPUT_NAME]
    #[arg(long)]
    name: Option<String>,

    /// Version being released [INPUT_VERSION]
    #[arg(long = "release-version")]
    release_version: Option<String>,

    /// JSON array of release assets [INPUT_ASSETS]
    #[arg(long)]
    assets: Option<String>,

    /// Root under which `<name>/install` folders live [INPUT_OUTPUT_ROOT]
    #[arg(long)]
    output_root: Option<String>,

    /// Log every write instead of touching the filesystem [INPUT_MOCK=true]
    #[arg(long)]
    mock: bool,
}

impl From<Cli> for EnvOverrides {
    fn from(cli: Cli) -> Self {
        Self {
            name: cli.name,
            version: cli.release_version,
            assets: cli.assets,
            output_root: cli.output_root,
            mock: cli.mock,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match RunConfig::from_env_with(&EnvOverrides::from(cli)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", "❌ Invalid input!".red().bold());
            eprintln!("{}", format!("Error: {}", e).red());
            std::process::exit(1);
        }
    };

    match run(&config) {
        Ok(report) => {
            let heading = if report.dry_run {
                "✅ Dry run completed (nothing written)"
            } else {
                "✅ Update manifests written"
            };
            println!("{}", heading.green().bold());
            println!();
            println!("📊 Summary for {} v{}:", config.name, config.version);
            println!("  - Firefox manifests: {}", report.files_of(AssetKind::Firefox).count());
            println!("  - Chrome manifests: {}", report.files_of(AssetKind::Chrome).count());
            for file in &report.written {
                println!("    {} ({})", file.path.display(), file.asset.dimmed());
            }

            if !report.skipped.is_empty() {
                println!();
                println!("{}", "ℹ️  Skipped assets:".yellow().bold());
                for name in &report.skipped {
                    println!("  - {}", name);
                }
            }
        }
        Err(e) => {
            eprintln!("{}", "❌ Failed to write update manifests!".red().bold());
            eprintln!("{}", format!("Error: {:#}", e).red());
            std::process::exit(1);
        }
    }
}
