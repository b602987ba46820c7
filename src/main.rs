use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use permission_harvester::harvest::{HarvestPipeline, ManifestDumpExtractor};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "permission-harvester")]
#[command(about = "Classify package permissions and track them across firmware versions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze every firmware version folder under a base directory
    Versions {
        /// Directory holding `<family>_v<N>` folders
        #[arg(default_value = ".")]
        base: PathBuf,

        /// Device-family folder prefix (repeatable)
        #[arg(long = "family", default_value = "q1")]
        families: Vec<String>,

        /// Application directory inside each version folder
        #[arg(long, default_value = "apps")]
        apps_dir: String,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Analyze a single application directory
    Directory {
        dir: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Package file extension
    #[arg(long, default_value = "apk")]
    extension: String,

    /// Manifest dump suffix appended to each package path
    #[arg(long, default_value = permission_harvester::harvest::DEFAULT_DUMP_SUFFIX)]
    dump_suffix: String,

    /// Per-package extraction timeout in seconds
    #[arg(long, default_value = "300")]
    timeout_secs: u64,

    /// Packages extracted concurrently
    #[arg(long, default_value = "4")]
    concurrency: usize,

    /// Write the JSON report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CommonArgs {
    fn pipeline(&self) -> HarvestPipeline<ManifestDumpExtractor> {
        HarvestPipeline::new(ManifestDumpExtractor::new(self.dump_suffix.clone()))
            .with_package_extension(self.extension.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_concurrency(self.concurrency)
    }
}

fn write_report<T: Serialize>(report: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            info!("Report saved to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Versions {
            base,
            families,
            apps_dir,
            common,
        } => {
            let pipeline = common
                .pipeline()
                .with_device_families(families)
                .with_apps_dir(apps_dir);
            let analysis = pipeline
                .analyze_versions(&base)
                .await
                .with_context(|| format!("analyzing versions under {}", base.display()))?;
            write_report(&analysis, common.output.as_deref())?;
        }
        Commands::Directory { dir, common } => {
            let report = common
                .pipeline()
                .analyze_directory(&dir)
                .await
                .with_context(|| format!("analyzing {}", dir.display()))?;
            write_report(&report, common.output.as_deref())?;
        }
    }

    Ok(())
}
