//! CLI binary for the ec2-facts crate.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ec2_facts::{FactsError, HostFacts, PageFacts};

#[derive(Parser)]
#[command(name = "ec2-facts")]
#[command(
    author,
    version,
    about = "Print EC2 instance-type and Graviton facts for this host"
)]
struct Cli {
    /// IMDS base URL (override for testing against a mock server)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the EC2 instance type
    InstanceType {
        /// Where to read the instance type from
        #[arg(short, long, default_value = "imds")]
        source: TypeSource,
    },

    /// Print the processor architecture and Graviton flag
    Arch,

    /// Gather and print all page facts
    Facts {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Substitute a placeholder instead of failing when IMDS is unreachable
        #[arg(long)]
        degraded: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum TypeSource {
    #[default]
    Imds,
    Env,
}

impl std::str::FromStr for TypeSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "imds" => Ok(TypeSource::Imds),
            "env" => Ok(TypeSource::Env),
            _ => Err(format!("unknown source: {} (expected imds or env)", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown format: {}", s)),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), FactsError> {
    let facts = match cli.base_url.as_deref() {
        Some(url) => HostFacts::with_base_url(url)?,
        None => HostFacts::new(),
    };

    match cli.command {
        Commands::InstanceType { source } => {
            let instance_type = match source {
                TypeSource::Imds => facts.instance_type().await?.to_string(),
                TypeSource::Env => facts.instance_type_from_env(),
            };
            println!("{}", instance_type);
            Ok(())
        }

        Commands::Arch => {
            println!("{} graviton={}", facts.os_arch(), facts.is_graviton());
            Ok(())
        }

        Commands::Facts { format, degraded } => {
            let model = if degraded {
                PageFacts::gather_degraded(&facts).await
            } else {
                PageFacts::gather(&facts).await?
            };

            match format {
                OutputFormat::Text => {
                    println!("ec2_instance_type: {}", model.ec2_instance_type);
                    println!("os_arch: {}", model.os_arch);
                    println!("is_graviton_instance: {}", model.is_graviton_instance);
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&model)?);
                }
            }
            Ok(())
        }
    }
}
