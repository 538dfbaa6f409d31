mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "site")]
#[command(about = "Provision static-site hosting on AWS", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the storage bucket and request the TLS certificate, then
    /// halt for manual certificate validation
    Deploy {
        /// Apex domain to host (e.g. example.com)
        domain: String,
        /// AWS credential profile
        #[arg(short, long, env = "AWS_PROFILE")]
        profile: Option<String>,
        /// AWS region for the bucket (certificates always go to us-east-1)
        #[arg(short, long, env = "AWS_REGION")]
        region: Option<String>,
    },
    /// Create the distribution, bind the bucket policy and publish DNS
    /// alias records, once the certificate is issued
    Activate {
        /// Apex domain to host (e.g. example.com)
        domain: String,
        /// Certificate ARN reported by a previous deploy
        #[arg(long)]
        certificate_arn: String,
        /// AWS credential profile
        #[arg(short, long, env = "AWS_PROFILE")]
        profile: Option<String>,
        /// AWS region for the bucket
        #[arg(short, long, env = "AWS_REGION")]
        region: Option<String>,
    },
    /// Show each resource's provider-reported state
    Status {
        /// Apex domain to host (e.g. example.com)
        domain: String,
        /// Certificate ARN captured from a previous run
        #[arg(long)]
        certificate_arn: Option<String>,
        /// Distribution id captured from a previous run
        #[arg(long)]
        distribution_id: Option<String>,
        /// AWS credential profile
        #[arg(short, long, env = "AWS_PROFILE")]
        profile: Option<String>,
        /// AWS region for the bucket
        #[arg(short, long, env = "AWS_REGION")]
        region: Option<String>,
    },
    /// Upload a placeholder index.html to the bucket
    #[command(name = "upload-sample")]
    UploadSample {
        /// Apex domain to host (e.g. example.com)
        domain: String,
        /// AWS credential profile
        #[arg(short, long, env = "AWS_PROFILE")]
        profile: Option<String>,
        /// AWS region for the bucket
        #[arg(short, long, env = "AWS_REGION")]
        region: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Deploy {
            domain,
            profile,
            region,
        } => {
            commands::deploy::handle(&domain, profile, region).await?;
        }
        Commands::Activate {
            domain,
            certificate_arn,
            profile,
            region,
        } => {
            commands::activate::handle(&domain, certificate_arn, profile, region).await?;
        }
        Commands::Status {
            domain,
            certificate_arn,
            distribution_id,
            profile,
            region,
        } => {
            commands::status::handle(&domain, certificate_arn, distribution_id, profile, region)
                .await?;
        }
        Commands::UploadSample {
            domain,
            profile,
            region,
        } => {
            commands::upload::handle(&domain, profile, region).await?;
        }
    }

    Ok(())
}
