use colored::Colorize;

pub async fn handle(
    domain: &str,
    profile: Option<String>,
    region: Option<String>,
) -> anyhow::Result<()> {
    let orchestrator = super::orchestrator(domain, profile, region).await?;

    match orchestrator.upload_sample().await {
        Ok(()) => {
            println!(
                "  {} placeholder index.html uploaded to {}",
                "✓".green(),
                orchestrator.config().bucket_name.cyan()
            );
        }
        Err(err) => {
            println!(
                "  {} {} failed: {}",
                "✗".red(),
                err.step.to_string().bold(),
                err.source
            );
        }
    }

    Ok(())
}
