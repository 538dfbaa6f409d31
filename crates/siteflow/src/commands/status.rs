use colored::Colorize;

pub async fn handle(
    domain: &str,
    certificate_arn: Option<String>,
    distribution_id: Option<String>,
    profile: Option<String>,
    region: Option<String>,
) -> anyhow::Result<()> {
    let mut orchestrator = super::orchestrator(domain, profile, region).await?;
    orchestrator.restore(certificate_arn, distribution_id);

    let snapshot = orchestrator.status().await;

    println!("{}", format!("Status for {}", snapshot.domain).blue().bold());
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
