use colored::Colorize;

pub async fn handle(
    domain: &str,
    certificate_arn: String,
    profile: Option<String>,
    region: Option<String>,
) -> anyhow::Result<()> {
    let mut orchestrator = super::orchestrator(domain, profile, region).await?;
    let apex = orchestrator.config().apex_domain.clone();
    let www = orchestrator.config().www_domain.clone();

    println!("{}", format!("Activating {apex} ...").blue().bold());

    match orchestrator.activate(&certificate_arn).await {
        Ok(outcome) => {
            println!(
                "  {} distribution created: {}",
                "✓".green(),
                outcome.distribution_id.cyan()
            );
            println!("    edge domain: {}", outcome.distribution_domain);
            println!("  {} bucket policy bound to distribution", "✓".green());
            println!(
                "  {} alias records upserted for {} and {} in zone {}",
                "✓".green(),
                apex.cyan(),
                www.cyan(),
                outcome.hosted_zone_id
            );

            println!();
            println!(
                "{}",
                "⚠ Distribution deployment takes 15-20 minutes; check `site status`".yellow()
            );
        }
        Err(err) => {
            println!(
                "  {} activation halted at {}: {}",
                "✗".red(),
                err.step.to_string().bold(),
                err.source
            );
        }
    }

    Ok(())
}
