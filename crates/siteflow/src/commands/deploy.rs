use colored::Colorize;
use siteflow_core::ValidationRecord;

pub async fn handle(
    domain: &str,
    profile: Option<String>,
    region: Option<String>,
) -> anyhow::Result<()> {
    let mut orchestrator = super::orchestrator(domain, profile, region).await?;
    let apex = orchestrator.config().apex_domain.clone();

    println!("{}", format!("Deploying {apex} ...").blue().bold());

    match orchestrator.deploy().await {
        Ok(outcome) => {
            println!("  {} bucket ready: {}", "✓".green(), outcome.bucket_name.cyan());
            println!(
                "  {} certificate requested: {}",
                "✓".green(),
                outcome.certificate_arn
            );
            print_validation_records(&outcome.validation_records);

            println!();
            println!("{}", "⚠ Manual step required:".yellow().bold());
            println!("  1. Create the validation DNS records in your hosted zone");
            println!("  2. Wait for the certificate status to become ISSUED (`site status`)");
            println!(
                "  3. Run: {}",
                format!("site activate {apex} --certificate-arn {}", outcome.certificate_arn)
                    .cyan()
            );
        }
        Err(err) => {
            println!(
                "  {} deploy halted at {}: {}",
                "✗".red(),
                err.step.to_string().bold(),
                err.source
            );
        }
    }

    Ok(())
}

fn print_validation_records(records: &[ValidationRecord]) {
    if records.is_empty() {
        println!(
            "  {} validation records not available yet, check `site status` in a moment",
            "⚠".yellow()
        );
        return;
    }

    println!("  {} certificate validation records:", "⚠".yellow());
    for record in records {
        println!(
            "    {} {} -> {}",
            record.record_type,
            record.record_name.cyan(),
            record.record_value
        );
    }
}
