use clap::Parser;
use growthpro_api::dashboard::{Dashboard, HttpInsightsClient, Outcome};
use growthpro_api::models::BusinessReport;
use tracing_subscriber::EnvFilter;

/// Terminal front end for the GrowthProAI insights dashboard.
#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about)]
struct Cli {
    /// Base URL of the insights API
    #[arg(long, env = "GROWTHPRO_API_URL", default_value = "http://localhost:8080")]
    base_url: String,

    /// Business name to analyze
    #[arg(long, default_value = "")]
    name: String,

    /// Business location
    #[arg(long, default_value = "")]
    location: String,

    /// How many times to regenerate the headline after the analysis
    #[arg(long, default_value_t = 0)]
    regenerate: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let api = HttpInsightsClient::new(&cli.base_url);
    let mut dashboard = Dashboard::new();
    dashboard.set_business_name(cli.name);
    dashboard.set_location(cli.location);

    match dashboard.submit(&api).await {
        Outcome::Updated => {}
        Outcome::Invalid => {
            let errors = dashboard.errors();
            for message in [errors.name, errors.location].into_iter().flatten() {
                eprintln!("error: {message}");
            }
            anyhow::bail!("invalid input");
        }
        Outcome::Failed | Outcome::Skipped => {
            anyhow::bail!(dashboard.notice().unwrap_or("analysis did not run"));
        }
    }

    if let Some(report) = dashboard.report() {
        print_report(report);
    }

    for round in 1..=cli.regenerate {
        match dashboard.regenerate_headline(&api).await {
            Outcome::Updated => {
                if let Some(report) = dashboard.report() {
                    println!("Headline #{round}: {}", report.headline);
                }
            }
            _ => {
                eprintln!(
                    "{}",
                    dashboard.notice().unwrap_or("headline was not regenerated")
                );
            }
        }
    }

    Ok(())
}

fn print_report(report: &BusinessReport) {
    println!("Google rating: {:.1} / 5", report.rating);
    println!("Reviews:       {}", report.reviews);
    println!("SEO headline:  {}", report.headline);
}
