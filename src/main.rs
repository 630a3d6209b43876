use anyhow::Result;
use careershot::app::App;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "careershot")]
#[command(about = "Re-imagine a portrait photo in a chosen career")]
struct CliArgs {
    /// Path to the portrait photo to edit.
    #[arg(value_name = "IMAGE")]
    image: PathBuf,

    /// Career to edit toward; when omitted the model picks one.
    #[arg(long)]
    career: Option<String>,

    /// Directory for the edited image and its record.
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

/// Treat a blank `--career` the same as an omitted one.
fn normalize_career(career: Option<&str>) -> Option<&str> {
    career.map(str::trim).filter(|c| !c.is_empty())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "careershot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting careershot");

    let args = CliArgs::parse();
    let career = normalize_career(args.career.as_deref());

    match App::new(args.output_dir) {
        Ok(app) => match app.run(&args.image, career).await {
            Ok(outcome) => {
                println!("{}", outcome.portrait.title);
                println!();
                println!("{}", outcome.portrait.description);
                println!();
                println!("Saved to {}", outcome.image_path.display());
                Ok(())
            }
            Err(e) => {
                error!("Edit failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_career;

    #[test]
    fn test_normalize_career_keeps_trimmed_value() {
        assert_eq!(normalize_career(Some("  Chef ")), Some("Chef"));
    }

    #[test]
    fn test_normalize_career_drops_blank_value() {
        assert_eq!(normalize_career(Some("   ")), None);
        assert_eq!(normalize_career(None), None);
    }
}
