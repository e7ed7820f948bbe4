use anyhow::Context;
use clap::Parser;
use favanims::config::{AppConfig, Cli};
use favanims::setup;
use favanims::workflow::{self, RunOutcome};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let root = std::env::current_dir().context("failed to resolve working directory")?;
    let config = AppConfig::resolve(&cli, root)?;

    let mut confirm = |question: &str| setup::confirm(question, true);
    match workflow::run(&config, &mut confirm)? {
        RunOutcome::Completed(summary) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "Done: extracted {}/{} archive(s), moved {} asset(s), found {} animation entries{}.",
                    summary.archives_extracted,
                    summary.archives_found,
                    summary.assets_moved,
                    summary.markers_found,
                    if summary.manifest_updated {
                        ", manifest updated"
                    } else {
                        ""
                    }
                );
            }
        }
        RunOutcome::Cancelled => {}
    }

    Ok(())
}
