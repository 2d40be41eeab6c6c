//! Profile management command

use super::shared::open_store;
use crate::cli::args::{OutputFormat, ProfileAction, ProfilesArgs};
use crate::config::Config;
use anyhow::{Context, Result};
use colored::*;

pub fn run_profiles(args: ProfilesArgs, config: &Config) -> Result<()> {
    let mut store = open_store(config)?;

    match args.action {
        ProfileAction::List { output_format } => {
            match output_format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(store.profiles())?);
                }
                OutputFormat::Human if store.profiles().is_empty() => {
                    println!("No compost profiles yet. Create one with `compost-log profiles create <NAME>`.");
                }
                OutputFormat::Human => {
                    println!("{}", "Compost profiles:".bright_green().bold());
                    for profile in store.profiles() {
                        let latest = profile
                            .data_logs
                            .first()
                            .map(|log| log.date.format("%Y-%m-%d").to_string())
                            .unwrap_or_else(|| "-".to_string());
                        println!(
                            "  {} {} {}",
                            profile.name.bright_cyan(),
                            format!("({} records, latest {})", profile.data_logs.len(), latest)
                                .bright_black(),
                            profile.id.to_string().bright_black()
                        );
                    }
                }
            }
        }
        ProfileAction::Create {
            name,
            initial_composition,
        } => {
            if store.find(&name).is_some() {
                anyhow::bail!("A profile named '{}' already exists", name);
            }
            let id = store.create_profile(name.trim(), initial_composition).id;
            store.save()?;
            println!("{} {} ({})", "Created profile".green(), name.bright_cyan(), id);
        }
        ProfileAction::Delete { profile } => {
            let removed = store
                .delete_profile(&profile)
                .with_context(|| format!("Cannot delete profile '{}'", profile))?;
            store.save()?;
            println!(
                "{} {} ({} records)",
                "Deleted profile".yellow(),
                removed.name.bright_cyan(),
                removed.data_logs.len()
            );
        }
    }

    Ok(())
}
