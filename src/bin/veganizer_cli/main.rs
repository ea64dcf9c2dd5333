// ABOUTME: Veganizer CLI - converts recipes and scores nutrition, climate and animal impact
// ABOUTME: Loads reference data from JSON or SQLite and prints JSON results on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Convert a stored recipe (unknown names use a generic template)
//! veganizer-cli convert "Bœuf bourguignon"
//!
//! # Search recipe names
//! veganizer-cli search bourgui
//!
//! # Animals spared by removing ingredients, with quantities in kg
//! veganizer-cli animals "bœuf" "lardons" --quantity 0.8 --quantity 0.2
//!
//! # Climate comparison of two ingredient lists
//! veganizer-cli climate --original "bœuf" "beurre" --vegan "seitan" "margarine"
//!
//! # Animals spared by a weekly menu over four weeks
//! veganizer-cli menu "Bœuf bourguignon:4" "Quiche lorraine" --weeks 4
//!
//! # Nutrition link coverage of the reference data
//! veganizer-cli --database-url sqlite:./data/veganizer.db link-stats
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;
use veganizer::config::{DatabaseUrl, ServerConfig};
use veganizer::database;
use veganizer::logging::LoggingConfig;
use veganizer::services::{ConversionService, LinkingService, MenuService};
use veganizer_intelligence::PortionPlan;

#[derive(Parser)]
#[command(
    name = "veganizer-cli",
    version,
    about = "Veganize French recipes and score the impact",
    long_about = "Converts recipes into vegan equivalents and reports nutrition, climate footprint and animals spared as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Reference data JSON file (defaults to the built-in dataset)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Reference store: `memory`, `sqlite:<path>` or `sqlite::memory:`
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Convert a recipe into its vegan version
    Convert {
        /// Recipe name
        name: String,
    },

    /// Search stored recipes by name
    Search {
        /// At least two characters of the recipe name
        query: String,
    },

    /// Animals spared by removing animal ingredients
    Animals {
        /// Original ingredients
        #[arg(required = true)]
        ingredients: Vec<String>,

        /// Quantity in kg, one per ingredient in order (default 0.1)
        #[arg(long)]
        quantity: Vec<f64>,
    },

    /// Compare the climate footprint of two ingredient lists
    Climate {
        /// Original ingredients
        #[arg(long, num_args = 1.., required = true)]
        original: Vec<String>,

        /// Vegan ingredients
        #[arg(long, num_args = 1.., required = true)]
        vegan: Vec<String>,

        /// Supplement names added to the vegan side
        #[arg(long)]
        supplement: Vec<String>,
    },

    /// Animals spared by a menu repeated over several weeks
    Menu {
        /// Menu entries as `recipe` or `recipe:servings`
        #[arg(required = true)]
        recipes: Vec<String>,

        /// Number of weeks
        #[arg(long, default_value = "1")]
        weeks: u32,
    },

    /// Report how many reference ingredients link to nutrition data
    LinkStats,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env()
        .with_verbosity(cli.verbose)
        .init()
        .context("Failed to initialize logging")?;

    let database_url = cli
        .database_url
        .as_deref()
        .map(DatabaseUrl::parse_url)
        .transpose()
        .context("Invalid --database-url")?;
    let config = ServerConfig::from_env()
        .context("Invalid configuration")?
        .with_overrides(database_url, cli.data);

    info!(database = %config.database, "Opening reference data");
    let repos = database::open(&config)
        .await
        .context("Failed to open reference data")?;

    let conversion = ConversionService::new(repos.clone())
        .with_portion_plan(PortionPlan::uniform(config.portion_grams));

    match cli.command {
        Command::Convert { name } => commands::recipes::convert(&conversion, &name).await?,
        Command::Search { query } => commands::recipes::search(&conversion, &query).await?,
        Command::Animals {
            ingredients,
            quantity,
        } => commands::impact::animals(&conversion, &ingredients, &quantity).await?,
        Command::Climate {
            original,
            vegan,
            supplement,
        } => {
            commands::impact::climate(&conversion, &repos, &original, &vegan, &supplement).await?;
        }
        Command::Menu { recipes, weeks } => {
            commands::impact::menu(&MenuService::new(repos), &recipes, weeks).await?;
        }
        Command::LinkStats => {
            commands::reference::link_stats(&LinkingService::new(repos)).await?;
        }
    }

    Ok(())
}
