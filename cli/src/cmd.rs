//! Commands

use anyhow::{bail, Error};
use clap::{Parser, Subcommand};
use headline_client::{query::MAX_PAGE_SIZE, FeedController, FeedQuery};
use inquire::{CustomType, Text};

use crate::{
    config::Config,
    pager,
    util::{info, success, warn},
};

/// Runs the program
pub async fn run() -> Result<(), Error> {
    let args = MainArgs::parse();
    match args.commands {
        MainCommands::All { query } => read(FeedQuery::all_news(query.unwrap_or_default())).await,
        MainCommands::Top { category } => read(FeedQuery::top_headlines(category)).await,
        MainCommands::Country { iso } => read(FeedQuery::country_news(iso)).await,
        MainCommands::Config(args) => run_config_cmd(args),
    }
}

/// CLI main arguments
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct MainArgs {
    #[command(subcommand)]
    pub commands: MainCommands,
}

/// CLI main commands
#[derive(Subcommand)]
pub enum MainCommands {
    /// Searches all news
    All {
        /// Keywords
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Reads the top headlines of a category
    Top {
        /// Category
        #[arg(default_value = "general")]
        category: String,
    },
    /// Reads the top headlines of a country
    Country {
        /// ISO 3166-1 alpha-2 code
        iso: String,
    },
    /// Configuration commands
    Config(ConfigArgs),
}

/// Opens the pager on a query
async fn read(query: FeedQuery) -> Result<(), Error> {
    let config = Config::load()?;
    let query = query.page_size(config.page_size);
    query.validate()?;

    let ctl = FeedController::new(config.api_client(), query);
    pager::run(ctl).await
}

/// Configuration commands
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ConfigArgs {
    #[command(subcommand)]
    commands: ConfigCommands,
}

/// Configuration commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Shows the CLI configuration
    Show,
    /// Updates the CLI configuration
    Update,
    /// Resets the CLI configuration
    Reset,
}

/// Runs the config commands
fn run_config_cmd(args: ConfigArgs) -> Result<(), Error> {
    let mut config = Config::load()?;
    match args.commands {
        ConfigCommands::Show => {
            println!("Configuration:");
            println!("  - API url: {}", config.api_url);
            println!("  - page size: {}", config.page_size);
            println!("  - file: {}", Config::default_path()?.display());
        }
        ConfigCommands::Update => {
            info("Update the configuration values");
            config.api_url = Text::new("API url:")
                .with_initial_value(&config.api_url)
                .prompt()?;
            let page_size = CustomType::<u32>::new("Page size:")
                .with_default(config.page_size)
                .with_error_message("enter a number")
                .prompt()?;
            if page_size == 0 || page_size > MAX_PAGE_SIZE {
                bail!("page size must be between 1 and {MAX_PAGE_SIZE}");
            }
            config.page_size = page_size;
            let path = config.save()?;
            success(&format!("configuration saved to {}", path.display()));
        }
        ConfigCommands::Reset => {
            if Config::destroy()? {
                success("configuration reset to the defaults");
            } else {
                warn("configuration was not set");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        MainArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_commands() {
        let args = MainArgs::try_parse_from(["headline", "top"]).unwrap();
        assert!(matches!(args.commands, MainCommands::Top { category } if category == "general"));

        let args = MainArgs::try_parse_from(["headline", "all", "--query", "rust"]).unwrap();
        assert!(
            matches!(args.commands, MainCommands::All { query: Some(q) } if q == "rust")
        );

        let args = MainArgs::try_parse_from(["headline", "country", "gb"]).unwrap();
        assert!(matches!(args.commands, MainCommands::Country { iso } if iso == "gb"));

        assert!(MainArgs::try_parse_from(["headline", "country"]).is_err());
    }
}
