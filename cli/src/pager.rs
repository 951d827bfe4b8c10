//! Paged view

use std::fmt;

use anyhow::Result;
use colored::Colorize;
use headline_client::{Article, Client, FeedController, FeedMode, FeedState, FeedView};
use inquire::{
    error::{CustomUserError, InquireError},
    validator::Validation,
    Select, Text,
};

use crate::util::{error, info};

/// Categories known to the provider
pub const CATEGORIES: [&str; 7] = [
    "business",
    "entertainment",
    "general",
    "health",
    "science",
    "sports",
    "technology",
];

/// Pager action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Prev,
    /// Keyword search
    Search,
    /// Category headlines
    Category,
    /// Country headlines
    Country,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Next => "Next →",
            Action::Prev => "← Prev",
            Action::Search => "Search…",
            Action::Category => "Category…",
            Action::Country => "Country…",
            Action::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Lists the actions available on a view
///
/// Disabled navigation is not offered.
pub fn actions(view: &FeedView) -> Vec<Action> {
    let mut actions = Vec::with_capacity(6);
    if view.has_next() {
        actions.push(Action::Next);
    }
    if view.has_prev() {
        actions.push(Action::Prev);
    }
    actions.extend([Action::Search, Action::Category, Action::Country, Action::Quit]);
    actions
}

/// Prints a view
pub fn render(view: &FeedView) {
    println!("{}", view.query.mode.to_string().bold());
    println!();
    match &view.state {
        FeedState::Idle => {}
        FeedState::Loading => info("Loading…"),
        FeedState::Loaded(page) if page.articles.is_empty() => println!("  no articles"),
        FeedState::Loaded(page) => page.articles.iter().for_each(render_article),
        FeedState::Errored(message) => error(message),
    }
    println!();
    println!("  {}", view.page_indicator().dimmed());
    println!();
}

fn render_article(article: &Article) {
    println!("- {}", article.title.bold());
    println!(
        "  {} {}",
        article.source_name().cyan(),
        article.published_at.dimmed()
    );
    if let Some(description) = &article.description {
        println!("  {description}");
    }
    println!("  {}", article.url.underline());
}

/// Checks an ISO 3166-1 alpha-2 code
pub fn is_country_code(iso: &str) -> bool {
    iso.len() == 2 && iso.chars().all(|c| c.is_ascii_alphabetic())
}

fn validate_country(iso: &str) -> Result<Validation, CustomUserError> {
    if is_country_code(iso.trim()) {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid("expected two letters".into()))
    }
}

/// Treats a cancelled prompt as going back
fn or_back<T>(res: Result<T, InquireError>) -> Result<Option<T>> {
    match res {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Runs the pager until the reader quits
pub async fn run(ctl: FeedController<Client>) -> Result<()> {
    info("Loading…");
    ctl.load().await;

    loop {
        let view = ctl.view();
        render(&view);

        let Some(action) = or_back(Select::new("Navigate:", actions(&view)).prompt())? else {
            return Ok(());
        };
        let mode = match action {
            Action::Next => {
                info("Loading…");
                ctl.next().await;
                continue;
            }
            Action::Prev => {
                info("Loading…");
                ctl.prev().await;
                continue;
            }
            Action::Search => or_back(Text::new("Search:").prompt())?
                .map(|query| FeedMode::AllNews { query }),
            Action::Category => or_back(Select::new("Category:", CATEGORIES.to_vec()).prompt())?
                .map(|category| FeedMode::TopHeadlines {
                    category: category.to_string(),
                }),
            Action::Country => or_back(
                Text::new("Country code:")
                    .with_help_message("two letters, e.g. us")
                    .with_validator(validate_country)
                    .prompt(),
            )?
            .map(|iso| FeedMode::CountryNews {
                iso: iso.trim().to_ascii_lowercase(),
            }),
            Action::Quit => return Ok(()),
        };

        if let Some(mode) = mode {
            info("Loading…");
            ctl.select(mode).await;
        }
    }
}
