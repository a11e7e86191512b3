// CLI module - command-line argument parsing and handlers
//
// - (no subcommand): interactive TUI, optionally pre-filled with --query
// - search: one-shot headless search, prints a table or JSON
// - config: show / locate / reset the config file

use crate::config::{Config, VERSION};
use crate::search::{RepoSearch, ResultItem, SearchClient, SearchOutcome};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// reposeek - search GitHub repositories as you type
#[derive(Parser)]
#[command(name = "reposeek")]
#[command(version = VERSION)]
#[command(about = "Search-as-you-type repository browser", long_about = None)]
pub struct Cli {
    /// Pre-fill the search box (still debounced like typed text)
    #[arg(short, long)]
    pub query: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one search and print the results
    Search {
        /// Search query
        query: String,

        /// Page to fetch (1-based, 10 results per page)
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Print the items as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// search
// ─────────────────────────────────────────────────────────────────────────────

/// Run a headless search. Returns Ok(false) when the API reported a failure
/// or answered with something unrecognizable.
pub async fn handle_search(config: &Config, query: &str, page: u32, json: bool) -> Result<bool> {
    check_query(query)?;

    let client = SearchClient::new(&config.search.api_url)?;
    let outcome = client.search(query, page).await;

    let mut stdout = std::io::stdout().lock();
    match outcome {
        SearchOutcome::Items(items) => {
            if json {
                let body =
                    serde_json::to_string_pretty(&items).context("Failed to serialize results")?;
                writeln!(stdout, "{}", body)?;
            } else {
                write_table(&mut stdout, &items)?;
            }
            Ok(true)
        }
        SearchOutcome::Failed(message) => {
            eprintln!("Error: {}", message);
            Ok(false)
        }
        SearchOutcome::Unrecognized => {
            eprintln!("Error: unrecognized response from {}", config.search.api_url);
            Ok(false)
        }
    }
}

/// An empty query means "no search"; anything else, whitespace included, is sent
fn check_query(query: &str) -> Result<()> {
    if query.is_empty() {
        bail!("Search query must not be empty");
    }
    Ok(())
}

/// One line per repository: name, stars, forks, URL
fn write_table(out: &mut impl Write, items: &[ResultItem]) -> Result<()> {
    if items.is_empty() {
        writeln!(out, "No repositories found")?;
        return Ok(());
    }

    let name_width = items
        .iter()
        .map(|item| item.full_name.chars().count())
        .max()
        .unwrap_or(0)
        .min(50);

    for item in items {
        writeln!(
            out,
            "{:<width$}  ★ {:>7}  ⑂ {:>6}  {}",
            item.full_name,
            item.watchers,
            item.forks,
            item.html_url,
            width = name_width
        )?;
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// config
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_config(show: bool, path: bool, reset: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show()
    } else if reset {
        handle_config_reset()
    } else {
        println!("Usage: reposeek config [--show|--path|--reset]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
        println!("  --reset   Reset config file to defaults");
        Ok(())
    }
}

fn handle_config_path() -> Result<()> {
    let Some(path) = Config::config_path() else {
        bail!("Could not determine config path");
    };
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let Some(path) = Config::config_path() else {
        bail!("Could not determine config path");
    };

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, watchers: u64) -> ResultItem {
        ResultItem {
            id: watchers,
            full_name: name.to_string(),
            html_url: format!("https://github.com/{}", name),
            watchers,
            forks: 3,
        }
    }

    #[test]
    fn table_aligns_names() {
        let mut out = Vec::new();
        write_table(&mut out, &[item("a/b", 12), item("facebook/react", 5)]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("a/b             ★      12"));
        assert!(lines[1].ends_with("https://github.com/facebook/react"));
    }

    #[test]
    fn empty_table_says_so() {
        let mut out = Vec::new();
        write_table(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No repositories found\n");
    }

    #[test]
    fn only_the_empty_query_is_rejected() {
        assert!(check_query("").is_err());
        assert!(check_query(" ").is_ok());
        assert!(check_query("react").is_ok());
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["reposeek", "search", "react", "--page", "2", "--json"])
            .unwrap();
        match cli.command {
            Some(Commands::Search { query, page, json }) => {
                assert_eq!(query, "react");
                assert_eq!(page, 2);
                assert!(json);
            }
            _ => panic!("expected search subcommand"),
        }

        let cli = Cli::try_parse_from(["reposeek", "--query", "vue"]).unwrap();
        assert_eq!(cli.query.as_deref(), Some("vue"));
        assert!(cli.command.is_none());

        assert!(Cli::try_parse_from(["reposeek", "search", "react", "--page", "0"]).is_err());
    }
}
