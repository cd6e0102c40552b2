use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use settings::AppConfig;
use dictionary::{Dictionary, WordSource};
use home::HomeScreen;
use lookup::{LookupState, ResultsScreen};
use render::render;
use route::Route;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utilities::{input, suggest};

mod home;
mod lookup;
mod render;
mod route;
mod settings;
mod utilities;

const COMMANDS: &[&str] = &["define", "find", "open", "help", "quit", "exit"];

/// Look up English words in the free dictionary api.
#[derive(Debug, Parser)]
#[command(name = "define", version)]
struct Cli {
    /// Word to look up. Starts an interactive session when omitted.
    words: Vec<String>,

    /// Base url of the dictionary api.
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()
        .context("failed to load configuration")?
        .merge(AppConfig {
            api_url: cli.api_url,
            timeout_secs: cli.timeout_secs,
        });
    let options = config.dictionary_options();
    info!(api_url = %options.api_url, timeout = ?options.timeout, "configured dictionary");

    let dict = Dictionary::with_options(options)?;
    let mut home = HomeScreen::new();
    let mut results = ResultsScreen::new(dict);

    if !cli.words.is_empty() {
        home.set_query(&cli.words.join(" "));
        let state = show(&mut results, &home.submit()).await;
        let code = if state.is_failure() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
        return Ok(code);
    }

    println!("Dictionary. Type `define <word>` to look a word up, `help` for more.");
    loop {
        let line = input(">> ")?;
        if line.is_empty() {
            // end of input
            break;
        }
        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map(|(command, rest)| (command, rest.trim_start()))
            .unwrap_or((line, ""));
        match command {
            "" => {}
            "exit" | "leave" | "quit" | "e" | "q" | "l" => {
                break;
            }
            "define" | "find" => {
                home.set_query(rest);
                show(&mut results, &home.submit()).await;
            }
            "open" => match Route::parse(rest) {
                Ok(Route::Home) => {
                    println!("Search: {:?}", home.query());
                }
                Ok(route) => {
                    show(&mut results, &route).await;
                }
                Err(error) => {
                    println!("{error}");
                }
            },
            "help" => print_help(),
            other => match suggest(other, COMMANDS) {
                Some(suggestion) => {
                    println!("Unknown command {other}. Did you mean {suggestion}?")
                }
                None => println!("Unknown command {other}."),
            },
        }
    }
    Ok(ExitCode::SUCCESS)
}

async fn show<'a, S: WordSource>(
    results: &'a mut ResultsScreen<S>,
    route: &Route,
) -> &'a LookupState {
    debug!(%route, "navigating");
    if let Some(ticket) = results.navigate(route) {
        print!("{}", render(results.state()));
        results.load(ticket).await;
    }
    print!("{}", render(results.state()));
    results.state()
}

fn print_help() {
    println!("    define <word>    look up a word (alias: find)");
    println!("    open <route>     open a route such as /define?word=cat");
    println!("    help             show this message");
    println!("    quit             leave (aliases: exit, q)");
}
