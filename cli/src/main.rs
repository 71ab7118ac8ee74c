//! AI Talk Gallery terminal client
//!
//! Renders the gallery feed to stdout and reads commands from stdin.
//! Configuration comes from environment variables (see `Config::from_env`).

mod command;

use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use command::{help_text, parse_command, Command};
use talkgallery_client::view::{render_page, PageView};
use talkgallery_client::{Config, FeedApi, FeedController, HttpFeedApi, Intent};

const DEFAULT_LOG_FILTER: &str = "info,talkgallery_client=debug";

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the rendered page
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    tracing::info!("Starting gallery client against {}", config.api_base_url);

    let api = Arc::new(HttpFeedApi::new(&config)?);
    let mut controller = FeedController::new(api, config.viewer.clone());

    controller.dispatch(Intent::Start);
    controller.settle().await;
    println!("{}", render_page(controller.page()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}\nType `help` for commands.", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", help_text());
                continue;
            }
            Command::Tags => {
                print_tags(controller.page());
                continue;
            }
            _ => {}
        }

        if let Err(e) = run_command(&mut controller, &command).await {
            println!("{}", e);
            continue;
        }
        println!("{}", render_page(controller.page()));
    }

    tracing::info!("Bye");
    Ok(())
}

async fn run_command<A>(
    controller: &mut FeedController<A>,
    command: &Command,
) -> Result<(), command::ParseError>
where
    A: FeedApi + 'static,
{
    for intent in command.intents(controller.page())? {
        controller.dispatch(intent);
    }
    controller.settle().await;
    Ok(())
}

fn print_tags(page: &PageView) {
    if page.popular_tags.is_empty() {
        println!("No popular tags yet.");
        return;
    }
    for chip in &page.popular_tags {
        println!("{}", chip.text());
    }
}
