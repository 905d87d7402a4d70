// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use indexmap::IndexMap;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notionkit::{
    Block, BlockId, Command, CommandLineInput, DatabaseId, NotionClient, Page, PageId,
    PropertyName, PropertyValue, Transport, UserId,
};
use serde::Serialize;
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notionkit.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    // stdout carries the JSON result, so diagnostics go to stderr.
    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Runs one subcommand against the client and prints its result.
fn run<T: Transport>(client: &NotionClient<T>, command: Command) -> Result<()> {
    match command {
        Command::GetDatabase { id } => {
            let database = client.get_database(&DatabaseId::parse(&id)?)?;
            print_json(&database)
        }
        Command::ListDatabases => {
            let databases = client.list_databases()?;
            log::info!("Listed {} databases", databases.len());
            print_json(&databases)
        }
        Command::GetPage { id } => print_json(&client.get_page(&PageId::parse(&id)?)?),
        Command::GetBlock { id } => print_json(&client.get_block(&BlockId::parse(&id)?)?),
        Command::ListChildren { id } => {
            let children = client.list_block_children(&BlockId::parse(&id)?)?;
            log::info!("Listed {} child blocks of {}", children.len(), id);
            print_json(&children)
        }
        Command::GetUser { id } => print_json(&client.get_user(&UserId::parse(&id)?)?),
        Command::ListUsers => print_json(&client.list_users()?),
        Command::UpdatePage { id, properties } => {
            let properties: IndexMap<PropertyName, PropertyValue> =
                serde_json::from_str(&properties).context("properties must be a JSON object of property values")?;
            let page = Page {
                properties,
                ..Page::default()
            };
            print_json(&client.update_page(&PageId::parse(&id)?, &page)?)
        }
        Command::CreatePage { page } => {
            let page: Page =
                serde_json::from_str(&page).context("page must be a JSON page body")?;
            print_json(&client.create_page(&page)?)
        }
        Command::AppendChildren { id, children } => {
            let children: Vec<Block> =
                serde_json::from_str(&children).context("children must be a JSON array of blocks")?;
            print_json(&client.append_block_children(&BlockId::parse(&id)?, &children)?)
        }
    }
}

fn main() -> Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = cli
        .client_config()
        .context("failed to resolve client configuration")?;
    let client = NotionClient::with_default_transport(config)?;

    run(&client, cli.command)
}
