mod blocks;
mod cli;
mod display;
mod endpoint;
mod http;

use anyhow::Result;
use clap::Parser;
use dialoguer::Input;
use tracing_subscriber::EnvFilter;

use blocks::NewBlock;
use cli::{Cli, Command};
use display::{format_block, format_body, format_effective_url};
use http::ApiClient;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let client = http::install_shared_client(cli.settings.client_config())?;

    match cli.command {
        Command::Resolve => cmd_resolve(client),
        Command::Create {
            question,
            answer,
            tags,
        } => cmd_create(client, question, answer, &tags).await?,
        Command::Get { path } => cmd_get(client, &path).await?,
    }

    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_resolve(client: &ApiClient) {
    println!("Base URL: {}", client.base_url());
    println!("{}", format_effective_url(&client.url("")));
    println!("Timeout: {} ms", client.timeout().as_millis());
    println!("Credentials: {}", client.with_credentials());
}

async fn cmd_create(
    client: &ApiClient,
    question_arg: Option<String>,
    answer_arg: Option<String>,
    tags: &str,
) -> Result<()> {
    let question = match question_arg {
        Some(q) => q,
        None => Input::new().with_prompt("Question").interact_text()?,
    };
    let answer = match answer_arg {
        Some(a) => a,
        None => Input::new().with_prompt("Answer").interact_text()?,
    };

    let block = NewBlock {
        question,
        answer,
        tags: blocks::normalize_tags(tags),
    };
    let created = blocks::create_block(client, &block).await?;

    for line in format_block(&created) {
        println!("{}", line);
    }
    Ok(())
}

async fn cmd_get(client: &ApiClient, path: &str) -> Result<()> {
    let body = blocks::fetch(client, path).await?;
    println!("{}", format_body(&body));
    Ok(())
}
