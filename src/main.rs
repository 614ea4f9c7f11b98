use atelier::app::send_message;
use atelier::artifacts::SidebarView;
use atelier::cli::{parse_args, CliCommand, CliOptions};
use atelier::client::ChatClient;
use atelier::config::Config;
use atelier::extract::{extract_segments, Segment};
use atelier::session::ChatSession;
use atelier::stream::StreamEvent;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::io::Write;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn build_client(options: &CliOptions) -> ChatClient {
    let mut config = Config::from_env();
    if let Some(base_url) = &options.base_url {
        config = config.with_base_url(base_url.clone());
    }
    ChatClient::new(&config)
}

/// Stream one prompt to stdout, then surface extracted artifacts and the
/// sidebar summary.
async fn run_chat(client: &ChatClient, prompt: &str) -> Result<()> {
    let mut session = ChatSession::new();

    send_message(client, &mut session, prompt, |event, _| {
        if let StreamEvent::Chunk { content } = event {
            print!("{}", content);
            let _ = std::io::stdout().flush();
        }
    })
    .await;

    println!();

    if let Some(error) = session.error() {
        return Err(eyre!("turn failed: {}", error));
    }

    // Pull artifacts out of the final assistant text and install them
    let final_text = session
        .messages()
        .last()
        .map(|msg| msg.content.clone())
        .unwrap_or_default();

    for segment in extract_segments(&final_text) {
        if let Segment::Artifact(code_artifact) = segment {
            session.sidebar_mut().add_artifact(code_artifact.into_artifact());
        }
    }

    let sidebar = session.sidebar();
    if sidebar.is_open() {
        println!();
        if let Some(artifact) = sidebar.current_artifact() {
            println!("artifact: {} - {}", artifact.title, artifact.description);
        }
        for file in sidebar.files() {
            println!("  {} ({})", file.filename, file.language);
        }
        if sidebar.view() == SidebarView::Preview {
            println!("  [preview]");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let (command, options) = parse_args(std::env::args());

    match command {
        CliCommand::Version => {
            println!("atelier {}", VERSION);
        }
        CliCommand::Health => {
            let client = build_client(&options);
            let healthy = client.health().await?;
            println!("{}", if healthy { "ok" } else { "unhealthy" });
            if !healthy {
                std::process::exit(1);
            }
        }
        CliCommand::Chat { prompt } => {
            let client = build_client(&options);
            run_chat(&client, &prompt).await?;
        }
        CliCommand::Usage => {
            eprintln!("usage: atelier [--base-url URL] [--health | --version] <prompt...>");
            std::process::exit(2);
        }
    }

    Ok(())
}
