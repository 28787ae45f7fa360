//! Fabula CLI
//!
//! Presentation shell over `fabula-core`: an interactive prompt loop by
//! default, or a one-shot question via `fabula ask`.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use url::Url;

use fabula_core::{App, Config, QueryState};

#[derive(Parser)]
#[command(name = "fabula")]
#[command(about = "Ask a question, get a story", long_about = None)]
struct Cli {
    /// Story service endpoint
    #[arg(long, env = "FABULA_ENDPOINT")]
    endpoint: Option<Url>,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, env = "FABULA_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Per-request timeout in seconds (0 disables the timeout)
    #[arg(long, default_value = "30")]
    timeout: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a single question and print the story
    Ask {
        /// The question to ask
        question: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fabula_core::init_logging();

    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(Config::data_dir);
    let endpoint = match cli.endpoint {
        Some(endpoint) => endpoint,
        None => Url::parse(fabula_core::DEFAULT_ENDPOINT)?,
    };

    let mut config = Config::new(data_dir, endpoint);
    config.request_timeout_secs = (cli.timeout > 0).then_some(cli.timeout);

    let app = App::new(config)?;
    app.initialize()?;

    match cli.command {
        Some(Commands::Ask { question }) => {
            let question = question.join(" ");
            ask_once(&app, &question).await;
        }
        None => {
            run_prompt_loop(&app).await?;
        }
    }

    Ok(())
}

async fn ask_once(app: &App, question: &str) {
    match app.submit(question).await {
        Ok(view) => {
            if let Some(story) = view.story {
                println!("{story}");
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
        }
    }
}

async fn run_prompt_loop(app: &App) -> anyhow::Result<()> {
    println!("Ask anything; `quit` to leave.");

    let stdin = std::io::stdin();
    loop {
        print!("? ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if question == "quit" || question == "exit" {
            break;
        }

        ask_once(app, question).await;

        let view = app.view();
        if view.state == QueryState::Failed {
            tracing::debug!(state = %view.state, "Last submission failed");
        }
    }

    Ok(())
}
