mod cli;
mod command;
mod helper;
mod logging;
mod render;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use learnos_application::{DesktopShell, EventChannel, EventSink};
use learnos_core::backend::PersonalizationBackend;
use learnos_core::session::SessionIdentity;
use learnos_core::suggestion::SuggestionStore;
use learnos_infrastructure::{ConfigService, HttpPersonalizationBackend};

use crate::cli::Cli;
use crate::command::Command;
use crate::helper::ShellHelper;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging();

    let config = ConfigService::new(cli.overrides())
        .backend_config()
        .context("failed to resolve backend configuration")?;
    tracing::info!(base_url = %config.base(), timeout_secs = config.timeout_secs, "starting LearnOS");

    let backend: Arc<dyn PersonalizationBackend> = Arc::new(
        HttpPersonalizationBackend::new(config).context("failed to build HTTP client")?,
    );
    let suggestions = SuggestionStore::new();
    let session = Arc::new(SessionIdentity::new());
    let sink: Arc<dyn EventSink> = Arc::new(EventChannel::new(
        session.clone(),
        backend,
        suggestions.clone(),
    ));
    let mut shell = DesktopShell::new(session, sink, suggestions);

    let mut rl: Editor<ShellHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ShellHelper::new()));

    println!("{}", render::header());
    println!("{}", render::desktop(&shell.dock().await));
    println!();
    println!("{}", "Type /help for commands, or 'quit' to leave.".bright_black());

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let command = match command::parse(trimmed) {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{}", e.to_string().red());
                        continue;
                    }
                };
                if command == Command::Quit {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                if let Err(e) = execute(&mut shell, command).await {
                    eprintln!("{}", e.to_string().red());
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}

async fn execute(shell: &mut DesktopShell, command: Command) -> learnos_core::error::Result<()> {
    match command {
        Command::Dock => println!("{}", render::dock_lines(&shell.dock().await)),
        Command::Hint(selector) => {
            let dock = shell.dock().await;
            match dock.item(&selector) {
                Some(item) => println!("{}", render::hint(item)),
                None => println!("{}", "No such dock item.".bright_black()),
            }
        }
        Command::Open(selector) => {
            shell.launch(&selector).await?;
            show(shell).await;
        }
        Command::Close => match shell.close() {
            Some(app) => {
                println!("{}", format!("Closed {}.", app.title).bright_black());
                show(shell).await;
            }
            None => println!("{}", "Nothing is open.".bright_black()),
        },
        Command::Sandbox(action) => {
            let sent = shell.interact(action)?;
            show(shell).await;
            if let Some(kind) = sent {
                println!("{}", format!("↳ {kind} reported").bright_black());
            }
        }
        Command::Show => show(shell).await,
        Command::Session => println!("session {}", shell.session_id()),
        Command::Help => println!("{}", render::help()),
        Command::Quit => {}
    }
    Ok(())
}

async fn show(shell: &DesktopShell) {
    match shell.window() {
        Some(view) => println!("{}", render::window(&view)),
        None => println!("{}", render::desktop(&shell.dock().await)),
    }
}
