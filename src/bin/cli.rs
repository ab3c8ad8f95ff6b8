// src/bin/cli.rs

//! ICT Hub CLI
//!
//! Browse departments, services and news, and ask the FAQ assistant.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use futures::future::join_all;
use tokio::io::{AsyncBufReadExt, BufReader};

use ict_hub::{
    catalog::{Catalog, Entry},
    chat::{ChatSession, Responder, responder_from},
    config,
    error::{AppError, Result},
    models::{ChatConfig, Department, GuideProgress, ResultKind, Selection, Service},
    query::ServiceFilter,
    state::HubState,
};

/// ICT Hub - Faculty of ICT student help desk
#[derive(Parser, Debug)]
#[command(
    name = "ict-hub",
    version,
    about = "Department, service and news directory with an FAQ assistant"
)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Answer chat messages immediately
    #[arg(long)]
    no_delay: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List academic departments
    Departments,

    /// Show one department with its programs and contacts
    Department { id: String },

    /// List student services
    Services {
        /// Audience filter: senior, newcomer or all
        #[arg(short, long, default_value = "all")]
        filter: ServiceFilter,
    },

    /// Show one service with its steps
    Service { id: String },

    /// Show the news feed
    News {
        /// Only urgent items
        #[arg(long)]
        urgent: bool,
    },

    /// Search department names and service titles
    Search { query: String },

    /// Ask the assistant one or more questions
    Ask {
        #[arg(required = true)]
        messages: Vec<String>,
    },

    /// Chat with the assistant interactively
    Chat,

    /// Show the user guide
    Guide {
        /// Expand this step
        #[arg(long)]
        step: Option<u32>,

        /// Steps already completed
        #[arg(long, value_delimiter = ',')]
        done: Vec<u32>,
    },

    /// Validate the config and catalog
    Validate,
}

/// Initialize logging from the configured level, raised by `--verbose`.
fn init_logging(verbose: bool, configured: &str) {
    let level = if verbose { "debug" } else { configured };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = config::load_config(&cli.config)?;
    init_logging(cli.verbose, &config.logging.level);
    let catalog = config::load_catalog(&config).await?;
    if cli.no_delay {
        config.chat.simulate_delay = false;
    }
    let responder = responder_from(&config.chat);
    let mut state = HubState::new();

    match cli.command {
        Command::Departments => {
            for department in catalog.list_departments() {
                println!("{:<12} {}", department.id, department.name);
            }
        }

        Command::Department { id } => {
            state.select(Selection::department(id.clone()));
            match state.selected(&catalog) {
                Some(Entry::Department(department)) => print_department(&catalog, department),
                _ => return Err(AppError::not_found(ResultKind::Department, id)),
            }
        }

        Command::Services { filter } => {
            state.set_filter(filter);
            for service in state.visible_services(&catalog) {
                println!("{:<36} {}", service.id, service.title);
                println!("{:<36} {}", "", service.category);
            }
        }

        Command::Service { id } => {
            state.select(Selection::service(id.clone()));
            match state.selected(&catalog) {
                Some(Entry::Service(service)) => print_service(service),
                _ => return Err(AppError::not_found(ResultKind::Service, id)),
            }
        }

        Command::News { urgent } => {
            let items = if urgent {
                catalog.urgent_news()
            } else {
                catalog.list_news().iter().collect()
            };
            for item in items {
                let flag = if item.is_urgent { " [URGENT]" } else { "" };
                println!("{}{}", item.title, flag);
                println!(
                    "  {} | {} | {}",
                    item.category,
                    item.display_date(),
                    item.priority.label()
                );
                println!("  {}", item.summary);
                if let Some(download) = &item.download {
                    println!("  {}: {}", download.label(), download.url);
                }
                println!();
            }
        }

        Command::Search { query } => {
            state.set_query(query);
            let results = state.search_results(&catalog);
            if results.is_empty() {
                println!("No results found.");
            }
            for result in results {
                println!("{:<10} {:<36} {}", result.kind.to_string(), result.id, result.name);
            }
        }

        Command::Ask { messages } => ask(&config.chat, &responder, &messages).await,

        Command::Chat => chat(&config.chat, &responder).await?,

        Command::Guide { step, done } => {
            let mut progress = GuideProgress::new();
            for number in done {
                progress.mark_complete(number);
            }
            if let Some(number) = step {
                progress.toggle(number);
            }
            print_guide(&catalog, &progress);
        }

        Command::Validate => {
            catalog.validate()?;
            log::info!("Config and catalog OK");
            println!(
                "OK: {} departments, {} services, {} news items, {} chat rules",
                catalog.list_departments().len(),
                catalog.list_services().len(),
                catalog.list_news().len(),
                responder.rules().len()
            );
        }
    }

    Ok(())
}

fn print_department(catalog: &Catalog, department: &Department) {
    println!("{}", department.name);
    println!("{}", department.description);
    println!();
    println!("Programs:");
    for program in catalog.programs_for(department) {
        println!(
            "  {:<8} {} ({})",
            program.code, program.description, program.duration
        );
    }
    let contacts = department.contacts();
    if !contacts.is_empty() {
        println!();
        println!("Contact:");
        for (label, value) in contacts {
            println!("  {label}: {value}");
        }
    }
}

fn print_service(service: &Service) {
    println!("{}", service.title);
    println!("{}", service.category);
    println!();
    println!("{}", service.description);
    println!("{}", service.details);
    if !service.steps.is_empty() {
        println!();
        for (index, step) in service.steps.iter().enumerate() {
            println!("  {}. {}", index + 1, step);
        }
    }
    if let Some(link) = &service.status_link {
        println!();
        println!("Check status: {link}");
    }
}

fn print_guide(catalog: &Catalog, progress: &GuideProgress) {
    for step in catalog.guide() {
        let mark = if progress.is_complete(step.number) { "x" } else { " " };
        println!("[{}] {}. {}", mark, step.number, step.title);
        if progress.active() == Some(step.number) {
            println!("    {}", step.description);
            for line in &step.content {
                println!("    - {line}");
            }
        }
    }
}

/// Answer every message; the replies wait out their delays concurrently.
async fn ask(config: &ChatConfig, responder: &Responder, messages: &[String]) {
    let mut session = ChatSession::new(config.clone());
    let pending: Vec<_> = messages
        .iter()
        .filter_map(|message| session.submit(responder, message))
        .collect();
    if session.is_typing() {
        eprintln!("Bot is typing...");
    }

    let replies = join_all(pending.into_iter().map(|reply| reply.ready())).await;
    for reply in replies {
        session.deliver(reply);
    }
    for turn in session.history() {
        println!("{turn}");
    }
}

/// Read messages from stdin until EOF, `exit` or `quit`.
async fn chat(config: &ChatConfig, responder: &Responder) -> Result<()> {
    let mut session = ChatSession::new(config.clone());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Ask about exclusions, departments, NSFAS, etc. Type 'exit' to leave.");
    loop {
        print!("You: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let message = line.trim();
        if matches!(message, "exit" | "quit") {
            break;
        }
        let Some(pending) = session.submit(responder, message) else {
            continue;
        };
        if session.is_typing() {
            eprintln!("Bot is typing...");
        }
        let reply = pending.ready().await;
        println!("Bot: {}", reply.text);
        session.deliver(reply);
    }

    session.clear();
    Ok(())
}
