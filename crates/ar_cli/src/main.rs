use anyhow::Context;
use ar_core::InputKind;
use ar_session::view::{format_message, ChatView, HistoryView, ResultView, WordDetailView};
use ar_session::{Notification, NotificationLevel, SessionController};
use ar_storage::StaticLexicon;
use clap::Parser;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

mod logging;

#[derive(Debug, Clone, Copy, PartialEq)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    /// Accepts `1500ms`, `2s`, `1m`, `1h` and combinations such as `1m30s`.
    /// A bare number is read as milliseconds.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_millis = 0u64;
        let mut number = String::new();
        let mut unit = String::new();
        let mut saw_number = false;

        let mut flush = |number: &mut String, unit: &mut String| -> std::result::Result<(), String> {
            let value = number
                .parse::<u64>()
                .map_err(|_| "Invalid number in duration".to_string())?;
            let factor = match unit.as_str() {
                "" | "ms" => 1,
                "s" => 1_000,
                "m" => 60_000,
                "h" => 3_600_000,
                other => return Err(format!("Invalid duration unit: {}", other)),
            };
            total_millis = value
                .checked_mul(factor)
                .and_then(|millis| total_millis.checked_add(millis))
                .ok_or_else(|| "Duration is too large".to_string())?;
            number.clear();
            unit.clear();
            Ok(())
        };

        for c in s.trim().chars() {
            if c.is_ascii_digit() {
                if !unit.is_empty() {
                    flush(&mut number, &mut unit)?;
                }
                number.push(c);
                saw_number = true;
            } else if c.is_ascii_alphabetic() {
                if number.is_empty() {
                    return Err(format!("Unit without a number in duration: {}", s));
                }
                unit.push(c);
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }
        if !number.is_empty() {
            flush(&mut number, &mut unit)?;
        }

        if !saw_number {
            return Err("Duration must include a number".to_string());
        }
        Ok(HumanDuration(Duration::from_millis(total_millis)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "AI article reader", long_about = None)]
pub struct Cli {
    #[arg(long, default_value = "mock", help = "Model to use for analysis. Available models: mock (default)")]
    model: String,
    #[arg(long, default_value = "memory", help = "History storage backend. Available backends: memory (default)")]
    storage: String,
    /// Simulated analysis latency (e.g. 2s, 1500ms)
    #[arg(long, default_value = "2s")]
    analysis_delay: HumanDuration,
    /// Simulated chat reply latency (e.g. 1500ms)
    #[arg(long, default_value = "1500ms")]
    chat_delay: HumanDuration,
    /// Seed for the chat reply picker
    #[arg(long)]
    seed: Option<u64>,
    /// Start with an empty history instead of the sample entries
    #[arg(long)]
    no_sample_history: bool,
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the JSON API
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
    /// Analyze a URL or a pasted text
    Analyze {
        content: String,
        /// Input kind (url or text). Detected from the content when omitted.
        #[arg(long)]
        kind: Option<InputKind>,
        /// Print the reconstructed full text as well
        #[arg(long)]
        full_text: bool,
    },
    /// Show the dictionary entry of a word
    Lookup { word: String },
    /// Analyze an article and ask questions about it
    Chat {
        content: String,
        #[arg(long)]
        kind: Option<InputKind>,
        /// Questions to ask, in order
        #[arg(required = true)]
        questions: Vec<String>,
    },
    /// List, reopen or delete analysis history
    History {
        #[arg(long, conflicts_with = "delete")]
        open: Option<String>,
        #[arg(long)]
        delete: Option<String>,
    },
    /// List trending keyword categories, or pick one
    Keywords {
        #[arg(long)]
        pick: Option<String>,
    },
}

fn detect_kind(content: &str) -> InputKind {
    match url::Url::parse(content.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => InputKind::Url,
        _ => InputKind::Text,
    }
}

fn report(notifications: Vec<Notification>) {
    for notification in notifications {
        match notification.level {
            NotificationLevel::Success => info!("✅ {}", notification.message),
            NotificationLevel::Error => warn!("❌ {}", notification.message),
        }
    }
}

async fn build_controller(cli: &Cli) -> anyhow::Result<SessionController> {
    let config = ar_inference::Config {
        model_name: cli.model.clone(),
        analysis_delay: cli.analysis_delay.0,
        chat_delay: cli.chat_delay.0,
        seed: cli.seed,
    };
    let model = ar_inference::create_model(Some(config))?;

    let history = ar_storage::create_storage(&cli.storage, !cli.no_sample_history).await?;
    info!("💾 History storage initialized (using {})", cli.storage);

    Ok(SessionController::new(model, history, Arc::new(StaticLexicon::new())))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let mut session = build_controller(&cli).await?;

    match cli.command {
        Commands::Serve { addr } => {
            ar_web::serve(addr, ar_web::AppState::new(session)).await?;
        }
        Commands::Analyze {
            content,
            kind,
            full_text,
        } => {
            let kind = kind.unwrap_or_else(|| detect_kind(&content));
            info!("📰 Analyzing {} input", kind);
            let outcome = session.analyze(&content, kind).await;
            report(session.drain_notifications());
            let analysis = outcome?;
            println!("{}", ResultView::from_analysis(&analysis));
            if full_text {
                println!("\n{}", analysis.full_text);
            }
        }
        Commands::Lookup { word } => {
            let info = session.lookup_word(&word)?;
            println!("{}", WordDetailView::new(info));
        }
        Commands::Chat {
            content,
            kind,
            questions,
        } => {
            let kind = kind.unwrap_or_else(|| detect_kind(&content));
            session
                .analyze(&content, kind)
                .await
                .context("could not analyze the article to chat about")?;
            for question in &questions {
                if let Err(e) = session.ask(question).await {
                    warn!("⚠️ Skipping question {:?}: {}", question, e);
                }
            }
            report(session.drain_notifications());
            if let Some(chat) = ChatView::from_controller(&session) {
                println!("💬 {}", chat.article_title);
                for message in &chat.messages {
                    println!("{}", format_message(message));
                }
            }
        }
        Commands::History { open, delete } => {
            if let Some(id) = delete {
                session.delete_history_entry(&id).await?;
            }
            if let Some(id) = open {
                match session.pick_history_entry(&id).await? {
                    Some(analysis) => println!("{}", ResultView::from_analysis(&analysis)),
                    None => warn!("No history entry with id {}", id),
                }
            } else {
                let entries = session.history().await?;
                println!("{}", HistoryView::new(entries));
            }
            report(session.drain_notifications());
        }
        Commands::Keywords { pick } => match pick {
            Some(keyword) => {
                let staged = session.select_keyword(&keyword)?;
                report(session.drain_notifications());
                println!("{}", staged.title);
            }
            None => {
                for category in session.keyword_categories() {
                    println!("{} {}: {}", category.icon, category.name, category.keywords.join(", "));
                }
            }
        },
    }

    Ok(())
}
