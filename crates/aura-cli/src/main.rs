//! aura CLI: terminal chat with a simulated assistant

use aura_engine::{
    Attachment, ChatSession, Config, ConversationLog, MediaKind, NoopFetch, PickerError,
    SendOutcome,
};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Terminal chat with a simulated AI assistant
#[derive(Parser, Debug)]
#[command(name = "aura")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: <config dir>/aura/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the simulated reply delay
    #[arg(long, global = true, value_name = "MS")]
    reply_delay_ms: Option<u64>,

    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Send one message and print the exchange
    Chat {
        /// Message text (words are joined with spaces)
        text: Vec<String>,

        /// Attach an image or video file (repeatable)
        #[arg(long = "attach", value_name = "PATH")]
        attachments: Vec<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config_path = cli.config.clone().or_else(Config::default_path);
    let mut config = match &config_path {
        Some(path) => Config::load_or_default(path)?,
        None => Config::default(),
    };
    if let Some(ms) = cli.reply_delay_ms {
        config.reply_delay_ms = ms;
    }

    match cli.command {
        None | Some(Commands::Tui) => {
            init_file_logging(cli.verbose, &config.log_path())?;
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(aura_tui::run_tui(&config, Arc::new(NoopFetch)))
        }
        Some(Commands::Chat {
            text,
            attachments,
            json,
        }) => {
            init_stderr_logging(cli.verbose);
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(cmd_chat(&config, &text.join(" "), &attachments, json))
        }
        Some(Commands::Config { json }) => cmd_config(&config, config_path.as_deref(), json),
    }
}

fn default_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Log to a file so output never lands on the TUI.
fn init_file_logging(verbose: bool, path: &Path) -> Result<(), Box<dyn Error>> {
    let log_file = File::create(path)?;
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();
    Ok(())
}

fn init_stderr_logging(verbose: bool) {
    let filter = if verbose {
        default_filter(true)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Image first, then video. A path matching neither names both filters.
fn attachment_for(path: &Path) -> Result<Attachment, Box<dyn Error>> {
    let attachment = Attachment::from_path(path, MediaKind::Image)
        .or_else(|_| Attachment::from_path(path, MediaKind::Video))
        .map_err(|e| match e {
            PickerError::UnsupportedKind { path, .. } => format!(
                "{path} does not match {} or {}",
                MediaKind::Image.accept_filter(),
                MediaKind::Video.accept_filter()
            ),
            other => other.to_string(),
        })?;
    Ok(attachment)
}

async fn cmd_chat(
    config: &Config,
    text: &str,
    paths: &[PathBuf],
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let session = run_chat(config, text, paths).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(session.log())?);
    } else {
        print!("{}", format_transcript(session.log()));
    }
    Ok(())
}

/// Send one message and wait for its reply.
async fn run_chat(
    config: &Config,
    text: &str,
    paths: &[PathBuf],
) -> Result<ChatSession, Box<dyn Error>> {
    let attachments = paths
        .iter()
        .map(|path| attachment_for(path))
        .collect::<Result<Vec<_>, _>>()?;

    let mut session = ChatSession::new(config.reply_delay());
    session.composer_mut().set_text(text);
    session.composer_mut().add_attachments(attachments);

    if session.send() == SendOutcome::Ignored {
        return Err("nothing to send: message is blank and no files are attached".into());
    }
    session.next_reply().await;
    Ok(session)
}

fn format_transcript(log: &ConversationLog) -> String {
    let mut out = String::new();
    for message in log.messages() {
        out.push_str(&format!("{}: {}\n", message.sender.label(), message.text));
        for meta in &message.attachments {
            out.push_str(&format!(
                "  [{}] {}\n",
                meta.kind.label().to_lowercase(),
                meta.name
            ));
        }
    }
    out
}

fn cmd_config(config: &Config, path: Option<&Path>, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    match path {
        Some(path) if path.exists() => println!("Config file: {}", path.display()),
        Some(path) => println!("Config file: {} (not found, using defaults)", path.display()),
        None => println!("Config file: none (using defaults)"),
    }
    println!();
    println!("  Profile:      {} <{}>", config.profile.name, config.profile.email);
    println!("  Reply delay:  {} ms", config.reply_delay_ms);
    println!("  Tick rate:    {} ms", config.tick_rate_ms);
    println!("  Theme:        {:?}", config.theme);
    println!("  Icons:        {:?}", config.icons);
    println!("  Sidebar open: {}", config.sidebar_open);
    println!("  Log file:     {}", config.log_path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_engine::{AttachmentMeta, Message};

    #[test]
    fn test_no_command_defaults_to_tui() {
        let cli = Cli::try_parse_from(["aura"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_chat() {
        let cli = Cli::try_parse_from([
            "aura",
            "chat",
            "Hello",
            "there",
            "--attach",
            "a.png",
            "--attach",
            "b.mp4",
            "--reply-delay-ms",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.reply_delay_ms, Some(5));
        match cli.command {
            Some(Commands::Chat {
                text,
                attachments,
                json,
            }) => {
                assert_eq!(text.join(" "), "Hello there");
                assert_eq!(attachments.len(), 2);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_json() {
        let cli = Cli::try_parse_from(["aura", "config", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config { json: true })));
    }

    #[test]
    fn test_attachment_kind_detection() {
        assert_eq!(
            attachment_for(Path::new("photo.JPG")).unwrap().kind,
            MediaKind::Image
        );
        assert_eq!(
            attachment_for(Path::new("clip.mov")).unwrap().kind,
            MediaKind::Video
        );
        let err = attachment_for(Path::new("notes.txt")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "notes.txt does not match image/* or video/*"
        );
    }

    #[test]
    fn test_format_transcript() {
        let mut log = ConversationLog::new();
        log.append(Message::user(
            "Hello",
            vec![AttachmentMeta {
                name: "a.png".into(),
                kind: MediaKind::Image,
            }],
        ));
        log.append(Message::assistant("Hi"));

        assert_eq!(format_transcript(&log), "You: Hello\n  [image] a.png\nAura: Hi\n");
    }

    #[tokio::test]
    async fn test_cmd_chat_rejects_empty() {
        let config = Config::default();
        let err = cmd_chat(&config, "  ", &[], false).await.unwrap_err();
        assert!(err.to_string().contains("nothing to send"));
    }

    #[tokio::test]
    async fn test_cmd_chat_rejects_unknown_attachment() {
        let config = Config::default();
        let err = cmd_chat(&config, "hi", &[PathBuf::from("notes.txt")], false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("notes.txt"));
    }

    #[tokio::test]
    async fn test_run_chat_round_trip() {
        let config = Config {
            reply_delay_ms: 0,
            ..Config::default()
        };
        let session = run_chat(&config, "Hello", &[PathBuf::from("a.png")])
            .await
            .unwrap();

        let log = session.log();
        assert_eq!(log.len(), 2);
        assert_eq!(session.pending_replies(), 0);

        let transcript = format_transcript(log);
        assert!(transcript.starts_with("You: Hello\n  [image] a.png\nAura: "));
        let reply = &log.messages()[1].text;
        assert!(aura_engine::CANNED_RESPONSES.contains(&reply.as_str()));
        assert!(transcript.ends_with(&format!("Aura: {reply}\n")));
    }
}
