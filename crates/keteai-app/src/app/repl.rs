use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};

use keteai_chat::{classify_input, context_banner_now, ChatSession, UserInput};
use keteai_llm_api::{ClientConfig, ClientFactory};
use keteai_logging::ConversationLogger;

use crate::cli::Cli;

const PROMPT: &str = "Vous: ";

/// What the loop does after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Startup header: title and the current context banner
pub fn print_welcome<W: Write>(out: &mut W, banner: &str) -> io::Result<()> {
    writeln!(out, "{}\n", "🤖 KeTeaAI !".bright_cyan().bold())?;
    writeln!(out, "📅 {}", banner)
}

pub fn print_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "👋 Au revoir !".bright_cyan())
}

/// Handle one line read at the prompt.
///
/// Exactly one reply line or one error line is written per message; remote
/// failures never end the loop.
pub async fn process_line<W: Write>(
    session: &mut ChatSession,
    line: &str,
    at: &NaiveDateTime,
    out: &mut W,
    logger: Option<&mut ConversationLogger>,
) -> io::Result<LoopControl> {
    let input = match classify_input(line) {
        UserInput::Exit => {
            print_farewell(out)?;
            return Ok(LoopControl::Exit);
        }
        UserInput::Empty => return Ok(LoopControl::Continue),
        UserInput::Message(input) => input,
    };

    match session.send_user_input_at(input, at).await {
        Ok(reply) => {
            writeln!(out, "{} {}\n", "IA:".bright_blue().bold(), reply)?;

            if let Some(logger) = logger {
                // The last two turns are the exchange that just succeeded
                let model = session.model_name().to_string();
                if let [user, assistant] = &session.history()[session.history().len() - 2..] {
                    logger.log(user.role().as_str(), user.text(), None).await;
                    logger.log(assistant.role().as_str(), assistant.text(), Some(&model)).await;
                }
            }
        }
        Err(e) => {
            writeln!(out, "{} {}\n", "❌ Erreur:".bright_red().bold(), e.user_message())?;
        }
    }

    Ok(LoopControl::Continue)
}

/// Run interactive REPL mode
pub async fn run_repl_mode(cli: &Cli, client_config: ClientConfig) -> Result<()> {
    let mut stdout = io::stdout();
    print_welcome(&mut stdout, &context_banner_now())?;

    if cli.verbose {
        let fallback = client_config.fallback_model.as_deref().unwrap_or("aucun");
        println!(
            "{}",
            format!("🔧 Modèle: {} • secours: {} • API: {}", client_config.model, fallback, client_config.api_url)
                .bright_black()
        );
    }

    let mut session = ChatSession::new(ClientFactory::create(&client_config));

    let mut logger = match &cli.log_dir {
        Some(dir) => match ConversationLogger::new(dir).await {
            Ok(l) => {
                if cli.verbose {
                    println!("{}", format!("📝 Journal: {}", l.file_path().display()).bright_black());
                }
                Some(l)
            }
            Err(e) => {
                eprintln!("{} Journalisation désactivée: {:#}", "⚠️".yellow(), e);
                None
            }
        },
        None => None,
    };

    let mut rl = DefaultEditor::new().context("Failed to initialize line editor")?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if matches!(classify_input(&line), UserInput::Message(_)) {
                    let _ = rl.add_history_entry(line.as_str());
                }

                let now = Local::now().naive_local();
                let control = process_line(&mut session, &line, &now, &mut stdout, logger.as_mut()).await?;
                stdout.flush()?;

                if control == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_black());
                continue;
            }
            Err(ReadlineError::Eof) => {
                print_farewell(&mut stdout)?;
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".bright_red().bold(), err);
                break;
            }
        }
    }

    // Graceful shutdown of logger (flush & close)
    if let Some(logger) = &mut logger {
        logger.shutdown().await;
    }

    Ok(())
}
