//! Quiz commands for CLI.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Subcommand;
use pathly_core::{Config, InsightGate, QuizEngine, QuizState, ResultStore};
use serde::Deserialize;

#[derive(Subcommand)]
pub enum QuizAction {
    /// Take the quiz interactively
    Take {
        /// Print the final result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay recorded answers from a JSON file
    Replay {
        /// JSON array of {"question_id", "value"} objects
        answers: PathBuf,
        /// Do not store the result
        #[arg(long)]
        no_save: bool,
    },
}

#[derive(Debug, Deserialize)]
struct RecordedAnswer {
    question_id: String,
    value: String,
}

pub fn run(action: QuizAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let engine = super::engine(&config)?;

    match action {
        QuizAction::Take { json } => {
            let stdin = std::io::stdin();
            let state = take(&engine, &config, &mut stdin.lock())?;
            if json {
                match state.result() {
                    Some(result) => println!("{}", serde_json::to_string_pretty(&result)?),
                    None => println!("{}", serde_json::to_string_pretty(&state)?),
                }
            } else {
                print_summary(&state);
            }
            save(&config, &state, config.storage.save_results)?;
        }
        QuizAction::Replay { answers, no_save } => {
            let content = std::fs::read_to_string(&answers)
                .map_err(|e| format!("failed to read {}: {e}", answers.display()))?;
            let recorded: Vec<RecordedAnswer> = serde_json::from_str(&content)?;
            let pairs: Vec<(String, String)> = recorded
                .into_iter()
                .map(|a| (a.question_id, a.value))
                .collect();

            let state = engine.replay(&pairs)?;
            match state.result() {
                Some(result) => println!("{}", serde_json::to_string_pretty(&result)?),
                None => {
                    tracing::warn!(
                        next = state.current_question_id.as_deref().unwrap_or(""),
                        "answers do not complete the quiz"
                    );
                    println!("{}", serde_json::to_string_pretty(&state)?);
                }
            }
            save(&config, &state, config.storage.save_results && !no_save)?;
        }
    }
    Ok(())
}

/// Ask questions until the session completes or input runs out.
fn take(
    engine: &QuizEngine,
    config: &Config,
    input: &mut impl BufRead,
) -> Result<QuizState, Box<dyn std::error::Error>> {
    let mut state = engine.start();
    let mut gate = InsightGate::new(config.insights.min_answers);
    let mut line = String::new();

    while let Some(question) = engine.current_question(&state) {
        eprintln!();
        eprintln!("[{}%] {}", state.progress_percent, question.prompt);
        if let Some(help) = &question.help {
            eprintln!("    {help}");
        }
        for (i, option) in question.options.iter().enumerate() {
            eprintln!("  {}. {}", i + 1, option.text);
        }
        eprint!("> ");
        std::io::stderr().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err("input ended before the quiz was complete".into());
        }
        let reply = line.trim();
        let value = match reply.parse::<usize>() {
            Ok(n) if (1..=question.options.len()).contains(&n) => question.options[n - 1].value.clone(),
            _ => reply.to_string(),
        };

        let id = question.id.clone();
        match engine.submit(&state, &id, &value) {
            Ok(next) => state = next,
            Err(e) => {
                eprintln!("error: {e}");
                continue;
            }
        }
        if let Some(insight) = gate.surface(state.answers.len(), &state.insights) {
            eprintln!("* {insight}");
        }
    }
    Ok(state)
}

fn print_summary(state: &QuizState) {
    println!("Your strongest traits:");
    for entry in &state.trait_profile {
        println!("  {:<24} {:>5.1}", entry.name, entry.score);
    }
    println!();
    println!("Careers to explore:");
    for (i, career) in state.matches.iter().enumerate() {
        println!("  {:>2}. {career}", i + 1);
    }
}

/// Store a finished result. Quiz output is already printed at this point.
fn save(config: &Config, state: &QuizState, enabled: bool) -> Result<(), Box<dyn std::error::Error>> {
    let Some(result) = state.result().filter(|_| enabled) else {
        return Ok(());
    };
    let store = super::result_store(config)?;
    store.save(&result)?;
    tracing::debug!(session = %result.session_id, "result stored");
    Ok(())
}
