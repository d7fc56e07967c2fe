use clap::Subcommand;
use pathly_core::{Config, ResultStore};

#[derive(Subcommand)]
pub enum ResultsAction {
    /// List stored results
    List {
        /// Output full results as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ResultsAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let store = super::result_store(&config)?;

    match action {
        ResultsAction::List { json } => {
            let results = store.list()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
                return Ok(());
            }
            for result in &results {
                let top = result.matches.first().map(String::as_str).unwrap_or("-");
                println!(
                    "{}  {}  {} answers  top match: {top}",
                    result.session_id,
                    result.completed_at.format("%Y-%m-%d %H:%M"),
                    result.answers.len(),
                );
            }
        }
    }
    Ok(())
}
