use clap::Subcommand;
use pathly_core::Config;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List questions in catalog order
    List {
        /// Only questions in this category (e.g. "values", "work_style")
        #[arg(long)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one question with its options
    Show {
        /// Question ID
        id: String,
    },
    /// Report dangling references in the catalog
    Lint,
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let catalog = config.load_catalog()?;

    match action {
        CatalogAction::List { category, json } => {
            let questions: Vec<_> = catalog
                .questions
                .iter()
                .filter(|q| category.as_deref().map_or(true, |c| q.category.as_str() == c))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&questions)?);
            } else {
                for q in questions {
                    println!("{:<24} {:<10} {}", q.id, q.category.as_str(), q.prompt);
                }
            }
        }
        CatalogAction::Show { id } => {
            let question = catalog
                .question(&id)
                .ok_or_else(|| format!("unknown question: {id}"))?;
            println!("{}", serde_json::to_string_pretty(question)?);
        }
        CatalogAction::Lint => {
            let issues = catalog.lint();
            if issues.is_empty() {
                println!("no issues");
            } else {
                for issue in &issues {
                    println!("{issue}");
                }
                return Err(format!("{} catalog issue(s)", issues.len()).into());
            }
        }
    }
    Ok(())
}
