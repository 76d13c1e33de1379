use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use dict_scraper::aggregator::Aggregator;
use dict_scraper::config::Config;
use dict_scraper::curler::ReqwestCurler;
use dict_scraper::logging;
use dict_scraper::providers;
use dict_scraper::synonyms::Woxikon;
use dict_scraper::types::{SharedCurler, SourceLanguage, SynonymProvider};

#[derive(Parser)]
#[command(name = "dict_scraper")]
#[command(about = "Bilingual dictionary scraper aggregating German-English translation providers")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a term against all (or selected) providers
    Translate {
        /// The term to translate
        term: String,
        /// Source language of the term: german/de or english/en
        #[arg(long, default_value = "german")]
        from: SourceLanguage,
        /// Specific providers to query (comma-separated). Available:
        /// dict.cc, woerterbuch.info, leo.org, pons.eu, translate.google.com
        #[arg(long)]
        providers: Option<String>,
        /// Per-fetch timeout in milliseconds, overriding the configured value
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// Look up synonyms for an English term
    Synonyms {
        /// The term to look up
        term: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Translate {
            term,
            from,
            providers: provider_list,
            timeout_ms,
        } => {
            let timeout = timeout_ms.unwrap_or(config.fetch.timeout_ms);
            let curler: SharedCurler = Arc::new(ReqwestCurler::with_timeout(timeout));

            let names: Vec<String> = provider_list
                .map(|list| list.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|| config.providers.enabled.clone());

            let aggregator = if names.is_empty() {
                Aggregator::from_registry(&curler)
            } else {
                let mut translators = Vec::new();
                for name in &names {
                    match providers::create_translator(name, curler.clone()) {
                        Some(translator) => translators.push(Arc::from(translator)),
                        None => eprintln!("Unknown provider: {name}"),
                    }
                }
                Aggregator::new(translators)
            };

            info!("Translating {term} from {from:?}");
            let results = aggregator.aggregate(&term, from).await;

            for (provider, translations) in &results {
                println!("\n{provider} ({} hits):", translations.len());
                for translation in translations {
                    println!("   {translation}");
                }
            }

            let merged = dict_scraper::aggregator::merge(&results);
            println!("\nMerged ({} unique):", merged.len());
            for translation in &merged {
                println!("   {translation}");
            }
        }
        Commands::Synonyms { term } => {
            let curler: SharedCurler =
                Arc::new(ReqwestCurler::with_timeout(config.fetch.timeout_ms));
            let woxikon = Woxikon::new(curler);
            let synonyms = woxikon.synonyms(&term, SourceLanguage::English).await;
            println!("{} synonyms for {term}:", synonyms.len());
            for synonym in &synonyms {
                println!("   {synonym}");
            }
        }
    }

    Ok(())
}
