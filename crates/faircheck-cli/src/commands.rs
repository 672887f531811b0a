//! Command handlers.

use crate::cli::{ReviewArgs, RetrieveArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::submission::Submission;
use faircheck_domain::Query;
use faircheck_engine::{corpus, ReviewEngine};
use faircheck_llm::AzureOpenAiProvider;
use std::fs;

/// Build the completion provider from configuration.
fn build_provider(config: &Config) -> AzureOpenAiProvider {
    let mut provider = AzureOpenAiProvider::new(
        &config.azure.endpoint,
        &config.azure.api_key,
        &config.azure.deployment,
    );
    if let Some(grounding) = config.grounding() {
        provider = provider.with_grounding(grounding);
    }
    provider
}

/// Resolve submission content from the inline flag or a file.
fn resolve_content(args: &ReviewArgs) -> Result<String> {
    match (&args.content, &args.content_file) {
        (Some(content), _) => Ok(content.clone()),
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => Err(CliError::Validation {
            field: "content",
            reason: "provide --content or --content-file".to_string(),
        }),
    }
}

/// Execute the review command: validate, retrieve, generate, print.
pub async fn execute_review(
    args: ReviewArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    config.validate()?;

    let content = resolve_content(&args)?;
    let submission = Submission::new(args.title, args.category, args.service, content)?;

    let corpus = corpus::load_corpus(&config.data_dir);
    let engine = ReviewEngine::new(corpus, build_provider(config), config.engine.clone());

    println!(
        "{}",
        formatter.success(&format!(
            "심의가 등록되었습니다: {} ({} / {})",
            submission.title,
            submission.category.tag(),
            submission.service.label()
        ))
    );

    match engine.review(&submission.query()).await {
        Ok(outcome) => {
            println!("{}", formatter.format_outcome(&outcome));
            Ok(())
        }
        // Upstream failures are reported distinctly from "nothing matched"
        Err(e) => {
            eprintln!(
                "{}",
                formatter.error(&format!("심의 서비스에 연결하지 못했습니다: {}", e))
            );
            Err(CliError::Engine(e))
        }
    }
}

/// Execute the retrieve command: print what the local filter matches.
pub fn execute_retrieve(args: RetrieveArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let corpus = corpus::load_corpus(&config.data_dir);
    let query = Query::new(args.text, args.category.map(|c| c.tag().to_string()));

    let matches = faircheck_engine::retrieval::retrieve(&corpus, &query);
    println!("{}", formatter.format_matches(&matches));
    Ok(())
}

/// Execute the config command: show the path and redacted contents.
pub fn execute_config(config: &Config, formatter: &Formatter) -> Result<()> {
    let path = Config::path()?;
    println!("{}", formatter.info(&format!("config: {}", path.display())));
    println!("{}", config.redacted_toml());
    Ok(())
}
