//! CLI entrypoint for quizforge
//!
//! Wires the layers together with dependency injection: configuration and
//! storage from the infrastructure crate, use cases from the application
//! crate, terminal output here.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use quizforge_application::{LibraryService, QuestionGenerator};
use quizforge_domain::{AnswerRecord, Category, Question, QuestionType, SubQuestion};
use quizforge_infrastructure::{ConfigLoader, FileConfig, GeneratorClient, JsonCategoryStore};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quizforge", about = "AI-assisted quiz authoring and drilling")]
struct Cli {
    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Explicit config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the generation service base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List categories with question counts and scores
    List,
    /// Generate one question per answer for a category
    Generate {
        /// Category name (created on --save if it does not exist)
        #[arg(long)]
        category: String,
        /// Answers to generate questions for
        #[arg(long, value_delimiter = ',', required = true)]
        answers: Vec<String>,
        /// Generate 4-choice questions
        #[arg(long)]
        multiple_choice: bool,
        /// Use the fill-in-the-blank style
        #[arg(long)]
        fill_in_blank: bool,
        /// Persist the generated questions into the library
        #[arg(long)]
        save: bool,
    },
    /// Append a generated phrasing to an existing question
    Expand {
        #[arg(long)]
        category: String,
        /// The question's canonical answer
        #[arg(long)]
        answer: String,
        /// free-text, mcq, blank-mcq, or blank-free-text
        #[arg(long, default_value = "free-text")]
        question_type: QuestionType,
    },
    /// Run a terminal quiz round over a category
    Quiz {
        #[arg(long)]
        category: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut config = ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?;
    if let Some(base_url) = cli.base_url {
        config.generator.base_url = base_url;
    }

    let store = match &config.storage.path {
        Some(path) => JsonCategoryStore::new(path),
        None => JsonCategoryStore::at_default_location()
            .unwrap_or_else(|| JsonCategoryStore::new("categories.json")),
    };
    info!(path = %store.path().display(), "using category store");
    let mut library = LibraryService::new(store);

    match cli.command {
        Command::List => list(&library),
        Command::Generate {
            category,
            answers,
            multiple_choice,
            fill_in_blank,
            save,
        } => {
            generate(
                &mut library,
                &config,
                &category,
                answers,
                multiple_choice,
                fill_in_blank,
                save,
            )
            .await?
        }
        Command::Expand {
            category,
            answer,
            question_type,
        } => expand(&mut library, &config, &category, &answer, question_type).await?,
        Command::Quiz { category } => quiz(&mut library, &category)?,
    }

    Ok(())
}

/// Build the generation client from config, cancelled on Ctrl-C.
fn generator_client(config: &FileConfig) -> Result<GeneratorClient> {
    let token = CancellationToken::new();
    let signal_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    let client = GeneratorClient::new(&config.generator.base_url)?
        .with_timeout(Duration::from_secs(config.generator.timeout_secs))
        .with_retries(config.generator.retries)
        .with_cancellation(token);
    Ok(client)
}

fn list(library: &LibraryService<JsonCategoryStore>) {
    for category in library.library().categories() {
        let (correct, answered) = library.score(category);
        println!(
            "{}  {} questions  score {}/{}",
            category.name.bold(),
            category.questions.len(),
            correct,
            answered
        );
    }
}

async fn generate(
    library: &mut LibraryService<JsonCategoryStore>,
    config: &FileConfig,
    category: &str,
    answers: Vec<String>,
    multiple_choice: bool,
    fill_in_blank: bool,
    save: bool,
) -> Result<()> {
    let client = generator_client(config)?;
    let mut generator = QuestionGenerator::new(Arc::new(client));

    let questions = generator
        .generate_for_category(category, &answers, multiple_choice, fill_in_blank)
        .await;

    if let Some(message) = generator.last_error() {
        bail!("generation failed: {message}");
    }

    for question in &questions {
        print_question(question);
    }

    if save {
        let category_id = match library.library().category_by_name(category) {
            Some(existing) => existing.id,
            None => {
                let question_type = match (multiple_choice, fill_in_blank) {
                    (true, true) => QuestionType::FillInBlankMultipleChoice,
                    (true, false) => QuestionType::MultipleChoice,
                    (false, true) => QuestionType::FillInBlankFreeText,
                    (false, false) => QuestionType::FreeText,
                };
                let fresh = Category::new(category, "questionmark", vec![], question_type);
                let id = fresh.id;
                library.add_category(fresh);
                id
            }
        };
        let count = questions.len();
        library.add_questions(&category_id, questions);
        println!("{}", format!("saved {count} questions to {category}").green());
    }

    Ok(())
}

async fn expand(
    library: &mut LibraryService<JsonCategoryStore>,
    config: &FileConfig,
    category: &str,
    answer: &str,
    question_type: QuestionType,
) -> Result<()> {
    let Some(found) = library.library().category_by_name(category) else {
        bail!("no category named '{category}'");
    };
    let category_id = found.id;
    let Some(question) = found.questions.iter().find(|q| q.answer == answer) else {
        bail!("no question with answer '{answer}' in '{category}'");
    };
    let question = question.clone();

    let client = generator_client(config)?;
    let mut generator = QuestionGenerator::new(Arc::new(client));

    match generator.generate_sub_question(&question, question_type).await {
        Some(sub) => {
            print_sub_question(&sub);
            library.append_sub_question(&category_id, &question.id, sub);
            println!("{}", format!("appended a phrasing to '{answer}'").green());
        }
        None => match generator.last_error() {
            Some(message) => bail!("generation failed: {message}"),
            None => println!("the service had no new phrasing for '{answer}'"),
        },
    }

    Ok(())
}

fn quiz(library: &mut LibraryService<JsonCategoryStore>, category: &str) -> Result<()> {
    let Some(found) = library.library().category_by_name(category) else {
        bail!("no category named '{category}'");
    };
    let questions: Vec<Question> = found.questions.clone();
    if questions.is_empty() {
        bail!("'{category}' has no questions yet");
    }

    let stdin = std::io::stdin();
    let mut correct = 0usize;

    for question in &questions {
        let Some(prompt) = question.prompts().first() else {
            continue;
        };
        println!();
        println!("{}", prompt.prompt.bold());

        let given = if let Some(choices) = &prompt.choices {
            for (index, choice) in choices.iter().enumerate() {
                println!("  {}. {}", index + 1, choice);
            }
            print!("> ");
            std::io::stdout().flush()?;
            let mut line = String::new();
            stdin.lock().read_line(&mut line)?;
            let picked = line
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| choices.get(n.wrapping_sub(1)));
            picked.cloned().unwrap_or_else(|| line.trim().to_string())
        } else {
            print!("> ");
            std::io::stdout().flush()?;
            let mut line = String::new();
            stdin.lock().read_line(&mut line)?;
            line.trim().to_string()
        };

        let is_correct = given == question.answer;
        if is_correct {
            correct += 1;
            println!("{}", "correct".green());
        } else {
            println!("{} (answer: {})", "wrong".red(), question.answer);
        }
        println!("  {}", prompt.explanation.dimmed());

        library.record_answer(AnswerRecord::new(
            question.id,
            Some(prompt.id),
            given,
            is_correct,
        ));
    }

    println!();
    println!(
        "{}",
        format!("score: {correct}/{}", questions.len()).bold()
    );
    Ok(())
}

fn print_question(question: &Question) {
    println!("{}  ({})", question.answer.bold(), question.category);
    for sub in question.prompts() {
        print_sub_question(sub);
    }
}

fn print_sub_question(sub: &SubQuestion) {
    println!("  Q: {}", sub.prompt);
    if let Some(choices) = &sub.choices {
        println!("     choices: {}", choices.join(" / "));
    }
    println!("     {}", sub.explanation.dimmed());
}
