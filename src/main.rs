use std::io::Read;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use study_assistant::engine::assistant::Assistant;
use study_assistant::engine::gemini::GeminiClient;
use study_assistant::model::difficulty::Difficulty;
use study_assistant::model::language::Language;
use study_assistant::model::mode::Mode;
use study_assistant::model::persona::Persona;
use study_assistant::model::subject::Subject;
use study_assistant::AppConfig;

#[derive(Parser)]
#[command(
    name = "study-assistant",
    version,
    about = "Ask study questions and generate practice quizzes from the terminal",
    arg_required_else_help = true,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask a free-form study question
    Ask {
        /// Question text; read from stdin when omitted
        question: Option<String>,

        /// Subject the question belongs to
        #[arg(long, default_value = "General")]
        subject: String,

        /// Teaching personality for the answer
        #[arg(long, default_value = "Friendly 😊")]
        persona: String,

        /// Language the answer must be written in
        #[arg(long, default_value = "English")]
        language: String,

        /// Study mode (General or 12th Syllabus)
        #[arg(long, default_value = "General")]
        mode: String,
    },

    /// Generate five multiple-choice questions on a topic
    Quiz {
        /// Topic the quiz should cover
        topic: String,

        /// Subject the topic belongs to
        #[arg(long, default_value = "General")]
        subject: String,

        /// Difficulty of the questions
        #[arg(long, default_value = "Normal 📘")]
        difficulty: String,

        /// Language the quiz must be written in
        #[arg(long, default_value = "English")]
        language: String,
    },

    /// List the published choices for every form field
    Options,

    /// Verify the configured API key against the service
    Check,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    // Resolved before dispatching any command: a bad environment fails at
    // launch, not at the first question.
    let config = AppConfig::from_env()?;

    match cli.command {
        Command::Ask {
            question,
            subject,
            persona,
            language,
            mode,
        } => {
            let question = match question {
                Some(text) => text,
                None => read_stdin()?,
            };

            let assistant = Assistant::new(GeminiClient::new(&config));
            eprintln!("Thinking...");
            let answer = assistant.ask(&question, &subject, &persona, &language, &mode)?;
            println!("{answer}");
        }

        Command::Quiz {
            topic,
            subject,
            difficulty,
            language,
        } => {
            let assistant = Assistant::new(GeminiClient::new(&config));
            eprintln!("Preparing a quiz on {topic}...");
            let quiz = assistant.quiz(&topic, &subject, &difficulty, &language)?;
            println!("{quiz}");
        }

        Command::Options => print_options(),

        Command::Check => {
            let client = GeminiClient::new(&config);
            let count = client.verify_credentials()?;
            println!("Connected ({count} models available)");
        }
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn print_options() {
    println!("Subjects:");
    for subject in Subject::ALL {
        println!("  {}", subject.label());
    }

    println!("\nPersonalities:");
    for persona in Persona::ALL {
        println!("  {}", persona.label());
    }

    println!("\nLanguages:");
    for language in Language::ALL {
        println!("  {}", language.label());
    }

    println!("\nModes:");
    for mode in Mode::ALL {
        println!("  {}", mode.label());
    }

    println!("\nQuiz difficulties:");
    for difficulty in Difficulty::ALL {
        println!("  {}", difficulty.label());
    }
}
