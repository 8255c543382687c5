//! askline-demo: ask for typed values on the terminal.
//!
//! ```text
//! askline-demo scalar --type number --prompt "Your weight"
//! askline-demo array --type character
//! askline-demo survey
//! ```

use anyhow::Context;
use askline::{
    InputError, PromptSpec, Prompter, CHARACTER, DECIMAL, LONG_WHOLE_NUMBER, NUMBER, TEXT,
    WHOLE_NUMBER,
};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "askline-demo", about = "Ask for typed values until they are valid")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask for one value and print it.
    Scalar {
        #[arg(long = "type", value_enum, default_value_t = Kind::Text)]
        kind: Kind,
        /// Custom prompt shown instead of the default one.
        #[arg(long)]
        prompt: Option<String>,
    },
    /// Ask for an element count, then each element.
    Array {
        #[arg(long = "type", value_enum, default_value_t = Kind::WholeNumber)]
        kind: Kind,
    },
    /// A short questionnaire mixing several types.
    Survey,
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    WholeNumber,
    LongWholeNumber,
    Number,
    Decimal,
    Text,
    Character,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let prompter = Prompter::new();

    match cli.command {
        Command::Scalar { kind, prompt } => {
            let prompt = PromptSpec::from(prompt.as_deref());
            let value = scalar(&prompter, kind, prompt).context("reading value")?;
            println!("You entered: {}", value);
        }
        Command::Array { kind } => {
            let values = array(&prompter, kind).context("reading array")?;
            println!("You entered: [{}]", values.join(", "));
        }
        Command::Survey => survey(&prompter).context("running survey")?,
    }
    Ok(())
}

fn scalar(prompter: &Prompter, kind: Kind, prompt: PromptSpec) -> Result<String, InputError> {
    Ok(match kind {
        Kind::WholeNumber => prompter.ask(&WHOLE_NUMBER, prompt)?.to_string(),
        Kind::LongWholeNumber => prompter.ask(&LONG_WHOLE_NUMBER, prompt)?.to_string(),
        Kind::Number => prompter.ask(&NUMBER, prompt)?.to_string(),
        Kind::Decimal => prompter.ask(&DECIMAL, prompt)?.to_string(),
        Kind::Text => prompter.ask(&TEXT, prompt)?,
        Kind::Character => prompter.ask(&CHARACTER, prompt)?.to_string(),
    })
}

fn array(prompter: &Prompter, kind: Kind) -> Result<Vec<String>, InputError> {
    fn render<V: ToString>(values: Vec<V>) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    Ok(match kind {
        Kind::WholeNumber => render(prompter.whole_number_array()?),
        Kind::LongWholeNumber => render(prompter.ask_array(&LONG_WHOLE_NUMBER)?),
        Kind::Number => render(prompter.number_array()?),
        Kind::Decimal => render(prompter.decimal_array()?),
        Kind::Text => prompter.text_array()?,
        Kind::Character => render(prompter.character_array()?),
    })
}

fn survey(prompter: &Prompter) -> Result<(), InputError> {
    let name = prompter.text(Some("What is your name"))?;
    let age = prompter.whole_number(Some("How old are you"))?;
    let initial = prompter.character(Some("Favourite letter"))?;
    let scores = prompter.number_array()?;

    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    tracing::info!(answers = scores.len(), "survey complete");
    println!(
        "{} ({}), likes '{}', mean score {:.2}",
        name, age, initial, mean
    );
    Ok(())
}
