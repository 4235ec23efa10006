mod chat;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meggie_core::{detect, resolve_local, HttpGenerator, Meggie, RecipeGenerator, RemoteGenerator};

#[derive(Parser)]
#[command(name = "meggie")]
#[command(about = "Chat with Meggie, your hostel kitchen assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session
    Chat {
        #[command(flatten)]
        generator: GeneratorArgs,
    },
    /// Ask a single question and print the reply
    Ask {
        /// The message to send
        message: String,
        #[command(flatten)]
        generator: GeneratorArgs,
    },
    /// Show which ingredients and local recipe a message maps to
    Detect {
        /// The message to inspect
        message: String,
    },
}

#[derive(clap::Args)]
struct GeneratorArgs {
    /// Hosted generator endpoint, e.g. http://localhost:3000/generate-recipe.
    /// Without it, recipes are generated in-process from environment config.
    #[arg(long, env = "MEGGIE_ENDPOINT")]
    endpoint: Option<String>,
    /// Request timeout for the hosted generator, in seconds
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,
}

impl GeneratorArgs {
    fn meggie(&self) -> Result<Meggie> {
        let generator: Arc<dyn RemoteGenerator> = match &self.endpoint {
            Some(endpoint) => Arc::new(
                HttpGenerator::builder(endpoint.as_str())
                    .timeout(Duration::from_secs(self.timeout_secs))
                    .build()
                    .with_context(|| format!("Invalid generator endpoint {}", endpoint))?,
            ),
            None => Arc::new(RecipeGenerator::from_env()),
        };
        Ok(Meggie::new(generator))
    }
}

fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Chat { generator } => {
            chat::run(&generator.meggie()?).await?;
        }
        Commands::Ask { message, generator } => {
            let reply = generator.meggie()?.respond(&message).await;
            println!("{}", reply);
        }
        Commands::Detect { message } => {
            print_detection(&message);
        }
    }

    Ok(())
}

fn print_detection(message: &str) {
    let detected = detect(message);

    if detected.is_empty() {
        println!("ingredients: (none)");
    } else {
        println!("ingredients: {}", detected);
    }

    match resolve_local(&detected) {
        Some(key) => println!("local recipe: {} ({})", key.as_str(), key.recipe().name),
        None => println!("local recipe: (none)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_ask_with_endpoint() {
        let cli = Cli::try_parse_from([
            "meggie",
            "ask",
            "rice and eggs",
            "--endpoint",
            "http://localhost:3000/generate-recipe",
        ])
        .unwrap();

        match cli.command {
            Commands::Ask { message, generator } => {
                assert_eq!(message, "rice and eggs");
                assert_eq!(
                    generator.endpoint.as_deref(),
                    Some("http://localhost:3000/generate-recipe")
                );
                assert_eq!(generator.timeout_secs, 60);
                assert!(generator.meggie().is_ok());
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_bad_endpoint_is_rejected() {
        let args = GeneratorArgs {
            endpoint: Some("not a url".to_string()),
            timeout_secs: 5,
        };
        assert!(args.meggie().is_err());
    }
}
