use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use paygate::application::checkout::CheckoutService;
use paygate::domain::charge::Amount;
use paygate::domain::config::ConfigValue;
use paygate::infrastructure::default_providers;
use paygate::interfaces::output::JsonWriter;
use paygate::interfaces::overrides::{into_options, parse_override};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List registered payment providers
    List,

    /// Show the default configuration of a provider
    Defaults {
        /// Provider name
        provider: String,
    },

    /// Charge a payment source
    Charge {
        /// Provider to charge through
        #[arg(long, env = "PAYGATE_PROVIDER", default_value = "stripe")]
        provider: String,

        /// Amount in major currency units, e.g. 49.99
        #[arg(long)]
        amount: Amount,

        /// Three-letter currency code
        #[arg(long)]
        currency: String,

        /// Payment source (card number, token, email)
        #[arg(long)]
        source: String,

        /// Override a provider option, e.g. --set api_key=sk_live_...
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
        overrides: Vec<(String, ConfigValue)>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let providers = default_providers().into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = JsonWriter::new(stdout.lock());

    match cli.command {
        Command::List => {
            writer
                .write_lines(providers.list_available())
                .into_diagnostic()?;
        }
        Command::Defaults { provider } => {
            let defaults = providers.default_config(&provider).into_diagnostic()?;
            writer.write(&defaults).into_diagnostic()?;
        }
        Command::Charge {
            provider,
            amount,
            currency,
            source,
            overrides,
        } => {
            let provider = providers
                .from_name(&provider, &into_options(overrides))
                .into_diagnostic()?;
            let checkout = CheckoutService::new(provider);
            let result = checkout
                .process_payment(amount, &currency, &source)
                .await
                .into_diagnostic()?;
            writer.write(&result).into_diagnostic()?;
        }
    }

    Ok(())
}
