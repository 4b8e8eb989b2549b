use std::io::{self, Read, Write};
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;
use tricard_bot::agent::respond_to;
use tricard_bot::policy::Rationale;
use tricard_bot::web;
use tricard_bot::{Agent, AgentConfig, Decision, DecisionError, DecisionResponse};

#[derive(Debug, Parser)]
#[command(
    name = "tricard-bot",
    version,
    about = "Three-card showdown poker decision agent",
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// RNG seed (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON file with agent settings (seed, policy parameters)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Read the request from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// Print a breakdown of the decision to stderr
    #[arg(long, default_value_t = false)]
    explain: bool,

    /// Disable ANSI colors in the breakdown
    #[arg(long = "no-color", default_value_t = false)]
    no_color: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Answer decision requests over HTTP
    Serve {
        /// Address to bind (HOST:PORT)
        #[arg(long, default_value = "0.0.0.0:8080")]
        addr: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = color_eyre::install();
    // stdout is reserved for the response object.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Some(Commands::Serve { addr }) => {
            let addr: SocketAddr = addr
                .parse()
                .with_context(|| format!("bad address '{addr}'"))?;
            web::serve(addr, config).await
        }
        None => run_once(&cli, config),
    }
}

fn load_config(cli: &Cli) -> Result<AgentConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => AgentConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    Ok(config)
}

fn read_request(cli: &Cli) -> io::Result<String> {
    match &cli.input {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

fn run_once(cli: &Cli, config: AgentConfig) -> Result<()> {
    let mut agent = Agent::new(config);
    let response = match read_request(cli) {
        Ok(raw) => {
            let result = agent.decide_json(&raw);
            if cli.explain {
                explain(&result, cli.no_color);
            }
            respond_to(&result)
        }
        Err(err) => {
            tracing::warn!(error = %err, "could not read request, folding");
            DecisionResponse::fold()
        }
    };

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &response)?;
    stdout.flush()?;
    Ok(())
}

fn explain(result: &Result<Decision, DecisionError>, no_color: bool) {
    let decision = match result {
        Ok(decision) => decision,
        Err(err) => {
            if no_color {
                eprintln!("No decision ({err}); answering FOLD");
            } else {
                eprintln!("{} {err}; answering {}", "No decision".bold().red(), "FOLD".bold());
            }
            return;
        }
    };

    let reason = match decision.rationale {
        Rationale::SemiBluff => "semi-bluff against a frequent folder".to_string(),
        Rationale::SlowPlay => "slow-play against an aggressive opponent".to_string(),
        Rationale::Thresholds { raise, call, noise } => {
            format!("raise >= {raise:.3}, call >= {call:.3}, noise {noise:+.4}")
        }
    };
    let cards = decision.hand.cards();
    let tally = format!(
        "{}W/{}T/{}L",
        decision.tally.wins, decision.tally.ties, decision.tally.losses
    );

    if no_color {
        eprintln!(
            "Cards {} {} {} | Hand {} | Tally {} | Win {:.3} | {} | Action {}",
            cards[0],
            cards[1],
            cards[2],
            decision.category.label(),
            tally,
            decision.win_probability,
            reason,
            decision.action.label()
        );
    } else {
        eprintln!(
            "{} {} {} {} {} {} {:.3} {} {} {}",
            "Hand".bold().cyan(),
            cards
                .iter()
                .map(|card| card.notation())
                .collect::<Vec<_>>()
                .join(" ")
                .bold()
                .yellow(),
            decision.category.label().bold(),
            "Tally".bold().white(),
            tally,
            "Win".bold().white(),
            decision.win_probability,
            reason.blue(),
            "Action".bold().white(),
            decision.action.label().bold().green()
        );
    }
}
