use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keycalc::calculator::{Operator, evaluate_binary, evaluate_power, evaluate_unary, group_thousands};
use keycalc::config::Config;
use keycalc::keypad::{Key, KeypadState, resolve_symbol};
use keycalc::logging;

/// Scientific keypad calculator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log evaluation details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a unary operation, e.g. `unary √x 9` or `unary sqrt 9`.
    Unary {
        symbol: String,
        #[arg(allow_negative_numbers = true)]
        operand: String,
    },
    /// Apply a binary operation, e.g. `binary 6 3 ÷` or `binary 6 3 /`.
    Binary {
        #[arg(allow_negative_numbers = true)]
        previous: String,
        #[arg(allow_negative_numbers = true)]
        current: String,
        /// Keypad symbol or ASCII alias (`-`, `*`, `/`, ...).
        #[arg(allow_hyphen_values = true)]
        symbol: String,
    },
    /// Raise a base to an exponent.
    Power {
        #[arg(allow_negative_numbers = true)]
        base: String,
        #[arg(allow_negative_numbers = true)]
        exponent: String,
    },
    /// List every operator symbol.
    Ops,
    /// Feed key presses through the keypad and print the display.
    Keys {
        /// Print the final keypad state as JSON.
        #[arg(long)]
        json: bool,

        /// Keys such as `1 2 + 3 =`; `-`, `*`, `/` and `sqrt` are accepted.
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;
    logging::init(&config.logging.filter, args.verbose);
    tracing::debug!(?config, "configuration loaded");

    let render = |text: String| {
        if config.display.group_thousands {
            group_thousands(&text)
        } else {
            text
        }
    };

    match args.command {
        Command::Unary { symbol, operand } => {
            println!("{}", render(evaluate_unary(resolve_symbol(&symbol), &operand)));
        }
        Command::Binary {
            previous,
            current,
            symbol,
        } => {
            println!("{}", render(evaluate_binary(
                &previous,
                &current,
                resolve_symbol(&symbol),
            )));
        }
        Command::Power { base, exponent } => {
            println!("{}", render(evaluate_power(&base, &exponent)));
        }
        Command::Ops => {
            for op in Operator::all() {
                let arity = if op.is_unary() { "unary" } else { "binary" };
                println!("{:<6} {:<7} {}", op.symbol(), arity, op.name());
            }
        }
        Command::Keys { json, keys } => {
            let keys = keys
                .iter()
                .map(|token| token.parse::<Key>())
                .collect::<Result<Vec<_>, _>>()
                .context("Invalid key sequence")?;

            let state = KeypadState::new().press_all(&keys);

            if json {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                println!("{}", render(state.current));
            }
        }
    }

    Ok(())
}
