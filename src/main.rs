//! Onça engine command line
//!
//! `onca play <side>` answers turn messages on stdin with move lines on
//! stdout. `onca selfplay` runs a refereed engine-vs-engine game.
//! Logs go to stderr.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use onca::notation::format_move;
use onca::session::MESSAGE_LINES;
use onca::{Engine, Move, Outcome, Referee, SearchConfig, Session, Side};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Maximum search depth
    #[arg(long, default_value_t = 5)]
    depth: u8,

    /// Time budget per move in milliseconds (0 for none)
    #[arg(long, default_value_t = 30_000)]
    time_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one side over stdin/stdout
    Play {
        /// `o` for the Jaguar, `c` for the Dogs
        #[arg(value_parser = parse_side)]
        side: Side,
    },
    /// Engine against engine
    Selfplay {
        /// Side that moves first
        #[arg(long, value_parser = parse_side, default_value = "o")]
        first: Side,

        /// Ply budget before the game is drawn
        #[arg(long, default_value_t = 100)]
        max_plies: u32,
    },
}

fn parse_side(text: &str) -> std::result::Result<Side, String> {
    let mut chars = text.chars();
    match (chars.next().and_then(Side::from_symbol), chars.next()) {
        (Some(side), None) => Ok(side),
        _ => Err(format!("expected 'o' or 'c', got {text:?}")),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();

    let config = if args.time_ms == 0 {
        SearchConfig::unlimited(args.depth)
    } else {
        SearchConfig::with_time_limit_ms(args.depth, args.time_ms)
    };

    match args.command {
        Command::Play { side } => play(side, config),
        Command::Selfplay { first, max_plies } => selfplay(config, first, max_plies),
    }
}

/// Stdio adapter: one reply line per turn message
fn play(side: Side, config: SearchConfig) -> Result<()> {
    info!("playing as {side} (depth {}, budget {:?})", config.max_depth, config.time_limit);
    let mut session = Session::new(side, Engine::with_config(config));
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut message = String::new();
    let mut lines = 0;

    for line in stdin.lock().lines() {
        let line = line.context("reading turn message")?;
        if lines == 0 && line.trim().is_empty() {
            continue;
        }
        message.push_str(&line);
        message.push('\n');
        lines += 1;
        if lines < MESSAGE_LINES {
            continue;
        }

        let (reply, finished) = match session.respond(&message) {
            Ok(reply) => (reply.text, reply.finished),
            Err(err) => {
                warn!("{err}");
                (format!("{}\n", format_move(side, &Move::Pass)), false)
            }
        };
        stdout.write_all(reply.as_bytes())?;
        stdout.flush()?;

        message.clear();
        lines = 0;
        if finished {
            break;
        }
    }
    Ok(())
}

/// Refereed game between two engine sessions, printed like the game controller
fn selfplay(config: SearchConfig, first: Side, max_plies: u32) -> Result<()> {
    let mut referee = Referee::new(first, max_plies);
    let mut jaguar = Session::new(Side::Jaguar, Engine::with_config(config));
    let mut dogs = Session::new(Side::Dogs, Engine::with_config(config));

    println!("{max_plies}:\n{}", referee.board());
    while referee.outcome() == Outcome::InProgress {
        let plies_left = referee.plies_left();
        let session = match referee.to_move() {
            Side::Jaguar => &mut jaguar,
            Side::Dogs => &mut dogs,
        };
        let reply = session.respond(&referee.turn_message())?;
        let ply = referee.submit(&reply.text)?;
        println!("{plies_left}: {}", ply.text);
        println!("{}", referee.board());
    }

    match referee.outcome() {
        Outcome::Winner(side) => println!("winner: {side}"),
        Outcome::Draw => println!("draw"),
        Outcome::InProgress => {}
    }
    Ok(())
}
