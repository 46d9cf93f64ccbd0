use std::io::{self, BufRead};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{info, warn};

use grid2048::{Direction, GameState};

#[derive(Debug, Parser)]
#[command(name = "play", about = "Play the 4x4 sliding-tile merge game in the terminal")]
struct Args {
    /// Fixed seed for a reproducible game (default: seeded from the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON snapshot line after every turn instead of the grid
    #[arg(long)]
    json: bool,

    /// Default log filter (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    log: String,

    /// Play these moves instead of reading stdin, one letter each: e.g. "LLURD"
    #[arg(long)]
    script: Option<String>,
}

fn render(state: &GameState, json: bool) -> anyhow::Result<()> {
    if json {
        let line = serde_json::to_string(&state.snapshot()).context("serialize snapshot")?;
        println!("{line}");
    } else {
        println!("Move: {}  Score: {}", state.moves(), state.score());
        print!("{}", state.board());
        println!();
    }
    Ok(())
}

/// Feed one input token to the game. Unknown tokens leave the game untouched.
fn handle(state: &mut GameState, token: &str, json: bool) -> anyhow::Result<()> {
    let dir: Direction = match token.parse() {
        Ok(d) => d,
        Err(e) => {
            warn!("{e}; ignored");
            return Ok(());
        }
    };

    let report = state.step(dir);
    render(state, json)?;

    if report.game_over {
        if !json {
            println!(
                "Game Over!\nMove: {}\nScore: {}\nHighest tile: {}\n",
                state.moves(),
                state.score(),
                state.board().highest_tile()
            );
        }
        info!("game over after {} moves with score {}, reset game", state.moves(), state.score());
        state.reset();
        render(state, json)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log.as_str())).init();

    let mut state = match args.seed {
        Some(seed) => GameState::seeded(seed),
        None => GameState::from_clock(),
    };
    render(&state, args.json)?;

    if let Some(script) = &args.script {
        for ch in script.chars().filter(|c| !c.is_whitespace() && *c != ',') {
            handle(&mut state, ch.encode_utf8(&mut [0u8; 4]), args.json)?;
        }
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("read stdin")?;
        for token in line.split_whitespace() {
            if token.eq_ignore_ascii_case("q") || token.eq_ignore_ascii_case("quit") {
                return Ok(());
            }
            handle(&mut state, token, args.json)?;
        }
    }
    Ok(())
}
