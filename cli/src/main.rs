// cli/src/main.rs
#![forbid(unsafe_code)]

use std::io::{self, Read};

use anyhow::Context;
use clap::Parser;

use twenty48_cli::session::{parse_script, Console, FrontEnd, Session};

/// Console 2048.
#[derive(Parser, Debug)]
#[command(name = "twenty48")]
struct Args {
    /// Deterministic RNG seed for random tile placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Record placed tiles and moves to stderr, in the same line grammar
    /// `--testing` reads, so a logged game can be replayed.
    #[arg(long)]
    log: bool,

    /// Read tile placements and moves from stdin as a script instead of
    /// playing interactively.
    #[arg(long)]
    testing: bool,

    /// Do not render the board.
    #[arg(long)]
    no_display: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let front: Box<dyn FrontEnd> = if args.testing {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading test script from stdin")?;
        Box::new(Console::scripted(
            parse_script(&text),
            !args.no_display,
            args.log,
        ))
    } else {
        Box::new(Console::interactive(args.seed, !args.no_display, args.log))
    };

    Session::new(front).run();
    Ok(())
}
