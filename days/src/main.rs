//! `trellis`: run one puzzle day against an input file.

use std::fmt::Display;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use trellis_days::{day05, day17, day21};

/// Solve a puzzle day from an input file
#[derive(Parser, Debug)]
#[command(name = "trellis", version)]
struct Args {
    /// Day to run (5, 17 or 21)
    day: u8,

    /// Path to the puzzle input
    input: PathBuf,

    /// Part to run (runs both if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,

    /// Step count for day 21 (defaults to 64 for part 1 and 26501365 for part 2)
    #[arg(long)]
    steps: Option<usize>,
}

fn show(part: u8, answer: Option<impl Display>) {
    match answer {
        Some(answer) => println!("part {part}: {answer}"),
        None => println!("part {part}: no answer"),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let input = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let parts: &[u8] = match args.part {
        Some(1) => &[1],
        Some(_) => &[2],
        None => &[1, 2],
    };
    log::info!("day {} parts {parts:?} on {}", args.day, args.input.display());

    for &part in parts {
        match (args.day, part) {
            (5, 1) => show(part, day05::part1(&input)?),
            (5, _) => show(part, day05::part2(&input)?),
            (17, 1) => show(part, day17::part1(&input)?),
            (17, _) => show(part, day17::part2(&input)?),
            (21, 1) => show(part, Some(day21::part1(&input, args.steps.unwrap_or(64))?)),
            (21, _) => show(
                part,
                Some(day21::part2(&input, args.steps.unwrap_or(26_501_365))?),
            ),
            (day, _) => bail!("no solver for day {day}"),
        }
    }
    Ok(())
}
