//! Command-line braid tracker and SVG exporter.
//!
//! ```text
//! braid <strands> <g1> [g2 ...] [--style comp|ext] [--gap N] [--line-width N]
//!       [--color rainbow|b|g|r|c|m|y|k|w] [--out FILE.svg]
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=debug`).

use std::process;

use braid_visualiser::prelude::*;
use log::{error, info};

const USAGE: &str = "usage: braid <strands> <g1> [g2 ...] [--style comp|ext] [--gap N] [--line-width N] [--color rainbow|b|g|r|c|m|y|k|w] [--out FILE.svg]";

struct Args {
    strands: usize,
    word: Vec<i64>,
    config: DrawConfig,
    out: Option<String>,
}

fn flag_value<I: Iterator<Item = String>>(flag: &str, args: &mut I) -> Result<String, BraidError> {
    args.next()
        .ok_or_else(|| BraidError::Parse(format!("{} needs a value", flag)))
}

fn parse_number<T: std::str::FromStr>(what: &str, raw: &str) -> Result<T, BraidError>
where
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|e| BraidError::Parse(format!("bad {} {:?}: {}", what, raw, e)))
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Args, BraidError> {
    let strands = match args.next() {
        Some(raw) => parse_number::<usize>("strand count", &raw)?,
        None => return Err(BraidError::Parse(USAGE.to_string())),
    };
    let mut word = Vec::new();
    let mut config = DrawConfig::default();
    let mut out = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--style" => config.style = flag_value(&arg, &mut args)?.parse()?,
            "--gap" => config.gap_size = parse_number("gap size", &flag_value(&arg, &mut args)?)?,
            "--line-width" => config.line_width = parse_number("line width", &flag_value(&arg, &mut args)?)?,
            "--color" => config.color = flag_value(&arg, &mut args)?.parse()?,
            "--out" => out = Some(flag_value(&arg, &mut args)?),
            _ => word.push(parse_number::<i64>("generator", &arg)?),
        }
    }

    Ok(Args {
        strands,
        word,
        config,
        out,
    })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args(std::env::args().skip(1))?;
    let braid = Braid::new(args.strands, &args.word)?;
    info!(
        "braid on {} strands with {} crossings, top labels {:?}",
        braid.strand_count(),
        braid.len(),
        braid.top_labels()
    );
    println!("{}", braid);

    if let Some(path) = args.out {
        save_svg(&braid, &args.config, &path)?;
        println!("Saved diagram to {}", path);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
