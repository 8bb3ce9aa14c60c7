use std::io::Write;

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};

use logic_synth::driver::{Driver, SearchConfig};
use logic_synth::pool::ExpressionPool;
use logic_synth::truth_table::Domain;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Number of inputs (the truth tables have `2^inputs` rows).
    #[arg(long, value_name = "INT", default_value = "3")]
    inputs: u32,

    /// Custom seed variable, e.g. `a=0x0f`. Repeatable. Defaults to `a, b, c, ...`.
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
    vars: Vec<(String, u64)>,

    /// Highest operation count to search.
    #[arg(long, value_name = "INT", default_value = "4")]
    max_level: u32,

    /// Truth table to look for (`0x..`, `0b..` or decimal).
    #[arg(long, value_name = "VALUE", default_value = "0x4b", value_parser = parse_value)]
    target: u64,

    /// Do not print the pool size after each level.
    #[arg(short, long)]
    quiet: bool,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_value(s: &str) -> Result<u64, String> {
    let s = s.trim();
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        u64::from_str_radix(bin, 2)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid truth table '{}': {}", s, e))
}

fn parse_var(s: &str) -> Result<(String, u64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    Ok((name.trim().to_string(), parse_value(value)?))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = if args.verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let domain = Domain::new(args.inputs)?;
    let mut pool = ExpressionPool::new(domain);
    if args.vars.is_empty() {
        pool.seed_variables();
    } else {
        for (name, bits) in &args.vars {
            pool.seed_bits(name, *bits)
                .wrap_err_with(|| format!("Could not seed '{}'", name))?;
        }
    }
    log::info!("pool = {:?}", pool);

    let target = domain
        .table(args.target)
        .map_err(|e| eyre!("Invalid target: {}", e))?;
    let config = SearchConfig {
        max_level: args.max_level,
        target,
        report_sizes: !args.quiet,
    };

    let mut driver = Driver::new(pool);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let found = driver.run(&config, &mut out)?;
    out.flush()?;

    log::info!(
        "{} matches in {:.3}s",
        found.len(),
        time_total.elapsed().as_secs_f64()
    );

    Ok(())
}
