//! ring30 command-line tool: raw byte output and throughput benchmark.

use std::io::{self, Write};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, info};

use ring30::utils::format::{
    format_duration, format_size, format_throughput, parse_size, throughput_mib,
};
use ring30::{Generator, NeighborhoodRule, Ring30, Ring30R2, StateMix};

/// Write and benchmark chunk size.
const CHUNK_SIZE: usize = 1024 * 1024;

/// Buffer sizes timed by `bench`.
const BENCH_SIZES: [usize; 4] = [1024, 10 * 1024, 100 * 1024, 1024 * 1024];

/// Random byte generator using a Rule 30 cellular automaton on a 256-bit ring.
///
/// Runs `raw` when no subcommand is given.
#[derive(Parser)]
#[command(name = "ring30", version, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    raw: RawArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Write raw random bytes to stdout.
    Raw(RawArgs),
    /// Measure fill throughput for a few buffer sizes.
    Bench(BenchArgs),
}

#[derive(Args)]
struct RawArgs {
    /// Generator seed (0 = derive from the current time).
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of bytes to write, e.g. 1024, 64K, 1M (0 = unlimited).
    #[arg(long, default_value = "1024", value_parser = parse_size)]
    bytes: u64,

    /// Generator variant.
    #[arg(long, value_enum, default_value_t = Variant::Ring30)]
    variant: Variant,
}

#[derive(Args)]
struct BenchArgs {
    /// Generator seed (0 = derive from the current time).
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Generator variant.
    #[arg(long, value_enum, default_value_t = Variant::Ring30)]
    variant: Variant,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Variant {
    /// Radius-1 Rule 30, no state mixing.
    Ring30,
    /// Radius-2 rule with rotation state mixing.
    R30r2,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Some(Command::Raw(args)) => raw(args),
        Some(Command::Bench(args)) => bench(args),
        None => raw(cli.raw),
    }
}

/// Replaces seed 0 with the current time in nanoseconds.
fn resolve_seed(seed: u64) -> u64 {
    if seed != 0 {
        return seed;
    }
    let derived = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1);
    debug!("derived seed {} from wall clock", derived);
    derived
}

fn raw(args: RawArgs) -> anyhow::Result<()> {
    let seed = resolve_seed(args.seed);
    info!(
        "seed={:#018x} ({}) variant={:?} bytes={}",
        seed,
        seed,
        args.variant,
        if args.bytes == 0 {
            "unlimited".to_string()
        } else {
            args.bytes.to_string()
        }
    );
    match args.variant {
        Variant::Ring30 => write_stream(Ring30::new(seed), args.bytes),
        Variant::R30r2 => write_stream(Ring30R2::new(seed), args.bytes),
    }
}

/// Streams `count` bytes (or forever when 0) to stdout in fixed chunks.
///
/// In unlimited mode a closed pipe ends the stream cleanly.
fn write_stream<R: NeighborhoodRule, M: StateMix>(
    mut rng: Generator<R, M>,
    count: u64,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut buf = vec![0u8; CHUNK_SIZE];
    let unlimited = count == 0;
    let mut remaining = count;

    while unlimited || remaining > 0 {
        let len = if unlimited {
            CHUNK_SIZE
        } else {
            remaining.min(CHUNK_SIZE as u64) as usize
        };
        let n = rng.fill(&mut buf[..len]);
        match out.write_all(&buf[..n]) {
            Ok(()) => {}
            Err(e) if unlimited && e.kind() == io::ErrorKind::BrokenPipe => {
                debug!("output closed, stopping stream");
                return Ok(());
            }
            Err(e) => return Err(e).context("failed to write random bytes to stdout"),
        }
        remaining = remaining.saturating_sub(n as u64);
    }

    out.flush().context("failed to flush stdout")?;
    info!("generated {} bytes", count);
    Ok(())
}

fn bench(args: BenchArgs) -> anyhow::Result<()> {
    let seed = resolve_seed(args.seed);
    info!("benchmark seed={:#018x} variant={:?}", seed, args.variant);
    let rows = match args.variant {
        Variant::Ring30 => time_fills(Ring30::new(seed)),
        Variant::R30r2 => time_fills(Ring30R2::new(seed)),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "ring30 benchmark ({:?})", args.variant)?;
    writeln!(out, "Seed: {:#018X}", seed)?;
    writeln!(out)?;
    writeln!(out, "{:>6}    {:>9}    {:>14}", "Size", "Time", "Throughput")?;
    writeln!(out, "{:>6}    {:>9}    {:>14}", "----", "----", "----------")?;
    for (size, elapsed) in rows {
        writeln!(
            out,
            "{:>6}    {:>9}    {:>14}",
            format_size(size as u64),
            format_duration(elapsed),
            format_throughput(throughput_mib(size as u64, elapsed))
        )?;
    }
    Ok(())
}

/// Times one `fill` per size in [`BENCH_SIZES`].
fn time_fills<R: NeighborhoodRule, M: StateMix>(
    mut rng: Generator<R, M>,
) -> Vec<(usize, std::time::Duration)> {
    BENCH_SIZES
        .iter()
        .map(|&size| {
            let mut buf = vec![0u8; size];
            let start = Instant::now();
            rng.fill(&mut buf);
            (size, start.elapsed())
        })
        .collect()
}
