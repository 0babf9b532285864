//! Compute the Voronoi diagram of a set of sites, and print its segments.
//!
//! Usage:
//!   fortune sites.txt              One `x y` (or `x,y`) pair per line
//!   fortune --random 1000 --seed 3 Random sites in a 100x100 square
//!   fortune - --format json        Read standard input, print JSON

use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use fortune_sweep::{fortune_algorithm, LineSegment, Point};
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// One `x0 y0 x1 y1` line per segment
    Text,
    /// A single JSON document with the sites and the segments
    Json,
}

/// Voronoi diagram of planar sites, by Fortune's sweep line
#[derive(Parser, Debug)]
#[command(name = "fortune", version, about)]
struct Cli {
    /// File with one site per line; `-` or nothing reads standard input
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Generate this many uniform random sites instead of reading input
    #[arg(long, value_name = "N", conflicts_with = "input")]
    random: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Side of the square random sites are drawn from
    #[arg(long, default_value_t = 100.0)]
    scale: f64,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Serialize)]
struct Output<'a> {
    sites: &'a [Point],
    segments: &'a [LineSegment],
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let sites = match cli.random {
        Some(n) => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            log::info!("generating {} sites with seed {}", n, seed);
            random_sites(n, seed, cli.scale)
        }
        None => read_sites(cli.input.as_ref())?,
    };

    let start = std::time::Instant::now();
    let segments = fortune_algorithm(&sites)?;
    log::info!(
        "{} sites, {} segments in {:.1?}",
        sites.len(),
        segments.len(),
        start.elapsed()
    );

    let mut out = BufWriter::new(io::stdout().lock());
    match cli.format {
        Format::Text => {
            for (x0, y0, x1, y1) in &segments {
                writeln!(out, "{} {} {} {}", x0, y0, x1, y1)?;
            }
        }
        Format::Json => {
            let output = Output {
                sites: &sites,
                segments: &segments,
            };
            serde_json::to_writer(&mut out, &output)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}

fn random_sites(n: usize, seed: u64, scale: f64) -> Vec<Point> {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen::<f64>() * scale, rng.gen::<f64>() * scale))
        .collect()
}

fn read_sites(input: Option<&PathBuf>) -> anyhow::Result<Vec<Point>> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            parse_sites(io::BufReader::new(file))
                .with_context(|| format!("failed to read sites from {}", path.display()))
        }
        _ => parse_sites(io::stdin().lock()),
    }
}

fn parse_sites(reader: impl BufRead) -> anyhow::Result<Vec<Point>> {
    let mut sites = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let site = parse_site(line).with_context(|| format!("line {}: {:?}", i + 1, line))?;
        sites.push(site);
    }
    Ok(sites)
}

fn parse_site(line: &str) -> anyhow::Result<Point> {
    let mut numbers = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());

    let (Some(x), Some(y), None) = (numbers.next(), numbers.next(), numbers.next()) else {
        bail!("expected two coordinates");
    };
    let site = Point::new(x.parse()?, y.parse()?);
    if !site.is_finite() {
        bail!("coordinates must be finite");
    }
    Ok(site)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lines() {
        let input = "# sites\n0 0\n\n  4,0\n2, 4\n";
        let sites = parse_sites(input.as_bytes()).unwrap();
        assert_eq!(
            sites,
            [
                Point::new(0.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(2.0, 4.0)
            ]
        );
    }

    #[test]
    fn bad_lines_name_their_number() {
        for input in ["0 0\n1\n", "0 0\n1 2 3\n", "0 0\nx 1\n", "0 0\ninf 1\n"] {
            let err = parse_sites(input.as_bytes()).unwrap_err();
            assert!(err.to_string().starts_with("line 2"), "{:#}", err);
        }
    }

    #[test]
    fn random_sites_are_seeded() {
        let a = random_sites(50, 9, 10.0);
        assert_eq!(a, random_sites(50, 9, 10.0));
        assert!(a
            .iter()
            .all(|p| (0.0..10.0).contains(&p.x) && (0.0..10.0).contains(&p.y)));
    }
}
