use fortune_sweep::{fortune_algorithm, Point};
use rand::{Rng, SeedableRng};

fn random_points(number: usize, runs: usize) -> usize {
    let mut rng = rand::rngs::SmallRng::from_seed([76; 32]); // chosen by fair dice roll
    let sites = (0..number)
        .map(|_| Point::new(rng.gen(), rng.gen()))
        .collect::<Vec<_>>();

    let mut segments = 0;
    for _ in 0..runs {
        match fortune_algorithm(std::hint::black_box(&sites)) {
            Ok(lines) => segments += lines.len(),
            Err(err) => eprintln!("{} sites: {}", number, err),
        }
    }
    segments
}

fn grid_points(side: usize, runs: usize) -> usize {
    // every site shares its x with a whole column, and most circle events are cocircular.
    let sites = (0..side * side)
        .map(|i| Point::new((i / side) as f64, (i % side) as f64))
        .collect::<Vec<_>>();

    let mut segments = 0;
    for _ in 0..runs {
        match fortune_algorithm(std::hint::black_box(&sites)) {
            Ok(lines) => segments += lines.len(),
            Err(err) => eprintln!("{}x{} grid: {}", side, side, err),
        }
    }
    segments
}

fn main() {
    let start = std::time::Instant::now();
    let segments = random_points(512, 100);
    println!("random: {:?} ({} segments)", start.elapsed(), segments);

    let start = std::time::Instant::now();
    let segments = grid_points(23, 100);
    println!("grid:   {:?} ({} segments)", start.elapsed(), segments);
}
