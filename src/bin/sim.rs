#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{init_logging, random_layout, win, ComputerAi, Tuning};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde::Serialize;

/// Shots needed to sink a whole fleet, across a batch of seeded games.
#[derive(Serialize)]
#[cfg(feature = "std")]
struct Summary {
    seed: u64,
    games: usize,
    min_shots: usize,
    max_shots: usize,
    mean_shots: f64,
    shots: Vec<usize>,
}

#[cfg(feature = "std")]
fn run_game(ai: &mut ComputerAi, tuning: &Tuning, rng: &mut SmallRng) -> anyhow::Result<usize> {
    let (mut board, mut fleet) = random_layout(tuning, rng)?;
    ai.reset();
    let mut shots = 0;
    while !win(&fleet) {
        let mv = ai.computer_move(&board, &fleet, rng)?;
        board = mv.board;
        if let Some(ship) = mv.sunk {
            fleet.mark_sunk(ship.id);
        }
        shots += 1;
    }
    Ok(shots)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        let program = args.first().map_or("sim", String::as_str);
        eprintln!("Usage: {} <seed> <games>", program);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;
    if games == 0 {
        anyhow::bail!("at least one game is required");
    }

    let tuning = Tuning::default();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut ai = ComputerAi::new(tuning);

    let shots = (0..games)
        .map(|_| run_game(&mut ai, &tuning, &mut rng))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let summary = Summary {
        seed,
        games,
        min_shots: shots.iter().copied().min().unwrap_or(0),
        max_shots: shots.iter().copied().max().unwrap_or(0),
        mean_shots: shots.iter().sum::<usize>() as f64 / games as f64,
        shots,
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
