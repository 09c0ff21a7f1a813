#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "std")]
use broadside::{
    init_logging, random_layout, ui, win, ComputerAi, Game, GameError, GamePhase, Orientation,
    SunkShip, Tuning, Winner, DEFAULT_CHECKERBOARD_PROBABILITY, DEFAULT_PLACEMENT_ATTEMPTS,
};
#[cfg(feature = "std")]
use broadside::ui::SetupInput;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone, Copy)]
#[cfg(feature = "std")]
struct TuningArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_CHECKERBOARD_PROBABILITY, help = "Chance a hunt shot sticks to the checkerboard")]
    checkerboard: f64,
    #[arg(long, default_value_t = DEFAULT_PLACEMENT_ATTEMPTS, help = "Random placement attempts per ship")]
    attempts: u32,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[command(flatten)]
        tuning: TuningArgs,
        #[arg(long, help = "Place your fleet randomly instead of by hand")]
        random_placement: bool,
        #[arg(long, default_value_t = 1000, help = "Pause before the computer fires, in milliseconds")]
        delay_ms: u64,
    },
    /// Watch the computer sink a randomly placed fleet on its own.
    Watch {
        #[command(flatten)]
        tuning: TuningArgs,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            tuning,
            random_placement,
            delay_ms,
        } => {
            let mut rng = make_rng(tuning.seed);
            let tuning = Tuning::new(tuning.checkerboard, tuning.attempts)?;
            let mut game = Game::new(tuning, &mut rng)?;
            let delay = Duration::from_millis(delay_ms);
            while play(&mut game, &mut rng, random_placement, delay).await? {
                match read_line("\nPlay again? [y/N]: ")? {
                    Some(answer) if answer.eq_ignore_ascii_case("y") => game.restart(&mut rng)?,
                    _ => break,
                }
            }
        }
        Commands::Watch { tuning } => {
            let mut rng = make_rng(tuning.seed);
            let tuning = Tuning::new(tuning.checkerboard, tuning.attempts)?;
            watch(tuning, &mut rng)?;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn read_line(prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(feature = "std")]
fn announce_sink(owner: &str, ship: SunkShip) {
    println!("💥 {} {} was sunk!", owner, ship.name);
}

#[cfg(feature = "std")]
fn setup(game: &mut Game, rng: &mut SmallRng, random_placement: bool) -> anyhow::Result<bool> {
    if random_placement {
        game.place_player_fleet_randomly(rng)?;
        return Ok(true);
    }
    println!("\n════════════════════════════════════════════════════════════");
    println!("                    SHIP PLACEMENT PHASE");
    println!("════════════════════════════════════════════════════════════");
    println!("  • Enter coordinates and orientation (e.g., A5 H or A5 V)");
    println!("  • A bare coordinate uses the current orientation; R switches it");
    println!("  • Press ENTER to place the remaining ships randomly\n");

    let mut orientation = Orientation::Horizontal;
    while game.phase() == GamePhase::Setup {
        let Some(index) = game.player_fleet().ships().iter().position(|s| !s.is_placed()) else {
            break;
        };
        let ship = &game.player_fleet().ships()[index];
        print!("{}", ui::render_board(game.player_board(), true));
        let prompt = format!("{} (length {}, {:?}): ", ship.name(), ship.size(), orientation);
        let Some(line) = read_line(&prompt)? else {
            return Ok(false);
        };
        match ui::parse_setup_input(&line, orientation) {
            Ok(SetupInput::RandomRest) => {
                game.place_player_fleet_randomly(rng)?;
                break;
            }
            Ok(SetupInput::Rotate(next)) => orientation = next,
            Ok(SetupInput::Place(origin, facing)) => match game.place_player_ship(index, origin, facing) {
                Ok(()) => println!("✓ Placed at {}", ui::coord_to_string(origin)),
                Err(GameError::Placement(e)) => println!("✗ {}. Try another position.", e),
                Err(e) => return Err(e.into()),
            },
            Err(msg) => println!("✗ {}", msg),
        }
    }
    Ok(true)
}

#[cfg(feature = "std")]
/// Run one game. Returns `false` when input ended before the game did.
async fn play(
    game: &mut Game,
    rng: &mut SmallRng,
    random_placement: bool,
    delay: Duration,
) -> anyhow::Result<bool> {
    if !setup(game, rng, random_placement)? {
        return Ok(false);
    }
    println!("\nGame started! Choose a cell on the enemy board to attack.");

    while game.phase() == GamePhase::Playing {
        if game.is_player_turn() {
            println!("\nEnemy board:");
            print!("{}", ui::render_board(game.computer_board(), false));
            println!("\nYour board:");
            print!("{}", ui::render_board(game.player_board(), true));
            let Some(line) = read_line("Fire at: ")? else {
                return Ok(false);
            };
            let target = match ui::parse_coord(&line) {
                Ok(pos) => pos,
                Err(msg) => {
                    println!("✗ {}", msg);
                    continue;
                }
            };
            match game.player_fire(target) {
                Ok(report) => {
                    println!("{}", if report.hit { "Hit!" } else { "Miss!" });
                    if let Some(ship) = report.sunk {
                        announce_sink("The enemy's", ship);
                    }
                }
                Err(GameError::AlreadyFired(_)) => {
                    println!("You already fired at this location. Try again.");
                }
                Err(e) => return Err(e.into()),
            }
        } else {
            println!("Computer is thinking...");
            tokio::time::sleep(delay).await;
            let report = game.computer_turn(rng)?;
            let label = ui::coord_to_string(report.target);
            if report.hit {
                println!("The computer fired at {}: your ship was hit!", label);
            } else {
                println!("The computer fired at {} and missed.", label);
            }
            if let Some(ship) = report.sunk {
                announce_sink("Your", ship);
            }
        }
    }

    println!("\n════════════════════════ GAME OVER ════════════════════════");
    println!("\nEnemy board:");
    print!("{}", ui::render_board(game.computer_board(), true));
    match game.winner() {
        Some(Winner::Player) => println!("\n🎉 Congratulations! You won!"),
        Some(Winner::Computer) => println!("\n💀 The computer sank all your ships."),
        None => {}
    }
    Ok(true)
}

#[cfg(feature = "std")]
fn watch(tuning: Tuning, rng: &mut SmallRng) -> anyhow::Result<()> {
    let (mut board, mut fleet) = random_layout(&tuning, rng)?;
    let mut ai = ComputerAi::new(tuning);
    ai.reset();
    let mut shots = 0usize;
    while !win(&fleet) {
        let mv = ai.computer_move(&board, &fleet, rng)?;
        shots += 1;
        board = mv.board;
        if let Some(ship) = mv.sunk {
            fleet.mark_sunk(ship.id);
            println!(
                "Shot {:3}: {} sank the {}",
                shots,
                ui::coord_to_string(mv.target),
                ship.name
            );
        }
    }
    print!("{}", ui::render_board(&board, true));
    print!("{}", ui::render_fleet(&fleet));
    println!("Fleet destroyed in {} shots.", shots);
    Ok(())
}
