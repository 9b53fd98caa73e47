//! Terminal front end: mode and difficulty selection, board printing, and
//! the turn loop. All game logic lives in the library.

use std::io::{self, BufRead, Write};

use tictactoe_engine::{Difficulty, GameMode, GameOutcome, Mark, Orchestrator, TurnResult};

fn main() {
    env_logger::init();

    println!("Tic Tac Toe");
    let stdin = io::stdin();
    let Some(mode) = select_mode(&stdin) else {
        return;
    };

    let mut session = Orchestrator::new(mode);
    loop {
        println!("\n{}", session.board());
        match session.play_turn() {
            TurnResult::Continue => {}
            TurnResult::Abandoned => {
                println!("Game abandoned.");
                return;
            }
            TurnResult::Finished(outcome) => {
                println!("\n{}", session.board());
                match outcome {
                    GameOutcome::Win(Mark::X) => println!("Player X Wins!"),
                    GameOutcome::Win(Mark::O) => println!("Player O Wins!"),
                    _ => println!("It's a draw!"),
                }
                if !ask(&stdin, "Play again? (y/n): ") {
                    return;
                }
                session.reset();
            }
        }
    }
}

/// Mode menu, then the difficulty menu when playing the computer.
/// Returns `None` on end of input.
fn select_mode(stdin: &io::Stdin) -> Option<GameMode> {
    loop {
        println!("  1) Play vs AI");
        println!("  2) Play vs Friend");
        match prompt(stdin, "> ")?.as_str() {
            "1" => {
                loop {
                    println!("  1) Easy");
                    println!("  2) Medium");
                    println!("  3) Hard");
                    let difficulty = match prompt(stdin, "> ")?.as_str() {
                        "1" => Difficulty::Easy,
                        "2" => Difficulty::Medium,
                        "3" => Difficulty::Hard,
                        _ => continue,
                    };
                    return Some(GameMode::PvAI { difficulty });
                }
            }
            "2" => return Some(GameMode::PvP),
            _ => {}
        }
    }
}

fn ask(stdin: &io::Stdin, question: &str) -> bool {
    matches!(prompt(stdin, question).as_deref(), Some("y") | Some("Y"))
}

/// Print `text` and read one trimmed line; `None` on end of input.
fn prompt(stdin: &io::Stdin, text: &str) -> Option<String> {
    print!("{}", text);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}
