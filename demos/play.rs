//! Plays out a full game on stdout: X chooses moves with the fork-join
//! minimax engine, O just takes the first empty cell.

use tictactoe_minimax::{
    Board, FirstEmpty, ParallelMinimax, ParallelOptions, Player, Strategy, Winner,
};

fn main() {
    let mut board = Board::default();
    let mut x = ParallelMinimax::new(ParallelOptions::new());
    let mut o = FirstEmpty;
    let mut to_move = Player::X;

    while board.winner().is_none() {
        println!("Player {} turn", to_move);
        println!("{}", board);
        let m = match to_move {
            Player::X => {
                let m = x.choose_move(&board, to_move);
                println!("minimax value: {}", x.root_value());
                m
            }
            Player::O => o.choose_move(&board, to_move),
        };
        match m {
            Some(m) => m.apply(&mut board),
            None => break,
        }
        to_move = to_move.opponent();
    }

    println!("{}", board);
    match board.winner() {
        Some(Winner::Competitor(p)) => println!("Player {} wins!", p),
        _ => println!("The game is a draw!"),
    }
}
