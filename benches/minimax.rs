#[macro_use]
extern crate bencher;
extern crate tictactoe_minimax;

use bencher::Bencher;
use tictactoe_minimax::*;

// Solving the empty board visits the entire game tree, about 550k nodes.
fn bench_minimax(b: &mut Bencher) {
    b.iter(|| {
        let mut board = Board::default();
        assert_eq!(minimax(&mut board, 0, true), 0);
    });
}

fn bench_parallel_minimax(b: &mut Bencher) {
    let engine = ParallelMinimax::new(ParallelOptions::new());
    b.iter(|| {
        let board = Board::default();
        assert_eq!(engine.search_value(&board, true), 0);
    });
}

fn bench_choose_move(b: &mut Bencher) {
    let board = Board::default();
    b.iter(|| {
        let mut s = Minimax::new();
        let m = s.choose_move(&board, Player::X);
        assert!(m.is_some());
    });
}

benchmark_group!(benches, bench_minimax, bench_parallel_minimax, bench_choose_move);
benchmark_main!(benches);
