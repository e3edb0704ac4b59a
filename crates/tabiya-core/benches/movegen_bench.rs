use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tabiya_core::board::Board;
use tabiya_core::notation::parse_board;
use tabiya_core::types::Team;

const MIDGAME_BOARD: &str = "   abcdefgh
 8 ♜...♚..♜ 8
 7 .♟..♝♟♟. 7
 6 ..♞.♟... 6
 5 ...♟...g 5
 4 ..♙..R.. 4
 3 .♙...♘.. 3
 2 ♙..♗♙♙♙♙ 2
 1 ♖...♔..♖ 1
   abcdefgh
";

fn movegen_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");
    group.sample_size(100);

    group.bench_function("start_position", |b| {
        let board = Board::new();
        b.iter(|| black_box(&board).legal_moves())
    });

    group.bench_function("midgame_position", |b| {
        let board = parse_board(MIDGAME_BOARD, Team::White).expect("parse midgame");
        b.iter(|| black_box(&board).legal_moves())
    });

    group.finish();
}

criterion_group!(benches, movegen_benchmarks);
criterion_main!(benches);
