use std::env;
use std::process;

use chess_pawns::board::{choose_move, Board, Color, SearchParams, SearchState};

fn parse_color(text: &str) -> Option<Color> {
    match text.to_ascii_lowercase().as_str() {
        "w" | "white" => Some(Color::White),
        "b" | "black" => Some(Color::Black),
        _ => None,
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: choose_move <placement> <white|black> [depth] [seed]");
        process::exit(2);
    }

    let board = match Board::try_from_fen(&args[1]) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid placement: {err}");
            process::exit(2);
        }
    };
    let Some(color) = parse_color(&args[2]) else {
        eprintln!("invalid color: {}", args[2]);
        process::exit(2);
    };

    let mut params = SearchParams::default();
    if let Some(depth) = args.get(3).and_then(|v| v.parse::<u32>().ok()) {
        params = SearchParams::fixed_depth(depth);
    }
    if let Some(seed) = args.get(4).and_then(|v| v.parse::<u64>().ok()) {
        params = params.with_seed(seed);
    }

    let mut scratch = board.clone();
    let legal = scratch.legal_moves(color);
    println!("side_to_move: {color}");
    println!("in_check: {}", scratch.is_in_check(color));
    println!("legal_moves: {}", legal.len());
    for mv in &legal {
        println!("  {mv}");
    }

    let mut state = SearchState::new(params.seed);
    let outcome = choose_move(&board, color, &mut state, &params);
    for scored in &outcome.scored {
        println!(
            "  {} value {} depth {}",
            scored.annotated, scored.value, scored.depth
        );
    }
    println!("chosen: {}", outcome.chosen);
    if let Some(value) = outcome.value {
        println!("value: {value}");
    }
    println!(
        "nodes: {} memo_hits: {} elapsed: {:?}",
        outcome.stats.nodes, outcome.stats.memo_hits, outcome.stats.elapsed
    );
}
