//! Search tests: move choice, tie-breaks, memo reuse and root parallelism.

use std::time::Duration;

use super::mv;
use crate::board::search::STALEMATE_SCORE;
use crate::board::{
    choose_move, AnnotatedMove, Board, BoardBuilder, Color, Move, MoveFlag, Piece, SearchParams,
    SearchState,
};

fn back_rank_mate() -> Board {
    BoardBuilder::new()
        .at("h8", Color::Black, Piece::King)
        .at("g7", Color::Black, Piece::Pawn)
        .at("h7", Color::Black, Piece::Pawn)
        .at("a1", Color::White, Piece::Rook)
        .at("e3", Color::White, Piece::King)
        .build()
}

#[test]
fn finds_back_rank_mate() {
    let mut state = SearchState::new(Some(1));
    let outcome = choose_move(
        &back_rank_mate(),
        Color::White,
        &mut state,
        &SearchParams::fixed_depth(2),
    );
    assert_eq!(outcome.chosen.mv, mv("a1a8"));
    assert_eq!(outcome.chosen.flag, MoveFlag::Checkmate);
}

#[test]
fn takes_hanging_queen() {
    let board = BoardBuilder::new()
        .at("e1", Color::White, Piece::King)
        .at("d1", Color::White, Piece::Rook)
        .at("d5", Color::Black, Piece::Queen)
        .at("h8", Color::Black, Piece::King)
        .build();
    let mut state = SearchState::new(Some(3));
    let outcome = choose_move(&board, Color::White, &mut state, &SearchParams::fixed_depth(2));
    assert_eq!(outcome.chosen.mv, mv("d1d5"));
    assert!(outcome.value.is_some_and(|v| v > 0));
}

#[test]
fn stalemated_side_gets_sentinel_without_search() {
    let board = Board::from_fen("k7/8/1QK5/8/8/8/8/8");
    let mut state = SearchState::new(Some(0));
    let outcome = choose_move(&board, Color::Black, &mut state, &SearchParams::default());
    assert_eq!(outcome.chosen, AnnotatedMove::stalemate());
    assert_eq!(outcome.chosen.mv, Move::NULL);
    assert!(outcome.value.is_none());
    assert!(outcome.scored.is_empty());
    assert_eq!(outcome.stats.nodes, 0);
}

#[test]
fn every_root_move_is_scored_in_order() {
    let mut board = Board::new();
    let roots = board.legal_moves(Color::White);
    let mut state = SearchState::new(Some(5));
    let outcome = choose_move(&board, Color::White, &mut state, &SearchParams::fixed_depth(1));

    let scored: Vec<Move> = outcome.scored.iter().map(|s| s.annotated.mv).collect();
    let expected: Vec<Move> = roots.iter().map(|m| m.mv).collect();
    assert_eq!(scored, expected);
    assert!(outcome.scored.iter().all(|s| s.depth == 1 && s.value == 0));
}

#[test]
fn same_seed_breaks_ties_the_same_way() {
    let board = Board::new();
    let params = SearchParams::fixed_depth(1);
    let pick = |seed| {
        let mut state = SearchState::new(Some(seed));
        choose_move(&board, Color::White, &mut state, &params).chosen
    };
    assert_eq!(pick(11), pick(11));

    let distinct: std::collections::HashSet<Move> = (0..20).map(|seed| pick(seed).mv).collect();
    assert!(distinct.len() > 1, "tie-break never varied across seeds");
}

#[test]
fn memo_persists_between_calls() {
    let board = Board::new();
    let params = SearchParams::fixed_depth(2);
    let mut state = SearchState::new(Some(8));

    let first = choose_move(&board, Color::White, &mut state, &params);
    let stored = state.memo_len();
    assert!(stored > 0);

    let second = choose_move(&board, Color::White, &mut state, &params);
    assert_eq!(state.memo_len(), stored);
    assert!(second.stats.memo_hits > 0);
    assert!(second.stats.nodes < first.stats.nodes);

    state.clear_memo();
    assert_eq!(state.memo_len(), 0);
}

#[test]
fn depth_drops_once_thresholds_pass() {
    let params = SearchParams::default().with_thresholds(Duration::ZERO, Duration::from_secs(60));
    let mut state = SearchState::new(Some(2));
    let outcome = choose_move(&Board::new(), Color::White, &mut state, &params);
    assert!(outcome.scored.iter().all(|s| s.depth == 2));
}

#[test]
fn parallel_root_matches_serial_values() {
    let board = Board::from_fen("r3k3/8/8/3q4/8/2N5/PP6/4K2R");
    let serial = choose_move(
        &board,
        Color::White,
        &mut SearchState::new(Some(4)),
        &SearchParams::fixed_depth(3),
    );
    let parallel = choose_move(
        &board,
        Color::White,
        &mut SearchState::new(Some(4)),
        &SearchParams::fixed_depth(3).with_threads(4),
    );

    let values = |o: &crate::board::SearchOutcome| -> Vec<(Move, i32)> {
        o.scored.iter().map(|s| (s.annotated.mv, s.value)).collect()
    };
    assert_eq!(values(&serial), values(&parallel));
    assert_eq!(serial.value, parallel.value);
}

/// Plain minimax with the same leaf rules as the search, no pruning, no memo.
fn minimax(board: &mut Board, last: AnnotatedMove, mover: Color, perspective: Color, depth: u32) -> i32 {
    let info = board.make_move(last.mv);
    let value = if depth == 0 || last.flag == MoveFlag::Checkmate {
        board.evaluate_after(last, mover, perspective)
    } else {
        let to_move = mover.opponent();
        let replies = board.legal_moves(to_move);
        if replies.is_empty() {
            if last.flag.gives_check() {
                let mate = AnnotatedMove::new(last.mv, MoveFlag::Checkmate);
                board.evaluate_after(mate, mover, perspective)
            } else {
                STALEMATE_SCORE
            }
        } else {
            let values = replies
                .iter()
                .map(|reply| minimax(board, *reply, to_move, perspective, depth - 1));
            if to_move == perspective {
                values.max().unwrap_or(STALEMATE_SCORE)
            } else {
                values.min().unwrap_or(STALEMATE_SCORE)
            }
        }
    };
    board.unmake_move(last.mv, info);
    value
}

/// Pruning when `alpha >= beta` must never change a root value. The
/// inverted test (`beta >= alpha`) cuts after the first reply of every
/// node and fails this comparison.
#[test]
fn pruned_values_match_plain_minimax() {
    let positions = [
        "r3k3/8/8/3q4/8/2N5/PP6/4K2R",
        "7k/6pp/8/8/8/4K3/8/R7",
        "4k3/8/3n4/8/2B5/8/8/4K3",
    ];
    for fen in positions {
        let mut board = Board::from_fen(fen);
        let outcome = choose_move(
            &board,
            Color::White,
            &mut SearchState::new(Some(0)),
            &SearchParams::fixed_depth(3),
        );
        for scored in &outcome.scored {
            let expected = minimax(&mut board, scored.annotated, Color::White, Color::White, 2);
            assert_eq!(scored.value, expected, "{fen}: {}", scored.annotated);
        }
    }
}
