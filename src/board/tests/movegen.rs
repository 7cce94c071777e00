//! Legal move generation tests.

use super::{mv, sq};
use crate::board::{Board, BoardBuilder, Color, MateBudget, MoveFlag, Piece};

/// Black king boxed in by its own pawns; `a1a8` mates along the back rank.
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
fn a2_pawn_pushes_without_captures() {
    let mut board = Board::new();
    let moves = board.legal_moves(Color::White);
    let from_a2: Vec<_> = moves.iter().filter(|m| m.mv.from() == sq("a2")).collect();

    assert_eq!(from_a2.len(), 2);
    assert!(moves.contains(mv("a2a3")));
    assert!(moves.contains(mv("a2a4")));
    assert!(!moves.contains(mv("a2b3")));
}

#[test]
fn start_position_moves_are_quiet() {
    let mut board = Board::new();
    for color in Color::BOTH {
        let moves = board.legal_moves(color);
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|m| m.flag == MoveFlag::None));
    }
}

#[test]
fn legal_moves_leave_board_untouched() {
    let mut board = back_rank_mate();
    let before = board.clone();
    let _ = board.legal_moves(Color::White);
    let _ = board.legal_moves(Color::Black);
    assert_eq!(board, before);
    assert_eq!(board.hash(), board.calculate_hash());
}

#[test]
fn pinned_piece_cannot_leave_the_line() {
    // White bishop on e2 shields the king on e1 from the rook on e8.
    let mut board = BoardBuilder::new()
        .at("e1", Color::White, Piece::King)
        .at("e2", Color::White, Piece::Bishop)
        .at("e8", Color::Black, Piece::Rook)
        .at("a8", Color::Black, Piece::King)
        .build();
    let moves = board.legal_moves(Color::White);
    assert!(moves.iter().all(|m| m.mv.from() != sq("e2")));
}

#[test]
fn king_in_check_must_respond() {
    let mut board = BoardBuilder::new()
        .at("e1", Color::White, Piece::King)
        .at("e8", Color::Black, Piece::Rook)
        .at("a8", Color::Black, Piece::King)
        .at("c3", Color::White, Piece::Knight)
        .build();
    assert!(board.is_in_check(Color::White));
    let moves = board.legal_moves(Color::White);
    assert!(!moves.is_empty());
    for m in &moves {
        let info = board.make_move(m.mv);
        assert!(!board.is_in_check(Color::White), "{m} leaves king attacked");
        board.unmake_move(m.mv, info);
    }
    // The knight can only help by interposing on e2 or e4.
    let knight: Vec<_> = moves.iter().filter(|m| m.mv.from() == sq("c3")).collect();
    assert_eq!(knight.len(), 2);
}

#[test]
fn back_rank_move_flagged_checkmate() {
    let mut board = back_rank_mate();
    let moves = board.legal_moves(Color::White);
    let mate = moves.find(mv("a1a8")).expect("a1a8 is legal");
    assert_eq!(mate.flag, MoveFlag::Checkmate);
    assert!(mate.flag.gives_check());

    board.make_move(mate.mv);
    assert!(board.is_checkmate(Color::Black));
    assert!(board.legal_moves(Color::Black).is_empty());
}

#[test]
fn check_with_single_reply_stays_check() {
    // With g7 advanced to g6 the king escapes to g7, its only legal move.
    let mut board = BoardBuilder::new()
        .at("h8", Color::Black, Piece::King)
        .at("g6", Color::Black, Piece::Pawn)
        .at("h7", Color::Black, Piece::Pawn)
        .at("a1", Color::White, Piece::Rook)
        .at("e3", Color::White, Piece::King)
        .build();
    let check = board
        .legal_moves(Color::White)
        .find(mv("a1a8"))
        .expect("a1a8 is legal");
    assert_eq!(check.flag, MoveFlag::Check);

    board.make_move(check.mv);
    let replies = board.legal_moves(Color::Black);
    assert_eq!(replies.len(), 1);
    assert_eq!(replies.as_slice()[0].mv, mv("h8g7"));
}

#[test]
fn spent_budget_leaves_mate_flagged_as_check() {
    let mut board = back_rank_mate();
    let moves = board.legal_moves_budgeted(Color::White, MateBudget::NONE);
    let mate = moves.find(mv("a1a8")).expect("a1a8 is legal");
    assert_eq!(mate.flag, MoveFlag::Check);

    let moves = board.legal_moves_budgeted(Color::White, MateBudget::new(1));
    assert_eq!(moves.find(mv("a1a8")).map(|m| m.flag), Some(MoveFlag::Checkmate));
}

#[test]
fn unlimited_budget_verifies_every_check() {
    // Both rooks can check along the back rank; each one mates.
    let mut board = BoardBuilder::new()
        .at("h8", Color::Black, Piece::King)
        .at("g7", Color::Black, Piece::Pawn)
        .at("h7", Color::Black, Piece::Pawn)
        .at("a1", Color::White, Piece::Rook)
        .at("b2", Color::White, Piece::Rook)
        .at("e3", Color::White, Piece::King)
        .build();
    let moves = board.legal_moves_budgeted(Color::White, MateBudget::UNLIMITED);
    assert_eq!(moves.find(mv("a1a8")).map(|m| m.flag), Some(MoveFlag::Checkmate));
    assert_eq!(moves.find(mv("b2b8")).map(|m| m.flag), Some(MoveFlag::Checkmate));
    assert_eq!(MateBudget::UNLIMITED.remaining(), u32::MAX);

    let moves = board.legal_moves_budgeted(Color::White, MateBudget::new(1));
    let mates = moves.iter().filter(|m| m.flag == MoveFlag::Checkmate).count();
    assert_eq!(mates, 1);
}

#[test]
fn stalemated_side_has_no_moves() {
    let mut board = Board::from_fen("k7/8/1QK5/8/8/8/8/8");
    assert!(board.legal_moves(Color::Black).is_empty());
    assert!(board.is_stalemate(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
}

#[test]
fn pieces_never_move_off_board() {
    let mut board = BoardBuilder::new()
        .at("a1", Color::White, Piece::Knight)
        .at("h8", Color::White, Piece::Queen)
        .at("a8", Color::White, Piece::King)
        .at("h1", Color::Black, Piece::King)
        .build();
    let moves = board.legal_moves(Color::White);
    for m in &moves {
        assert!(m.mv.to().x() < 8 && m.mv.to().y() < 8);
    }
    assert_eq!(moves.iter().filter(|m| m.mv.from() == sq("a1")).count(), 2);
}
