//! Player trait behavior over short games.

use chess_pawns::board::{Board, Color, SearchParams};
use chess_pawns::{PawnsAi, Player, RandomPlayer};

/// Alternate two players for up to `plies` moves, checking every move
/// against the mover's legal list before applying it.
fn play(white: &mut dyn Player, black: &mut dyn Player, plies: usize) -> (Board, usize) {
    let mut board = Board::new();
    let mut color = Color::White;
    let mut played = 0;

    for _ in 0..plies {
        let player: &mut dyn Player = match color {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };
        let chosen = player.choose_move(&board, color);
        if chosen.is_stalemate() {
            assert!(board.legal_moves(color).is_empty());
            break;
        }
        assert!(
            player.is_valid_move(&board, chosen.mv, color),
            "{} played illegal {chosen}",
            player.name()
        );
        board.make_move(chosen.mv);
        played += 1;
        color = color.opponent();
    }
    (board, played)
}

#[test]
fn ai_against_random_plays_legal_moves() {
    let mut ai = PawnsAi::with_params(SearchParams::fixed_depth(2).with_seed(17));
    let mut random = RandomPlayer::seeded(17);
    let (board, played) = play(&mut ai, &mut random, 12);
    assert!(played > 0);
    assert_eq!(board.hash(), board.calculate_hash());
    assert!(ai.memo_len() > 0);
}

#[test]
fn seeded_games_repeat_exactly() {
    let params = SearchParams::fixed_depth(2).with_seed(3);
    let mut first_ai = PawnsAi::with_params(params.clone());
    let mut first_random = RandomPlayer::seeded(3);
    let mut second_ai = PawnsAi::with_params(params);
    let mut second_random = RandomPlayer::seeded(3);

    let (first, _) = play(&mut first_random, &mut first_ai, 8);
    let (second, _) = play(&mut second_random, &mut second_ai, 8);
    assert_eq!(first, second);
}

#[test]
fn invalid_moves_are_rejected() {
    let ai = PawnsAi::new();
    let board = Board::new();
    assert!(!ai.is_valid_move(&board, "e2e5".parse().unwrap(), Color::White));
    assert!(!ai.is_valid_move(&board, "e7e5".parse().unwrap(), Color::White));
    assert!(ai.is_valid_move(&board, "e7e5".parse().unwrap(), Color::Black));
}
