use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use chess_rules::{
    apply_move, evaluate_terminal_condition, fingerprint, has_legal_moves, initial_position,
    is_in_check, legal_moves, validate_move, Board, Color, GameState, Move, Phase, PieceKind,
    Square,
};

const GAMES: u64 = 6;
const MAX_PLIES: usize = 160;

fn assert_kings_cached(board: &Board) {
    for color in [Color::White, Color::Black] {
        let piece = board
            .piece_at(board.king_square(color))
            .expect("cached king square should be occupied");
        assert_eq!(piece.kind, PieceKind::King);
        assert_eq!(piece.color, color);
        assert_eq!(board.count(color, PieceKind::King), 1);
    }
}

fn random_probe(rng: &mut StdRng) -> Move {
    let from = Square::from_index(rng.random_range(0..64));
    let to = Square::from_index(rng.random_range(0..64));
    Move::new(from, to)
}

fn play_random_game(seed: u64) -> (Board, GameState, Phase) {
    let mut rng = StdRng::seed_from_u64(seed);
    let (mut board, mut state) = initial_position();
    let mut phase = Phase::Ongoing;

    for _ in 0..MAX_PLIES {
        let board_before = board.clone();
        let fingerprint_before = fingerprint(&board, &state);
        let history_before = state.history().len();

        // Arbitrary probes never touch the position, whatever their outcome.
        for _ in 0..8 {
            let probe = random_probe(&mut rng);
            let _ = validate_move(&board, &state, probe);
        }
        let moves = legal_moves(&board, &state);
        let _ = evaluate_terminal_condition(&board, &state);
        assert_eq!(board, board_before);
        assert_eq!(fingerprint(&board, &state), fingerprint_before);
        assert_eq!(state.history().len(), history_before);

        assert_eq!(
            moves.is_empty(),
            !has_legal_moves(&board, &state, state.side_to_move)
        );

        let Some(mv) = moves.choose(&mut rng).copied() else {
            break;
        };
        let mover = state.side_to_move;
        apply_move(&mut board, &mut state, mv).expect("generated move should apply");

        assert!(
            !is_in_check(&board, mover),
            "seed {seed}: {mv} left {mover:?} in check"
        );
        assert_kings_cached(&board);
        assert_eq!(state.side_to_move, mover.opposite());
        assert_eq!(state.history().len(), history_before + 1);

        phase = evaluate_terminal_condition(&board, &state);
        if phase.is_game_over() {
            break;
        }
    }

    (board, state, phase)
}

#[test]
fn random_games_never_leave_the_mover_in_check() {
    for seed in 0..GAMES {
        let (board, state, phase) = play_random_game(seed);
        assert!(state.ply_count as usize <= MAX_PLIES);
        assert_eq!(
            phase,
            evaluate_terminal_condition(&board, &state),
            "seed {seed}: terminal evaluation should be repeatable"
        );
    }
}

#[test]
fn terminal_phases_agree_with_move_availability() {
    for seed in 100..100 + GAMES {
        let (board, state, phase) = play_random_game(seed);
        let side = state.side_to_move;
        match phase {
            Phase::Checkmate => {
                assert!(is_in_check(&board, side));
                assert!(!has_legal_moves(&board, &state, side));
            }
            Phase::Stalemate => {
                assert!(!is_in_check(&board, side));
                assert!(!has_legal_moves(&board, &state, side));
            }
            Phase::Check => assert!(is_in_check(&board, side)),
            _ => {}
        }
    }
}

#[test]
fn same_seed_replays_the_same_game() {
    let (first_board, first_state, first_phase) = play_random_game(7);
    let (second_board, second_state, second_phase) = play_random_game(7);
    assert_eq!(first_board, second_board);
    assert_eq!(first_state.history(), second_state.history());
    assert_eq!(first_phase, second_phase);
}
