//! Optimal play from both sides always draws.

use strictly_minimax::{
    Board, Decision, GameStatus, Player, Position, Strategy, Utility, advance, current_player,
    legal_actions, play_out, select_action, status, utility,
};
use strum::IntoEnumIterator;

#[test]
fn test_self_play_draws_for_every_strategy_pairing() {
    for x in Strategy::iter() {
        for o in Strategy::iter() {
            let end = play_out(&Board::new(), x, o).expect("legal game");
            assert_eq!(status(&end), GameStatus::Draw, "X {} vs O {}", x, o);
            assert_eq!(utility(&end), Ok(Utility::Draw));
        }
    }
}

#[test]
fn test_center_opening_then_pruned_search_draws() {
    let mut board = advance(&Board::new(), Position::Center).unwrap();
    let mut plies = 1;

    while let Decision::Play(pos) = select_action(&board, Strategy::Pruned).unwrap() {
        assert!(legal_actions(&board).contains(&pos));
        board = advance(&board, pos).unwrap();
        plies += 1;
    }

    assert_eq!(plies, 9);
    assert_eq!(status(&board), GameStatus::Draw);
    assert_eq!(utility(&board), Ok(Utility::Draw));
}

#[test]
fn test_x_completes_top_row() {
    let board: Board = "XX_/OO_/___".parse().unwrap();
    assert_eq!(current_player(&board), Player::X);

    for strategy in Strategy::iter() {
        let report = strategy.best_action(&board).unwrap();
        assert_eq!(report.action, Position::TopRight);
        assert_eq!(report.action.coords(), (0, 2));
        assert_eq!(report.utility, Utility::XWins);

        let next = advance(&board, report.action).unwrap();
        assert_eq!(status(&next), GameStatus::Won(Player::X));
        assert_eq!(utility(&next), Ok(Utility::XWins));
    }
}

#[test]
fn test_default_pairing_x_exhaustive_o_pruned() {
    let mut board = Board::new();
    let mut moves = Vec::new();

    loop {
        let strategy = match current_player(&board) {
            Player::X => Strategy::Exhaustive,
            Player::O => Strategy::Pruned,
        };
        match select_action(&board, strategy).unwrap() {
            Decision::Play(pos) => {
                moves.push(pos);
                board = advance(&board, pos).unwrap();
            }
            Decision::EndOfGame(end) => {
                assert_eq!(end, GameStatus::Draw);
                break;
            }
        }
    }

    assert_eq!(moves.len(), 9);
    assert_eq!(moves[0], Position::TopLeft);
}
