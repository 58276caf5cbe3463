use assert_matches::assert_matches;
use go_health_board::{Board, IllegalMove, Player, Point};

fn p(row: usize, col: usize) -> Point {
    Point::new(row, col)
}

fn play(board: &mut Board, player: Player, points: &[(usize, usize)]) {
    for &(row, col) in points {
        board.apply_move(p(row, col), player).unwrap();
    }
}

#[test]
fn suicide_is_rejected() {
    let mut board = Board::new();
    play(&mut board, Player::Black, &[(1, 2), (2, 1)]);
    let hash = board.hash();
    assert_matches!(board.apply_move(p(1, 1), Player::White), Err(IllegalMove::Suicidal(_)));
    assert_eq!(board.hash(), hash);
    assert_eq!(board.move_count(), 2);
    assert_eq!(board.player_at(p(1, 1)), None);

    // Filling the last liberty of a friendly string is suicide too.
    play(&mut board, Player::White, &[(1, 3), (2, 2), (3, 1)]);
    assert_matches!(board.apply_move(p(1, 1), Player::Black), Err(IllegalMove::Suicidal(_)));
}

#[test]
fn capturing_move_is_not_suicide() {
    let mut board = Board::new();
    play(&mut board, Player::Black, &[(1, 2), (2, 1)]);
    play(&mut board, Player::White, &[(1, 3), (2, 2)]);
    let record = board.apply_move(p(1, 1), Player::White).unwrap();
    assert_eq!(record.num_captures(), 1);
    assert_eq!(board.player_at(p(1, 2)), None);
    assert_eq!(board.player_at(p(2, 1)), Some(Player::Black));
    assert_eq!(board.liberties_at(p(1, 1)), Some(1));
    board.validate().unwrap();
}

#[test]
fn capture_removes_exactly_the_string() {
    let mut board = Board::new();
    play(&mut board, Player::White, &[(5, 5), (5, 6), (7, 7)]);
    play(&mut board, Player::Black, &[(4, 5), (4, 6), (6, 5), (6, 6), (5, 4)]);
    let record = board.apply_move(p(5, 7), Player::Black).unwrap();
    assert_eq!(record.num_captures(), 2);
    let captured: Vec<Point> = record.captures().iter().map(|c| c.point).collect();
    assert_eq!(captured, vec![p(5, 5), p(5, 6)]);
    assert_eq!(board.player_at(p(7, 7)), Some(Player::White));
    assert_eq!(board.captures(Player::Black), 2);
    board.validate().unwrap();
}

#[test]
fn undo_restores_captured_stones() {
    let mut board = Board::new();
    play(&mut board, Player::White, &[(5, 5), (5, 6)]);
    play(&mut board, Player::Black, &[(4, 5), (4, 6), (6, 5), (6, 6), (5, 4)]);
    let hash = board.hash();
    let groups = board.groups_snapshot();

    let record = board.apply_move(p(5, 7), Player::Black).unwrap();
    board.undo_move(&record).unwrap();
    assert_eq!(board.hash(), hash);
    assert_eq!(board.player_at(p(5, 5)), Some(Player::White));
    assert_eq!(board.player_at(p(5, 7)), None);
    assert_eq!(board.captures(Player::Black), 0);
    assert_eq!(board.liberties_at(p(5, 6)), Some(1));
    assert_eq!(board.groups_snapshot(), groups);
    board.validate().unwrap();
}

#[test]
fn immediate_ko_recapture_is_rejected() {
    let mut board = Board::new();
    play(&mut board, Player::Black, &[(4, 4), (6, 4), (5, 3)]);
    play(&mut board, Player::White, &[(4, 5), (6, 5), (5, 6), (5, 4)]);

    let take = board.apply_move(p(5, 5), Player::Black).unwrap();
    assert_eq!(take.num_captures(), 1);
    assert_eq!(board.liberties_at(p(5, 5)), Some(1));
    assert_matches!(board.apply_move(p(5, 4), Player::White), Err(IllegalMove::Ko(_)));

    // After an exchange elsewhere the ko can be retaken.
    play(&mut board, Player::White, &[(1, 1)]);
    play(&mut board, Player::Black, &[(9, 9)]);
    let retake = board.apply_move(p(5, 4), Player::White).unwrap();
    assert_eq!(retake.num_captures(), 1);
    assert_eq!(board.player_at(p(5, 5)), None);
    board.validate().unwrap();
}

#[test]
fn capturing_stone_joins_the_surrounding_group() {
    let mut board = Board::new();
    // A white stone in atari inside a black mouth.
    play(&mut board, Player::Black, &[(5, 3), (5, 5), (4, 4)]);
    play(&mut board, Player::White, &[(5, 4)]);
    let white_groups_before = board
        .groups_snapshot()
        .iter()
        .filter(|g| g.player == Player::White)
        .count();
    assert_eq!(white_groups_before, 1);
    let record = board.apply_move(p(6, 4), Player::Black).unwrap();
    assert_eq!(record.num_captures(), 1);
    let black = board.group_at(p(5, 3)).unwrap();
    assert_eq!(black.stones, vec![p(4, 4), p(5, 3), p(5, 5), p(6, 4)]);

    board.undo_move(&record).unwrap();
    assert_eq!(board.player_at(p(5, 4)), Some(Player::White));
    board.validate().unwrap();
}
