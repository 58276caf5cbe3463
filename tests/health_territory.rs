use go_health_board::{Board, EvalStats, Phase, Player, Point, Weights};

fn p(row: usize, col: usize) -> Point {
    Point::new(row, col)
}

fn play(board: &mut Board, player: Player, points: &[(usize, usize)]) {
    for &(row, col) in points {
        board.apply_move(p(row, col), player).unwrap();
    }
}

#[test]
fn lone_stone_health() {
    let mut board = Board::new();
    play(&mut board, Player::Black, &[(5, 5)]);
    let group = board.group_at(p(5, 5)).unwrap();
    assert_eq!(group.absolute_health, 0.1);
    assert_eq!(group.relative_health, 0.1);
    assert_eq!(board.stone_at(p(5, 5)).unwrap().health, 0.1);
    assert_eq!(board.territory_delta(), 0.1);

    let mut board = Board::new();
    play(&mut board, Player::White, &[(5, 5)]);
    assert_eq!(board.group_at(p(5, 5)).unwrap().absolute_health, -0.1);
    assert_eq!(board.score_at(p(5, 5)), Some(-0.1));
}

#[test]
fn weak_neighbor_boosts_relative_health() {
    let mut board = Board::new();
    play(&mut board, Player::White, &[(5, 5)]);
    play(&mut board, Player::Black, &[(4, 5), (6, 5), (5, 4)]);
    let white = board.group_at(p(5, 5)).unwrap();
    let black = board.group_at(p(4, 5)).unwrap();
    // The ataried white stone favors Black; Black's stones are pushed further.
    assert!(white.absolute_health > 0.0);
    assert!(black.relative_health > black.absolute_health);
    assert!(black.relative_health <= 1.0);
}

#[test]
fn empty_regions_scored_after_the_opening() {
    let mut board = Board::with_size(5);
    play(&mut board, Player::Black, &[(1, 3), (2, 3), (3, 3), (4, 3), (5, 3)]);
    assert_eq!(board.score_at(p(3, 1)), Some(0.0));
    let wall = board.group_at(p(3, 3)).unwrap();
    assert!(wall.relative_health > 0.0);

    // Passing advances the game into the midgame without changing shape.
    let mut player = Player::White;
    for _ in 0..6 {
        board.apply_pass(player);
        player = player.opponent();
    }
    assert!(board.move_count() > 10);
    let left = board.score_at(p(3, 1)).unwrap();
    let right = board.score_at(p(3, 5)).unwrap();
    assert!(left > 0.0);
    assert_eq!(left, right);
    assert!(board.territory_delta() > 5.0 * wall.relative_health);
    assert!(board.territory_estimate(Player::Black, false) >= 0);
    assert_eq!(board.territory_estimate(Player::Black, true), 20);
    assert_eq!(board.territory_estimate(Player::White, true), 0);
}

#[test]
fn final_score_counts_territory_and_komi() {
    let mut board = Board::with_size(5);
    play(&mut board, Player::Black, &[(1, 3), (2, 3), (3, 3), (4, 3), (5, 3)]);
    board.update_life_and_death();
    assert_eq!(board.dead_stones(Player::Black), 0);
    assert_eq!(board.final_score(Player::Black), 20.0);
    assert_eq!(board.final_score(Player::White), 6.5);
}

#[test]
fn surrounded_stone_is_dead_at_the_end() {
    let mut board = Board::new();
    play(&mut board, Player::White, &[(5, 5)]);
    play(&mut board, Player::Black, &[(4, 5), (6, 5), (5, 4)]);
    board.update_life_and_death();
    assert_eq!(board.dead_stones(Player::White), 1);
    assert_eq!(board.dead_stones(Player::Black), 0);
    assert!(board.stone_at(p(5, 5)).unwrap().dead);
    assert!(!board.stone_at(p(4, 5)).unwrap().dead);
    assert!(board.final_score(Player::Black) >= 2.0);
    assert_eq!(board.final_score(Player::White), 6.5);
}

#[test]
fn stats_record_every_phase() {
    let mut board = Board::new();
    let mut stats = EvalStats::new();
    for (i, point) in [p(3, 3), p(7, 7), p(3, 7), p(7, 3)].into_iter().enumerate() {
        let player = if i % 2 == 0 { Player::Black } else { Player::White };
        board.apply_move_with_stats(point, player, &mut stats).unwrap();
    }
    board.board_worth_with_stats(&Weights::default(), &mut stats);
    assert_eq!(stats.get(Phase::GroupRebuild).calls, 4);
    assert_eq!(stats.get(Phase::Worth).calls, 1);
    assert!(stats.get(Phase::EyeDetection).calls >= 4);
    assert_eq!(stats.get(Phase::EmptyRegions).calls, 4);
}

#[test]
fn worth_favors_the_side_ahead() {
    let mut board = Board::new();
    play(&mut board, Player::White, &[(5, 5)]);
    play(&mut board, Player::Black, &[(4, 5), (6, 5), (5, 4), (5, 6)]);
    let weights = Weights::default();
    assert!(board.board_worth(&weights) > 0.0);

    let mut board = Board::new();
    play(&mut board, Player::Black, &[(5, 5)]);
    play(&mut board, Player::White, &[(4, 5), (6, 5), (5, 4), (5, 6)]);
    assert!(board.board_worth(&weights) < 0.0);
}
