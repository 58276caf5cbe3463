use go_health_board::fast_random::FastRandom;
use go_health_board::{Board, GroupView, Player, Point, Stone};

#[derive(Debug, PartialEq)]
struct Snapshot {
    stones: Vec<Option<Stone>>,
    scores: Vec<Option<f32>>,
    liberties: Vec<Option<usize>>,
    groups: Vec<GroupView>,
    territory_delta: f32,
    captures: (usize, usize),
    move_count: usize,
    hash: u64,
}

fn snapshot(board: &Board) -> Snapshot {
    let size = board.size();
    let points: Vec<Point> = (1..=size)
        .flat_map(|row| (1..=size).map(move |col| Point::new(row, col)))
        .collect();
    Snapshot {
        stones: points.iter().map(|&p| board.stone_at(p)).collect(),
        scores: points.iter().map(|&p| board.score_at(p)).collect(),
        liberties: points.iter().map(|&p| board.liberties_at(p)).collect(),
        groups: board.groups_snapshot(),
        territory_delta: board.territory_delta(),
        captures: (board.captures(Player::Black), board.captures(Player::White)),
        move_count: board.move_count(),
        hash: board.hash().value(),
    }
}

// Plays a random game. Every move is applied, undone and applied again, and
// the board must match itself exactly at both ends of the round trip.
fn random_game_round_trips(size: usize, seed: u32, max_moves: usize) -> usize {
    let mut board = Board::with_size(size);
    let mut rng = FastRandom::new(seed);
    let mut player = Player::Black;
    let mut history = Vec::new();
    let mut captures = 0;

    for _ in 0..max_moves {
        let mut candidates = board.legal_candidates();
        rng.shuffle(&mut candidates);
        let before = snapshot(&board);
        let Some((point, record)) = candidates
            .into_iter()
            .find_map(|point| board.apply_move(point, player).ok().map(|record| (point, record)))
        else {
            break;
        };
        let after = snapshot(&board);
        board.validate().unwrap();

        board.undo_move(&record).unwrap();
        assert_eq!(snapshot(&board), before, "undo of {point} by {player:?}");
        board.validate().unwrap();

        let again = board.apply_move(point, player).unwrap();
        assert_eq!(again, record);
        assert_eq!(snapshot(&board), after, "replay of {point} by {player:?}");

        captures += record.num_captures();
        history.push((before, record));
        player = player.opponent();
    }

    // Unwind the whole game.
    while let Some((before, record)) = history.pop() {
        board.undo_move(&record).unwrap();
        assert_eq!(snapshot(&board), before);
    }
    assert_eq!(board.move_count(), 0);
    assert!(board.groups_snapshot().is_empty());
    captures
}

#[test]
fn random_games_round_trip_on_small_boards() {
    let mut captures = 0;
    for seed in 1..=4 {
        captures += random_game_round_trips(5, seed, 60);
    }
    assert!(captures > 0, "random games should capture something");
}

#[test]
fn random_game_round_trips_on_nine_by_nine() {
    random_game_round_trips(9, 123, 120);
}

#[test]
#[ignore] // Run with cargo test -- --ignored
fn random_game_round_trips_on_full_board() {
    random_game_round_trips(19, 7, 400);
}
