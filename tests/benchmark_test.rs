use go_health_board::{Benchmark, EngineConfig, Phase};

#[test]
fn benchmark_small_board() {
    let mut bench = Benchmark::new(EngineConfig::with_size(5), 1150865).unwrap();
    let result = bench.run(2, 30).unwrap();
    assert!(result.contains("2 games on 5x5"));
    assert!(bench.stats().get(Phase::Worth).calls > 0);
    println!("{}", result);
}

#[test]
fn benchmark_games_are_reproducible() {
    let config = EngineConfig::with_size(7);
    let mut first = Benchmark::new(config.clone(), 42).unwrap();
    let mut second = Benchmark::new(config, 42).unwrap();
    for _ in 0..3 {
        assert_eq!(first.play_game(40).unwrap(), second.play_game(40).unwrap());
    }
}

#[test]
fn benchmark_rejects_bad_config() {
    assert!(Benchmark::new(EngineConfig::with_size(40), 1).is_err());
}

#[test]
#[ignore] // Run with cargo test -- --ignored
fn benchmark_performance() {
    let mut bench = Benchmark::new(EngineConfig::with_size(19), 11508282).unwrap();
    println!("{}", bench.run(100, 400).unwrap());
    println!("{}", bench.run(100, 400).unwrap());
}
