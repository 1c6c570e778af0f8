use std::time::Instant;

use super::*;

#[test]
fn zero_interval_is_rejected() {
    assert!(ScoreTicker::spawn(Duration::ZERO).is_err());
}

#[test]
fn manual_ticker_delivers_posted_events() {
    let (ticker, tx) = ScoreTicker::manual();
    tx.send(LoopEvent::ScoreTick).unwrap();
    tx.send(LoopEvent::ScoreTick).unwrap();
    assert_eq!(ticker.events().try_iter().count(), 2);
    assert_eq!(ticker.events().try_iter().count(), 0);
}

#[test]
fn spawned_ticker_posts_periodically() {
    let ticker = ScoreTicker::spawn(Duration::from_millis(5)).unwrap();
    let ev = ticker
        .events()
        .recv_timeout(Duration::from_secs(5))
        .unwrap();
    assert_eq!(ev, LoopEvent::ScoreTick);
}

#[test]
fn stop_returns_promptly_with_long_interval() {
    let mut ticker = ScoreTicker::spawn(Duration::from_secs(3600)).unwrap();
    let start = Instant::now();
    ticker.stop();
    assert!(start.elapsed() < Duration::from_secs(5));
    assert!(ticker.events().try_recv().is_err());
}
