use overlay_core::TrackerArbiter;

#[test]
fn newest_generation_wins() {
    let arbiter = TrackerArbiter::new();
    let first = arbiter.begin();
    assert!(arbiter.is_current(first));

    let second = arbiter.begin();
    assert!(!arbiter.is_current(first));
    assert!(arbiter.is_current(second));
}

#[test]
fn every_begin_supersedes_all_earlier_runs() {
    let arbiter = TrackerArbiter::new();
    let tokens: Vec<_> = (0..5).map(|_| arbiter.begin()).collect();

    let (last, earlier) = tokens.split_last().unwrap();
    assert!(arbiter.is_current(*last));
    for token in earlier {
        assert!(!arbiter.is_current(*token));
    }
}

#[test]
fn clones_share_the_counter() {
    let arbiter = TrackerArbiter::new();
    let clone = arbiter.clone();

    let token = arbiter.begin();
    assert!(clone.is_current(token));

    let newer = clone.begin();
    assert!(!arbiter.is_current(token));
    assert!(arbiter.is_current(newer));
}
