use std::sync::{Arc, Mutex};

use overlay_engine::ImageLoadHub;

async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn notification_is_deferred_one_turn() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let hub = ImageLoadHub::new({
        let seen = Arc::clone(&seen);
        move |src| seen.lock().unwrap().push(src)
    });

    hub.notify_created("https://img.example.com/pages/1.png");
    // Nothing may run inline with the construction report.
    assert!(seen.lock().unwrap().is_empty());

    settle().await;
    assert_eq!(
        *seen.lock().unwrap(),
        vec!["https://img.example.com/pages/1.png".to_string()]
    );
}

#[tokio::test]
async fn empty_source_produces_no_notification() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let hub = ImageLoadHub::new({
        let seen = Arc::clone(&seen);
        move |src| seen.lock().unwrap().push(src)
    });

    hub.notify_created("");
    settle().await;

    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn every_construction_is_reported() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let hub = ImageLoadHub::new({
        let seen = Arc::clone(&seen);
        move |src| seen.lock().unwrap().push(src)
    });

    hub.notify_created("https://img.example.com/a.png");
    hub.notify_created("https://img.example.com/b.png");
    settle().await;

    let mut reported = seen.lock().unwrap().clone();
    reported.sort();
    assert_eq!(
        reported,
        vec![
            "https://img.example.com/a.png".to_string(),
            "https://img.example.com/b.png".to_string(),
        ]
    );
}
