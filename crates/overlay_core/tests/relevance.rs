use std::sync::{Arc, Once};

use overlay_core::{ActivePageProbe, RelevanceFilter};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(overlay_logging::initialize_for_tests);
}

struct FixedProbe(Option<&'static str>);

impl ActivePageProbe for FixedProbe {
    fn active_page(&self) -> Option<String> {
        self.0.map(ToOwned::to_owned)
    }
}

fn filter_for(label: Option<&'static str>) -> RelevanceFilter {
    RelevanceFilter::new(Arc::new(FixedProbe(label)))
}

#[test]
fn active_page_image_is_relevant() {
    init_logging();
    let filter = filter_for(Some("Chapter 5"));
    assert!(filter.relevant("https://img.example.com/pages/Chapter%205.jpg"));
}

#[test]
fn other_page_image_is_ignored() {
    init_logging();
    let filter = filter_for(Some("Chapter 5"));
    assert!(!filter.relevant("https://img.example.com/pages/Chapter%206.jpg"));
}

#[test]
fn extension_must_start_with_a_letter() {
    init_logging();
    let filter = filter_for(Some("Chapter 5"));
    assert!(!filter.relevant("https://img.example.com/pages/Chapter%205.42"));
    assert!(filter.relevant("https://img.example.com/pages/Chapter%205.p2"));
}

#[test]
fn bare_label_without_extension_is_ignored() {
    init_logging();
    let filter = filter_for(Some("Chapter 5"));
    assert!(!filter.relevant("https://img.example.com/pages/Chapter%205"));
}

#[test]
fn empty_source_is_ignored() {
    init_logging();
    let filter = filter_for(Some("Chapter 5"));
    assert!(!filter.relevant(""));
}

#[test]
fn missing_active_page_is_not_a_fault() {
    init_logging();
    let filter = filter_for(None);
    assert!(!filter.relevant("https://img.example.com/pages/Chapter%205.jpg"));
}

#[test]
fn empty_active_page_is_ignored() {
    init_logging();
    let filter = filter_for(Some(""));
    assert!(!filter.relevant("https://img.example.com/pages/Chapter%205.jpg"));
}
