use overlay_core::ActivationRule;

#[test]
fn chapter_pages_match() {
    let rule = ActivationRule::new(Some("reader.example.com"), "/chapters/");
    assert!(rule.matches("https://reader.example.com/chapters/123"));
}

#[test]
fn other_paths_do_not_match() {
    let rule = ActivationRule::new(Some("reader.example.com"), "/chapters/");
    assert!(!rule.matches("https://reader.example.com/forum/123"));
}

#[test]
fn other_hosts_do_not_match() {
    let rule = ActivationRule::new(Some("reader.example.com"), "/chapters/");
    assert!(!rule.matches("https://other.example.com/chapters/123"));
}

#[test]
fn host_agnostic_rule_checks_path_only() {
    let rule = ActivationRule::new(None, "/chapters/");
    assert!(rule.matches("https://anywhere.example.com/chapters/9"));
    assert!(!rule.matches("https://anywhere.example.com/tags/9"));
}

#[test]
fn garbage_urls_never_match() {
    let rule = ActivationRule::new(None, "/chapters/");
    assert!(!rule.matches("not a url"));
}
