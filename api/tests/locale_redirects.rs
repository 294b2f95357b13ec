use api::locale::redirect_target;

#[test]
fn root_and_bare_pages_redirect_to_english() {
    assert_eq!(redirect_target("/").as_deref(), Some("/en"));
    assert_eq!(redirect_target("").as_deref(), Some("/en"));
    assert_eq!(redirect_target("/about").as_deref(), Some("/en/about"));
    assert_eq!(
        redirect_target("/projects/marina-tower?tab=plans").as_deref(),
        Some("/en/projects/marina-tower?tab=plans")
    );
}

#[test]
fn prefixed_paths_are_left_alone() {
    assert_eq!(redirect_target("/en"), None);
    assert_eq!(redirect_target("/ar/leasing"), None);
}

#[test]
fn files_and_machine_endpoints_pass_through() {
    for path in [
        "/sitemap.xml",
        "/robots.txt",
        "/favicon.ico",
        "/assets/main.css",
        "/api/home",
        "/images/hero.webp",
    ] {
        assert_eq!(redirect_target(path), None, "{path} should not redirect");
    }
}

#[test]
fn unsupported_language_prefix_is_replaced_not_nested() {
    assert_eq!(redirect_target("/fr/about").as_deref(), Some("/en/about"));
    assert_eq!(redirect_target("/fr").as_deref(), Some("/en"));
    assert_eq!(
        redirect_target("/DE/projects/marina-tower?tab=plans").as_deref(),
        Some("/en/projects/marina-tower?tab=plans")
    );
    // Longer first segments are page names, not languages.
    assert_eq!(redirect_target("/french/about").as_deref(), Some("/en/french/about"));
}
