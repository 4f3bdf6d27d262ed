use fnkit::config::Config;
use fnkit::strings;

#[test]
fn handles_blank_input() {
    assert_eq!(strings::shorten_text("   ", 2, Some("")), "");
}

#[test]
fn handles_short_text() {
    assert_eq!(strings::shorten_text(" hi people  ", 100, Some("")), "hi people");
}

#[test]
fn takes_exact_size_when_it_fits() {
    let text = "lorem ipsum dolor sit amet";
    assert_eq!(strings::shorten_text(text, 17, Some("")), "lorem ipsum dolor");
    assert_eq!(strings::shorten_text(text, 18, Some("")), "lorem ipsum dolor");
}

#[test]
fn does_not_overflow_with_next_word() {
    let text = "lorem ipsum dolor sit amet";
    assert_eq!(strings::shorten_text(text, 13, Some("")), "lorem ipsum");
}

#[test]
fn cuts_too_long_word() {
    assert_eq!(strings::shorten_text("loremipsumdolorsitamet", 3, Some("")), "lor");
    assert_eq!(strings::shorten_text("příliš žluťoučký", 3, Some("")), "pří");
}

#[test]
fn collapses_whitespace() {
    let text = "lorem              ipsum         dolor        sit     amet";
    assert_eq!(strings::shorten_text(text, 13, Some("")), "lorem ipsum");
}

#[test]
fn default_and_custom_suffix() {
    assert_eq!(strings::shorten_text("lorem ipsum", 6, None), "lorem\u{2026}");
    assert_eq!(strings::shorten_text("lorem ipsum", 6, Some(" etc.")), "lorem etc.");
    assert_eq!(strings::shorten_text("the people", 10, Some("_")), "the people");
}

#[test]
fn shorten_with_uses_configured_ellipsis() {
    let cfg = Config {
        ellipsis: "...".to_string(),
        ..Config::default()
    };
    assert_eq!(strings::shorten_with("lorem ipsum", 6, &cfg), "lorem...");
}

#[test]
fn substitute_named_placeholders() {
    let out = strings::substitute(
        "{user} has {count} new messages",
        &[("user", "Jana"), ("count", "3")],
    );
    assert_eq!(out, "Jana has 3 new messages");
}

#[test]
fn substitute_keeps_unknown_and_escaped() {
    assert_eq!(strings::substitute("{a}-{b}", &[("a", "1")]), "1-{b}");
    assert_eq!(strings::substitute("{{a}} {a}", &[("a", "x")]), "{a} x");
    assert_eq!(strings::substitute("open { and } close", &[]), "open { and } close");
    assert_eq!(strings::substitute("tail {", &[]), "tail {");
}
