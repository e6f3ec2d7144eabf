use keyword_board::ui::formatters::{or_dash, truncate_str};

#[test]
fn truncate_str_leaves_short_text() {
    assert_eq!(truncate_str("hello", 10), "hello");
    assert_eq!(truncate_str("hello", 5), "hello");
}

#[test]
fn truncate_str_adds_ellipsis() {
    assert_eq!(truncate_str("hello world", 8), "hello...");
}

#[test]
fn truncate_str_counts_characters_not_bytes() {
    assert_eq!(truncate_str("대통령 기자회견 요약", 6), "대통령...");
    assert_eq!(truncate_str("경제 뉴스", 5), "경제 뉴스");
}

#[test]
fn truncate_str_with_tiny_limit() {
    assert_eq!(truncate_str("abcdef", 2), "...");
}

#[test]
fn or_dash_replaces_blank_text() {
    assert_eq!(or_dash(""), "-");
    assert_eq!(or_dash("   "), "-");
    assert_eq!(or_dash("유튜브"), "유튜브");
}
