use chrono::{TimeZone, Utc};
use verse_core::{Poem, Style, Verdict};

#[test]
fn test_style_name_round_trip() {
    let named = [
        "Haiku",
        "Sonnet",
        "Limerick",
        "Ode",
        "Villanelle",
        "Elegy",
        "Ballad",
        "Epigram",
        "Acrostic",
        "Free Verse",
    ];
    for name in named {
        let style = Style::from(name);
        assert!(!matches!(style, Style::Other(_)), "{} parsed as Other", name);
        assert_eq!(style.name(), name);
    }
}

#[test]
fn test_unknown_style_preserved() {
    let style = Style::from("Sestina");
    assert_eq!(style, Style::Other("Sestina".to_string()));
    assert_eq!(style.name(), "Sestina");
}

#[test]
fn test_style_case_sensitive_names() {
    // "haiku" is not the named form; it stays an unconstrained style.
    assert!(matches!(Style::from("haiku"), Style::Other(_)));
}

#[test]
fn test_style_serde_as_string() {
    let json = serde_json::to_string(&Style::FreeVerse).unwrap();
    assert_eq!(json, "\"Free Verse\"");
    let back: Style = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Style::FreeVerse);
}

#[test]
fn test_poem_serde_round_trip() {
    let poem = Poem {
        text: "a line\nanother line".to_string(),
        style: Style::Ode,
        prompt: "Write a poem inspired by a color.".to_string(),
        doom: 42,
        date: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    };
    let json = serde_json::to_string(&poem).unwrap();
    let back: Poem = serde_json::from_str(&json).unwrap();
    assert_eq!(back, poem);
}

#[test]
fn test_verdict_constructors() {
    let pass = Verdict::pass("looks good");
    assert!(pass.valid);
    assert_eq!(pass.message, "looks good");

    let fail = Verdict::fail("wrong line count");
    assert!(!fail.valid);
    assert!(!fail.message.is_empty());
}
