use pagefx_core::config::TitleConfig;
use pagefx_core::title::split_title;

#[test]
fn test_split_keeps_spaces_between_words() {
    let words = split_title("  Internal   Quality\nAssurance Cell ", &TitleConfig::default());
    let texts: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
    assert_eq!(texts, vec!["Internal ", "Quality ", "Assurance ", "Cell"]);
    assert_eq!(texts.concat(), "Internal Quality Assurance Cell");
}

#[test]
fn test_stagger_delays() {
    let words = split_title("a b c", &TitleConfig::default());
    let delays: Vec<u32> = words.iter().map(|w| w.delay_ms).collect();
    assert_eq!(delays, vec![0, 70, 140]);
}

#[test]
fn test_transition_css() {
    let config = TitleConfig::default();
    let words = split_title("one two", &config);
    assert_eq!(
        words[1].transition(&config),
        "transform 650ms cubic-bezier(.2,.9,.3,1) 70ms, opacity 520ms ease 70ms"
    );
}

#[test]
fn test_blank_title_yields_nothing() {
    assert!(split_title("   \n\t", &TitleConfig::default()).is_empty());
    assert!(split_title("", &TitleConfig::default()).is_empty());
}
