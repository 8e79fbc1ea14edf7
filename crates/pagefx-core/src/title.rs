use crate::config::TitleConfig;

/// One word of a split heading and the delay before it animates in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleWord {
    /// Word text, with a trailing space on every word but the last.
    pub text: String,
    pub delay_ms: u32,
}

impl TitleWord {
    /// CSS `transition` that staggers this word's transform and fade.
    pub fn transition(&self, config: &TitleConfig) -> String {
        format!(
            "transform {}ms {} {}ms, opacity {}ms ease {}ms",
            config.transform_ms,
            config.transform_easing,
            self.delay_ms,
            config.opacity_ms,
            self.delay_ms
        )
    }
}

/// Split heading text into staggered words. Blank text yields nothing.
pub fn split_title(text: &str, config: &TitleConfig) -> Vec<TitleWord> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let last = words.len().saturating_sub(1);
    words
        .iter()
        .enumerate()
        .map(|(i, word)| TitleWord {
            text: if i < last {
                format!("{word} ")
            } else {
                (*word).to_owned()
            },
            delay_ms: config.stagger_ms.saturating_mul(i as u32),
        })
        .collect()
}
