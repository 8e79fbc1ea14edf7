use crate::host::{host_error, AnimationFrameClock, ElementHandle};
use pagefx_core::clock::FrameClock;
use pagefx_core::config::TitleConfig;
use pagefx_core::title::split_title;
use pagefx_core::EffectError;
use web_sys::Document;

/// Split the hero heading into word spans that fade up one after another.
pub fn mount_title_reveal(
    heading: Option<ElementHandle>,
    config: &TitleConfig,
    document: &Document,
    clock: &AnimationFrameClock,
) -> Result<(), EffectError> {
    let heading = heading.ok_or(EffectError::MissingTarget("hero heading"))?;
    let text = heading.0.text_content().unwrap_or_default();
    let words = split_title(&text, config);
    if words.is_empty() {
        return Err(EffectError::MissingTarget("hero heading text"));
    }

    let mut spans = Vec::with_capacity(words.len());
    for word in &words {
        let span = document.create_element("span").map_err(host_error)?;
        span.set_class_name(config.word_class);
        span.set_text_content(Some(&word.text));
        spans.push((ElementHandle(span), word.transition(config)));
    }

    heading.0.set_text_content(None);
    for (span, transition) in &spans {
        span.set_style("transition", transition);
        heading.0.append_child(&span.0).map_err(host_error)?;
    }

    let settled = config.settled_transform;
    clock.schedule(Box::new(move |_| {
        for (span, _) in &spans {
            span.set_style("opacity", "1");
            span.set_style("transform", settled);
        }
    }));
    Ok(())
}
