use crate::style::StandardFont;
use std::borrow::Cow;

const ELLIPSIS: &str = "...";

/// Shortens `text` so it fits `max_width` when set in `font` at `font_size`.
///
/// Cells never wrap; text that is too wide is cut and marked with an ellipsis.
/// When not even one character fits beside the ellipsis, the ellipsis is dropped.
pub fn fit_text(text: &str, font: StandardFont, font_size: f32, max_width: f32) -> Cow<'_, str> {
    if font.text_width(text, font_size) <= max_width {
        return Cow::Borrowed(text);
    }

    let budget = max_width - font.text_width(ELLIPSIS, font_size);
    let prefix = take_within(text, font, font_size, budget);
    if prefix.is_empty() {
        return Cow::Owned(take_within(text, font, font_size, max_width));
    }
    Cow::Owned(prefix + ELLIPSIS)
}

fn take_within(text: &str, font: StandardFont, font_size: f32, budget: f32) -> String {
    let mut used = 0.0;
    text.chars()
        .take_while(|c| {
            used += font.char_width(*c) * font_size;
            used <= budget
        })
        .collect()
}
