//! Text styles for the rendered sheet, derived from the layout config.

use crate::encoding::{is_win_ansi, is_wide};
use cheatsheet_types::{Color, LayoutConfig};

/// The fonts the sheet is set in. None of them are embedded: the Latin faces
/// are PDF base-14 fonts and the gothic face is a standard Adobe-Japan1 font
/// supplied by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    CourierBold,
    /// Japanese gothic CID font, used for text the Latin faces cannot draw.
    KakuGothic,
}

impl StandardFont {
    pub const ALL: [StandardFont; 5] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::HelveticaOblique,
        StandardFont::CourierBold,
        StandardFont::KakuGothic,
    ];

    pub fn postscript_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::KakuGothic => "HeiseiKakuGo-W5",
        }
    }

    /// True for fonts addressed by two-byte CIDs rather than WinAnsi bytes.
    pub fn is_cid(self) -> bool {
        self == StandardFont::KakuGothic
    }

    /// This font, or the gothic face when `text` has characters outside WinAnsi.
    pub fn for_text(self, text: &str) -> StandardFont {
        if self.is_cid() || is_win_ansi(text) {
            self
        } else {
            StandardFont::KakuGothic
        }
    }

    /// Approximate advance width of `c`, as a fraction of the font size.
    pub fn char_width(self, c: char) -> f32 {
        match self {
            StandardFont::CourierBold => 0.6,
            StandardFont::HelveticaBold => 0.58,
            StandardFont::Helvetica | StandardFont::HelveticaOblique => 0.52,
            StandardFont::KakuGothic if is_wide(c) => 1.0,
            StandardFont::KakuGothic => 0.5,
        }
    }

    pub fn text_width(self, text: &str, font_size: f32) -> f32 {
        text.chars().map(|c| self.char_width(c)).sum::<f32>() * font_size
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: StandardFont,
    pub font_size: f32,
    pub color: Color,
    pub align: TextAlign,
    pub space_before: f32,
    pub space_after: f32,
    pub indent: f32,
    /// Padding inside the background band, if any.
    pub padding: f32,
    pub background: Option<Color>,
}

impl TextStyle {
    fn plain(font: StandardFont, font_size: u32) -> Self {
        Self {
            font,
            font_size: font_size as f32,
            color: Color::BLACK,
            align: TextAlign::Left,
            space_before: 0.0,
            space_after: 0.0,
            indent: 0.0,
            padding: 0.0,
            background: None,
        }
    }

    pub fn leading(&self) -> f32 {
        self.font_size * 1.2
    }

    /// Height of the text band, padding included.
    pub fn band_height(&self) -> f32 {
        self.leading() + 2.0 * self.padding
    }

    /// Total vertical space the styled line occupies, spacing included.
    pub fn block_height(&self) -> f32 {
        self.space_before + self.band_height() + self.space_after
    }
}

/// Styles for each kind of content on the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStyles {
    pub title: TextStyle,
    pub section_header: TextStyle,
    pub subsection_header: TextStyle,
    pub key: TextStyle,
    pub description: TextStyle,
}

impl SheetStyles {
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            title: TextStyle {
                align: TextAlign::Center,
                space_after: 15.0,
                ..TextStyle::plain(StandardFont::HelveticaBold, config.header_font_size + 3)
            },
            section_header: TextStyle {
                color: Color::WHITE,
                align: TextAlign::Center,
                space_before: 8.0,
                space_after: 4.0,
                padding: 4.0,
                background: Some(Color::BLACK),
                ..TextStyle::plain(StandardFont::HelveticaBold, config.header_font_size + 1)
            },
            subsection_header: TextStyle {
                space_before: 5.0,
                space_after: 3.0,
                indent: 8.0,
                ..TextStyle::plain(StandardFont::HelveticaOblique, config.font_size + 1)
            },
            key: TextStyle::plain(StandardFont::CourierBold, config.font_size),
            description: TextStyle::plain(StandardFont::Helvetica, config.font_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_sizes_follow_config() {
        let config = LayoutConfig { font_size: 12, header_font_size: 16, ..LayoutConfig::default() };
        let styles = SheetStyles::from_config(&config);
        assert_eq!(styles.key.font_size, 12.0);
        assert_eq!(styles.description.font_size, 12.0);
        assert_eq!(styles.subsection_header.font_size, 13.0);
        assert_eq!(styles.section_header.font_size, 17.0);
        assert_eq!(styles.title.font_size, 19.0);
    }

    #[test]
    fn test_font_fallback_for_japanese_text() {
        assert_eq!(StandardFont::Helvetica.for_text("Copy"), StandardFont::Helvetica);
        assert_eq!(StandardFont::CourierBold.for_text("Ctrl+’"), StandardFont::CourierBold);
        assert_eq!(StandardFont::Helvetica.for_text("コピー"), StandardFont::KakuGothic);
        assert!(StandardFont::KakuGothic.is_cid());
    }

    #[test]
    fn test_gothic_widths() {
        let font = StandardFont::KakuGothic;
        assert_eq!(font.text_width("コピー", 10.0), 30.0);
        assert_eq!(font.text_width("Ctrl+コ", 10.0), 35.0);
    }

    #[test]
    fn test_section_header_band() {
        let styles = SheetStyles::from_config(&LayoutConfig::default());
        let header = &styles.section_header;
        assert_eq!(header.background, Some(Color::BLACK));
        assert!((header.band_height() - (13.0 * 1.2 + 8.0)).abs() < 0.001);
        assert!((header.block_height() - (header.band_height() + 12.0)).abs() < 0.001);
    }
}
