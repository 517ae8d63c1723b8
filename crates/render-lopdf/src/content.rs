//! Converts positioned layout elements into PDF content stream operations.

use cheatsheet_layout::{
    LayoutElement, PositionedElement, RectElement, RuleElement, StandardFont, TextAlign, TextElement,
    is_win_ansi, win_ansi_byte,
};
use cheatsheet_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Distance from the top of a text line to its baseline, as a fraction of the font size.
const BASELINE_RATIO: f32 = 0.8;

/// Resource name under which `font` is registered on every page.
pub fn font_resource_name(font: StandardFont) -> String {
    let index = StandardFont::ALL.iter().position(|f| *f == font).unwrap_or(0);
    format!("F{}", index + 1)
}

/// Encodes text for the WinAnsi-encoded Latin fonts. Characters outside
/// WinAnsi become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(|c| win_ansi_byte(c).unwrap_or(b'?')).collect()
}

/// Encodes text as big-endian UCS-2 codes for the `UniJIS-UCS2-H` CMap.
/// Characters outside the Basic Multilingual Plane become `?`.
pub fn to_ucs2(s: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(s.len() * 2);
    for c in s.chars() {
        let code = u16::try_from(c as u32).unwrap_or(u16::from(b'?'));
        bytes.extend_from_slice(&code.to_be_bytes());
    }
    bytes
}

/// The string operand drawing `text` in `font`.
pub fn encode_text(font: StandardFont, text: &str) -> Object {
    if font.is_cid() {
        if text.chars().any(|c| c as u32 > 0xFFFF) {
            log::warn!("'{}' has characters outside the BMP; they are drawn as '?'", text);
        }
        Object::String(to_ucs2(text), StringFormat::Hexadecimal)
    } else {
        if !is_win_ansi(text) {
            log::warn!("'{}' has characters outside WinAnsi; they are drawn as '?'", text);
        }
        Object::String(to_win_ansi(text), StringFormat::Literal)
    }
}

pub(crate) struct PageContext {
    page_height: f32,
    operations: Vec<Operation>,
}

impl PageContext {
    pub(crate) fn new(page_height: f32) -> Self {
        Self { page_height, operations: Vec::new() }
    }

    pub(crate) fn finish(self) -> Content {
        Content { operations: self.operations }
    }

    pub(crate) fn draw_element(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Rectangle(rect) => self.draw_rect(rect, el),
            LayoutElement::Rule(rule) => self.draw_rule(rule, el),
        }
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    fn color_operands(color: Color) -> Vec<Object> {
        color.to_unit_rgb().into_iter().map(Object::from).collect()
    }

    fn draw_rect(&mut self, rect: &RectElement, el: &PositionedElement) {
        let y = self.page_height - (el.y + el.height);
        self.op("rg", Self::color_operands(rect.fill));
        self.op("re", vec![el.x.into(), y.into(), el.width.into(), el.height.into()]);
        self.op("f", vec![]);
    }

    fn draw_rule(&mut self, rule: &RuleElement, el: &PositionedElement) {
        let line_y = self.page_height - (el.y + el.height);
        self.op("w", vec![rule.thickness.into()]);
        self.op("RG", Self::color_operands(rule.color));
        self.op("m", vec![el.x.into(), line_y.into()]);
        self.op("l", vec![(el.x + el.width).into(), line_y.into()]);
        self.op("S", vec![]);
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) {
        if text.content.trim().is_empty() {
            return;
        }
        let x = match text.align {
            TextAlign::Left => el.x,
            TextAlign::Center => {
                let text_width = text.font.text_width(&text.content, text.font_size);
                el.x + ((el.width - text_width) / 2.0).max(0.0)
            }
        };
        let baseline_y = self.page_height - (el.y + text.font_size * BASELINE_RATIO);
        let font_name = font_resource_name(text.font);

        self.op("BT", vec![]);
        self.op("Tf", vec![Object::Name(font_name.into_bytes()), text.font_size.into()]);
        self.op("rg", Self::color_operands(text.color));
        self.op("Td", vec![x.into(), baseline_y.into()]);
        self.op("Tj", vec![encode_text(text.font, &text.content)]);
        self.op("ET", vec![]);
    }
}
