use crate::style::{StandardFont, TextAlign};
use cheatsheet_types::Color;

/// An element placed on a page. Coordinates are in points from the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rectangle(RectElement),
    /// A horizontal line along the bottom edge of the element box.
    Rule(RuleElement),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font: StandardFont,
    pub font_size: f32,
    pub color: Color,
    pub align: TextAlign,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectElement {
    pub fill: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RuleElement {
    pub thickness: f32,
    pub color: Color,
}

impl PositionedElement {
    pub fn as_text(&self) -> Option<&TextElement> {
        match &self.element {
            LayoutElement::Text(text) => Some(text),
            _ => None,
        }
    }
}
