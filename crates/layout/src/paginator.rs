//! Flows the planned content stream through column frames and pages.
//!
//! Frames are filled top to bottom, columns left to right, then a new page
//! starts. Headers never split, tables split between rows, and an atomic
//! block moves to a fresh frame when it would otherwise straddle a break.

use crate::LayoutError;
use crate::blocks::{ContentBlock, TableBlock};
use crate::elements::{LayoutElement, PositionedElement, RectElement, RuleElement, TextElement};
use crate::style::{SheetStyles, TextStyle};
use crate::text::fit_text;
use cheatsheet_types::{Color, LayoutConfig, PageGeometry, Rect};

/// Horizontal padding between a column's edge and its content.
pub const FRAME_PADDING_X: f32 = 3.0;
/// Vertical padding between a column's edge and its content.
pub const FRAME_PADDING_Y: f32 = 6.0;
/// Horizontal padding inside each table cell.
const CELL_PADDING_X: f32 = 3.0;
const CELL_PADDING_TOP: f32 = 1.0;
const ROW_RULE_THICKNESS: f32 = 0.25;
/// Slack allowed when deciding whether content fits the rest of a frame.
const FIT_TOLERANCE: f32 = 0.01;

/// A laid-out page.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub elements: Vec<PositionedElement>,
}

impl Page {
    pub fn texts(&self) -> impl Iterator<Item = &TextElement> {
        self.elements.iter().filter_map(PositionedElement::as_text)
    }
}

pub struct Paginator {
    geometry: PageGeometry,
    styles: SheetStyles,
    row_height: f32,
}

impl Paginator {
    pub fn new(config: &LayoutConfig) -> Result<Self, LayoutError> {
        let geometry = PageGeometry::landscape_a4(config);
        let frame_width = geometry.column_width() - 2.0 * FRAME_PADDING_X;
        let frame_height = geometry.usable_height() - 2.0 * FRAME_PADDING_Y;
        if frame_width <= 0.0 || frame_height <= 0.0 {
            return Err(LayoutError::InvalidGeometry(frame_width, frame_height));
        }
        Ok(Self {
            geometry,
            styles: SheetStyles::from_config(config),
            row_height: config.row_height as f32,
        })
    }

    pub fn geometry(&self) -> PageGeometry {
        self.geometry
    }

    /// The content area of column `index`, inside the frame padding.
    pub fn frame(&self, index: u32) -> Rect {
        let column = self.geometry.column_rect(index);
        Rect {
            x: column.x + FRAME_PADDING_X,
            y: column.y + FRAME_PADDING_Y,
            width: column.width - 2.0 * FRAME_PADDING_X,
            height: column.height - 2.0 * FRAME_PADDING_Y,
        }
    }

    /// Vertical space a block needs when placed in one piece.
    pub fn measure(&self, block: &ContentBlock) -> f32 {
        match block {
            ContentBlock::Title(_) => self.styles.title.block_height(),
            ContentBlock::SectionHeader(_) => self.styles.section_header.block_height(),
            ContentBlock::SubsectionHeader(_) => self.styles.subsection_header.block_height(),
            ContentBlock::Table(table) => table.rows.len() as f32 * self.row_height,
            ContentBlock::Spacer(height) => *height,
            ContentBlock::Atomic(children) => children.iter().map(|c| self.measure(c)).sum(),
        }
    }

    /// Lays the blocks out into pages. Always returns at least one page.
    pub fn paginate(&self, blocks: &[ContentBlock]) -> Vec<Page> {
        let mut flow = FlowState::new(self);
        for block in blocks {
            flow.place(block);
        }
        log::debug!("Paginated {} blocks into {} pages", blocks.len(), flow.pages.len());
        flow.pages
    }
}

struct FlowState<'p> {
    paginator: &'p Paginator,
    pages: Vec<Page>,
    column: u32,
    cursor_y: f32,
    frame_has_content: bool,
}

impl<'p> FlowState<'p> {
    fn new(paginator: &'p Paginator) -> Self {
        Self {
            paginator,
            pages: vec![Page::default()],
            column: 0,
            cursor_y: 0.0,
            frame_has_content: false,
        }
    }

    fn frame(&self) -> Rect {
        self.paginator.frame(self.column)
    }

    fn remaining(&self) -> f32 {
        (self.frame().height - self.cursor_y).max(0.0)
    }

    fn fits(&self, height: f32) -> bool {
        height <= self.remaining() + FIT_TOLERANCE
    }

    fn next_frame(&mut self) {
        self.column += 1;
        if self.column >= self.paginator.geometry.columns {
            self.column = 0;
            self.pages.push(Page::default());
        }
        self.cursor_y = 0.0;
        self.frame_has_content = false;
    }

    /// Breaks to the next frame unless `height` fits or the frame is still empty.
    fn ensure_room(&mut self, height: f32) {
        if self.frame_has_content && !self.fits(height) {
            self.next_frame();
        }
    }

    fn push(&mut self, element: PositionedElement) {
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }

    fn place(&mut self, block: &ContentBlock) {
        let paginator = self.paginator;
        let styles = &paginator.styles;
        match block {
            ContentBlock::Spacer(height) => self.place_spacer(*height),
            ContentBlock::Title(text) => self.place_line(text, &styles.title),
            ContentBlock::SectionHeader(text) => self.place_line(text, &styles.section_header),
            ContentBlock::SubsectionHeader(text) => {
                self.place_line(text, &styles.subsection_header)
            }
            ContentBlock::Table(table) => self.place_table(table),
            ContentBlock::Atomic(children) => {
                let height = self.paginator.measure(block);
                let frame_height = self.frame().height;
                // Content taller than a whole frame has to split anyway.
                if self.frame_has_content && !self.fits(height) && height <= frame_height {
                    self.next_frame();
                }
                for child in children {
                    self.place(child);
                }
            }
        }
    }

    fn place_spacer(&mut self, height: f32) {
        if !self.frame_has_content {
            return;
        }
        if self.fits(height) {
            self.cursor_y += height;
        } else {
            self.next_frame();
        }
    }

    fn place_line(&mut self, content: &str, style: &TextStyle) {
        self.ensure_room(style.block_height());
        let frame = self.frame();
        let space_before = if self.frame_has_content { style.space_before } else { 0.0 };
        let band_top = frame.y + self.cursor_y + space_before;
        let band_height = style.band_height();

        if let Some(fill) = style.background {
            self.push(PositionedElement {
                x: frame.x,
                y: band_top,
                width: frame.width,
                height: band_height,
                element: LayoutElement::Rectangle(RectElement { fill }),
            });
        }

        let text_width = frame.width - style.indent - 2.0 * style.padding;
        let font = style.font.for_text(content);
        let fitted = fit_text(content, font, style.font_size, text_width);
        self.push(PositionedElement {
            x: frame.x + style.indent + style.padding,
            y: band_top + style.padding,
            width: text_width,
            height: style.leading(),
            element: LayoutElement::Text(TextElement {
                content: fitted.into_owned(),
                font,
                font_size: style.font_size,
                color: style.color,
                align: style.align,
            }),
        });

        self.cursor_y += space_before + band_height + style.space_after;
        self.frame_has_content = true;
    }

    fn place_table(&mut self, table: &TableBlock) {
        let last_row = table.rows.len().saturating_sub(1);
        for (index, (key, description)) in table.rows.iter().enumerate() {
            self.ensure_room(self.paginator.row_height);
            self.place_row(table, key, description, index < last_row);
        }
    }

    fn place_row(&mut self, table: &TableBlock, key: &str, description: &str, rule_below: bool) {
        let frame = self.frame();
        let row_top = frame.y + self.cursor_y;
        let row_height = self.paginator.row_height;
        let [key_width, description_width] = table.column_widths;
        let paginator = self.paginator;
        self.push_cell(key, &paginator.styles.key, frame.x, row_top, key_width);
        self.push_cell(
            description,
            &paginator.styles.description,
            frame.x + key_width,
            row_top,
            description_width,
        );

        if rule_below {
            self.push(PositionedElement {
                x: frame.x,
                y: row_top,
                width: table.width(),
                height: row_height,
                element: LayoutElement::Rule(RuleElement {
                    thickness: ROW_RULE_THICKNESS,
                    color: Color::LIGHT_GREY,
                }),
            });
        }

        self.cursor_y += row_height;
        self.frame_has_content = true;
    }

    fn push_cell(&mut self, content: &str, style: &TextStyle, x: f32, row_top: f32, cell_width: f32) {
        let width = cell_width - 2.0 * CELL_PADDING_X;
        let font = style.font.for_text(content);
        let fitted = fit_text(content, font, style.font_size, width);
        if fitted.len() != content.len() {
            log::debug!("Truncated cell text '{}' to fit {:.1} units", content, width);
        }
        self.push(PositionedElement {
            x: x + CELL_PADDING_X,
            y: row_top + CELL_PADDING_TOP,
            width,
            height: style.leading(),
            element: LayoutElement::Text(TextElement {
                content: fitted.into_owned(),
                font,
                font_size: style.font_size,
                color: style.color,
                align: style.align,
            }),
        });
    }
}
