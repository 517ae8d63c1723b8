use crate::config::LayoutConfig;

/// An axis-aligned rectangle in page units, origin at the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Swaps width and height.
    pub fn landscape(self) -> Self {
        if self.width >= self.height {
            self
        } else {
            Self::new(self.height, self.width)
        }
    }
}

/// Portrait A4 width in points (210 mm).
pub const A4_WIDTH_PT: f64 = 595.2755905511812;
/// Portrait A4 height in points (297 mm).
pub const A4_HEIGHT_PT: f64 = 841.8897637795277;

/// A4 in points, portrait.
pub const A4: Size = Size::new(A4_WIDTH_PT as f32, A4_HEIGHT_PT as f32);

/// Horizontal space between two adjacent columns.
pub const COLUMN_GUTTER: f32 = 15.0;

/// Fixed page template: landscape A4, a uniform margin and equal-width columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_size: Size,
    pub margin: f32,
    pub columns: u32,
    pub gutter: f32,
}

impl PageGeometry {
    pub fn landscape_a4(config: &LayoutConfig) -> Self {
        Self {
            page_size: A4.landscape(),
            margin: config.margin as f32,
            columns: config.columns.max(1),
            gutter: COLUMN_GUTTER,
        }
    }

    /// Content height of a landscape A4 page with `margin`, at full precision.
    pub fn landscape_content_height(margin: f64) -> f64 {
        A4_WIDTH_PT - 2.0 * margin
    }

    pub fn usable_width(&self) -> f32 {
        self.page_size.width - 2.0 * self.margin
    }

    pub fn usable_height(&self) -> f32 {
        self.page_size.height - 2.0 * self.margin
    }

    pub fn column_width(&self) -> f32 {
        let columns = self.columns.max(1) as f32;
        (self.usable_width() - (columns - 1.0) * self.gutter) / columns
    }

    /// The frame occupied by column `index` (0-based, left to right).
    pub fn column_rect(&self, index: u32) -> Rect {
        let width = self.column_width();
        Rect {
            x: self.margin + index as f32 * (width + self.gutter),
            y: self.margin,
            width,
            height: self.usable_height(),
        }
    }
}
