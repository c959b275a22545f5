//! Canvas geometry.
//!
//! All coordinates are logical canvas pixels with the origin at the top-left
//! corner of the header. The presentation layer scales this canvas to the
//! window; the game itself never sees screen coordinates.

use crate::GridShape;

/// A pointer position in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: f32,
    /// Vertical offset from the top edge.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A square tile area in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRect {
    x: i32,
    y: i32,
    size: i32,
}

impl TileRect {
    /// Creates a square with its top-left corner at `(x, y)`.
    #[must_use]
    pub const fn new(x: i32, y: i32, size: i32) -> Self {
        Self { x, y, size }
    }

    /// Left edge.
    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Top edge.
    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Edge length.
    #[must_use]
    pub const fn size(self) -> i32 {
        self.size
    }

    /// Returns `true` if `point` lies inside the square.
    ///
    /// The left and top edges are inclusive, the right and bottom edges
    /// exclusive, so adjacent squares never both contain a point.
    ///
    /// # Examples
    ///
    /// ```
    /// use ayumu_core::{Point, TileRect};
    ///
    /// let rect = TileRect::new(10, 10, 20);
    /// assert!(rect.contains(Point::new(10.0, 10.0)));
    /// assert!(rect.contains(Point::new(29.5, 29.5)));
    /// assert!(!rect.contains(Point::new(30.0, 15.0)));
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn contains(self, point: Point) -> bool {
        let (left, top) = (self.x as f32, self.y as f32);
        let (right, bottom) = ((self.x + self.size) as f32, (self.y + self.size) as f32);
        (left..right).contains(&point.x) && (top..bottom).contains(&point.y)
    }
}

/// Fixed dimensions of the game canvas.
///
/// The canvas is a header strip, a square-ish play area and a footer strip,
/// stacked vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Width of the play area (and of the whole canvas).
    pub area_width: i32,
    /// Height of the play area.
    pub area_height: i32,
    /// Height of the header strip above the play area.
    pub header_height: i32,
    /// Height of the footer strip below the play area.
    pub footer_height: i32,
    /// Inset applied to every tile on each side of its cell.
    pub padding: i32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            area_width: 600,
            area_height: 600,
            header_height: 80,
            footer_height: 80,
            padding: 10,
        }
    }
}

impl BoardLayout {
    /// Total canvas width.
    #[must_use]
    pub const fn canvas_width(&self) -> i32 {
        self.area_width
    }

    /// Total canvas height (header, play area and footer).
    #[must_use]
    pub const fn canvas_height(&self) -> i32 {
        self.header_height + self.area_height + self.footer_height
    }

    /// Top edge of the footer strip.
    #[must_use]
    pub const fn footer_top(&self) -> i32 {
        self.header_height + self.area_height
    }

    /// Edge length of one grid cell for `shape`.
    ///
    /// Cells are square, sized so the whole grid fits the play area:
    /// `min(area_width / cols, area_height / rows)` with floor division.
    #[must_use]
    pub fn cell_size(&self, shape: GridShape) -> i32 {
        let by_cols = self.area_width / i32::from(shape.cols());
        let by_rows = self.area_height / i32::from(shape.rows());
        by_cols.min(by_rows)
    }

    /// Returns the tile square for the cell at `(row, col)`.
    ///
    /// The grid block is centered in the play area, and the tile is inset by
    /// [`padding`](Self::padding) within its cell.
    #[must_use]
    pub fn tile_rect(&self, shape: GridShape, row: u8, col: u8) -> TileRect {
        let cell = self.cell_size(shape);
        let start_x = (self.area_width - i32::from(shape.cols()) * cell) / 2;
        let start_y = (self.area_height - i32::from(shape.rows()) * cell) / 2;
        TileRect::new(
            start_x + i32::from(col) * cell + self.padding,
            self.header_height + start_y + i32::from(row) * cell + self.padding,
            cell - self.padding * 2,
        )
    }

    /// Iterates tile squares in row-major order.
    pub fn tile_rects(&self, shape: GridShape) -> impl Iterator<Item = TileRect> + '_ {
        (0..shape.rows())
            .flat_map(move |row| (0..shape.cols()).map(move |col| (row, col)))
            .map(move |(row, col)| self.tile_rect(shape, row, col))
    }
}
