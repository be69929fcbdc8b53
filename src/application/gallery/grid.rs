// SPDX-License-Identifier: MPL-2.0
//! Grid layout built from an image set and a size class.
//!
//! The layout is a pure projection: rendering twice with the same inputs
//! yields equal layouts, and nothing is remembered between calls. Callers
//! replace the whole layout whenever the size class or image set changes.

use crate::domain::error::GalleryError;
use crate::domain::gallery::{ImageIndex, ImageSet, SizeClass};

/// Well-known identifier of the rendered grid.
pub const GRID_ID: &str = "imagesGrid";

/// One grid cell bound to one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// Row-major position, also the image's index in the set.
    pub index: ImageIndex,
    pub row: usize,
    pub column: usize,
    pub url: String,
}

/// Eight cells arranged for a size class, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    size_class: SizeClass,
    rows: usize,
    columns: usize,
    cells: Vec<GridCell>,
}

impl GridLayout {
    #[must_use]
    pub fn id(&self) -> &'static str {
        GRID_ID
    }

    #[must_use]
    pub fn size_class(&self) -> SizeClass {
        self.size_class
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Cells of one row, left to right. Empty if `row` is past the last row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[GridCell] {
        row.checked_mul(self.columns)
            .and_then(|start| Some(start..start.checked_add(self.columns)?))
            .and_then(|range| self.cells.get(range))
            .unwrap_or_default()
    }

    /// Iterates over rows from top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(self.columns)
    }

    /// The cell bound to the given image.
    #[must_use]
    pub fn cell(&self, index: ImageIndex) -> &GridCell {
        &self.cells[index.value()]
    }

    /// URLs in row-major cell order.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|cell| cell.url.as_str())
    }
}

/// Builds grid layouts. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridRenderer;

impl GridRenderer {
    /// Lays out `urls` for `size`.
    ///
    /// Fails with [`GalleryError::WrongImageCount`] unless exactly eight
    /// URLs are given; no layout is produced in that case.
    pub fn render<S: AsRef<str>>(urls: &[S], size: SizeClass) -> Result<GridLayout, GalleryError> {
        let set = ImageSet::from_urls(urls.iter().map(|url| url.as_ref().to_owned()))?;
        Ok(Self::render_set(&set, size))
    }

    /// Lays out an already validated image set.
    #[must_use]
    pub fn render_set(images: &ImageSet, size: SizeClass) -> GridLayout {
        let (rows, columns) = size.grid_shape();
        let cells = images
            .iter()
            .map(|(index, url)| GridCell {
                index,
                row: index.value() / columns,
                column: index.value() % columns,
                url: url.to_owned(),
            })
            .collect();

        GridLayout {
            size_class: size,
            rows,
            columns,
            cells,
        }
    }
}

/// Shorthand for [`GridRenderer::render`].
pub fn render<S: AsRef<str>>(urls: &[S], size: SizeClass) -> Result<GridLayout, GalleryError> {
    GridRenderer::render(urls, size)
}
