//! Fixed-column grid geometry.

use crate::config::engine_config::ConfigError;

/// Validated grid geometry shared by projection and rendering.
///
/// # Invariants
/// - `columns > 0`.
/// - `cell_size` is positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    columns: usize,
    cell_size: f64,
}

impl GridLayout {
    /// Derives the cell size from the available viewport width.
    ///
    /// # Errors
    /// - `ZeroColumns` when `columns == 0`.
    /// - `InvalidViewportWidth` when the width is not positive and finite.
    pub fn from_viewport(columns: usize, viewport_width: f64) -> Result<Self, ConfigError> {
        if columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if !viewport_width.is_finite() || viewport_width <= 0.0 {
            return Err(ConfigError::InvalidViewportWidth(viewport_width));
        }
        Ok(Self {
            columns,
            cell_size: viewport_width / columns as f64,
        })
    }

    /// Uses a caller-chosen cell size directly.
    pub fn with_cell_size(columns: usize, cell_size: f64) -> Result<Self, ConfigError> {
        if columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize(cell_size));
        }
        Ok(Self { columns, cell_size })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Returns `(row, col)` for a zero-based sequence index.
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Number of grid rows needed for `count` cells.
    pub fn rows_for(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }

    /// Top-left corner of a cell in surface coordinates.
    pub fn cell_origin(&self, row: usize, col: usize) -> (f64, f64) {
        (col as f64 * self.cell_size, row as f64 * self.cell_size)
    }

    /// Surface `(width, height)` for `count` cells.
    pub fn surface_size(&self, count: usize) -> (f64, f64) {
        (
            self.columns as f64 * self.cell_size,
            self.rows_for(count) as f64 * self.cell_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::GridLayout;
    use crate::config::engine_config::ConfigError;

    #[test]
    fn cell_size_divides_viewport_width() {
        let layout = GridLayout::from_viewport(10, 600.0).unwrap();
        assert_eq!(layout.cell_size(), 60.0);
        assert_eq!(layout.surface_size(25), (600.0, 180.0));
    }

    #[test]
    fn rows_round_up() {
        let layout = GridLayout::with_cell_size(3, 10.0).unwrap();
        assert_eq!(layout.rows_for(0), 0);
        assert_eq!(layout.rows_for(3), 1);
        assert_eq!(layout.rows_for(4), 2);
    }

    #[test]
    fn position_wraps_by_columns() {
        let layout = GridLayout::with_cell_size(4, 5.0).unwrap();
        assert_eq!(layout.position(0), (0, 0));
        assert_eq!(layout.position(5), (1, 1));
        assert_eq!(layout.cell_origin(1, 1), (5.0, 5.0));
    }

    #[test]
    fn rejects_degenerate_geometry() {
        assert_eq!(
            GridLayout::from_viewport(0, 100.0).unwrap_err(),
            ConfigError::ZeroColumns
        );
        assert_eq!(
            GridLayout::from_viewport(5, 0.0).unwrap_err(),
            ConfigError::InvalidViewportWidth(0.0)
        );
        assert!(GridLayout::with_cell_size(5, f64::NAN).is_err());
    }
}
