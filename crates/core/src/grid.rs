//! Grid module - the occupancy grid and the collision query
//!
//! The grid is a W x H field of blocked/free cells stored as a flat,
//! row-major vector. Coordinates: (x, z) where x runs left to right and z
//! runs top to bottom in the minimap.
//!
//! [`OccupancyGrid::is_blocked`] is the single collision predicate used for
//! wall detection, movement validation and the minimap sight-line.

/// A fixed-size 2D field of blocked/free cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (z * width + x)
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Create a grid with every cell free
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Create a grid whose outermost ring of cells is blocked
    pub fn bordered(width: usize, height: usize) -> Self {
        let mut grid = Self::new(width, height);
        for z in 0..height {
            for x in 0..width {
                if z == 0 || z + 1 == height || x == 0 || x + 1 == width {
                    grid.set_blocked(x, z, true);
                }
            }
        }
        grid
    }

    /// Parse a grid from text rows where `#` marks a blocked cell.
    ///
    /// Rows shorter than the longest row are padded with free cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_raycaster_core::OccupancyGrid;
    ///
    /// let grid = OccupancyGrid::from_ascii("###\n#.#\n###");
    /// assert_eq!(grid.width(), 3);
    /// assert!(grid.is_blocked(0.5, 0.5));
    /// assert!(!grid.is_blocked(1.5, 1.5));
    /// ```
    pub fn from_ascii(text: &str) -> Self {
        let rows: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(width, rows.len());
        for (z, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                grid.set_blocked(x, z, ch == '#');
            }
        }
        grid
    }

    #[inline(always)]
    fn index(&self, x: i64, z: i64) -> Option<usize> {
        if x < 0 || z < 0 || x >= self.width as i64 || z >= self.height as i64 {
            return None;
        }
        Some((z as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Mark a cell blocked or free. Out-of-range cells are ignored.
    pub fn set_blocked(&mut self, x: usize, z: usize, blocked: bool) {
        if x < self.width && z < self.height {
            self.cells[z * self.width + x] = blocked;
        }
    }

    /// Cell state at integer coordinates, `None` when out of bounds
    pub fn cell(&self, x: i64, z: i64) -> Option<bool> {
        self.index(x, z).map(|i| self.cells[i])
    }

    /// Collision query for a continuous position.
    ///
    /// Coordinates are floored to cell indices. Anything outside the grid
    /// counts as blocked.
    #[inline]
    pub fn is_blocked(&self, x: f32, z: f32) -> bool {
        if !x.is_finite() || !z.is_finite() {
            return true;
        }
        // Huge values saturate to out-of-range indices.
        self.cell(x.floor() as i64, z.floor() as i64).unwrap_or(true)
    }

    /// Number of blocked cells
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
