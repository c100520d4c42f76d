/// Square grid of QR modules produced by an encoder. `true` marks a dark
/// module. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    size: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Builds a `size` x `size` matrix, asking `is_dark(row, col)` for every
    /// module in row-major order.
    pub fn from_fn(size: usize, mut is_dark: impl FnMut(usize, usize) -> bool) -> Self {
        let mut modules = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                modules.push(is_dark(row, col));
            }
        }
        Self { size, modules }
    }

    /// Modules per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns whether the module at (`row`, `col`) is dark. Coordinates
    /// outside the matrix are light.
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        self.modules[row * self.size + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_is_row_major() {
        let matrix = ModuleMatrix::from_fn(3, |row, col| row == 0 && col == 2);

        assert_eq!(matrix.size(), 3);
        assert!(matrix.is_dark(0, 2));
        assert!(!matrix.is_dark(2, 0));
    }

    #[test]
    fn out_of_bounds_is_light() {
        let matrix = ModuleMatrix::from_fn(2, |_, _| true);

        assert!(matrix.is_dark(1, 1));
        assert!(!matrix.is_dark(2, 0));
        assert!(!matrix.is_dark(0, 2));
    }
}
