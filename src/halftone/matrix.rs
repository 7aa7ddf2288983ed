//! Fixed ordered-dither threshold cells.
//!
//! Each table is a permutation of `1..=max_level` laid out so that raising
//! the level turns pixels white in clustered-dot growth order. A pixel is
//! white when `level >= threshold`.

/// One repeating dither cell.
#[derive(Debug)]
pub struct ThresholdMatrix {
    rows: usize,
    cols: usize,
    max_level: u8,
    cells: &'static [u8],
}

impl ThresholdMatrix {
    const fn new(rows: usize, cols: usize, max_level: u8, cells: &'static [u8]) -> Self {
        assert!(cells.len() == rows * cols);
        Self {
            rows,
            cols,
            max_level,
            cells,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of distinct levels the cell discriminates.
    #[inline]
    pub fn max_level(&self) -> u8 {
        self.max_level
    }

    #[inline]
    pub fn threshold(&self, k: usize, l: usize) -> u8 {
        self.cells[k * self.cols + l]
    }

    pub fn row(&self, k: usize) -> &'static [u8] {
        &self.cells[k * self.cols..(k + 1) * self.cols]
    }

    pub fn cells(&self) -> &'static [u8] {
        self.cells
    }

    /// Rescale an 8-bit intensity to `0..=max_level`, rounding up:
    /// `ceil(intensity / 255 * max_level)`.
    #[inline]
    pub fn level(&self, intensity: u8) -> u8 {
        (intensity as u32 * self.max_level as u32).div_ceil(255) as u8
    }
}

/// 12×12 cell for the 0° screen, levels 1..=144.
#[rustfmt::skip]
pub static ORTHOGONAL: ThresholdMatrix = ThresholdMatrix::new(12, 12, 144, &[
    144, 140, 132, 122, 107,  63,  54,  93, 106, 123, 133, 142,
    143, 137, 128, 104,  94,  41,  31,  65,  98, 116, 120, 139,
    135, 131, 114,  97,  61,  35,  24,  55,  80, 103, 113, 125,
    126, 117,  88,  83,  56,  29,  15,  51,  68,  90,  99, 111,
    109, 100,  81,  77,  48,  22,   8,  28,  47,  76,  85,  96,
     91,  44,  16,  12,   9,   3,   5,  21,  25,  33,  37,  73,
     59,  58,  30,  18,  10,   1,   2,   4,  11,  19,  34,  42,
     92,  64,  57,  52,  26,   6,   7,  14,  32,  46,  53,  74,
    101,  95,  70,  67,  38,  13,  20,  36,  50,  75,  82, 108,
    121, 110,  86,  78,  45,  17,  27,  39,  69,  79, 102, 119,
    134, 129, 112,  89,  49,  23,  43,  60,  71,  87, 115, 127,
    141, 138, 124, 118,  66,  40,  62,  72,  84, 105, 130, 136,
]);

/// 8×16 cell for the 45° screen, levels 1..=128. Odd bands of 8 rows are
/// read with an 8-column shift, which turns the two half-cells into a
/// diagonal dot lattice.
#[rustfmt::skip]
pub static DIAGONAL: ThresholdMatrix = ThresholdMatrix::new(8, 16, 128, &[
    128, 120, 109,  92,  74,  66,  46,   8,  15,  10,  64,  79,  97, 111, 122, 127,
    123, 116,  87,  69,  62,  38,   6,  39,  42,   3,  19,  55,  86, 105, 115, 119,
    107,  96,  71,  59,  24,  12,  28,  52,  63,  47,  20,   1,  58,  95, 108, 112,
     84,  73,  56,   2,  18,  23,  48,  78,  82,  67,  35,   5,  31,  61,  91, 101,
     77,  53,  32,   4,  25,  43,  75,  85, 100,  89,  60,  30,   9,  34,  68,  80,
     51,  41,  21,  27,  40,  70,  94, 102, 110, 103,  93,  57,  26,  11,  37,  65,
     44,  29,  33,  45,  72,  90, 104, 121, 117, 114, 106,  88,  54,  17,  13,  16,
     14,  36,  49,  76,  83,  98, 118, 126, 125, 124, 113,  99,  81,  50,  22,   7,
]);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_permutation(m: &ThresholdMatrix) {
        let mut seen = vec![false; m.max_level() as usize + 1];
        for &v in m.cells() {
            assert!((1..=m.max_level()).contains(&v), "value {v} out of range");
            assert!(!seen[v as usize], "value {v} repeated");
            seen[v as usize] = true;
        }
        assert_eq!(m.cells().len(), m.max_level() as usize);
    }

    #[test]
    fn tables_are_permutations_of_their_levels() {
        assert_permutation(&ORTHOGONAL);
        assert_permutation(&DIAGONAL);
    }

    #[test]
    fn dots_grow_from_the_cell_centre() {
        assert_eq!(ORTHOGONAL.threshold(6, 5), 1);
        assert_eq!(ORTHOGONAL.threshold(0, 0), 144);
        assert_eq!(DIAGONAL.threshold(2, 11), 1);
        assert_eq!(DIAGONAL.threshold(0, 0), 128);
    }

    #[test]
    fn level_rounds_up() {
        assert_eq!(ORTHOGONAL.level(0), 0);
        assert_eq!(ORTHOGONAL.level(1), 1);
        assert_eq!(ORTHOGONAL.level(85), 48);
        assert_eq!(ORTHOGONAL.level(86), 49);
        assert_eq!(ORTHOGONAL.level(255), 144);
        assert_eq!(DIAGONAL.level(128), 65);
        assert_eq!(DIAGONAL.level(255), 128);
    }

    #[test]
    fn level_matches_float_formula() {
        for m in [&ORTHOGONAL, &DIAGONAL] {
            for v in 0..=255u8 {
                let float = (v as f64 / 255.0 * m.max_level() as f64).ceil() as u8;
                assert_eq!(m.level(v), float, "intensity {v}");
            }
        }
    }
}
