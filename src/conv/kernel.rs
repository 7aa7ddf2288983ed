//! Odd-shaped integer convolution kernels.
//!
//! Weights are applied as-is: there is no stored divisor, so a blur that
//! should average must be pre-scaled by the caller or it will saturate.
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")]
pub struct Kernel {
    rows: usize,
    cols: usize,
    weights: Vec<i32>,
}

impl Kernel {
    /// Build a kernel from row-major weights. Both dimensions must be odd.
    pub fn new(rows: usize, cols: usize, weights: Vec<i32>) -> Result<Self> {
        if rows == 0 || cols == 0 || rows % 2 == 0 || cols % 2 == 0 {
            return Err(Error::InvalidKernelShape { rows, cols });
        }
        if weights.len() != rows * cols {
            return Err(Error::KernelSizeMismatch {
                expected: rows * cols,
                actual: weights.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            weights,
        })
    }

    /// Build from nested rows; ragged input is a size mismatch.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut weights = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::KernelSizeMismatch {
                    expected: cols,
                    actual: row.len(),
                });
            }
            weights.extend_from_slice(row);
        }
        Self::new(rows.len(), cols, weights)
    }

    /// `size × size` kernel with a single 1 at the centre.
    pub fn identity(size: usize) -> Result<Self> {
        let mut weights = vec![0; size * size];
        if let Some(centre) = weights.get_mut((size / 2) * size + size / 2) {
            *centre = 1;
        }
        Self::new(size, size, weights)
    }

    /// `size × size` kernel of ones (unnormalized box sum).
    pub fn ones(size: usize) -> Result<Self> {
        Self::new(size, size, vec![1; size * size])
    }

    pub fn sharpen() -> Self {
        Self::fixed3([[0, -1, 0], [-1, 5, -1], [0, -1, 0]])
    }

    pub fn laplacian() -> Self {
        Self::fixed3([[0, 1, 0], [1, -4, 1], [0, 1, 0]])
    }

    pub fn sobel_x() -> Self {
        Self::fixed3([[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]])
    }

    pub fn sobel_y() -> Self {
        Self::fixed3([[-1, -2, -1], [0, 0, 0], [1, 2, 1]])
    }

    pub fn emboss() -> Self {
        Self::fixed3([[-2, -1, 0], [-1, 1, 1], [0, 1, 2]])
    }

    fn fixed3(k: [[i32; 3]; 3]) -> Self {
        Self {
            rows: 3,
            cols: 3,
            weights: k.concat(),
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

    /// Centre element `(rows / 2, cols / 2)`.
    #[inline]
    pub fn anchor(&self) -> (usize, usize) {
        (self.rows / 2, self.cols / 2)
    }

    #[inline]
    pub fn at(&self, r: usize, c: usize) -> i32 {
        self.weights[r * self.cols + c]
    }

    pub fn row(&self, r: usize) -> &[i32] {
        &self.weights[r * self.cols..(r + 1) * self.cols]
    }

    pub fn weights(&self) -> &[i32] {
        &self.weights
    }

    pub fn sum(&self) -> i32 {
        self.weights.iter().sum()
    }
}

impl TryFrom<Vec<Vec<i32>>> for Kernel {
    type Error = Error;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self> {
        Self::from_rows(rows.as_slice())
    }
}

impl From<Kernel> for Vec<Vec<i32>> {
    fn from(k: Kernel) -> Self {
        k.weights.chunks(k.cols).map(<[i32]>::to_vec).collect()
    }
}
