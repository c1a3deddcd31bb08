//! One-reroll transition matrices over "progress" states.
//!
//! Matrices are column-oriented: entry `[to][from]` is the chance of moving from
//! state `from` to state `to` in one reroll, so a state vector `v` advances as `M·v`.
//! All four assume a greedy player who never gives back a die already gained, which
//! makes them lower triangular with an absorbing last state.

use std::{fmt, ops::Mul};

use serde::{Deserialize, Serialize};

pub const MAX_DIM: usize = 6;

/// Which of the fixed matrices a power or lookup refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    /// copies of one face, states 1..=5
    Run,
    /// values of a 4-long window covered, states 1..=4
    SmallStraight,
    /// values of a 5-long window covered, states 1..=5
    LargeStraight,
    /// copies of one face among all five dice, states 0..=5
    UpperCount,
}

impl TransitionKind {
    pub const ALL: [TransitionKind; 4] = [
        Self::Run,
        Self::SmallStraight,
        Self::LargeStraight,
        Self::UpperCount,
    ];

    pub fn dim(self) -> usize {
        match self {
            Self::Run | Self::LargeStraight => 5,
            Self::SmallStraight => 4,
            Self::UpperCount => 6,
        }
    }

    pub fn matrix(self) -> Matrix {
        match self {
            Self::Run => Matrix::from_rows(&RUNS),
            Self::SmallStraight => Matrix::from_rows(&SMALL_STRAIGHT),
            Self::LargeStraight => Matrix::from_rows(&LARGE_STRAIGHT),
            Self::UpperCount => Matrix::from_rows(&UPPER_COUNT),
        }
    }
}

const RUNS: [[f64; 5]; 5] = [
    [120. / 1296., 0., 0., 0., 0.],
    [900. / 1296., 120. / 216., 0., 0., 0.],
    [250. / 1296., 80. / 216., 25. / 36., 0., 0.],
    [25. / 1296., 15. / 216., 10. / 36., 5. / 6., 0.],
    [1. / 1296., 1. / 216., 1. / 36., 1. / 6., 1.],
];

// first column sums to 1323/1296; kept as tabulated
const SMALL_STRAIGHT: [[f64; 4]; 4] = [
    [108. / 1296., 0., 0., 0.],
    [525. / 1296., 64. / 216., 0., 0.],
    [582. / 1296., 122. / 216., 25. / 36., 0.],
    [108. / 1296., 30. / 216., 11. / 36., 1.],
];

// first column sums to 1236/1296; kept as tabulated
const LARGE_STRAIGHT: [[f64; 5]; 5] = [
    [16. / 1296., 0., 0., 0., 0.],
    [260. / 1296., 27. / 216., 0., 0., 0.],
    [600. / 1296., 111. / 216., 16. / 36., 0., 0.],
    [336. / 1296., 72. / 216., 18. / 36., 5. / 6., 0.],
    [24. / 1296., 6. / 216., 2. / 36., 1. / 6., 1.],
];

const UPPER_COUNT: [[f64; 6]; 6] = [
    [3125. / 7776., 0., 0., 0., 0., 0.],
    [3125. / 7776., 625. / 1296., 0., 0., 0., 0.],
    [625. / 3888., 125. / 324., 125. / 216., 0., 0., 0.],
    [125. / 3888., 25. / 216., 25. / 72., 25. / 36., 0., 0.],
    [25. / 7776., 5. / 324., 5. / 72., 5. / 18., 5. / 6., 0.],
    [1. / 7776., 1. / 1296., 1. / 216., 1. / 36., 1. / 6., 1.],
];

/// Square matrix of at most 6×6, stored inline so it stays `Copy`.
#[derive(Clone, Copy, PartialEq)]
pub struct Matrix {
    dim: usize,
    cells: [[f64; MAX_DIM]; MAX_DIM],
}

impl Matrix {
    pub fn identity(dim: usize) -> Self {
        assert!(dim <= MAX_DIM);
        let mut cells = [[0.0; MAX_DIM]; MAX_DIM];
        for (i, row) in cells.iter_mut().enumerate().take(dim) {
            row[i] = 1.0;
        }
        Matrix { dim, cells }
    }

    pub fn from_rows<const N: usize>(rows: &[[f64; N]; N]) -> Self {
        assert!(N <= MAX_DIM);
        let mut cells = [[0.0; MAX_DIM]; MAX_DIM];
        for (dst, src) in cells.iter_mut().zip(rows) {
            dst[..N].copy_from_slice(src);
        }
        Matrix { dim: N, cells }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, to: usize, from: usize) -> f64 {
        self.cells[to][from]
    }

    /// `self` raised to `n` by repeated squaring.
    pub fn pow(&self, mut n: u32) -> Matrix {
        let mut result = Matrix::identity(self.dim);
        let mut base = *self;
        while n > 0 {
            if n & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            n >>= 1;
        }
        result
    }

    /// Advances a distribution one step: `self · v`.
    pub fn apply(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(v.len(), self.dim, "state vector length must match matrix");
        (0..self.dim)
            .map(|to| (0..self.dim).map(|from| self.cells[to][from] * v[from]).sum())
            .collect()
    }

    /// Distribution after starting with certainty in state `from`.
    pub fn column(&self, from: usize) -> Vec<f64> {
        (0..self.dim).map(|to| self.cells[to][from]).collect()
    }

    pub fn column_sum(&self, from: usize) -> f64 {
        self.column(from).iter().sum()
    }

    pub fn max_abs_diff(&self, other: &Matrix) -> f64 {
        assert_eq!(self.dim, other.dim);
        let mut worst: f64 = 0.0;
        for i in 0..self.dim {
            for j in 0..self.dim {
                worst = worst.max((self.cells[i][j] - other.cells[i][j]).abs());
            }
        }
        worst
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        assert_eq!(self.dim, rhs.dim, "matrix dimensions differ");
        let n = self.dim;
        let mut cells = [[0.0; MAX_DIM]; MAX_DIM];
        for i in 0..n {
            for j in 0..n {
                cells[i][j] = (0..n).map(|k| self.cells[i][k] * rhs.cells[k][j]).sum();
            }
        }
        Matrix { dim: n, cells }
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.cells.iter().take(self.dim).map(|row| &row[..self.dim]))
            .finish()
    }
}
