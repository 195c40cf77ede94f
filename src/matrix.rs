//! Dense matrix construction and algebra.
//!
//! Small rectangular matrices of `f64` with element-wise arithmetic,
//! the standard triple-loop product, transposition, and closed-form
//! determinants up to order 3.
//!
//! # Design Notes
//!
//! Every operation allocates and returns a fresh matrix; inputs are
//! never mutated. Shapes are validated before each binary operation,
//! so a successfully constructed [`Matrix`] is always rectangular.
//!
//! There is deliberately no blocking, no Strassen multiplication, and
//! no LU-based determinant: these matrices are small and correctness
//! is the contract, not throughput.

/// Error type for malformed matrix shapes and unsupported operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// A construction request with zero rows, zero columns, or ragged rows.
    InvalidDimension(String),
    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// The operation requires a square matrix.
    NotSquare { rows: usize, cols: usize },
    /// Determinants are only available in closed form up to order 3.
    UnsupportedDimension { order: usize },
}

impl std::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixError::InvalidDimension(msg) => {
                write!(f, "invalid matrix dimensions: {msg}")
            }
            MatrixError::DimensionMismatch { left, right } => {
                write!(
                    f,
                    "incompatible matrix dimensions: {}×{} vs {}×{}",
                    left.0, left.1, right.0, right.1
                )
            }
            MatrixError::NotSquare { rows, cols } => {
                write!(f, "matrix must be square, got {rows}×{cols}")
            }
            MatrixError::UnsupportedDimension { order } => {
                write!(f, "determinant supports orders 1-3, got {order}")
            }
        }
    }
}

impl std::error::Error for MatrixError {}

/// A dense row-major matrix of `f64` values.
///
/// Rows are stored as an outer sequence of equal-length inner
/// sequences. The rectangularity invariant is established at
/// construction and holds for the lifetime of the value.
///
/// # Examples
/// ```
/// use numkit::matrix::Matrix;
/// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let b = Matrix::identity(2).unwrap();
/// assert_eq!(a.multiply(&b).unwrap(), a);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Creates a `rows × cols` matrix with every entry set to 0.
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidDimension`] if `rows` or `cols` is 0.
    ///
    /// # Examples
    /// ```
    /// use numkit::matrix::Matrix;
    /// let z = Matrix::zeros(2, 3).unwrap();
    /// assert_eq!(z.rows(), 2);
    /// assert_eq!(z.cols(), 3);
    /// assert_eq!(z.get(1, 2), Some(0.0));
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension(format!(
                "rows and cols must be positive, got {rows}×{cols}"
            )));
        }
        Ok(Self {
            data: vec![vec![0.0; cols]; rows],
        })
    }

    /// Creates the `n × n` identity matrix.
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidDimension`] if `n` is 0.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut matrix = Self::zeros(n, n)?;
        for i in 0..n {
            matrix.data[i][i] = 1.0;
        }
        Ok(matrix)
    }

    /// Builds a matrix from explicit rows.
    ///
    /// # Errors
    /// Returns [`MatrixError::InvalidDimension`] if `rows` is empty, the
    /// first row is empty, or any row differs in length from the first.
    ///
    /// # Examples
    /// ```
    /// use numkit::matrix::Matrix;
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.get(0, 1), Some(2.0));
    ///
    /// // Ragged input is rejected.
    /// assert!(Matrix::from_rows(vec![vec![1.0], vec![2.0, 3.0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(MatrixError::InvalidDimension(
                "matrix must have at least one row and one column".to_string(),
            ));
        }
        let cols = rows[0].len();
        if let Some(bad) = rows.iter().position(|r| r.len() != cols) {
            return Err(MatrixError::InvalidDimension(format!(
                "row {bad} has {} entries, expected {cols}",
                rows[bad].len()
            )));
        }
        Ok(Self { data: rows })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.data[0].len()
    }

    /// Returns the entry at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get(row)?.get(col).copied()
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    /// Panics if `i >= self.rows()`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    /// Element-wise sum of `self` and `other`.
    ///
    /// # Errors
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
    ///
    /// # Examples
    /// ```
    /// use numkit::matrix::Matrix;
    /// let a = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
    /// let b = Matrix::from_rows(vec![vec![3.0, 4.0]]).unwrap();
    /// let sum = a.add(&b).unwrap();
    /// assert_eq!(sum.row(0), &[4.0, 6.0]);
    /// ```
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference of `self` and `other`.
    ///
    /// # Errors
    /// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with<F>(&self, other: &Matrix, op: F) -> Result<Matrix, MatrixError>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.rows() != other.rows() || self.cols() != other.cols() {
            return Err(MatrixError::DimensionMismatch {
                left: (self.rows(), self.cols()),
                right: (other.rows(), other.cols()),
            });
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(ra, rb)| ra.iter().zip(rb).map(|(&a, &b)| op(a, b)).collect())
            .collect();
        Ok(Matrix { data })
    }

    /// Standard matrix product `self · other`.
    ///
    /// # Algorithm
    /// Plain triple loop over (i, j, k).
    ///
    /// # Complexity
    /// Time: O(rows(a) × cols(b) × cols(a)), Space: O(rows(a) × cols(b))
    ///
    /// # Errors
    /// Returns [`MatrixError::DimensionMismatch`] if `self.cols() !=
    /// other.rows()`.
    ///
    /// # Examples
    /// ```
    /// use numkit::matrix::Matrix;
    /// let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// let i = Matrix::identity(2).unwrap();
    /// assert_eq!(a.multiply(&i).unwrap(), a);
    /// ```
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols() != other.rows() {
            return Err(MatrixError::DimensionMismatch {
                left: (self.rows(), self.cols()),
                right: (other.rows(), other.cols()),
            });
        }
        let mut result = Matrix::zeros(self.rows(), other.cols())?;
        for i in 0..self.rows() {
            for j in 0..other.cols() {
                let mut sum = 0.0;
                for k in 0..self.cols() {
                    sum += self.data[i][k] * other.data[k][j];
                }
                result.data[i][j] = sum;
            }
        }
        Ok(result)
    }

    /// Returns a new matrix with rows and columns swapped.
    ///
    /// # Examples
    /// ```
    /// use numkit::matrix::Matrix;
    /// let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
    /// let t = m.transpose();
    /// assert_eq!(t.rows(), 3);
    /// assert_eq!(t.cols(), 1);
    /// assert_eq!(t.get(2, 0), Some(3.0));
    /// ```
    pub fn transpose(&self) -> Matrix {
        let data = (0..self.cols())
            .map(|j| self.data.iter().map(|row| row[j]).collect())
            .collect();
        Matrix { data }
    }

    /// Determinant via closed-form cofactor expansion, orders 1 to 3.
    ///
    /// # Errors
    /// - [`MatrixError::NotSquare`] if the matrix is not square.
    /// - [`MatrixError::UnsupportedDimension`] for square orders above 3.
    ///
    /// # Examples
    /// ```
    /// use numkit::matrix::Matrix;
    /// let m = Matrix::from_rows(vec![vec![3.0, 1.0], vec![2.0, 4.0]]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), 10.0);
    /// ```
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        if self.rows() != self.cols() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let m = &self.data;
        match self.rows() {
            1 => Ok(m[0][0]),
            2 => Ok(m[0][0] * m[1][1] - m[0][1] * m[1][0]),
            3 => Ok(m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
                - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
                + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])),
            order => Err(MatrixError::UnsupportedDimension { order }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
