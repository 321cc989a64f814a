//! Arithmetic, powers and aggregate queries.

use num_traits::AsPrimitive;

use super::{Element, Matrix, MatrixError};

impl<T: Element> Matrix<T> {
    /// Elementwise `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.ensure_addable(rhs)?;
        Ok(Self::from(self.data.zip_map(&rhs.data, |a, b| a + b)))
    }

    /// Elementwise `self - rhs`.
    pub fn sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.ensure_addable(rhs)?;
        Ok(Self::from(self.data.zip_map(&rhs.data, |a, b| a - b)))
    }

    /// Matrix product `self * rhs`.
    ///
    /// Loop order is row / shared index / destination column, so a whole
    /// destination row accumulates together while `self[(i, k)]` stays fixed.
    pub fn mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.cols() != rhs.rows() {
            return Err(MatrixError::NotMultipliable {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        let (n, inner, m) = (self.rows(), self.cols(), rhs.cols());
        let mut out = Self::zeros(n, m);
        for i in 0..n {
            for k in 0..inner {
                let a = self.data[(i, k)];
                for j in 0..m {
                    out.data[(i, j)] += a * rhs.data[(k, j)];
                }
            }
        }
        Ok(out)
    }

    /// Multiply every element by `k`; the result takes `k`'s element type.
    pub fn scale<K>(&self, k: K) -> Matrix<K>
    where
        K: Element,
        T: AsPrimitive<K>,
    {
        Matrix::from(self.data.map(|x| <T as AsPrimitive<K>>::as_(x) * k))
    }

    /// `self^exp` by square-and-multiply. `exp == 0` yields the identity.
    pub fn pow(&self, exp: usize) -> Result<Self, MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        let mut result = Self::identity(self.rows());
        let mut base = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(&base)?;
            }
            e >>= 1;
            if e > 0 {
                base = base.mul(&base)?;
            }
        }
        Ok(result)
    }

    pub fn transpose(&self) -> Self {
        Self::from(self.data.transpose())
    }

    /// Sum of all elements.
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, x| acc + *x)
    }

    /// Sum of the 1-based row `row`.
    pub fn sum_of_row(&self, row: usize) -> Result<T, MatrixError> {
        let (r, _) = self.locate(row, 1)?;
        Ok(self.data.row(r).iter().fold(T::zero(), |acc, x| acc + *x))
    }

    /// Sum of the 1-based column `col`.
    pub fn sum_of_column(&self, col: usize) -> Result<T, MatrixError> {
        let (_, c) = self.locate(1, col)?;
        Ok(self.data.column(c).iter().fold(T::zero(), |acc, x| acc + *x))
    }

    fn ensure_addable(&self, rhs: &Self) -> Result<(), MatrixError> {
        if self.shape() == rhs.shape() {
            Ok(())
        } else {
            Err(MatrixError::NotAddable {
                lhs: self.shape(),
                rhs: rhs.shape(),
            })
        }
    }
}
