use smallvec::{SmallVec, smallvec};

use crate::core::DataPoint;
use crate::error::{PlotError, PlotResult};

/// Read-only element access for a 1-D sequence of samples.
///
/// Renderers never mutate or retain a source beyond the call that reads it.
pub trait SeriesSource {
    fn len(&self) -> usize;

    /// Returns element `index`, or `None` when it is out of range.
    fn value(&self, index: usize) -> Option<f64>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SeriesSource for [f64] {
    fn len(&self) -> usize {
        <[f64]>::len(self)
    }

    fn value(&self, index: usize) -> Option<f64> {
        self.get(index).copied()
    }
}

impl SeriesSource for Vec<f64> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn value(&self, index: usize) -> Option<f64> {
        self.as_slice().get(index).copied()
    }
}

impl<const N: usize> SeriesSource for [f64; N] {
    fn len(&self) -> usize {
        N
    }

    fn value(&self, index: usize) -> Option<f64> {
        self.get(index).copied()
    }
}

impl<T: SeriesSource + ?Sized> SeriesSource for &T {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn value(&self, index: usize) -> Option<f64> {
        (**self).value(index)
    }
}

/// Read-only element access for a 2-D grid, addressed `(row, col)`.
pub trait GridSource {
    /// `(rows, cols)`.
    fn shape(&self) -> (usize, usize);

    fn value(&self, row: usize, col: usize) -> Option<f64>;
}

impl GridSource for [Vec<f64>] {
    fn shape(&self) -> (usize, usize) {
        let cols = self.iter().map(Vec::len).max().unwrap_or(0);
        (self.len(), cols)
    }

    fn value(&self, row: usize, col: usize) -> Option<f64> {
        self.get(row)?.get(col).copied()
    }
}

impl GridSource for Vec<Vec<f64>> {
    fn shape(&self) -> (usize, usize) {
        self.as_slice().shape()
    }

    fn value(&self, row: usize, col: usize) -> Option<f64> {
        GridSource::value(self.as_slice(), row, col)
    }
}

impl<T: GridSource + ?Sized> GridSource for &T {
    fn shape(&self) -> (usize, usize) {
        (**self).shape()
    }

    fn value(&self, row: usize, col: usize) -> Option<f64> {
        (**self).value(row, col)
    }
}

/// Strided, bounds-checked view over a borrowed buffer of samples.
///
/// `shape` and `strides` are counted in elements, not bytes. Construction
/// checks that the largest reachable index lies inside the buffer, so element
/// access never needs to touch memory outside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayView<'a> {
    data: &'a [f64],
    offset: usize,
    shape: SmallVec<[usize; 2]>,
    strides: SmallVec<[usize; 2]>,
}

impl<'a> ArrayView<'a> {
    /// Contiguous 1-D view over the whole slice.
    #[must_use]
    pub fn from_slice(data: &'a [f64]) -> Self {
        Self {
            data,
            offset: 0,
            shape: smallvec![data.len()],
            strides: smallvec![1],
        }
    }

    /// Row-major `rows x cols` view, as a dataframe of numeric columns is laid out.
    pub fn matrix(data: &'a [f64], rows: usize, cols: usize) -> PlotResult<Self> {
        Self::with_layout(data, 0, &[rows, cols], &[cols, 1])
    }

    pub fn with_layout(
        data: &'a [f64],
        offset: usize,
        shape: &[usize],
        strides: &[usize],
    ) -> PlotResult<Self> {
        if shape.is_empty() || shape.len() != strides.len() {
            return Err(PlotError::InvalidData(
                "array view needs one stride per dimension".to_owned(),
            ));
        }

        if shape.iter().all(|&extent| extent > 0) {
            let mut last = offset;
            for (&extent, &stride) in shape.iter().zip(strides) {
                let reach = (extent - 1).checked_mul(stride).ok_or_else(|| {
                    PlotError::InvalidData("array view layout overflows usize".to_owned())
                })?;
                last = last.checked_add(reach).ok_or_else(|| {
                    PlotError::InvalidData("array view layout overflows usize".to_owned())
                })?;
            }
            if last >= data.len() {
                return Err(PlotError::InvalidData(format!(
                    "array view reaches element {last} but buffer holds {}",
                    data.len()
                )));
            }
        }

        Ok(Self {
            data,
            offset,
            shape: SmallVec::from_slice(shape),
            strides: SmallVec::from_slice(strides),
        })
    }

    #[must_use]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[must_use]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Element at a full multi-index; `None` for a wrong rank or out-of-range index.
    #[must_use]
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        if index.len() != self.ndim() {
            return None;
        }

        let mut flat = self.offset;
        for ((&i, &extent), &stride) in index.iter().zip(&self.shape).zip(&self.strides) {
            if i >= extent {
                return None;
            }
            flat += i * stride;
        }
        self.data.get(flat).copied()
    }

    /// 1-D view of column `col` of a 2-D view.
    pub fn column(&self, col: usize) -> PlotResult<ArrayView<'a>> {
        self.lane(1, col)
    }

    /// 1-D view of row `row` of a 2-D view.
    pub fn row(&self, row: usize) -> PlotResult<ArrayView<'a>> {
        self.lane(0, row)
    }

    fn lane(&self, fixed_dim: usize, at: usize) -> PlotResult<ArrayView<'a>> {
        if self.ndim() != 2 {
            return Err(PlotError::InvalidData(format!(
                "expected a 2-D view, got {} dimensions",
                self.ndim()
            )));
        }
        if at >= self.shape[fixed_dim] {
            return Err(PlotError::InvalidData(format!(
                "index {at} out of range for dimension {fixed_dim} of extent {}",
                self.shape[fixed_dim]
            )));
        }

        let free_dim = 1 - fixed_dim;
        Ok(ArrayView {
            data: self.data,
            offset: self.offset + at * self.strides[fixed_dim],
            shape: smallvec![self.shape[free_dim]],
            strides: smallvec![self.strides[free_dim]],
        })
    }
}

impl SeriesSource for ArrayView<'_> {
    /// Length of a 1-D view; higher-rank views expose no series elements.
    fn len(&self) -> usize {
        if self.ndim() == 1 { self.shape[0] } else { 0 }
    }

    fn value(&self, index: usize) -> Option<f64> {
        self.get(&[index])
    }
}

impl GridSource for ArrayView<'_> {
    fn shape(&self) -> (usize, usize) {
        if self.ndim() == 2 {
            (self.shape[0], self.shape[1])
        } else {
            (0, 0)
        }
    }

    fn value(&self, row: usize, col: usize) -> Option<f64> {
        self.get(&[row, col])
    }
}

/// Ordered `(x, y)` samples drawn from two element sources.
///
/// The series length is the shorter of the two sources.
pub struct Series<'a, X: ?Sized, Y: ?Sized> {
    x: &'a X,
    y: &'a Y,
}

impl<X: ?Sized, Y: ?Sized> Clone for Series<'_, X, Y> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<X: ?Sized, Y: ?Sized> Copy for Series<'_, X, Y> {}

impl<'a, X, Y> Series<'a, X, Y>
where
    X: SeriesSource + ?Sized,
    Y: SeriesSource + ?Sized,
{
    #[must_use]
    pub fn new(x: &'a X, y: &'a Y) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn point(&self, index: usize) -> Option<DataPoint> {
        if index >= self.len() {
            return None;
        }
        Some(DataPoint::new(self.x.value(index)?, self.y.value(index)?))
    }

    pub fn points(&self) -> impl Iterator<Item = DataPoint> + '_ {
        (0..self.len()).filter_map(|index| self.point(index))
    }
}
