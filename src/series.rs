//! Numeric series accessors.
//!
//! A dataset does not own its numbers. Anything that can hand out parallel
//! X, Y and radius slices implements [`Values`] and can be plotted.

/// Parallel numeric sequences for one dataset.
///
/// Category-style charts only need `xs`; point charts read `ys` and `rs` too.
/// Absent sequences return `None`, which is distinct from an empty slice only
/// in that it changes how the dataset is encoded.
pub trait Values {
    fn xs(&self) -> &[f64];

    fn ys(&self) -> Option<&[f64]> {
        None
    }

    fn rs(&self) -> Option<&[f64]> {
        None
    }

    /// Number of complete points: the shortest of the present sequences.
    fn len(&self) -> usize {
        let x = self.xs().len();
        let y = self.ys().map_or(x, <[f64]>::len);
        let r = self.rs().map_or(x, <[f64]>::len);
        x.min(y).min(r)
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when every present sequence has the same length as `xs`.
    fn is_consistent(&self) -> bool {
        let x = self.xs().len();
        self.ys().is_none_or(|y| y.len() == x) && self.rs().is_none_or(|r| r.len() == x)
    }
}

impl Values for [f64] {
    fn xs(&self) -> &[f64] {
        self
    }
}

impl Values for Vec<f64> {
    fn xs(&self) -> &[f64] {
        self
    }
}

impl<const N: usize> Values for [f64; N] {
    fn xs(&self) -> &[f64] {
        self
    }
}

/// Owned X/Y/R series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Option<Vec<f64>>,
    pub r: Option<Vec<f64>>,
}

impl Series {
    #[must_use]
    pub const fn new(x: Vec<f64>) -> Self {
        Self {
            x,
            y: None,
            r: None,
        }
    }

    #[must_use]
    pub const fn xy(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            x,
            y: Some(y),
            r: None,
        }
    }

    #[must_use]
    pub const fn xyr(x: Vec<f64>, y: Vec<f64>, r: Vec<f64>) -> Self {
        Self {
            x,
            y: Some(y),
            r: Some(r),
        }
    }

    #[must_use]
    pub fn with_y(mut self, y: Vec<f64>) -> Self {
        self.y = Some(y);
        self
    }

    #[must_use]
    pub fn with_r(mut self, r: Vec<f64>) -> Self {
        self.r = Some(r);
        self
    }

    /// Appends one point. Y and R are only recorded when those sequences exist.
    pub fn push(&mut self, x: f64, y: f64, r: f64) {
        self.x.push(x);
        if let Some(ys) = self.y.as_mut() {
            ys.push(y);
        }
        if let Some(rs) = self.r.as_mut() {
            rs.push(r);
        }
    }
}

impl Values for Series {
    fn xs(&self) -> &[f64] {
        &self.x
    }

    fn ys(&self) -> Option<&[f64]> {
        self.y.as_deref()
    }

    fn rs(&self) -> Option<&[f64]> {
        self.r.as_deref()
    }
}

impl FromIterator<(f64, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let (x, y): (Vec<f64>, Vec<f64>) = iter.into_iter().unzip();
        Self::xy(x, y)
    }
}

#[cfg(test)]
#[path = "series_tests.rs"]
mod tests;
