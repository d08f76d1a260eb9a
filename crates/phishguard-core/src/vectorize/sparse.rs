//! Single-row sparse vector.

/// One sample row in compressed form. Indices are strictly increasing and
/// below `dim`; explicit zeros are not stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    dim: usize,
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SparseVector {
    /// All-zero row of width `dim`.
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Builds a row from `(column, value)` pairs in any order. Duplicate
    /// columns are summed; zeros and columns `>= dim` are dropped.
    pub fn from_pairs(dim: usize, pairs: impl IntoIterator<Item = (usize, f64)>) -> Self {
        let mut pairs: Vec<(usize, f64)> = pairs.into_iter().filter(|&(i, _)| i < dim).collect();
        pairs.sort_by_key(|&(i, _)| i);

        let mut indices: Vec<usize> = Vec::with_capacity(pairs.len());
        let mut values: Vec<f64> = Vec::with_capacity(pairs.len());
        for (i, v) in pairs {
            match indices.last() {
                Some(&last) if last == i => {
                    if let Some(acc) = values.last_mut() {
                        *acc += v;
                    }
                }
                _ => {
                    indices.push(i);
                    values.push(v);
                }
            }
        }

        let mut out = Self::zeros(dim);
        for (i, v) in indices.into_iter().zip(values) {
            if v != 0.0 {
                out.indices.push(i);
                out.values.push(v);
            }
        }
        out
    }

    /// Dense row of width `values.len()`.
    pub fn from_dense(values: &[f64]) -> Self {
        Self::from_pairs(values.len(), values.iter().copied().enumerate())
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    pub fn get(&self, index: usize) -> f64 {
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dim];
        for (i, v) in self.iter() {
            dense[i] = v;
        }
        dense
    }

    /// Appends `extra` as new columns after the existing ones. The result is
    /// `dim + extra.len()` wide.
    pub fn hstack(&self, extra: &[f64]) -> SparseVector {
        let mut out = self.clone();
        for (offset, &v) in extra.iter().enumerate() {
            if v != 0.0 {
                out.indices.push(self.dim + offset);
                out.values.push(v);
            }
        }
        out.dim = self.dim + extra.len();
        out
    }

    /// Scales stored values in place.
    pub(crate) fn scale(&mut self, factor: f64) {
        for v in &mut self.values {
            *v *= factor;
        }
    }

    pub(crate) fn values(&self) -> &[f64] {
        &self.values
    }

    /// Dot product with a dense weight row. Columns beyond `weights` are ignored.
    pub fn dot(&self, weights: &[f64]) -> f64 {
        self.iter()
            .filter_map(|(i, v)| weights.get(i).map(|w| w * v))
            .sum()
    }
}
