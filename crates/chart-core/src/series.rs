// File: crates/chart-core/src/series.rs
// Summary: Labeled line series over (x, y) points.
// Notes:
// - Points are kept exactly as supplied; the renderer never sorts or smooths them.
// - Colours come from the theme palette by series position.

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
    pub stroke_width: f32,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_data(label, Vec::new())
    }

    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data, stroke_width: 1.5 }
    }

    /// Build a series from parallel integer sequences. Extra trailing values on
    /// the longer side are ignored.
    pub fn from_int_pairs(label: impl Into<String>, xs: &[i64], ys: &[i64]) -> Self {
        let data = xs.iter().zip(ys).map(|(&x, &y)| (x as f64, y as f64)).collect();
        Self::with_data(label, data)
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// (x_min, x_max, y_min, y_max) over finite points, or None when there are none.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.data_xy.iter().filter(|(x, y)| x.is_finite() && y.is_finite());
        let &(x0, y0) = it.next()?;
        Some(it.fold((x0, x0, y0, y0), |(xl, xh, yl, yh), &(x, y)| {
            (xl.min(x), xh.max(x), yl.min(y), yh.max(y))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_int_pairs_keeps_order() {
        let s = Series::from_int_pairs("a", &[4, 1, 2], &[40, 10, 20]);
        assert_eq!(s.data_xy, vec![(4.0, 40.0), (1.0, 10.0), (2.0, 20.0)]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn bounds_of_empty_series_is_none() {
        assert!(Series::new("empty").bounds().is_none());
    }

    #[test]
    fn bounds_cover_all_points() {
        let s = Series::with_data("b", vec![(1.0, 5.0), (-2.0, 7.0), (3.0, -1.0)]);
        assert_eq!(s.bounds(), Some((-2.0, 3.0, -1.0, 7.0)));
    }
}
