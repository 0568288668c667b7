use crate::error::{ChartError, ChartResult};

/// Linear mapping between a domain and the normalized `[0, 1]` ratio space.
///
/// Axis-specific pixel conventions (x grows right, y grows down) live in the
/// time and value scales built on top of this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    start: f64,
    end: f64,
}

impl LinearScale {
    pub fn new(start: f64, end: f64) -> ChartResult<Self> {
        if !start.is_finite() || !end.is_finite() || start == end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-degenerate".to_owned(),
            ));
        }

        Ok(Self { start, end })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    /// Maps a domain value to its position ratio within the domain.
    pub fn ratio(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        Ok((value - self.start) / self.span())
    }

    /// Maps a position ratio back to the domain value.
    pub fn value_at(self, ratio: f64) -> ChartResult<f64> {
        if !ratio.is_finite() {
            return Err(ChartError::InvalidData("ratio must be finite".to_owned()));
        }
        Ok(self.start + ratio * self.span())
    }
}

/// Orders a raw range and widens degenerate ranges to `min_span`.
pub(crate) fn normalize_range(start: f64, end: f64, min_span: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}
