//! Shared series-data list building.
//!
//! Every series model delegates its data ingestion here: raw sources are
//! validated once and exposed through dimension-indexed access so render
//! callbacks and parameter objects read the exact same values.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::convert::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Per-datum value vector; most series carry a handful of dimensions.
pub type DataValue = SmallVec<[f64; 4]>;

/// One raw datum: a value vector plus optional identity fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataItem {
    pub value: DataValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl DataItem {
    #[must_use]
    pub fn new(value: impl IntoIterator<Item = f64>) -> Self {
        Self {
            value: value.into_iter().collect(),
            name: None,
            id: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builds a datum from strongly-typed temporal/decimal input.
    pub fn from_decimal_time(time: DateTime<Utc>, values: &[Decimal]) -> ChartResult<Self> {
        let mut value = DataValue::new();
        value.push(datetime_to_unix_seconds(time));
        for (dim, decimal) in values.iter().enumerate() {
            value.push(decimal_to_f64(*decimal, &format!("value dimension {dim}"))?);
        }
        Ok(Self {
            value,
            name: None,
            id: None,
        })
    }
}

/// Raw input accepted by [`build_series_data`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    pub items: Vec<DataItem>,
}

impl DataSource {
    /// Builds a source from plain numeric rows.
    #[must_use]
    pub fn from_rows<R>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = f64>,
    {
        Self {
            items: rows.into_iter().map(DataItem::new).collect(),
        }
    }

    pub fn push(&mut self, item: DataItem) {
        self.items.push(item);
    }
}

/// Validated, dimension-indexed series data list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesData {
    items: Vec<DataItem>,
    dimension_count: usize,
}

impl SeriesData {
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Widest dimension count observed across the list.
    #[must_use]
    pub fn dimension_count(&self) -> usize {
        self.dimension_count
    }

    #[must_use]
    pub fn item(&self, data_index: usize) -> Option<&DataItem> {
        self.items.get(data_index)
    }

    #[must_use]
    pub fn name(&self, data_index: usize) -> Option<&str> {
        self.items.get(data_index)?.name.as_deref()
    }

    /// Full value vector of one datum.
    pub fn values(&self, data_index: usize) -> ChartResult<&[f64]> {
        self.items
            .get(data_index)
            .map(|item| item.value.as_slice())
            .ok_or_else(|| {
                ChartError::InvalidData(format!("data index {data_index} is out of bounds"))
            })
    }

    /// Single dimension of one datum.
    pub fn value(&self, dim: usize, data_index: usize) -> ChartResult<f64> {
        let values = self.values(data_index)?;
        values.get(dim).copied().ok_or_else(|| {
            ChartError::InvalidData(format!(
                "data index {data_index} has no dimension {dim} (got {} dimensions)",
                values.len()
            ))
        })
    }

    /// All values of one dimension, for scale fitting.
    #[must_use]
    pub fn dimension_values(&self, dim: usize) -> Vec<f64> {
        self.items
            .iter()
            .filter_map(|item| item.value.get(dim).copied())
            .collect()
    }
}

/// Builds a validated series data list from a raw source.
///
/// Rows may be ragged; dimension access beyond a row's width is reported at
/// read time, not here. Every present value must be finite and every row must
/// carry at least one dimension.
pub fn build_series_data(source: &DataSource) -> ChartResult<SeriesData> {
    let mut dimension_count = 0;

    for (data_index, item) in source.items.iter().enumerate() {
        if item.value.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "data index {data_index} has an empty value vector"
            )));
        }
        for (dim, value) in item.value.iter().enumerate() {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "data index {data_index} dimension {dim} must be finite"
                )));
            }
        }
        dimension_count = dimension_count.max(item.value.len());
    }

    debug!(
        count = source.items.len(),
        dimensions = dimension_count,
        "built series data list"
    );

    Ok(SeriesData {
        items: source.items.clone(),
        dimension_count,
    })
}
