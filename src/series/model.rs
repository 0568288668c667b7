use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::data::{DataSource, DataValue, SeriesData, build_series_data};
use crate::error::ChartResult;
use crate::scene::node::ElementId;
use crate::scene::store::ElementStore;
use crate::series::options::{CustomSeriesOptions, CustomSeriesOptionsPatch};

/// Per-datum parameter object handed to host-side consumers (tooltips,
/// event payloads, formatters).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataParams {
    pub component_type: &'static str,
    pub series_type: &'static str,
    pub series_index: usize,
    pub series_id: Option<String>,
    pub series_name: Option<String>,
    pub data_index: usize,
    pub data_type: Option<String>,
    pub name: Option<String>,
    pub value: DataValue,
    /// Free-form payload the render callback attached to the element.
    pub info: Option<Value>,
}

/// Series-level model for custom series.
///
/// Holds the merged options plus the two placement scalars the rendering
/// pipeline reads per pass; data ingestion delegates to the shared list
/// builder.
#[derive(Debug)]
pub struct CustomSeriesModel {
    options: CustomSeriesOptions,
    z: f64,
    zlevel: i32,
    data: SeriesData,
}

impl CustomSeriesModel {
    pub fn new(options: CustomSeriesOptions) -> ChartResult<Self> {
        options.validate()?;
        let mut model = Self {
            options,
            z: 0.0,
            zlevel: 0,
            data: SeriesData::default(),
        };
        model.option_updated();
        Ok(model)
    }

    /// Re-reads the placement scalars from the merged options.
    ///
    /// Called after every option merge; no further validation happens here.
    pub fn option_updated(&mut self) {
        self.z = self.options.z;
        self.zlevel = self.options.zlevel;
    }

    /// Merges a partial patch into the options, then refreshes placement.
    pub fn update_options(&mut self, patch: &CustomSeriesOptionsPatch) -> ChartResult<()> {
        let mut merged = self.options.clone();
        merged.apply(patch);
        merged.validate()?;
        self.options = merged;
        self.option_updated();
        debug!(z = self.z, zlevel = self.zlevel, "merged series options");
        Ok(())
    }

    /// Builds the series data list from a raw source.
    ///
    /// The model contributes no parsing logic of its own.
    pub fn get_initial_data(&mut self, source: &DataSource) -> ChartResult<()> {
        self.data = build_series_data(source)?;
        Ok(())
    }

    #[must_use]
    pub fn options(&self) -> &CustomSeriesOptions {
        &self.options
    }

    #[must_use]
    pub fn data(&self) -> &SeriesData {
        &self.data
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.z
    }

    #[must_use]
    pub fn zlevel(&self) -> i32 {
        self.zlevel
    }

    /// Builds the per-datum parameter object, extended with the `info`
    /// payload read from the element bookkeeping store when an element is
    /// supplied.
    pub fn data_params(
        &self,
        series_index: usize,
        data_index: usize,
        data_type: Option<&str>,
        element: Option<(&ElementStore, ElementId)>,
    ) -> ChartResult<DataParams> {
        let values = self.data.values(data_index)?;
        let info = element
            .and_then(|(store, id)| store.get(id))
            .and_then(|record| record.option.common().info.clone());

        Ok(DataParams {
            component_type: "series",
            series_type: "custom",
            series_index,
            series_id: self.options.id.clone(),
            series_name: self.options.name.clone(),
            data_index,
            data_type: data_type.map(str::to_owned),
            name: self.data.name(data_index).map(str::to_owned),
            value: values.iter().copied().collect(),
            info,
        })
    }
}
