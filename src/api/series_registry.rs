use tracing::{debug, trace};

use crate::data::DataSource;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;
use crate::scene::diff::DiffOp;
use crate::series::model::CustomSeriesModel;
use crate::series::options::{CustomSeriesOptions, CustomSeriesOptionsPatch};
use crate::series::render_item::RenderItemFn;

use super::{ChartEngine, SeriesEntry};

impl<R: Renderer> ChartEngine<R> {
    /// Registers a custom series and returns its stable index.
    ///
    /// Indices are engine-assigned and survive removals of other series.
    pub fn add_custom_series(
        &mut self,
        options: CustomSeriesOptions,
        render_item: RenderItemFn,
    ) -> ChartResult<usize> {
        if let Some(id) = &options.id {
            let duplicate = self
                .series
                .values()
                .any(|entry| entry.model.options().id.as_deref() == Some(id.as_str()));
            if duplicate {
                return Err(ChartError::InvalidOption(format!(
                    "series with id `{id}` is already registered"
                )));
            }
        }

        let model = CustomSeriesModel::new(options)?;
        let series_index = self.next_series_index;
        self.next_series_index += 1;
        self.series
            .insert(series_index, SeriesEntry { model, render_item });
        debug!(series_index, "registered custom series");
        Ok(series_index)
    }

    /// Replaces the data list of one series via the shared list builder.
    pub fn set_series_data(&mut self, series_index: usize, source: &DataSource) -> ChartResult<()> {
        let entry = self
            .series
            .get_mut(&series_index)
            .ok_or(ChartError::UnknownSeries(series_index))?;
        entry.model.get_initial_data(source)?;
        trace!(
            series_index,
            count = entry.model.data().len(),
            "series data replaced"
        );
        Ok(())
    }

    /// Merges a partial option patch and refreshes the placement scalars.
    pub fn update_series_options(
        &mut self,
        series_index: usize,
        patch: &CustomSeriesOptionsPatch,
    ) -> ChartResult<()> {
        let entry = self
            .series
            .get_mut(&series_index)
            .ok_or(ChartError::UnknownSeries(series_index))?;
        entry.model.update_options(patch)
    }

    /// Unregisters a series and drops its retained elements and bookkeeping.
    pub fn remove_series(&mut self, series_index: usize) -> ChartResult<()> {
        if self.series.shift_remove(&series_index).is_none() {
            return Err(ChartError::UnknownSeries(series_index));
        }

        let mut ops: Vec<DiffOp> = Vec::new();
        self.scene
            .remove_series(&mut self.store, series_index, &mut ops);
        debug!(
            series_index,
            removed_elements = ops.len(),
            "unregistered custom series"
        );
        Ok(())
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn has_series(&self, series_index: usize) -> bool {
        self.series.contains_key(&series_index)
    }
}
