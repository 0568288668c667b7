mod series_registry;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use tracing::{debug, warn};

use crate::core::coord::{CartesianFrame, CoordinateMapping, CoordinateSystemKind};
use crate::core::time_scale::{TimeScale, TimeScaleTuning};
use crate::core::types::Viewport;
use crate::core::value_scale::{ValueScale, ValueScaleTuning};
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawItem, DrawShape, RenderFrame, Renderer};
use crate::scene::diff::DiffOp;
use crate::scene::node::{ElementId, NodeShape, SceneNode};
use crate::scene::store::{ElementRecord, ElementStore};
use crate::scene::Scene;
use crate::series::element::compose_matrices;
use crate::series::model::{CustomSeriesModel, DataParams};
use crate::series::render_item::{RenderItemApi, RenderItemFn, RenderItemParams};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    pub time_start: f64,
    pub time_end: f64,
    pub value_min: f64,
    pub value_max: f64,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport, time_start: f64, time_end: f64) -> Self {
        Self {
            viewport,
            time_start,
            time_end,
            value_min: 0.0,
            value_max: 1.0,
        }
    }

    #[must_use]
    pub fn with_value_domain(mut self, value_min: f64, value_max: f64) -> Self {
        self.value_min = value_min;
        self.value_max = value_max;
        self
    }
}

/// Outcome counters of one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderPassReport {
    pub mounted: usize,
    pub updated: usize,
    pub removed: usize,
    pub clipped: usize,
    pub drawn: usize,
}

pub(crate) struct SeriesEntry {
    pub(crate) model: CustomSeriesModel,
    pub(crate) render_item: RenderItemFn,
}

/// Charting engine driving custom series through render passes.
///
/// Single-threaded and synchronous: render callbacks run one data index at a
/// time while the pass walks registered series in insertion order.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    time_scale: TimeScale,
    value_scale: ValueScale,
    series: IndexMap<usize, SeriesEntry>,
    next_series_index: usize,
    scene: Scene,
    store: ElementStore,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        Ok(Self {
            renderer,
            viewport: config.viewport,
            time_scale: TimeScale::new(config.time_start, config.time_end)?,
            value_scale: ValueScale::new(config.value_min, config.value_max)?,
            series: IndexMap::new(),
            next_series_index: 0,
            scene: Scene::new(),
            store: ElementStore::default(),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn time_visible_range(&self) -> (f64, f64) {
        self.time_scale.visible_range()
    }

    #[must_use]
    pub fn value_domain(&self) -> (f64, f64) {
        self.value_scale.domain()
    }

    pub fn set_time_visible_range(&mut self, start: f64, end: f64) -> ChartResult<()> {
        self.time_scale.set_visible_range(start, end)
    }

    pub fn set_value_domain(&mut self, value_min: f64, value_max: f64) -> ChartResult<()> {
        self.value_scale = ValueScale::new(value_min, value_max)?;
        Ok(())
    }

    /// Refits both scales from the first two dimensions of every
    /// cartesian-bound series. Does nothing when no such data exists.
    pub fn autoscale_from_data(&mut self) -> ChartResult<()> {
        let mut times = Vec::new();
        let mut values = Vec::new();
        for entry in self.series.values() {
            if entry.model.options().coordinate_system != CoordinateSystemKind::Cartesian2d {
                continue;
            }
            times.extend(entry.model.data().dimension_values(0));
            values.extend(entry.model.data().dimension_values(1));
        }

        if times.is_empty() || values.is_empty() {
            debug!("autoscale skipped: no cartesian-bound data");
            return Ok(());
        }

        self.time_scale = TimeScale::from_values(&times, TimeScaleTuning::default())?;
        self.value_scale = ValueScale::from_values(&values, ValueScaleTuning::default())?;
        Ok(())
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Bookkeeping record of a live element, when it exists.
    #[must_use]
    pub fn element_record(&self, id: ElementId) -> Option<&ElementRecord> {
        self.store.get(id)
    }

    #[must_use]
    pub fn element_store(&self) -> &ElementStore {
        &self.store
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Per-datum parameter object for host-side consumers, reading the
    /// element `info` payload from the bookkeeping store when supplied.
    pub fn data_params(
        &self,
        series_index: usize,
        data_index: usize,
        data_type: Option<&str>,
        element: Option<ElementId>,
    ) -> ChartResult<DataParams> {
        let entry = self
            .series
            .get(&series_index)
            .ok_or(ChartError::UnknownSeries(series_index))?;
        entry.model.data_params(
            series_index,
            data_index,
            data_type,
            element.map(|id| (&self.store, id)),
        )
    }

    /// Runs a full render pass without a triggering action.
    pub fn render_pass(&mut self) -> ChartResult<RenderPassReport> {
        self.render_pass_for_action(None)
    }

    /// Runs a full render pass: invokes every render callback, reconciles the
    /// retained scene, then materializes and renders the frame.
    pub fn render_pass_for_action(
        &mut self,
        action_type: Option<&str>,
    ) -> ChartResult<RenderPassReport> {
        let mut ops = Vec::new();
        let series_indices: Vec<usize> = self.series.keys().copied().collect();

        for series_index in series_indices {
            let Some(entry) = self.series.get(&series_index) else {
                continue;
            };
            let options = entry.model.options();
            let data_len = entry.model.data().len();
            let universal_transition = options.universal_transition;
            let mapping = self.mapping_for(options.coordinate_system);

            for data_index in 0..data_len {
                let produced = {
                    let Some(entry) = self.series.get(&series_index) else {
                        continue;
                    };
                    let options = entry.model.options();
                    let params = RenderItemParams {
                        series_index,
                        series_id: options.id.as_deref(),
                        series_name: options.name.as_deref(),
                        data_index,
                        data_length: data_len,
                        coordinate_system: options.coordinate_system,
                        action_type,
                    };
                    let api = RenderItemApi::new(mapping, entry.model.data(), options.color);
                    (entry.render_item)(&params, &api).map_err(|err| ChartError::RenderItem {
                        series_index,
                        data_index,
                        message: err.to_string(),
                    })?
                };

                if let Some(option) = &produced {
                    option.validate()?;
                }
                self.scene.sync_root(
                    &mut self.store,
                    series_index,
                    data_index,
                    universal_transition,
                    produced.as_ref(),
                    &mut ops,
                );
            }

            self.scene
                .truncate_series(&mut self.store, series_index, data_len, &mut ops);
        }

        let mut report = RenderPassReport::default();
        for op in &ops {
            match op {
                DiffOp::Mount { .. } => report.mounted += 1,
                DiffOp::Update { .. } => report.updated += 1,
                DiffOp::Remove { .. } => report.removed += 1,
            }
        }

        let frame = self.build_frame(&mut report)?;
        self.renderer.render(&frame)?;
        report.drawn = frame.items.len();

        debug!(
            mounted = report.mounted,
            updated = report.updated,
            removed = report.removed,
            clipped = report.clipped,
            drawn = report.drawn,
            "render pass complete"
        );
        Ok(report)
    }

    fn mapping_for(&self, kind: CoordinateSystemKind) -> CoordinateMapping {
        match kind {
            CoordinateSystemKind::Cartesian2d => CoordinateMapping::Cartesian(CartesianFrame {
                time_scale: self.time_scale,
                value_scale: self.value_scale,
                viewport: self.viewport,
            }),
            CoordinateSystemKind::None => CoordinateMapping::None {
                viewport: self.viewport,
            },
        }
    }

    /// Flattens the retained scene into an ordered draw list.
    fn build_frame(&self, report: &mut RenderPassReport) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.viewport);

        for (series_index, entry) in &self.series {
            let options = entry.model.options();
            let clip =
                options.clip && options.coordinate_system == CoordinateSystemKind::Cartesian2d;
            if options.clip && options.coordinate_system == CoordinateSystemKind::None {
                warn!(
                    series_index,
                    "clip is ignored without a coordinate-system binding"
                );
            }

            let cx = FlattenCx {
                series_index: *series_index,
                series_z: entry.model.z(),
                series_zlevel: entry.model.zlevel(),
                clip,
                viewport: self.viewport,
            };
            for root in self.scene.roots(*series_index).iter().flatten() {
                flatten_node(&cx, root, IDENTITY_MATRIX, &mut frame.items, report);
            }
        }

        // Stable sort: equal keys keep series registration and declaration order.
        frame
            .items
            .sort_by_key(|item| (item.zlevel, OrderedFloat(item.z)));
        Ok(frame)
    }
}

const IDENTITY_MATRIX: [f64; 6] = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

struct FlattenCx {
    series_index: usize,
    series_z: f64,
    series_zlevel: i32,
    clip: bool,
    viewport: Viewport,
}

fn flatten_node(
    cx: &FlattenCx,
    node: &SceneNode,
    parent_matrix: [f64; 6],
    items: &mut Vec<DrawItem>,
    report: &mut RenderPassReport,
) {
    if node.invisible {
        return;
    }

    let matrix = compose_matrices(parent_matrix, node.transform.to_matrix());
    let shape = match &node.shape {
        NodeShape::Group => {
            for child in &node.children {
                flatten_node(cx, child, matrix, items, report);
            }
            return;
        }
        NodeShape::Path(path) => DrawShape::Path { d: path.d.clone() },
        NodeShape::Image(image) => DrawShape::Image {
            src: image.src.clone(),
            width: image.width,
            height: image.height,
        },
        NodeShape::Text(text) => DrawShape::Text {
            text: text.text.clone(),
            font_size_px: text.font_size_px,
            h_align: text.h_align,
        },
    };

    if cx.clip && !cx.viewport.contains(matrix[4], matrix[5]) {
        report.clipped += 1;
        return;
    }

    items.push(DrawItem {
        element: node.id,
        series_index: cx.series_index,
        kind: node.kind,
        matrix,
        style: node.style,
        shape,
        z: node.z.unwrap_or(cx.series_z),
        zlevel: node.zlevel.unwrap_or(cx.series_zlevel),
    });
}
