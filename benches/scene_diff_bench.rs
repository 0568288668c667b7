use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use markchart::core::Viewport;
use markchart::data::DataSource;
use markchart::render::NullRenderer;
use markchart::scene::{ElementStore, Scene};
use markchart::series::{
    CustomSeriesOptions, ElementOption, RenderItemApi, RenderItemParams,
};
use markchart::{ChartEngine, ChartEngineConfig};

fn bench_render_pass_update_10k(c: &mut Criterion) {
    let config = ChartEngineConfig::new(Viewport::new(1920, 1080), 0.0, 10_000.0)
        .with_value_domain(0.0, 1_000.0);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    let series = engine
        .add_custom_series(
            CustomSeriesOptions::default(),
            Box::new(
                |params: &RenderItemParams<'_>, api: &RenderItemApi<'_>| {
                    let time = api.value(0, params.data_index)?;
                    let value = api.value(1, params.data_index)?;
                    let [x, y] = api.coord(&[time, value])?;
                    Ok(Some(ElementOption::path("M0 0 L2 2").translated(x, y)))
                },
            ),
        )
        .expect("series");

    let source =
        DataSource::from_rows((0..10_000).map(|i| vec![i as f64, f64::from(i % 1_000)]));
    engine.set_series_data(series, &source).expect("data");
    engine.render_pass().expect("mount pass");

    c.bench_function("render_pass_update_10k", |b| {
        b.iter(|| black_box(engine.render_pass().expect("update pass")))
    });
}

fn bench_named_children_diff_1k(c: &mut Criterion) {
    let mut scene = Scene::new();
    let mut store = ElementStore::default();
    let mut ops = Vec::new();

    let names: Vec<String> = (0..1_000).map(|i| format!("c{i}")).collect();
    let tree = ElementOption::group(
        names
            .iter()
            .map(|name| ElementOption::path("M0 0").named(name.as_str())),
    );
    scene.sync_root(&mut store, 0, 0, false, Some(&tree), &mut ops);

    c.bench_function("named_children_diff_1k", |b| {
        b.iter(|| {
            ops.clear();
            scene.sync_root(&mut store, 0, 0, false, Some(&tree), &mut ops);
            black_box(ops.len())
        })
    });
}

criterion_group!(
    benches,
    bench_render_pass_update_10k,
    bench_named_children_diff_1k
);
criterion_main!(benches);
