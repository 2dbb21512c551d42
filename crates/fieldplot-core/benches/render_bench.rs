use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fieldplot_core::{BasketballCourt, CourtDims, HockeyRink, RenderOptions, RinkDims};

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_figure");
    group.bench_function("nba_court", |b| {
        b.iter(|| black_box(BasketballCourt::new(CourtDims::nba()).draw()));
    });
    group.bench_function("nhl_rink", |b| {
        b.iter(|| black_box(HockeyRink::new(RinkDims::nhl()).draw()));
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    let figure = HockeyRink::new(RinkDims::nhl()).draw();
    let mut opts = RenderOptions::default();
    opts.width = 800;
    opts.height = 500;
    opts.draw_labels = false;
    group.bench_function("nhl_rink_800x500", |b| {
        b.iter(|| -> Result<()> {
            let bytes = figure.render_to_png_bytes(&opts)?;
            black_box(bytes);
            Ok(())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_draw, bench_render);
criterion_main!(benches);
