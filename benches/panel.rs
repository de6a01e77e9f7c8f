//! Benchmarks for the per-frame panel paths
//!
//! Run with: cargo bench panel

use sidepanel::config::PanelConfig;
use sidepanel::model::AppModel;
use sidepanel::panel::width::resize_stop_width;
use sidepanel::panel::{
    decide, PanelWidth, ResizeDelta, ResizeSurface, SectionKey, SectionRegistry, SwitchInputs,
};
use sidepanel::view::{self, Frame};

fn main() {
    divan::main();
}

fn loaded_registry() -> SectionRegistry {
    let mut registry = SectionRegistry::with_builtin_sections();
    for key in SectionKey::ALL {
        for request in [registry.request_content(key), registry.request_fallback(key)]
            .into_iter()
            .flatten()
        {
            let result = request.run();
            registry.complete(request.key, request.kind, result);
        }
    }
    registry
}

// ============================================================================
// Content switch
// ============================================================================

#[divan::bench(args = [false, true])]
fn decide_loaded_section(bencher: divan::Bencher, router_loading: bool) {
    let registry = loaded_registry();
    let inputs = SwitchInputs {
        key: SectionKey::Test,
        router_loading,
    };
    bencher.bench(|| decide(divan::black_box(inputs), &registry));
}

// ============================================================================
// Resize
// ============================================================================

#[divan::bench]
fn resize_stop(bencher: divan::Bencher) {
    bencher.bench(|| {
        let mut width = PanelWidth::new(320);
        for delta in -200..200 {
            width = resize_stop_width(divan::black_box(width), ResizeDelta::new(delta));
        }
        width
    });
}

#[divan::bench]
fn drag_gesture(bencher: divan::Bencher) {
    bencher.bench(|| {
        let mut surface = ResizeSurface::new();
        surface.begin(320.0, PanelWidth::new(320));
        let mut live = 0;
        for x in (0..1600).step_by(4) {
            live = surface.drag(x as f64, 1920).unwrap_or(live);
        }
        surface.end(100.0, 1920)
    });
}

// ============================================================================
// Painting
// ============================================================================

#[divan::bench(args = [(800, 600), (1920, 1080)])]
fn paint_frame(bencher: divan::Bencher, (width, height): (u32, u32)) {
    let config = PanelConfig {
        section: SectionKey::Tutorials,
        ..PanelConfig::default()
    };
    let mut model = AppModel::new(width, height, config, loaded_registry());
    model.router.loading = false;
    let mut buffer = vec![0u32; (width as usize) * (height as usize)];

    bencher.bench_local(|| {
        let mut frame = Frame::new(&mut buffer, width as usize, height as usize);
        view::paint(&mut frame, &mut model);
    });
}
