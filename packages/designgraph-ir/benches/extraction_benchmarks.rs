//! Performance benchmarks for token extraction
//!
//! - Full pipeline over generated documents of growing size
//! - Walker alone (explicit stack, depth/count guards)
//! - Scale building and palette partitioning over large token sets
//! - YAML config parsing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use designgraph_ir::config::{ExtractionConfig, PaletteConfig, Preset};
use designgraph_ir::features::aggregation::{build_scales, PaletteBuilder};
use designgraph_ir::features::traversal::SceneWalker;
use designgraph_ir::pipeline::ExtractionPipeline;
use designgraph_ir::shared::models::{
    Color, DesignDocument, DesignNode, Effect, ExtractedTokenSet, LayoutMode, LayoutStyle,
    NodeKind, Paint, TextStyle,
};

// ============================================================================
// Fixtures
// ============================================================================

/// One screen with `rows` styled rows, each a button, a label and a card
fn screen(index: usize, rows: usize) -> DesignNode {
    let mut screen = DesignNode::new(format!("s{index}"), format!("Screen {index}"), NodeKind::Frame)
        .with_size(375.0, 812.0)
        .with_fill(Paint::solid(Color::rgb(1.0, 1.0, 1.0)));

    for row in 0..rows {
        let shade = (row % 17) as f64 / 16.0;
        let id = |part: &str| format!("s{index}-r{row}-{part}");
        screen = screen.with_child(
            DesignNode::new(id("row"), "Row", NodeKind::Frame)
                .with_layout(
                    LayoutStyle::auto_layout(LayoutMode::Horizontal)
                        .padding(8.0, 16.0, 8.0, 16.0)
                        .item_spacing((row % 5) as f64 * 4.0),
                )
                .with_child(
                    DesignNode::new(id("btn"), "Button/Primary", NodeKind::Instance)
                        .with_size(120.0, 44.0)
                        .with_corner_radius((row % 4) as f64 * 4.0)
                        .with_fill(Paint::solid(Color::rgb(shade, 0.4, 1.0 - shade))),
                )
                .with_child(
                    DesignNode::new(id("txt"), "Caption", NodeKind::Text).with_text(
                        TextStyle::new("caption")
                            .font_size(10.0 + (row % 8) as f64 * 2.0)
                            .font("Inter", "Medium"),
                    ),
                )
                .with_child(
                    DesignNode::new(id("card"), "Card", NodeKind::Frame)
                        .with_size(300.0, 120.0)
                        .with_effect(Effect::drop_shadow(
                            0.0,
                            2.0,
                            (row % 6) as f64 * 4.0 + 2.0,
                            Color::rgba(0.0, 0.0, 0.0, 0.2),
                        )),
                ),
        );
    }
    screen
}

fn document(screens: usize, rows: usize) -> DesignDocument {
    DesignDocument::new("Bench", (0..screens).map(|i| screen(i, rows)).collect())
}

fn node_count(doc: &DesignDocument) -> usize {
    fn count(node: &DesignNode) -> usize {
        1 + node.children.iter().map(count).sum::<usize>()
    }
    doc.roots.iter().map(count).sum()
}

// ============================================================================
// Pipeline
// ============================================================================

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let pipeline = ExtractionPipeline::default();

    for (screens, rows) in [(1, 10), (5, 50), (20, 100)] {
        let doc = document(screens, rows);
        group.throughput(Throughput::Elements(node_count(&doc) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{screens}x{rows}")),
            &doc,
            |b, doc| {
                b.iter(|| black_box(pipeline.extract(black_box(doc))));
            },
        );
    }

    group.finish();
}

fn bench_walker(c: &mut Criterion) {
    let doc = document(1, 500);
    let config = ExtractionConfig::preset(Preset::Thorough);
    let walker = SceneWalker::new(&config.traversal);

    let mut group = c.benchmark_group("walker");
    group.throughput(Throughput::Elements(node_count(&doc) as u64));
    group.bench_function("walk_unit", |b| {
        b.iter(|| black_box(walker.walk_unit(black_box(&doc.roots[0])).len()));
    });
    group.finish();
}

// ============================================================================
// Aggregation
// ============================================================================

fn bench_aggregation(c: &mut Criterion) {
    let mut tokens = ExtractedTokenSet::new();
    tokens.font_sizes.extend(8..=72);
    tokens.spacing.extend(0..=200);
    tokens.radii.extend(0..=100);
    for i in 0..4096u32 {
        tokens
            .colors
            .insert(format!("#{:02X}{:02X}{:02X}", i % 256, (i * 7) % 256, (i * 13) % 256));
    }

    c.bench_function("build_scales", |b| {
        b.iter(|| black_box(build_scales(black_box(&tokens))));
    });

    let palette = PaletteBuilder::new(&PaletteConfig::default());
    c.bench_function("build_palette", |b| {
        b.iter(|| black_box(palette.build(black_box(&tokens.colors))));
    });
}

// ============================================================================
// Config
// ============================================================================

fn bench_yaml_parsing(c: &mut Criterion) {
    let yaml = r#"version: 1
preset: balanced
overrides:
  traversal:
    max_depth: 30
    max_nodes: 50000
  palette:
    max_palette_size: 32
"#;

    let mut group = c.benchmark_group("yaml_parsing");
    group.throughput(Throughput::Bytes(yaml.len() as u64));
    group.bench_function("parse", |b| {
        b.iter(|| black_box(ExtractionConfig::from_yaml_str(black_box(yaml))));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_pipeline,
    bench_walker,
    bench_aggregation,
    bench_yaml_parsing
);
criterion_main!(benches);
