use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use swatchbook::extraction::CANNED_PALETTES;
use swatchbook::{nearest_swatch, rgb_to_hsl, synthesize_palette, HistogramExtractor, PaletteBuilder, PaletteKind};

fn benchmark_conversion(c: &mut Criterion) {
    c.bench_function("rgb_to_hsl", |b| {
        b.iter(|| rgb_to_hsl(black_box(37), black_box(99), black_box(235)))
    });

    c.bench_function("nearest_swatch", |b| b.iter(|| nearest_swatch(black_box("#2563eb"))));
}

fn benchmark_palettes(c: &mut Criterion) {
    let builder = PaletteBuilder::new();
    let hex_list = CANNED_PALETTES[0];

    c.bench_function("build_tailwind_palette", |b| {
        b.iter(|| builder.build(PaletteKind::Tailwind, black_box(&hex_list)))
    });

    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("synthesize_palette", |b| b.iter(|| synthesize_palette(&mut rng)));
}

fn benchmark_extraction(c: &mut Criterion) {
    let image = image::RgbaImage::from_fn(640, 480, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    });
    let extractor = HistogramExtractor::new();

    c.bench_function("histogram_extract_640x480", |b| {
        b.iter(|| extractor.extract_from_image(black_box(&image)))
    });
}

criterion_group!(benches, benchmark_conversion, benchmark_palettes, benchmark_extraction);
criterion_main!(benches);
