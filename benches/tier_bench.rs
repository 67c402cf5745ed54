use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::DynamicImage;
use img_tiers::processing::{encode_jpeg, encode_webp, resize_to_width};
use img_tiers::sanitize::sanitize_filename;

fn bench_sanitize_filename(c: &mut Criterion) {
    c.bench_function("sanitize_filename", |b| {
        b.iter(|| sanitize_filename(black_box("IMG 2041 - Sunset over the Bay (edited) FINAL.JPG")))
    });
}

fn bench_resize(c: &mut Criterion) {
    let img = DynamicImage::new_rgb8(2000, 1333);

    c.bench_function("resize_2000_to_400", |b| {
        b.iter(|| resize_to_width(black_box(&img), black_box(400)).into_owned())
    });
}

fn bench_encoders(c: &mut Criterion) {
    let img = DynamicImage::new_rgb8(800, 533);

    let mut group = c.benchmark_group("encode_800");
    group.bench_function("webp_q82", |b| b.iter(|| encode_webp(black_box(&img), 82)));
    group.bench_function("jpeg_progressive_q82", |b| {
        b.iter(|| encode_jpeg(black_box(&img), 82))
    });
    group.finish();
}

criterion_group!(benches, bench_sanitize_filename, bench_resize, bench_encoders);
criterion_main!(benches);
