// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use image_resizer::media::resize::{self, ResizeJob, ResizeTarget};
use image_resizer::media::SelectedFile;
use image_rs::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::hint::black_box;
use std::io::Cursor;

fn encoded(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }));
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, format)
        .expect("failed to encode fixture");
    cursor.into_inner()
}

fn jobs() -> Vec<ResizeJob> {
    let png = encoded(1600, 1200, ImageFormat::Png);
    let jpeg = encoded(1200, 1600, ImageFormat::Jpeg);
    (0..4)
        .flat_map(|index| {
            [
                ResizeJob {
                    file: SelectedFile::new(format!("landscape_{index}.png"), png.clone()),
                    type_label: "PNG".into(),
                },
                ResizeJob {
                    file: SelectedFile::new(format!("portrait_{index}.jpg"), jpeg.clone()),
                    type_label: "JPEG".into(),
                },
            ]
        })
        .collect()
}

fn resize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    group.sample_size(10);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");
    let target = ResizeTarget::default();
    let single = jobs().remove(0);

    group.bench_function("single_png_to_512", |b| {
        b.iter(|| black_box(resize::resize_one(&single, target, 100).expect("resize")));
    });

    group.bench_function("batch_of_8_to_512", |b| {
        b.iter_batched(
            jobs,
            |batch| {
                runtime
                    .block_on(resize::resize_batch(batch, target, 100))
                    .expect("batch resize")
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, resize_benchmark);
criterion_main!(benches);
