use criterion::{criterion_group, criterion_main, Criterion};
use pixelfind::{find_pixels, ClipRegion, PixelBuffer, Rgba32, SearchOptions};
use std::hint::black_box;

fn make_frame(width: usize, height: usize) -> Vec<Rgba32> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
            data.push(Rgba32::new(value as u8, (value >> 1) as u8, 255 - value as u8, 255));
        }
    }
    data
}

fn extract_patch(
    frame: &[Rgba32],
    frame_width: usize,
    x0: usize,
    y0: usize,
    width: usize,
    height: usize,
) -> Vec<Rgba32> {
    let mut out = Vec::with_capacity(width * height);
    for y in 0..height {
        let row = (y0 + y) * frame_width;
        out.extend_from_slice(&frame[row + x0..row + x0 + width]);
    }
    out
}

fn bench_find_pixels(c: &mut Criterion) {
    let (width, height) = (640, 480);
    let frame = make_frame(width, height);
    let haystack = PixelBuffer::new(&frame, width, height).unwrap();

    let (nw, nh) = (24, 24);
    let patch = extract_patch(&frame, width, 500, 400, nw, nh);
    let needle = PixelBuffer::new(&patch, nw, nh).unwrap();

    c.bench_function("exact_match_640x480", |b| {
        b.iter(|| black_box(find_pixels(needle, haystack, SearchOptions::default(), None)));
    });

    let tolerant = SearchOptions::new(0.1, 0.05);
    c.bench_function("tolerant_match_640x480", |b| {
        b.iter(|| black_box(find_pixels(needle, haystack, tolerant, None)));
    });

    let clip = Some(ClipRegion::new(400, 300, 240, 180));
    c.bench_function("clipped_match_640x480", |b| {
        b.iter(|| black_box(find_pixels(needle, haystack, tolerant, clip)));
    });

    #[cfg(feature = "rayon")]
    c.bench_function("parallel_tolerant_match_640x480", |b| {
        b.iter(|| black_box(pixelfind::find_pixels_par(needle, haystack, tolerant, None)));
    });
}

criterion_group!(benches, bench_find_pixels);
criterion_main!(benches);
