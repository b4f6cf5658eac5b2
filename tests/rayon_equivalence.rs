#![cfg(feature = "rayon")]

use pixelfind::{
    find_all_pixels, find_all_pixels_par, find_pixels, find_pixels_par, ClipRegion, Matcher,
    MatcherConfig, PixelBuffer, Rgba32, SearchOptions,
};

fn make_frame(width: usize, height: usize) -> Vec<Rgba32> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 11) ^ (y * 3) ^ (x * y)) & 0x7;
            data.push(Rgba32::new(value as u8 * 30, 0, 0, 255));
        }
    }
    data
}

#[test]
fn parallel_first_match_equals_sequential() {
    let (width, height) = (64, 48);
    let frame = make_frame(width, height);
    let haystack = PixelBuffer::new(&frame, width, height).unwrap();

    // Low-entropy frame: small needles repeat many times, so ordering matters.
    for (nw, nh) in [(1, 1), (2, 1), (2, 2), (3, 2)] {
        let patch: Vec<Rgba32> = (0..nh)
            .flat_map(|y| frame[(30 + y) * width + 40..(30 + y) * width + 40 + nw].to_vec())
            .collect();
        let needle = PixelBuffer::new(&patch, nw, nh).unwrap();
        for options in [SearchOptions::default(), SearchOptions::new(0.2, 0.25)] {
            let seq = find_pixels(needle, haystack, options, None).unwrap();
            let par = find_pixels_par(needle, haystack, options, None).unwrap();
            assert_eq!(seq, par);
            assert!(seq.is_some());

            let seq_all = find_all_pixels(needle, haystack, options, None).unwrap();
            let par_all = find_all_pixels_par(needle, haystack, options, None).unwrap();
            assert_eq!(seq_all, par_all);
        }
    }
}

#[test]
fn parallel_matcher_respects_clip() {
    let (width, height) = (40, 40);
    let frame = make_frame(width, height);
    let haystack = PixelBuffer::new(&frame, width, height).unwrap();
    let patch = [frame[25 * width + 25]];
    let needle = PixelBuffer::new(&patch, 1, 1).unwrap();
    let clip = Some(ClipRegion::new(20, 20, 10, 10));

    let seq = Matcher::new().with_config(MatcherConfig {
        clip,
        ..MatcherConfig::default()
    });
    let par = Matcher::new().with_config(MatcherConfig {
        clip,
        parallel: true,
        ..MatcherConfig::default()
    });

    let expected = seq.find(needle, haystack).unwrap().unwrap();
    assert!(expected.x >= 20 && expected.y >= 20);
    assert_eq!(par.find(needle, haystack).unwrap(), Some(expected));
    assert_eq!(
        par.find_all(needle, haystack).unwrap(),
        seq.find_all(needle, haystack).unwrap()
    );
}
