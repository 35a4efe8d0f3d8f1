mod common;

use common::synthetic_image::{gradient_rgba, stripes_rgba, uniform_rgba, with_row_padding};
use image::DynamicImage;
use pixel_rescale::buffer::BufferView;
use pixel_rescale::{
    resample, resample_with_timing, resize, resize_default, PixelView, ResizeError,
    ResizeStrategy, Size,
};

#[test]
fn output_has_exactly_the_requested_pixels() {
    let data = gradient_rgba(7, 5);
    let view = PixelView::new(7, 5, 7 * 4, &data).unwrap();

    let out = resample(view, 3, 9).unwrap();
    assert_eq!(out.w, 3);
    assert_eq!(out.h, 9);
    assert_eq!(out.stride_bytes, 3 * 4);
    assert_eq!(out.data.len(), 3 * 9 * 4);
}

#[test]
fn identity_resample_reproduces_the_source() {
    let data = gradient_rgba(8, 6);
    let view = PixelView::new(8, 6, 8 * 4, &data).unwrap();

    let out = resample(view, 8, 6).unwrap();
    assert_eq!(out.data, data);
}

#[test]
fn downscaled_uniform_buffer_stays_uniform() {
    let color = [12, 200, 55, 128];
    let data = uniform_rgba(13, 7, color);
    let view = PixelView::new(13, 7, 13 * 4, &data).unwrap();

    let out = resample(view, 5, 3).unwrap();
    for y in 0..3 {
        for x in 0..5 {
            assert_eq!(out.get(x, y), color, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn upscaled_uniform_buffer_stays_uniform() {
    let color = [90, 14, 233, 255];
    let data = uniform_rgba(3, 3, color);
    let view = PixelView::new(3, 3, 3 * 4, &data).unwrap();

    let out = resample(view, 10, 11).unwrap();
    for y in 0..11 {
        for x in 0..10 {
            assert_eq!(out.get(x, y), color, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn double_horizontal_downscale_blends_stripe_pairs_evenly() {
    let black = [0, 0, 0, 255];
    let white = [255, 255, 255, 255];
    let data = stripes_rgba(8, 4, black, white);
    let view = PixelView::new(8, 4, 8 * 4, &data).unwrap();

    let out = resample(view, 4, 4).unwrap();
    for y in 0..4 {
        for x in 0..4 {
            // (0 + 255) / 2 = 127.5, rounded half up.
            assert_eq!(out.get(x, y), [128, 128, 128, 255], "pixel ({x}, {y})");
        }
    }
}

#[test]
fn single_pixel_source_replicates_everywhere() {
    let data = uniform_rgba(1, 1, [7, 77, 177, 255]);
    let view = PixelView::new(1, 1, 4, &data).unwrap();

    let out = resample(view, 3, 3).unwrap();
    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(out.get(x, y), [7, 77, 177, 255]);
        }
    }
}

#[test]
fn two_by_two_source_scales_both_ways() {
    let data = gradient_rgba(2, 2);
    let view = PixelView::new(2, 2, 2 * 4, &data).unwrap();

    let up = resample(view, 5, 5).unwrap();
    assert_eq!((up.w, up.h), (5, 5));

    let down = resample(view, 1, 1).unwrap();
    let px = down.get(0, 0);
    // Average of the four corners, per channel.
    for c in 0..4 {
        let mean: f32 = (0..2)
            .flat_map(|y| (0..2).map(move |x| (x, y)))
            .map(|(x, y)| data[(y * 2 + x) * 4 + c] as f32)
            .sum::<f32>()
            / 4.0;
        assert!(
            (px[c] as f32 - mean).abs() <= 1.0,
            "channel {c}: {} vs {mean}",
            px[c]
        );
    }
}

#[test]
fn zero_sized_target_is_rejected() {
    let data = uniform_rgba(4, 4, [1, 2, 3, 4]);
    let view = PixelView::new(4, 4, 4 * 4, &data).unwrap();

    let err = resample(view, 0, 4).unwrap_err();
    assert_eq!(
        err,
        ResizeError::InvalidTarget {
            width: 0,
            height: 4
        }
    );

    let img = DynamicImage::new_rgba8(4, 4);
    let err = resize_default(&img, Size::new(4, 0)).unwrap_err();
    assert_eq!(
        err,
        ResizeError::InvalidTarget {
            width: 4,
            height: 0
        }
    );
}

#[test]
fn solid_red_four_by_four_halves_exactly() {
    let red = [255, 0, 0, 255];
    let data = uniform_rgba(4, 4, red);
    let view = PixelView::new(4, 4, 4 * 4, &data).unwrap();

    let out = resample(view, 2, 2).unwrap();
    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(out.get(x, y), red);
        }
    }
}

#[test]
fn black_white_pair_upscales_to_a_monotone_gradient() {
    let mut data = Vec::new();
    data.extend_from_slice(&[0, 0, 0, 255]);
    data.extend_from_slice(&[255, 255, 255, 255]);
    let view = PixelView::new(2, 1, 2 * 4, &data).unwrap();

    let out = resample(view, 4, 1).unwrap();
    let values: Vec<u8> = (0..4).map(|x| out.get(x, 0)[0]).collect();
    assert!(
        values.windows(2).all(|w| w[0] <= w[1]),
        "not monotone: {values:?}"
    );
    assert!(values[0] <= 16, "left endpoint too bright: {values:?}");
    assert!(values[3] >= 239, "right endpoint too dark: {values:?}");
    for x in 0..4 {
        assert_eq!(out.get(x, 0)[3], 255, "alpha must stay opaque");
    }
}

#[test]
fn strided_source_matches_its_packed_copy() {
    let packed = gradient_rgba(6, 5);
    let padded = with_row_padding(&packed, 6, 5, 5);

    let packed_view = PixelView::new(6, 5, 6 * 4, &packed).unwrap();
    let padded_view = PixelView::new(6, 5, 6 * 4 + 5, &padded).unwrap();

    let a = resample(packed_view, 4, 3).unwrap();
    let b = resample(padded_view, 4, 3).unwrap();
    assert_eq!(a.data, b.data);
}

#[test]
fn every_strategy_produces_the_requested_dimensions() {
    let data = uniform_rgba(9, 6, [10, 20, 30, 255]);
    let img = DynamicImage::ImageRgba8(
        image::RgbaImage::from_raw(9, 6, data).expect("valid raw buffer"),
    );

    for strategy in [
        ResizeStrategy::Resampler,
        ResizeStrategy::NearestPassthrough,
        ResizeStrategy::BilinearPassthrough,
        ResizeStrategy::LanczosPassthrough,
    ] {
        let out = resize(&img, Size::new(5, 4), strategy).unwrap();
        assert_eq!(out.width(), 5, "{strategy:?}");
        assert_eq!(out.height(), 4, "{strategy:?}");
        // A uniform source must stay uniform under any backend.
        assert!(
            out.pixels().all(|p| p.0 == [10, 20, 30, 255]),
            "{strategy:?}"
        );
    }
}

#[test]
fn timing_report_carries_the_output_and_dimensions() {
    let data = gradient_rgba(10, 10);
    let view = PixelView::new(10, 10, 10 * 4, &data).unwrap();

    let report = resample_with_timing(view, 4, 6).unwrap();
    assert_eq!((report.src_w, report.src_h), (10, 10));
    assert_eq!((report.dst_w, report.dst_h), (4, 6));
    assert_eq!((report.output.w, report.output.h), (4, 6));
    assert!(report.elapsed_ms >= 0.0);
    assert!(report.output.is_contiguous());
}

#[test]
fn source_buffer_is_never_mutated() {
    let data = gradient_rgba(5, 4);
    let before = data.clone();
    let view = PixelView::new(5, 4, 5 * 4, &data).unwrap();

    resample(view, 9, 2).unwrap();
    assert_eq!(data, before);
}
