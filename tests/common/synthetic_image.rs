/// Generates a solid-color packed RGBA buffer.
pub fn uniform_rgba(width: usize, height: usize, color: [u8; 4]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = Vec::with_capacity(width * height * 4);
    for _ in 0..width * height {
        img.extend_from_slice(&color);
    }
    img
}

/// Generates one-pixel-wide vertical stripes alternating between two colors.
pub fn stripes_rgba(width: usize, height: usize, a: [u8; 4], b: [u8; 4]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = Vec::with_capacity(width * height * 4);
    for _ in 0..height {
        for x in 0..width {
            img.extend_from_slice(if x % 2 == 0 { &a } else { &b });
        }
    }
    img
}

/// Generates a buffer whose channels vary with position, useful for identity
/// and strided-layout comparisons.
pub fn gradient_rgba(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            img.extend_from_slice(&[
                (x * 17 % 256) as u8,
                (y * 31 % 256) as u8,
                ((x + y) * 13 % 256) as u8,
                255,
            ]);
        }
    }
    img
}

/// Copies packed rows into a layout with `pad_bytes` of sentinel padding after
/// each row.
pub fn with_row_padding(packed: &[u8], width: usize, height: usize, pad_bytes: usize) -> Vec<u8> {
    let row_bytes = width * 4;
    assert_eq!(
        packed.len(),
        row_bytes * height,
        "packed buffer size mismatch"
    );

    let stride = row_bytes + pad_bytes;
    let mut img = vec![0xAB; stride * height];
    for y in 0..height {
        img[y * stride..y * stride + row_bytes]
            .copy_from_slice(&packed[y * row_bytes..(y + 1) * row_bytes]);
    }
    img
}
