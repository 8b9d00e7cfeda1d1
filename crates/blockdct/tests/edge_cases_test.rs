//! Edge case testing for the transform engine and pixel matrix

use blockdct::*;
use rayon::prelude::*;

fn assert_blocks_close(actual: &Block, expected: &Block, tolerance: f64) {
    for (a, e) in actual.as_slice().iter().zip(expected.as_slice()) {
        assert!(
            (a - e).abs() <= tolerance * e.abs().max(1.0),
            "got {}, expected {}",
            a,
            e
        );
    }
}

#[test]
fn test_roundtrip_small_sizes() {
    for n in [1, 2, 8] {
        let engine = TransformEngine::new(n).unwrap();
        let input = Block::from_fn(n, n, |y, x| (y as f64 - 3.5) * 17.25 + x as f64 * 0.125);
        let output = engine.inverse(&engine.forward(&input).unwrap()).unwrap();
        assert_blocks_close(&output, &input, 1e-9);
    }
}

#[test]
fn test_roundtrip_extreme_values() {
    let engine = TransformEngine::default();
    let input = Block::from_fn(8, 8, |y, x| if (x + y) % 2 == 0 { 1e6 } else { -1e6 });
    let output = engine.inverse(&engine.forward(&input).unwrap()).unwrap();
    assert_blocks_close(&output, &input, 1e-9);
}

#[test]
fn test_orthogonality() {
    let engine = TransformEngine::new(8).unwrap();
    let product = matrix_multiply(engine.basis(), engine.basis_transposed()).unwrap();
    assert_blocks_close(&product, &Block::identity(8), 1e-12);
}

#[test]
fn test_dc_of_constant_block() {
    let engine = TransformEngine::new(8).unwrap();
    let coefficients = engine.forward(&Block::filled(8, 8, 128.0)).unwrap();
    let expected_dc = 128.0 * 8f64.sqrt() * 8f64.sqrt();

    assert!((coefficients[(0, 0)] - expected_dc).abs() < 1e-9);
    let ac_energy: f64 = coefficients.as_slice()[1..].iter().map(|c| c * c).sum();
    assert!(ac_energy < 1e-18);
}

#[test]
fn test_wrong_block_size() {
    let engine = TransformEngine::new(8).unwrap();

    match engine.forward(&Block::zeros(7, 8)) {
        Err(DctError::DimensionMismatch {
            expected_width,
            expected_height,
            actual_width,
            actual_height,
        }) => {
            assert_eq!((expected_width, expected_height), (8, 8));
            assert_eq!((actual_width, actual_height), (8, 7));
        }
        other => panic!("expected DimensionMismatch, got {:?}", other),
    }

    assert!(matches!(
        engine.inverse(&Block::zeros(16, 16)),
        Err(DctError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_blank_matrix_for_other_block_size() {
    let mut matrix = PixelMatrix::with_block_size(4, 8, 4).unwrap();
    for pixel in matrix.pixels_mut() {
        *pixel = Pixel::rgb(10.0, 20.0, 30.0);
    }

    let engine = TransformEngine::new(4).unwrap();
    let blocks = forward_channel(&engine, &matrix, 2).unwrap();
    assert_eq!(blocks.len(), 2);
    assert!((blocks[0][(0, 0)] - 120.0).abs() < 1e-9);

    // the default engine does not match a 4x4 matrix
    assert!(forward_channel(&TransformEngine::default(), &matrix, 2).is_err());
    assert!(PixelMatrix::with_block_size(4, 8, 0).is_err());
}

#[test]
fn test_zero_block_size() {
    assert!(matches!(
        TransformEngine::new(0),
        Err(DctError::InvalidParameter(_))
    ));
}

#[test]
fn test_buffer_too_small() {
    let result = PixelMatrix::from_buffer(&[0u8; 100], 16, 16, 48, ChannelOrder::Bgr);
    assert!(matches!(result, Err(DctError::InvalidParameter(_))));
}

#[test]
fn test_tiny_image_crops_to_empty() {
    let matrix = PixelMatrix::from_buffer(&[0u8; 7 * 7 * 3], 7, 7, 21, ChannelOrder::Bgr).unwrap();
    assert_eq!(matrix.dimensions(), Dimensions::new(0, 0));
    assert!(matrix.to_buffer().is_empty());

    let engine = TransformEngine::default();
    assert!(forward_channel(&engine, &matrix, 0).unwrap().is_empty());
}

#[test]
fn test_custom_block_size_crop() {
    let options = BufferOptions::new().block_size(4).channel_order(ChannelOrder::Rgb);
    let buffer = vec![50u8; 10 * 7 * 3];
    let matrix = PixelMatrix::from_buffer_with(&buffer, 10, 7, 30, &options).unwrap();

    assert_eq!((matrix.width(), matrix.height()), (8, 4));
    assert_eq!(matrix.block_size(), 4);
    assert_eq!(matrix.channel_order(), ChannelOrder::Rgb);
}

#[test]
fn test_surface_released_after_failure() {
    let mut surface = RawSurface::new(vec![0u8; 16], 8, 8, 24);
    assert!(PixelMatrix::from_surface(&mut surface, &BufferOptions::new()).is_err());
    assert!(!surface.is_locked());

    // still usable afterwards
    let guard = SurfaceLock::acquire(&mut surface, LockMode::ReadOnly);
    assert!(guard.is_ok());
}

#[test]
fn test_locked_surface_is_not_reentered() {
    let mut surface = RawSurface::with_stride(8, 8, 24);
    surface.lock(LockMode::WriteOnly).unwrap();
    assert!(PixelMatrix::from_surface(&mut surface, &BufferOptions::new()).is_err());
    // the failed acquisition must not release the outer lock
    assert!(surface.is_locked());
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = TransformEngine::default();
    let inputs: Vec<Block> = (0..64)
        .map(|seed| Block::from_fn(8, 8, |y, x| ((seed * 31 + y * 8 + x) % 256) as f64))
        .collect();

    let outputs: Vec<Block> = inputs
        .par_iter()
        .map(|block| engine.inverse(&engine.forward(block).unwrap()).unwrap())
        .collect();

    for (input, output) in inputs.iter().zip(&outputs) {
        assert_blocks_close(output, input, 1e-9);
    }
}
