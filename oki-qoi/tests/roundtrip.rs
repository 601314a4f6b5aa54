use nanorand::{Rng, WyRand};
use oki_qoi::{Pixel, QoiDecoder, QoiEncoder, Raster};

fn roundtrip(raster: &Raster) -> Raster {
    let encoded = QoiEncoder::new(raster).encode().unwrap();
    QoiDecoder::new(&encoded).decode().unwrap()
}

#[test]
fn test_random_rgba_roundtrip() {
    const W: usize = 251;
    const H: usize = 133;

    let mut rng = WyRand::new_seed(0x0C0FFEE);
    let pixels: Vec<Pixel> = (0..W * H)
        .map(|_| {
            Pixel::rgba(
                rng.generate::<u8>(),
                rng.generate::<u8>(),
                rng.generate::<u8>(),
                rng.generate::<u8>()
            )
        })
        .collect();
    let raster = Raster::new(W, H, pixels).unwrap();

    let decoded = roundtrip(&raster);

    assert_eq!(raster.width(), decoded.width());
    assert_eq!(raster.height(), decoded.height());
    assert_eq!(raster.pixels(), decoded.pixels());
}

#[test]
fn test_random_opaque_roundtrip() {
    // constant alpha keeps the encoder on the INDEX/DIFF/LUMA/RGB paths
    const W: usize = 199;
    const H: usize = 97;

    let mut rng = WyRand::new_seed(42);
    let pixels: Vec<Pixel> = (0..W * H)
        .map(|_| {
            // a small palette produces plenty of cache hits and runs
            Pixel::rgb(
                rng.generate::<u8>() % 8,
                rng.generate::<u8>() % 8,
                rng.generate::<u8>() % 8
            )
        })
        .collect();
    let raster = Raster::new(W, H, pixels).unwrap();

    assert_eq!(raster.pixels(), roundtrip(&raster).pixels());
}

#[test]
fn test_gradient_roundtrip() {
    // neighboring pixels stay within the DIFF and LUMA delta ranges
    const W: usize = 256;
    const H: usize = 4;

    let pixels: Vec<Pixel> = (0..W * H)
        .map(|i| {
            let x = (i % W) as u8;
            Pixel::rgb(x, x.wrapping_add(1), x / 2)
        })
        .collect();
    let raster = Raster::new(W, H, pixels).unwrap();

    assert_eq!(raster.pixels(), roundtrip(&raster).pixels());
}

#[test]
fn test_single_color_roundtrip() {
    // long runs split over many RUN opcodes
    const W: usize = 640;
    const H: usize = 480;

    let raster = Raster::new(W, H, vec![Pixel::rgba(1, 2, 3, 4); W * H]).unwrap();

    assert_eq!(raster.pixels(), roundtrip(&raster).pixels());
}

#[test]
fn test_alpha_change_roundtrip() {
    // alternating alpha forces RGBA opcodes and INDEX hits
    const W: usize = 100;
    const H: usize = 3;

    let pixels: Vec<Pixel> = (0..W * H)
        .map(|i| Pixel::rgba(10, 20, 30, if i % 2 == 0 { 255 } else { 128 }))
        .collect();
    let raster = Raster::new(W, H, pixels).unwrap();

    assert_eq!(raster.pixels(), roundtrip(&raster).pixels());
}

#[test]
fn test_smallest_raster_roundtrip() {
    let raster = Raster::new(1, 1, vec![Pixel::rgb(9, 9, 9)]).unwrap();

    assert_eq!(raster.pixels(), roundtrip(&raster).pixels());
}
