use oki_core::options::DecoderOptions;
use oki_qoi::{Pixel, QoiDecoder, QoiEncoder, QoiErrors, Raster};

const HEADER_SIZE: usize = 14;

fn header(width: u32, height: u32, channels: u8, colorspace: u8) -> Vec<u8> {
    let mut bytes = b"qoif".to_vec();
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.push(channels);
    bytes.push(colorspace);
    bytes
}

fn encode(raster: &Raster) -> Vec<u8> {
    QoiEncoder::new(raster).encode().unwrap()
}

#[test]
fn test_header_layout() {
    let raster = Raster::new(3, 2, vec![Pixel::rgb(50, 60, 70); 6]).unwrap();
    let encoded = encode(&raster);

    assert_eq!(&encoded[0..4], b"qoif");
    // width and height are big endian
    assert_eq!(&encoded[4..8], &[0x00, 0x00, 0x00, 0x03]);
    assert_eq!(&encoded[8..12], &[0x00, 0x00, 0x00, 0x02]);
    // channels are fixed to 4, colorspace to sRGB with linear alpha
    assert_eq!(encoded[12], 4);
    assert_eq!(encoded[13], 0);
}

#[test]
fn test_opcode_stream_for_known_pixels() {
    // first pixel is a LUMA delta off opaque black, the second extends
    // a run, the third hits the opaque black fill of the cache
    let pixels = vec![
        Pixel::rgba(10, 10, 10, 255),
        Pixel::rgba(10, 10, 10, 255),
        Pixel::rgba(0, 0, 0, 255),
    ];
    let raster = Raster::new(1, 3, pixels).unwrap();
    let encoded = encode(&raster);

    // LUMA(dg = 10), RUN(1), INDEX(53)
    assert_eq!(&encoded[HEADER_SIZE..], &[0xAA, 0x88, 0xC0, 0x35]);

    let decoded = QoiDecoder::new(&encoded).decode().unwrap();
    assert_eq!(raster.pixels(), decoded.pixels());
}

#[test]
fn test_run_boundary() {
    let grey = Pixel::rgb(7, 7, 7);

    // the leading pixel encodes as a 2 byte LUMA, the other 62 as one run
    let raster = Raster::new(63, 1, vec![grey; 63]).unwrap();
    let encoded = encode(&raster);
    assert_eq!(&encoded[HEADER_SIZE..], &[0xA7, 0x88, 0xFD]);

    // one more identical pixel spills into a second RUN opcode
    let raster = Raster::new(64, 1, vec![grey; 64]).unwrap();
    let encoded = encode(&raster);
    assert_eq!(&encoded[HEADER_SIZE..], &[0xA7, 0x88, 0xFD, 0xC0]);

    let decoded = QoiDecoder::new(&encoded).decode().unwrap();
    assert_eq!(raster.pixels(), decoded.pixels());
}

#[test]
fn test_run_takes_priority_over_index() {
    let a = Pixel::rgb(100, 20, 30);
    let b = Pixel::rgb(200, 50, 60);

    // the third pixel is a cache hit, the fourth repeats it and
    // must become a RUN, not another INDEX
    let raster = Raster::new(4, 1, vec![a, b, a, a]).unwrap();
    let encoded = encode(&raster);

    assert_eq!(
        &encoded[HEADER_SIZE..],
        &[0xFE, 100, 20, 30, 0xFE, 200, 50, 60, 0x17, 0xC0]
    );

    let decoded = QoiDecoder::new(&encoded).decode().unwrap();
    assert_eq!(raster.pixels(), decoded.pixels());
}

#[test]
fn test_wrong_magic_is_rejected() {
    let raster = Raster::new(2, 2, vec![Pixel::rgb(1, 1, 1); 4]).unwrap();
    let mut encoded = encode(&raster);
    encoded[0..4].copy_from_slice(b"spng");

    let result = QoiDecoder::new(&encoded).decode();
    assert!(matches!(result, Err(QoiErrors::WrongMagicBytes)));
}

#[test]
fn test_truncated_stream_is_rejected() {
    let raster = Raster::new(1, 3, vec![Pixel::rgb(10, 10, 10); 3]).unwrap();
    let mut encoded = encode(&raster);
    encoded.pop();

    let result = QoiDecoder::new(&encoded).decode();
    assert!(matches!(result, Err(QoiErrors::IoErrors(_))));
}

#[test]
fn test_trailing_bytes_are_rejected() {
    let raster = Raster::new(2, 2, vec![Pixel::rgb(1, 1, 1); 4]).unwrap();
    let mut encoded = encode(&raster);
    encoded.push(0x00);

    let result = QoiDecoder::new(&encoded).decode();
    assert!(matches!(result, Err(QoiErrors::TrailingBytes(1))));
}

#[test]
fn test_overlong_run_is_rejected() {
    // a single pixel image with a run of two
    let mut bytes = header(1, 1, 4, 0);
    bytes.push(0xC1);

    let result = QoiDecoder::new(&bytes).decode();
    assert!(matches!(result, Err(QoiErrors::RunTooLong(2, 1))));
}

#[test]
fn test_zero_dimension_is_rejected() {
    let bytes = header(0, 5, 4, 0);

    let result = QoiDecoder::new(&bytes).decode();
    assert!(matches!(result, Err(QoiErrors::ZeroDimension)));
}

#[test]
fn test_unknown_channel_count_is_rejected() {
    let bytes = header(1, 1, 5, 0);

    let result = QoiDecoder::new(&bytes).decode();
    assert!(matches!(result, Err(QoiErrors::UnknownChannels(5))));
}

#[test]
fn test_unknown_colorspace_respects_strict_mode() {
    let mut bytes = header(1, 1, 4, 9);
    bytes.extend_from_slice(&[0xFE, 1, 2, 3]);

    // lenient mode assumes sRGB and keeps going
    let decoded = QoiDecoder::new(&bytes).decode().unwrap();
    assert_eq!(decoded.pixels(), &[Pixel::rgb(1, 2, 3)]);

    let options = DecoderOptions::default().set_strict_mode(true);
    let result = QoiDecoder::new_with_options(&bytes, options).decode();
    assert!(matches!(result, Err(QoiErrors::UnknownColorspace(9))));
}

#[test]
fn test_configured_width_limit_is_respected() {
    let raster = Raster::new(11, 1, vec![Pixel::rgb(1, 1, 1); 11]).unwrap();
    let encoded = encode(&raster);

    let options = DecoderOptions::default().set_max_width(10);
    let result = QoiDecoder::new_with_options(&encoded, options).decode();
    assert!(matches!(result, Err(QoiErrors::Generic(_))));
}

#[test]
fn test_header_accessors() {
    let raster = Raster::new(3, 2, vec![Pixel::rgb(1, 1, 1); 6]).unwrap();
    let encoded = encode(&raster);

    let mut decoder = QoiDecoder::new(&encoded);
    assert_eq!(decoder.dimensions(), None);

    decoder.decode_headers().unwrap();
    assert_eq!(decoder.dimensions(), Some((3, 2)));
    assert_eq!(
        decoder.colorspace(),
        Some(oki_core::colorspace::ColorSpace::RGBA)
    );
    assert_eq!(decoder.is_linear(), Some(false));
}
