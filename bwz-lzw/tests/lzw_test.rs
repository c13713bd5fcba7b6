//! Comprehensive LZW integration tests.

use bwz_core::{BitReader, BwzError};
use bwz_lzw::{
    END_OF_DATA, FIRST_CODE, START_CODE_WIDTH, compress, compress_with_bwt, decompress,
    decompress_with_bwt,
};

/// Re-read a compressed stream code by code, replaying the decoder's
/// width schedule. Returns every code in order, sentinel included.
fn replay_codes(stream: &[u8]) -> Vec<u32> {
    let mut reader = BitReader::new(stream);
    let mut width = START_CODE_WIDTH;
    let mut next_code = FIRST_CODE;
    let mut codes = Vec::new();

    let first = reader.read_bits(width).expect("stream missing first code");
    codes.push(first);
    if first == END_OF_DATA {
        return codes;
    }

    loop {
        let code = reader.read_bits(width).expect("stream ended before sentinel");
        codes.push(code);
        if code == END_OF_DATA {
            return codes;
        }
        next_code += 1;
        if next_code >= 1 << width {
            width += 1;
        }
    }
}

#[test]
fn test_lzw_roundtrip_simple() {
    let original = b"TOBEORNOTTOBEORTOBEORNOT";
    let compressed = compress(original).expect("compression failed");
    let decompressed = decompress(&compressed).expect("decompression failed");

    assert_eq!(decompressed, original);
}

#[test]
fn test_lzw_roundtrip_repeated_text() {
    let original = b"This is a test of compression! ".repeat(10);
    let compressed = compress(&original).expect("compression failed");
    let decompressed = decompress(&compressed).expect("decompression failed");

    assert_eq!(decompressed.len(), original.len());
    assert_eq!(decompressed, original);
}

#[test]
fn test_lzw_roundtrip_large() {
    let original = b"The quick brown fox jumps over the lazy dog. ".repeat(100);
    let compressed = compress(&original).expect("compression failed");
    let decompressed = decompress(&compressed).expect("decompression failed");

    assert_eq!(decompressed, original);
}

#[test]
fn test_lzw_single_byte() {
    let original = b"A";
    let compressed = compress(original).expect("compression failed");
    let decompressed = decompress(&compressed).expect("decompression failed");

    assert_eq!(decompressed, original);
}

#[test]
fn test_lzw_all_same_byte() {
    let original = vec![b'X'; 1000];
    let compressed = compress(&original).expect("compression failed");

    assert!(
        compressed.len() < original.len() / 5,
        "repeated byte should compress to less than 20% of original"
    );

    let decompressed = decompress(&compressed).expect("decompression failed");
    assert_eq!(decompressed, original);
}

#[test]
fn test_lzw_all_byte_values() {
    let original: Vec<u8> = (0..=255).collect();
    let compressed = compress(&original).expect("compression failed");
    let decompressed = decompress(&compressed).expect("decompression failed");

    assert_eq!(decompressed, original);
}

#[test]
fn test_lzw_binary_noise_roundtrips() {
    // Incompressible input may expand from width overhead but must
    // still reconstruct exactly.
    let mut original = Vec::with_capacity(16 * 1024);
    let mut seed = 0x9E3779B97F4A7C15u64;
    for _ in 0..16 * 1024 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        original.push((seed >> 33) as u8);
    }

    let compressed = compress(&original).expect("compression failed");
    let decompressed = decompress(&compressed).expect("decompression failed");
    assert_eq!(decompressed, original);
}

#[test]
fn test_sentinel_appears_exactly_once() {
    let cases: Vec<Vec<u8>> = vec![
        b"A".to_vec(),
        b"TOBEORNOTTOBEORTOBEORNOT".to_vec(),
        vec![b'X'; 2000],
        (0..=255).collect(),
        b"mississippi".repeat(40),
    ];

    for original in cases {
        let compressed = compress(&original).expect("compression failed");
        let codes = replay_codes(&compressed);

        let (last, body) = codes.split_last().expect("stream has no codes");
        assert_eq!(*last, END_OF_DATA, "stream must end with the sentinel");
        assert!(
            body.iter().all(|&code| code != END_OF_DATA),
            "sentinel appeared before end of stream"
        );
    }
}

#[test]
fn test_codes_never_exceed_dictionary() {
    let original = b"abcdabcdabcdabcd extra abcdabcd".repeat(30);
    let compressed = compress(&original).expect("compression failed");

    let codes = replay_codes(&compressed);
    let body = &codes[..codes.len() - 1];
    for (i, &code) in body.iter().enumerate() {
        if i == 0 {
            // Nothing is registered before the first code; it must be a
            // literal.
            assert!(code < 256, "first code {} is not a literal", code);
        } else {
            // One entry is registered per prior code; a code may
            // reference at most the entry being created this step.
            let next_code = FIRST_CODE + (i as u32 - 1);
            assert!(code <= next_code, "code {} beyond dictionary", code);
        }
    }
}

#[test]
fn test_width_grows_past_nine_bits() {
    // Enough distinct pairs to assign more than 255 dictionary entries.
    let mut original = Vec::new();
    for a in 0..=255u8 {
        for b in [0u8, 85, 170, 255] {
            original.push(a);
            original.push(b);
        }
    }

    let compressed = compress(&original).expect("compression failed");
    let codes = replay_codes(&compressed);
    assert!(
        codes.len() > 512 - 256,
        "input should emit enough codes to widen"
    );

    let decompressed = decompress(&compressed).expect("decompression failed");
    assert_eq!(decompressed, original);
}

#[test]
fn test_composed_roundtrip() {
    let cases: Vec<Vec<u8>> = vec![
        b"BANANA".to_vec(),
        b"A".to_vec(),
        b"AA BB$".to_vec(),
        b"she sells seashells by the seashore".to_vec(),
        vec![0u8; 1500],
        (0..=255).cycle().take(4096).collect(),
    ];

    for original in cases {
        let compressed = compress_with_bwt(&original).expect("compression failed");
        let decompressed = decompress_with_bwt(&compressed).expect("decompression failed");
        assert_eq!(decompressed, original, "composed roundtrip failed");
    }
}

#[test]
fn test_long_runs_compress_with_bwt() {
    let mut original = Vec::new();
    for chunk in [b"aaaa", b"bbbb", b"cccc", b"aaaa"] {
        for _ in 0..200 {
            original.extend_from_slice(chunk);
        }
    }

    let compressed = compress_with_bwt(&original).expect("compression failed");
    assert!(
        compressed.len() < original.len(),
        "long runs must shrink: {} -> {}",
        original.len(),
        compressed.len()
    );

    let decompressed = decompress_with_bwt(&compressed).expect("decompression failed");
    assert_eq!(decompressed, original);
}

#[test]
fn test_empty_input_rejected() {
    assert!(matches!(compress(b""), Err(BwzError::EmptyInput)));
    assert!(matches!(compress_with_bwt(b""), Err(BwzError::EmptyInput)));
}
