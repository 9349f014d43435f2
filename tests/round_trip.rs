//! End-to-end tests of the block codec through the public API.

use bpe::{compress_bytes, decompress_bytes, BlockDecoder, BlockEncoder, BpeConfig, BpeError};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn round_trip(data: &[u8], block_size: usize) -> Vec<u8> {
    let packed = compress_bytes(data, block_size).expect("compress failed");
    let unpacked = decompress_bytes(&packed).expect("decompress failed");
    assert_eq!(unpacked, data, "block size {}", block_size);
    packed
}

/// Text with a lot of repeated pairs.
fn prose(len: usize) -> Vec<u8> {
    b"It was the best of times, it was the worst of times, it was the age of wisdom, \
      it was the age of foolishness, it was the epoch of belief. "
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

#[test]
fn empty_input_gives_empty_stream() {
    let packed = round_trip(&[], 8000);
    assert!(packed.is_empty());
}

#[test]
fn single_byte() {
    let packed = round_trip(b"x", 100);
    assert_eq!(packed, vec![0, 0, 1, b'x']);
}

#[test]
fn identical_bytes() {
    for len in [2, 3, 4, 7, 8, 9, 100, 101, 5000, 65535, 70000] {
        round_trip(&vec![b'A'; len], 100);
        round_trip(&vec![0xff; len], 65535);
    }
}

#[test]
fn eight_a() {
    let packed = round_trip(b"AAAAAAAA", 100);
    // One entry, (A,A) becomes code 0, four codes remain.
    assert_eq!(packed, vec![1, 0, b'A', b'A', 0, 4, 0, 0, 0, 0]);
}

#[test]
fn aabb_beats_verbatim() {
    let input = b"aabbaabbaabbaabb";
    let packed = round_trip(input, 100);
    assert!(packed.len() < input.len() + 3);
    let dict_size = packed[0] as usize;
    let payload = u16::from_be_bytes([packed[1 + 3 * dict_size], packed[2 + 3 * dict_size]]);
    assert_eq!(packed.len(), 3 + 3 * dict_size + payload as usize);
}

#[test]
fn random_content() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for &block_size in &[100, 101, 257, 1000, 8000, 65535] {
        for len in [1, 99, 100, 101, 3000, 20000] {
            let mut data = vec![0_u8; len];
            rng.fill(&mut data[..]);
            round_trip(&data, block_size);
        }
    }
}

#[test]
fn skewed_random_content() {
    // Few distinct bytes: many pairs qualify and codes nest deeply.
    let mut rng = StdRng::seed_from_u64(42);
    for alphabet in [2_u8, 3, 5, 16, 64] {
        let data: Vec<u8> = (0..30000).map(|_| rng.gen_range(0..alphabet)).collect();
        round_trip(&data, 8000);
        round_trip(&data, 65535);
    }
}

#[test]
fn prose_compresses() {
    let data = prose(100_000);
    let packed = round_trip(&data, 8000);
    assert!(packed.len() < data.len() / 2);
}

#[test]
fn exact_and_partial_blocks() {
    let data = prose(1000);
    // Exactly one full block.
    round_trip(&data, 1000);
    // Full blocks followed by a short one.
    round_trip(&data, 300);
    // Exactly four full blocks.
    let packed = round_trip(&data, 250);
    let stats = BlockDecoder::new("t")
        .decode(packed.as_slice(), Vec::new())
        .unwrap();
    assert_eq!(stats.blocks, 4);
}

#[test]
fn incompressible_block_stored_verbatim() {
    let data: Vec<u8> = (0..=255).collect();
    let packed = round_trip(&data, 256);
    assert_eq!(packed[0], 0);
    assert_eq!(&packed[1..3], &[1, 0]);
    assert_eq!(&packed[3..], data.as_slice());
}

#[test]
fn blocks_are_independent() {
    let a = prose(400);
    let b: Vec<u8> = (0..400).map(|i| (i * 7 % 251) as u8).collect();
    let mut both = a.clone();
    both.extend(&b);
    let packed_a = compress_bytes(&a, 400).unwrap();
    let packed_b = compress_bytes(&b, 400).unwrap();
    let packed_both = compress_bytes(&both, 400).unwrap();
    assert_eq!(packed_both, [packed_a, packed_b].concat());
}

#[test]
fn parallel_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut data = prose(50_000);
    data.extend((0..50_000).map(|_| rng.gen_range(b'a'..=b'f')));
    let config = BpeConfig::new(777).unwrap();

    let mut sequential = Vec::new();
    BlockEncoder::new(config)
        .encode(data.as_slice(), &mut sequential)
        .unwrap();
    let mut parallel = Vec::new();
    let stats = BlockEncoder::new(config.with_parallel(true))
        .encode(data.as_slice(), &mut parallel)
        .unwrap();

    assert_eq!(parallel, sequential);
    assert_eq!(stats.original, data.len() as u64);
    assert_eq!(decompress_bytes(&parallel).unwrap(), data);
}

#[test]
fn truncated_stream_is_reported() {
    let packed = compress_bytes(&prose(2000), 500).unwrap();
    let err = BlockDecoder::new("prose.bpe")
        .decode(&packed[..packed.len() - 1], Vec::new())
        .unwrap_err();
    assert!(matches!(err, BpeError::TruncatedStream { ref name } if name == "prose.bpe"));
    assert_eq!(err.to_string(), "prose.bpe: Bad format");
}
