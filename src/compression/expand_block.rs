use super::dictionary::DictEntry;

/// Undo the substitutions of one block.
///
/// `dictionary` must be in stream order, newest entry first. Each entry takes one
/// linear pass that swaps its code for its pair. Returns None if the block grows
/// past `limit` bytes, which no stream written by the encoder can do.
pub fn expand_block(dictionary: &[DictEntry], payload: &[u8], limit: usize) -> Option<Vec<u8>> {
    let mut data = payload.to_vec();
    let mut scratch = Vec::with_capacity(data.len());

    for entry in dictionary {
        let hits = data.iter().filter(|&&b| b == entry.code).count();
        if hits == 0 {
            continue;
        }
        if data.len() + hits > limit {
            return None;
        }
        scratch.clear();
        scratch.reserve(data.len() + hits);
        for &b in &data {
            if b == entry.code {
                scratch.push(entry.pair.0);
                scratch.push(entry.pair.1);
            } else {
                scratch.push(b);
            }
        }
        std::mem::swap(&mut data, &mut scratch);
    }
    Some(data)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compression::compress_block::compress_block;

    const LIMIT: usize = 65535;

    #[test]
    fn empty_dictionary_is_identity() {
        assert_eq!(expand_block(&[], b"plain", LIMIT), Some(b"plain".to_vec()));
    }

    #[test]
    fn single_entry() {
        let dict = [DictEntry::new(b'X', (b'a', b'b'))];
        assert_eq!(
            expand_block(&dict, b"XcX", LIMIT),
            Some(b"abcab".to_vec())
        );
    }

    #[test]
    fn newest_first_restores_nested_codes() {
        // Created X = aa, then Y = Xb. The stream lists Y first.
        let x = DictEntry::new(b'X', (b'a', b'a'));
        let y = DictEntry::new(b'Y', (b'X', b'b'));
        let payload = b"YYYY";

        let stream_order = [y, x];
        assert_eq!(
            expand_block(&stream_order, payload, LIMIT),
            Some(b"aabaabaabaab".to_vec())
        );

        // Replaying in creation order leaves the inner code behind.
        let creation_order = [x, y];
        let wrong = expand_block(&creation_order, payload, LIMIT).unwrap();
        assert_ne!(wrong, b"aabaabaabaab".to_vec());
        assert_eq!(wrong, b"XbXbXbXb".to_vec());
    }

    #[test]
    fn builder_output_expands_in_reverse() {
        let input = b"aabbaabbaabbaabb";
        let (mut dict, data) = compress_block(input);
        assert!(dict.len() > 1);

        let forward = expand_block(&dict, &data, LIMIT).unwrap();
        assert_ne!(forward, input.to_vec());

        dict.reverse();
        assert_eq!(expand_block(&dict, &data, LIMIT).unwrap(), input.to_vec());
    }

    #[test]
    fn runaway_expansion_is_refused() {
        // Each entry doubles the block.
        let dict: Vec<DictEntry> = (0..20_u8).map(|c| DictEntry::new(c, (c + 1, c + 1))).collect();
        assert_eq!(expand_block(&dict, &[0], 1000), None);
        assert_eq!(expand_block(&dict[..5], &[0], 1000).map(|v| v.len()), Some(32));
    }
}
