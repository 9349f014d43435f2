use log::{debug, info, trace};

use super::config::MAX_BLOCK_SIZE;
use super::dictionary::DictEntry;
use super::expand_block::expand_block;
use super::stats::CodecStats;
use crate::bytestream::bytereader::ByteReader;
use crate::bytestream::bytewriter::ByteWriter;
use crate::error::{BpeError, Result};
use crate::tools::cli::{BpeOpts, Output};

use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
};

/// Block codec, decompression direction. `name` identifies the input in error reports.
#[derive(Debug, Clone)]
pub struct BlockDecoder {
    name: String,
}

impl BlockDecoder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Decode every block from input into output. The stream may only end right
    /// before a dict_size byte; ending anywhere else is a TruncatedStream.
    pub fn decode<R: Read, W: Write>(&self, input: R, output: W) -> Result<CodecStats> {
        let mut br = ByteReader::new(input);
        let mut bw = ByteWriter::new(output);
        let mut stats = CodecStats::default();

        loop {
            let start = br.consumed();
            let dict_size = match br.in8() {
                Ok(n) => n,
                Err(e) if e.is_clean_eof() => break,
                Err(e) => return Err(e),
            };

            let data = self
                .read_block(&mut br, dict_size, stats.blocks + 1)
                .map_err(|e| self.truncated(e))?;

            bw.out_bytes(&data)?;
            stats.record(data.len(), (br.consumed() - start) as usize);
            info!("Wrote a block of data with {} bytes.", data.len());
        }
        bw.flush()?;
        Ok(stats)
    }

    /// Everything after the dict_size byte: entries, data_size, payload.
    fn read_block<R: Read>(
        &self,
        br: &mut ByteReader<R>,
        dict_size: u8,
        block: usize,
    ) -> Result<Vec<u8>> {
        // Stream order is newest entry first, which is the order expansion needs.
        let mut dictionary = Vec::with_capacity(dict_size as usize);
        for _ in 0..dict_size {
            let code = br.in8()?;
            let pair = br.in16()?;
            dictionary.push(DictEntry::from_packed(code, pair));
        }
        let data_size = br.in16()? as usize;
        let payload = br.in_bytes(data_size)?;
        trace!("Block {}: {:?}", block, dictionary);
        debug!(
            "Block {}: {} dictionary entries, {} byte payload",
            block, dict_size, data_size
        );

        if dictionary.is_empty() {
            return Ok(payload);
        }
        expand_block(&dictionary, &payload, MAX_BLOCK_SIZE).ok_or_else(|| {
            BpeError::CorruptBlock {
                name: self.name.clone(),
                block,
                limit: MAX_BLOCK_SIZE,
            }
        })
    }

    /// A short read inside a record means the stream was cut off.
    fn truncated(&self, e: BpeError) -> BpeError {
        match e {
            BpeError::ShortRead { .. } => BpeError::TruncatedStream {
                name: self.name.clone(),
            },
            other => other,
        }
    }
}

/// Decompress a byte slice in memory.
pub fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(data.len() * 2);
    BlockDecoder::new("<memory>").decode(data, &mut out)?;
    Ok(out)
}

/// Decompress the input file named in opts to a file or to stdout. The input is kept.
pub fn decompress_file(opts: &BpeOpts) -> Result<CodecStats> {
    let fin = File::open(&opts.file).map_err(|source| BpeError::InputUnavailable {
        name: opts.file.clone(),
        source,
    })?;
    let decoder = BlockDecoder::new(opts.file.clone());
    info!("Decompressing {} to {}", opts.file, opts.output);

    match &opts.output {
        Output::Stdout => {
            let stdout = io::stdout();
            let handle = stdout.lock();
            decoder.decode(fin, BufWriter::new(handle))
        }
        Output::File(name) => {
            let f_out = File::create(name).map_err(|source| BpeError::OutputUnavailable {
                name: name.clone(),
                source,
            })?;
            decoder.decode(fin, BufWriter::new(f_out))
        }
    }
}
