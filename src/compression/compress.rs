use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};

use log::{debug, info};
use rayon::prelude::*;

use super::compress_block::compress_block;
use super::config::BpeConfig;
use super::stats::CodecStats;
use crate::bytestream::bytereader::ByteReader;
use crate::bytestream::bytewriter::ByteWriter;
use crate::error::{BpeError, Result};
use crate::tools::cli::{BpeOpts, Output};

/*
    The encoder pulls blocks of up to block_size bytes from the input. Each block is
    compressed on its own, serialized completely in memory, and only then written,
    so the output never holds part of a block. Blocks are written in input order,
    also when they were compressed in parallel.
*/

/// Iterator that returns the input in blocks of at most block_size bytes. Only the
/// last block may be short, and an empty input yields no blocks at all.
pub struct BlockReader<R> {
    source: ByteReader<R>,
    block_size: usize,
    data_gone: bool,
}

impl<R: Read> BlockReader<R> {
    pub fn new(source: R, block_size: usize) -> Self {
        Self {
            source: ByteReader::new(source),
            block_size,
            data_gone: false,
        }
    }
}

impl<R: Read> Iterator for BlockReader<R> {
    type Item = Result<Vec<u8>>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.data_gone {
            return None;
        }
        let mut block = vec![0_u8; self.block_size];
        match self.source.fill(&mut block) {
            Ok(0) => {
                self.data_gone = true;
                None
            }
            Ok(n) => {
                // A short fill means the source is exhausted.
                if n < self.block_size {
                    self.data_gone = true;
                    block.truncate(n);
                }
                Some(Ok(block))
            }
            Err(e) => {
                self.data_gone = true;
                Some(Err(e))
            }
        }
    }
}

fn bad_block(msg: String) -> BpeError {
    BpeError::Io(io::Error::new(io::ErrorKind::InvalidData, msg))
}

/// Compress one block and return its complete record:
/// dict_size, entries newest first (code, pair), data_size, payload.
pub fn encode_block(data: &[u8]) -> Result<Vec<u8>> {
    let (dictionary, payload) = compress_block(data);

    let dict_size = u8::try_from(dictionary.len())
        .map_err(|_| bad_block(format!("{} dictionary entries", dictionary.len())))?;
    let data_size = u16::try_from(payload.len())
        .map_err(|_| bad_block(format!("{} byte block payload", payload.len())))?;

    let mut bw = ByteWriter::new(Vec::with_capacity(3 + 3 * dictionary.len() + payload.len()));
    bw.out8(dict_size)?;
    for entry in dictionary.iter().rev() {
        bw.out8(entry.code)?;
        bw.out16(entry.packed_pair())?;
    }
    bw.out16(data_size)?;
    bw.out_bytes(&payload)?;

    debug!(
        "Block of {} bytes: {} dictionary entries, {} byte payload",
        data.len(),
        dictionary.len(),
        payload.len()
    );
    Ok(bw.into_inner())
}

/// Block codec, compression direction.
#[derive(Debug, Clone)]
pub struct BlockEncoder {
    config: BpeConfig,
}

impl BlockEncoder {
    pub fn new(config: BpeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BpeConfig {
        &self.config
    }

    /// Compress everything from input into output. Returns the byte counts.
    pub fn encode<R: Read, W: Write>(&self, input: R, output: W) -> Result<CodecStats> {
        let mut blocks = BlockReader::new(input, self.config.block_size);
        let mut bw = ByteWriter::new(output);
        let mut stats = CodecStats::default();

        if self.config.parallel {
            self.encode_parallel(&mut blocks, &mut bw, &mut stats)?;
        } else {
            for block in blocks {
                let block = block?;
                let record = encode_block(&block)?;
                bw.out_bytes(&record)?;
                stats.record(block.len(), record.len());
                info!("Wrote block {} ({} -> {} bytes)", stats.blocks, block.len(), record.len());
            }
        }
        bw.flush()?;
        Ok(stats)
    }

    /// Read a batch of blocks, compress them on the rayon pool, write them in order.
    fn encode_parallel<R: Read, W: Write>(
        &self,
        blocks: &mut BlockReader<R>,
        bw: &mut ByteWriter<W>,
        stats: &mut CodecStats,
    ) -> Result<()> {
        let batch = rayon::current_num_threads().max(1) * 4;
        loop {
            let mut chunk = Vec::with_capacity(batch);
            for block in blocks.by_ref().take(batch) {
                chunk.push(block?);
            }
            if chunk.is_empty() {
                return Ok(());
            }
            let records: Vec<Result<Vec<u8>>> =
                chunk.par_iter().map(|block| encode_block(block)).collect();
            for (block, record) in chunk.iter().zip(records) {
                let record = record?;
                bw.out_bytes(&record)?;
                stats.record(block.len(), record.len());
            }
            info!("Wrote {} blocks", stats.blocks);
        }
    }
}

/// Compress a byte slice in memory.
pub fn compress_bytes(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    let encoder = BlockEncoder::new(BpeConfig::new(block_size)?);
    let mut out = Vec::with_capacity(data.len() + 3);
    encoder.encode(data, &mut out)?;
    Ok(out)
}

/// Compress the input file named in opts, to a file or to stdout, then apply the
/// keep/remove policy for the input.
pub fn compress_file(opts: &BpeOpts) -> Result<CodecStats> {
    let fin = File::open(&opts.file).map_err(|source| BpeError::InputUnavailable {
        name: opts.file.clone(),
        source,
    })?;
    let config = BpeConfig::new(opts.block_size)?.with_parallel(opts.parallel);
    let encoder = BlockEncoder::new(config);
    info!("Compressing {} to {} with block size {}", opts.file, opts.output, config.block_size);

    let stats = match &opts.output {
        Output::Stdout => {
            let stdout = io::stdout();
            let handle = stdout.lock();
            encoder.encode(fin, BufWriter::new(handle))?
        }
        Output::File(name) => {
            let f_out = File::create(name).map_err(|source| BpeError::OutputUnavailable {
                name: name.clone(),
                source,
            })?;
            encoder.encode(fin, BufWriter::new(f_out))?
        }
    };

    if opts.verbose {
        eprintln!("Reduction: {:.2}%", stats.reduction());
    }

    if let Output::File(_) = opts.output {
        if !opts.keep {
            fs::remove_file(&opts.file)?;
            info!("Removed {}", opts.file);
        }
    }
    Ok(stats)
}
