use clap::Parser;
use log::info;
use std::{fmt::Display, fmt::Formatter};

use crate::compression::config::{DEFAULT_BLOCK_SIZE, MAX_BLOCK_SIZE, MIN_BLOCK_SIZE};
use crate::error::{BpeError, Result};

const SUFFIX: &str = ".bpe";
const RESTORED_SUFFIX: &str = ".orig";

/// Compress or Decompress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Where the output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    File(String),
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::File(name) => write!(f, "{}", name),
            Output::Stdout => write!(f, "stdout"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BpeOpts {
    /// Compress/Decompress
    pub op_mode: Mode,
    /// Name of the file to read
    pub file: String,
    /// Location where output is sent
    pub output: Output,
    /// Maximum input block size to process during each loop
    pub block_size: usize,
    /// Report the percentage reduction after compressing
    pub verbose: bool,
    /// Don't remove the input file after compressing
    pub keep: bool,
    /// Compress blocks on every core
    pub parallel: bool,
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    name = "bpe",
    version,
    about = "bpe: a file compressor that implements Byte Pair Encoding.",
    after_help = "Examples:\n  bpe -c -v test.txt\n  bpe -d test.txt.bpe"
)]
pub struct Args {
    /// Compress <file>. If -o is not set, the output is written to "<file>.bpe"
    #[clap(short = 'c', long = "compress")]
    pub compress: bool,

    /// Decompress <file>
    #[clap(short = 'd', long = "decompress")]
    pub decompress: bool,

    /// Write output on standard output. Keep the original file unchanged
    #[clap(short = 'o', long = "stdout")]
    pub stdout: bool,

    /// Block size (default: 8000)
    #[clap(short = 'b', long = "block-size", value_name = "n")]
    pub block_size: Option<usize>,

    /// Verbose. Display the percentage reduction
    #[clap(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Keep (don't delete) the input file after compressing
    #[clap(short = 'k', long = "keep")]
    pub keep: bool,

    /// Compress blocks in parallel
    #[clap(short = 'p', long = "parallel")]
    pub parallel: bool,

    /// File to process
    #[clap(value_name = "file")]
    pub file: String,
}

impl BpeOpts {
    /// Check the parsed arguments and work out where the output goes.
    pub fn from_args(args: Args) -> Result<Self> {
        let op_mode = match (args.compress, args.decompress) {
            (true, true) => {
                return Err(BpeError::InvalidArguments(
                    "Incompatible options -c and -d".to_string(),
                ))
            }
            (false, false) => {
                return Err(BpeError::InvalidArguments(
                    "Incorrect arguments: you have to specify either -c option or -d option"
                        .to_string(),
                ))
            }
            (true, false) => Mode::Compress,
            (false, true) => Mode::Decompress,
        };

        if op_mode == Mode::Decompress {
            for (set, flag) in [
                (args.block_size.is_some(), 'b'),
                (args.verbose, 'v'),
                (args.parallel, 'p'),
            ] {
                if set {
                    return Err(BpeError::InvalidArguments(format!(
                        "-{} option is only compatible with -c option",
                        flag
                    )));
                }
            }
        }

        let block_size = args.block_size.unwrap_or(DEFAULT_BLOCK_SIZE);
        if !(MIN_BLOCK_SIZE..=MAX_BLOCK_SIZE).contains(&block_size) {
            return Err(BpeError::BlockSizeOutOfRange {
                size: block_size,
                min: MIN_BLOCK_SIZE,
                max: MAX_BLOCK_SIZE,
            });
        }

        let output = if args.stdout {
            Output::Stdout
        } else {
            Output::File(output_name(op_mode, &args.file))
        };

        Ok(Self {
            op_mode,
            file: args.file,
            output,
            block_size,
            verbose: args.verbose,
            keep: args.keep,
            parallel: args.parallel,
        })
    }
}

/// Compressing appends ".bpe". Decompressing strips a trailing ".bpe", or appends
/// ".orig" when there is none.
pub fn output_name(mode: Mode, file: &str) -> String {
    match mode {
        Mode::Compress => format!("{}{}", file, SUFFIX),
        Mode::Decompress => match file.strip_suffix(SUFFIX) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => format!("{}{}", file, RESTORED_SUFFIX),
        },
    }
}

/// Parse the process arguments into BpeOpts and set the log level.
pub fn bpeopts_init() -> Result<BpeOpts> {
    let opts = BpeOpts::from_args(Args::parse())?;

    // Set the log level
    if opts.verbose {
        log::set_max_level(log::LevelFilter::Info);
    } else {
        log::set_max_level(log::LevelFilter::Warn);
    }

    info!("Operational mode set to {}", opts.op_mode);
    info!("Block size set to {}", opts.block_size);
    if opts.keep {
        info!("Keeping input files")
    };
    Ok(opts)
}
