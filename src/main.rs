//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::process::exit;

use bpe::compression::{compress::compress_file, decompress::decompress_file};
use bpe::tools::cli::{bpeopts_init, Mode};

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() {
    // Log to stderr: stdout may be carrying the compressed stream.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Unable to start logging: {}", e);
    }

    let options = match bpeopts_init() {
        Ok(options) => options,
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    };

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Compress => compress_file(&options),
        Mode::Decompress => decompress_file(&options),
    };

    match result {
        Ok(stats) => info!(
            "Done. {} blocks, {} bytes <-> {} bytes.",
            stats.blocks, stats.original, stats.serialized
        ),
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    }
}
