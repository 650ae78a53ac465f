//! Stderr logging shared by `benchmark` and `heap_demo`.
//!
//! stdout stays reserved for the JSON document and the heap trace.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Install the logger once per process; later calls are no-ops.
///
/// `--verbose` turns on per-algorithm timings and skip notices (Info);
/// without it only wrong-output and fallback warnings show. `RUST_LOG`
/// overrides either. Lines read `[HH:MM:SS] LEVEL: message`, timed from
/// the first call.
pub fn init_logger(verbose: bool) {
    let start = *START_TIME.get_or_init(Instant::now);

    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(move |buf, record| {
            let elapsed = start.elapsed().as_secs();
            writeln!(
                buf,
                "[{:02}:{:02}:{:02}] {}: {}",
                elapsed / 3600,
                (elapsed % 3600) / 60,
                elapsed % 60,
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .try_init();
}
