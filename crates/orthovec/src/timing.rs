use std::time::Instant;

/// Runs `f` and reports its wall-clock time at `debug` level under `stage`.
///
/// Nothing is printed unless the caller installs a `tracing` subscriber.
pub fn timed<T>(stage: &'static str, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
    tracing::debug!(stage, elapsed_ms, "stage finished");
    out
}
