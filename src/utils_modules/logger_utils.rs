use crate::common::*;

#[doc = "Log line format: `[timestamp] [LEVEL] T[thread] message`"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        std::thread::current().name().unwrap_or("unknown"),
        &record.args()
    )
}

#[doc = r#"
    Initializes the global logger.

    Logs go to `logs/` with daily rotation and the last 10 files kept.
    Warnings and errors are echoed to stderr; stdout stays reserved for the
    chart confirmation lines.

    The returned handle must be kept alive for the lifetime of the program.
"#]
pub fn set_global_logger() -> LoggerHandle {
    let log_directory: &str = "logs";

    Logger::try_with_str("info")
        .and_then(|logger| {
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(log_directory)
                        .discriminant("bench_chart"),
                )
                .rotate(
                    Criterion::Age(Age::Day),
                    Naming::Timestamps,
                    Cleanup::KeepLogFiles(10),
                )
                .format_for_files(custom_format)
                .duplicate_to_stderr(Duplicate::Warn)
                .start()
        })
        .unwrap_or_else(|e| panic!("[set_global_logger] Logger initialization failed: {}", e))
}
