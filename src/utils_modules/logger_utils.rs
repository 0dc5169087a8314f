use crate::common::*;

#[doc = "Log line format shared by the file writer and the stdout duplicate"]
fn custom_log_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.now().format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.args()
    )
}

#[doc = r#"
    Installs the global logger.

    Logs are written to daily-rotated files under `logs/` and duplicated to
    stdout at info level. Must be called once, before any other component
    starts logging.

    # Panics
    When the logger cannot be initialized (unwritable log directory).
"#]
pub fn set_global_logger() {
    Logger::try_with_str("info")
        .expect("[logger_utils->set_global_logger] Invalid log specification")
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(14),
        )
        .duplicate_to_stdout(Duplicate::Info)
        .format_for_files(custom_log_format)
        .format_for_stdout(custom_log_format)
        .start()
        .expect("[logger_utils->set_global_logger] Failed to initialize logger");
}
