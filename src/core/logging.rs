//! Logging setup for applications embedding the queue
//!
//! The library itself only emits records through the `log` facade. This
//! module installs a `flexi_logger` backend with the crate's text, extended
//! and JSON formats.

use std::io::Write;
use std::sync::{Mutex, OnceLock};

use flexi_logger::{DeferredNow, FileSpec, Logger, LoggerHandle};
use log::{Level, Record};

static LOGGER_HANDLE: OnceLock<Mutex<LoggerHandle>> = OnceLock::new();

/// Output format of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `timestamp LVL message`
    #[default]
    Text,
    /// Text plus `module/path.rs:line`
    Extended,
    /// One compact JSON object per line
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to [`LogFormat::Text`].
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("json") => LogFormat::Json,
            Some("ext") => LogFormat::Extended,
            _ => LogFormat::Text,
        }
    }
}

/// Install the global logger.
///
/// `log_level` uses flexi_logger's spec syntax (`"debug"`,
/// `"info, strqueue::queue=trace"`) and defaults to `info`. `log_format` is
/// one of `text`, `ext` or `json`. When `log_file` is given, output goes to
/// that file instead of stderr.
pub fn init_logging(
    log_level: Option<&str>,
    log_format: Option<&str>,
    log_file: Option<&str>,
    color_enabled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut logger = Logger::try_with_str(log_level.unwrap_or("info"))?;

    logger = match (LogFormat::from_name(log_format), color_enabled) {
        (LogFormat::Json, _) => logger.format(json_format),
        (LogFormat::Extended, true) => logger.format(extended_color_format),
        (LogFormat::Extended, false) => logger.format(extended_format),
        (LogFormat::Text, true) => logger.format(simple_color_format),
        (LogFormat::Text, false) => logger.format(simple_format),
    };

    if let Some(file_path) = log_file {
        let file_spec = FileSpec::try_from(std::path::Path::new(file_path))?;
        logger = logger.log_to_file(file_spec);
    }

    let handle = logger.start()?;
    let _ = LOGGER_HANDLE.set(Mutex::new(handle));

    Ok(())
}

/// Change the active log level.
///
/// Only the level can change at runtime; format and destination are fixed
/// once [`init_logging`] has run.
pub fn reconfigure_logging(log_level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let handle_mutex = LOGGER_HANDLE
        .get()
        .ok_or("Logger handle not initialised. Call init_logging first.")?;
    let mut handle = handle_mutex
        .lock()
        .map_err(|_| "Could not acquire logger handle lock")?;
    handle.parse_and_push_temp_spec(log_level)?;
    Ok(())
}

fn level_abbr(level: Level) -> &'static str {
    match level {
        Level::Error => "ERR",
        Level::Warn => "WRN",
        Level::Info => "INF",
        Level::Debug => "DBG",
        Level::Trace => "TRC",
    }
}

fn level_colored(level: Level) -> colored::ColoredString {
    use colored::Colorize;

    match level {
        Level::Error => "ERR".red().bold(),
        Level::Warn => "WRN".yellow(),
        Level::Info => "INF".green(),
        Level::Debug => "DBG".blue(),
        Level::Trace => "TRC".magenta(),
    }
}

// "YYYY-MM-DD HH:mm:ss.fff INF message"
fn simple_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} {} {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr(record.level()),
        record.args()
    )
}

fn simple_color_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    use colored::Colorize;

    write!(
        w,
        "{} {} {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
        level_colored(record.level()),
        record.args()
    )
}

// "YYYY-MM-DD HH:mm:ss.fff INF message (queue/internal.rs:42)"
fn extended_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr(record.level()),
        record.args(),
        format_target_as_path(record.target(), record.line())
    )
}

fn extended_color_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    use colored::Colorize;

    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
        level_colored(record.level()),
        record.args(),
        format_target_as_path(record.target(), record.line()).dimmed()
    )
}

fn json_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let json_obj = serde_json::json!({
        "timestamp": now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        "level": level_abbr(record.level()),
        "message": record.args().to_string(),
        "target": format_target_as_path(record.target(), record.line()),
    });

    match serde_json::to_string(&json_obj) {
        Ok(json_string) => w.write_all(json_string.as_bytes()),
        Err(_) => w.write_all(b"{\"error\":\"Failed to serialize log message\"}"),
    }
}

// strqueue::queue::internal -> queue/internal.rs
fn format_target_as_path(target: &str, line: Option<u32>) -> String {
    let path_like = match target.strip_prefix("strqueue::") {
        Some(without_prefix) => without_prefix.replace("::", "/") + ".rs",
        None => target.replace("::", "/"),
    };

    match line {
        Some(line_num) => format!("{}:{}", path_like, line_num),
        None => path_like,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn render(
        format: fn(&mut dyn Write, &mut DeferredNow, &Record) -> Result<(), std::io::Error>,
        target: &str,
    ) -> String {
        let mut buffer = Vec::new();
        let mut now = DeferredNow::new();
        let record = Record::builder()
            .level(Level::Info)
            .target(target)
            .line(Some(42))
            .args(format_args!("Test message"))
            .build();

        format(&mut buffer, &mut now, &record).expect("format should succeed");
        String::from_utf8(buffer).expect("output should be valid UTF-8")
    }

    #[test]
    fn test_format_names() {
        assert_eq!(LogFormat::from_name(None), LogFormat::Text);
        assert_eq!(LogFormat::from_name(Some("ext")), LogFormat::Extended);
        assert_eq!(LogFormat::from_name(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::from_name(Some("yaml")), LogFormat::Text);
    }

    #[test]
    fn test_target_as_path() {
        assert_eq!(
            format_target_as_path("strqueue::queue::internal", Some(7)),
            "queue/internal.rs:7"
        );
        assert_eq!(format_target_as_path("other::module", None), "other/module");
    }

    #[test]
    fn test_simple_format() {
        let output = render(simple_format, "strqueue::queue::internal");
        assert!(output.contains("INF Test message"), "got: {}", output);
        assert!(!output.contains("internal.rs"));
    }

    #[test]
    fn test_extended_format() {
        let output = render(extended_format, "strqueue::queue::internal");
        assert!(
            output.ends_with("INF Test message (queue/internal.rs:42)"),
            "got: {}",
            output
        );
    }

    #[test]
    fn test_json_format() {
        let output = render(json_format, "strqueue::queue::sort");
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(parsed["level"], "INF");
        assert_eq!(parsed["message"], "Test message");
        assert_eq!(parsed["target"], "queue/sort.rs:42");
        assert!(!output.contains('\n'));
    }

    fn read_logs(dir: &std::path::Path) -> String {
        let mut contents = String::new();
        for entry in std::fs::read_dir(dir).expect("log dir readable") {
            let path = entry.expect("dir entry").path();
            contents.push_str(&std::fs::read_to_string(&path).expect("log file readable"));
        }
        contents
    }

    #[test]
    #[serial]
    fn test_init_logging_to_file() {
        // Nothing else in this binary installs a logger
        assert!(LOGGER_HANDLE.get().is_none());
        assert!(reconfigure_logging("debug").is_err());

        let temp_dir = tempfile::tempdir().expect("temp dir");
        let log_path = temp_dir.path().join("strqueue.log");
        let log_path = log_path.to_string_lossy().into_owned();

        init_logging(Some("debug"), Some("ext"), Some(&log_path), false)
            .expect("logger should start");
        assert!(LOGGER_HANDLE.get().is_some());

        log::info!(target: "strqueue::core::logging", "queue logging ready");
        assert!(reconfigure_logging("trace").is_ok());
        LOGGER_HANDLE
            .get()
            .expect("handle stored")
            .lock()
            .expect("handle lock")
            .flush();

        let logs = read_logs(temp_dir.path());
        assert!(
            logs.contains("INF queue logging ready (core/logging.rs:"),
            "got: {}",
            logs
        );
    }
}
