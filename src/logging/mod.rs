
use std::cell::{Cell, RefCell};
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use chrono::Local;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

trait LogSink {
    fn log(&self, level: LogLevel, line: &str);
}

struct StdoutSink;
impl LogSink for StdoutSink {
    fn log(&self, level: LogLevel, line: &str) {
        if level == LogLevel::Info {
            println!("{line}");
        }
    }
}

struct StderrSink;
impl LogSink for StderrSink {
    fn log(&self, level: LogLevel, line: &str) {
        if matches!(level, LogLevel::Warn | LogLevel::Error) {
            eprintln!("{line}");
        }
    }
}

struct FileSink {
    file: RefCell<File>,
}

impl FileSink {
    fn new(dir: &Path) -> std::io::Result<(Self, PathBuf)> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("sorting-{stamp}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok((
            Self {
                file: RefCell::new(file),
            },
            path,
        ))
    }
}

impl LogSink for FileSink {
    fn log(&self, _level: LogLevel, line: &str) {
        let _ = writeln!(self.file.borrow_mut(), "{line}");
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub enum LogTarget {
    #[default]
    ConsoleOnly,
    ConsoleAndFile,
    FileOnly,
}

/// Console logger with an optional session file.
///
/// The file is created on the first file-targeted message, and only when
/// file logging is enabled.
#[derive(Clone)]
pub struct Logger {
    console_sinks: Rc<Vec<Box<dyn LogSink>>>,
    file_state: Rc<RefCell<FileState>>,
    file_enabled: Rc<Cell<bool>>,
}

struct FileState {
    sink: Option<Rc<FileSink>>,
    log_path: Option<PathBuf>,
    attempted: bool,
    log_dir: PathBuf,
}

impl Default for FileState {
    fn default() -> Self {
        Self {
            sink: None,
            log_path: None,
            attempted: false,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        let console_sinks: Vec<Box<dyn LogSink>> = vec![Box::new(StdoutSink), Box::new(StderrSink)];

        Self {
            console_sinks: Rc::new(console_sinks),
            file_state: Rc::new(RefCell::new(FileState::default())),
            file_enabled: Rc::new(Cell::new(false)),
        }
    }

    fn ensure_file_sink(&self) -> Option<Rc<FileSink>> {
        let mut state = self.file_state.borrow_mut();
        if state.attempted {
            return state.sink.clone();
        }
        state.attempted = true;

        match FileSink::new(&state.log_dir) {
            Ok((sink, path)) => {
                let sink = Rc::new(sink);
                state.log_path = Some(path);
                state.sink = Some(sink.clone());
                Some(sink)
            }
            Err(err) => {
                eprintln!("WARN: File logging unavailable; continuing without a log file. ({err})");
                None
            }
        }
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if matches!(target, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile) {
            for sink in self.console_sinks.iter() {
                sink.log(level, message);
            }
        }

        if matches!(target, LogTarget::ConsoleAndFile | LogTarget::FileOnly)
            && self.file_enabled.get()
        {
            if let Some(file_sink) = self.ensure_file_sink() {
                let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
                let file_line = format!("[{timestamp}] {:<5} {message}", level);
                file_sink.log(level, &file_line);
            }
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.file_enabled.set(enabled);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled.get()
    }

    /// Has no effect once the log file exists.
    pub fn set_log_dir(&self, dir: impl AsRef<Path>) {
        let mut state = self.file_state.borrow_mut();
        if state.sink.is_none() && !state.attempted {
            state.log_dir = dir.as_ref().to_path_buf();
        }
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.file_state.borrow().log_path.clone()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("file_enabled", &self.file_enabled.get())
            .field("log_path", &self.log_path())
            .finish()
    }
}
