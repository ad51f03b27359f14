use chrono::{DateTime, Local};
use colored::{Color, Colorize};
use tracing::{error, info, warn};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d T%H:%M:%S";

/// Severity of a console message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Default,
    Warning,
    Error,
    Success,
    Info,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Default => "DEFAULT",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Success => "SUCCESS",
            Severity::Info => "INFO",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Severity::Default => Color::White,
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Red,
            Severity::Success => Color::Green,
            Severity::Info => Color::Cyan,
        }
    }
}

/// Status reporter for a replication run.
///
/// In tui mode each message is printed to stdout as a timestamped, colored
/// line. Otherwise the message is handed to [`tracing`], so that a subscriber
/// installed with `--trace` sees one stream instead of two; the severity label
/// travels as the `severity` field of the event.
#[derive(Clone, Copy, Debug)]
pub struct Console {
    tui: bool,
}

impl Console {
    pub fn new(tui: bool) -> Self {
        Self { tui }
    }

    pub fn log(&self, severity: Severity, message: impl AsRef<str>) {
        let message = message.as_ref();
        if self.tui {
            println!("{}", format_line(Local::now(), severity, message));
            return;
        }
        let label = severity.label();
        match severity {
            Severity::Error => error!(severity = label, "{message}"),
            Severity::Warning => warn!(severity = label, "{message}"),
            Severity::Default | Severity::Success | Severity::Info => {
                info!(severity = label, "{message}")
            }
        }
    }

    pub fn default(&self, message: impl AsRef<str>) {
        self.log(Severity::Default, message)
    }

    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(Severity::Warning, message)
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Severity::Error, message)
    }

    pub fn success(&self, message: impl AsRef<str>) {
        self.log(Severity::Success, message)
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Severity::Info, message)
    }

    /// Print a title bar; tui mode only.
    pub fn banner(&self, title: &str) {
        if self.tui {
            println!("{}", format!(" /// {title} \\\\\\ ").white().on_blue());
        }
    }

    /// Print `n` empty lines; tui mode only.
    pub fn gap(&self, n: usize) {
        if self.tui {
            print!("{}", "\n".repeat(n));
        }
    }
}

/// `[ 2024-01-31 T09:30:00 ][ SUCCESS ]  message`
pub fn format_line(time: DateTime<Local>, severity: Severity, message: &str) -> String {
    let stamp = format!("[ {} ]", time.format(TIMESTAMP_FORMAT));
    format!(
        "{}[ {} ]  {message}",
        stamp.white().on_blue(),
        format!("{:>7}", severity.label()).color(severity.color())
    )
}
