//! CLI command messaging system
//!
//! Consistent colored output for one-shot commands such as `init-config`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warn,
    Error,
    Success,
}

impl Tone {
    fn tag(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[1;33m[INFO]\x1b[0m",
            Tone::Warn => "\x1b[1;91m[WARN]\x1b[0m",
            Tone::Error => "\x1b[1;31m[ERROR]\x1b[0m",
            Tone::Success => "\x1b[1;32m[SUCCESS]\x1b[0m",
        }
    }
}

/// Format one message line; details follow the title after a tab.
pub fn format_message(tone: Tone, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tone.tag(), title)
    } else {
        format!("{} {}\t {}", tone.tag(), title, details)
    }
}

pub fn print_message(tone: Tone, title: &str, details: &str) {
    match tone {
        Tone::Error => eprintln!("{}", format_message(tone, title, details)),
        _ => println!("{}", format_message(tone, title, details)),
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::Tone::Info,
            $title,
            &format!($($details)*),
        )
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::Tone::Warn,
            $title,
            &format!($($details)*),
        )
    };
}

/// Errors go to stderr
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_message($crate::cli_messages::Tone::Error, $title, "")
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_message($crate::cli_messages::Tone::Error, $title, $details)
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::Tone::Success,
            $title,
            &format!($($details)*),
        )
    };
}
