//! Tagged terminal output for the one-shot commands
//!
//! `set-api-url`, `reset` and a failed headless run report through these, so every line
//! starts with a colored `[INFO]`, `[ERROR]` or `[SUCCESS]` tag.

const INFO_TAG: &str = "\x1b[1;33m[INFO]\x1b[0m";
const ERROR_TAG: &str = "\x1b[1;31m[ERROR]\x1b[0m";
const SUCCESS_TAG: &str = "\x1b[1;32m[SUCCESS]\x1b[0m";

/// `[TAG] title`, followed by a tab and the details when there are any.
fn tagged_line(tag: &str, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tag, title)
    } else {
        format!("{} {}\t {}", tag, title, details)
    }
}

pub fn print_info(title: &str, details: &str) {
    println!("{}", tagged_line(INFO_TAG, title, details));
}

/// The error line, plus a second `Details:` line when a cause is known.
pub fn print_error(title: &str, details: Option<&str>) {
    println!("{} {}", ERROR_TAG, title);
    if let Some(details) = details {
        println!("{} Details: {}", ERROR_TAG, details);
    }
}

pub fn print_success(title: &str, details: &str) {
    println!("{}", tagged_line(SUCCESS_TAG, title, details));
}

/// `print_cmd_info!("Resetting", "Removing {}", path)`
#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

/// `print_cmd_error!("Invalid API URL")` or with a details string.
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

/// `print_cmd_success!("API URL saved", "{}", url)`
#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
