//! Logging utilities with colored output and progress display.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output gated on the global verbose flag
//! - `ProgressLine` for single-line progress display with per-kind counters
//!
//! # Example
//!
//! ```ignore
//! // Simple logging
//! log!("hash"; "hashing {} records", count);
//!
//! // Progress line for the hashing pass
//! let mut progress = ProgressLine::new(&[("geo", 12), ("word", 40)]);
//! progress.inc("geo");
//! progress.finish();
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
#[allow(dead_code)] // Used by debug! macro
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macros
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);

    let mut stdout = stdout().lock();
    execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module {
        "export" => prefix.bright_blue().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Progress Line (single-line counters)
// ============================================================================

/// Single-line progress display with multiple counters
///
/// Displays: `[hash] geo(42/69) zip(42/69) word(5/10)`
///
/// All counters update in place on the same line. The hashing pass is
/// strictly sequential, so updates go through `&mut self` and need no
/// cross-thread coordination.
pub struct ProgressLine {
    counters: Vec<Counter>,
}

struct Counter {
    name: &'static str,
    total: usize,
    current: usize,
}

impl ProgressLine {
    /// Create a new progress display.
    ///
    /// Only includes counters with total > 0.
    pub fn new(items: &[(&'static str, usize)]) -> Self {
        let counters: Vec<_> = items
            .iter()
            .filter(|(_, total)| *total > 0)
            .map(|(name, total)| Counter {
                name,
                total: *total,
                current: 0,
            })
            .collect();

        let progress = Self { counters };
        progress.display();
        progress
    }

    /// Increment the counter with the given name and refresh the line.
    #[inline]
    pub fn inc(&mut self, name: &str) {
        let Some(counter) = self.counters.iter_mut().find(|c| c.name == name) else {
            return;
        };
        counter.current += 1;
        self.display();
    }

    /// Display the current progress line (overwrites current line).
    fn display(&self) {
        if self.counters.is_empty() {
            return;
        }

        let mut parts = Vec::with_capacity(self.counters.len());
        for counter in &self.counters {
            parts.push(format!(
                "{}({}/{})",
                counter.name, counter.current, counter.total
            ));
        }

        let prefix = colorize_prefix("hash");

        let mut stdout = stdout().lock();
        // Clear line and write progress (no newline - stays on same line)
        execute!(
            stdout,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
        write!(stdout, "{} {}", prefix, parts.join(" ")).ok();
        stdout.flush().ok();
    }

    /// Finish progress display, preserve line and move to next line.
    pub fn finish(self) {
        if self.counters.is_empty() {
            return;
        }
        self.display();

        let mut stdout = stdout().lock();
        writeln!(stdout).ok();
        stdout.flush().ok();
    }
}
