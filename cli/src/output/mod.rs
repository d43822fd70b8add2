//! Output formatting module

pub mod json;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
pub use styles::Styles;

use crate::application::services::CommandResult;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles, quiet }
    }

    /// Print the outcome of a boolean check. Suppressed when `quiet`.
    pub fn check(&self, passed: bool, msg: &str) {
        if self.quiet {
            return;
        }
        if passed {
            println!("  {} {msg}", "✓".style(self.styles.success));
        } else {
            println!("  {} {msg}", "✗".style(self.styles.error));
        }
    }

    /// Print a warning message prefixed with `⚠` to stderr. Never suppressed.
    pub fn warn(&self, msg: &str) {
        eprintln!("  {} {msg}", "⚠".style(self.styles.warning));
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }

    /// Print captured remote output under a host header.
    ///
    /// Stdout is always printed so it can be piped; the header and stderr
    /// are suppressed when `quiet`.
    pub fn command_result(&self, result: &CommandResult) {
        if !self.quiet {
            let status = result
                .exit_code
                .map_or_else(|| "unreachable".to_string(), |c| format!("exit {c}"));
            eprintln!(
                "── {} ({})",
                result.host.style(self.styles.host),
                status.style(self.styles.dim)
            );
        }
        print!("{}", result.stdout);
        if !self.quiet && !result.stderr.is_empty() {
            eprint!("{}", result.stderr);
        }
    }
}
