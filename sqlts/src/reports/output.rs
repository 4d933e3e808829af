//! Output trait for rendering reports to different formats.

use std::io::Write;

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Emit generated code exactly as given.
    fn code(&mut self, text: &str);

    /// Render a success line.
    fn success(&mut self, msg: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render an error message with an indented detail line.
    fn error(&mut self, msg: &str, detail: &str);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
///
/// Code goes to stdout; everything else goes to stderr so piping the
/// declarations into a file stays clean.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn code(&mut self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        // Broken pipes are ignored.
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }

    fn success(&mut self, msg: &str) {
        eprintln!("✓ {}", msg);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        eprintln!("  {}: {}", key, value);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn error(&mut self, msg: &str, detail: &str) {
        eprintln!("error: {}", msg);
        eprintln!("  {}", detail);
    }
}

/// Output that records every call, for report tests.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn code(&mut self, text: &str) {
        self.lines.push(format!("code: {}", text));
    }

    fn success(&mut self, msg: &str) {
        self.lines.push(format!("success: {}", msg));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("{}: {}", key, value));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("warning: {}", msg));
    }

    fn error(&mut self, msg: &str, detail: &str) {
        self.lines.push(format!("error: {} / {}", msg, detail));
    }
}
