/// Receives the lines produced by `display` statements.
///
/// The evaluator calls [`OutputSink::emit_line`] once per executed `display`,
/// in execution order. Sinks are assumed not to fail.
pub trait OutputSink {
    /// Delivers one rendered line, without a trailing newline.
    fn emit_line(&mut self, line: &str);
}

/// Writes every line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Captures lines in memory.
impl OutputSink for Vec<String> {
    fn emit_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}
