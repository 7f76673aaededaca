//! Output sinks receiving the lines written by `print`

/// Destination for program output, one call per executed `print`
pub trait OutputSink {
    /// Receives one complete output line, without a trailing newline
    fn write_line(&mut self, line: &str);
}

/// Writes each line to the process's standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Captures lines in memory
impl OutputSink for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(sink: &mut dyn OutputSink) {
        sink.write_line("first");
        sink.write_line("second");
    }

    #[test]
    fn test_vec_captures_in_order() {
        let mut lines = Vec::new();
        emit(&mut lines);
        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);
    }

    fn emit_owned<S: OutputSink>(mut sink: S) {
        sink.write_line("via borrow");
    }

    #[test]
    fn test_borrowed_sink_forwards() {
        let mut lines: Vec<String> = Vec::new();
        emit_owned(&mut lines);
        emit_owned(&mut lines);
        assert_eq!(lines, vec!["via borrow".to_string(), "via borrow".to_string()]);
    }
}
