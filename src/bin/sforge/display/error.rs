use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_io_hints(err);
        collector.collect_config_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_io_hints(&mut self, err: &Error) {
        use serum_forge::io::Error as IoError;

        let Some(io_err) = err.downcast_ref::<IoError>() else {
            return;
        };

        self.mark_typed();

        match io_err {
            IoError::Io { source } => {
                self.collect_std_io_hints(source);
            }

            IoError::Parse { format, line, .. } => {
                self.add(format!(
                    "Parser encountered an issue near line {} in {} format",
                    line, format
                ));
                self.add("Inspect the file around that line for malformed entries");
                self.add("Try specifying --infmt to ensure correct format detection");
                self.add_format_specific_parse_hints(*format);
            }

            IoError::Deserialize(_) => {
                self.add("Molecule records do not match the expected TOML layout");
                self.add_format_specific_parse_hints(serum_forge::io::Format::Toml);
            }

            IoError::Serialize(_) => {
                self.add("The analysis summary could not be encoded as TOML");
                self.add("Try --outfmt report to write a text report instead");
            }

            IoError::UnsupportedReadFormat(fmt) => {
                self.add(format!("The '{}' format cannot be used for input", fmt));
                self.add("Supported input formats: toml, text");
            }

            IoError::UnsupportedWriteFormat(fmt) => {
                self.add(format!("The '{}' format cannot be used for output", fmt));
                self.add("Supported output formats: report, toml");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File contains invalid data (is it UTF-8 text?)");
                self.add("Verify the file is not truncated or corrupted");
            }

            ErrorKind::UnexpectedEof => {
                self.add("Unexpected end of file encountered");
                self.add("The file may be truncated or incomplete");
            }

            ErrorKind::BrokenPipe => {
                self.add("Broken pipe: the output consumer terminated");
                self.add("This may occur when piping to commands like `head`");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn add_format_specific_parse_hints(&mut self, format: serum_forge::io::Format) {
        use serum_forge::io::Format;

        match format {
            Format::Toml => {
                self.add("TOML: Each molecule needs a [[molecule]] table with id and strength");
                self.add("TOML: bonds is an optional array of molecule id strings");
            }

            Format::Text => {
                self.add("Text: Each line must read ID STRENGTH [BOND ...]");
                self.add("Text: STRENGTH must be a number; use # for comments");
            }

            Format::Report => {}
        }
    }

    fn collect_config_hints(&mut self, err: &Error) {
        let Some(toml_err) = err.downcast_ref::<toml::de::Error>() else {
            return;
        };

        self.mark_typed();

        self.add("The configuration file is not valid");
        self.add("Allowed sections: [analysis] and [report]");
        self.add("[analysis] discovery: \"reverse-scan\" (or \"scan\") or \"indexed\"");
        self.add("[report] keys: human-label, vitales-label, precision");
        if let Some(span) = toml_err.span() {
            self.add(format!("Problem starts at byte offset {}", span.start));
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("stdin") || msg.contains("tty") {
            self.add("Input or output appears to be a terminal");
            self.add("Provide files via -i/-o or use pipes");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
            self.add("Ensure you have the required access rights");
            return;
        }

        if msg.contains("infer") {
            self.add("Dataset extensions: .toml (TOML), .txt/.mol/.dat (text)");
            self.add("Result extensions: .toml (summary), .txt/.log/.report (report)");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use serum_forge::io::{Error as IoError, Format};

    #[test]
    fn parse_errors_get_format_hints() {
        let err = Error::new(IoError::parse(Format::Text, 3, "missing strength"))
            .context("Failed to read dataset");
        let hints = HintCollector::collect(&err).unwrap();
        assert!(hints.iter().any(|h| h.contains("near line 3")));
        assert!(hints.iter().any(|h| h.starts_with("Text:")));
    }

    #[test]
    fn config_errors_list_allowed_keys() {
        let parse_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err = Error::new(parse_err).context("Invalid config file: sforge.toml");
        let hints = HintCollector::collect(&err).unwrap();
        assert!(hints.iter().any(|h| h.contains("[analysis]")));
    }

    #[test]
    fn untyped_errors_fall_back_to_message_hints() {
        let err: Result<(), _> = Err(anyhow::anyhow!("Cannot infer format from 'x.csv'"));
        let err = err.context("Resolving outputs").unwrap_err();
        let hints = HintCollector::collect(&err).unwrap();
        assert!(hints.iter().any(|h| h.contains(".toml")));
    }

    #[test]
    fn chain_text_includes_causes() {
        let err = Error::new(IoError::UnsupportedWriteFormat(Format::Text)).context("Writing");
        let text = error_chain_text(&err);
        assert!(text.contains("writing"));
        assert!(text.contains("not supported"));
    }
}
