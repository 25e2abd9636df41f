//! Yes/no confirmation prompts.

use std::io::{self, BufRead, Write};

/// Asks yes/no questions on a line-oriented input.
///
/// Only `y` (any case, surrounding whitespace ignored) counts as yes. End of
/// input counts as no.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{} ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(false);
        }

        Ok(line.trim().eq_ignore_ascii_case("y"))
    }

    /// Consume the prompter, returning the output it wrote to.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter on the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn accepts_y_in_any_case() {
        let mut p = prompter("y\n  Y  \n");
        assert!(p.confirm("first?").unwrap());
        assert!(p.confirm("second?").unwrap());
    }

    #[test]
    fn anything_else_is_no() {
        let mut p = prompter("yes\nn\n\n");
        assert!(!p.confirm("a?").unwrap());
        assert!(!p.confirm("b?").unwrap());
        assert!(!p.confirm("c?").unwrap());
    }

    #[test]
    fn end_of_input_is_no() {
        let mut p = prompter("");
        assert!(!p.confirm("anyone?").unwrap());
    }

    #[test]
    fn question_is_written_before_reading() {
        let mut p = prompter("y\n");
        p.confirm("(1/2) remove cargo directory at /x/target (y/n)?")
            .unwrap();

        let written = String::from_utf8(p.output).unwrap();
        assert!(written.starts_with("(1/2) remove cargo directory at /x/target (y/n)? "));
    }
}
