//! The lessons of the notebook, each one a walk through a group of methods.

mod arrays;
mod objects;

use std::io::{self, Write};

use seqops::Console;
use settings::{Lesson, Settings};

pub fn run<W: Write>(console: &mut Console<W>, settings: &Settings) -> io::Result<()> {
    log::debug!("Running lesson {:?}", settings.lesson);

    if settings.lesson.includes(Lesson::Arrays) {
        arrays::run(console, settings)?;
    }

    if settings.lesson.includes(Lesson::Objects) {
        objects::run(console, settings)?;
    }

    Ok(())
}

/// Writes `// <title>` unless headings are turned off
fn heading<W: Write>(console: &mut Console<W>, settings: &Settings, title: &str) -> io::Result<()> {
    if settings.show_headings {
        console.log(&format!("// {title}"))?;
    }
    Ok(())
}

#[cfg(test)]
fn output_of(lesson: Lesson, show_headings: bool) -> String {
    let settings = Settings {
        lesson,
        show_headings,
    };

    let mut console = Console::new(Vec::new());
    run(&mut console, &settings).unwrap();
    String::from_utf8(console.into_inner()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_runs_both_lessons() {
        let all = output_of(Lesson::All, false);
        let arrays = output_of(Lesson::Arrays, false);
        let objects = output_of(Lesson::Objects, false);

        assert_eq!(all, format!("{arrays}{objects}"));
    }

    /// Accepts a fixed number of lines, then fails every write with a broken pipe
    struct BrokenPipeAfter {
        lines: usize,
        written: Vec<u8>,
        failed_writes: usize,
    }

    impl BrokenPipeAfter {
        fn new(lines: usize) -> Self {
            Self {
                lines,
                written: Vec::new(),
                failed_writes: 0,
            }
        }
    }

    impl Write for BrokenPipeAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let complete_lines = self.written.iter().filter(|&&b| b == b'\n').count();
            if complete_lines >= self.lines {
                self.failed_writes += 1;
                return Err(io::ErrorKind::BrokenPipe.into());
            }

            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn run_until_broken_pipe(lesson: Lesson, lines: usize) -> (io::Result<()>, BrokenPipeAfter) {
        let settings = Settings {
            lesson,
            show_headings: false,
        };

        let mut console = Console::new(BrokenPipeAfter::new(lines));
        let result = run(&mut console, &settings);
        (result, console.into_inner())
    }

    #[test]
    fn write_failure_stops_all_lessons() {
        let (result, writer) = run_until_broken_pipe(Lesson::All, 0);

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
        assert!(writer.written.is_empty());
        assert_eq!(writer.failed_writes, 1);
    }

    #[test]
    fn write_failure_stops_for_each() {
        // Everything up to and including the first line written by `for_each`
        let lines_before_failure = output_of(Lesson::Arrays, false)
            .lines()
            .position(|line| line == "0: apple")
            .unwrap()
            + 1;

        let (result, writer) = run_until_broken_pipe(Lesson::All, lines_before_failure);

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
        assert!(String::from_utf8(writer.written).unwrap().ends_with("18\n0: apple\n"));

        // Neither the remaining fruits nor the objects lesson were attempted
        assert_eq!(writer.failed_writes, 1);
    }

    #[test]
    fn headings_can_be_turned_off() {
        assert!(output_of(Lesson::Arrays, true).contains("// splice()\n"));
        assert!(!output_of(Lesson::Arrays, false).contains("//"));
    }
}
