use crate::{Lesson, Settings};

#[derive(clap::Parser, Debug)]
#[command(name = "notebook", version, about = "Walks through array and object methods", long_about = None)]
pub struct Arguments {
    /// Lesson to run
    #[arg(value_enum)]
    lesson: Option<Lesson>,

    /// Do not print lesson headings
    #[clap(
        long,
        short,
        action = clap::ArgAction::SetTrue,
    )]
    quiet: bool,
}

impl Arguments {
    pub(crate) fn update_settings(self, settings: &mut Settings) {
        if let Some(lesson) = self.lesson {
            settings.lesson = lesson;
        }

        if self.quiet {
            settings.show_headings = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn settings_from(args: &[&str]) -> Settings {
        let mut settings = Settings::default();
        Arguments::try_parse_from(args)
            .unwrap()
            .update_settings(&mut settings);
        settings
    }

    #[test]
    fn defaults_without_arguments() {
        let settings = settings_from(&["notebook"]);

        assert_eq!(settings.lesson, Lesson::All);
        assert!(settings.show_headings);
    }

    #[test]
    fn lesson_and_quiet() {
        let settings = settings_from(&["notebook", "objects", "--quiet"]);

        assert_eq!(settings.lesson, Lesson::Objects);
        assert!(!settings.show_headings);
    }

    #[test]
    fn unknown_lesson_is_rejected() {
        assert!(Arguments::try_parse_from(["notebook", "strings"]).is_err());
    }
}
