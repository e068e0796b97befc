//! Responsible for creating and managing the global notebook settings

mod cli;

use std::sync::LazyLock;

use clap::Parser;

/// The global settings singleton
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::init);

/// Which part of the notes to walk through
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Lesson {
    /// Array methods
    Arrays,

    /// Object property access
    Objects,

    #[default]
    All,
}

impl Lesson {
    #[must_use]
    pub fn includes(&self, other: Self) -> bool {
        *self == Self::All || *self == other
    }
}

/// Holds all the configurable information for a notebook run
#[derive(Debug)]
pub struct Settings {
    pub lesson: Lesson,

    /// Print a heading before every lesson and example
    pub show_headings: bool,
}

impl Settings {
    #[must_use]
    pub fn init() -> Self {
        let mut settings = Self::default();

        let args = cli::Arguments::parse();

        args.update_settings(&mut settings);

        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lesson: Lesson::default(),
            show_headings: true,
        }
    }
}
