//! Application state and logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::data::Dataset;
use crate::util::PlotLayoutConfig;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The plotted data.
    pub dataset: Dataset,
    /// Plot layout settings.
    pub layout: PlotLayoutConfig,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Set once the user asks to close the plot.
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance around a loaded dataset.
    pub fn new(dataset: Dataset) -> Self {
        let status = format!("{} loaded", dataset.display_name());
        Self {
            dataset,
            layout: PlotLayoutConfig::default(),
            status,
            theme: Theme::default(),
            should_quit: false,
        }
    }

    /// Apply a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::NONE, KeyCode::Esc)
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                self.should_quit = true;
            },
            (KeyModifiers::NONE, KeyCode::Char('t')) | (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                self.cycle_theme();
            },
            (_, KeyCode::Char('?')) => {
                self.status = "Help: q/Esc=close plot, t/T=theme".to_string();
            },
            _ => {},
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }
}
