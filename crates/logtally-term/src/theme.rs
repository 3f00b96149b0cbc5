use crossterm::style::{Color, Stylize, style};

use logtally_types::LogLevel;

use crate::config::{Config, ConfigError};

/// Color theme for level names
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    levels: [Color; LogLevel::ALL.len()],
    enabled: bool,
}

impl Theme {
    // Log level colors
    pub const LOG_INFO: Color = Color::Green;
    pub const LOG_DEBUG: Color = Color::Blue;
    pub const LOG_ERROR: Color = Color::Red;
    pub const LOG_WARNING: Color = Color::Yellow;

    /// Build the theme described by `[display]` and `[colors]`
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let colors = &config.colors;
        let resolve = |level: LogLevel, value: &str| {
            parse_color(value).ok_or_else(|| ConfigError::Color {
                level: level.to_string(),
                value: value.to_string(),
            })
        };

        Ok(Self {
            levels: [
                resolve(LogLevel::Info, &colors.info)?,
                resolve(LogLevel::Debug, &colors.debug)?,
                resolve(LogLevel::Error, &colors.error)?,
                resolve(LogLevel::Warning, &colors.warning)?,
            ],
            enabled: config.display.color,
        })
    }

    /// Default colors with styling turned off
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_colored(&self) -> bool {
        self.enabled
    }

    pub fn level_color(&self, level: LogLevel) -> Color {
        self.levels[level.index()]
    }

    /// The level name, wrapped in ANSI color codes when styling is on
    pub fn paint_level(&self, level: LogLevel) -> String {
        if self.enabled {
            style(level.as_str()).with(self.level_color(level)).to_string()
        } else {
            level.as_str().to_string()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            levels: [
                Self::LOG_INFO,
                Self::LOG_DEBUG,
                Self::LOG_ERROR,
                Self::LOG_WARNING,
            ],
            enabled: true,
        }
    }
}

/// Parse a color name, `#rrggbb` or `ansi:<n>`
pub fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "grey" | "gray" => Some(Color::Grey),
        "dark_grey" | "dark_gray" => Some(Color::DarkGrey),
        "dark_red" => Some(Color::DarkRed),
        "dark_green" => Some(Color::DarkGreen),
        "dark_yellow" => Some(Color::DarkYellow),
        "dark_blue" => Some(Color::DarkBlue),
        "dark_magenta" => Some(Color::DarkMagenta),
        "dark_cyan" => Some(Color::DarkCyan),
        s if s.starts_with('#') && s.len() == 7 && s.is_ascii() => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb { r, g, b })
        }
        s if s.starts_with("ansi:") => {
            let n: u8 = s["ansi:".len()..].parse().ok()?;
            Some(Color::AnsiValue(n))
        }
        _ => None,
    }
}
