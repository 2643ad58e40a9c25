/// ANSI reset sequence, terminates every colorized line
pub const RESET: &str = "\x1b[0m";

/// Reset escape sequence shared by both catalogs
pub const fn reset_code() -> &'static str {
    RESET
}

/// Foreground (text) colors: SGR 30-37 and the bright variants 90-97
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Foreground {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// Background colors: SGR 40-47 and the bright variants 100-107
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Background {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Foreground {
    pub const ALL: [Foreground; 16] = [
        Foreground::Black,
        Foreground::Red,
        Foreground::Green,
        Foreground::Yellow,
        Foreground::Blue,
        Foreground::Magenta,
        Foreground::Cyan,
        Foreground::White,
        Foreground::BrightBlack,
        Foreground::BrightRed,
        Foreground::BrightGreen,
        Foreground::BrightYellow,
        Foreground::BrightBlue,
        Foreground::BrightMagenta,
        Foreground::BrightCyan,
        Foreground::BrightWhite,
    ];

    /// Escape sequence for this color
    pub const fn code(self) -> &'static str {
        match self {
            Foreground::Black => "\x1b[30m",
            Foreground::Red => "\x1b[31m",
            Foreground::Green => "\x1b[32m",
            Foreground::Yellow => "\x1b[33m",
            Foreground::Blue => "\x1b[34m",
            Foreground::Magenta => "\x1b[35m",
            Foreground::Cyan => "\x1b[36m",
            Foreground::White => "\x1b[37m",
            Foreground::BrightBlack => "\x1b[90m",
            Foreground::BrightRed => "\x1b[91m",
            Foreground::BrightGreen => "\x1b[92m",
            Foreground::BrightYellow => "\x1b[93m",
            Foreground::BrightBlue => "\x1b[94m",
            Foreground::BrightMagenta => "\x1b[95m",
            Foreground::BrightCyan => "\x1b[96m",
            Foreground::BrightWhite => "\x1b[97m",
        }
    }

    /// Symbolic name, e.g. `bright-red`
    pub const fn name(self) -> &'static str {
        color_name(self as usize)
    }
}

impl Background {
    pub const ALL: [Background; 16] = [
        Background::Black,
        Background::Red,
        Background::Green,
        Background::Yellow,
        Background::Blue,
        Background::Magenta,
        Background::Cyan,
        Background::White,
        Background::BrightBlack,
        Background::BrightRed,
        Background::BrightGreen,
        Background::BrightYellow,
        Background::BrightBlue,
        Background::BrightMagenta,
        Background::BrightCyan,
        Background::BrightWhite,
    ];

    /// Escape sequence for this color
    pub const fn code(self) -> &'static str {
        match self {
            Background::Black => "\x1b[40m",
            Background::Red => "\x1b[41m",
            Background::Green => "\x1b[42m",
            Background::Yellow => "\x1b[43m",
            Background::Blue => "\x1b[44m",
            Background::Magenta => "\x1b[45m",
            Background::Cyan => "\x1b[46m",
            Background::White => "\x1b[47m",
            Background::BrightBlack => "\x1b[100m",
            Background::BrightRed => "\x1b[101m",
            Background::BrightGreen => "\x1b[102m",
            Background::BrightYellow => "\x1b[103m",
            Background::BrightBlue => "\x1b[104m",
            Background::BrightMagenta => "\x1b[105m",
            Background::BrightCyan => "\x1b[106m",
            Background::BrightWhite => "\x1b[107m",
        }
    }

    pub const fn name(self) -> &'static str {
        color_name(self as usize)
    }
}

// Both catalogs declare their variants in the same order.
const fn color_name(index: usize) -> &'static str {
    const NAMES: [&str; 16] = [
        "black",
        "red",
        "green",
        "yellow",
        "blue",
        "magenta",
        "cyan",
        "white",
        "bright-black",
        "bright-red",
        "bright-green",
        "bright-yellow",
        "bright-blue",
        "bright-magenta",
        "bright-cyan",
        "bright-white",
    ];
    NAMES[index]
}

fn index_of(name: &str) -> Option<usize> {
    let normalized = name.to_lowercase().replace('_', "-");
    (0..16).find(|&i| color_name(i) == normalized)
}

impl std::str::FromStr for Foreground {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        index_of(s)
            .map(|i| Foreground::ALL[i])
            .ok_or_else(|| format!("Unknown foreground color: {}", s))
    }
}

impl std::str::FromStr for Background {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        index_of(s)
            .map(|i| Background::ALL[i])
            .ok_or_else(|| format!("Unknown background color: {}", s))
    }
}

impl std::fmt::Display for Foreground {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for Background {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Colors shared by hosts for recurring kinds of output
pub mod palette {
    use super::{Background, Foreground};

    pub const HEADING_TEXT: Foreground = Foreground::BrightCyan;
    pub const PARAGRAPH_TEXT: Foreground = Foreground::Green;
    pub const HEADING_BACKGROUND: Background = Background::Black;
    pub const ERROR_TEXT: Foreground = Foreground::BrightRed;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_foreground_codes_follow_sgr_numbering() {
        for (i, fg) in Foreground::ALL.iter().enumerate() {
            let param = if i < 8 { 30 + i } else { 90 + (i - 8) };
            assert_eq!(fg.code(), format!("\x1b[{}m", param));
        }
    }

    #[test]
    fn test_background_codes_follow_sgr_numbering() {
        for (i, bg) in Background::ALL.iter().enumerate() {
            let param = if i < 8 { 40 + i } else { 100 + (i - 8) };
            assert_eq!(bg.code(), format!("\x1b[{}m", param));
        }
    }

    #[test]
    fn test_codes_are_distinct_and_stable() {
        let mut seen = HashSet::new();
        for fg in Foreground::ALL {
            assert_eq!(fg.code(), fg.code());
            assert!(seen.insert(fg.code()));
        }
        for bg in Background::ALL {
            assert!(seen.insert(bg.code()));
        }
        assert!(!seen.contains(reset_code()));
        assert_eq!(reset_code(), "\x1b[0m");
    }

    #[test]
    fn test_name_parsing() {
        assert_eq!("bright-red".parse::<Foreground>(), Ok(Foreground::BrightRed));
        assert_eq!("BRIGHT_RED".parse::<Foreground>(), Ok(Foreground::BrightRed));
        assert_eq!("cyan".parse::<Background>(), Ok(Background::Cyan));
        assert!("orange".parse::<Foreground>().is_err());

        for fg in Foreground::ALL {
            assert_eq!(fg.to_string().parse::<Foreground>(), Ok(fg));
        }
    }

    #[test]
    fn test_palette() {
        assert_eq!(palette::HEADING_TEXT.code(), "\x1b[96m");
        assert_eq!(palette::PARAGRAPH_TEXT.code(), "\x1b[32m");
        assert_eq!(palette::HEADING_BACKGROUND.code(), "\x1b[40m");
        assert_eq!(palette::ERROR_TEXT.code(), "\x1b[91m");
    }
}
