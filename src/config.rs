use ratatui::style::Color;
use ratatui::symbols::border;
use thiserror::Error;

/// Play-field extent in pixels on each axis.
///
/// Together with the cell size this derives the logical grid: a 400 px field
/// divided into 20 px cells yields a 20×20 grid. The extent is fixed for the
/// lifetime of the process; only the cell size is tunable.
pub const PLAY_FIELD_EXTENT: u16 = 400;

/// Default pixels per grid cell.
pub const DEFAULT_CELL_SIZE: u16 = 20;

/// Initial delay between ticks in milliseconds.
pub const DEFAULT_INITIAL_SPEED_MS: u64 = 200;

/// Floor for the tick delay in milliseconds.
pub const DEFAULT_MIN_SPEED_MS: u64 = 60;

/// Milliseconds shaved off the tick delay per apple consumed.
pub const DEFAULT_SPEED_DECREMENT_MS: u64 = 5;

/// Logical grid dimensions passed through the game as a named type.
///
/// Width vs. height stays unambiguous at every call site, unlike an anonymous
/// `(u16, u16)` tuple.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

/// The four recognized tuning options.
///
/// `cell_size` only affects bounds derivation (and thereby rendering); the
/// three speed values share the tick-delay time unit.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Tuning {
    /// Pixels per grid cell.
    pub cell_size: u16,
    /// Starting tick delay in milliseconds.
    pub initial_speed_ms: u64,
    /// Smallest allowed tick delay in milliseconds.
    pub min_speed_ms: u64,
    /// Delay reduction per apple in milliseconds.
    pub speed_decrement_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            initial_speed_ms: DEFAULT_INITIAL_SPEED_MS,
            min_speed_ms: DEFAULT_MIN_SPEED_MS,
            speed_decrement_ms: DEFAULT_SPEED_DECREMENT_MS,
        }
    }
}

/// Rejected tuning values, reported before the terminal is touched.
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("cell size must be between 1 and {PLAY_FIELD_EXTENT} pixels, got {0}")]
    CellSizeOutOfRange(u16),
    #[error("minimum speed {min} ms exceeds initial speed {initial} ms")]
    MinAboveInitial { min: u64, initial: u64 },
    #[error("initial speed must be greater than zero")]
    ZeroInitialSpeed,
}

impl Tuning {
    /// Checks the tuning values for internal consistency.
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.cell_size == 0 || self.cell_size > PLAY_FIELD_EXTENT {
            return Err(TuningError::CellSizeOutOfRange(self.cell_size));
        }
        if self.initial_speed_ms == 0 {
            return Err(TuningError::ZeroInitialSpeed);
        }
        if self.min_speed_ms > self.initial_speed_ms {
            return Err(TuningError::MinAboveInitial {
                min: self.min_speed_ms,
                initial: self.initial_speed_ms,
            });
        }
        Ok(())
    }

    /// Derives the logical grid bounds from the play-field extent.
    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        let cells = PLAY_FIELD_EXTENT / self.cell_size;
        GridSize {
            width: cells,
            height: cells,
        }
    }
}

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub apple: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
}

/// The single built-in theme.
pub const THEME: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    apple: Color::Red,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
};

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

pub const GLYPH_SNAKE_HEAD: &str = "█";
pub const GLYPH_SNAKE_BODY: &str = "█";
pub const GLYPH_SNAKE_TAIL: &str = "▓";
pub const GLYPH_APPLE: &str = "●";
