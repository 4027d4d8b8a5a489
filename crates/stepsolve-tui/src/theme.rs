use crossterm::style::Color;

/// Color palette for the board and chrome.
pub struct Theme {
    /// Thin separators inside a box
    pub border: Color,
    /// Thick separators at 3×3 boundaries
    pub box_border: Color,
    /// Digits present in the original puzzle
    pub given: Color,
    /// Digits inserted by the solver
    pub placed: Color,
    /// Empty-cell dot
    pub empty: Color,
    /// Cell of the most recent placement
    pub place_flash: Color,
    /// Cell of the most recent retraction
    pub retract_flash: Color,
    /// Status and key-hint text
    pub text: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            border: Color::DarkGrey,
            box_border: Color::Grey,
            given: Color::White,
            placed: Color::Blue,
            empty: Color::DarkGrey,
            place_flash: Color::Green,
            retract_flash: Color::Red,
            text: Color::Grey,
        }
    }
}
