//! A single letter slot on the board

/// Feedback state of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellStatus {
    /// No letter
    #[default]
    Empty,
    /// Letter typed into the active row, not yet scored
    Typing,
    /// Letter matches the answer at this position
    Correct,
    /// Letter does not occur in the answer
    Absent,
    /// Letter occurs in the answer at another position
    Present,
}

impl CellStatus {
    /// Whether this status is the result of scoring a submitted row
    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Correct | Self::Absent | Self::Present)
    }
}

/// One letter slot with its feedback status
///
/// Cells are plain values; the board replaces them instead of editing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    letter: Option<u8>,
    status: CellStatus,
}

impl Cell {
    pub const EMPTY: Self = Self {
        letter: None,
        status: CellStatus::Empty,
    };

    /// A letter being typed into the active row
    #[must_use]
    pub const fn typing(letter: u8) -> Self {
        Self {
            letter: Some(letter),
            status: CellStatus::Typing,
        }
    }

    /// A letter carrying its scored feedback
    #[must_use]
    pub const fn scored(letter: u8, status: CellStatus) -> Self {
        Self {
            letter: Some(letter),
            status,
        }
    }

    /// The letter as an ASCII byte, if any
    #[inline]
    #[must_use]
    pub const fn letter_byte(self) -> Option<u8> {
        self.letter
    }

    /// The letter as a char, if any
    #[inline]
    #[must_use]
    pub fn letter(self) -> Option<char> {
        self.letter.map(char::from)
    }

    #[inline]
    #[must_use]
    pub const fn status(self) -> CellStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.letter.is_none()
    }
}
