//! Enumeration types for the treasure hunt simulation.
//!
//! Both sets are closed: four cardinal orientations and three instruction
//! kinds. Each carries the single letter used by the map notation.

use core::fmt;

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

/// The cardinal direction an explorer is facing.
///
/// Rotation cycles through the four values and never leaves the set:
/// `North -> West -> South -> East -> North` when turning left, the
/// reverse when turning right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    /// Facing decreasing `y`.
    North,
    /// Facing increasing `y`.
    South,
    /// Facing increasing `x`.
    East,
    /// Facing decreasing `x`. Written `O` (Ouest) in the map notation.
    West,
}

impl Orientation {
    /// All four orientations, in notation order.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Orientation after a quarter turn to the left.
    pub const fn rotated_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Orientation after a quarter turn to the right.
    pub const fn rotated_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The `(dx, dy)` unit step taken when advancing in this orientation.
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// The notation letter: `N`, `S`, `E` or `O`.
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'O',
        }
    }

    /// Parse a notation letter. Returns `None` for anything else.
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'O' => Some(Self::West),
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// ---------------------------------------------------------------------------
// Instruction
// ---------------------------------------------------------------------------

/// One entry of an explorer's move program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Quarter turn to the left (`G`, Gauche).
    RotateLeft,
    /// Quarter turn to the right (`D`, Droite).
    RotateRight,
    /// One cell forward in the current orientation (`A`, Avancer).
    Advance,
}

impl Instruction {
    /// The notation letter: `G`, `D` or `A`.
    pub const fn letter(self) -> char {
        match self {
            Self::RotateLeft => 'G',
            Self::RotateRight => 'D',
            Self::Advance => 'A',
        }
    }

    /// Parse a notation letter. Returns `None` for anything else.
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'G' => Some(Self::RotateLeft),
            'D' => Some(Self::RotateRight),
            'A' => Some(Self::Advance),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
