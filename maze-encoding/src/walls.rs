use std::fmt;

/// One edge of a maze cell.
///
/// The discriminant is the bit index of the edge in a cell encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Side {
    /// All sides in bit order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// Bit index of this side within a cell encoding.
    pub fn bit(self) -> u8 {
        self as u8
    }

    /// The side a neighbour sees across the same edge.
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }

    /// Grid step `(dx, dy)` towards the neighbour on this side.
    ///
    /// Row 0 is the top of the grid, so `Top` moves to a smaller row.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Side::Top => (0, -1),
            Side::Right => (1, 0),
            Side::Bottom => (0, 1),
            Side::Left => (-1, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wall encoding of a single cell: one bit per [`Side`], values 0..=15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Walls(u8);

impl Walls {
    /// Wrap a raw encoding, rejecting values wider than 4 bits.
    pub fn new(bits: u8) -> Option<Walls> {
        (bits <= 0xF).then_some(Walls(bits))
    }

    /// Decode a single hexadecimal digit (either case).
    pub fn from_hex_digit(c: char) -> Option<Walls> {
        c.to_digit(16).map(|v| Walls(v as u8))
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether this cell has a wall on `side`.
    pub fn has(self, side: Side) -> bool {
        (self.0 >> side.bit()) & 1 == 1
    }

    /// Whether `self` and `neighbour` agree on the edge between them, where
    /// `neighbour` lies on `side` of `self`.
    pub fn agrees_with(self, neighbour: Walls, side: Side) -> bool {
        self.has(side) == neighbour.has(side.opposite())
    }

    /// Hexadecimal digit used in the textual maze format (upper case).
    pub fn to_hex_digit(self) -> char {
        char::from_digit(u32::from(self.0), 16)
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

impl fmt::Display for Walls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_digit())
    }
}
