//! Grid coordinates and the four cardinal moves.

use std::fmt;

/// A 2D grid position. Screen convention: `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub fn new(x: i64, y: i64) -> Self {
        Coord { x, y }
    }

    /// Area of the inclusive bounding rectangle spanned by `self` and `other`.
    pub fn area_to(&self, other: Coord) -> i64 {
        ((self.x - other.x).abs() + 1) * ((self.y - other.y).abs() + 1)
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Coord) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// The neighboring position one step in the given direction.
    pub fn step(&self, direction: Move) -> Coord {
        match direction {
            Move::Up => Coord::new(self.x, self.y - 1),
            Move::Down => Coord::new(self.x, self.y + 1),
            Move::Left => Coord::new(self.x - 1, self.y),
            Move::Right => Coord::new(self.x + 1, self.y),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A 3D position, for the occasional volumetric puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Coord3 {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Coord3 { x, y, z }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Coord3) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        let dz = (self.z - other.z) as f64;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl fmt::Display for Coord3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/// One of the four cardinal moves, as drawn in puzzle inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    pub fn as_char(&self) -> char {
        match self {
            Move::Up => '^',
            Move::Down => 'v',
            Move::Left => '<',
            Move::Right => '>',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Move {
    type Error = char;

    fn try_from(c: char) -> Result<Self, char> {
        match c {
            '^' => Ok(Move::Up),
            'v' => Ok(Move::Down),
            '<' => Ok(Move::Left),
            '>' => Ok(Move::Right),
            other => Err(other),
        }
    }
}
