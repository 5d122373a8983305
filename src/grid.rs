use crate::constants::CELL_SIZE;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step as (col, row); rows grow downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub col: i32,
    pub row: i32,
}

impl GridPosition {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dc, dr) = direction.delta();
        Self { col: self.col + dc, row: self.row + dr }
    }
}

/// Playable area measured in cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Cells that fit in a viewport of the given pixel size, at least one per axis.
    pub fn from_viewport(width: u32, height: u32) -> Self {
        Self {
            width: (width / CELL_SIZE).max(1),
            height: (height / CELL_SIZE).max(1),
        }
    }

    pub fn contains(self, pos: GridPosition) -> bool {
        pos.col >= 0 && pos.row >= 0 && (pos.col as i64) < self.width as i64 && (pos.row as i64) < self.height as i64
    }

    pub fn center(self) -> GridPosition {
        GridPosition::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn cells(self) -> impl Iterator<Item = GridPosition> {
        (0..self.height as i32).flat_map(move |row| (0..self.width as i32).map(move |col| GridPosition::new(col, row)))
    }
}
