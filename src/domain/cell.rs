/// Cell is the unit of the universe: either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Build a cell from a template bit. Any non-zero value is alive.
    pub const fn from_bit(bit: u8) -> Self {
        if bit == 0 { Cell::Dead } else { Cell::Alive }
    }

    /// Next state under B3/S23:
    /// fewer than 2 or more than 3 neighbors kills the cell,
    /// exactly 3 brings it to life, exactly 2 keeps whatever it was.
    pub const fn evolve(self, neighbors: u8) -> Self {
        match neighbors {
            2 => self,
            3 => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
