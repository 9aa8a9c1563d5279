use super::Cell;

/// A named rectangular pattern stamped into the grid when seeding.
/// Rows are listed top to bottom, each row left to right.
#[derive(Clone, Copy, Debug)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: &'static [&'static [u8]],
}

impl Template {
    /// Width in cells (length of the first row)
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Iterate over every template position with its cell state
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &bit)| (x, y, Cell::from_bit(bit)))
        })
    }
}

/// Built-in template table
pub mod presets {
    use super::Template;

    /// Glider - moves one cell down and right every 4 generations
    pub const GLIDER: Template = Template {
        name: "glider",
        description: "Spaceship (period 4)",
        rows: &[
            &[0, 1, 0],
            &[0, 0, 1],
            &[1, 1, 1],
        ],
    };

    /// Pulsar - period 3 oscillator
    pub const PULSAR: Template = Template {
        name: "pulsar",
        description: "Oscillator (period 3)",
        rows: &[
            &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
        ],
    };

    /// Block - simple still life
    pub const BLOCK: Template = Template {
        name: "block",
        description: "Still life",
        rows: &[
            &[1, 1],
            &[1, 1],
        ],
    };

    /// Blinker - period 2 oscillator
    pub const BLINKER: Template = Template {
        name: "blinker",
        description: "Oscillator (period 2)",
        rows: &[&[1, 1, 1]],
    };

    static ALL: [Template; 4] = [GLIDER, PULSAR, BLOCK, BLINKER];

    /// Every built-in template
    pub fn all() -> &'static [Template] {
        &ALL
    }

    /// Look up a template by exact name
    pub fn find(name: &str) -> Option<&'static Template> {
        ALL.iter().find(|template| template.name == name)
    }

    /// One `name (description)` entry per template, comma separated
    pub fn summary() -> String {
        all()
            .iter()
            .map(|template| format!("{} ({})", template.name, template.description))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
