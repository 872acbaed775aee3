//! Units and peers for the two puzzle variants.

use std::fmt::{self, Display};

use xdoku_core::{Cell, CellSet};

use crate::variant::Variant;

/// Which of the two main diagonals a diagonal unit covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slant {
    /// Top-left to bottom-right.
    Main,
    /// Top-right to bottom-left.
    Anti,
}

/// A group of nine cells that must contain every digit exactly once.
///
/// Units come in four families: 9 rows, 9 columns, 9 boxes, and (diagonal
/// variant only) the 2 main diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// A row identified by its index (0-8, top to bottom).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its index (0-8, left to right).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
    /// One of the two main diagonals.
    Diagonal {
        /// Which diagonal.
        slant: Slant,
    },
}

impl Unit {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { y: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { x: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// The top-left to bottom-right diagonal.
    pub const MAIN_DIAGONAL: Self = Self::Diagonal { slant: Slant::Main };

    /// The top-right to bottom-left diagonal.
    pub const ANTI_DIAGONAL: Self = Self::Diagonal { slant: Slant::Anti };

    /// All units of the standard variant, in row, column, box order.
    pub const STANDARD: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        while i < 9 {
            all[i] = Self::ROWS[i];
            all[i + 9] = Self::COLUMNS[i];
            all[i + 18] = Self::BOXES[i];
            i += 1;
        }
        all
    };

    /// All units of the diagonal variant: the standard units followed by the
    /// two diagonals.
    pub const DIAGONAL: [Self; 29] = {
        let mut all = [Self::Row { y: 0 }; 29];
        let mut i = 0;
        while i < 27 {
            all[i] = Self::STANDARD[i];
            i += 1;
        }
        all[27] = Self::MAIN_DIAGONAL;
        all[28] = Self::ANTI_DIAGONAL;
        all
    };

    /// Converts a cell index within the unit (0-8) into an absolute [`Cell`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub fn cell_at(self, i: u8) -> Cell {
        assert!(i < 9);
        match self {
            Self::Row { y } => Cell::new(y, i),
            Self::Column { x } => Cell::new(i, x),
            Self::Box { index } => Cell::from_box(index, i),
            Self::Diagonal { slant: Slant::Main } => Cell::new(i, i),
            Self::Diagonal { slant: Slant::Anti } => Cell::new(i, 8 - i),
        }
    }

    /// Returns the nine cells of this unit.
    #[must_use]
    pub fn cells(self) -> [Cell; 9] {
        let mut cells = [Cell::from_index(0); 9];
        for (i, cell) in cells.iter_mut().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            *cell = self.cell_at(i);
        }
        cells
    }

    /// Returns the cells of this unit as a [`CellSet`].
    #[must_use]
    pub fn cell_set(self) -> CellSet {
        self.cells().into_iter().collect()
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { y } => write!(f, "row {y}"),
            Self::Column { x } => write!(f, "column {x}"),
            Self::Box { index } => write!(f, "box {index}"),
            Self::Diagonal { slant: Slant::Main } => f.write_str("main diagonal"),
            Self::Diagonal { slant: Slant::Anti } => f.write_str("anti diagonal"),
        }
    }
}

/// The unit list and peer relation for a puzzle variant.
///
/// A topology is computed once per variant and shared read-only for the whole
/// solve: the unit list drives hidden singles, naked twins, and validation,
/// while the precomputed peer sets drive elimination.
///
/// # Examples
///
/// ```
/// use xdoku_core::Cell;
/// use xdoku_solver::{Topology, Variant};
///
/// let topology = Topology::new(Variant::Standard);
/// assert_eq!(topology.units().len(), 27);
/// assert_eq!(topology.peers(Cell::new(0, 0)).len(), 20);
///
/// let topology = Topology::new(Variant::Diagonal);
/// assert_eq!(topology.units().len(), 29);
/// // Cells on a diagonal gain peers from the diagonal unit.
/// assert_eq!(topology.peers(Cell::new(0, 0)).len(), 26);
/// ```
#[derive(Debug, Clone)]
pub struct Topology {
    variant: Variant,
    units: &'static [Unit],
    peers: [CellSet; Cell::COUNT],
}

impl Topology {
    /// Builds the topology for a variant.
    ///
    /// Pure and total: the unit list is a fixed table and the peer of each
    /// cell is the union of all units containing it, minus the cell itself.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        let units: &'static [Unit] = match variant {
            Variant::Standard => &Unit::STANDARD,
            Variant::Diagonal => &Unit::DIAGONAL,
        };
        let mut peers = [CellSet::EMPTY; Cell::COUNT];
        for unit in units {
            let members = unit.cell_set();
            for cell in members {
                peers[cell.index()] |= members;
            }
        }
        for cell in Cell::all() {
            peers[cell.index()].remove(cell);
        }
        Self {
            variant,
            units,
            peers,
        }
    }

    /// Returns the variant this topology was built for.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns all units of this topology.
    #[must_use]
    pub fn units(&self) -> &[Unit] {
        self.units
    }

    /// Returns the peers of a cell: every cell sharing at least one unit
    /// with it, excluding the cell itself.
    #[must_use]
    pub fn peers(&self, cell: Cell) -> CellSet {
        self.peers[cell.index()]
    }

    /// Returns the cells of the top-left to bottom-right diagonal.
    ///
    /// Exposed for renderer highlighting only; the set is the same for both
    /// variants and never affects solving in the standard variant.
    #[must_use]
    pub fn main_diagonal(&self) -> CellSet {
        Unit::MAIN_DIAGONAL.cell_set()
    }

    /// Returns the cells of the top-right to bottom-left diagonal.
    ///
    /// Exposed for renderer highlighting only.
    #[must_use]
    pub fn anti_diagonal(&self) -> CellSet {
        Unit::ANTI_DIAGONAL.cell_set()
    }
}
