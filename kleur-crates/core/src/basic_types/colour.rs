use std::fmt::Display;

use crate::containers::StorageKey;

/// A colour which can be given to a variable. The colours of an instance are `0..num_colours`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Colour(u32);

impl Colour {
    pub const fn new(id: u32) -> Self {
        Colour(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }

    /// All colours of an instance with `num_colours` colours, in increasing order.
    pub fn palette(num_colours: u32) -> impl Iterator<Item = Colour> {
        (0..num_colours).map(Colour)
    }
}

impl StorageKey for Colour {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        Colour(index as u32)
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
