use crate::basic_types::Colour;
use crate::basic_types::VariableId;
use crate::containers::KeyedVec;

/// A complete colouring of the variables of an instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    colours: KeyedVec<VariableId, Colour>,
}

impl Solution {
    pub(crate) fn new(colours: KeyedVec<VariableId, Colour>) -> Self {
        Solution { colours }
    }

    pub fn num_variables(&self) -> usize {
        self.colours.len()
    }

    pub fn colour_of(&self, variable: VariableId) -> Colour {
        self.colours[variable]
    }

    /// The colours of all variables, in the order of the variables.
    pub fn colours(&self) -> impl Iterator<Item = Colour> + '_ {
        self.colours.iter().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableId, Colour)> + '_ {
        self.colours
            .iter_with_keys()
            .map(|(variable, colour)| (variable, *colour))
    }
}
