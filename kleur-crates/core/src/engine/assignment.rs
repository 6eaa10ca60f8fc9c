use std::fmt::Display;

use crate::basic_types::Colour;
use crate::basic_types::Solution;
use crate::basic_types::SolverError;
use crate::basic_types::VariableId;
use crate::containers::KeyedVec;
use crate::graph::ConstraintGraph;

/// The (partial) colouring under construction: every variable is either unassigned or holds one
/// colour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    colours: KeyedVec<VariableId, Option<Colour>>,
    num_assigned: usize,
}

impl Assignment {
    /// An assignment in which none of the `num_variables` variables is assigned.
    pub fn empty(num_variables: usize) -> Assignment {
        Assignment {
            colours: KeyedVec::from_fn(num_variables, |_| None),
            num_assigned: 0,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.colours.len()
    }

    pub fn num_assigned(&self) -> usize {
        self.num_assigned
    }

    pub fn value(&self, variable: VariableId) -> Option<Colour> {
        self.colours[variable]
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.colours[variable].is_some()
    }

    /// Whether every variable holds a colour.
    pub fn is_complete(&self) -> bool {
        self.num_assigned == self.colours.len()
    }

    /// Gives `variable` the colour `colour`, replacing its previous colour if it had one.
    pub fn assign(&mut self, variable: VariableId, colour: Colour) {
        if self.colours[variable].replace(colour).is_none() {
            self.num_assigned += 1;
        }
    }

    pub fn unassign(&mut self, variable: VariableId) {
        if self.colours[variable].take().is_some() {
            self.num_assigned -= 1;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableId, Option<Colour>)> + '_ {
        self.colours
            .iter_with_keys()
            .map(|(variable, colour)| (variable, *colour))
    }

    pub fn unassigned(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.iter()
            .filter(|(_, colour)| colour.is_none())
            .map(|(variable, _)| variable)
    }

    /// The number of neighbours of `variable` which are currently assigned `colour`.
    pub fn num_neighbours_with_colour(
        &self,
        graph: &ConstraintGraph,
        variable: VariableId,
        colour: Colour,
    ) -> usize {
        graph
            .neighbours(variable)
            .iter()
            .filter(|&&neighbour| self.colours[neighbour] == Some(colour))
            .count()
    }

    /// Whether the colour of `variable` (if any) differs from the colours of all of its assigned
    /// neighbours.
    pub fn is_consistent_at(&self, graph: &ConstraintGraph, variable: VariableId) -> bool {
        match self.colours[variable] {
            Some(colour) => self.num_neighbours_with_colour(graph, variable, colour) == 0,
            None => true,
        }
    }

    /// Whether `variable` is assigned and shares its colour with at least one neighbour.
    pub fn is_conflicted(&self, graph: &ConstraintGraph, variable: VariableId) -> bool {
        !self.is_consistent_at(graph, variable)
    }

    /// Returns the first edge (in the order of [`ConstraintGraph::edges`]) whose endpoints are
    /// assigned the same colour.
    pub fn first_conflict(
        &self,
        graph: &ConstraintGraph,
    ) -> Option<(VariableId, VariableId, Colour)> {
        graph.edges().find_map(|(u, v)| match (self.value(u), self.value(v)) {
            (Some(colour_u), Some(colour_v)) if colour_u == colour_v => Some((u, v, colour_u)),
            _ => None,
        })
    }

    /// Whether no two adjacent assigned variables share a colour.
    pub fn is_consistent(&self, graph: &ConstraintGraph) -> bool {
        self.first_conflict(graph).is_none()
    }

    /// The number of edges whose endpoints are assigned the same colour.
    pub fn num_violations(&self, graph: &ConstraintGraph) -> usize {
        graph
            .edges()
            .filter(|&(u, v)| self.value(u).is_some() && self.value(u) == self.value(v))
            .count()
    }

    /// Converts a complete assignment into a [`Solution`].
    pub fn to_solution(&self) -> Result<Solution, SolverError> {
        let colours = self
            .iter()
            .map(|(variable, colour)| colour.ok_or(SolverError::IncompleteAssignment { variable }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Solution::new(KeyedVec::from(colours)))
    }
}

/// Prints the colour of every variable in order, with `-` for unassigned variables.
impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, colour) in self.colours.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            match colour {
                Some(colour) => write!(f, "{colour}")?,
                None => write!(f, "-")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x(id: u32) -> VariableId {
        VariableId::new(id)
    }

    fn c(id: u32) -> Colour {
        Colour::new(id)
    }

    fn path() -> ConstraintGraph {
        ConstraintGraph::new(3, [(0, 1), (1, 2)]).expect("valid graph")
    }

    #[test]
    fn assigning_and_unassigning_tracks_the_number_of_assigned_variables() {
        let mut assignment = Assignment::empty(3);

        assignment.assign(x(0), c(1));
        assignment.assign(x(0), c(2));
        assignment.assign(x(2), c(0));
        assert_eq!(2, assignment.num_assigned());
        assert_eq!(Some(c(2)), assignment.value(x(0)));

        assignment.unassign(x(0));
        assignment.unassign(x(0));
        assert_eq!(1, assignment.num_assigned());
        assert_eq!(vec![x(0), x(1)], assignment.unassigned().collect::<Vec<_>>());
        assert!(!assignment.is_complete());
    }

    #[test]
    fn conflicts_are_only_between_assigned_neighbours() {
        let graph = path();
        let mut assignment = Assignment::empty(3);

        assignment.assign(x(0), c(0));
        assignment.assign(x(2), c(0));
        assert!(assignment.is_consistent(&graph));

        assignment.assign(x(1), c(0));
        assert!(!assignment.is_consistent(&graph));
        assert!(assignment.is_conflicted(&graph, x(1)));
        assert_eq!(2, assignment.num_violations(&graph));
        assert_eq!(Some((x(0), x(1), c(0))), assignment.first_conflict(&graph));
    }

    #[test]
    fn unassigned_variables_are_never_conflicted() {
        let graph = path();
        let mut assignment = Assignment::empty(3);
        assignment.assign(x(0), c(0));

        assert!(!assignment.is_conflicted(&graph, x(1)));
        assert_eq!(1, assignment.num_neighbours_with_colour(&graph, x(1), c(0)));
    }

    #[test]
    fn only_complete_assignments_are_solutions() {
        let mut assignment = Assignment::empty(2);
        assignment.assign(x(0), c(3));
        assert_eq!(
            Err(SolverError::IncompleteAssignment { variable: x(1) }),
            assignment.to_solution()
        );

        assignment.assign(x(1), c(1));
        let solution = assignment.to_solution().expect("complete assignment");

        assert_eq!(vec![c(3), c(1)], solution.colours().collect::<Vec<_>>());
    }

    #[test]
    fn display_marks_unassigned_variables() {
        let mut assignment = Assignment::empty(3);
        assignment.assign(x(1), c(2));

        assert_eq!("- 2 -", assignment.to_string());
    }
}
