use crate::basic_types::Solution;
use crate::basic_types::SolverError;
use crate::engine::Assignment;
use crate::engine::DomainStore;
use crate::graph::ConstraintGraph;

/// Checks that `assignment` is a proper colouring of `graph` that respects `initial_domains`, and
/// converts it into a [`Solution`].
pub(crate) fn validate_solution(
    graph: &ConstraintGraph,
    initial_domains: &DomainStore,
    assignment: &Assignment,
) -> Result<Solution, SolverError> {
    let solution = assignment.to_solution()?;

    if let Some((first, second, colour)) = assignment.first_conflict(graph) {
        return Err(SolverError::ConflictingAssignment {
            first,
            second,
            colour,
        });
    }

    if let Some((variable, colour)) = solution
        .iter()
        .find(|&(variable, colour)| !initial_domains.contains(variable, colour))
    {
        return Err(SolverError::AssignmentOutsideDomain { variable, colour });
    }

    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Colour;
    use crate::basic_types::VariableId;

    fn triangle() -> ConstraintGraph {
        ConstraintGraph::new(3, [(0, 1), (1, 2), (0, 2)]).expect("valid graph")
    }

    fn assignment_of(colours: &[u32]) -> Assignment {
        let mut assignment = Assignment::empty(colours.len());
        for (index, &colour) in colours.iter().enumerate() {
            assignment.assign(VariableId::new(index as u32), Colour::new(colour));
        }
        assignment
    }

    #[test]
    fn proper_colourings_are_accepted() {
        let graph = triangle();
        let domains = DomainStore::new(3, 3);

        let solution = validate_solution(&graph, &domains, &assignment_of(&[0, 1, 2]))
            .expect("proper colouring");

        assert_eq!(Colour::new(2), solution.colour_of(VariableId::new(2)));
    }

    #[test]
    fn conflicting_edges_are_reported() {
        let graph = triangle();
        let domains = DomainStore::new(3, 3);

        let result = validate_solution(&graph, &domains, &assignment_of(&[0, 1, 1]));

        assert_eq!(
            Err(SolverError::ConflictingAssignment {
                first: VariableId::new(1),
                second: VariableId::new(2),
                colour: Colour::new(1),
            }),
            result
        );
    }

    #[test]
    fn colours_outside_the_initial_domain_are_reported() {
        let graph = triangle();
        let domains = DomainStore::new(3, 2);

        let result = validate_solution(&graph, &domains, &assignment_of(&[0, 1, 2]));

        assert_eq!(
            Err(SolverError::AssignmentOutsideDomain {
                variable: VariableId::new(2),
                colour: Colour::new(2),
            }),
            result
        );
    }

    #[test]
    fn partial_assignments_are_reported() {
        let graph = triangle();
        let domains = DomainStore::new(3, 3);
        let mut assignment = assignment_of(&[0, 1, 2]);
        assignment.unassign(VariableId::new(1));

        let result = validate_solution(&graph, &domains, &assignment);

        assert_eq!(
            Err(SolverError::IncompleteAssignment {
                variable: VariableId::new(1),
            }),
            result
        );
    }
}
