use std::collections::VecDeque;

use fnv::FnvHashSet;
use log::trace;

use crate::basic_types::Colour;
use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::basic_types::VariableId;
use crate::propagation::ConsistencyFilter;
use crate::propagation::PropagationContext;

/// Establishes arc consistency over all domains with the AC-3 algorithm.
///
/// After a variable is assigned, its domain is reduced to the assigned colour, after which every
/// arc `(xi, xj)` of the graph is revised until no domain changes anymore. An arc is revised by
/// removing from the domain of `xi` every colour for which the domain of `xj` holds no other
/// colour. When the domain of `xi` shrinks, the arcs `(xk, xi)` pointing into it are queued again.
///
/// The worklist is kept between invocations to avoid reallocating it.
#[derive(Clone, Debug, Default)]
pub struct ArcConsistency {
    worklist: VecDeque<(VariableId, VariableId)>,
    queued: FnvHashSet<(VariableId, VariableId)>,
}

impl ArcConsistency {
    /// Runs AC-3 over the whole graph without assigning anything first.
    pub fn enforce(&mut self, context: &mut PropagationContext) -> PropagationStatus {
        self.worklist.clear();
        self.queued.clear();

        for arc in context.graph().arcs() {
            self.enqueue(arc);
        }

        while let Some(arc) = self.worklist.pop_front() {
            let _ = self.queued.remove(&arc);
            let (xi, xj) = arc;

            if Self::revise(context, xi, xj)? {
                for &xk in context.graph().neighbours(xi) {
                    self.enqueue((xk, xi));
                }
            }
        }

        Ok(())
    }

    fn enqueue(&mut self, arc: (VariableId, VariableId)) {
        if self.queued.insert(arc) {
            self.worklist.push_back(arc);
        }
    }

    /// Removes from the domain of `xi` every colour without a support in the domain of `xj`.
    /// Returns whether anything was removed.
    fn revise(
        context: &mut PropagationContext,
        xi: VariableId,
        xj: VariableId,
    ) -> Result<bool, EmptyDomain> {
        // A colour of xi is only unsupported if it is the single remaining colour of xj.
        let [unsupported] = context.domains().get(xj) else {
            return Ok(false);
        };
        let unsupported = *unsupported;

        if !context.domains().contains(xi, unsupported) {
            return Ok(false);
        }

        trace!("AC-3 removes {unsupported} from {xi} due to {xj}");
        context.remove(xi, unsupported)?;

        Ok(true)
    }
}

impl ConsistencyFilter for ArcConsistency {
    fn name(&self) -> &str {
        "ArcConsistency"
    }

    fn propagate(
        &mut self,
        context: &mut PropagationContext,
        variable: VariableId,
        value: Colour,
    ) -> PropagationStatus {
        context.fix(variable, value)?;
        self.enforce(context)
    }
}
