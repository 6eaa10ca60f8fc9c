use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers when one of two given [`TerminationCondition`]s
/// triggers.
#[derive(Clone, Copy, Debug)]
pub struct Combinator<T1, T2> {
    t1: T1,
    t2: T2,
}

impl<T1, T2> Combinator<T1, T2> {
    /// Combines two [`TerminationCondition`]s into one.
    pub fn new(t1: T1, t2: T2) -> Self {
        Combinator { t1, t2 }
    }
}

impl<T1: TerminationCondition, T2: TerminationCondition> TerminationCondition
    for Combinator<T1, T2>
{
    fn should_stop(&mut self) -> bool {
        self.t1.should_stop() || self.t2.should_stop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::termination::Indefinite;

    #[derive(Debug)]
    struct StopAfter(usize);

    impl TerminationCondition for StopAfter {
        fn should_stop(&mut self) -> bool {
            if self.0 == 0 {
                return true;
            }
            self.0 -= 1;
            false
        }
    }

    #[test]
    fn either_condition_stops_the_combination() {
        let mut combined = Combinator::new(Indefinite, StopAfter(1));

        assert!(!combined.should_stop());
        assert!(combined.should_stop());
    }

    #[test]
    fn absent_conditions_never_stop() {
        let mut combined = Combinator::new(Indefinite, None::<StopAfter>);

        assert!(!combined.should_stop());
    }
}
