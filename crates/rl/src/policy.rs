use coloring::Observation;

/// Chooses a color for the current node.
pub trait Policy {
    /// Returns `None` when the observation offers no legal action.
    fn act(&mut self, obs: &Observation) -> Option<usize>;
}

/// Uniform choice among the legal colors.
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, obs: &Observation) -> Option<usize> {
        let legal: Vec<usize> = obs.legal_actions().collect();
        if legal.is_empty() {
            return None;
        }
        Some(legal[self.rng.usize(..legal.len())])
    }
}

/// First-fit: always the lowest legal color.
#[derive(Default)]
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn act(&mut self, obs: &Observation) -> Option<usize> {
        obs.legal_actions().next()
    }
}
