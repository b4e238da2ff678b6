use coloring::{
    ConfigError, EnvConfig, EnvError, Generator, GraphColoring, Observation, RandomGenerator,
    State,
};

/// Reinforcement learning environment trait.
///
/// Gym-style stateful interface on top of the pure transition engine. Each
/// call to [`step`] applies one action and returns the new observation, the
/// reward and whether the episode has terminated.
///
/// [`step`]: Env::step
pub trait Env {
    /// Apply `action` (a color index) to the current node.
    ///
    /// Returns `(obs, reward, done)`.
    ///
    /// # Errors
    ///
    /// Forwards [`EnvError`] from the engine; the environment is left as it
    /// was when the action is rejected.
    fn step(&mut self, action: usize) -> Result<(Observation, i64, bool), EnvError>;

    /// Start a new episode and return its first observation.
    fn reset(&mut self) -> Observation;

    /// Length of the flattened observation, see [`features`].
    fn obs_size(&self) -> usize;

    /// Number of discrete actions.
    fn action_size(&self) -> usize;
}

/// Flattens an observation into `f32` features: adjacency matrix, colors
/// (with `-1` for unassigned), action mask, current node index.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn features(obs: &Observation) -> Vec<f32> {
    let n = obs.num_nodes();
    let mut out = Vec::with_capacity(n * n + n + obs.action_mask.len() + 1);
    for row in 0..n {
        out.extend(obs.graph.row(row).iter().map(|&e| f32::from(u8::from(e))));
    }
    out.extend(obs.raw_colors().into_iter().map(|c| c as f32));
    out.extend(obs.action_mask.iter().map(|&m| f32::from(u8::from(m))));
    out.push(obs.current_node_index as f32);
    out
}

/// A graph coloring episode driven one action at a time.
///
/// Draws a new graph from its [`Generator`] on every reset. The episode state
/// is always present: construction performs the first reset.
pub struct ColoringEnv<G: Generator> {
    engine: GraphColoring,
    generator: G,
    rng: fastrand::Rng,
    state: State,
    observation: Observation,
}

impl<G: Generator> ColoringEnv<G> {
    /// Creates the environment and resets it once.
    #[must_use]
    pub fn new(engine: GraphColoring, generator: G, seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let (state, observation) = engine.reset(generator.generate(&mut rng));
        Self {
            engine,
            generator,
            rng,
            state,
            observation,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &GraphColoring {
        &self.engine
    }

    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    #[must_use]
    pub fn observation(&self) -> &Observation {
        &self.observation
    }
}

impl ColoringEnv<RandomGenerator> {
    /// Environment with random graphs as described by `config`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] found by [`EnvConfig::validate`].
    pub fn from_config(config: &EnvConfig, seed: u64) -> Result<Self, ConfigError> {
        Ok(Self::new(config.engine()?, config.generator()?, seed))
    }
}

impl<G: Generator> Env for ColoringEnv<G> {
    fn step(&mut self, action: usize) -> Result<(Observation, i64, bool), EnvError> {
        let transition = self.engine.step(&self.state, action)?;
        self.state = transition.state;
        self.observation = transition.observation;
        Ok((self.observation.clone(), transition.reward, transition.terminated))
    }

    fn reset(&mut self) -> Observation {
        let graph = self.generator.generate(&mut self.rng);
        let (state, observation) = self.engine.reset(graph);
        self.state = state;
        self.observation = observation;
        self.observation.clone()
    }

    fn obs_size(&self) -> usize {
        let n = self.generator.num_nodes();
        n * n + n + self.engine.max_colors() + 1
    }

    fn action_size(&self) -> usize {
        self.engine.max_colors()
    }
}
