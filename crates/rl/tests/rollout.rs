use coloring::{
    ConfigError, EnvConfig, EnvError, FixedGenerator, Graph, GraphColoring, ObservationSpec,
};
use rl::{features, run_episode, ColoringEnv, Env, GreedyPolicy, Policy, RandomPolicy};

#[test]
fn greedy_completes_random_graphs() {
    let config = EnvConfig {
        num_nodes: 30,
        percent_connected: 0.3,
        max_colors: Some(30),
    };
    let mut env = ColoringEnv::from_config(&config, 3).unwrap();
    for _ in 0..5 {
        let stats = run_episode(&mut env, &mut GreedyPolicy).unwrap();
        assert_eq!(stats.steps, 30);
        assert_eq!(stats.episode_return, -i64::try_from(stats.colors_used).unwrap());
        assert!(stats.colors_used <= env.state().graph().max_degree() + 1);
        assert!(env.state().is_proper());
        assert!(ObservationSpec::new(30, 30).contains(&stats.final_observation));
    }
}

#[test]
fn random_policy_completes_with_degree_bound() {
    let graph = Graph::cycle(7).unwrap();
    let engine = GraphColoring::new(graph.max_degree() + 1).unwrap();
    let mut env = ColoringEnv::new(engine, FixedGenerator::new(graph), 0);
    let mut policy = RandomPolicy::new(11);
    for _ in 0..20 {
        let stats = run_episode(&mut env, &mut policy).unwrap();
        assert_eq!(stats.steps, 7);
        // An odd cycle needs three colors.
        assert_eq!(stats.colors_used, 3);
    }
}

#[test]
fn greedy_on_bipartite_cycle_uses_two_colors() {
    let graph = Graph::cycle(6).unwrap();
    let mut env = ColoringEnv::new(GraphColoring::new(6).unwrap(), FixedGenerator::new(graph), 0);
    let stats = run_episode(&mut env, &mut GreedyPolicy).unwrap();
    assert_eq!(stats.episode_return, -2);
    assert_eq!(stats.final_observation.raw_colors(), vec![0, 1, 0, 1, 0, 1]);
}

#[test]
fn exhausted_colors_stop_the_rollout() {
    let graph = Graph::complete(4).unwrap();
    let mut env = ColoringEnv::new(GraphColoring::new(3).unwrap(), FixedGenerator::new(graph), 0);
    let err = run_episode(&mut env, &mut GreedyPolicy).unwrap_err();
    assert_eq!(
        err,
        EnvError::Config(ConfigError::ColorsExhausted {
            node: 3,
            max_colors: 3,
        })
    );
}

#[test]
fn stateful_env_rejects_and_recovers() {
    let graph = Graph::cycle(4).unwrap();
    let mut env = ColoringEnv::new(GraphColoring::new(4).unwrap(), FixedGenerator::new(graph), 0);
    let obs = env.reset();
    assert_eq!(features(&obs).len(), env.obs_size());
    assert_eq!(env.action_size(), 4);

    env.step(2).unwrap();
    let before = env.state().clone();
    assert!(matches!(env.step(2), Err(EnvError::InvalidAction { .. })));
    assert_eq!(env.state(), &before);

    let mut done = false;
    while !done {
        let action = GreedyPolicy.act(env.observation()).unwrap();
        done = env.step(action).unwrap().2;
    }
    assert!(matches!(env.step(0), Err(EnvError::PostTerminalCall { num_nodes: 4 })));
    assert_eq!(env.reset().current_node_index, 0);
}

#[test]
fn features_layout() {
    let graph = Graph::from_edges(2, &[(0, 1)]).unwrap();
    let engine = GraphColoring::new(3).unwrap();
    let (state, _) = engine.reset(graph);
    let obs = engine.step(&state, 2).unwrap().observation;
    assert_eq!(
        features(&obs),
        vec![0.0, 1.0, 1.0, 0.0, 2.0, -1.0, 1.0, 1.0, 0.0, 1.0]
    );
}

#[test]
fn seeded_envs_are_reproducible() {
    let config = EnvConfig::tiny();
    let mut a = ColoringEnv::from_config(&config, 42).unwrap();
    let mut b = ColoringEnv::from_config(&config, 42).unwrap();
    assert_eq!(a.reset(), b.reset());
    let ra = run_episode(&mut a, &mut RandomPolicy::new(5)).unwrap();
    let rb = run_episode(&mut b, &mut RandomPolicy::new(5)).unwrap();
    assert_eq!(ra.final_observation, rb.final_observation);
}
