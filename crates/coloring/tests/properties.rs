//! Seeded randomized checks over many generated graphs and masked random play.

use coloring::{
    Color, Generator, Graph, GraphColoring, Observation, RandomGenerator, State, UNASSIGNED,
};

const SEEDS: u64 = 40;

/// Plays one episode picking uniformly among legal colors, checking the
/// invariants after every transition. Returns the final state and rewards.
fn play(
    engine: &GraphColoring,
    graph: std::sync::Arc<Graph>,
    rng: &mut fastrand::Rng,
) -> (State, Vec<i64>) {
    let n = graph.num_nodes();
    let spec = engine.observation_spec(n);
    let (mut state, mut obs) = engine.reset(graph);
    assert!(spec.contains(&obs));
    let mut rewards = Vec::new();

    loop {
        let legal: Vec<usize> = obs.legal_actions().collect();
        assert!(!legal.is_empty(), "max_degree + 1 colors never run out");
        let action = legal[rng.usize(..legal.len())];
        assert!(engine.action_spec().contains(action));

        let before = state.current_node_index();
        let t = engine.step(&state, action).unwrap();
        assert_eq!(t.state.current_node_index(), before + 1);
        assert_eq!(t.terminated, t.state.current_node_index() == n);
        assert!(t.state.is_proper());
        assert!(spec.contains(&t.observation));
        assert_eq!(t.observation, engine.observation(&t.state));

        rewards.push(t.reward);
        state = t.state;
        obs = t.observation;
        if t.terminated {
            return (state, rewards);
        }
    }
}

#[test]
fn random_play_keeps_invariants() {
    for seed in 0..SEEDS {
        let mut rng = fastrand::Rng::with_seed(seed);
        let n = 1 + rng.usize(..30);
        let generator = RandomGenerator::new(n, 0.05 + 0.9 * rng.f64()).unwrap();
        let graph = generator.generate(&mut rng);
        let engine = GraphColoring::new(graph.max_degree() + 1).unwrap();

        let (state, rewards) = play(&engine, graph, &mut rng);
        assert_eq!(rewards.len(), n);
        let (last, rest) = rewards.split_last().unwrap();
        assert!(rest.iter().all(|&r| r == 0));
        assert_eq!(*last, -i64::try_from(state.num_colors_used()).unwrap());
        assert_eq!(engine.observation(&state).num_colors_used(), state.num_colors_used());
        assert!(state.colors().iter().all(|c| c.is_assigned()));
    }
}

#[test]
fn mask_is_pure() {
    let mut rng = fastrand::Rng::with_seed(7);
    let graph = RandomGenerator::new(25, 0.4).unwrap().generate(&mut rng);
    let engine = GraphColoring::new(25).unwrap();
    let (mut state, _) = engine.reset(graph);
    while !state.is_terminal() {
        let first = engine.action_mask(&state);
        let second = engine.action_mask(&state);
        assert_eq!(first, second);
        let action = first.iter().position(|&legal| legal).unwrap();
        state = engine.step(&state, action).unwrap().state;
    }
}

#[test]
fn generator_output_is_well_formed_and_reproducible() {
    let generator = RandomGenerator::new(30, 0.3).unwrap();
    let a = generator.generate(&mut fastrand::Rng::with_seed(99));
    let b = generator.generate(&mut fastrand::Rng::with_seed(99));
    assert_eq!(a, b);
    assert_eq!(a.num_nodes(), 30);
    for i in 0..30 {
        assert!(!a.has_edge(i, i));
        for j in 0..30 {
            assert_eq!(a.has_edge(i, j), a.has_edge(j, i));
        }
    }
    // 435 possible edges at p = 0.3; allow a wide margin.
    assert!((60..200).contains(&a.num_edges()), "edges: {}", a.num_edges());
}

#[test]
fn generator_rejects_bad_connectivity() {
    assert!(RandomGenerator::new(10, 0.0).is_err());
    assert!(RandomGenerator::new(10, 1.0).is_err());
    assert!(RandomGenerator::new(10, f64::NAN).is_err());
    assert!(RandomGenerator::new(0, 0.5).is_err());
}

#[test]
fn observation_json_uses_minus_one_for_unassigned() {
    let engine = GraphColoring::new(3).unwrap();
    let (state, _) = engine.reset(Graph::cycle(3).unwrap());
    let obs = engine.step(&state, 2).unwrap().observation;
    let value = serde_json::to_value(&obs).unwrap();
    assert_eq!(value["colors"], serde_json::json!([2, UNASSIGNED, UNASSIGNED]));
    assert_eq!(value["action_mask"], serde_json::json!([true, true, false]));
    assert_eq!(value["current_node_index"], 1);
    assert_eq!(value["graph"][0], serde_json::json!([false, true, true]));

    let back: Observation = serde_json::from_value(value).unwrap();
    assert_eq!(back, obs);
    assert_eq!(back.colors[0], Color::Assigned(2));
}

#[test]
fn episodes_run_on_independent_threads() {
    // One engine shared by reference; each thread owns its own states.
    let engine = GraphColoring::new(12).unwrap();
    let generator = RandomGenerator::new(12, 0.3).unwrap();
    let results: Vec<i64> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4_u64)
            .map(|seed| {
                let (engine, generator) = (&engine, &generator);
                scope.spawn(move || {
                    let mut rng = fastrand::Rng::with_seed(seed);
                    let graph = generator.generate(&mut rng);
                    let (_, rewards) = play(engine, graph, &mut rng);
                    *rewards.last().unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|r| (-12..0).contains(r)));
}
