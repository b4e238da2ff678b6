use crate::env::Env;
use crate::policy::Policy;
use coloring::{ConfigError, EnvError, Observation};
use tracing::{debug, info};

/// Summary of one finished episode.
#[derive(Debug, Clone)]
pub struct EpisodeStats {
    pub steps: usize,
    /// Sum of rewards, i.e. minus the number of colors used.
    pub episode_return: i64,
    pub colors_used: usize,
    pub final_observation: Observation,
}

/// Resets `env` and plays one full episode with `policy`.
///
/// # Errors
///
/// Returns [`ConfigError::ColorsExhausted`] when the policy finds no legal
/// color, and forwards any [`EnvError`] raised by the environment.
pub fn run_episode<E: Env, P: Policy>(
    env: &mut E,
    policy: &mut P,
) -> Result<EpisodeStats, EnvError> {
    let mut obs = env.reset();
    let mut episode_return = 0;
    let mut steps = 0;
    loop {
        let Some(action) = policy.act(&obs) else {
            return Err(ConfigError::ColorsExhausted {
                node: obs.current_node_index,
                max_colors: obs.action_mask.len(),
            }
            .into());
        };
        let (next, reward, done) = env.step(action)?;
        episode_return += reward;
        steps += 1;
        obs = next;
        if done {
            break;
        }
        if steps % 100 == 0 {
            debug!(steps, "episode in progress");
        }
    }
    let colors_used = obs.num_colors_used();
    info!(steps, episode_return, colors_used, "episode finished");
    Ok(EpisodeStats {
        steps,
        episode_return,
        colors_used,
        final_observation: obs,
    })
}
