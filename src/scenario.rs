use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::common::{State, BLANK, CELLS};
use crate::config::Config;
use crate::error::{PuzzleError, Result};

/// Parses the nine tile tokens. Any count, character or labelling problem is
/// reported as an input format error.
pub fn parse_initial(input: &str) -> Result<State> {
    input.parse::<State>().map_err(|err| match err {
        PuzzleError::InvalidTile { .. } => PuzzleError::InputFormat,
        other => other,
    })
}

/// Pairs of non-blank tiles, in reading order, whose labels are out of order.
pub fn inversions(state: &State) -> usize {
    let tiles: Vec<u8> = state
        .tiles()
        .iter()
        .copied()
        .filter(|&t| t != BLANK)
        .collect();
    tiles
        .iter()
        .enumerate()
        .map(|(i, &tile)| tiles[i + 1..].iter().filter(|&&later| later < tile).count())
        .sum()
}

/// Even inversion count: reachable from the default goal.
pub fn is_solvable(state: &State) -> bool {
    inversions(state) % 2 == 0
}

/// Shuffles tiles until the permutation passes the parity check.
pub fn random_solvable<R: Rng + ?Sized>(rng: &mut R) -> Result<State> {
    let mut tiles: [u8; CELLS] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
    loop {
        tiles.shuffle(rng);
        let state = State::new(tiles)?;
        if is_solvable(&state) {
            return Ok(state);
        }
        debug!("discard unsolvable shuffle {state}");
    }
}

/// Resolves the initial state from the configuration: a seeded random
/// instance, or the configured tiles after the format and parity checks.
pub fn load_initial(config: &Config) -> Result<State> {
    let state = if config.random {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let state = random_solvable(&mut rng)?;
        info!("random instance (seed {}): {state}", config.seed);
        state
    } else {
        parse_initial(config.initial.as_deref().unwrap_or_default())?
    };

    if !is_solvable(&state) {
        return Err(PuzzleError::Unsolvable);
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_initial_maps_labelling_errors() {
        assert!(parse_initial("1 2 3 4 5 6 7 8 0").is_ok());
        assert!(matches!(
            parse_initial("1 2 3 4 5 6 7 8"),
            Err(PuzzleError::InputFormat)
        ));
        assert!(matches!(
            parse_initial("1 2 3 4 5 6 7 8 8"),
            Err(PuzzleError::InputFormat)
        ));
        assert!(matches!(parse_initial(""), Err(PuzzleError::InputFormat)));
    }

    #[test]
    fn test_inversion_parity() {
        let unsolvable = parse_initial("1 2 3 4 5 6 8 7 0").unwrap();
        assert_eq!(inversions(&unsolvable), 1);
        assert!(!is_solvable(&unsolvable));

        let solvable = parse_initial("1 2 3 4 5 6 7 8 0").unwrap();
        assert_eq!(inversions(&solvable), 0);
        assert!(is_solvable(&solvable));

        assert_eq!(inversions(&parse_initial("8 7 6 5 4 3 2 1 0").unwrap()), 28);
    }

    #[test]
    fn test_random_solvable_is_seeded() {
        let a = random_solvable(&mut StdRng::seed_from_u64(7)).unwrap();
        let b = random_solvable(&mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
        assert!(is_solvable(&a));
    }

    #[test]
    fn test_load_initial() {
        let mut config = Config {
            initial: Some("1 2 3 4 5 6 8 7 0".to_string()),
            ..Config::default()
        };
        assert!(matches!(load_initial(&config), Err(PuzzleError::Unsolvable)));

        config.initial = Some("1 2 3 4 5 6 7 8 0".to_string());
        assert_eq!(load_initial(&config).unwrap().to_string(), "1 2 3 4 5 6 7 8 0");

        config.initial = None;
        assert!(matches!(load_initial(&config), Err(PuzzleError::InputFormat)));

        config.random = true;
        assert!(is_solvable(&load_initial(&config).unwrap()));
    }
}
