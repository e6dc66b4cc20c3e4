//! Level generation in fixed order: players, goal, obstacles, walls, teleporters, monsters.
//! Each later step only claims cells that earlier steps left empty.

use log::debug;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::config::{ConfigError, GameConfig};
use crate::grid::Grid;
use crate::types::{CellKind, PlayerId, Pos};

use super::model::GeneratedLevel;
use super::placement::{claim_random_empty, scatter_best_effort, unit_interval};
use super::seed::derive_level_seed;

pub struct MazeGenerator {
    run_seed: u64,
    config: GameConfig,
}

impl MazeGenerator {
    pub fn new(run_seed: u64, config: GameConfig) -> Self {
        Self { run_seed, config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn generate(&self, level: u8) -> Result<GeneratedLevel, ConfigError> {
        self.config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(derive_level_seed(self.run_seed, level));
        let size = self.config.level_size(level);
        let mut grid = Grid::new(size);

        let mut player_starts = Vec::with_capacity(usize::from(self.config.player_count));
        for index in 0..self.config.player_count {
            let marker = CellKind::Player(PlayerId(index));
            player_starts.push(claim(&mut grid, &mut rng, marker, "player", level)?);
        }

        let goal = claim(&mut grid, &mut rng, CellKind::Goal, "goal", level)?;

        for _ in 0..self.config.obstacle_count {
            claim(&mut grid, &mut rng, CellKind::Obstacle, "obstacle", level)?;
        }

        let walls = scatter_best_effort(
            &mut grid,
            &mut rng,
            CellKind::Wall,
            self.config.wall_attempts(size),
        );

        for _ in 0..self.config.teleporter_count {
            claim(&mut grid, &mut rng, CellKind::Teleporter, "teleporter", level)?;
        }

        let monster_spawns = self.seed_monsters(&mut grid, &mut rng);

        debug!(
            "generated level {level}: size={size} walls={walls} monsters={}",
            monster_spawns.len()
        );

        Ok(GeneratedLevel { level, grid, player_starts, goal, monster_spawns })
    }

    fn seed_monsters(&self, grid: &mut Grid, rng: &mut ChaCha8Rng) -> Vec<Pos> {
        let mut spawns = Vec::new();
        for pos in grid.positions_of(CellKind::Empty) {
            if unit_interval(rng) < self.config.monster_probability {
                grid.set(pos, CellKind::Monster);
                spawns.push(pos);
            }
        }
        spawns
    }
}

fn claim(
    grid: &mut Grid,
    rng: &mut ChaCha8Rng,
    cell: CellKind,
    feature: &'static str,
    level: u8,
) -> Result<Pos, ConfigError> {
    claim_random_empty(grid, rng, cell).ok_or(ConfigError::GridExhausted { feature, level })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;
    use xxhash_rust::xxh3::xxh3_64;

    use super::*;

    fn generate(seed: u64, level: u8) -> GeneratedLevel {
        MazeGenerator::new(seed, GameConfig::default()).generate(level).unwrap()
    }

    #[test]
    fn same_inputs_produce_byte_identical_levels() {
        let a = generate(123_456, 2);
        let b = generate(123_456, 2);
        assert_eq!(xxh3_64(&a.canonical_bytes()), xxh3_64(&b.canonical_bytes()));
        assert_eq!(a, b);
    }

    #[test]
    fn changing_level_or_seed_changes_layout() {
        let base = generate(123_456, 1).canonical_bytes();
        assert_ne!(base, generate(123_456, 2).canonical_bytes());
        assert_ne!(base, generate(654_321, 1).canonical_bytes());
    }

    #[test]
    fn grid_grows_by_one_per_level() {
        for (level, size) in [(1, 10), (2, 11), (3, 12)] {
            assert_eq!(generate(5, level).size(), size);
        }
    }

    #[test]
    fn fixed_counts_are_exact_and_walls_are_best_effort() {
        for seed in [1_u64, 2, 3, 40, 99, 1_024] {
            let generated = generate(seed, 1);
            let grid = &generated.grid;
            assert_eq!(grid.count(CellKind::Goal), 1);
            assert_eq!(grid.count(CellKind::Obstacle), 15);
            assert_eq!(grid.count(CellKind::Teleporter), 5);
            assert!(grid.count(CellKind::Wall) <= 25);
            assert_eq!(grid.count(CellKind::Monster), generated.monster_spawns.len());
            assert_eq!(grid.at(generated.goal), CellKind::Goal);
        }
    }

    #[test]
    fn players_start_on_distinct_cells_carrying_their_markers() {
        for seed in 0..20 {
            let generated = generate(seed, 3);
            let starts: BTreeSet<Pos> = generated.player_starts.iter().copied().collect();
            assert_eq!(starts.len(), 2);
            for (index, start) in generated.player_starts.iter().enumerate() {
                assert_eq!(generated.grid.at(*start), CellKind::Player(PlayerId(index as u8)));
                assert_ne!(*start, generated.goal);
            }
        }
    }

    #[test]
    fn zero_probability_spawns_no_monsters_and_one_fills_every_gap() {
        let none = GameConfig { monster_probability: 0.0, ..GameConfig::default() };
        let generated = MazeGenerator::new(77, none).generate(1).unwrap();
        assert!(generated.monster_spawns.is_empty());

        let all = GameConfig { monster_probability: 1.0, ..GameConfig::default() };
        let generated = MazeGenerator::new(77, all).generate(1).unwrap();
        assert_eq!(generated.grid.count(CellKind::Empty), 0);
    }

    #[test]
    fn overcrowded_grid_is_rejected_before_any_placement() {
        let config = GameConfig { min_size: 3, obstacle_count: 20, ..GameConfig::default() };
        let err = MazeGenerator::new(1, config).generate(1).unwrap_err();
        assert!(matches!(err, ConfigError::Overcrowded { level: 1, .. }));
    }

    #[test]
    fn invalid_rules_are_reported_instead_of_generated() {
        let config = GameConfig { wall_divisor: 0, ..GameConfig::default() };
        assert_eq!(super::super::generate_level(1, &config, 1), Err(ConfigError::WallDivisor));
        assert_eq!(
            MazeGenerator::new(1, config).generate(1).unwrap_err(),
            ConfigError::WallDivisor
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn claimed_features_never_share_cells(seed in any::<u64>(), level in 1_u8..=3) {
            let generated = generate(seed, level);
            let grid = &generated.grid;

            let mut claimed = BTreeSet::new();
            claimed.insert(generated.goal);
            for pos in grid.positions_of(CellKind::Obstacle) {
                claimed.insert(pos);
            }
            for pos in grid.positions_of(CellKind::Teleporter) {
                claimed.insert(pos);
            }
            prop_assert_eq!(claimed.len(), 1 + 15 + 5);
            for start in &generated.player_starts {
                prop_assert!(!claimed.contains(start));
            }
            for spawn in &generated.monster_spawns {
                prop_assert_eq!(grid.at(*spawn), CellKind::Monster);
            }
        }
    }
}
