//! Random cell placement strategies: resample-until-empty and best-effort scattering.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::grid::Grid;
use crate::types::{CellKind, Pos};

/// Draws per cell before falling back to scanning for empty cells.
const RESAMPLE_ATTEMPTS_PER_CELL: usize = 64;

pub(crate) fn random_pos(rng: &mut ChaCha8Rng, size: usize) -> Pos {
    let y = (rng.next_u64() % size as u64) as i32;
    let x = (rng.next_u64() % size as u64) as i32;
    Pos { y, x }
}

/// Uniform random draw in `[0, 1)`.
pub(crate) fn unit_interval(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
}

/// Resamples uniform cells until an empty one turns up. Once the attempt budget
/// runs out the choice is made uniformly among the remaining empty cells, which
/// keeps the same distribution on a nearly full grid without spinning.
pub(crate) fn find_random_empty(grid: &Grid, rng: &mut ChaCha8Rng) -> Option<Pos> {
    let size = grid.size();
    for _ in 0..size * size * RESAMPLE_ATTEMPTS_PER_CELL {
        let pos = random_pos(rng, size);
        if grid.is_empty(pos) {
            return Some(pos);
        }
    }

    let empty = grid.positions_of(CellKind::Empty);
    if empty.is_empty() {
        return None;
    }
    Some(empty[(rng.next_u64() % empty.len() as u64) as usize])
}

pub(crate) fn claim_random_empty(
    grid: &mut Grid,
    rng: &mut ChaCha8Rng,
    cell: CellKind,
) -> Option<Pos> {
    let pos = find_random_empty(grid, rng)?;
    grid.set(pos, cell);
    Some(pos)
}

/// Makes exactly `attempts` draws and claims only those that land on empty cells.
pub(crate) fn scatter_best_effort(
    grid: &mut Grid,
    rng: &mut ChaCha8Rng,
    cell: CellKind,
    attempts: usize,
) -> usize {
    let mut placed = 0;
    for _ in 0..attempts {
        let pos = random_pos(rng, grid.size());
        if grid.is_empty(pos) {
            grid.set(pos, cell);
            placed += 1;
        }
    }
    placed
}
