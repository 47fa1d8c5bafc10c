use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform placement: repeatedly draws a tile from the shrinking pool of
/// unchosen tiles, so no tile is picked twice.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator<R = SmallRng> {
    rng: R,
}

impl<R: Rng> RandomMineGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomMineGenerator<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> MineGenerator for RandomMineGenerator<R> {
    fn generate(&mut self, config: GameConfig) -> MineLayout {
        let (rows, columns) = config.size();
        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut unchosen: Vec<usize> = (0..usize::from(config.total_tiles())).collect();

        let mut mines_placed: CellCount = 0;
        while mines_placed < config.mines() && !unchosen.is_empty() {
            let pick = self.rng.gen_range(0..unchosen.len());
            let index = unchosen.swap_remove(pick);
            let columns = usize::from(columns);
            mine_mask[(index / columns, index % columns)] = true;
            mines_placed += 1;
        }

        if mines_placed != config.mines() {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                mines_placed,
                config.mines()
            );
        }
        log::trace!("Placed {mines_placed} mines on a {rows}x{columns} board");

        MineLayout {
            mine_mask,
            mine_count: mines_placed,
        }
    }
}
