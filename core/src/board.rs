use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Active -> Won
/// - Active -> Lost
///
/// The board keeps accepting reveals after the game ends, callers stop play
/// once `is_finished` is true. `Lost` wins over `Won` if both hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Active,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Active
    }
}

fn allocate_tiles((rows, columns): Coord2) -> Array2<Tile> {
    Array2::from_shape_fn((usize::from(rows), usize::from(columns)), |(row, column)| {
        Tile::new((row as Coord, column as Coord))
    })
}

/// The grid of tiles plus everything needed to decide how the game ends.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    tiles: Array2<Tile>,
    mine_count: CellCount,
    revealed_count: CellCount,
    lost: bool,
}

impl Board {
    /// Board with uniformly random mines, freshly seeded from entropy.
    #[cfg(feature = "std")]
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::new_with(config, &mut RandomMineGenerator::from_entropy())
    }

    pub fn new_with(config: GameConfig, generator: &mut impl MineGenerator) -> Result<Self> {
        let mut board = Self {
            tiles: allocate_tiles((0, 0)),
            mine_count: 0,
            revealed_count: 0,
            lost: false,
        };
        board.reset_with(config, generator)?;
        Ok(board)
    }

    /// Starts a new game with uniformly random mines, freshly seeded from entropy.
    #[cfg(feature = "std")]
    pub fn reset(&mut self, config: GameConfig) -> Result<()> {
        self.reset_with(config, &mut RandomMineGenerator::from_entropy())
    }

    /// Starts a new game with the mines `generator` places.
    ///
    /// Tiles are cleared in place when the size is unchanged, otherwise the grid
    /// is rebuilt. On error the board is left as it was.
    pub fn reset_with(
        &mut self,
        config: GameConfig,
        generator: &mut impl MineGenerator,
    ) -> Result<()> {
        let config = GameConfig::new(config.size(), config.mines())?;
        let layout = generator.generate(config);
        if layout.size() != config.size() {
            return Err(GameError::InvalidBoardShape);
        }
        if self.size() == config.size() {
            self.tiles.iter_mut().for_each(Tile::reset);
        } else {
            self.tiles = allocate_tiles(config.size());
        }

        let mut mines_placed: CellCount = 0;
        for tile in self.tiles.iter_mut() {
            if layout.contains_mine(tile.coords()) {
                tile.set_mine(true);
                mines_placed += 1;
            }
        }
        if mines_placed != config.mines() {
            log::warn!(
                "Mine layout has {} mines, config asked for {}",
                mines_placed,
                config.mines()
            );
        }
        for coords in iter_coords(config.size()) {
            let count = self.count_surrounding_mines(coords);
            self.tiles[coords.to_nd_index()].set_surrounding_mines(count);
        }

        self.mine_count = mines_placed;
        self.revealed_count = 0;
        self.lost = false;
        log::debug!(
            "New game on a {}x{} board with {} mines",
            config.rows(),
            config.columns(),
            self.mine_count
        );
        Ok(())
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.tiles.dim();
        (rows as Coord, columns as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn columns(&self) -> Coord {
        self.size().1
    }

    pub fn total_tiles(&self) -> CellCount {
        let (rows, columns) = self.size();
        mult(rows, columns)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Non-mine tiles revealed by play since the last reset.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn tiles_left(&self) -> CellCount {
        self.total_tiles() - self.revealed_count
    }

    /// How many mines have not been flagged yet, negative when over-flagged
    pub fn mines_left(&self) -> isize {
        let flags = self
            .tiles
            .iter()
            .filter(|tile| tile.marker() == Marker::Flag)
            .count();
        (self.mine_count as isize) - (flags as isize)
    }

    /// Tile at `coords`, `None` when out of range.
    pub fn tile(&self, coords: Coord2) -> Option<&Tile> {
        self.tiles.get(coords.to_nd_index())
    }

    /// Every tile in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn grid(&self) -> &Array2<Tile> {
        &self.tiles
    }

    pub fn game_lost(&self) -> bool {
        self.lost
    }

    /// Won once every tile still hidden could be a mine; flags are not required.
    pub fn game_won(&self) -> bool {
        self.mine_count == 0 || self.tiles_left() <= self.mine_count
    }

    pub fn state(&self) -> GameState {
        if self.game_lost() {
            GameState::Lost
        } else if self.game_won() {
            GameState::Won
        } else {
            GameState::Active
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    /// Reveals a tile and floods outward through tiles with no adjacent mines.
    ///
    /// Out-of-range coordinates and revealed tiles are no-ops. Neither markers
    /// nor a finished game block the reveal here, gating that is up to the caller.
    pub fn reveal_tile(&mut self, coords: Coord2) -> RevealOutcome {
        match self.tile(coords) {
            Some(tile) if !tile.is_revealed() => {}
            _ => return RevealOutcome::NoChange,
        }

        if self.revealed_count == 0 {
            self.keep_first_reveal_safe(coords);
        }

        let size = self.size();
        let revealed_before = self.revealed_count;
        let mut hit_mine = false;
        let mut to_visit = VecDeque::from([coords]);

        while let Some(visit_coords) = to_visit.pop_front() {
            let tile = &mut self.tiles[visit_coords.to_nd_index()];
            if tile.is_revealed() {
                continue;
            }

            tile.set_marker(Marker::None);
            tile.set_revealed();
            if tile.is_mine() {
                log::debug!("Revealed mine at {:?}", visit_coords);
                self.lost = true;
                hit_mine = true;
                continue;
            }

            self.revealed_count += 1;
            if tile.surrounding_mines() == 0 {
                let tiles = &self.tiles;
                to_visit.extend(
                    neighbors(visit_coords, size)
                        .filter(|&pos| !tiles[pos.to_nd_index()].is_revealed()),
                );
            }
        }

        log::trace!(
            "Reveal at {:?} opened {} tiles",
            coords,
            self.revealed_count - revealed_before
        );

        if hit_mine {
            RevealOutcome::HitMine
        } else if self.game_won() {
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Moves a mine off the first revealed tile onto the first safe tile in
    /// row-major order. A board with no safe tile is left alone.
    fn keep_first_reveal_safe(&mut self, coords: Coord2) {
        if !self.tiles[coords.to_nd_index()].is_mine() {
            return;
        }

        let target = iter_coords(self.size())
            .find(|&pos| pos != coords && !self.tiles[pos.to_nd_index()].is_mine());

        match target {
            Some(target) => {
                log::debug!("Moving first-reveal mine from {:?} to {:?}", coords, target);
                self.move_mine(coords, target);
            }
            None => log::debug!("No safe tile to move the first-reveal mine to"),
        }
    }

    /// Patches neighbor counts around both tiles instead of recounting the board.
    fn move_mine(&mut self, from: Coord2, to: Coord2) {
        let size = self.size();
        self.tiles[from.to_nd_index()].set_mine(false);
        for pos in neighbors(from, size) {
            self.tiles[pos.to_nd_index()].remove_surrounding_mine();
        }

        self.tiles[to.to_nd_index()].set_mine(true);
        for pos in neighbors(to, size) {
            self.tiles[pos.to_nd_index()].add_surrounding_mine();
        }
    }

    /// Shows every tile for the end-of-game display.
    ///
    /// Flags on safe tiles become [`Marker::FalseFlag`], flags on mines stay,
    /// everything else loses its marker. Leaves `revealed_count` untouched.
    pub fn reveal_all_tiles(&mut self) {
        for tile in self.tiles.iter_mut() {
            tile.set_revealed();
            let marker = match tile.marker() {
                Marker::Flag if !tile.is_mine() => Marker::FalseFlag,
                marker @ (Marker::Flag | Marker::FalseFlag) => marker,
                Marker::None | Marker::QuestionMark => Marker::None,
            };
            tile.set_marker(marker);
        }
    }

    /// Puts a player marker on a hidden tile.
    pub fn set_marker(&mut self, coords: Coord2, marker: Marker) -> Result<MarkOutcome> {
        if !marker.is_player_marker() {
            return Err(GameError::ReservedMarker);
        }
        let coords = self.validate_coords(coords)?;
        self.check_active()?;

        let tile = &mut self.tiles[coords.to_nd_index()];
        if tile.is_revealed() || tile.marker() == marker {
            return Ok(MarkOutcome::NoChange);
        }

        tile.set_marker(marker);
        Ok(MarkOutcome::Changed)
    }

    /// Steps a hidden tile's marker through `None -> Flag -> QuestionMark -> None`.
    pub fn cycle_marker(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        let next = self.tiles[coords.to_nd_index()].marker().cycled();
        self.set_marker(coords, next)
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    fn check_active(&self) -> Result<()> {
        if self.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn count_surrounding_mines(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        neighbors(coords, self.size())
            .filter(|&pos| self.tiles[pos.to_nd_index()].is_mine())
            .count() as u8
    }
}
