//! The tile grid and movement rules.
//!
//! The world is a fixed rectangular grid. Tiles carry their kind, the art
//! for that kind, the players standing on them, and any loose items.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::PlayerId;
use crate::item::Item;

/// A coordinate on the grid. `(0, 0)` is the north-west corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Compass direction for a single-tile step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }

    /// Offset applied to a position when stepping this way.
    pub fn delta(&self) -> (i64, i64) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Self::North),
            "south" | "s" => Ok(Self::South),
            "east" | "e" => Ok(Self::East),
            "west" | "w" => Ok(Self::West),
            other => Err(DomainError::parse(format!("Unknown direction: {other}"))),
        }
    }
}

/// Terrain type of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    Grass,
    Forest,
    Water,
    Rock,
}

impl TileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grass => "grass",
            Self::Forest => "forest",
            Self::Water => "water",
            Self::Rock => "rock",
        }
    }

    /// Whether players may stand on this terrain.
    pub fn is_passable(&self) -> bool {
        matches!(self, Self::Grass | Self::Forest)
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cell of the world grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub svg: String,
    pub occupants: Vec<PlayerId>,
    pub items: Vec<Item>,
}

impl Tile {
    pub fn new(kind: TileKind, svg: impl Into<String>) -> Self {
        Self {
            kind,
            svg: svg.into(),
            occupants: Vec::new(),
            items: Vec::new(),
        }
    }
}

/// Starter gear scattered across the world at generation time.
const STARTER_ITEMS: &[(&str, &str)] = &[
    ("rusty sword", "A notched old blade, more tetanus than threat."),
    ("leather boots", "Scuffed but serviceable walking boots."),
    ("oak staff", "A knotted walking staff, taller than most players."),
    ("woven cloak", "A drab cloak that smells faintly of campfires."),
];

/// Rectangular grid of tiles, indexed `tiles[y][x]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldGrid {
    pub width: u32,
    pub height: u32,
    pub tiles: Vec<Vec<Tile>>,
}

impl WorldGrid {
    /// Generate a world from the given RNG. `svg_for` supplies the art
    /// for a terrain or item description; passing the SVG source in as a
    /// closure keeps the domain free of engine types.
    ///
    /// The north-west corner is forced passable so there is always
    /// somewhere to spawn.
    pub fn generate<R, F>(width: u32, height: u32, rng: &mut R, mut svg_for: F) -> Self
    where
        R: Rng,
        F: FnMut(&str) -> String,
    {
        let width = width.max(1);
        let height = height.max(1);

        let mut tiles = Vec::with_capacity(height as usize);
        for y in 0..height {
            let mut row = Vec::with_capacity(width as usize);
            for x in 0..width {
                let kind = if x == 0 && y == 0 {
                    TileKind::Grass
                } else {
                    roll_kind(rng)
                };
                row.push(Tile::new(kind, svg_for(kind.as_str())));
            }
            tiles.push(row);
        }

        let mut grid = Self {
            width,
            height,
            tiles,
        };

        for (name, description) in STARTER_ITEMS {
            // A handful of tries is plenty; worlds are mostly passable.
            for _ in 0..16 {
                let pos = GridPos::new(rng.gen_range(0..width), rng.gen_range(0..height));
                let passable = grid
                    .tile(pos)
                    .map(|t| t.kind.is_passable())
                    .unwrap_or(false);
                if passable {
                    let item = Item::new(*name, *description, svg_for(name));
                    if let Some(tile) = grid.tile_mut(pos) {
                        tile.items.push(item);
                    }
                    break;
                }
            }
        }

        grid
    }

    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn tile(&self, pos: GridPos) -> Option<&Tile> {
        self.tiles
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
    }

    pub fn tile_mut(&mut self, pos: GridPos) -> Option<&mut Tile> {
        self.tiles
            .get_mut(pos.y as usize)
            .and_then(|row| row.get_mut(pos.x as usize))
    }

    /// Resolve a one-tile step, checking bounds only. Passability is
    /// checked when the move is applied.
    pub fn step(&self, from: GridPos, dir: Direction) -> Result<GridPos, DomainError> {
        let (dx, dy) = dir.delta();
        let x = from.x as i64 + dx;
        let y = from.y as i64 + dy;
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return Err(DomainError::OutOfBounds { x, y });
        }
        Ok(GridPos::new(x as u32, y as u32))
    }

    /// First passable tile in row-major order. Players may share a tile.
    pub fn spawn_position(&self) -> Option<GridPos> {
        for (y, row) in self.tiles.iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                if tile.kind.is_passable() {
                    return Some(GridPos::new(x as u32, y as u32));
                }
            }
        }
        None
    }

    pub fn place_occupant(&mut self, pos: GridPos, id: PlayerId) {
        if let Some(tile) = self.tile_mut(pos) {
            if !tile.occupants.contains(&id) {
                tile.occupants.push(id);
            }
        }
    }

    /// Remove a player from whichever tile holds them.
    pub fn remove_occupant(&mut self, id: &PlayerId) -> Option<GridPos> {
        for (y, row) in self.tiles.iter_mut().enumerate() {
            for (x, tile) in row.iter_mut().enumerate() {
                if let Some(idx) = tile.occupants.iter().position(|o| o == id) {
                    tile.occupants.remove(idx);
                    return Some(GridPos::new(x as u32, y as u32));
                }
            }
        }
        None
    }

    /// Move a player between tiles, enforcing bounds and passability.
    pub fn move_occupant(
        &mut self,
        id: &PlayerId,
        from: GridPos,
        to: GridPos,
    ) -> Result<(), DomainError> {
        let target = self.tile(to).ok_or(DomainError::OutOfBounds {
            x: to.x as i64,
            y: to.y as i64,
        })?;
        if !target.kind.is_passable() {
            return Err(DomainError::Impassable {
                kind: target.kind.as_str(),
                x: to.x,
                y: to.y,
            });
        }
        if let Some(tile) = self.tile_mut(from) {
            tile.occupants.retain(|o| o != id);
        }
        self.place_occupant(to, id.clone());
        Ok(())
    }

    /// Take a named item off a tile, matching case-insensitively.
    pub fn take_item(&mut self, pos: GridPos, name: &str) -> Option<Item> {
        let tile = self.tile_mut(pos)?;
        let idx = tile
            .items
            .iter()
            .position(|i| i.name.eq_ignore_ascii_case(name))?;
        Some(tile.items.remove(idx))
    }

    pub fn drop_item(&mut self, pos: GridPos, item: Item) {
        if let Some(tile) = self.tile_mut(pos) {
            tile.items.push(item);
        }
    }
}

fn roll_kind<R: Rng>(rng: &mut R) -> TileKind {
    match rng.gen_range(0..100u32) {
        0..=69 => TileKind::Grass,
        70..=84 => TileKind::Forest,
        85..=92 => TileKind::Water,
        _ => TileKind::Rock,
    }
}
