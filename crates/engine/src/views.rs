//! Mapping from owned domain state to wire DTOs.

use wyrdgrid_domain::{BodyParts, GameState, Item, Player, Tile};
use wyrdgrid_protocol::{BodyPartsDto, GameStateDto, ItemDto, PlayerDto, TileDto};

/// Build the full snapshot broadcast after every state change.
pub fn state_to_dto(state: &GameState) -> GameStateDto {
    GameStateDto {
        grid: state
            .grid
            .tiles
            .iter()
            .map(|row| row.iter().map(tile_to_dto).collect())
            .collect(),
        players: state
            .players
            .iter()
            .map(|(id, player)| (id.as_str().to_string(), player_to_dto(player)))
            .collect(),
        event_log: state.events.lines(),
        turn: state.turn,
    }
}

fn tile_to_dto(tile: &Tile) -> TileDto {
    TileDto {
        kind: tile.kind.as_str().to_string(),
        svg: tile.svg.clone(),
        entities: tile.occupants.iter().map(|o| o.as_str().to_string()).collect(),
        items: tile.items.iter().map(item_to_dto).collect(),
    }
}

fn item_to_dto(item: &Item) -> ItemDto {
    ItemDto {
        name: item.name.clone(),
        description: item.description.clone(),
        svg: item.svg.clone(),
    }
}

fn body_parts_to_dto(parts: &BodyParts) -> BodyPartsDto {
    BodyPartsDto {
        hands: parts.hands.as_ref().map(item_to_dto),
        feet: parts.feet.as_ref().map(item_to_dto),
        body: parts.body.as_ref().map(item_to_dto),
    }
}

fn player_to_dto(player: &Player) -> PlayerDto {
    PlayerDto {
        id: player.id.as_str().to_string(),
        name: player.name.clone(),
        position: (player.position.x, player.position.y),
        body_parts: body_parts_to_dto(&player.body_parts),
        inventory: player.inventory.iter().map(item_to_dto).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wyrdgrid_domain::{PlayerId, TileKind, WorldGrid};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn snapshot_carries_players_grid_and_log() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = WorldGrid::generate(4, 4, &mut rng, |d| format!("<svg>{d}</svg>"));
        let mut state = GameState::new(grid, 32);
        let id = PlayerId::new("abc123").expect("valid id");
        state.join(id.clone()).expect("joins");

        let dto = state_to_dto(&state);
        assert_eq!(dto.grid.len(), 4);
        assert!(dto.grid.iter().all(|row| row.len() == 4));

        let player = dto.players.get("abc123").expect("player present");
        assert_eq!(player.name, "Player abc12");
        assert!(dto
            .event_log
            .iter()
            .any(|l| l.contains("has joined the game.")));

        // the spawn tile lists the player as an entity
        let (x, y) = player.position;
        let tile = &dto.grid[y as usize][x as usize];
        assert!(tile.entities.contains(&"abc123".to_string()));
    }

    #[test]
    fn tile_kind_round_trips_as_lowercase_type() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = WorldGrid::generate(2, 2, &mut rng, |d| format!("<svg>{d}</svg>"));
        let state = GameState::new(grid, 8);
        let dto = state_to_dto(&state);
        let kinds = [
            TileKind::Grass.as_str(),
            TileKind::Forest.as_str(),
            TileKind::Water.as_str(),
            TileKind::Rock.as_str(),
        ];
        for row in &dto.grid {
            for tile in row {
                assert!(kinds.contains(&tile.kind.as_str()));
            }
        }
    }
}
