//! Fire control: the vessel's current fire direction and fire commands.

use broadside_core::components::EntityId;
use broadside_core::config::GameConfig;
use broadside_core::enums::FireDirection;
use broadside_core::types::Position;

use crate::registry::Registry;
use crate::world_setup;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FireController {
    direction: FireDirection,
}

impl FireController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self) -> FireDirection {
        self.direction
    }

    /// Back to the session default (right).
    pub fn reset(&mut self) {
        self.direction = FireDirection::default();
    }

    pub fn toggle_vertical(&mut self) -> FireDirection {
        self.direction = self.direction.toggle_vertical();
        self.direction
    }

    pub fn toggle_horizontal(&mut self) -> FireDirection {
        self.direction = self.direction.toggle_horizontal();
        self.direction
    }

    /// Create one player projectile at the vessel position. No cooldown.
    pub fn fire(
        &self,
        registry: &mut Registry,
        vessel_position: Position,
        config: &GameConfig,
    ) -> EntityId {
        world_setup::spawn_player_projectile(registry, vessel_position, self.direction, config)
    }
}
