//! Entity registry: owns every live entity and its identity.
//!
//! Wraps a hecs `World` and hands out `EntityId`s from a monotonic counter.
//! Iteration is always in id order, which is insertion order. Removal
//! despawns immediately, so a removed entity cannot show up in any later
//! pass of the same tick.

use std::collections::BTreeMap;

use hecs::{Component, DynamicBundle, Entity, EntityBuilder, World};

use broadside_core::components::{Collider, EntityId, EnemyState};
use broadside_core::enums::EntityKind;
use broadside_core::types::{Position, Velocity};

/// Copy of the components every entity carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Position,
    pub velocity: Velocity,
    pub collider: Collider,
}

#[derive(Default)]
pub struct Registry {
    world: World,
    index: BTreeMap<EntityId, Entity>,
    next_id: u32,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity with the base component set.
    pub fn add(
        &mut self,
        kind: EntityKind,
        position: Position,
        velocity: Velocity,
        collider: Collider,
    ) -> EntityId {
        let mut builder = EntityBuilder::new();
        builder.add(kind).add(position).add(velocity).add(collider);
        self.spawn(builder)
    }

    /// Add an entity with the base component set plus extra components.
    pub fn add_with(
        &mut self,
        kind: EntityKind,
        position: Position,
        velocity: Velocity,
        collider: Collider,
        extra: impl DynamicBundle,
    ) -> EntityId {
        let mut builder = EntityBuilder::new();
        builder.add(kind).add(position).add(velocity).add(collider);
        builder.add_bundle(extra);
        self.spawn(builder)
    }

    fn spawn(&mut self, mut builder: EntityBuilder) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        builder.add(id);
        let entity = self.world.spawn(builder.build());
        self.index.insert(id, entity);
        id
    }

    /// Remove an entity. Returns false if it was already gone.
    pub fn remove(&mut self, id: EntityId) -> bool {
        match self.index.remove(&id) {
            Some(entity) => self.world.despawn(entity).is_ok(),
            None => false,
        }
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index.contains_key(&id)
    }

    /// Copy a component out of an entity.
    pub fn get<T: Component + Copy>(&self, id: EntityId) -> Option<T> {
        let entity = *self.index.get(&id)?;
        self.world.get::<&T>(entity).ok().map(|c| *c)
    }

    /// Mutate a component in place. `None` if the entity or component is missing.
    pub fn update<T: Component, R>(&mut self, id: EntityId, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let entity = *self.index.get(&id)?;
        let mut component = self.world.get::<&mut T>(entity).ok()?;
        Some(f(&mut component))
    }

    pub fn body(&self, id: EntityId) -> Option<Body> {
        Some(Body {
            id,
            kind: self.get::<EntityKind>(id)?,
            position: self.get::<Position>(id)?,
            velocity: self.get::<Velocity>(id)?,
            collider: self.get::<Collider>(id)?,
        })
    }

    /// All live bodies of one category, in insertion order.
    pub fn bodies(&self, kind: EntityKind) -> Vec<Body> {
        let mut bodies: Vec<Body> = self
            .world
            .query::<(&EntityId, &EntityKind, &Position, &Velocity, &Collider)>()
            .iter()
            .filter(|(_, (_, k, _, _, _))| **k == kind)
            .map(|(_, (id, k, pos, vel, collider))| Body {
                id: *id,
                kind: *k,
                position: *pos,
                velocity: *vel,
                collider: *collider,
            })
            .collect();
        bodies.sort_by_key(|b| b.id);
        bodies
    }

    /// Visit every live entity of one category, in insertion order.
    pub fn for_each(&self, kind: EntityKind, mut f: impl FnMut(&Body)) {
        for body in self.bodies(kind) {
            f(&body);
        }
    }

    /// Every live entity as (id, kind, position, enemy state), in insertion order.
    pub fn entries(&self) -> Vec<(EntityId, EntityKind, Position, Option<EnemyState>)> {
        let mut entries: Vec<_> = self
            .world
            .query::<(&EntityId, &EntityKind, &Position, Option<&EnemyState>)>()
            .iter()
            .map(|(_, (id, kind, pos, enemy))| (*id, *kind, *pos, enemy.copied()))
            .collect();
        entries.sort_by_key(|e| e.0);
        entries
    }

    /// The player's vessel, if one is alive.
    pub fn vessel(&self) -> Option<Body> {
        self.bodies(EntityKind::Vessel).into_iter().next()
    }

    /// Drop every transient entity (everything except the vessel).
    pub fn clear(&mut self) {
        let transient: Vec<EntityId> = self
            .world
            .query::<(&EntityId, &EntityKind)>()
            .iter()
            .filter(|(_, (_, kind))| kind.is_transient())
            .map(|(_, (id, _))| *id)
            .collect();
        for id in transient {
            self.remove(id);
        }
    }

    /// Drop everything, vessel included.
    pub fn reset(&mut self) {
        self.world.clear();
        self.index.clear();
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.world
            .query::<&EntityKind>()
            .iter()
            .filter(|(_, k)| **k == kind)
            .count()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Systems that only touch component data (never spawn or despawn)
    /// may borrow the world mutably.
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
