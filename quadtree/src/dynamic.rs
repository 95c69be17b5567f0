//! Quadtree over moving entities.
//!
//! Shares the node arena of [`QuadTree`] and walks its parent links to
//! relocate entities. An entity whose new rect still fits its node stays
//! there; otherwise it is taken out and re-inserted through the nearest
//! ancestor that accepts it. Entity ids are unique keys here.

use crate::error::{QuadtreeError, QuadtreeResult};
use crate::quadtree::{validate_rect, Config, Entity, NodeView, QuadTree, ROOT};
use common::shapes::Rect;
use fxhash::FxHashMap;

pub struct DynamicQuadTree {
    tree: QuadTree,
    // entity id -> index of the node holding it
    owners: FxHashMap<u32, usize>,
}

impl DynamicQuadTree {
    pub fn new(bounds: Rect) -> QuadtreeResult<Self> {
        Self::new_with_config(bounds, Config::default())
    }

    pub fn new_with_config(bounds: Rect, config: Config) -> QuadtreeResult<Self> {
        Ok(Self {
            tree: QuadTree::new_with_config(bounds, config)?,
            owners: FxHashMap::default(),
        })
    }

    pub fn insert(&mut self, entity: Entity) -> bool {
        match self.try_insert(entity) {
            Ok(()) => true,
            Err(err) => {
                log::trace!("dynamic quadtree rejected entity {}: {}", entity.id, err);
                false
            }
        }
    }

    pub fn try_insert(&mut self, entity: Entity) -> QuadtreeResult<()> {
        if self.owners.contains_key(&entity.id) {
            return Err(QuadtreeError::DuplicateEntity { id: entity.id });
        }
        validate_rect(&entity.rect)?;

        let owners = &mut self.owners;
        if self
            .tree
            .insert_into(ROOT, entity, &mut |placed: &Entity, node: usize| {
                owners.insert(placed.id, node);
            })
        {
            self.tree.len += 1;
            Ok(())
        } else {
            Err(self.tree.out_of_bounds(&entity))
        }
    }

    /// Moves entity `id` to `rect`. Returns false when the entity is unknown,
    /// `rect` is degenerate, or it left the root bounds (in which case the
    /// entity is dropped from the tree).
    pub fn update(&mut self, id: u32, rect: Rect) -> bool {
        match self.try_update(id, rect) {
            Ok(()) => true,
            Err(err) => {
                log::trace!("dynamic quadtree update of entity {} failed: {}", id, err);
                false
            }
        }
    }

    pub fn try_update(&mut self, id: u32, rect: Rect) -> QuadtreeResult<()> {
        let &node_index = self
            .owners
            .get(&id)
            .ok_or(QuadtreeError::UnknownEntity { id })?;
        validate_rect(&rect)?;

        let node = &mut self.tree.nodes[node_index];
        let slot = node
            .entities
            .iter()
            .position(|entity| entity.id == id)
            .ok_or(QuadtreeError::UnknownEntity { id })?;
        if node.rect.contains(&rect) {
            node.entities[slot].rect = rect;
            return Ok(());
        }

        let entity = Entity::new(id, rect);
        node.entities.remove(slot);
        let mut ancestor = node.parent;

        let owners = &mut self.owners;
        while let Some(index) = ancestor {
            if self
                .tree
                .insert_into(index, entity, &mut |placed: &Entity, node: usize| {
                    owners.insert(placed.id, node);
                })
            {
                return Ok(());
            }
            ancestor = self.tree.nodes[index].parent;
        }

        owners.remove(&id);
        self.tree.len -= 1;
        Err(self.tree.out_of_bounds(&entity))
    }

    pub fn remove(&mut self, id: u32) -> Option<Entity> {
        let node_index = self.owners.remove(&id)?;
        let entities = &mut self.tree.nodes[node_index].entities;
        let slot = entities.iter().position(|entity| entity.id == id)?;
        self.tree.len -= 1;
        Some(entities.remove(slot))
    }

    pub fn get(&self, id: u32) -> Option<Entity> {
        let &node_index = self.owners.get(&id)?;
        self.tree.nodes[node_index]
            .entities
            .iter()
            .find(|entity| entity.id == id)
            .copied()
    }

    pub fn contains_entity(&self, id: u32) -> bool {
        self.owners.contains_key(&id)
    }

    /// Like [`QuadTree::query`], except entities whose rect equals `area` are
    /// left out, so querying with an entity's own rect does not report it.
    pub fn query(&self, area: &Rect) -> Vec<Entity> {
        let mut found = Vec::new();
        self.query_into(area, &mut found);
        found
    }

    pub fn query_into(&self, area: &Rect, found: &mut Vec<Entity>) {
        self.tree.visit(area, |entity| {
            if entity.rect != *area {
                found.push(*entity);
            }
        });
    }

    pub fn bounds(&self) -> Rect {
        self.tree.bounds()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeView<'_>> + '_ {
        self.tree.nodes()
    }

    pub fn all_entities(&self, entities: &mut Vec<Entity>) {
        self.tree.all_entities(entities);
    }
}
