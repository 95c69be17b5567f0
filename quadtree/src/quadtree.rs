//! Capacity-bounded, lazily subdivided quadtree over static world geometry.
//!
//! Nodes live in a flat arena and reference their four children by index.
//! The tree is built once (walls, props) and then only queried; there is no
//! removal or relocation.

use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::{Rect, Vector2};

mod config;

pub use config::Config;

pub(crate) const ROOT: usize = 0;

/// Opaque caller-assigned handle plus its bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub id: u32,
    pub rect: Rect,
}

impl Entity {
    pub fn new(id: u32, rect: Rect) -> Self {
        Self { id, rect }
    }
}

pub(crate) struct QuadNode {
    pub(crate) rect: Rect,
    pub(crate) parent: Option<usize>,
    // top-left, top-right, bottom-left, bottom-right
    children: Option<[usize; 4]>,
    pub(crate) entities: Vec<Entity>,
    depth: usize,
}

impl QuadNode {
    fn new(rect: Rect, parent: Option<usize>, depth: usize) -> Self {
        Self {
            rect,
            parent,
            children: None,
            entities: Vec::new(),
            depth,
        }
    }

    fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// Read-only view of one node, for debug overlays and invariant checks.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a> {
    pub rect: Rect,
    pub depth: usize,
    pub is_leaf: bool,
    pub entities: &'a [Entity],
}

pub struct QuadTree {
    pub(crate) nodes: Vec<QuadNode>,
    node_capacity: usize,
    max_depth: usize,
    pub(crate) len: usize,
}

impl QuadTree {
    pub fn new(bounds: Rect) -> QuadtreeResult<Self> {
        Self::new_with_config(bounds, Config::default())
    }

    pub fn new_with_config(bounds: Rect, config: Config) -> QuadtreeResult<Self> {
        validate_rect(&bounds)?;
        Ok(Self {
            nodes: vec![QuadNode::new(bounds, None, 0)],
            node_capacity: config.node_capacity.max(1),
            max_depth: config.max_depth,
            len: 0,
        })
    }

    /// Inserts `entity` at the shallowest node that fully contains it.
    ///
    /// Returns false, leaving the tree untouched, when the entity is not fully
    /// inside the root bounds or its rect is degenerate.
    pub fn insert(&mut self, entity: Entity) -> bool {
        match self.try_insert(entity) {
            Ok(()) => true,
            Err(err) => {
                log::trace!("quadtree rejected entity {}: {}", entity.id, err);
                false
            }
        }
    }

    pub fn try_insert(&mut self, entity: Entity) -> QuadtreeResult<()> {
        validate_rect(&entity.rect)?;
        if self.insert_into(ROOT, entity, &mut |_: &Entity, _: usize| {}) {
            self.len += 1;
            Ok(())
        } else {
            Err(self.out_of_bounds(&entity))
        }
    }

    pub(crate) fn out_of_bounds(&self, entity: &Entity) -> QuadtreeError {
        let bounds = self.bounds();
        QuadtreeError::EntityOutOfBounds {
            id: entity.id,
            min_x: entity.rect.left(),
            min_y: entity.rect.top(),
            max_x: entity.rect.right(),
            max_y: entity.rect.bottom(),
            bounds_min_x: bounds.left(),
            bounds_min_y: bounds.top(),
            bounds_max_x: bounds.right(),
            bounds_max_y: bounds.bottom(),
        }
    }

    /// Places `entity` in the subtree rooted at `node_index`. `placed` is told
    /// the node of every entity stored or moved along the way, including the
    /// ones redistributed by a subdivision.
    pub(crate) fn insert_into<P: FnMut(&Entity, usize)>(
        &mut self,
        node_index: usize,
        entity: Entity,
        placed: &mut P,
    ) -> bool {
        let node = &self.nodes[node_index];
        if !node.rect.contains(&entity.rect) {
            return false;
        }

        if node.is_leaf() {
            // Leaves at max depth never split so coincident entities cannot recurse forever.
            if node.entities.len() < self.node_capacity || node.depth >= self.max_depth {
                self.nodes[node_index].entities.push(entity);
                placed(&entity, node_index);
                return true;
            }
            self.subdivide(node_index, placed);
        }

        if let Some(children) = self.nodes[node_index].children {
            for child in children {
                if self.insert_into(child, entity, placed) {
                    return true;
                }
            }
        }

        // Straddles a quadrant boundary: keep it on this branch.
        self.nodes[node_index].entities.push(entity);
        placed(&entity, node_index);
        true
    }

    fn subdivide<P: FnMut(&Entity, usize)>(&mut self, node_index: usize, placed: &mut P) {
        let rect = self.nodes[node_index].rect;
        let depth = self.nodes[node_index].depth + 1;

        let first = self.nodes.len();
        for quadrant in quadrants(&rect) {
            self.nodes.push(QuadNode::new(quadrant, Some(node_index), depth));
        }
        let children = [first, first + 1, first + 2, first + 3];

        let held = {
            let node = &mut self.nodes[node_index];
            node.children = Some(children);
            std::mem::take(&mut node.entities)
        };

        let mut remains = Vec::new();
        for entity in held {
            if !children
                .iter()
                .any(|&child| self.insert_into(child, entity, placed))
            {
                remains.push(entity);
            }
        }

        log::debug!(
            "quadtree node {} subdivided at depth {} ({} entities kept on branch)",
            node_index,
            depth - 1,
            remains.len()
        );
        for entity in &remains {
            placed(entity, node_index);
        }
        self.nodes[node_index].entities = remains;
    }

    pub fn query(&self, area: &Rect) -> Vec<Entity> {
        let mut found = Vec::new();
        self.query_into(area, &mut found);
        found
    }

    /// Appends every entity whose rect intersects `area` to `found`.
    /// Node-local entities come before those of descendants.
    pub fn query_into(&self, area: &Rect, found: &mut Vec<Entity>) {
        self.visit(area, |entity| found.push(*entity));
    }

    /// Calls `f` for every entity whose rect intersects `area`, in query order.
    pub fn visit<F: FnMut(&Entity)>(&self, area: &Rect, mut f: F) {
        self.visit_from(ROOT, area, &mut f);
    }

    fn visit_from<F: FnMut(&Entity)>(&self, node_index: usize, area: &Rect, f: &mut F) {
        let node = &self.nodes[node_index];
        if !node.rect.intersects(area) {
            return;
        }

        for entity in &node.entities {
            if entity.rect.intersects(area) {
                f(entity);
            }
        }

        if let Some(children) = node.children {
            for child in children {
                self.visit_from(child, area, f);
            }
        }
    }

    pub fn bounds(&self) -> Rect {
        self.nodes[ROOT].rect
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }

    pub fn node_capacity(&self) -> usize {
        self.node_capacity
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeView<'_>> + '_ {
        self.nodes.iter().map(|node| NodeView {
            rect: node.rect,
            depth: node.depth,
            is_leaf: node.is_leaf(),
            entities: &node.entities,
        })
    }

    pub fn all_node_rects(&self, rects: &mut Vec<Rect>) {
        rects.extend(self.nodes.iter().map(|node| node.rect));
    }

    pub fn all_entities(&self, entities: &mut Vec<Entity>) {
        for node in &self.nodes {
            entities.extend_from_slice(&node.entities);
        }
    }
}

fn quadrants(rect: &Rect) -> [Rect; 4] {
    let half = rect.extents * 0.5;
    [
        Rect::new(rect.pos, half),
        Rect::new(rect.pos + Vector2::new(half.x, 0.0), half),
        Rect::new(rect.pos + Vector2::new(0.0, half.y), half),
        Rect::new(rect.pos + half, half),
    ]
}

pub(crate) fn validate_rect(rect: &Rect) -> QuadtreeResult<()> {
    if rect.is_valid() {
        Ok(())
    } else {
        Err(QuadtreeError::InvalidRectangleDims {
            width: rect.width(),
            height: rect.height(),
        })
    }
}
