// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The root-owning quadtree container.

use std::sync::atomic::{AtomicU16, Ordering};

use crate::error::QuadtreeError;
use crate::geometry::Rectangle;
use crate::lock::RwLock;
use crate::node::Node;
use crate::predicate::Placement;
use crate::query::QueryResult;

const DEFAULT_MAX_CAP: u16 = 4;

/// A point-quadtree spatial index over elements of type `T`.
///
/// `Tree` owns the root node and a placement predicate; it never owns or
/// frees the element payloads themselves, only the opaque handles of type
/// `T` the caller hands it.
///
/// ## Concurrency
///
/// `insert`, `remove`, and `find_in_area` all take a shared (read) lock at
/// the tree level and run concurrently with each other; fine-grained
/// exclusion happens per-node as each descends. `clear` takes an exclusive
/// (write) lock at the tree level and waits for every in-flight operation
/// to drain before swapping in a fresh root. See the crate-level docs and
/// `src/lock.rs` for why this collapses the reference's signed
/// write-intent counters into a plain reader/writer lock.
pub struct Tree<T> {
    root: RwLock<Node<T>>,
    predicate: Box<dyn Placement<T>>,
    max_cap: AtomicU16,
}

impl<T> Tree<T> {
    /// Builds a tree covering `[origin_x, origin_x + width] x [origin_y,
    /// origin_y + height]`, with a default per-node capacity of 4.
    pub fn new(
        origin_x: f64,
        origin_y: f64,
        width: f64,
        height: f64,
        predicate: impl Placement<T> + 'static,
    ) -> Result<Self, QuadtreeError> {
        let bound = Rectangle::from_origin(origin_x, origin_y, width, height)?;
        Ok(Self {
            root: RwLock::new(Node::new(bound)),
            predicate: Box::new(predicate),
            max_cap: AtomicU16::new(DEFAULT_MAX_CAP),
        })
    }

    /// Sets the per-node element capacity before a leaf subdivides.
    /// Clamped to at least 1. Does not retroactively resubdivide existing
    /// nodes.
    pub fn set_max_cap(&self, cap: u16) {
        self.max_cap.store(cap.max(1), Ordering::Relaxed);
    }

    fn max_cap(&self) -> u16 {
        self.max_cap.load(Ordering::Relaxed)
    }

    /// Inserts `element`. Silently dropped if it's outside the root bound,
    /// or (see [`Node::insert`]) in the rare case every child of a
    /// subdivided node rejects it.
    pub fn insert(&self, element: T)
    where
        T: Clone,
    {
        let root = self.root.read();
        root.insert(element, self.predicate.as_ref(), self.max_cap());
    }

    /// Removes the first element equal to `element`. A silent no-op if
    /// absent.
    pub fn remove(&self, element: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let root = self.root.read();
        root.remove(element)
    }

    /// Returns every currently-inserted element for which the placement
    /// predicate accepts the query range `[x, x + w] x [y, y + h]`.
    pub fn find_in_area(
        &self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    ) -> Result<QueryResult<T>, QuadtreeError>
    where
        T: Clone,
    {
        let range = Rectangle::from_origin(x, y, w, h)?;
        let mut out = Vec::new();
        let root = self.root.read();
        root.query(&range, self.predicate.as_ref(), &mut out);
        Ok(QueryResult::new(out))
    }

    /// Resets the tree to an empty root with the same bound. Waits for all
    /// in-flight inserts/removes/queries to drain first, and for no other
    /// `clear` to be in flight.
    pub fn clear(&self) {
        tracing::debug!("clearing tree");
        // Swap in the fresh root while holding the write guard, but drop the
        // old subtree only after releasing it, keeping the exclusive
        // critical section bounded to the swap itself.
        let old = {
            let mut root = self.root.write();
            let fresh = Node::new(root.bound());
            std::mem::replace(&mut *root, fresh)
        };
        drop(old);
    }
}
