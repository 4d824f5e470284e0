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

//! A single quadtree cell.

use crate::geometry::Rectangle;
use crate::lock::RwLock;
use crate::predicate::Placement;

/// The mutable part of a [`Node`], guarded by its reader/writer lock.
struct NodeData<T> {
    elements: Vec<T>,
    children: Option<Box<[Node<T>; 4]>>,
}

/// A quadtree cell: an immutable bound plus lock-guarded elements and
/// children.
///
/// Children, when present, always exist in groups of four (NW, NE, SW,
/// SE) — a node is never partially subdivided, and leaves are never
/// reconstituted once subdivided.
pub(crate) struct Node<T> {
    bound: Rectangle,
    data: RwLock<NodeData<T>>,
}

impl<T> Node<T> {
    pub(crate) fn new(bound: Rectangle) -> Self {
        Self {
            bound,
            data: RwLock::new(NodeData {
                elements: Vec::new(),
                children: None,
            }),
        }
    }

    pub(crate) fn bound(&self) -> Rectangle {
        self.bound
    }

    fn subdivide(&self) -> Box<[Node<T>; 4]> {
        tracing::trace!(
            cx = self.bound.cx(),
            cy = self.bound.cy(),
            "subdividing node"
        );
        let [nw, ne, sw, se] = self.bound.quadrants();
        Box::new([Node::new(nw), Node::new(ne), Node::new(sw), Node::new(se)])
    }

    /// Attempts to place `element` in this subtree. Returns `false` only
    /// when the predicate rejects `element` outright for this node's bound
    /// (the normal "wrong subtree" case); a fully-subdivided node whose
    /// four children *all* reject an element that passed the parent's
    /// predicate check is a predicate/partition mismatch, and the element
    /// is silently dropped, matching the reference.
    pub(crate) fn insert(&self, element: T, predicate: &dyn Placement<T>, max_cap: u16) -> bool
    where
        T: Clone,
    {
        if !predicate.accepts(&element, &self.bound) {
            return false;
        }

        enum Step<T> {
            Added,
            Recurse(T),
        }

        let step = {
            let mut data = self.data.write();
            if data.elements.len() < max_cap as usize {
                data.elements.push(element);
                Step::Added
            } else {
                if data.children.is_none() {
                    data.children = Some(self.subdivide());
                }
                Step::Recurse(element)
            }
        };

        match step {
            Step::Added => true,
            Step::Recurse(element) => {
                let data = self.data.read();
                let children = data
                    .children
                    .as_ref()
                    .expect("children were just populated above");
                for child in children.iter() {
                    if child.insert(element.clone(), predicate, max_cap) {
                        return true;
                    }
                }
                tracing::warn!(
                    cx = self.bound.cx(),
                    cy = self.bound.cy(),
                    "element accepted by node but rejected by all four children; dropped"
                );
                false
            }
        }
    }

    /// Removes the first element equal to `element`, depth-first, NW, NE,
    /// SW, SE.
    pub(crate) fn remove(&self, element: &T) -> Option<T>
    where
        T: PartialEq,
    {
        {
            let mut data = self.data.write();
            if let Some(idx) = data.elements.iter().position(|e| e == element) {
                return Some(data.elements.remove(idx));
            }
        }
        let data = self.data.read();
        if let Some(children) = data.children.as_ref() {
            for child in children.iter() {
                if let Some(found) = child.remove(element) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Appends every element in this subtree that intersects `range` and
    /// satisfies `predicate` against it.
    pub(crate) fn query(&self, range: &Rectangle, predicate: &dyn Placement<T>, out: &mut Vec<T>)
    where
        T: Clone,
    {
        if !self.bound.intersects(range) {
            return;
        }
        let data = self.data.read();
        for element in &data.elements {
            if predicate.accepts(element, range) {
                out.push(element.clone());
            }
        }
        if let Some(children) = data.children.as_ref() {
            for child in children.iter() {
                child.query(range, predicate, out);
            }
        }
    }
}
