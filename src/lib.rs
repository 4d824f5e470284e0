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

//! A concurrent [point quadtree](https://en.wikipedia.org/wiki/Quadtree)
//! spatial index.
//!
//! Recursively partitions 2d space into four quadrants per level, storing
//! caller-owned element handles. Reads (queries) and writes (insert,
//! remove, clear) can run from multiple threads at once: a tree-level
//! reader/writer lock lets `insert`/`remove`/`find_in_area` overlap with
//! each other while `clear` waits for everyone to drain, and a per-node
//! reader/writer lock does the same at each node a descent visits.
//!
//! # Example
//! ```
//! use quadtree_core::Tree;
//!
//! // Elements are (x, y) points; the predicate is "does this point lie in
//! // the region".
//! let tree = Tree::<(f64, f64)>::new(0.0, 0.0, 100.0, 100.0, |pt: &(f64, f64), region: &quadtree_core::Rectangle| {
//!     region.contains(pt.0, pt.1)
//! }).unwrap();
//!
//! tree.insert((10.0, 10.0));
//! tree.insert((60.0, 60.0));
//!
//! let found = tree.find_in_area(50.0, 50.0, 50.0, 50.0).unwrap();
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0], (60.0, 60.0));
//!
//! tree.remove(&(60.0, 60.0));
//! assert!(tree.find_in_area(50.0, 50.0, 50.0, 50.0).unwrap().is_empty());
//! ```

pub mod error;
pub mod geometry;
pub mod predicate;
pub mod query;

mod lock;
mod node;
mod tree;

pub use error::QuadtreeError;
pub use geometry::Rectangle;
pub use predicate::Placement;
pub use query::QueryResult;
pub use tree::Tree;
