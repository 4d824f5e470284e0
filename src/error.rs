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

//! The crate's one recoverable error: bad construction inputs.
//!
//! Every operational method (insert/remove/clear/query) is infallible, per
//! the reference's error model — there is no error channel once a tree
//! exists. Only building a [`crate::geometry::Rectangle`] or a
//! [`crate::Tree`] can fail, and only on non-finite or non-positive inputs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuadtreeError {
    #[error("invalid rectangle: {0}")]
    InvalidRectangle(String),
}
