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

//! The growable result buffer returned from area queries.

use std::ops::Deref;
use std::vec::IntoIter;

/// Elements found by [`crate::Tree::find_in_area`].
///
/// The reference returns a `malloc`'d `void**` array plus an out-parameter
/// count, both owned by the caller. Here that's just a `Vec<T>` — its
/// length is the count, and it's dropped (freed) the ordinary way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryResult<T>(Vec<T>);

impl<T> QueryResult<T> {
    pub(crate) fn new(elements: Vec<T>) -> Self {
        Self(elements)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for QueryResult<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> IntoIterator for QueryResult<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a QueryResult<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> std::slice::Iter<'a, T> {
        self.0.iter()
    }
}
