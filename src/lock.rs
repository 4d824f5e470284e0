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

//! Compile-time pluggable synchronization for tree and node content.
//!
//! The reference implementation installs a mutex vtable at runtime via
//! `qtree_set_mutex` (create/lock/unlock/destroy function pointers), with a
//! no-op default for single-threaded use. That design has two documented
//! bugs: the root node's lock is discarded right after allocation (a leak
//! once a real vtable is installed later), and re-installing the vtable
//! doesn't retire the locks it replaces.
//!
//! Rather than guard against double-install and leaks at runtime, this
//! crate removes the runtime install path entirely: the lock backend is a
//! build-time choice. With the `single-threaded` feature off (the
//! default), [`RwLock`] is `parking_lot::RwLock`. With it on, `RwLock` is a
//! zero-overhead `UnsafeCell`-based stand-in with the same API — sound only
//! because the feature is an explicit caller promise that the tree is never
//! shared across threads.

#[cfg(not(feature = "single-threaded"))]
pub(crate) use concurrent::RwLock;

#[cfg(feature = "single-threaded")]
pub(crate) use single_threaded::RwLock;

#[cfg(not(feature = "single-threaded"))]
mod concurrent {
    pub(crate) type RwLock<V> = parking_lot::RwLock<V>;
}

#[cfg(feature = "single-threaded")]
mod single_threaded {
    use std::cell::UnsafeCell;
    use std::ops::{Deref, DerefMut};

    /// A `RwLock`-shaped wrapper with no synchronization at all.
    ///
    /// Safe only because `single-threaded` is an explicit opt-in: the
    /// caller is promising no two threads will ever touch the same tree.
    pub(crate) struct RwLock<V> {
        inner: UnsafeCell<V>,
    }

    // SAFETY: soundness here rests entirely on the caller's single-threaded
    // promise (the `single-threaded` feature), not on anything this type
    // enforces.
    unsafe impl<V> Sync for RwLock<V> {}

    impl<V> RwLock<V> {
        pub(crate) fn new(value: V) -> Self {
            Self {
                inner: UnsafeCell::new(value),
            }
        }

        pub(crate) fn read(&self) -> ReadGuard<'_, V> {
            ReadGuard(unsafe { &*self.inner.get() })
        }

        pub(crate) fn write(&self) -> WriteGuard<'_, V> {
            WriteGuard(unsafe { &mut *self.inner.get() })
        }
    }

    pub(crate) struct ReadGuard<'a, V>(&'a V);

    impl<'a, V> Deref for ReadGuard<'a, V> {
        type Target = V;
        fn deref(&self) -> &V {
            self.0
        }
    }

    pub(crate) struct WriteGuard<'a, V>(&'a mut V);

    impl<'a, V> Deref for WriteGuard<'a, V> {
        type Target = V;
        fn deref(&self) -> &V {
            self.0
        }
    }

    impl<'a, V> DerefMut for WriteGuard<'a, V> {
        fn deref_mut(&mut self) -> &mut V {
            self.0
        }
    }
}
