//! Registry of content-resolution modules.
//!
//! Modules are published by repositories, and module IDs are only unique
//! within their repository, so the registry keys each loaded module by its
//! [`RepoModuleId`](reel_models::RepoModuleId). The registry never executes
//! anything itself: it finds the [`Resolver`] for a key and forwards the
//! request to it.

pub mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod registry;
mod resolver;

#[cfg(any(test, feature = "mock"))]
pub use crate::mock::MockResolver;
pub use crate::registry::ModuleRegistry;
pub use crate::resolver::{Resolver, ResolverHandle};
