//! Collection-emptiness guard.

use crate::core::error::{GuardResult, ViolationKind};
use crate::core::messages;
use crate::guards::arg::Arg;
use std::any::type_name;

/// Anything whose emptiness can be observed by iterating it by reference:
/// `Vec`, arrays, maps, sets. Implemented blanket-style so user containers
/// qualify automatically.
pub trait Collection {
    /// Whether the collection holds no elements.
    fn is_empty(&self) -> bool;
}

impl<C> Collection for C
where
    for<'a> &'a C: IntoIterator,
{
    fn is_empty(&self) -> bool {
        self.into_iter().next().is_none()
    }
}

/// Validate that a collection is present and holds at least one element.
#[track_caller]
pub fn not_empty<C: Collection>(value: impl Into<Option<C>>) -> GuardResult<C> {
    Arg::new(value.into()).not_empty()
}

impl<C: Collection> Arg<Option<C>> {
    /// Rule form of [`not_empty`].
    pub fn not_empty(self) -> GuardResult<C> {
        let (value, request) = self.into_parts();
        match value {
            Some(collection) if !collection.is_empty() => Ok(collection),
            _ => Err(request.violation(
                ViolationKind::Shape,
                Some(type_name::<Option<C>>()),
                |_| messages::empty_collection(),
            )),
        }
    }
}
