//! # Model Sources
//!
//! The introspection contract: anything able to hand over the ORM's list of
//! models. Generators depend on this trait only, never on a concrete ORM runtime.

use crate::error::AppResult;
use crate::model::ModelDescriptor;

/// Interface for retrieving the data model.
///
/// Abstracted so a live ORM, a DMMF dump or an in-memory test double can
/// stand behind a generator.
pub trait ModelSource {
    /// Returns all models in declaration order.
    fn models(&self) -> AppResult<Vec<ModelDescriptor>>;
}

impl ModelSource for [ModelDescriptor] {
    fn models(&self) -> AppResult<Vec<ModelDescriptor>> {
        Ok(self.to_vec())
    }
}

impl ModelSource for Vec<ModelDescriptor> {
    fn models(&self) -> AppResult<Vec<ModelDescriptor>> {
        Ok(self.clone())
    }
}

impl<S: ModelSource + ?Sized> ModelSource for &S {
    fn models(&self) -> AppResult<Vec<ModelDescriptor>> {
        (**self).models()
    }
}

impl<S: ModelSource + ?Sized> ModelSource for Box<S> {
    fn models(&self) -> AppResult<Vec<ModelDescriptor>> {
        (**self).models()
    }
}
