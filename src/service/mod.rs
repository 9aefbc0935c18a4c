//! CrudService and request validation over a resource definition.

mod crud;
mod validation;
pub use crud::CrudService;
pub use validation::RequestValidator;
