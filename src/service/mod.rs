//! Wiki business rules: create-or-update, not-found detection, validation.

mod validation;
mod wiki;
pub use validation::RequestValidator;
pub use wiki::WikiService;
