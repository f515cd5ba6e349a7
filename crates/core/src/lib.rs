//! Domain layer for the Marquee movie catalog.
//!
//! Holds everything that does not depend on HTTP or SQL: the `Movie`
//! entity and its request shapes, the error taxonomy, the field validator,
//! the genre blob adapter and the [`store::MovieStore`] contract.

pub mod error;
pub mod genre;
pub mod movie;
pub mod store;
pub mod types;
pub mod validation;
