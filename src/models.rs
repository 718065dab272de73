//! Public Twine models.
//!
//! Models adapt the property data in [`crate::support`] to the
//! [`twine_core::Model`] interface so solvers and observers can drive them.
//!
//! # Organization
//!
//! Models are grouped into domain-specific submodules (currently `thermal`).
//! Each [`twine_core::Model`] implementation is a thin adapter that delegates
//! to the data types it wraps.

pub mod thermal;
