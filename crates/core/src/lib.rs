//! Atelier domain logic.
//!
//! Pure, I/O-free building blocks of the ring configurator: the catalog
//! snapshot types, the combination resolver, the selection state machine,
//! the rendering-payload builder, the pricing resolver, and the
//! derived-name generation used by catalog writes. Persistence lives in
//! `atelier-db`, HTTP in `atelier-api`.

pub mod catalog;
pub mod combination;
pub mod error;
pub mod metal;
pub mod naming;
pub mod payload;
pub mod pricing;
pub mod selection;
pub mod types;
