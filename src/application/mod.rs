//! Application layer containing the pricing engine.
//!
//! The engine is a pure function over the domain model: no state, no IO,
//! safe to call concurrently from any number of request handlers.

pub mod engine;
