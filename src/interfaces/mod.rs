//! Transport adapters exposing the engine to the outside world.

pub mod http;
