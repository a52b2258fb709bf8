//! Catalog store: product persistence and application wiring.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;
