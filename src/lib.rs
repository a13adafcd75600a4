//! # OOP Polymorphism Patterns in Rust
//!
//! This crate reworks the classic classroom OOP exercise — a superhero
//! class hierarchy and a "vehicles in action" polymorphism challenge —
//! into idiomatic Rust:
//!
//! ## Pattern 1: Base-class state as composition
//! - Shared attributes live in a core struct embedded by every variant
//! - Private fields with accessor methods in place of name mangling
//!
//! ## Pattern 2: Shared behavior as default trait methods
//! - `introduce`, `complete_mission`, `stop` written once on the trait
//! - Variants override only the designated polymorphic operation
//!
//! ## Pattern 3: Trait objects and heterogeneous collections
//! - `Vec<Box<dyn Hero>>` / `&mut dyn Vehicle` in place of subclass lists
//!
//! ## Pattern 4: Explicit shared state
//! - The class-level hero counter becomes a [`heroes::HeroRegistry`]
//!   passed to every constructor, atomic so it stays correct off the
//!   main thread
//!
//! ## Pattern 5: Tagged-union dispatch
//! - The original's `hasattr` capability probe becomes the
//!   [`dispatch::Entity`] enum over the two hierarchies
//!
//! Run the demo with: `cargo run --bin oop_demo`

pub mod dispatch;
pub mod heroes;
pub mod vehicles;
