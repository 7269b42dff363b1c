//! Scrabble Rack
//!
//! A single-player tile rack word game: draw a hand of letter tiles, spell
//! words from it, score them by letter values, refill, repeat.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use scrabble_rack::core::TileCatalog;
//! use scrabble_rack::game::{HAND_SIZE, Hand, HandManager};
//!
//! let catalog = TileCatalog::standard();
//! let mut manager = HandManager::new(&catalog, StdRng::seed_from_u64(7));
//!
//! let mut hand = Hand::new();
//! manager.refill(&mut hand, HAND_SIZE).unwrap();
//! assert_eq!(hand.len(), HAND_SIZE);
//! ```

// Core domain types
pub mod core;

// Gameplay state and rules
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
