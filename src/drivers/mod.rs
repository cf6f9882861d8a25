//! Peripheral helpers built on top of the board.

pub mod led;
