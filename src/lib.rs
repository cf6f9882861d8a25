//! Board-support package for the ESP-EYE / ESP32-S3-EYE camera module.
//!
//! Pin map, I²C/LED/button bring-up and the default camera wiring. All
//! board logic lives in [`board::Board`] and talks to the vendor drivers
//! through the traits in [`board::ports`]; the ESP-IDF implementation of
//! those traits is in `adapters::esp_idf` (feature `espidf`).
//!
//! ```ignore
//! let mut board = Board::new(EspIdfDrivers::new(), BspConfig::default());
//! board.i2c_init()?;
//! board.leds_init()?;
//! board.led_set(Led::Red, true)?;
//! let buttons = board.buttons()?;
//! ```

#![deny(unused_must_use)]

pub mod adapters;
pub mod board;
pub mod camera;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;

pub use board::Board;
pub use board::buttons::{BUTTON_CONFIGS, BUTTON_NUM, ButtonConfig};
pub use config::BspConfig;
pub use error::{BspError, Result};
pub use pins::Led;
