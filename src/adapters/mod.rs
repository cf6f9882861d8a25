//! Adapters: concrete implementations of the board port traits.
//!
//! | Adapter   | Implements                     | Connects to                    |
//! |-----------|--------------------------------|--------------------------------|
//! | `esp_idf` | GpioPort, I2cPort, ButtonPort  | ESP-IDF GPIO, I²C, iot_button  |
//!
//! Only built with the `espidf` feature; host tests supply their own mocks.

#[cfg(feature = "espidf")]
pub mod esp_idf;
