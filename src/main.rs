//! ESP-EYE bring-up firmware.
//!
//! Brings the board up through the BSP and blinks the red LED as a
//! heartbeat. The white LED stays off.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use esp_eye_bsp::adapters::esp_idf::EspIdfDrivers;
use esp_eye_bsp::camera::CameraConfig;
use esp_eye_bsp::{Board, BspConfig, Led};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("ESP-EYE BSP v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Board bring-up ─────────────────────────────────────
    let config = BspConfig::default();
    config.validate()?;
    let mut board = Board::new(EspIdfDrivers::new(), config);

    board.i2c_init()?;
    board.leds_init()?;
    board.camera_init()?;
    board.led_set(Led::White, false)?;

    let camera = CameraConfig::for_board(board.config());
    info!(
        "camera: {:?} {:?}, {} frame buffer(s)",
        camera.pixel_format, camera.frame_size, camera.fb_count
    );

    // Handles stay alive for the lifetime of the firmware.
    let buttons = match board.buttons() {
        Ok(handles) => handles,
        Err(e) => {
            warn!("buttons unavailable: {}", e);
            heapless::Vec::new()
        }
    };
    info!("{} button handle(s) ready", buttons.len());

    // ── 3. Heartbeat ──────────────────────────────────────────
    let mut on = false;
    loop {
        on = !on;
        board.led_set(Led::Red, on)?;
        thread::sleep(Duration::from_millis(500));
    }
}
