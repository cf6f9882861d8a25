//! Camera (OV2640 over 8-bit DVP) configuration.
//!
//! The BSP does not bring the sensor up itself (see
//! [`Board::camera_init`](crate::board::Board::camera_init)); it only
//! publishes the wiring and capture defaults a camera driver needs.

use crate::config::BspConfig;
use crate::pins;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb565,
    Yuv422,
    Grayscale,
    Jpeg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSize {
    /// 96x96
    Size96x96,
    /// 240x240
    Size240x240,
    /// 320x240
    Qvga,
    /// 640x480
    Vga,
}

impl FrameSize {
    pub const fn dimensions(self) -> (u16, u16) {
        match self {
            Self::Size96x96 => (96, 96),
            Self::Size240x240 => (240, 240),
            Self::Qvga => (320, 240),
            Self::Vga => (640, 480),
        }
    }
}

/// Where the driver allocates frame buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameBufferLocation {
    Psram,
    Dram,
}

/// Mirror of `camera_config_t`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraConfig {
    pub pin_pwdn: i32,
    pub pin_reset: i32,
    pub pin_xclk: i32,
    pub pin_sccb_sda: i32,
    pub pin_sccb_scl: i32,
    /// D0..D7.
    pub pin_data: [i32; 8],
    pub pin_vsync: i32,
    pub pin_href: i32,
    pub pin_pclk: i32,
    pub xclk_freq_hz: u32,
    pub ledc_timer: u8,
    pub ledc_channel: u8,
    pub pixel_format: PixelFormat,
    pub frame_size: FrameSize,
    /// 0-63, lower is better. Only used for [`PixelFormat::Jpeg`].
    pub jpeg_quality: u8,
    pub fb_count: u8,
    pub fb_location: FrameBufferLocation,
    /// I²C port the SCCB shares with the rest of the board.
    pub sccb_i2c_port: u8,
}

impl CameraConfig {
    /// Board defaults: 20 MHz XCLK on LEDC timer/channel 0, RGB565 240x240,
    /// double-buffered in PSRAM. SCCB pins are left unconnected because the
    /// sensor sits on the already-installed BSP I²C bus.
    pub fn for_board(config: &BspConfig) -> Self {
        Self {
            pin_pwdn: pins::GPIO_NUM_NC,
            pin_reset: pins::GPIO_NUM_NC,
            pin_xclk: pins::CAMERA_XCLK_GPIO,
            pin_sccb_sda: pins::GPIO_NUM_NC,
            pin_sccb_scl: pins::GPIO_NUM_NC,
            pin_data: pins::CAMERA_DATA_GPIOS,
            pin_vsync: pins::CAMERA_VSYNC_GPIO,
            pin_href: pins::CAMERA_HSYNC_GPIO,
            pin_pclk: pins::CAMERA_PCLK_GPIO,
            xclk_freq_hz: 20_000_000,
            ledc_timer: 0,
            ledc_channel: 0,
            pixel_format: PixelFormat::Rgb565,
            frame_size: FrameSize::Size240x240,
            jpeg_quality: 12,
            fb_count: 2,
            fb_location: FrameBufferLocation::Psram,
            sccb_i2c_port: config.i2c_port,
        }
    }

    /// Size of one uncompressed frame in bytes, `None` for JPEG.
    pub fn frame_bytes(&self) -> Option<usize> {
        let (w, h) = self.frame_size.dimensions();
        let bpp = match self.pixel_format {
            PixelFormat::Rgb565 | PixelFormat::Yuv422 => 2,
            PixelFormat::Grayscale => 1,
            PixelFormat::Jpeg => return None,
        };
        Some(w as usize * h as usize * bpp)
    }
}
