//! GPIO / peripheral pin assignments for the ESP-EYE board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

/// Marker for a signal that is not routed on this board.
pub const GPIO_NUM_NC: i32 = -1;

// ---------------------------------------------------------------------------
// I²C bus (QMA7981 IMU + OV2640 SCCB)
// ---------------------------------------------------------------------------

pub const I2C_SCL_GPIO: i32 = 23;
pub const I2C_SDA_GPIO: i32 = 18;

// ---------------------------------------------------------------------------
// I²S audio (MSM261S4030H0 digital microphone)
// ---------------------------------------------------------------------------

pub const I2S_SCLK_GPIO: i32 = 41;
pub const I2S_LCLK_GPIO: i32 = 42;
pub const I2S_DIN_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Camera (OV2640, 8-bit DVP)
// ---------------------------------------------------------------------------

pub const CAMERA_XCLK_GPIO: i32 = 4;
pub const CAMERA_PCLK_GPIO: i32 = 25;
pub const CAMERA_VSYNC_GPIO: i32 = 5;
pub const CAMERA_HSYNC_GPIO: i32 = 27;

/// DVP data lines, D0 first.
pub const CAMERA_DATA_GPIOS: [i32; 8] = [34, 13, 14, 35, 39, 38, 37, 36];

// ---------------------------------------------------------------------------
// Buttons
// ---------------------------------------------------------------------------

/// All four physical buttons are wired to this one GPIO.
pub const BUTTONS_IO: i32 = 15;

// ---------------------------------------------------------------------------
// LEDs
// ---------------------------------------------------------------------------

/// On-board LEDs. Each discriminant is the GPIO number driving the LED
/// (through the gate of an NMOS, so HIGH = on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Led {
    Red = 21,
    White = 22,
}

impl Led {
    /// Every LED on the board, in initialisation order.
    pub const ALL: [Led; 2] = [Led::Red, Led::White];

    pub const fn gpio(self) -> i32 {
        self as i32
    }
}

/// Every assigned pin. The camera SCCB shares the BSP I²C bus, so it has
/// no entries of its own.
pub const ASSIGNED_GPIOS: [i32; 20] = [
    I2C_SCL_GPIO,
    I2C_SDA_GPIO,
    I2S_SCLK_GPIO,
    I2S_LCLK_GPIO,
    I2S_DIN_GPIO,
    CAMERA_XCLK_GPIO,
    CAMERA_PCLK_GPIO,
    CAMERA_VSYNC_GPIO,
    CAMERA_HSYNC_GPIO,
    CAMERA_DATA_GPIOS[0],
    CAMERA_DATA_GPIOS[1],
    CAMERA_DATA_GPIOS[2],
    CAMERA_DATA_GPIOS[3],
    CAMERA_DATA_GPIOS[4],
    CAMERA_DATA_GPIOS[5],
    CAMERA_DATA_GPIOS[6],
    CAMERA_DATA_GPIOS[7],
    BUTTONS_IO,
    Led::Red.gpio(),
    Led::White.gpio(),
];
