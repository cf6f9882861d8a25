//! Board context. Owns the vendor drivers and the peripheral lifecycle state.
//!
//! A single [`Board`] value replaces the process-wide "I²C initialised" flag
//! of a classic C BSP. Every mutating entry point takes `&mut self`, so
//! single-threaded bring-up is enforced by the borrow checker instead of
//! being a platform assumption.
//!
//! All operations are one-shot driver calls. Driver errors are returned to
//! the caller unchanged; nothing is retried or rolled back.

pub mod buttons;
pub mod ports;

use log::{debug, error, info};

use crate::config::BspConfig;
use crate::drivers::led::BoardLed;
use crate::error::Result;
use crate::pins::Led;

use buttons::{BUTTON_CONFIGS, BUTTON_NUM, create_buttons_from};
use ports::{ButtonPort, GpioConfig, GpioPort, I2cConfig, I2cPort};

pub struct Board<D> {
    drivers: D,
    config: BspConfig,
    i2c_initialized: bool,
}

impl<D> Board<D> {
    pub fn new(drivers: D, config: BspConfig) -> Self {
        Self {
            drivers,
            config,
            i2c_initialized: false,
        }
    }

    pub fn config(&self) -> &BspConfig {
        &self.config
    }

    /// Whether the I²C driver is currently installed by this board.
    pub fn is_i2c_initialized(&self) -> bool {
        self.i2c_initialized
    }

    pub fn drivers(&self) -> &D {
        &self.drivers
    }

    pub fn drivers_mut(&mut self) -> &mut D {
        &mut self.drivers
    }

    pub fn into_drivers(self) -> D {
        self.drivers
    }

    /// Camera bring-up is not provided by this BSP; the call succeeds
    /// without touching any driver. Use
    /// [`CameraConfig::for_board`](crate::camera::CameraConfig::for_board)
    /// with a camera driver of your choice.
    pub fn camera_init(&mut self) -> Result<()> {
        info!("camera: no camera driver attached, skipping bring-up");
        Ok(())
    }
}

// ── I²C ───────────────────────────────────────────────────────

impl<D: I2cPort> Board<D> {
    /// Configure and install the I²C master driver.
    ///
    /// Idempotent: once installed, further calls return `Ok` without
    /// reaching the driver.
    pub fn i2c_init(&mut self) -> Result<()> {
        if self.i2c_initialized {
            debug!("i2c: already initialised");
            return Ok(());
        }

        let port = self.config.i2c_port;
        let bus = I2cConfig::for_board(&self.config);
        self.drivers.param_config(port, &bus).inspect_err(|e| {
            error!("i2c: param config on port {} failed: {}", port, e);
        })?;
        self.drivers
            .driver_install(port, bus.mode)
            .inspect_err(|e| error!("i2c: driver install on port {} failed: {}", port, e))?;

        self.i2c_initialized = true;
        info!(
            "i2c: port {} ready (SDA={}, SCL={}, {} Hz)",
            port, bus.sda, bus.scl, bus.clk_speed_hz
        );
        Ok(())
    }

    /// Delete the I²C driver and free its resources.
    ///
    /// The driver is always asked; its error (e.g. nothing installed) is
    /// forwarded and the board state is left as it was.
    pub fn i2c_deinit(&mut self) -> Result<()> {
        let port = self.config.i2c_port;
        self.drivers
            .driver_delete(port)
            .inspect_err(|e| error!("i2c: driver delete on port {} failed: {}", port, e))?;
        self.i2c_initialized = false;
        info!("i2c: port {} released", port);
        Ok(())
    }
}

// ── LEDs ──────────────────────────────────────────────────────

impl<D: GpioPort> Board<D> {
    /// Set every LED GPIO as a push-pull output, red first.
    pub fn leds_init(&mut self) -> Result<()> {
        for led in Led::ALL {
            let gpio = led.gpio();
            self.drivers
                .configure(&GpioConfig::output(gpio))
                .inspect_err(|e| error!("led: {:?} (GPIO {}) config failed: {}", led, gpio, e))?;
        }
        info!("led: outputs configured");
        Ok(())
    }

    /// Turn an LED on or off.
    pub fn led_set(&mut self, led: Led, on: bool) -> Result<()> {
        self.drivers.set_level(led.gpio(), on)
    }

    /// Borrow one LED as an `embedded-hal` output pin.
    pub fn led(&mut self, led: Led) -> BoardLed<'_, D> {
        BoardLed::new(self, led)
    }
}

// ── Buttons ───────────────────────────────────────────────────

impl<D: ButtonPort> Board<D> {
    /// Create a handle for every button in the board table.
    ///
    /// See [`create_buttons_from`] for the contract on `btn_array` and
    /// `btn_cnt`.
    pub fn iot_button_create(
        &mut self,
        btn_array: &mut [Option<D::Handle>],
        btn_cnt: Option<&mut usize>,
    ) -> Result<()> {
        create_buttons_from(&mut self.drivers, &BUTTON_CONFIGS, btn_array, btn_cnt)
    }

    /// Create every button and collect the handles.
    pub fn buttons(&mut self) -> Result<heapless::Vec<D::Handle, BUTTON_NUM>> {
        let mut slots: [Option<D::Handle>; BUTTON_NUM] = core::array::from_fn(|_| None);
        self.iot_button_create(&mut slots, None)?;
        Ok(slots.into_iter().flatten().collect())
    }
}
