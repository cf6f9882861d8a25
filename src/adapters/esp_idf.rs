//! ESP-IDF driver adapter.
//!
//! Implements the board ports with raw ESP-IDF sys calls: the GPIO driver,
//! the legacy I²C master driver, and `iot_button_create` from the
//! `espressif/button` component. Status codes are handed back through
//! [`BspError::from_code`] untouched.

use core::ffi::c_void;
use core::ptr::NonNull;

use esp_idf_svc::sys::*;
use log::debug;

use crate::board::buttons::ButtonConfig;
use crate::board::ports::{
    ButtonPort, GpioConfig, GpioIntr, GpioMode, GpioPort, I2cConfig, I2cMode, I2cPort,
};
use crate::error::{BspError, Result};

/// Handle returned by the button library. Register callbacks on it with
/// the `iot_button_*` API.
#[derive(Debug)]
pub struct ButtonHandle(NonNull<c_void>);

impl ButtonHandle {
    pub fn as_raw(&self) -> button_handle_t {
        self.0.as_ptr()
    }
}

/// The real drivers. Zero-sized; the ESP-IDF components hold the state.
#[derive(Debug, Default)]
pub struct EspIdfDrivers;

impl EspIdfDrivers {
    pub fn new() -> Self {
        Self
    }
}

// ── GPIO ──────────────────────────────────────────────────────

fn gpio_mode(mode: GpioMode) -> gpio_mode_t {
    match mode {
        GpioMode::Input => gpio_mode_t_GPIO_MODE_INPUT,
        GpioMode::Output => gpio_mode_t_GPIO_MODE_OUTPUT,
        GpioMode::OutputOpenDrain => gpio_mode_t_GPIO_MODE_OUTPUT_OD,
        GpioMode::InputOutput => gpio_mode_t_GPIO_MODE_INPUT_OUTPUT,
    }
}

fn gpio_intr(intr: GpioIntr) -> gpio_int_type_t {
    match intr {
        GpioIntr::Disabled => gpio_int_type_t_GPIO_INTR_DISABLE,
        GpioIntr::PosEdge => gpio_int_type_t_GPIO_INTR_POSEDGE,
        GpioIntr::NegEdge => gpio_int_type_t_GPIO_INTR_NEGEDGE,
        GpioIntr::AnyEdge => gpio_int_type_t_GPIO_INTR_ANYEDGE,
    }
}

impl GpioPort for EspIdfDrivers {
    fn configure(&mut self, config: &GpioConfig) -> Result<()> {
        let cfg = gpio_config_t {
            pin_bit_mask: config.pin_bit_mask,
            mode: gpio_mode(config.mode),
            pull_up_en: if config.pull_up {
                gpio_pullup_t_GPIO_PULLUP_ENABLE
            } else {
                gpio_pullup_t_GPIO_PULLUP_DISABLE
            },
            pull_down_en: if config.pull_down {
                gpio_pulldown_t_GPIO_PULLDOWN_ENABLE
            } else {
                gpio_pulldown_t_GPIO_PULLDOWN_DISABLE
            },
            intr_type: gpio_intr(config.intr),
            ..Default::default()
        };
        // SAFETY: `cfg` outlives the call; gpio_config copies what it needs.
        BspError::from_code(unsafe { gpio_config(&cfg) })
    }

    fn set_level(&mut self, pin: i32, high: bool) -> Result<()> {
        // SAFETY: plain register write; the driver validates the pin number.
        BspError::from_code(unsafe { gpio_set_level(pin, u32::from(high)) })
    }
}

// ── I²C ───────────────────────────────────────────────────────

fn i2c_mode(mode: I2cMode) -> i2c_mode_t {
    match mode {
        I2cMode::Master => i2c_mode_t_I2C_MODE_MASTER,
        I2cMode::Slave => i2c_mode_t_I2C_MODE_SLAVE,
    }
}

impl I2cPort for EspIdfDrivers {
    fn param_config(&mut self, port: u8, config: &I2cConfig) -> Result<()> {
        let cfg = i2c_config_t {
            mode: i2c_mode(config.mode),
            sda_io_num: config.sda,
            sda_pullup_en: config.sda_pullup,
            scl_io_num: config.scl,
            scl_pullup_en: config.scl_pullup,
            __bindgen_anon_1: i2c_config_t__bindgen_ty_1 {
                master: i2c_config_t__bindgen_ty_1__bindgen_ty_1 {
                    clk_speed: config.clk_speed_hz,
                },
            },
            ..Default::default()
        };
        // SAFETY: `cfg` is fully initialised and outlives the call.
        BspError::from_code(unsafe { i2c_param_config(port as i2c_port_t, &cfg) })
    }

    fn driver_install(&mut self, port: u8, mode: I2cMode) -> Result<()> {
        // Master mode: no slave RX/TX buffers, default interrupt allocation.
        // SAFETY: the driver owns all allocations it makes here.
        let ret = unsafe { i2c_driver_install(port as i2c_port_t, i2c_mode(mode), 0, 0, 0) };
        BspError::from_code(ret)
    }

    fn driver_delete(&mut self, port: u8) -> Result<()> {
        // SAFETY: no pointers cross; deleting an uninstalled driver is
        // reported as ESP_ERR_INVALID_ARG.
        BspError::from_code(unsafe { i2c_driver_delete(port as i2c_port_t) })
    }
}

// ── Buttons ───────────────────────────────────────────────────

impl ButtonPort for EspIdfDrivers {
    type Handle = ButtonHandle;

    fn create(&mut self, config: &ButtonConfig) -> Option<ButtonHandle> {
        let cfg = match *config {
            ButtonConfig::Gpio { gpio_num, active_level } => button_config_t {
                type_: button_type_t_BUTTON_TYPE_GPIO,
                __bindgen_anon_1: button_config_t__bindgen_ty_1 {
                    gpio_button_config: button_gpio_config_t {
                        gpio_num,
                        active_level,
                        ..Default::default()
                    },
                },
                ..Default::default()
            },
        };
        // SAFETY: the component copies the config; a null return means
        // allocation or GPIO setup failed.
        let raw = unsafe { iot_button_create(&cfg) };
        let handle = NonNull::new(raw).map(ButtonHandle);
        debug!("button: create {:?} -> {:?}", config, handle);
        handle
    }
}
