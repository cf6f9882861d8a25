//! Button table and handle creation.
//!
//! The board's buttons are described by an immutable table. Creating them
//! hands each entry to the button library in order and stops at the first
//! entry the library refuses.

use log::{debug, error};

use crate::board::ports::ButtonPort;
use crate::error::{BspError, Result};
use crate::pins;

/// Number of button handles the board exposes.
pub const BUTTON_NUM: usize = 1;

/// Mirror of `button_config_t`, restricted to the kinds this board uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonConfig {
    /// Button read directly from a GPIO level.
    Gpio { gpio_num: i32, active_level: u8 },
}

/// The board's button table.
pub static BUTTON_CONFIGS: [ButtonConfig; BUTTON_NUM] = [ButtonConfig::Gpio {
    gpio_num: pins::BUTTONS_IO,
    active_level: 0,
}];

/// Create one handle per entry of `configs` into `btn_array`.
///
/// `btn_array` must hold at least `configs.len()` slots, otherwise
/// [`BspError::InvalidArg`] is returned and neither output is touched.
/// When `btn_cnt` is given it is zeroed and then counts every handle
/// created, so after a [`BspError::Fail`] it reports the successes only.
pub fn create_buttons_from<P: ButtonPort>(
    port: &mut P,
    configs: &[ButtonConfig],
    btn_array: &mut [Option<P::Handle>],
    mut btn_cnt: Option<&mut usize>,
) -> Result<()> {
    if btn_array.len() < configs.len() {
        return Err(BspError::InvalidArg);
    }

    if let Some(cnt) = btn_cnt.as_deref_mut() {
        *cnt = 0;
    }
    for (i, (config, slot)) in configs.iter().zip(btn_array.iter_mut()).enumerate() {
        *slot = port.create(config);
        if slot.is_none() {
            error!("buttons: create #{} failed ({:?})", i, config);
            return Err(BspError::Fail);
        }
        if let Some(cnt) = btn_cnt.as_deref_mut() {
            *cnt += 1;
        }
    }
    debug!("buttons: {} handle(s) created", configs.len());
    Ok(())
}
