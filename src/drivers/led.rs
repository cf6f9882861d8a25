//! On-board LED as an `embedded-hal` output pin.
//!
//! Lets generic blink/indicator code drive the ESP-EYE LEDs without knowing
//! about the board. Each level change is one `gpio_set_level` through the
//! owning [`Board`].

use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};

use crate::board::Board;
use crate::board::ports::GpioPort;
use crate::error::BspError;
use crate::pins::Led;

impl digital::Error for BspError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// One LED borrowed from a [`Board`].
pub struct BoardLed<'a, D> {
    board: &'a mut Board<D>,
    led: Led,
}

impl<'a, D: GpioPort> BoardLed<'a, D> {
    pub(crate) fn new(board: &'a mut Board<D>, led: Led) -> Self {
        Self { board, led }
    }

    pub fn led(&self) -> Led {
        self.led
    }
}

impl<D> ErrorType for BoardLed<'_, D> {
    type Error = BspError;
}

impl<D: GpioPort> OutputPin for BoardLed<'_, D> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.board.led_set(self.led, false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.board.led_set(self.led, true)
    }
}
