//! Flush layer
//!
//! Holds the hardware brightness and pushes frames to the [`OutputDriver`].
//! Brightness is applied on the way out, the pixel buffer itself always
//! keeps the colors the animations chose.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    OutputDriver,
    color::{BLACK, Rgb, dim},
};

/// Brightness the board starts with
pub const DEFAULT_BRIGHTNESS: u8 = 25;

/// Output stage with brightness scaling
///
/// `N` is the size of the scratch frame and must match the pixel buffer.
#[derive(Debug)]
pub struct LedOutput<D: OutputDriver, const N: usize> {
    driver: D,
    brightness: u8,
    frame: [Rgb; N],
}

impl<D: OutputDriver, const N: usize> LedOutput<D, N> {
    pub const fn new(driver: D, brightness: u8) -> Self {
        Self {
            driver,
            brightness,
            frame: [BLACK; N],
        }
    }

    /// Current hardware brightness (0-255)
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set the hardware brightness used by the next flush
    pub fn set_brightness(&mut self, brightness: u8) {
        #[cfg(feature = "esp32-log")]
        println!("[LedOutput.set_brightness] {} -> {}", self.brightness, brightness);
        self.brightness = brightness;
    }

    /// Push `leds` to the driver, scaled by the current brightness
    pub fn flush(&mut self, leds: &[Rgb]) {
        let count = leds.len().min(N);
        let frame = &mut self.frame[..count];
        let brightness = self.brightness;

        match brightness {
            255 => frame.copy_from_slice(&leds[..count]),
            0 => frame.fill(BLACK),
            _ => {
                for (out, pixel) in frame.iter_mut().zip(leds) {
                    *out = dim(*pixel, brightness);
                }
            }
        }

        self.driver.write(frame);
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
