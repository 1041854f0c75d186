// 74HC595 Port Writer
//
// Gibt das 16-Bit Port-Wort über zwei kaskadierte Schieberegister aus.
// LED 1 liegt auf QA des ersten Chips, LED 16 auf QH des zweiten.

use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};

use leds_core::{LedError, PortWriter};

use crate::config::PORT_OUTPUT_COUNT;

/// Real Hardware Port Writer
///
/// Bit-Banging über drei GPIOs: Daten, Schiebetakt und Latch.
pub struct Hc595Writer<'a> {
    data: Output<'a>,
    clock: Output<'a>,
    latch: Output<'a>,
}

impl<'a> Hc595Writer<'a> {
    /// Erstellt einen neuen Hc595Writer, alle Leitungen starten auf Low
    ///
    /// # Parameter
    /// - `data`: GPIO für SER
    /// - `clock`: GPIO für SRCLK
    /// - `latch`: GPIO für RCLK
    pub fn new(
        data: impl OutputPin + 'a,
        clock: impl OutputPin + 'a,
        latch: impl OutputPin + 'a,
    ) -> Self {
        Self {
            data: Output::new(data, Level::Low, OutputConfig::default()),
            clock: Output::new(clock, Level::Low, OutputConfig::default()),
            latch: Output::new(latch, Level::Low, OutputConfig::default()),
        }
    }

    #[inline(always)]
    fn pulse(pin: &mut Output<'a>) {
        pin.set_high();
        pin.set_low();
    }
}

impl<'a> PortWriter for Hc595Writer<'a> {
    type Word = u16;

    /// Schiebt 16 Bits MSB zuerst hinaus und übernimmt sie dann
    ///
    /// GPIO-Zugriffe können auf dem ESP32-C6 nicht fehlschlagen, daher
    /// liefert diese Implementierung immer `Ok`.
    fn write(&mut self, word: u16) -> Result<(), LedError> {
        self.latch.set_low();
        for bit in (0..PORT_OUTPUT_COUNT).rev() {
            if word & (1 << bit) != 0 {
                self.data.set_high();
            } else {
                self.data.set_low();
            }
            Self::pulse(&mut self.clock);
        }
        Self::pulse(&mut self.latch);
        Ok(())
    }
}
