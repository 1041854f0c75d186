//! LED-Port über einem Register-Wort
//!
//! Jedes Bit des Worts steuert eine LED. LED-Nummern sind 1-basiert:
//! LED `n` liegt auf Bit `n - 1`.

use crate::logic::led_to_bit;
use crate::traits::{LedError, PortRegister, PortWord};
use crate::types::{LedCommand, LedState, PortSnapshot};

/// Bit-Steuerung für bis zu `WIDTH` LEDs auf einem fremden Register
///
/// Der Port besitzt den Speicher nicht: der Aufrufer stellt das Register
/// (Variable, `Cell` oder Hardware-Register) bereit und übergibt einen Handle.
///
/// Jede Operation ist ein einzelnes Read-Modify-Write ohne Locking und damit
/// **nicht** interrupt-sicher.
///
/// # Beispiele
///
/// ```
/// # use leds_core::LedPort;
/// let mut leds_virtual: u16 = 0xFFFF;
/// let mut port = LedPort::new(&mut leds_virtual);
/// port.turn_on(3);
/// assert!(port.is_on(3));
/// assert_eq!(port.word(), 0x0004);
/// ```
#[derive(Debug)]
pub struct LedPort<R: PortRegister> {
    port: R,
}

impl<R: PortRegister> LedPort<R> {
    /// Bindet den Port an `port` und schaltet alle LEDs aus
    pub fn new(port: R) -> Self {
        let mut leds = Self { port };
        leds.turn_all_off();
        leds
    }

    /// Bindet den Port an ein neues Register und schaltet dort alle LEDs aus
    ///
    /// Gibt den bisherigen Handle zurück. Das alte Register bleibt unverändert.
    pub fn init(&mut self, port: R) -> R {
        let previous = core::mem::replace(&mut self.port, port);
        self.turn_all_off();
        previous
    }

    /// Gibt den Register-Handle zurück
    pub fn release(self) -> R {
        self.port
    }

    /// Schaltet eine LED ein, prüft die Nummer
    pub fn try_turn_on(&mut self, led_number: u16) -> Result<(), LedError> {
        let mask = Self::mask(led_number)?;
        let word = self.port.read();
        self.port.write(word | mask);
        Ok(())
    }

    /// Schaltet eine LED aus, prüft die Nummer
    pub fn try_turn_off(&mut self, led_number: u16) -> Result<(), LedError> {
        let mask = Self::mask(led_number)?;
        let word = self.port.read();
        self.port.write(word & !mask);
        Ok(())
    }

    /// Schaltet eine LED ein
    ///
    /// Nummern außerhalb von `1..=WIDTH` werden ignoriert, das Register
    /// bleibt unberührt.
    pub fn turn_on(&mut self, led_number: u16) {
        if let Err(_e) = self.try_turn_on(led_number) {
            #[cfg(feature = "defmt")]
            defmt::debug!("turn_on ignored: {}", _e);
        }
    }

    /// Schaltet eine LED aus
    ///
    /// Nummern außerhalb von `1..=WIDTH` werden ignoriert.
    pub fn turn_off(&mut self, led_number: u16) {
        if let Err(_e) = self.try_turn_off(led_number) {
            #[cfg(feature = "defmt")]
            defmt::debug!("turn_off ignored: {}", _e);
        }
    }

    pub fn turn_all_on(&mut self) {
        self.port.write(R::Word::ALL_ON);
    }

    pub fn turn_all_off(&mut self) {
        self.port.write(R::Word::ALL_OFF);
    }

    /// Zustand einer LED, `None` für ungültige Nummern
    pub fn state(&self, led_number: u16) -> Option<LedState> {
        let mask = led_to_bit::<R::Word>(led_number)?;
        Some(LedState::from(self.port.read() & mask != R::Word::ALL_OFF))
    }

    /// `true` nur für gültige LEDs, deren Bit gesetzt ist
    pub fn is_on(&self, led_number: u16) -> bool {
        self.state(led_number) == Some(LedState::On)
    }

    /// `true` nur für gültige LEDs, deren Bit gelöscht ist
    ///
    /// Ungültige Nummern sind weder an noch aus: `is_on` und `is_off`
    /// liefern dann beide `false`.
    pub fn is_off(&self, led_number: u16) -> bool {
        self.state(led_number) == Some(LedState::Off)
    }

    /// Aktueller Registerwert
    pub fn word(&self) -> R::Word {
        self.port.read()
    }

    pub fn snapshot(&self) -> PortSnapshot<R::Word> {
        PortSnapshot::from_word(self.word())
    }

    /// Führt ein Kommando aus (gleiche Regeln wie die Einzel-Operationen)
    pub fn apply(&mut self, command: LedCommand) {
        match command {
            LedCommand::TurnOn(led) => self.turn_on(led),
            LedCommand::TurnOff(led) => self.turn_off(led),
            LedCommand::AllOn => self.turn_all_on(),
            LedCommand::AllOff => self.turn_all_off(),
        }
    }

    fn mask(led_number: u16) -> Result<R::Word, LedError> {
        led_to_bit::<R::Word>(led_number).ok_or(LedError::OutOfRange(led_number))
    }
}
