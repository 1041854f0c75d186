//! Core Types für den LED-Port
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::traits::{LedError, PortWord};

/// Zustand einer gültigen LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LedState {
    On,
    Off,
}

impl From<bool> for LedState {
    fn from(is_on: bool) -> Self {
        if is_on { LedState::On } else { LedState::Off }
    }
}

/// LED Command für die Port-Steuerung
///
/// Eine Port-Operation als Daten, wird mit `LedPort::apply` ausgeführt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LedCommand {
    /// Einzelne LED einschalten
    TurnOn(u16),
    /// Einzelne LED ausschalten
    TurnOff(u16),
    /// Alle LEDs einschalten
    AllOn,
    /// Alle LEDs ausschalten
    AllOff,
}

impl core::convert::TryFrom<&str> for LedCommand {
    type Error = LedError;

    /// Parst Text-Kommandos: `"on 3"`, `"off 3"`, `"all on"`, `"all off"`
    ///
    /// Die LED-Nummer wird nur syntaktisch geprüft, ungültige Nummern werden
    /// erst beim Ausführen ignoriert.
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let mut words = text.split_whitespace();
        let (Some(first), Some(second), None) = (words.next(), words.next(), words.next()) else {
            return Err(LedError::InvalidCommand);
        };

        match (first, second) {
            ("all", "on") => Ok(Self::AllOn),
            ("all", "off") => Ok(Self::AllOff),
            ("on", number) => parse_led_number(number).map(Self::TurnOn),
            ("off", number) => parse_led_number(number).map(Self::TurnOff),
            _ => Err(LedError::InvalidCommand),
        }
    }
}

fn parse_led_number(text: &str) -> Result<u16, LedError> {
    text.parse::<u16>().map_err(|_| LedError::InvalidCommand)
}

/// Momentaufnahme des Port-Registers
///
/// Wird nach jeder Änderung geloggt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortSnapshot<W> {
    pub word: W,
    pub leds_on: u32,
}

impl<W: PortWord> PortSnapshot<W> {
    /// Erstellt eine Momentaufnahme aus einem Registerwert
    pub fn from_word(word: W) -> Self {
        Self {
            word,
            leds_on: word.count_on(),
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedState::On => defmt::write!(fmt, "On"),
            LedState::Off => defmt::write!(fmt, "Off"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedCommand {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedCommand::TurnOn(led) => defmt::write!(fmt, "TurnOn {{ led: {} }}", led),
            LedCommand::TurnOff(led) => defmt::write!(fmt, "TurnOff {{ led: {} }}", led),
            LedCommand::AllOn => defmt::write!(fmt, "AllOn"),
            LedCommand::AllOff => defmt::write!(fmt, "AllOff"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<W: PortWord + defmt::Format> defmt::Format for PortSnapshot<W> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "PortSnapshot {{ word: {}, leds_on: {} }}",
            self.word,
            self.leds_on
        )
    }
}
