//! Konstanten für den LED-Port
//!
//! Beschreiben das Standard-Layout: ein 16-Bit Wort, ein Bit pro LED.

// ============================================================================
// LED-Nummerierung
// ============================================================================

/// Kleinste gültige LED-Nummer (Nummerierung beginnt bei 1)
pub const MIN_LED_NUMBER: u16 = 1;

/// Größte gültige LED-Nummer des 16-Bit Ports
pub const MAX_LED_NUMBER: u16 = 16;

/// Offset zwischen LED-Nummer (1-basiert) und Bit-Position (0-basiert)
pub const LED_TO_BIT_OFFSET: u16 = 1;

// ============================================================================
// Register-Werte
// ============================================================================

/// Registerwert: alle LEDs an
pub const ALL_LEDS_ON: u16 = 0xFFFF;

/// Registerwert: alle LEDs aus
pub const ALL_LEDS_OFF: u16 = 0x0000;
