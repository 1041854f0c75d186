//! Pure Business Logic Functions
//!
//! Funktionen ohne Register-Zugriff (testbar!)

use crate::config::{LED_TO_BIT_OFFSET, MIN_LED_NUMBER};
use crate::traits::PortWord;

/// Prüft ob eine LED-Nummer außerhalb von `1..=W::WIDTH` liegt
#[inline]
pub fn is_out_of_range<W: PortWord>(led_number: u16) -> bool {
    led_number < MIN_LED_NUMBER || led_number > W::WIDTH
}

/// Wandelt eine LED-Nummer in ihre Bit-Maske um: `1 << (n - 1)`
///
/// Gibt `None` zurück wenn die Nummer außerhalb des Ports liegt.
///
/// # Beispiele
///
/// ```
/// # use leds_core::led_to_bit;
/// assert_eq!(led_to_bit::<u16>(3), Some(0x0004));
/// assert_eq!(led_to_bit::<u16>(17), None);
/// ```
#[inline]
pub fn led_to_bit<W: PortWord>(led_number: u16) -> Option<W> {
    if is_out_of_range::<W>(led_number) {
        return None;
    }
    Some(W::single_bit(led_number - LED_TO_BIT_OFFSET))
}

/// Nächste LED für ein Lauflicht: 1 → 2 → … → WIDTH → 1
///
/// Ungültige Nummern starten wieder bei der ersten LED.
pub fn next_led<W: PortWord>(led_number: u16) -> u16 {
    if is_out_of_range::<W>(led_number) || led_number == W::WIDTH {
        MIN_LED_NUMBER
    } else {
        led_number + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_to_bit_first_and_last() {
        assert_eq!(led_to_bit::<u16>(1), Some(0x0001));
        assert_eq!(led_to_bit::<u16>(16), Some(0x8000));
    }

    #[test]
    fn test_led_to_bit_out_of_range() {
        assert_eq!(led_to_bit::<u16>(0), None);
        assert_eq!(led_to_bit::<u16>(17), None);
        assert_eq!(led_to_bit::<u16>(u16::MAX), None);
    }

    #[test]
    fn test_led_to_bit_other_widths() {
        assert_eq!(led_to_bit::<u8>(8), Some(0x80));
        assert_eq!(led_to_bit::<u8>(9), None);
        assert_eq!(led_to_bit::<u32>(32), Some(0x8000_0000));
    }

    #[test]
    fn test_next_led_wraps() {
        assert_eq!(next_led::<u16>(1), 2);
        assert_eq!(next_led::<u16>(15), 16);
        assert_eq!(next_led::<u16>(16), 1);
        assert_eq!(next_led::<u8>(8), 1);
    }

    #[test]
    fn test_next_led_restarts_on_invalid() {
        assert_eq!(next_led::<u16>(0), 1);
        assert_eq!(next_led::<u16>(125), 1);
    }
}
