//! Integration Tests für den LED-Port
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen ein virtuelles
//! Port-Wort, MockRegister und MockPortWriter

use core::cell::Cell;
use core::convert::TryFrom;

use leds_core::config::{ALL_LEDS_OFF, ALL_LEDS_ON, MAX_LED_NUMBER, MIN_LED_NUMBER};
use leds_core::{LedCommand, LedError, LedPort, PortRegister, PortSnapshot, PortWriter};

// ============================================================================
// Mock Register
// ============================================================================

/// Register-Mock, zählt Lese- und Schreibzugriffe
#[derive(Default)]
pub struct MockRegister {
    pub value: u16,
    pub read_count: Cell<usize>,
    pub write_count: usize,
}

impl MockRegister {
    pub fn with_value(value: u16) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }
}

impl PortRegister for MockRegister {
    type Word = u16;

    fn read(&self) -> u16 {
        self.read_count.set(self.read_count.get() + 1);
        self.value
    }

    fn write(&mut self, value: u16) {
        self.value = value;
        self.write_count += 1;
    }
}

// ============================================================================
// Mock Port Writer
// ============================================================================

#[derive(Default)]
pub struct MockPortWriter {
    pub last_word: Option<u16>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockPortWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PortWriter for MockPortWriter {
    type Word = u16;

    fn write(&mut self, word: u16) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.last_word = Some(word);
        self.write_count += 1;
        Ok(())
    }
}

fn valid_leds() -> impl Iterator<Item = u16> {
    MIN_LED_NUMBER..=MAX_LED_NUMBER
}

// ============================================================================
// Tests: Initialisierung
// ============================================================================

#[test]
fn test_leds_off_after_create() {
    let mut leds_virtual: u16 = 0xFFFF;
    LedPort::new(&mut leds_virtual);
    assert_eq!(leds_virtual, ALL_LEDS_OFF);
}

#[test]
fn test_reinit_resets_new_target() {
    let first = Cell::new(0u16);
    let second = Cell::new(0xA5A5u16);
    let mut port = LedPort::new(&first);
    port.turn_on(4);

    port.init(&second);
    port.turn_on(1);

    assert_eq!(first.get(), 0x0008);
    assert_eq!(second.get(), 0x0001);
}

#[test]
fn test_independent_ports() {
    let a = Cell::new(0u16);
    let b = Cell::new(0u16);
    let mut port_a = LedPort::new(&a);
    let mut port_b = LedPort::new(&b);

    port_a.turn_on(1);
    port_b.turn_on(16);

    assert_eq!(a.get(), 0x0001);
    assert_eq!(b.get(), 0x8000);
}

// ============================================================================
// Tests: Einzelne LEDs
// ============================================================================

#[test]
fn test_turn_on_led_one() {
    let leds_virtual = Cell::new(0u16);
    let mut port = LedPort::new(&leds_virtual);
    port.turn_on(3);
    assert_eq!(leds_virtual.get(), 0x0004);
}

#[test]
fn test_turn_off_led_one() {
    let leds_virtual = Cell::new(0u16);
    let mut port = LedPort::new(&leds_virtual);
    port.turn_on(2);
    port.turn_off(2);
    assert_eq!(leds_virtual.get(), 0x0000);
}

#[test]
fn test_turn_on_off_multiple_leds() {
    let leds_virtual = Cell::new(0u16);
    let mut port = LedPort::new(&leds_virtual);
    port.turn_on(8);
    port.turn_on(9);
    port.turn_off(9);
    port.turn_off(8);
    port.turn_off(8);
    assert_eq!(leds_virtual.get(), 0x0000);
}

#[test]
fn test_each_led_maps_to_its_bit() {
    for led in valid_leds() {
        let leds_virtual = Cell::new(0u16);
        let mut port = LedPort::new(&leds_virtual);
        port.turn_on(led);
        assert_eq!(leds_virtual.get(), 1u16 << (led - 1), "LED {led}");
    }
}

// ============================================================================
// Tests: Alle LEDs
// ============================================================================

#[test]
fn test_turn_all_on() {
    let leds_virtual = Cell::new(0u16);
    let mut port = LedPort::new(&leds_virtual);
    port.turn_all_on();
    assert_eq!(leds_virtual.get(), ALL_LEDS_ON);
    assert!(valid_leds().all(|led| port.is_on(led)));
}

#[test]
fn test_turn_all_off() {
    let leds_virtual = Cell::new(0u16);
    let mut port = LedPort::new(&leds_virtual);
    port.turn_all_on();
    port.turn_all_off();
    assert_eq!(leds_virtual.get(), ALL_LEDS_OFF);
    assert!(valid_leds().all(|led| port.is_off(led)));
}

// ============================================================================
// Tests: Zustandsabfrage
// ============================================================================

#[test]
fn test_if_a_led_is_on() {
    let leds_virtual = Cell::new(0u16);
    let mut port = LedPort::new(&leds_virtual);
    port.turn_on(5);
    assert!(port.is_on(5));
    port.turn_on(6);
    port.turn_off(6);
    assert!(!port.is_on(6));
}

#[test]
fn test_if_a_led_is_off() {
    let leds_virtual = Cell::new(0u16);
    let mut port = LedPort::new(&leds_virtual);
    port.turn_on(5);
    port.turn_off(5);
    assert!(port.is_off(5));
    port.turn_on(6);
    assert!(!port.is_off(6));
}

#[test]
fn test_check_led_limits() {
    let leds_virtual = Cell::new(0u16);
    let mut port = LedPort::new(&leds_virtual);
    port.turn_on(1);
    port.turn_on(16);
    assert!(port.is_on(1));
    assert!(port.is_on(16));
    port.turn_off(1);
    port.turn_off(16);
    assert!(port.is_off(1));
    assert!(port.is_off(16));
}

/// Außerhalb des Bereichs ist eine LED weder an noch aus
#[test]
fn test_check_led_out_of_limits() {
    let leds_virtual = Cell::new(0u16);
    let mut port = LedPort::new(&leds_virtual);
    port.turn_on(0);
    port.turn_on(17);
    port.turn_on(125);

    assert!(!port.is_on(0));
    assert!(!port.is_on(17));
    assert!(!port.is_on(125));
    assert_eq!(leds_virtual.get(), 0x0000);

    port.turn_all_on();
    port.turn_off(0);
    port.turn_off(17);
    port.turn_off(125);

    assert!(!port.is_off(0));
    assert!(!port.is_off(17));
    assert!(!port.is_off(125));
    assert_eq!(leds_virtual.get(), 0xFFFF);
}

#[test]
fn test_out_of_range_not_on_even_when_all_on() {
    let leds_virtual = Cell::new(0u16);
    let mut port = LedPort::new(&leds_virtual);
    port.turn_all_on();
    port.turn_off(0);
    port.turn_off(17);
    assert_eq!(leds_virtual.get(), ALL_LEDS_ON);
    assert!(!port.is_on(0));
    assert!(!port.is_on(17));
}

#[test]
fn test_out_of_range_does_not_touch_register() {
    let mut port = LedPort::new(MockRegister::with_value(0x1234));
    port.turn_on(0);
    port.turn_off(17);
    port.turn_on(u16::MAX);
    let register = port.release();

    // nur der Reset aus new()
    assert_eq!(register.value, 0x0000);
    assert_eq!(register.write_count, 1);
    assert_eq!(register.read_count.get(), 0);
}

#[test]
fn test_turn_on_is_single_read_modify_write() {
    let mut port = LedPort::new(MockRegister::default());
    port.turn_on(7);
    let register = port.release();

    assert_eq!(register.value, 0x0040);
    assert_eq!(register.write_count, 2);
    assert_eq!(register.read_count.get(), 1);
}

// ============================================================================
// Tests: Kommandos
// ============================================================================

#[test]
fn test_apply_parsed_script() {
    let leds_virtual = Cell::new(0u16);
    let mut port = LedPort::new(&leds_virtual);

    for line in ["all on", "off 1", "off 16", "off 125"] {
        port.apply(LedCommand::try_from(line).unwrap());
    }

    assert_eq!(leds_virtual.get(), 0x7FFE);
}

#[test]
fn test_apply_json_commands() {
    let leds_virtual = Cell::new(0u16);
    let mut port = LedPort::new(&leds_virtual);

    for json in [r#""all_on""#, r#"{"turn_off":2}"#, r#"{"turn_off":17}"#] {
        let (command, _) = serde_json_core::from_str::<LedCommand>(json).unwrap();
        port.apply(command);
    }

    assert_eq!(leds_virtual.get(), 0xFFFD);
}

#[test]
fn test_invalid_command_is_rejected() {
    assert_eq!(LedCommand::try_from("toggle 3"), Err(LedError::InvalidCommand));
}

#[test]
fn test_snapshot() {
    let leds_virtual = Cell::new(0u16);
    let mut port = LedPort::new(&leds_virtual);
    port.turn_on(1);
    port.turn_on(9);
    assert_eq!(
        port.snapshot(),
        PortSnapshot {
            word: 0x0101,
            leds_on: 2
        }
    );
}

// ============================================================================
// Tests: MockPortWriter
// ============================================================================

#[test]
fn test_mock_port_writer_write() {
    let mut mock = MockPortWriter::new();
    let leds_virtual = Cell::new(0u16);
    let mut port = LedPort::new(&leds_virtual);
    port.turn_on(3);

    mock.write(port.word()).unwrap();

    assert_eq!(mock.write_count, 1);
    assert_eq!(mock.last_word, Some(0x0004));
}

#[test]
fn test_mock_port_writer_fail() {
    let mut mock = MockPortWriter::new();
    mock.fail_next_write = true;

    let result = mock.write(0xFFFF);
    assert_eq!(result, Err(LedError::WriteFailed));
    assert_eq!(mock.write_count, 0);
    assert_eq!(mock.last_word, None);
}

#[test]
fn test_mock_port_writer_recovers_after_fail() {
    let mut mock = MockPortWriter::new();
    mock.fail_next_write = true;

    assert!(mock.write(0x0001).is_err());
    assert!(mock.write(0x0002).is_ok());
    assert_eq!(mock.write_count, 1);
    assert_eq!(mock.last_word, Some(0x0002));
}
