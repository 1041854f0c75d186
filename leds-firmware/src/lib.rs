// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von leds-core
pub use leds_core::{
    LedCommand, LedError, LedPort, PortRegister, PortSnapshot, PortWriter, next_led,
};
