//! LEDs Core - Platform-agnostic Port Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert den LedPort, Register-Traits und Pure Functions.

#![no_std]

pub mod config;
pub mod logic;
pub mod port;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use logic::{is_out_of_range, led_to_bit, next_led};
pub use port::LedPort;
pub use traits::{LedError, PortRegister, PortWord, PortWriter, VolatileRegister};
pub use types::{LedCommand, LedState, PortSnapshot};
