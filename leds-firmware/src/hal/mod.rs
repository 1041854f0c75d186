// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter dem PortWriter-Trait,
// die Logik in leds-core bleibt damit hardware-unabhängig.

pub mod shift_register;

pub use shift_register::Hc595Writer;
