// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

// ============================================================================
// Schieberegister (2x 74HC595, kaskadiert = 16 Ausgänge)
// ============================================================================
//
// Die Pin-Nummern dienen nur der Dokumentation der Verdrahtung: esp-hal
// vergibt GPIOs als typisierte Peripherals, main.rs übergibt daher
// `peripherals.GPIO4/5/6` direkt. Bei Änderung beide Stellen anpassen.

/// GPIO-Pin für die serielle Datenleitung (SER / DS)
/// Nur Dokumentation, verdrahtet in main.rs als `peripherals.GPIO4`
pub const SHIFT_DATA_GPIO_PIN: u8 = 4;

/// GPIO-Pin für den Schiebetakt (SRCLK / SHCP)
/// Nur Dokumentation, verdrahtet in main.rs als `peripherals.GPIO5`
pub const SHIFT_CLOCK_GPIO_PIN: u8 = 5;

/// GPIO-Pin für das Übernehmen in die Ausgänge (RCLK / STCP)
/// Nur Dokumentation, verdrahtet in main.rs als `peripherals.GPIO6`
pub const SHIFT_LATCH_GPIO_PIN: u8 = 6;

/// Anzahl der Ausgänge hinter den Schieberegistern
pub const PORT_OUTPUT_COUNT: u16 = leds_core::config::MAX_LED_NUMBER;

// ============================================================================
// Demo-Ablauf
// ============================================================================

/// Text-Kommandos, die nach dem Start einmal abgespielt werden
/// Format siehe `LedCommand::try_from`
pub const DEMO_SCRIPT: &[&str] = &[
    "all on",
    "all off",
    "on 1",
    "on 16",
    "off 1",
    "off 16",
    "on 17", // außerhalb des Bereichs, wird ignoriert
    "all off",
];

/// Pause zwischen zwei Demo-Kommandos in Millisekunden
pub const DEMO_STEP_INTERVAL_MS: u64 = 500;

/// Schritt-Intervall des Lauflichts in Millisekunden
pub const RUNNING_LIGHT_INTERVAL_MS: u64 = 150;
