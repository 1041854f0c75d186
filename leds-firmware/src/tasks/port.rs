// LED Port Task - Steuert 16 LEDs über Schieberegister
use core::convert::TryFrom;

use defmt::{debug, error, info};
use embassy_time::{Duration, Timer};
use static_cell::StaticCell;

use leds_core::config::MIN_LED_NUMBER;

use crate::config::{DEMO_SCRIPT, DEMO_STEP_INTERVAL_MS, RUNNING_LIGHT_INTERVAL_MS};
use crate::hal::Hc595Writer;
use crate::{LedCommand, LedPort, PortRegister, PortWriter, next_led};

/// Virtuelles Port-Wort, gehört exklusiv dem Port-Task
static PORT_WORD: StaticCell<u16> = StaticCell::new();

/// Schreibt den aktuellen Registerwert auf die Hardware
fn flush<W, R>(writer: &mut W, port: &LedPort<R>)
where
    W: PortWriter<Word = u16>,
    R: PortRegister<Word = u16>,
{
    match writer.write(port.word()) {
        Ok(()) => debug!("{}", port.snapshot()),
        Err(e) => error!("Failed to write port: {}", e),
    }
}

/// LED Port Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// - Spielt zuerst das Demo-Skript aus `DEMO_SCRIPT` ab
/// - Läuft danach endlos als Lauflicht über alle LEDs
/// - Gibt nach jeder Änderung das Port-Wort über den Writer aus
///
/// # Parameter
/// - `writer`: Port Writer (Hardware oder Mock)
/// - `port`: LedPort über dem Register-Wort
pub async fn port_logic<W, R>(mut writer: W, mut port: LedPort<R>)
where
    W: PortWriter<Word = u16>,
    R: PortRegister<Word = u16>,
{
    flush(&mut writer, &port);

    for line in DEMO_SCRIPT {
        match LedCommand::try_from(*line) {
            Ok(command) => {
                info!("Demo command: {}", command);
                port.apply(command);
                flush(&mut writer, &port);
            }
            Err(e) => error!("Invalid demo command '{}': {}", *line, e),
        }

        Timer::after(Duration::from_millis(DEMO_STEP_INTERVAL_MS)).await;
    }

    info!("Demo finished, starting running light");

    // Lauflicht: genau eine LED an
    let mut led = MIN_LED_NUMBER;
    loop {
        port.turn_all_off();
        port.turn_on(led);
        flush(&mut writer, &port);

        led = next_led::<u16>(led);

        Timer::after(Duration::from_millis(RUNNING_LIGHT_INTERVAL_MS)).await;
    }
}

/// LED Port Task - Embassy Task für parallele Ausführung
///
/// Übernimmt die Hardware-Initialisierung und ruft dann die testbare
/// `port_logic()` Funktion auf.
///
/// # Parameter
/// - `data`: GPIO für die Datenleitung (SER)
/// - `clock`: GPIO für den Schiebetakt (SRCLK)
/// - `latch`: GPIO für das Latch (RCLK)
#[embassy_executor::task]
pub async fn port_task(
    data: esp_hal::peripherals::GPIO4<'static>,
    clock: esp_hal::peripherals::GPIO5<'static>,
    latch: esp_hal::peripherals::GPIO6<'static>,
) {
    let writer = Hc595Writer::new(data, clock, latch);

    // Port an das statische Wort binden (setzt alle LEDs auf aus)
    let port = LedPort::new(PORT_WORD.init(0));

    port_logic(writer, port).await
}
