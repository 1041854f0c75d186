// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für ESP32-C6 Embedded Rust

fn main() {
    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // 1. defmt.x - defmt Logging-Support
    //    Definiert Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout
    //    Muss als LETZTES kommen
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: Zeigt Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // Wenn vom Linker aufgerufen (mit Error-Typ und Symbol-Name)
    if args.len() > 2 {
        let kind = &args[1];
        let what = &args[2];

        match (kind.as_str(), what.as_str()) {
            ("undefined-symbol", what) if what.starts_with("_defmt_") => {
                eprintln!();
                eprintln!("💡 `defmt` not found - make sure `defmt.x` is added as a linker script");
                eprintln!();
            }
            ("undefined-symbol", "_stack_start") => {
                eprintln!();
                eprintln!("💡 Is the linker script `linkall.x` missing?");
                eprintln!();
            }
            ("undefined-symbol", what) if what.starts_with("esp_rtos_") => {
                eprintln!();
                eprintln!("💡 `esp-rtos` not started - call `esp_rtos::start` before spawning tasks");
                eprintln!();
            }
            ("undefined-symbol", _) => (),
            _ => std::process::exit(1),
        }

        std::process::exit(0);
    }

    if let Ok(exe) = std::env::current_exe() {
        println!(
            "cargo:rustc-link-arg=--error-handling-script={}",
            exe.display()
        );
    }
}
