//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Register- und Hardware-Zugriff
//! ohne konkrete Implementierung.

use core::cell::Cell;
use core::fmt;
use core::ops::{BitAnd, BitOr, Not};

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// LED-Nummer liegt außerhalb von `1..=WIDTH`
    OutOfRange(u16),
    /// Schreiben auf die Hardware ist fehlgeschlagen
    WriteFailed,
    /// Text-Kommando konnte nicht geparst werden
    InvalidCommand,
}

impl fmt::Display for LedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedError::OutOfRange(led) => write!(f, "LED {led} out of range"),
            LedError::WriteFailed => write!(f, "port write failed"),
            LedError::InvalidCommand => write!(f, "invalid LED command"),
        }
    }
}

/// Registerbreite eines LED-Ports
///
/// Ein Bit pro LED. Implementiert für `u8`, `u16`, `u32` und `u64`;
/// `u16` ist der Standard-Port.
pub trait PortWord:
    Copy
    + Eq
    + fmt::Debug
    + BitOr<Output = Self>
    + BitAnd<Output = Self>
    + Not<Output = Self>
{
    /// Anzahl der LEDs (= Bits) im Wort
    const WIDTH: u16;
    /// Alle Bits gesetzt
    const ALL_ON: Self;
    /// Alle Bits gelöscht
    const ALL_OFF: Self;

    /// Wort mit genau einem gesetzten Bit an Position `index` (0-basiert)
    ///
    /// Aufrufer garantieren `index < WIDTH`.
    fn single_bit(index: u16) -> Self;

    /// Anzahl gesetzter Bits
    fn count_on(self) -> u32;
}

macro_rules! impl_port_word {
    ($($ty:ty),*) => {
        $(
            impl PortWord for $ty {
                const WIDTH: u16 = <$ty>::BITS as u16;
                const ALL_ON: Self = <$ty>::MAX;
                const ALL_OFF: Self = 0;

                #[inline]
                fn single_bit(index: u16) -> Self {
                    1 << index
                }

                #[inline]
                fn count_on(self) -> u32 {
                    self.count_ones()
                }
            }
        )*
    };
}

impl_port_word!(u8, u16, u32, u64);

/// Trait für den Zugriff auf das Port-Register
///
/// Abstrahiert das Wort, dessen Bits die LEDs darstellen. Der `LedPort`
/// besitzt den Speicher nicht, er hält nur einen Handle darauf.
///
/// # Implementierungen
/// - **Speicher:** `&mut W` und `&Cell<W>`
/// - **Hardware:** [`VolatileRegister`] (memory-mapped Register)
/// - **Testing:** MockRegister (in leds-tests)
pub trait PortRegister {
    type Word: PortWord;

    /// Liest den aktuellen Registerwert
    fn read(&self) -> Self::Word;

    /// Schreibt einen neuen Registerwert
    fn write(&mut self, value: Self::Word);
}

impl<W: PortWord> PortRegister for &mut W {
    type Word = W;

    fn read(&self) -> W {
        **self
    }

    fn write(&mut self, value: W) {
        **self = value;
    }
}

impl<W: PortWord> PortRegister for &Cell<W> {
    type Word = W;

    fn read(&self) -> W {
        self.get()
    }

    fn write(&mut self, value: W) {
        self.set(value);
    }
}

/// Memory-mapped Port-Register
///
/// Jeder Zugriff ist ein einzelner volatile Read bzw. Write. Eine
/// Read-Modify-Write Sequenz des `LedPort` ist damit **nicht**
/// interrupt-sicher; bei Zugriff aus ISR und Hauptprogramm muss der Aufrufer
/// selbst serialisieren.
#[derive(Debug)]
pub struct VolatileRegister<W: PortWord> {
    ptr: *mut W,
}

impl<W: PortWord> VolatileRegister<W> {
    /// Erstellt einen Handle auf das Register an `ptr`
    ///
    /// # Safety
    /// `ptr` muss für die gesamte Lebensdauer des Handles gültig, korrekt
    /// ausgerichtet und für volatile Lese- und Schreibzugriffe freigegeben
    /// sein. Kein anderer Handle darf gleichzeitig auf das Register schreiben.
    pub unsafe fn new(ptr: *mut W) -> Self {
        Self { ptr }
    }

    /// Adresse des Registers
    pub fn as_ptr(&self) -> *mut W {
        self.ptr
    }
}

impl<W: PortWord> PortRegister for VolatileRegister<W> {
    type Word = W;

    fn read(&self) -> W {
        // SAFETY: Gültigkeit von `ptr` wird in `new` zugesichert.
        unsafe { core::ptr::read_volatile(self.ptr) }
    }

    fn write(&mut self, value: W) {
        // SAFETY: Gültigkeit von `ptr` wird in `new` zugesichert.
        unsafe { core::ptr::write_volatile(self.ptr, value) }
    }
}

/// Trait für die Ausgabe des Port-Worts auf Hardware
///
/// Abstrahiert z.B. ein Schieberegister (74HC595) hinter den LEDs.
///
/// # Implementierungen
/// - **Production:** Hc595Writer (leds-firmware)
/// - **Testing:** MockPortWriter (in-memory Mock)
pub trait PortWriter {
    /// Registerbreite, die der Writer ausgeben kann
    type Word: PortWord;

    /// Schreibt das komplette Port-Wort auf die Ausgänge
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, word: Self::Word) -> Result<(), LedError>;
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::OutOfRange(led) => defmt::write!(fmt, "LED {} out of range", led),
            LedError::WriteFailed => defmt::write!(fmt, "Port write failed"),
            LedError::InvalidCommand => defmt::write!(fmt, "Invalid command"),
        }
    }
}
