use crate::time::Hertz;

/// The parity bit appended to each data word
///
/// Parity bits are included in the word length: the frame stays 8 data
/// bits wide, so enabling parity leaves 7 payload bits per word.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    ParityNone,
    ParityEven,
    ParityOdd,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    #[doc = "1 stop bit"]
    Stop1,
    #[doc = "0.5 stop bits"]
    Stop0p5,
    #[doc = "2 stop bits"]
    Stop2,
    #[doc = "1.5 stop bits"]
    Stop1p5,
}

/// A structure for specifying the console UART configuration
///
/// This structure uses the builder pattern to generate the configuration:
///
/// ```
/// use stm32h5xx_console::time::Hertz;
/// use stm32h5xx_console::uart::config::Config;
///
/// let config = Config::new(Hertz::from_raw(115_200)).parity_odd();
/// ```
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub baudrate: Hertz,
    pub parity: Parity,
    pub stop_bits: StopBits,
}

impl Config {
    /// Create a default configuration: 8 data bits, 1 stop bit, no parity
    pub fn new(baudrate: Hertz) -> Self {
        Config {
            baudrate,
            parity: Parity::ParityNone,
            stop_bits: StopBits::Stop1,
        }
    }

    pub fn baudrate(mut self, baudrate: Hertz) -> Self {
        self.baudrate = baudrate;
        self
    }

    pub fn parity_none(mut self) -> Self {
        self.parity = Parity::ParityNone;
        self
    }

    pub fn parity_even(mut self) -> Self {
        self.parity = Parity::ParityEven;
        self
    }

    pub fn parity_odd(mut self) -> Self {
        self.parity = Parity::ParityOdd;
        self
    }

    /// Specify the number of stop bits
    pub fn stop_bits(mut self, stopbits: StopBits) -> Self {
        self.stop_bits = stopbits;
        self
    }
}

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidConfig;

impl Default for Config {
    fn default() -> Config {
        Self::new(Hertz::from_raw(115_200)) // 115k2 baud
    }
}

impl From<Hertz> for Config {
    fn from(baudrate: Hertz) -> Config {
        Self::new(baudrate)
    }
}
