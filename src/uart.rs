//! Blocking UART transport for the diagnostic console
//!
//! This module drives a U(S)ART peripheral as the console's byte sink:
//! transmission busy-waits on the TX FIFO and never fails, reception is a
//! non-blocking poll. That is the whole interface a bring-up console
//! needs; interrupt- or DMA-driven transfers are out of scope.
//!
//! The driver does not touch the clock tree or the GPIO alternate
//! functions. The caller enables and selects the peripheral's kernel
//! clock, routes the pins, then hands the peripheral over together with
//! the kernel clock frequency:
//!
//! ```ignore
//! use stm32h5xx_console::console::Console;
//! use stm32h5xx_console::prelude::*;
//!
//! let uart = dp.USART3.console_uart(115_200.bps(), ker_ck).unwrap();
//! let mut con = Console::new(uart);
//! ```
//!
//! The transport also implements [`embedded_io::Write`] so it can carry
//! non-console byte traffic.

use core::cell::UnsafeCell;
use core::ops::Deref;
use core::ptr;

use embedded_io as io;
#[cfg(feature = "log")]
use log::debug;

use crate::console::{Console, Sink};
use crate::stm32::usart1;
use crate::stm32::usart1::cr1::{M0, M1, PCE, PS};
use crate::stm32::usart1::presc::PRESCALER;
use crate::time::Hertz;

pub mod config;

mod uart_def;

pub use config::{Config, InvalidConfig, Parity, StopBits};

/// A U(S)ART peripheral usable as console transport
pub trait Instance: crate::Sealed + Deref<Target = usart1::RegisterBlock> {}

/// Console transport over a U(S)ART peripheral
pub struct ConsoleUart<USART> {
    usart: USART,
}

pub trait ConsoleUartExt<USART: Instance>: Sized {
    /// Configures the peripheral as a console transport
    ///
    /// `clk` is the frequency of the kernel clock feeding the
    /// peripheral, which must already be enabled and selected.
    fn console_uart(
        self,
        config: impl Into<Config>,
        clk: Hertz,
    ) -> Result<ConsoleUart<USART>, InvalidConfig>;
}

impl<USART: Instance> ConsoleUartExt<USART> for USART {
    fn console_uart(
        self,
        config: impl Into<Config>,
        clk: Hertz,
    ) -> Result<ConsoleUart<USART>, InvalidConfig> {
        ConsoleUart::new(self, config, clk)
    }
}

/// Calculate the prescaler, oversampling mode and baud rate divisor
///
/// If the baud rate is low enough that BRR would be greater than 65535,
/// a prescaler divides down the kernel clock frequency by a power of 2.
/// 16x oversampling is used whenever the prescaled kernel clock allows
/// it, with a fallback to 8x for baud rates close to the kernel clock.
fn calc_baud(
    ker_ck: Hertz,
    baudrate: Hertz,
) -> Result<(PRESCALER, bool, u16), InvalidConfig> {
    let mut div = ker_ck / baudrate;
    div >>= u16::BITS;
    let (div, presc) = match div {
        0 => (1, PRESCALER::Div1),
        1 => (2, PRESCALER::Div2),
        2..=3 => (4, PRESCALER::Div4),
        4..=5 => (6, PRESCALER::Div6),
        6..=7 => (8, PRESCALER::Div8),
        8..=9 => (10, PRESCALER::Div10),
        10..=11 => (12, PRESCALER::Div12),
        12..=15 => (16, PRESCALER::Div16),
        16..=31 => (32, PRESCALER::Div32),
        32..=63 => (64, PRESCALER::Div64),
        64..=127 => (128, PRESCALER::Div128),
        _ => (256, PRESCALER::Div256),
    };

    let ker_ck_presc = ker_ck / div;

    // The USARTDIV fraction occupies 4 bits, so the divisor is computed
    // against 16 times the target rate and, when oversampling by 8,
    // USARTDIV[3:0] is shifted right by one. (See RM0481 Rev 2
    // Section 60.5.8)
    let (over8, usartdiv) = if (ker_ck_presc / 16) >= baudrate {
        // We have the ability to oversample to 16 bits, take
        // advantage of it.
        let div = (ker_ck_presc + (baudrate / 2)) / baudrate;
        (false, div)
    } else if (ker_ck_presc / 8) >= baudrate {
        // We are close enough to the kernel clock where we can only
        // oversample 8.
        let div = ((ker_ck_presc * 2) + (baudrate / 2)) / baudrate;
        let frac = div & 0xF;
        let div = (div & !0xF) | (frac >> 1);
        (true, div)
    } else {
        return Err(InvalidConfig);
    };

    #[cfg(feature = "log")]
    {
        let actual = ker_ck_presc / usartdiv;
        debug!("UART: Kernel clock: {ker_ck}; Prescaler: {div}; Over8: {over8}; BRR: {usartdiv:#X}; Baudrate: {actual}");
    }

    Ok((presc, over8, usartdiv as u16))
}

impl<USART: Instance> ConsoleUart<USART> {
    fn new(
        usart: USART,
        config: impl Into<Config>,
        clk: Hertz,
    ) -> Result<Self, InvalidConfig> {
        let mut uart = ConsoleUart { usart };
        uart.usart.cr1().reset();
        uart.configure(&config.into(), clk)?;
        Ok(uart)
    }

    /// Runs the UART configuration process
    ///
    /// The peripheral must be disabled when called.
    fn configure(
        &mut self,
        config: &Config,
        clk: Hertz,
    ) -> Result<(), InvalidConfig> {
        let (presc, over8, brr) = calc_baud(clk, config.baudrate)?;

        self.usart.presc().write(|w| w.prescaler().variant(presc));
        self.usart.brr().write(|w| w.brr().set(brr));

        // Reset CR3 to disable advanced UART features
        self.usart.cr3().reset();

        self.usart.cr2().write(|w| match config.stop_bits {
            StopBits::Stop0p5 => w.stop().stop0p5(),
            StopBits::Stop1 => w.stop().stop1(),
            StopBits::Stop1p5 => w.stop().stop1p5(),
            StopBits::Stop2 => w.stop().stop2(),
        });

        // Enable transmission and receiving, 8-bit frame
        self.usart.cr1().modify(|_, w| {
            w.fifoen()
                .enabled()
                .over8()
                .bit(over8)
                .ue()
                .enabled()
                .te()
                .enabled()
                .re()
                .enabled()
                .m1()
                .variant(M1::M0)
                .m0()
                .variant(M0::Bit8)
                .pce()
                .variant(match config.parity {
                    Parity::ParityNone => PCE::Disabled,
                    _ => PCE::Enabled,
                })
                .ps()
                .variant(match config.parity {
                    Parity::ParityOdd => PS::Odd,
                    _ => PS::Even,
                })
        });

        Ok(())
    }

    /// Sends a single byte, blocking until the TX FIFO accepts it
    pub fn putb(&mut self, byte: u8) {
        while !self.is_tx_empty() {}
        self.write_data(byte);
    }

    /// Returns one received byte, if any is waiting
    pub fn getb(&mut self) -> Option<u8> {
        if self.usart.isr().read().rxfne().is_data_ready() {
            Some(self.read_data())
        } else {
            None
        }
    }

    /// Wraps the transport in a [`Console`]
    pub fn console(self) -> Console<Self> {
        Console::new(self)
    }

    /// Releases the UART peripheral
    pub fn free(self) -> USART {
        // Wait until both TXFIFO and shift register are empty
        while self.usart.isr().read().tc().bit_is_clear() {}

        self.usart
    }

    /// Returns a reference to the inner peripheral
    pub fn inner(&self) -> &USART {
        &self.usart
    }

    /// Return true if the tx fifo is empty (and can accept data)
    fn is_tx_empty(&self) -> bool {
        self.usart.isr().read().txfe().is_empty()
    }

    fn is_transmit_complete(&self) -> bool {
        self.usart.isr().read().tc().bit_is_set()
    }

    fn read_data(&mut self) -> u8 {
        // NOTE(read_volatile) see `write_volatile` below
        unsafe { ptr::read_volatile(self.usart.rdr() as *const _ as *const u8) }
    }

    fn write_data(&mut self, byte: u8) {
        // NOTE(unsafe) atomic write to stateless register
        // NOTE(write_volatile) 8-bit write that's not possible through the svd2rust API
        unsafe {
            let tdr = self.usart.tdr() as *const _ as *const UnsafeCell<u8>;
            ptr::write_volatile(UnsafeCell::raw_get(tdr), byte);
        }
    }
}

impl<USART: Instance> Sink for ConsoleUart<USART> {
    fn transmit(&mut self, byte: u8) {
        self.putb(byte);
    }
}

/*
 * HAL Implementations
 */

impl<USART: Instance> io::ErrorType for ConsoleUart<USART> {
    type Error = core::convert::Infallible;
}

impl<USART: Instance> io::Write for ConsoleUart<USART> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        for &byte in buf {
            self.putb(byte);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        while !self.is_transmit_complete() {}
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_baud() {
        // The bring-up value: 115200 baud from a 32 MHz kernel clock
        let (presc, over8, brr) =
            calc_baud(Hertz::MHz(32), Hertz::from_raw(115_200)).unwrap();
        assert_eq!(presc, PRESCALER::Div1);
        assert!(!over8);
        assert_eq!(brr, 278);

        // 2400 baud from 250 MHz overflows BRR and needs the prescaler
        let (presc, over8, brr) =
            calc_baud(Hertz::MHz(250), Hertz::from_raw(2_400)).unwrap();
        assert_eq!(presc, PRESCALER::Div2);
        assert!(!over8);
        assert_eq!(brr, 52083);
    }

    #[test]
    fn test_calc_baud_oversample_fallback() {
        // Within 8x but not 16x oversampling range
        let (_, over8, _) =
            calc_baud(Hertz::MHz(8), Hertz::from_raw(1_000_000)).unwrap();
        assert!(over8);
    }

    #[test]
    fn test_calc_baud_unreachable() {
        assert!(calc_baud(Hertz::MHz(1), Hertz::from_raw(1_000_000)).is_err());
    }
}
