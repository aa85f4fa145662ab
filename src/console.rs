//! Formatted diagnostic console
//!
//! The console renders template strings with embedded directives to a
//! blocking byte [`Sink`], without allocation or buffering. It is meant
//! for bring-up environments where `core::fmt` is too large to link or
//! where output must be byte-exact.
//!
//! # Usage
//!
//! ```ignore
//! use stm32h5xx_console::console::{AddrMode, Arg, Color, Console, Level};
//!
//! let mut con = Console::new(sink);
//!
//! con.print(Level::Info, "booted in %u ms\n", &[Arg::Udec(elapsed)]);
//! con.print(
//!     Level::Error,
//!     "%{bad block at %32x%}\n",
//!     &[Arg::Color(Color::Red), Arg::Hex(addr)],
//! );
//! con.dump(&flash[..64], AddrMode::Relative);
//! ```
//!
//! # Directives
//!
//! A directive is `%`, an optional decimal width modifier, and one
//! selector character:
//!
//! | selector | argument        | output |
//! |----------|-----------------|--------|
//! | `%`      | none            | literal `%` |
//! | `c`      | [`Arg::Char`]   | one character |
//! | `d`      | [`Arg::Dec`]    | signed decimal, zero-padded to the modifier |
//! | `u`      | [`Arg::Udec`]   | unsigned decimal, zero-padded to the modifier |
//! | `x`      | [`Arg::Hex`]    | uppercase hex, modifier = forced low-order bits |
//! | `s`      | [`Arg::Str`]    | string bytes, unmodified |
//! | `{`      | [`Arg::Color`]  | terminal color escape sequence |
//! | `}`      | none            | color reset escape sequence |
//!
//! Any other selector is not an error: the `%` and the character are
//! written out literally. Newlines in the template (but not in `%s`
//! arguments) are canonicalized to CRLF for terminal compatibility.
//!
//! Every message is gated by the console's verbosity threshold before any
//! formatting work happens: a message passes iff its [`Level`] is less
//! than or equal to the threshold.

use embedded_io as io;

pub mod color;
mod dump;
mod fmt;

pub use color::Color;
pub use dump::AddrMode;
pub use fmt::{Arg, Console};

/// Importance of a console message
///
/// Lower values are more important. [`Level::Always`] passes any
/// threshold the console will accept.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum Level {
    Always = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    Verbose = 4,
    Debug = 5,
}

/// Blocking byte sink the console writes through
///
/// `transmit` must block until the underlying transport has accepted the
/// byte. There is no error channel and no timeout: a transport that never
/// becomes ready stalls the caller, which matches UART back-pressure
/// semantics on a bring-up console.
pub trait Sink {
    fn transmit(&mut self, byte: u8);
}

/// [`Sink`] adapter for any [`embedded_io::Write`] byte stream
///
/// The sink contract has no error channel, so write errors are dropped.
pub struct WriteSink<W>(pub W);

impl<W: io::Write> Sink for WriteSink<W> {
    fn transmit(&mut self, byte: u8) {
        let _ = self.0.write_all(&[byte]);
    }
}

impl<W> WriteSink<W> {
    /// Releases the wrapped writer
    pub fn free(self) -> W {
        self.0
    }
}
