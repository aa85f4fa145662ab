//! Format interpreter and numeric encoders

use super::{Color, Level, Sink};

/// One formatting argument
///
/// Arguments are tagged so a template/argument mismatch cannot
/// reinterpret memory: a consuming directive that finds an argument of
/// the wrong kind consumes it and emits nothing, and a consuming
/// directive with no argument left emits itself literally.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Arg<'a> {
    /// A single character, consumed by `%c`
    Char(u8),
    /// A signed decimal value, consumed by `%d`
    Dec(i32),
    /// An unsigned decimal value, consumed by `%u`
    Udec(u32),
    /// A hexadecimal word, consumed by `%x`
    Hex(u32),
    /// A string emitted verbatim, consumed by `%s`
    Str(&'a str),
    /// A color selector, consumed by `%{`
    Color(Color),
}

/// Diagnostic console over a blocking byte sink
///
/// Owns the verbosity threshold: messages with a [`Level`] above the
/// threshold produce no output and consume no arguments. The default
/// threshold is 5 ([`Level::Debug`]), i.e. everything is emitted.
pub struct Console<S> {
    sink: S,
    threshold: u32,
}

impl<S: Sink> Console<S> {
    /// Creates a console emitting every message level
    pub fn new(sink: S) -> Self {
        Console {
            sink,
            threshold: Level::Debug as u32,
        }
    }

    /// Overwrites the verbosity threshold
    ///
    /// Any value is accepted; messages pass iff `level as u32` is less
    /// than or equal to the threshold.
    pub fn set_threshold(&mut self, threshold: u32) {
        self.threshold = threshold;
    }

    /// Returns the current verbosity threshold
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Releases the sink
    pub fn free(self) -> S {
        self.sink
    }

    fn enabled(&self, level: Level) -> bool {
        level as u32 <= self.threshold
    }

    /// Writes a single byte to the sink, without newline translation
    pub fn putb(&mut self, byte: u8) {
        self.sink.transmit(byte);
    }

    /// Renders a template against a tagged argument list
    ///
    /// See the [module documentation](super) for the directive table.
    /// Arguments are consumed strictly left to right, one per consuming
    /// directive. Surplus arguments are ignored.
    pub fn print(&mut self, level: Level, fmt: &str, args: &[Arg<'_>]) {
        if !self.enabled(level) {
            return;
        }

        let fmt = fmt.as_bytes();
        let mut args = args.iter();
        let mut i = 0;
        while i < fmt.len() {
            match fmt[i] {
                // Reencode newline with carriage return
                b'\n' => {
                    self.putb(b'\r');
                    self.putb(b'\n');
                }
                b'%' => {
                    i += 1;
                    // Extract format modifier (if any); absurdly long
                    // modifiers wrap rather than panic
                    let mut modifier: u32 = 0;
                    while i < fmt.len() && fmt[i].is_ascii_digit() {
                        modifier = modifier
                            .wrapping_mul(10)
                            .wrapping_add(u32::from(fmt[i] - b'0'));
                        i += 1;
                    }
                    let Some(&directive) = fmt.get(i) else {
                        // Trailing '%' with nothing to select
                        self.putb(b'%');
                        break;
                    };
                    self.directive(directive, modifier, &mut args);
                }
                byte => self.putb(byte),
            }
            i += 1;
        }
    }

    /// Writes a text string, canonicalizing newlines to CRLF
    pub fn puts(&mut self, level: Level, s: &str) {
        if !self.enabled(level) {
            return;
        }

        for &byte in s.as_bytes() {
            if byte == b'\n' {
                self.putb(b'\r');
            }
            self.putb(byte);
        }
    }

    /// Writes the escape sequence selecting `color`
    pub fn color(&mut self, color: Color) {
        for &byte in color.escape().as_bytes() {
            self.putb(byte);
        }
    }

    /// Writes the escape sequence restoring the default color
    pub fn color_reset(&mut self) {
        self.color(Color::Default);
    }

    fn directive(
        &mut self,
        directive: u8,
        modifier: u32,
        args: &mut core::slice::Iter<'_, Arg<'_>>,
    ) {
        match directive {
            // Insert a percent character
            b'%' => self.putb(b'%'),
            // Insert a single character
            b'c' => match args.next() {
                Some(Arg::Char(c)) => self.putb(*c),
                Some(_) => {}
                None => self.bad_directive(directive),
            },
            // Insert a decimal integer
            b'd' => match args.next() {
                Some(Arg::Dec(value)) => {
                    self.put_dec(*value as u32, true, modifier)
                }
                Some(_) => {}
                None => self.bad_directive(directive),
            },
            // Insert an unsigned decimal integer
            b'u' => match args.next() {
                Some(Arg::Udec(value)) => {
                    self.put_dec(*value, false, modifier)
                }
                Some(_) => {}
                None => self.bad_directive(directive),
            },
            // Insert an hexadecimal value
            b'x' => match args.next() {
                Some(Arg::Hex(value)) => self.put_hex(*value, modifier),
                Some(_) => {}
                None => self.bad_directive(directive),
            },
            // Insert a text string, bytes unmodified
            b's' => match args.next() {
                Some(Arg::Str(s)) => {
                    for &byte in s.as_bytes() {
                        self.putb(byte);
                    }
                }
                Some(_) => {}
                None => self.bad_directive(directive),
            },
            // Uncommon: Color change
            b'{' => match args.next() {
                Some(Arg::Color(color)) => self.color(*color),
                Some(_) => {}
                None => self.bad_directive(directive),
            },
            // Uncommon: Use default color
            b'}' => self.color_reset(),
            // Unknown directive, write it "as is"
            _ => self.bad_directive(directive),
        }
    }

    fn bad_directive(&mut self, directive: u8) {
        self.putb(b'%');
        self.putb(directive);
    }

    /// Writes the decimal representation of a 32-bit value
    ///
    /// With `signed` set, a value with the top bit set is written as `-`
    /// followed by its two's-complement magnitude; `i32::MIN` keeps its
    /// full 2147483648 magnitude. The output is left-padded with zeros to
    /// at least `pad` digits and is always at least one digit.
    pub fn put_dec(&mut self, value: u32, signed: bool, pad: u32) {
        let mut n = value;
        if signed && (n & (1 << 31)) != 0 {
            self.putb(b'-');
            n = (n as i32).wrapping_neg() as u32;
        }

        let mut decade: u32 = 1_000_000_000;
        let mut started = false;
        for i in 0..9 {
            // Emit once inside the value, or inside the padding window
            if n >= decade || started || pad >= 10 - i {
                self.putb(b'0' + (n / decade) as u8);
                n %= decade;
                started = true;
            }
            decade /= 10;
        }
        self.putb(b'0' + n as u8);
    }

    /// Writes the uppercase hexadecimal representation of a 32-bit word
    ///
    /// Leading zero nibbles are suppressed unless they cover bit
    /// positions below `bits`; at least one nibble is always written.
    pub fn put_hex(&mut self, value: u32, bits: u32) {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";

        let mut started = false;
        for shift in (0..8).rev().map(|n| n * 4) {
            let nibble = ((value >> shift) & 0xF) as usize;
            if bits > shift || nibble != 0 || started || shift == 0 {
                self.putb(HEX[nibble]);
                started = true;
            }
        }
    }
}
