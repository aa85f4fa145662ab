//! Memory dump formatting

use super::{Arg, Console, Level, Sink};

/// Per-line address header of a memory dump
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddrMode {
    /// No header
    None,
    /// Address of the line's first byte
    Absolute,
    /// Offset of the line's first byte from the start of the dump
    Relative,
}

impl<S: Sink> Console<S> {
    /// Dumps a byte slice, 16 bytes per line
    ///
    /// Each byte is written as two uppercase hex digits, bytes separated
    /// by single spaces. With [`AddrMode::Absolute`] or
    /// [`AddrMode::Relative`] every line is prefixed by an 8-digit hex
    /// address header.
    ///
    /// The dump itself is not gated by the verbosity threshold; callers
    /// wanting a conditional dump check the threshold themselves.
    pub fn dump(&mut self, data: &[u8], mode: AddrMode) {
        let base = data.as_ptr() as usize as u32;

        let mut offset = 0;
        while offset < data.len() {
            match mode {
                AddrMode::Absolute => self.print(
                    Level::Always,
                    "%32x ",
                    &[Arg::Hex(base.wrapping_add(offset as u32))],
                ),
                AddrMode::Relative => self.print(
                    Level::Always,
                    "%32x ",
                    &[Arg::Hex(offset as u32)],
                ),
                AddrMode::None => {}
            }

            let end = usize::min(offset + 16, data.len());
            for (i, &byte) in data[offset..end].iter().enumerate() {
                self.put_hex(u32::from(byte), 8);
                // A space follows every byte but the dump's last
                if offset + i + 1 < data.len() {
                    self.putb(b' ');
                }
            }
            self.putb(b'\n');

            offset = end;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fmt::tests::{console, output};
    use super::AddrMode;

    #[test]
    fn dump_empty() {
        let mut con = console();
        con.dump(&[], AddrMode::Absolute);
        assert!(con.free().0.is_empty());
    }

    #[test]
    fn dump_single_line() {
        let mut con = console();
        con.dump(&[0x00, 0x0F, 0xA5], AddrMode::None);
        assert_eq!(output(con), "00 0F A5\n");
    }

    #[test]
    fn dump_full_line_keeps_separator() {
        let data: Vec<u8> = (0..17).collect();
        let mut con = console();
        con.dump(&data, AddrMode::None);
        // The 16th byte is followed by a separator because the dump
        // continues on the next line
        assert_eq!(
            output(con),
            "00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F \n10\n"
        );
    }

    #[test]
    fn dump_relative_headers() {
        let data = [0xAAu8; 17];
        let mut con = console();
        con.dump(&data, AddrMode::Relative);
        let text = output(con);
        let lines: Vec<&str> = text.split_terminator('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("00000000 AA"));
        assert!(lines[1].starts_with("00000010 AA"));
        assert_eq!(lines[1], "00000010 AA");
    }

    #[test]
    fn dump_absolute_headers() {
        let data = [0x42u8; 17];
        let base = data.as_ptr() as usize as u32;
        let mut con = console();
        con.dump(&data, AddrMode::Absolute);
        let text = output(con);
        let lines: Vec<&str> = text.split_terminator('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(&format!("{:08X} ", base)));
        assert!(lines[1].starts_with(&format!("{:08X} ", base + 16)));
    }

    #[test]
    fn dump_line_shape() {
        let data = [0u8; 40];
        let mut con = console();
        con.dump(&data, AddrMode::Relative);
        let text = output(con);
        let lines: Vec<&str> = text.split_terminator('\n').collect();
        assert_eq!(lines.len(), 3);
        // 8 digit header + space + 16 bytes with separators
        assert_eq!(lines[0].len(), 8 + 1 + 16 * 3);
        // Final line holds the remaining 8 bytes, no trailing space
        assert_eq!(lines[2].len(), 8 + 1 + 8 * 3 - 1);
    }

    #[test]
    fn dump_ignores_threshold() {
        let mut con = console();
        con.set_threshold(0);
        con.dump(&[0x01], AddrMode::Relative);
        assert_eq!(output(con), "00000000 01\n");
    }
}
