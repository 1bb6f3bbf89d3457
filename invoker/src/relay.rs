use std::io::{BufRead, Write};

/// Copies `reader` into `writer` one line at a time, flushing after each
/// line so output shows up while the child is still running. Bytes are
/// passed through unchanged, line endings included.
///
/// Returns the number of lines relayed.
pub fn relay_lines<R, W>(mut reader: R, mut writer: W) -> std::io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut line = Vec::new();
    let mut lines = 0;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        writer.write_all(&line)?;
        writer.flush()?;
        lines += 1;
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn passes_lines_through() {
        let mut out = Vec::<u8>::new();
        let input = Cursor::new("ERROR: 0:1: '' : syntax error\nfoo\n");
        let lines = relay_lines(input, &mut out).unwrap();
        assert_eq!(lines, 2);
        assert_eq!(out, b"ERROR: 0:1: '' : syntax error\nfoo\n");
    }

    #[test]
    fn keeps_unterminated_tail() {
        let mut out = Vec::<u8>::new();
        let lines = relay_lines(Cursor::new("shader.vert\r\nno newline"), &mut out).unwrap();
        assert_eq!(lines, 2);
        assert_eq!(out, b"shader.vert\r\nno newline");
    }

    #[test]
    fn non_utf8_is_untouched() {
        let mut out = Vec::<u8>::new();
        relay_lines(Cursor::new(vec![0xff, 0xfe, b'\n']), &mut out).unwrap();
        assert_eq!(out, [0xff, 0xfe, b'\n']);
    }

    #[derive(Default)]
    struct Flushes {
        written: Vec<u8>,
        flushed: Vec<usize>,
    }

    impl Write for Flushes {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.flushed.push(self.written.len());
            Ok(())
        }
    }

    #[test]
    fn flushes_every_line() {
        let mut out = Flushes::default();
        let input = Cursor::new("shader.vert\nERROR: 0:3: 'x' : undeclared identifier\nend");
        let lines = relay_lines(input, &mut out).unwrap();

        assert_eq!(lines, 3);
        assert_eq!(out.flushed, vec![12, 52, 55]);
    }

    #[test]
    fn empty_stream() {
        let mut out = Vec::<u8>::new();
        assert_eq!(relay_lines(Cursor::new(""), &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }
}
