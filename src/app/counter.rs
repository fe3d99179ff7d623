use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Counts `\n` terminated lines. A non-empty final line without a terminator
/// still counts; an empty file has zero lines.
pub fn count_lines(path: &Path) -> io::Result<usize> {
    let file = File::open(path)?;
    count_lines_in(BufReader::new(file))
}

fn count_lines_in<R: BufRead>(mut reader: R) -> io::Result<usize> {
    let mut lines = 0;
    let mut last = None;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }
        lines += buf.iter().filter(|&&b| b == b'\n').count();
        last = buf.last().copied();
        let len = buf.len();
        reader.consume(len);
    }

    if matches!(last, Some(b) if b != b'\n') {
        lines += 1;
    }
    Ok(lines)
}
