//! Tab-separated `index<TAB>value` rows.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

/// Writes `index\tvalue` rows.
pub struct TsvWriter<W: Write> {
    out: W,
    rows: usize,
}

impl<W: Write> TsvWriter<W> {
    pub fn new(out: W) -> Self {
        TsvWriter { out, rows: 0 }
    }

    pub fn write_row(&mut self, index: u64, value: &str) -> Result<()> {
        writeln!(self.out, "{}\t{}", index, value).context("writing TSV row")?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.flush().context("flushing TSV output")?;
        Ok(self.out)
    }
}

/// Read `index\tvalue` rows, skipping blank lines.
pub fn read_rows<R: BufRead>(input: R) -> Result<Vec<(u64, String)>> {
    let mut rows = Vec::new();
    for (n, line) in input.lines().enumerate() {
        let line = line.context("reading TSV input")?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let Some((index, value)) = line.split_once('\t') else {
            bail!("line {}: expected index<TAB>value", n + 1);
        };
        let index = index
            .trim()
            .parse::<u64>()
            .with_context(|| format!("line {}: invalid index {:?}", n + 1, index))?;
        rows.push((index, value.trim().to_string()));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_rows() {
        let mut writer = TsvWriter::new(Vec::new());
        writer.write_row(0, "abc").unwrap();
        writer.write_row(12, "def").unwrap();
        assert_eq!(writer.rows(), 2);

        let out = writer.finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0\tabc\n12\tdef\n");
    }

    #[test]
    fn test_read_rows() {
        let input = "0\tabc\r\n\n7\t def \n";
        let rows = read_rows(input.as_bytes()).unwrap();
        assert_eq!(rows, vec![(0, "abc".to_string()), (7, "def".to_string())]);
    }

    #[test]
    fn test_read_rows_rejects_bad_lines() {
        assert!(read_rows("no tab here\n".as_bytes()).is_err());
        assert!(read_rows("-1\tabc\n".as_bytes()).is_err());
    }
}
