//! Plain-text population history.
//!
//! Every generation is a header line followed by its genomes, one per line:
//!
//! ```text
//! #####        generation 1
//! nn<ss
//!   en^w
//! ```
//!
//! Genomes may start, end or consist of spaces, so lines are never trimmed.

use morpho_core::error::{HistoryError, Result};
use serde::Serialize;
use std::io::{BufRead, Write};

const HEADER_PREFIX: &str = "#####";
const HEADER_KEYWORD: &str = "generation";

/// The population stored for one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRecord {
    pub generation: u64,
    pub genomes: Vec<String>,
}

/// Append a generation to a history.
pub fn write_generation<W: Write>(writer: &mut W, generation: u64, population: &[String]) -> Result<()> {
    writeln!(writer, "{HEADER_PREFIX}        {HEADER_KEYWORD} {generation}")?;
    for genome in population {
        writeln!(writer, "{genome}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Read every generation of a history, in file order.
pub fn read_history<R: BufRead>(reader: R) -> Result<Vec<GenerationRecord>> {
    let mut records: Vec<GenerationRecord> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;

        if let Some(rest) = line.strip_prefix(HEADER_PREFIX) {
            let generation = parse_header(rest).ok_or_else(|| HistoryError::MalformedHeader {
                line: line_no,
                text: line.clone(),
            })?;
            records.push(GenerationRecord {
                generation,
                genomes: Vec::new(),
            });
            continue;
        }

        match records.last_mut() {
            Some(record) => record.genomes.push(line),
            None => return Err(HistoryError::OrphanGenome(line_no).into()),
        }
    }

    Ok(records)
}

fn parse_header(rest: &str) -> Option<u64> {
    let mut words = rest.split_whitespace();
    if words.next()? != HEADER_KEYWORD {
        return None;
    }
    let generation = words.next()?.parse().ok()?;
    words.next().is_none().then_some(generation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use morpho_core::error::MorphoError;
    use std::io::Cursor;

    fn pop(g: &[&str]) -> Vec<String> {
        g.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn header_matches_legacy_layout() {
        let mut out = Vec::new();
        write_generation(&mut out, 7, &pop(&["ab"])).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "#####        generation 7\nab\n");
    }

    #[test]
    fn spaces_survive_reading() {
        let mut out = Vec::new();
        write_generation(&mut out, 1, &pop(&["  n ", " ", "", "e<<"])).unwrap();
        write_generation(&mut out, 2, &pop(&["ww"])).unwrap();

        let records = read_history(Cursor::new(out)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].generation, 1);
        assert_eq!(records[0].genomes, pop(&["  n ", " ", "", "e<<"]));
        assert_eq!(records[1].genomes, pop(&["ww"]));
    }

    #[test]
    fn malformed_header_is_reported() {
        let err = read_history(Cursor::new("#####  generation x\nab\n")).unwrap_err();
        assert!(matches!(
            err,
            MorphoError::History(HistoryError::MalformedHeader { line: 1, .. })
        ));
    }

    #[test]
    fn genome_before_header_is_reported() {
        let err = read_history(Cursor::new("ab\n#####        generation 1\n")).unwrap_err();
        assert!(matches!(err, MorphoError::History(HistoryError::OrphanGenome(1))));
    }

    #[test]
    fn empty_history_has_no_generations() {
        assert!(read_history(Cursor::new("")).unwrap().is_empty());
    }
}
