use std::io::BufRead;

use thiserror::Error;

use crate::error::InvalidArgument;
use crate::percolation::Percolation;

/// Failures while replaying a recorded open-site sequence. The connectivity
/// model itself still has exactly one error kind; this wraps it for the
/// file-feeding shim.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed input: {0}")]
    Malformed(String),
    #[error(transparent)]
    Invalid(#[from] InvalidArgument),
}

/// Replay the text format used by pre-recorded site sequences: the first
/// whitespace-separated token is the grid size n, every following pair of
/// tokens is a (row, col) to open, in file order.
pub fn replay<R: BufRead>(reader: R) -> Result<Percolation, ReplayError> {
    let mut tokens = Tokens::new(reader);

    let n = match tokens.next()? {
        Some(tok) => parse_coord(&tok, "grid size")?,
        None => return Err(ReplayError::Malformed("empty input".into())),
    };
    let mut model = Percolation::new(n)?;

    loop {
        let row = match tokens.next()? {
            Some(tok) => parse_coord(&tok, "row")?,
            None => break,
        };
        let col = match tokens.next()? {
            Some(tok) => parse_coord(&tok, "col")?,
            None => return Err(ReplayError::Malformed("dangling row with no col".into())),
        };
        model.open(row, col)?;
    }

    Ok(model)
}

fn parse_coord(tok: &str, what: &str) -> Result<usize, ReplayError> {
    tok.parse()
        .map_err(|_| ReplayError::Malformed(format!("{what}: expected a positive integer, got {tok:?}")))
}

/// Whitespace token stream over a buffered reader, one line at a time.
struct Tokens<R> {
    reader: R,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    fn next(&mut self) -> Result<Option<String>, ReplayError> {
        loop {
            if let Some(tok) = self.pending.pop() {
                return Ok(Some(tok));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            // Reversed so pop() yields tokens in line order.
            self.pending = line.split_whitespace().rev().map(str::to_owned).collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_a_percolating_sequence() {
        let input = "3\n1 2\n2 2\n3 2\n";
        let model = replay(input.as_bytes()).expect("valid replay");
        assert_eq!(model.number_of_open_sites(), 3);
        assert!(model.percolates());
        assert!(model.is_full(3, 2).unwrap());
    }

    #[test]
    fn tolerates_arbitrary_whitespace() {
        let input = "2  1 1\n\n  2   1";
        let model = replay(input.as_bytes()).expect("valid replay");
        assert_eq!(model.number_of_open_sites(), 2);
        assert!(model.percolates());
    }

    #[test]
    fn rejects_empty_and_dangling_input() {
        assert!(matches!(replay("".as_bytes()), Err(ReplayError::Malformed(_))));
        assert!(matches!(replay("3 1".as_bytes()), Err(ReplayError::Malformed(_))));
    }

    #[test]
    fn rejects_garbage_tokens_and_bad_coords() {
        assert!(matches!(replay("3 one 2".as_bytes()), Err(ReplayError::Malformed(_))));
        assert!(matches!(replay("3 4 1".as_bytes()), Err(ReplayError::Invalid(_))));
    }
}
