//! Line-oriented element input shared by the numeric containers.
use std::io::BufRead;

/// Outcome of reading a single element line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine {
    Value(u64),
    /// The line was missing or did not hold a `u64`; the slot gets 0.
    Malformed,
}

impl ParsedLine {
    pub fn value(self) -> u64 {
        match self {
            ParsedLine::Value(v) => v,
            ParsedLine::Malformed => 0,
        }
    }

    pub fn is_malformed(self) -> bool {
        matches!(self, ParsedLine::Malformed)
    }
}

/// Read one line from `reader` and parse it as a `u64`.
///
/// Surrounding whitespace is ignored. End of input is reported as
/// [`ParsedLine::Malformed`] so a short batch still fills every slot.
pub fn read_u64_line<R: BufRead>(reader: &mut R) -> std::io::Result<ParsedLine> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(ParsedLine::Malformed);
    }
    Ok(match line.trim().parse::<u64>() {
        Ok(v) => ParsedLine::Value(v),
        Err(_) => ParsedLine::Malformed,
    })
}
