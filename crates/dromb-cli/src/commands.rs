use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use dromb_containers::math::{MatrixULong, VectorULong};
use dromb_containers::rhombus::Rhombus;

use crate::demo::describe_rhombus;

/// Build a vector of `len` elements, overwrite it from `input` one line per
/// element, and print the result. Bad lines show up as `Error code: -1`.
pub fn read_vector<R: BufRead, W: Write>(
    len: usize,
    fill: u64,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut v = VectorULong::from_elem(len, fill)?;
    v.read_elements(input)
        .context("Failed to read vector elements")?;
    writeln!(out, "{}", v.report())?;
    Ok(())
}

/// Parse and describe each `d1,d2,color` entry; the first malformed entry
/// aborts with an error.
pub fn describe_rhombuses<W: Write>(entries: &[String], out: &mut W) -> Result<()> {
    for entry in entries {
        let rhombus = entry
            .parse::<Rhombus>()
            .with_context(|| format!("Invalid rhombus: {:?}", entry))?;
        describe_rhombus(out, &rhombus)?;
        writeln!(out, "As string: {}", rhombus)?;
    }
    Ok(())
}

pub fn print_matrix<W: Write>(rows: usize, cols: usize, fill: u64, out: &mut W) -> Result<()> {
    let m = MatrixULong::filled(rows, cols, fill)?;
    write!(out, "{}", m)?;
    writeln!(out, "Error code: {}", m.error_code())?;
    Ok(())
}
