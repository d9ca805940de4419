//! Operator walkthrough: builds containers and prints the result of every
//! operator, section by section.
use anyhow::Result;
use std::io::Write;

use dromb_containers::config::{DemoConfig, Section};
use dromb_containers::math::{MatrixULong, VectorULong};
use dromb_containers::rhombus::Rhombus;

use crate::util::yes_no;

pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    for section in config.selected_sections() {
        log::debug!("[dromb] Running section: {}", section);
        writeln!(out, "== {} ==", section)?;
        match section {
            Section::Constructors => constructors(config, out)?,
            Section::Indexer => indexer(config, out)?,
            Section::Unary => unary(config, out)?,
            Section::Arithmetic => arithmetic(config, out)?,
            Section::Bitwise => bitwise(config, out)?,
            Section::Comparison => comparison(config, out)?,
            Section::Rhombus => rhombuses(config, out)?,
            Section::Matrix => matrix(config, out)?,
        }
        writeln!(out)?;
    }
    Ok(())
}

fn print_vector<W: Write>(out: &mut W, label: &str, v: &VectorULong) -> Result<()> {
    writeln!(out, "{}:", label)?;
    writeln!(out, "{}", v.report())?;
    Ok(())
}

fn constructors<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    let v1 = VectorULong::new();
    print_vector(out, "v1 = VectorULong::new()", &v1)?;

    let v2 = VectorULong::zeros(config.vector_len)?;
    print_vector(out, &format!("v2 = zeros({})", config.vector_len), &v2)?;

    let v3 = VectorULong::from_elem(config.vector_len, config.fill_value)?;
    let label = format!("v3 = from_elem({}, {})", config.vector_len, config.fill_value);
    print_vector(out, &label, &v3)?;

    writeln!(out, "Live vectors: {}", VectorULong::live_count())?;
    if let Err(e) = VectorULong::zeros(0) {
        writeln!(out, "zeros(0) failed: {}", e)?;
    }
    Ok(())
}

fn indexer<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    let mut v = VectorULong::from_elem(config.vector_len, config.fill_value)?;
    v.set(0, 7);
    writeln!(out, "v[0] = {} (error code {})", v.get(0), v.error_code())?;

    let bad = config.vector_len + 7;
    v.set(bad, 100);
    writeln!(out, "set v[{}], error code: {}", bad, v.error_code())?;
    writeln!(out, "v[{}] = {} (error code {})", bad, v.get(bad), v.error_code())?;

    v.assign(10);
    print_vector(out, "after assign(10)", &v)?;
    Ok(())
}

fn unary<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    let mut v = VectorULong::from_elem(config.vector_len, config.fill_value)?;
    print_vector(out, "v.increment()", &v.increment())?;
    print_vector(out, "v.decrement()", &v.decrement())?;
    writeln!(out, "v is truthy: {}", yes_no(v.is_truthy()))?;

    v.assign(0);
    print_vector(out, "v.decrement() after assign(0)", &v.decrement())?;
    writeln!(out, "v is truthy after assign(0): {}", yes_no(v.is_truthy()))?;
    writeln!(out, "logical_not(v): {}", yes_no(v.logical_not()))?;

    v.assign(5);
    print_vector(out, "!v", &!&v)?;
    Ok(())
}

fn arithmetic<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    let a = VectorULong::from_elem(config.vector_len, 2)?;
    let b = VectorULong::from_elem(config.vector_len, 3)?;

    print_vector(out, "a + b", &(&a + &b))?;
    print_vector(out, "a + 5", &(&a + 5))?;
    print_vector(out, "a - b", &(&a - &b))?;
    print_vector(out, "a - 1", &(&a - 1))?;
    print_vector(out, "a * b", &(&a * &b))?;
    print_vector(out, "a * 3", &(&a * 3))?;
    print_vector(out, "a / b", &(&a / &b)?)?;
    print_vector(out, "a / 2", &(&a / 2)?)?;
    print_vector(out, "a % b", &(&a % &b)?)?;
    print_vector(out, "a % 3", &(&a % 3)?)?;

    match &a / 0 {
        Ok(v) => print_vector(out, "a / 0", &v)?,
        Err(e) => writeln!(out, "a / 0 failed: {}", e)?,
    }
    Ok(())
}

fn bitwise<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    let a = VectorULong::from_elem(config.vector_len, 6)?;
    let b = VectorULong::from_elem(config.vector_len, 3)?;

    print_vector(out, "a | b", &(&a | &b))?;
    print_vector(out, "a | 4", &(&a | 4))?;
    print_vector(out, "a ^ b", &(&a ^ &b))?;
    print_vector(out, "a ^ 4", &(&a ^ 4))?;
    print_vector(out, "a & b", &(&a & &b))?;
    print_vector(out, "a & 4", &(&a & 4))?;
    print_vector(out, "a >> b", &(&a >> &b))?;
    print_vector(out, "a >> 2", &(&a >> 2))?;
    print_vector(out, "a << b", &(&a << &b))?;
    print_vector(out, "a << 2", &(&a << 2))?;
    Ok(())
}

fn comparison<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    let a = VectorULong::from_elem(config.vector_len, 5)?;
    let mut b = VectorULong::from_elem(config.vector_len, 5)?;
    writeln!(out, "a == b: {}", a == b)?;
    writeln!(out, "a != b: {}", a != b)?;

    b.assign(4);
    writeln!(out, "a > b: {}", a.greater_than(&b))?;
    writeln!(out, "a >= b: {}", a.greater_or_equal(&b))?;
    writeln!(out, "a < b: {}", a.less_than(&b))?;
    writeln!(out, "a <= b: {}", a.less_or_equal(&b))?;
    Ok(())
}

/// Print everything the console driver reports for one rhombus.
pub fn describe_rhombus<W: Write>(out: &mut W, rhombus: &Rhombus) -> Result<()> {
    writeln!(out, "Rhombus with color {}:", rhombus.color())?;
    writeln!(out, "{}", rhombus.dimensions())?;
    writeln!(out, "Area: {}", rhombus.area())?;
    writeln!(out, "Perimeter: {:.4}", rhombus.perimeter())?;
    writeln!(out, "Is square: {}", yes_no(rhombus.is_truthy()))?;
    writeln!(
        out,
        "Indexer: d1={}, d2={}, color={}",
        rhombus.get(0)?,
        rhombus.get(1)?,
        rhombus.get(2)?
    )?;
    Ok(())
}

fn rhombuses<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    for entry in &config.rhombuses {
        let mut rhombus: Rhombus = entry.parse()?;
        describe_rhombus(out, &rhombus)?;

        rhombus.grow()?;
        writeln!(out, "After grow: {}", rhombus.dimensions())?;

        let added = (&rhombus + 5)?;
        writeln!(out, "After + 5: {}", added.dimensions())?;

        let text = rhombus.to_string();
        writeln!(out, "As string: {}", text)?;
        let back: Rhombus = text.parse()?;
        writeln!(
            out,
            "From string: d1={}, d2={}, color={}",
            back.d1(),
            back.d2(),
            back.color()
        )?;
    }
    Ok(())
}

fn matrix<W: Write>(config: &DemoConfig, out: &mut W) -> Result<()> {
    let m = MatrixULong::filled(config.matrix_rows, config.matrix_cols, config.matrix_fill)?;
    write!(out, "{}", m)?;
    let bad_row = config.matrix_rows;
    writeln!(
        out,
        "m[{},0] = {} (error code {})",
        bad_row,
        m.get(bad_row, 0),
        m.error_code()
    )?;
    writeln!(out, "Live matrices: {}", MatrixULong::live_count())?;
    Ok(())
}
