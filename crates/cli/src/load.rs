use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use std::path::Path;
use trajplot::{Category, Point};

/// Number of fields per row: `x,y,category`.
const FIELDS: usize = 3;

/// Load a headerless `x,y,category` CSV. Row order is path order.
///
/// Every column is read as text and parsed here so errors can name the row.
/// An empty or whitespace-only file yields an empty dataset. Empty fields come
/// through as `""`; fields absent from a short row come through as null.
pub fn load_csv(path: &Path) -> Result<Vec<Point>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let df = LazyCsvReader::new(path)
        .with_has_header(false)
        .with_infer_schema_length(Some(0))
        .with_missing_is_null(false)
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("parsing {}", path.display()))?;
    if df.width() != FIELDS {
        bail!(
            "{}: expected {FIELDS} fields per row (x,y,category), found {}",
            path.display(),
            df.width()
        );
    }
    let cols = df.get_columns();
    let text = |i: usize| cols[i].cast(&DataType::String);
    let (x_col, y_col, cat_col) = (text(0)?, text(1)?, text(2)?);
    let xs: Vec<Option<&str>> = x_col.str()?.into_iter().collect();
    let ys: Vec<Option<&str>> = y_col.str()?.into_iter().collect();
    let cats: Vec<Option<&str>> = cat_col.str()?.into_iter().collect();

    xs.iter()
        .zip(&ys)
        .zip(&cats)
        .enumerate()
        .map(|(i, ((x, y), cat))| {
            parse_row(i + 1, *x, *y, *cat).with_context(|| format!("{}", path.display()))
        })
        .collect()
}

/// One row; `row` is 1-based for messages.
fn parse_row(row: usize, x: Option<&str>, y: Option<&str>, cat: Option<&str>) -> Result<Point> {
    let x = coord(row, "x", x)?;
    let y = coord(row, "y", y)?;
    // Anything but `a` (including an empty field) is class B.
    let is_a = field(row, "category", cat)?.eq_ignore_ascii_case("a");
    Ok(Point::new(x, y, Category::from(is_a)))
}

/// Trimmed field text; null (absent from the row) is an error.
fn field<'a>(row: usize, name: &str, v: Option<&'a str>) -> Result<&'a str> {
    v.map(str::trim)
        .ok_or_else(|| anyhow!("row {row}: missing field `{name}`"))
}

fn coord(row: usize, name: &str, v: Option<&str>) -> Result<f64> {
    let s = field(row, name, v)?;
    if s.is_empty() {
        bail!("row {row}: empty field `{name}`");
    }
    s.parse::<f64>()
        .map_err(|_| anyhow!("row {row}: `{name}` is not a number: {s:?}"))
}
