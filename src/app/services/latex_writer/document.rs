//! `longtable` markup rendering

use std::fmt;

use crate::app::models::FormattedCell;
use crate::config::{FontSize, TableConfig};
use crate::constants::{
    CELL_SEPARATOR, CONTINUED_FROM_BANNER, CONTINUED_ON_BANNER, ROW_TERMINATOR,
};

/// Complete LaTeX document for one table, rendered through `Display`
#[derive(Debug, Clone)]
pub struct LongtableDocument<'a> {
    pub caption: &'a str,
    pub label: &'a str,
    pub landscape: bool,
    pub font_size: FontSize,
    pub placement: &'a str,
    pub column_width_cm: f64,
    pub ncols: usize,
    pub header_rows: &'a [Vec<FormattedCell>],
    pub data_rows: &'a [Vec<String>],
}

impl<'a> LongtableDocument<'a> {
    /// Create a document using the layout options of a table config
    pub fn new(
        table: &'a TableConfig,
        ncols: usize,
        header_rows: &'a [Vec<FormattedCell>],
        data_rows: &'a [Vec<String>],
    ) -> Self {
        Self {
            caption: &table.caption,
            label: &table.label,
            landscape: table.landscape,
            font_size: table.font_size,
            placement: &table.placement,
            column_width_cm: table.column_width_cm,
            ncols,
            header_rows,
            data_rows,
        }
    }

    fn write_header_block(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r"\toprule")?;
        for row in self.header_rows {
            write_row(f, row)?;
        }
        writeln!(f, r"\bottomrule")
    }
}

impl fmt::Display for LongtableDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.landscape {
            writeln!(f, r"\begin{{landscape}}")?;
        }

        writeln!(f, r"{{\{}", self.font_size.command())?;
        writeln!(f, r"\setlength\LTleft{{0pt}}")?;
        writeln!(f, r"\setlength\LTright{{0pt}}")?;
        writeln!(f)?;

        writeln!(f, r"\begin{{longtable}}[{}]{{", self.placement)?;
        for _ in 0..self.ncols {
            writeln!(
                f,
                r"    >{{\raggedright\arraybackslash}}p{{{}cm}}",
                format_width(self.column_width_cm)
            )?;
        }
        writeln!(f, "}}")?;
        writeln!(f)?;

        writeln!(f, r"\caption{{{}}}", self.caption)?;
        writeln!(f, r"\label{{{}}}{}", self.label, ROW_TERMINATOR)?;
        self.write_header_block(f)?;
        writeln!(f, r"\endfirsthead")?;
        writeln!(f)?;

        writeln!(
            f,
            r"\multicolumn{{{}}}{{c}}{{{}}}{}",
            self.ncols, CONTINUED_FROM_BANNER, ROW_TERMINATOR
        )?;
        self.write_header_block(f)?;
        writeln!(f, r"\endhead")?;
        writeln!(f)?;

        writeln!(f, r"\bottomrule")?;
        writeln!(
            f,
            r"\multicolumn{{{}}}{{r}}{{{}}}{}",
            self.ncols, CONTINUED_ON_BANNER, ROW_TERMINATOR
        )?;
        writeln!(f, r"\endfoot")?;
        writeln!(f)?;
        writeln!(f, r"\bottomrule")?;
        writeln!(f, r"\endlastfoot")?;
        writeln!(f)?;

        for row in self.data_rows {
            write_row(f, row)?;
        }

        writeln!(f, r"\end{{longtable}}")?;
        writeln!(f, "}}")?;

        if self.landscape {
            writeln!(f, r"\end{{landscape}}")?;
        }

        Ok(())
    }
}

/// Fixed-point length with at least one decimal, e.g. `2.0` or `0.0000001`
pub fn format_width(cm: f64) -> String {
    let width = cm.to_string();
    if width.contains('.') {
        width
    } else {
        format!("{}.0", width)
    }
}

/// Write one table row: cells joined by the separator, then the terminator
fn write_row<T: fmt::Display>(f: &mut fmt::Formatter<'_>, cells: &[T]) -> fmt::Result {
    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            f.write_str(CELL_SEPARATOR)?;
        }
        write!(f, "{}", cell)?;
    }
    writeln!(f, "{}", ROW_TERMINATOR)
}
