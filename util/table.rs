/// A `Table` renders a header and rows of string values as a plain text table with padded, aligned columns.
pub struct Table<'a> {
	padding: usize,
	header: &'a [&'a str],
	rows: &'a [Vec<String>],
}

impl<'a> Table<'a> {
	pub fn new(header: &'a [&'a str], rows: &'a [Vec<String>]) -> Table<'a> {
		Table {
			padding: 1,
			header,
			rows,
		}
	}
}

impl<'a> std::fmt::Display for Table<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let n_columns = self.header.len();
		let mut column_widths: Vec<usize> = vec![0; n_columns];
		// update column widths with header
		column_widths
			.iter_mut()
			.zip(self.header)
			.for_each(|(column_width, header)| *column_width = header.len());
		// update column widths with values
		for row in self.rows.iter() {
			column_widths
				.iter_mut()
				.zip(row)
				.for_each(|(column_width, value)| {
					*column_width = usize::max(*column_width, value.len());
				});
		}
		// write header
		let line = Line {
			column_widths: &column_widths,
			padding: self.padding,
		};
		let row = Row {
			column_widths: &column_widths,
			padding: self.padding,
			values: self.header.iter().map(|value| *value).collect(),
		};
		writeln!(f, "{}", row)?;
		writeln!(f, "{}", line)?;
		// write values
		for row in self.rows.iter() {
			let row = Row {
				column_widths: &column_widths,
				padding: self.padding,
				values: row.iter().map(|value| value.as_str()).collect(),
			};
			writeln!(f, "{}", row)?;
		}
		Ok(())
	}
}

struct Line<'a> {
	column_widths: &'a [usize],
	padding: usize,
}

impl<'a> std::fmt::Display for Line<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "|")?;
		for column_width in self.column_widths.iter() {
			for _ in 0..column_width + 2 * self.padding {
				write!(f, "-")?;
			}
			write!(f, "|")?;
		}
		Ok(())
	}
}

struct Row<'a> {
	column_widths: &'a [usize],
	padding: usize,
	values: Vec<&'a str>,
}

impl<'a> std::fmt::Display for Row<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "|")?;
		for (value, column_width) in self.values.iter().zip(self.column_widths) {
			for _ in 0..self.padding {
				write!(f, " ")?;
			}
			write!(f, "{}", value)?;
			for _ in 0..column_width - value.len() + self.padding {
				write!(f, " ")?;
			}
			write!(f, "|")?;
		}
		Ok(())
	}
}

#[test]
fn test_table() {
	let header = ["FEATURE", "VALUE"];
	let rows = vec![
		vec!["packet_count".to_owned(), "120".to_owned()],
		vec!["duration".to_owned(), "1.5".to_owned()],
	];
	let table = Table::new(&header, &rows);
	insta::assert_display_snapshot!(table, @r###"
 | FEATURE      | VALUE |
 |--------------|-------|
 | packet_count | 120   |
 | duration     | 1.5   |
 "###);
}
