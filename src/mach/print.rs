use super::{Array, Data};
use std::fmt::Write;

/// Text form of an array: the shape on one line, then the data.
/// Boxed elements are written recursively, each behind `< `.
pub fn render(array: &Array) -> String {
    let mut s = String::new();
    write_array(&mut s, array);
    s
}

fn write_array(s: &mut String, array: &Array) {
    write_row(s, array.shape().iter());
    s.push('\n');
    match array.data() {
        Data::Plain(v) => write_row(s, v.iter()),
        Data::Boxed(items) => {
            for item in items {
                s.push_str("< ");
                write_array(s, item);
            }
        }
    }
    s.push('\n');
}

fn write_row<T: std::fmt::Display>(s: &mut String, row: impl Iterator<Item = T>) {
    for (index, n) in row.enumerate() {
        if index > 0 {
            s.push(' ');
        }
        let _ = write!(s, "{}", n);
    }
}

impl std::fmt::Display for Array {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&render(self))
    }
}
