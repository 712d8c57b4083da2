//! Plain-text views of an [`EscapeGrid`].

use crate::{escape::IN_SET, grid::EscapeGrid};

const MEMBER: char = '*';
const ESCAPED: char = ' ';

/// Membership map at most `columns` characters wide, `'*'` marking in-set pixels.
///
/// The grid is sampled, not averaged: each character shows the top-left pixel of the
/// block it covers. Blocks are twice as tall as wide to make up for terminal cells.
pub fn ascii(grid: &EscapeGrid, columns: u32) -> String {
    let size = grid.size();
    if columns == 0 || size.width == 0 || size.height == 0 {
        return String::new();
    }

    let step_x = size.width.div_ceil(columns).max(1);
    let step_y = step_x * 2;

    let mut out = String::new();
    for row in (0..size.height).step_by(step_y as usize) {
        let line: String = (0..size.width)
            .step_by(step_x as usize)
            .map(|column| match grid.get(column, row) {
                Some(IN_SET) => MEMBER,
                _ => ESCAPED,
            })
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn summary(grid: &EscapeGrid) -> String {
    let size = grid.size();
    format!(
        "Done!\n  height = {}\n  length = {}\n",
        size.height, size.width
    )
}
