use minado_core::{CellView, GamePhase, Snapshot};
use std::fmt::Write;

fn format_for_counter(num: i32) -> String {
    match num {
        ..-99 => "-99".to_string(),
        -99..0 => format!("-{:02}", -num),
        0..1000 => format!("{:03}", num),
        1000.. => "999".to_string(),
    }
}

fn face(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::NotStarted | GamePhase::InProgress => ":)",
        GamePhase::Won => "B)",
        GamePhase::Lost => "X(",
    }
}

fn glyph(cell: CellView) -> char {
    match cell {
        CellView::Hidden => '.',
        CellView::Flagged => 'F',
        CellView::Revealed(0) => ' ',
        CellView::Revealed(count) => char::from(b'0' + count),
        CellView::Detonated => '*',
        CellView::Mine => 'x',
        CellView::WrongFlag => '!',
    }
}

/// Header line with mine counter, face and timer, then the grid with indices.
pub fn render(snapshot: &Snapshot) -> String {
    let (_, cols) = snapshot.size;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "[{}]  {}  [{}]",
        format_for_counter(snapshot.remaining_mines),
        face(snapshot.phase),
        format_for_counter(snapshot.elapsed_secs.try_into().unwrap_or(i32::MAX)),
    );

    out.push_str("   ");
    for col in 0..cols {
        let _ = write!(out, "{:>2}", col % 100);
    }
    out.push('\n');

    for (row, cells) in snapshot.rows().enumerate() {
        let _ = write!(out, "{:>2} ", row);
        for cell in cells {
            let _ = write!(out, " {}", glyph(cell));
        }
        out.push('\n');
    }
    out
}
