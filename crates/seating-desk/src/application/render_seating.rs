//! Text rendering of the current seating plan.
//!
//! Output is a header followed by one line per seat in ascending order:
//!
//! ```text
//! Seating Arrangement:
//! Seat Number: 1, Student Name: Asha, Roll Number: 1021, Domain: CS
//! Seat Number: 2
//! ```

use seating_core::{Arrangement, Seat};

/// Header printed above the seat lines.
pub const SEATING_HEADER: &str = "Seating Arrangement:";

/// Renders the full arrangement, one line per seat.
pub fn render_arrangement(arrangement: &Arrangement) -> String {
    let mut out = String::with_capacity(32 * (arrangement.total_seats() + 1));
    out.push_str(SEATING_HEADER);
    out.push('\n');
    for seat in arrangement.seats() {
        out.push_str(&render_seat(seat));
        out.push('\n');
    }
    out
}

/// Renders a single seat line without a trailing newline.
pub fn render_seat(seat: &Seat) -> String {
    let mut line = format!("Seat Number: {}", seat.number());
    if let Some(student) = seat.occupant() {
        line.push_str(&format!(
            ", Student Name: {}, Roll Number: {}, Domain: {}",
            student.name(),
            student.roll_number(),
            student.domain()
        ));
    }
    line
}
