//! Password and strength meter output.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, PrintStyledContent, Stylize};

use super::{Generated, entropy_bits};
use crate::strength::Strength;

/// Number of cells in the strength bar.
pub const METER_WIDTH: usize = 20;

const FILLED: char = '█';
const EMPTY: char = '░';

pub fn strength_color(strength: Strength) -> Color {
    match strength {
        Strength::Weak => Color::Red,
        Strength::Fair => Color::Yellow,
        Strength::Good => Color::Blue,
        Strength::Strong => Color::Green,
    }
}

/// Split the bar into (filled, empty) cell strings for `score`.
pub fn meter_cells(score: f64, width: usize) -> (String, String) {
    let filled = ((score.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    (
        FILLED.to_string().repeat(filled),
        EMPTY.to_string().repeat(width - filled),
    )
}

/// Write each password on its own line.
pub fn write_passwords<W: Write>(out: &mut W, generated: &[Generated]) -> io::Result<()> {
    for g in generated {
        out.write_all(g.password.as_str().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Draw `Strength: ████████░░░░ 60% Fair · 95.3 bits`.
pub fn write_meter<W: Write>(out: &mut W, generated: &Generated, color: bool) -> io::Result<()> {
    let strength = Strength::from_score(generated.strength);
    let (filled, empty) = meter_cells(generated.strength, METER_WIDTH);
    let bits = entropy_bits(generated.password.len(), generated.charset_len);
    let summary = format!(
        " {:>3}% {} \u{00b7} {:.1} bits\n",
        (generated.strength * 100.0).round() as u32,
        strength.label(),
        bits
    );

    queue!(out, Print("Strength: "))?;
    if color {
        queue!(
            out,
            PrintStyledContent(filled.with(strength_color(strength))),
            PrintStyledContent(empty.dark_grey()),
        )?;
    } else {
        queue!(out, Print(filled), Print(empty))?;
    }
    queue!(out, Print(summary))?;
    out.flush()
}
