//! Terminal presentation of records

use colored::{ColoredString, Colorize};
use splitwave_core::{ClassificationRecord, Color};

fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let channel = |range: std::ops::Range<usize>| {
        hex.trim_start_matches('#')
            .get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .unwrap_or(0)
    };
    (channel(0..2), channel(2..4), channel(4..6))
}

/// Colour label painted with its own background/foreground pair
pub fn swatch(color: Color) -> ColoredString {
    let style = color.style();
    let (br, bg, bb) = hex_to_rgb(style.background);
    let (fr, fg, fb) = hex_to_rgb(style.foreground);
    format!(" {:<12} ", color.label()).on_truecolor(br, bg, bb).truecolor(fr, fg, fb)
}

pub fn yes_no(value: bool) -> ColoredString {
    if value {
        "yes".green()
    } else {
        "no".dimmed()
    }
}

pub fn record_header() {
    println!(
        "{:>7}  {:<14}  {:>5}  {:<8}  {:<6}  {:<5}  {}",
        "N".bold(),
        "COLOR".bold(),
        "L/R".bold(),
        "AXIS".bold(),
        "PRIME".bold(),
        "BEND".bold(),
        "FACTORS".bold()
    );
}

pub fn record_row(record: &ClassificationRecord) {
    let bend = if record.bending.quad_anchor {
        format!("{}*", record.bending.counterpart)
    } else {
        record.bending.counterpart.to_string()
    };
    println!(
        "{:>7}  {}  {:>5}  {:<8}  {:<6}  {:<5}  {}",
        record.n,
        swatch(record.color),
        format!("{}/{}", record.split.l, record.split.r),
        record.polarity.label(),
        yes_no(record.is_prime),
        bend,
        record.factorization
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_triples() {
        assert_eq!(hex_to_rgb("#1e40af"), (0x1e, 0x40, 0xaf));
        assert_eq!(hex_to_rgb("ffffff"), (255, 255, 255));
        assert_eq!(hex_to_rgb("#12"), (0x12, 0, 0));
    }

    #[test]
    fn every_color_has_a_parsable_style() {
        for color in Color::ALL {
            let style = color.style();
            for hex in [style.background, style.foreground, style.glow] {
                assert_eq!(hex.len(), 7, "{color:?} {hex}");
                assert!(u32::from_str_radix(&hex[1..], 16).is_ok());
            }
        }
    }
}
