// Formats the table as a C array literal, ready to paste into the
// firmware source that indexes it per channel.

use crate::lut::{GammaLut, LUT_SIZE};

/// Values per emitted line; 16 keeps each line within 80 columns.
pub const VALUES_PER_LINE: usize = 16;

/// Render the table as
/// `static const uint8_t <name>[256] = { ... };`
/// with 16 values per line, each 3 characters wide and right-aligned,
/// and a trailing comma closing every value line.
pub fn render_c_array(lut: &GammaLut, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("static const uint8_t {name}[{LUT_SIZE}] = {{\n"));
    for row in lut.values().chunks(VALUES_PER_LINE) {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:3}")).collect();
        out.push_str(&format!("    {},\n", cells.join(", ")));
    }
    out.push_str("};\n");
    out
}

/// Print the array declaration to stdout (the tool's primary output).
pub fn print_c_array(lut: &GammaLut, name: &str) {
    print!("{}", render_c_array(lut, name));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_lines_are_exact() {
        let text = render_c_array(&GammaLut::new(0.5), "gamma_lut");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 18); // open + 16 value lines + close
        assert_eq!(lines[0], "static const uint8_t gamma_lut[256] = {");
        assert_eq!(lines[17], "};");
    }

    #[test]
    fn sixteen_values_per_line_with_trailing_comma() {
        let text = render_c_array(&GammaLut::new(0.5), "gamma_lut");
        for line in text.lines().skip(1).take(16) {
            assert!(line.starts_with("    "));
            assert!(line.ends_with(','));
            assert_eq!(line.matches(',').count(), VALUES_PER_LINE);
        }
    }

    #[test]
    fn identity_ramp_rows_format_as_expected() {
        let text = render_c_array(&GammaLut::new(1.0), "gamma_lut");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[1],
            "      0,   1,   2,   3,   4,   5,   6,   7,   8,   9,  10,  11,  12,  13,  14,  15,"
        );
        assert_eq!(
            lines[16],
            "    240, 241, 242, 243, 244, 245, 246, 247, 248, 249, 250, 251, 252, 253, 254, 255,"
        );
    }

    #[test]
    fn name_is_substituted() {
        let text = render_c_array(&GammaLut::new(0.5), "display_gamma");
        assert!(text.starts_with("static const uint8_t display_gamma[256] = {"));
    }
}
