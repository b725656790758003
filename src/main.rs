// Precompute a gamma-correction LUT for firmware:
// • Print the table to stdout as a C array literal (the real output).
// • Show the curve in a window as a visual sanity check. ESC quits.

mod draw;
mod emit;
mod error;
mod lut;
mod plot;
mod types;

use draw::Drawer;
use error::Error;
use lut::GammaLut;
use std::thread;
use std::time::Duration;

/* --- Config --- */
const GAMMA: f64 = 0.5;               // exponent of the power-law transform
const TABLE_NAME: &str = "gamma_lut"; // identifier in the emitted declaration

fn main() -> Result<(), Error> {
    // Build the table once; the printer and the plotter both read it.
    let lut = GammaLut::new(GAMMA);

    emit::print_c_array(&lut, TABLE_NAME);

    /* --- Chart window ---
       Visual: the curve appears and stays up until you close the window
       or press ESC. The chart is rendered once; the loop only keeps the
       window responsive. */
    let chart = plot::render_chart(&lut);
    let mut drawer = Drawer::new("Gamma Correction LUT", chart.width, chart.height)?;
    while drawer.is_open() && !drawer.esc_pressed() {
        drawer.present(&chart)?;
        thread::sleep(Duration::from_millis(16)); // static image; don't spin a core
    }

    Ok(())
}
