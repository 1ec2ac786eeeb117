//! Display formatting for complex values and state vectors.
//!
//! Pure string production, kept apart from the numeric modules so the math
//! can be tested without any rendering concern. The sign between the real
//! and imaginary parts follows the sign of the imaginary part; a
//! non-negative imaginary part renders with "+".

use num_complex::Complex;

use crate::amplitudes::Amplitudes;

/// Decimal places used by the display layer when none are specified.
pub const DEFAULT_DIGITS: usize = 3;

/// Format a complex number as `"<re> + <|im|>i"` or `"<re> - <|im|>i"`
/// with fixed decimal precision.
pub fn format_complex(value: Complex<f64>, digits: usize) -> String {
    let sign = if value.im >= 0.0 { '+' } else { '-' };
    format!(
        "{:.prec$} {} {:.prec$}i",
        value.re,
        sign,
        value.im.abs(),
        prec = digits
    )
}

/// Format a real number with fixed decimal precision.
pub fn format_real(value: f64, digits: usize) -> String {
    format!("{:.prec$}", value, prec = digits)
}

/// Render the full ket expression, e.g.
/// `|ψ⟩ = 0.707 |0⟩ + (0.707 + 0.000i) |1⟩`.
pub fn format_ket(amps: &Amplitudes, digits: usize) -> String {
    format!(
        "|ψ⟩ = {} |0⟩ + ({}) |1⟩",
        format_real(amps.alpha, digits),
        format_complex(amps.beta, digits)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amplitudes::state_amplitudes;
    use crate::angles::Angles;

    #[test]
    fn negative_imaginary_uses_minus() {
        let s = format_complex(Complex::new(1.5, -2.25), 3);
        assert_eq!(s, "1.500 - 2.250i");
    }

    #[test]
    fn non_negative_imaginary_uses_plus() {
        assert_eq!(format_complex(Complex::new(0.5, 0.25), 3), "0.500 + 0.250i");
        assert_eq!(format_complex(Complex::new(1.0, 0.0), 3), "1.000 + 0.000i");
    }

    #[test]
    fn digit_count_is_respected() {
        assert_eq!(format_complex(Complex::new(0.12345, 0.6), 2), "0.12 + 0.60i");
        assert_eq!(format_real(0.7071067, 4), "0.7071");
    }

    #[test]
    fn ket_rendering_for_plus_state() {
        let amps = state_amplitudes(Angles::new(90.0, 0.0).unwrap());
        let s = format_ket(&amps, 3);
        assert_eq!(s, "|ψ⟩ = 0.707 |0⟩ + (0.707 + 0.000i) |1⟩");
    }

    #[test]
    fn ket_rendering_for_plus_i_state() {
        let amps = state_amplitudes(Angles::new(90.0, 90.0).unwrap());
        let s = format_ket(&amps, 3);
        assert_eq!(s, "|ψ⟩ = 0.707 |0⟩ + (0.000 + 0.707i) |1⟩");
    }
}
