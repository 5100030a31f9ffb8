//! Human readable quantities.

use crate::registers::Width;

const FREQUENCY_UNITS: [&str; 5] = ["Hz", "kHz", "MHz", "GHz", "THz"];
const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Scales `value` down by 1000 until it is below 1000 or the units run out, then prints it with
/// two decimals.
fn scaled(value: u64, units: &[&str]) -> String {
    let mut value = value as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < units.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    format!("{value:.2} {}", units[unit])
}

/// Formats a clock frequency, e.g. `4772728` becomes `4.77 MHz`.
pub fn format_frequency(hz: u32) -> String {
    scaled(u64::from(hz), &FREQUENCY_UNITS)
}

/// Formats a byte count with decimal (1000-based) units, e.g. `640000` becomes `640.00 KB`.
pub fn format_bytes(bytes: u64) -> String {
    scaled(bytes, &BYTE_UNITS)
}

/// Formats a register value as unpadded upper case hex, masked to `width`.
pub fn format_hex(value: u32, width: Width) -> String {
    format!("0x{:X}", value & width.mask())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn frequency_boundaries() {
        assert_eq!(format_frequency(0), "0.00 Hz");
        assert_eq!(format_frequency(999), "999.00 Hz");
        assert_eq!(format_frequency(1000), "1.00 kHz");
        assert_eq!(format_frequency(999_999), "1000.00 kHz");
        assert_eq!(format_frequency(1_000_000), "1.00 MHz");
        assert_eq!(format_frequency(4_772_728), "4.77 MHz");
        assert_eq!(format_frequency(4_000_000_000), "4.00 GHz");
    }

    #[test]
    fn byte_boundaries() {
        assert_eq!(format_bytes(0), "0.00 B");
        assert_eq!(format_bytes(999), "999.00 B");
        assert_eq!(format_bytes(1000), "1.00 KB");
        assert_eq!(format_bytes(640_000), "640.00 KB");
        assert_eq!(format_bytes(16_384_000), "16.38 MB");
        assert_eq!(format_bytes(4_294_967_295_000), "4.29 TB");
    }

    #[test]
    fn bytes_saturate_at_largest_unit() {
        assert_eq!(format_bytes(5_000_000_000_000_000), "5000.00 TB");
    }

    #[test]
    fn hex_is_prefixed_and_upper_case() {
        assert_eq!(format_hex(0, Width::W8), "0x0");
        assert_eq!(format_hex(0, Width::W16), "0x0");
        assert_eq!(format_hex(0, Width::W32), "0x0");
        assert_eq!(format_hex(0xAB, Width::W8), "0xAB");
        assert_eq!(format_hex(0xBEEF, Width::W16), "0xBEEF");
        assert_eq!(format_hex(0xDEAD_BEEF, Width::W32), "0xDEADBEEF");
        assert_eq!(format_hex(0xF, Width::W32), "0xF");
    }

    #[test]
    fn hex_masks_to_width() {
        assert_eq!(format_hex(0x1234_5678, Width::W16), "0x5678");
        assert_eq!(format_hex(0x1234_5678, Width::W8), "0x78");
        assert_eq!(format_hex(0x0001_0000, Width::W16), "0x0");
    }
}
