//! QR code rendering with unicode half blocks.

use qrcode::QrCode;
use qrcode::render::unicode::Dense1x2;
use tracing::debug;

/// Renders `payload` as text rows, two QR modules per character cell.
///
/// Colors are inverted so the code reads on dark terminal backgrounds.
/// Returns `None` if the payload cannot be encoded.
pub fn qr_lines(payload: &str) -> Option<Vec<String>> {
    let code = match QrCode::new(payload.as_bytes()) {
        Ok(code) => code,
        Err(e) => {
            debug!("cannot encode QR payload: {}", e);
            return None;
        }
    };
    let rendered = code
        .render::<Dense1x2>()
        .dark_color(Dense1x2::Light)
        .light_color(Dense1x2::Dark)
        .quiet_zone(true)
        .build();
    Some(rendered.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_number_renders_square_block() {
        let lines = qr_lines("0cdd4ba04456ca169baca3d66eace869520c62fe84421329086e03d91a68acdb")
            .unwrap();
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
        // Two modules per row: height is about half the width.
        assert!(lines.len() * 2 >= width && lines.len() * 2 <= width + 2);
    }

    #[test]
    fn oversized_payload_is_rejected() {
        assert!(qr_lines(&"x".repeat(8000)).is_none());
    }
}
