//! Text drawn over the canvas and names for captured frames

use crate::consts::SCREENSHOT_DIGITS;

/// Hit counter as shown in the HUD, e.g. `007 hits`
pub fn hits_text(hits: u32, digits: usize) -> String {
    format!("{:0width$} hits", hits, width = digits)
}

/// File name for the `n`th screenshot, e.g. `p0012.png`
pub fn screenshot_name(n: u32) -> String {
    format!("p{:0width$}.png", n, width = SCREENSHOT_DIGITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::HUD_DIGITS;

    #[test]
    fn test_hits_text_pads() {
        assert_eq!(hits_text(0, HUD_DIGITS), "000 hits");
        assert_eq!(hits_text(7, HUD_DIGITS), "007 hits");
        assert_eq!(hits_text(42, HUD_DIGITS), "042 hits");
    }

    #[test]
    fn test_hits_text_overflows_width() {
        assert_eq!(hits_text(1234, HUD_DIGITS), "1234 hits");
    }

    #[test]
    fn test_screenshot_name() {
        assert_eq!(screenshot_name(0), "p0000.png");
        assert_eq!(screenshot_name(12), "p0012.png");
    }
}
