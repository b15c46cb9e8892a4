use smart_leds::{RGBW, White};

/// Four-channel device color sent to the strip
///
/// The white sub-pixel lives in the `a` channel, as `smart-leds` drivers
/// expect it.
pub type Rgbw = RGBW<u8>;

/// All channels off
pub const BLACK: Rgbw = rgbw(0, 0, 0, 0);

/// All four sub-pixels at full power
pub const FULL: Rgbw = rgbw(255, 255, 255, 255);

/// Create an RGBW color from its four channels
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw {
        r,
        g,
        b,
        a: White(w),
    }
}
