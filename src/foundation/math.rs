pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Undo premultiplication of one RGBA8 pixel in place.
pub(crate) fn unpremultiply_px(px: &mut [u8]) {
    let a = u16::from(px[3]);
    if a == 0 {
        px[..3].fill(0);
        return;
    }
    if a == 255 {
        return;
    }
    for c in &mut px[..3] {
        let v = (u16::from(*c) * 255 + a / 2) / a;
        *c = v.min(255) as u8;
    }
}

/// Composite one premultiplied pixel over an opaque straight-alpha background.
pub(crate) fn flatten_px_over(px: &[u8], bg: [u8; 3]) -> [u8; 3] {
    let inv = 255 - u16::from(px[3]);
    [
        (u16::from(px[0]) + mul_div255_u16(u16::from(bg[0]), inv)).min(255) as u8,
        (u16::from(px[1]) + mul_div255_u16(u16::from(bg[1]), inv)).min(255) as u8,
        (u16::from(px[2]) + mul_div255_u16(u16::from(bg[2]), inv)).min(255) as u8,
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
