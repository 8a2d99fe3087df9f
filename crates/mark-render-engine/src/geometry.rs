//! Image geometry: turns captured width/height text into an inline style.

/// Builds the `style` attribute value for an image block.
///
/// `width` and `height` are the captured texts; both must be present for
/// either to count. Unparseable numbers degrade to 0. When the width is
/// positive the result carries `width: {w}%;` and, if the scaled height is
/// positive too, `aspect-ratio: {w}/{h};`. The height is multiplied by the
/// width before the ratio is formed; existing documents depend on that.
pub fn image_style(width: Option<&str>, height: Option<&str>) -> String {
    let (width, mut height) = match (width, height) {
        (Some(w), Some(h)) => (parse_dimension(w), parse_dimension(h)),
        _ => (0.0, 0.0),
    };

    let mut style = String::new();
    if width > 0.0 {
        style.push_str(&format!("width: {width}%;"));
        height *= width;
        if height > 0.0 {
            style.push_str(&format!("aspect-ratio: {width:.0}/{height:.0};"));
        }
    }
    style
}

fn parse_dimension(text: &str) -> f64 {
    match text.parse::<f64>() {
        Ok(value) => value,
        Err(e) => {
            log::warn!("image dimension {text:?} is not a number ({e}), using 0");
            0.0
        }
    }
}
