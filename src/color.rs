use ratatui::style::Color;

/// Parse a record color (`#rrggbb`, `#rgb` or `hsl(h, s%, l%)`) into a
/// terminal color. Out-of-range saturation or lightness is clamped here, at
/// display time only.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.starts_with('#') {
        return parse_hex(s);
    }
    parse_hsl(s)
}

pub fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#')?;
    if !s.is_ascii() {
        return None;
    }
    match s.len() {
        6 => {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&s[0..1], 16).ok()?;
            let g = u8::from_str_radix(&s[1..2], 16).ok()?;
            let b = u8::from_str_radix(&s[2..3], 16).ok()?;
            Some(Color::Rgb(r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}

fn parse_hsl(s: &str) -> Option<Color> {
    let inner = s.strip_prefix("hsl(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(str::trim);
    let h: f64 = parts.next()?.parse().ok()?;
    let sat: f64 = parts.next()?.strip_suffix('%')?.parse().ok()?;
    let light: f64 = parts.next()?.strip_suffix('%')?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let (r, g, b) = hsl_to_rgb(h, sat.clamp(0.0, 100.0) / 100.0, light.clamp(0.0, 100.0) / 100.0);
    Some(Color::Rgb(r, g, b))
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0) / 360.0;
    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return (v, v, v);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let channel = |t: f64| {
        let t = t.rem_euclid(1.0);
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        (v * 255.0).round() as u8
    };
    (channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
}
