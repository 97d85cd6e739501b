use std::collections::HashMap;

/// Font size a marker uses when its record does not set one.
pub const DEFAULT_SIZE: u16 = 16;

/// Glyph for a file without any extension.
pub const BLANK_GLYPH: char = '\u{f011}';
pub const BLANK_COLOR: &str = "#94a3a7";

/// Glyph for an extension the table does not know.
pub const UNKNOWN_GLYPH: char = '\u{f12f}';

/// How a file type is drawn: a glyph, an optional CSS-style color and an
/// optional font size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRecord {
    pub icon: char,
    pub color: Option<String>,
    pub size: Option<u16>,
}

impl IconRecord {
    pub fn new(icon: char) -> Self {
        IconRecord {
            icon,
            color: None,
            size: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_size(mut self, size: u16) -> Self {
        self.size = Some(size);
        self
    }

    pub fn font_size(&self) -> u16 {
        self.size.unwrap_or(DEFAULT_SIZE)
    }
}

/// Lowercase extension (no leading dot) to icon record.
///
/// Built once at startup and only read afterwards; renderers borrow it.
#[derive(Debug, Clone, Default)]
pub struct ExtensionTable {
    entries: HashMap<String, IconRecord>,
}

impl ExtensionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under `extension`, replacing any previous entry.
    pub fn define(&mut self, extension: &str, record: IconRecord) -> &mut Self {
        let key = extension.to_lowercase();
        if key.is_empty() {
            tracing::warn!("ignoring icon definition for empty extension");
            return self;
        }
        self.entries.insert(key, record);
        self
    }

    /// Make `extension` resolve to the same record as `target`.
    pub fn alias(&mut self, extension: &str, target: &str) -> &mut Self {
        let key = extension.to_lowercase();
        if key.is_empty() {
            tracing::warn!(target_ext = target, "ignoring alias with empty extension");
            return self;
        }
        match self.entries.get(&target.to_lowercase()).cloned() {
            Some(record) => {
                self.entries.insert(key, record);
            }
            None => {
                tracing::warn!(ext = %key, target_ext = target, "alias target is not defined");
            }
        }
        self
    }

    pub fn get(&self, extension: &str) -> Option<&IconRecord> {
        self.entries.get(extension)
    }

    /// Resolve a raw extension, case-insensitively. Unknown extensions get a
    /// color derived from their text.
    pub fn lookup(&self, extension: &str) -> IconRecord {
        let ext = extension.to_lowercase();
        match self.get(&ext) {
            Some(record) => record.clone(),
            None => fallback_icon(&ext),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries sorted by extension.
    pub fn sorted(&self) -> Vec<(&str, &IconRecord)> {
        let mut all: Vec<(&str, &IconRecord)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        all.sort_by(|a, b| a.0.cmp(b.0));
        all
    }
}

/// Synthesize a record for an extension that has no table entry.
///
/// The color is an `hsl()` string hashed from the UTF-16 code units of the
/// extension. Saturation and lightness are running averages and are not
/// clamped, so they may leave the 0..=100 range for long inputs.
pub fn fallback_icon(extension: &str) -> IconRecord {
    if extension.is_empty() {
        return IconRecord::new(BLANK_GLYPH).with_color(BLANK_COLOR);
    }

    let mut hue: u64 = 0;
    let mut saturation: f64 = 90.0;
    let mut lightness: f64 = 50.0;

    for (i, unit) in extension.encode_utf16().enumerate() {
        let c = u64::from(unit);
        hue = (hue + c * 42 * (i as u64 + 2)) % 256;
        saturation = (saturation + (c % 30) as f64 + 70.0) / 2.0;
        lightness = (lightness + (c * 3 % 40) as f64 + 30.0) / 2.0;
    }

    IconRecord::new(UNKNOWN_GLYPH).with_color(format!(
        "hsl({}, {}%, {}%)",
        hue,
        round_half_up(saturation),
        round_half_up(lightness),
    ))
}

fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_extension_is_blank_file() {
        let r = fallback_icon("");
        assert_eq!(r.icon, '\u{f011}');
        assert_eq!(r.color.as_deref(), Some("#94a3a7"));
        assert_eq!(r.size, None);
    }

    #[test]
    fn fallback_known_values() {
        assert_eq!(fallback_icon("a").color.as_deref(), Some("hsl(212, 84%, 46%)"));
        assert_eq!(fallback_icon("b").color.as_deref(), Some("hsl(40, 84%, 47%)"));
        assert_eq!(fallback_icon("rs").color.as_deref(), Some("hsl(2, 94%, 53%)"));
        assert_eq!(
            fallback_icon("xyz123").color.as_deref(),
            Some("hsl(250, 88%, 58%)")
        );
        assert_eq!(fallback_icon("toml").icon, UNKNOWN_GLYPH);
    }

    #[test]
    fn fallback_is_deterministic() {
        assert_eq!(fallback_icon("xyz123"), fallback_icon("xyz123"));
    }

    #[test]
    fn fallback_hues_mostly_distinct() {
        let exts = ["rs", "go", "py", "rb", "kt", "zig", "lua", "toml", "lock", "cfg"];
        let hues: std::collections::HashSet<String> = exts
            .iter()
            .filter_map(|e| fallback_icon(e).color)
            .map(|c| c.split(',').next().unwrap_or_default().to_string())
            .collect();
        assert!(hues.len() >= exts.len() - 2, "too many collisions: {hues:?}");
    }

    #[test]
    fn define_lowercases_and_overwrites() {
        let mut t = ExtensionTable::new();
        t.define("LS", IconRecord::new('\u{f269}').with_color("#369bd7"));
        t.define("ls", IconRecord::new('\u{f011}'));
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("ls"), Some(&IconRecord::new('\u{f011}')));
    }

    #[test]
    fn empty_key_is_not_stored() {
        let mut t = ExtensionTable::new();
        t.define("", IconRecord::new('x'));
        t.define("txt", IconRecord::new('t'));
        t.alias("", "txt");
        assert_eq!(t.len(), 1);
        assert_eq!(t.lookup(""), fallback_icon(""));
    }

    #[test]
    fn alias_copies_target_record() {
        let mut t = ExtensionTable::new();
        t.define("md", IconRecord::new('\u{f0c9}').with_color("#c36b35"));
        t.alias("Markdown", "md");
        assert_eq!(t.get("markdown"), t.get("md"));
    }

    #[test]
    fn alias_to_unknown_target_is_ignored() {
        let mut t = ExtensionTable::new();
        t.alias("webm", "mp4");
        assert_eq!(t.len(), 0);
        assert_eq!(t.lookup("webm"), fallback_icon("webm"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut t = ExtensionTable::new();
        t.define("js", IconRecord::new('\u{e097}').with_color("#f4bf75"));
        assert_eq!(t.lookup("JS"), t.lookup("js"));
        assert_eq!(t.lookup("Js"), t.lookup("js"));
    }

    #[test]
    fn unknown_lookup_lowercases_before_hashing() {
        let t = ExtensionTable::new();
        assert_eq!(t.lookup("XYZ123"), fallback_icon("xyz123"));
    }

    #[test]
    fn font_size_defaults_to_16() {
        assert_eq!(IconRecord::new('x').font_size(), 16);
        assert_eq!(IconRecord::new('x').with_size(18).font_size(), 18);
    }
}
