use std::io::{self, Write};

use crate::icons::{ExtensionTable, IconRecord};

const ICON_XML: char = '\u{f05f}';
const ICON_MARKUP: char = '\u{f13b}';
const ICON_STYLE: char = '\u{f13c}';
const ICON_JS: char = '\u{e097}';
const ICON_DATA: char = '\u{f096}';
const ICON_SHELL: char = '\u{e0b7}';
const ICON_IMAGE: char = '\u{f012}';
const ICON_MEDIA: char = '\u{f094}';
const ICON_ARCHIVE: char = '\u{f013}';
const ICON_TEXT: char = '\u{f011}';
const ICON_IGNORE: char = '\u{f084}';
const ICON_GIT: char = '\u{f020}';
const ICON_SERVER: char = '\u{f02f}';

fn icon(glyph: char) -> IconRecord {
    IconRecord::new(glyph)
}

fn colored(glyph: char, color: &str) -> IconRecord {
    IconRecord::new(glyph).with_color(color)
}

/// Build the table with every built-in file type.
pub fn builtin_table() -> ExtensionTable {
    let mut table = ExtensionTable::new();
    populate(&mut table);
    tracing::debug!(entries = table.len(), "icon table built");
    table
}

/// Write the catalog into `t` in order. Running it twice leaves the same table.
pub fn populate(t: &mut ExtensionTable) {
    // Markup
    t.define("xml", colored(ICON_XML, "#ff6600"));
    t.define("html", colored(ICON_MARKUP, "#d28445"));
    t.alias("htm", "html");

    // Stylesheets
    t.define("css", colored(ICON_STYLE, "#6a9fb5"));
    t.define("scss", colored(ICON_STYLE, "#c6538c"));
    t.alias("sass", "scss");
    t.define("less", colored(ICON_STYLE, "#3b6bb2"));
    t.define("styl", colored(ICON_STYLE, "#b3d107"));

    // Scripting
    t.define("js", colored(ICON_JS, "#f4bf75"));
    t.define("ejs", colored(ICON_XML, "#f4bf75"));
    t.define("ts", colored(ICON_XML, "#0074c1"));
    t.define("coffee", colored('\u{e0b3}', "#c9905e"));
    t.define("json", colored(ICON_DATA, "#F4BF75"));
    t.define("ls", colored('\u{f269}', "#369bd7"));

    // Server side
    t.define("php", colored('\u{e09a}', "#6976c3"));
    t.define("sql", colored(ICON_DATA, "#c67f07"));

    // Compiled
    t.define("java", colored('\u{e098}', "#75b4de"));
    t.alias("class", "java");

    // Shell
    t.define("sh", icon(ICON_SHELL));
    t.define("bat", icon(ICON_SHELL));
    t.define("command", icon(ICON_SHELL));

    // Templating
    t.define("jade", colored(ICON_MARKUP, "#01dfa5"));

    // Images
    t.define("png", colored(ICON_IMAGE, "#dbb1a9"));
    t.define("jpg", colored(ICON_IMAGE, "#dedfa3"));
    t.alias("jpeg", "jpg");
    t.define("tiff", colored(ICON_IMAGE, "#ff4000"));
    t.define("ico", colored(ICON_IMAGE, "#b6d2d1"));
    t.define("svg", colored(ICON_IMAGE, "#c0c5eb"));
    t.define("gif", colored(ICON_IMAGE, "#aaecc0"));

    // Video
    t.define("mp4", icon(ICON_MEDIA));
    t.alias("webm", "mp4");
    t.alias("ogg", "mp4");

    // Audio
    t.define("mp3", icon(ICON_MEDIA));
    t.alias("wav", "mp3");

    // Fonts
    t.define("ttf", icon(ICON_MEDIA));
    t.define("eot", icon(ICON_MEDIA));
    t.define("woff", icon(ICON_MEDIA));

    // Docs
    t.define("md", colored('\u{f0c9}', "#c36b35"));
    t.alias("markdown", "md");

    // VCS
    t.define("gitignore", colored(ICON_IGNORE, "#a0422e").with_size(18));
    t.define("gitmodules", icon(ICON_GIT));
    t.define("gitattributes", icon(ICON_GIT));

    // Web servers
    t.define("htaccess", icon(ICON_SERVER));
    t.define("htpasswd", icon(ICON_SERVER));
    t.define("conf", icon(ICON_SERVER));

    // Archives
    t.define("zip", icon(ICON_ARCHIVE));
    for ext in ["rar", "7z", "tgz", "tar", "gz", "bzip"] {
        t.alias(ext, "zip");
    }

    // Project and lint settings
    t.define("project", icon(ICON_ARCHIVE));
    for ext in ["jscsrc", "jshintrc", "csslintrc", "todo", "classpath"] {
        t.alias(ext, "project");
    }

    // Plain text
    t.define("txt", icon(ICON_TEXT));
    t.define("log", icon(ICON_TEXT));
    t.define("npmignore", colored(ICON_IGNORE, "#a0422e").with_size(18));
    t.define("yml", icon(ICON_TEXT));
    t.define("ls", icon(ICON_TEXT));
    t.define("org", icon(ICON_TEXT));
}

/// One line per entry, sorted by extension: extension, glyph, color (`-` when
/// unset) and font size.
pub fn write_listing(table: &ExtensionTable, out: &mut impl Write) -> io::Result<()> {
    for (ext, record) in table.sorted() {
        let color = record.color.as_deref().unwrap_or("-");
        writeln!(out, "{ext:<14} {}  {color:<9} {}", record.icon, record.font_size())?;
    }
    out.flush()
}
