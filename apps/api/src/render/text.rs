//! Content preprocessing shared by the templates, plus the WinAnsi encoder
//! used for every string that ends up in a content stream.

/// Keywords that mark an entry as an institution/employer line in the
/// executive template. Case-sensitive, substring match.
pub const HEADING_KEYWORDS: [&str; 5] = ["University", "College", "Company", "Project", "Certificate"];

/// Glyphs users type in front of list items; stripped before the template adds its own.
const BULLET_GLYPHS: [char; 10] = ['•', '·', '▪', '◦', '–', '—', '-', '*', '>', '»'];

/// Splits a multi-line field into trimmed, non-empty entries.
pub fn entries(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Removes one leading bullet/dash glyph (and the whitespace after it).
///
/// ASCII glyphs (`-`, `*`, `>`) are only treated as bullets when followed by
/// whitespace, so "-5% latency" keeps its sign.
pub fn strip_bullet(line: &str) -> &str {
    let line = line.trim();
    let mut chars = line.chars();
    let Some(first) = chars.next() else {
        return line;
    };
    if !BULLET_GLYPHS.contains(&first) {
        return line;
    }
    let rest = chars.as_str();
    if first.is_ascii() && !rest.starts_with(char::is_whitespace) {
        return line;
    }
    rest.trim_start()
}

/// Entries with user bullets stripped; entries that were only a glyph are dropped.
pub fn list_items(text: &str) -> Vec<&str> {
    entries(text)
        .into_iter()
        .map(strip_bullet)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Short tags for chip rows: entries split further on `,`, `;` and `|`.
pub fn chip_items(text: &str) -> Vec<&str> {
    list_items(text)
        .into_iter()
        .flat_map(|item| item.split([',', ';', '|']))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// True when an entry reads like an institution or employer line rather than a detail.
///
/// This is a content heuristic, not a parser: "Worked on a Project for ..." is
/// a heading line too.
pub fn looks_like_heading_line(line: &str) -> bool {
    HEADING_KEYWORDS.iter().any(|keyword| line.contains(keyword))
}

/// Splits "Title: body" / "Title - body" into its two halves. Without a
/// separator the whole entry is the title.
pub fn split_title_body(entry: &str) -> (&str, &str) {
    for separator in [": ", " - ", " – ", " — ", ":"] {
        if let Some((title, body)) = entry.split_once(separator) {
            let title = title.trim();
            if !title.is_empty() {
                return (title, body.trim());
            }
        }
    }
    (entry.trim(), "")
}

/// Up to three initials, used for watermarks.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_alphanumeric())
        .take(3)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Encodes text for a simple font with `/WinAnsiEncoding`.
///
/// Latin-1 maps straight through, the typographic punctuation in 0x80..=0x9F
/// is remapped, and anything else becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\t' => b' ',
        ' '..='~' => c as u8,
        '\u{A0}'..='\u{FF}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_drop_blank_lines() {
        assert_eq!(entries("  Python \n\n  \nSQL\n"), vec!["Python", "SQL"]);
        assert!(entries("").is_empty());
    }

    #[test]
    fn test_strip_bullet_glyphs() {
        assert_eq!(strip_bullet("• Led the robotics club"), "Led the robotics club");
        assert_eq!(strip_bullet("- Built a parser"), "Built a parser");
        assert_eq!(strip_bullet("* Tutored juniors"), "Tutored juniors");
        assert_eq!(strip_bullet("–Volunteered"), "Volunteered");
        assert_eq!(strip_bullet("-5% build time"), "-5% build time");
        assert_eq!(strip_bullet("Plain line"), "Plain line");
    }

    #[test]
    fn test_list_items_skip_glyph_only_lines() {
        assert_eq!(list_items("•\n- Rust\n*"), vec!["Rust", "*"]);
    }

    #[test]
    fn test_chip_items_split_on_commas() {
        assert_eq!(
            chip_items("Python, SQL\n• Rust; Go | C"),
            vec!["Python", "SQL", "Rust", "Go", "C"]
        );
    }

    #[test]
    fn test_heading_predicate_keywords() {
        assert!(looks_like_heading_line("Anna University, B.E. CSE"));
        assert!(looks_like_heading_line("PSG College of Technology"));
        assert!(looks_like_heading_line("Intern, Acme Company"));
        assert!(looks_like_heading_line("Capstone Project: campus portal"));
        assert!(looks_like_heading_line("AWS Certificate of completion"));
        assert!(!looks_like_heading_line("Reduced query time by 40%"));
        // Case-sensitive on purpose.
        assert!(!looks_like_heading_line("state university"));
    }

    #[test]
    fn test_split_title_body() {
        assert_eq!(split_title_body("Portal: React Native app"), ("Portal", "React Native app"));
        assert_eq!(split_title_body("Chatbot - FAQ assistant"), ("Chatbot", "FAQ assistant"));
        assert_eq!(split_title_body("Just a title"), ("Just a title", ""));
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Asha Rao"), "AR");
        assert_eq!(initials("  mary ann lee smith "), "MAL");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_win_ansi_encoding() {
        assert_eq!(encode_win_ansi("Asha Rao"), b"Asha Rao".to_vec());
        assert_eq!(encode_win_ansi("café"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(encode_win_ansi("•–"), vec![0x95, 0x96]);
        assert_eq!(encode_win_ansi("日本"), b"??".to_vec());
    }
}
