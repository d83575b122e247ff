//! Reserved characters and their HTML entity spellings.

/// Every character that is never written verbatim outside a fenced code block.
pub const ENTITY_TABLE: [(char, &str); 5] = [
    ('\'', "&apos;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('-', "&ndash;"),
];

/// The entity for `ch`, or `None` if `ch` is not reserved.
pub fn lookup(ch: char) -> Option<&'static str> {
    ENTITY_TABLE
        .iter()
        .find(|(reserved, _)| *reserved == ch)
        .map(|(_, entity)| *entity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_reserved_character() {
        assert_eq!(lookup('\''), Some("&apos;"));
        assert_eq!(lookup('<'), Some("&lt;"));
        assert_eq!(lookup('>'), Some("&gt;"));
        assert_eq!(lookup('"'), Some("&quot;"));
        assert_eq!(lookup('-'), Some("&ndash;"));
    }

    #[test]
    fn leaves_other_characters_alone() {
        assert_eq!(lookup('a'), None);
        assert_eq!(lookup('&'), None);
        assert_eq!(lookup('#'), None);
    }
}
