/// Characters tree-drawing tools put in front of an entry name.
const TREE_GLYPHS: &[char] = &['│', '├', '└', '─', '-', '+', '|'];

/// Bullet markers accepted by the layered notation, including the space.
const BULLET_MARKERS: &[&str] = &["- ", "* "];

/// Line-level helpers shared by the outline parsers.
pub trait OutlineLineExt {
    /// Number of leading space characters. Tabs are not counted.
    fn leading_spaces(&self) -> usize;

    /// True for markdown fences (```` ``` ```` or `~~~`) wrapping an outline.
    fn is_code_fence(&self) -> bool;

    /// Remainder after a `- ` or `* ` marker on the trimmed line, trimmed.
    fn strip_bullet(&self) -> Option<&str>;

    /// Character column of the first alphanumeric, `_` or `.` character.
    fn name_column(&self) -> Option<usize>;

    /// Drops leading tree glyphs and whitespace, then surrounding whitespace
    /// and a single trailing `/`.
    fn strip_tree_decoration(&self) -> &str;
}

impl OutlineLineExt for str {
    fn leading_spaces(&self) -> usize {
        self.chars().take_while(|c| *c == ' ').count()
    }

    fn is_code_fence(&self) -> bool {
        let trimmed = self.trim_start();
        trimmed.starts_with("```") || trimmed.starts_with("~~~")
    }

    fn strip_bullet(&self) -> Option<&str> {
        let trimmed = self.trim();
        BULLET_MARKERS
            .iter()
            .find_map(|marker| trimmed.strip_prefix(marker))
            .map(str::trim)
    }

    fn name_column(&self) -> Option<usize> {
        self.chars()
            .position(|c| c.is_alphanumeric() || c == '_' || c == '.')
    }

    fn strip_tree_decoration(&self) -> &str {
        let stripped = self
            .trim_start_matches(|c: char| c.is_whitespace() || TREE_GLYPHS.contains(&c))
            .trim();
        stripped.strip_suffix('/').unwrap_or(stripped).trim_end()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("src", 0)]
    #[case("  - src", 2)]
    #[case("    * main.go", 4)]
    #[case("\t- tabbed", 0)]
    fn counts_leading_spaces(#[case] line: &str, #[case] expected: usize) {
        assert_eq!(line.leading_spaces(), expected);
    }

    #[rstest]
    #[case("- src", Some("src"))]
    #[case("  *   main.go  ", Some("main.go"))]
    #[case("-src", None)]
    #[case("src", None)]
    #[case("-", None)]
    fn strips_bullets(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(line.strip_bullet(), expected);
    }

    #[rstest]
    #[case("├── src/", Some(4))]
    #[case("│   └── main.go", Some(8))]
    #[case("    _private.py", Some(4))]
    #[case("│   ├── .env", Some(8))]
    #[case("---", None)]
    #[case("│   │", None)]
    fn finds_name_column(#[case] line: &str, #[case] expected: Option<usize>) {
        assert_eq!(line.name_column(), expected);
    }

    #[rstest]
    #[case("├── src/", "src")]
    #[case("│   └── main.go", "main.go")]
    #[case("+-- lib", "lib")]
    #[case("|   `-- odd", "`-- odd")]
    #[case("└── docs/  ", "docs")]
    fn strips_tree_decoration(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(line.strip_tree_decoration(), expected);
    }

    #[rstest]
    #[case("```", true)]
    #[case("  ```text", true)]
    #[case("~~~", true)]
    #[case("- ``", false)]
    fn detects_code_fences(#[case] line: &str, #[case] expected: bool) {
        assert!(line.is_code_fence() == expected);
    }
}
