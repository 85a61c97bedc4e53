//! Course-name text derivations.

use std::sync::LazyLock;

use regex::Regex;

/// Marker that the Chinese course name lists credit programs.
pub const CREDIT_PROGRAM_MARKER: &str = "學分學程";

static LINE_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</br>.*").expect("Invalid line break regex"));

static CREDIT_PROGRAM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r".*\[ 學分學程：(.+?) \].*").expect("Invalid credit program regex")
});

/// Removes everything from a literal `</br>` to the end of its line.
pub fn strip_line_break(name: &str) -> String {
    LINE_BREAK_REGEX.replace_all(name, "").into_owned()
}

/// Credit programs named in `[ 學分學程：... ]`, `/`-separated.
///
/// Returns an empty string when the name carries no credit program marker.
pub fn credit_programs(name: &str) -> String {
    if !name.contains(CREDIT_PROGRAM_MARKER) {
        return String::new();
    }
    CREDIT_PROGRAM_REGEX
        .replace_all(name, "${1}")
        .split(' ')
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_line_break_drops_tail() {
        assert_eq!(strip_line_break("微積分</br>extra"), "微積分");
        assert_eq!(strip_line_break("微積分</br>"), "微積分");
        assert_eq!(strip_line_break("微積分"), "微積分");
        assert_eq!(strip_line_break(""), "");
    }

    #[test]
    fn credit_programs_joined() {
        let name = "資料科學導論</br>[ 學分學程：人工智慧學程 資料科學學程 ]";
        assert_eq!(credit_programs(name), "人工智慧學程/資料科學學程");
    }

    #[test]
    fn credit_programs_single() {
        let name = "程式設計[ 學分學程：軟體學程 ]備註";
        assert_eq!(credit_programs(name), "軟體學程");
    }

    #[test]
    fn credit_programs_absent() {
        assert_eq!(credit_programs("普通物理"), "");
        assert_eq!(credit_programs(""), "");
    }

    #[test]
    fn marker_without_brackets_keeps_name() {
        // The marker alone does not match the bracket pattern.
        assert_eq!(credit_programs("學分學程 導論"), "學分學程/導論");
    }
}
