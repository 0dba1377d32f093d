use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Word-wrap `s` to lines of at most `width` display cells.
///
/// Words wider than a line are broken at character boundaries, which also
/// covers scripts written without spaces.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::from("");
    }

    let mut lines: Vec<String> = vec![];
    for paragraph in s.lines() {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if line_width > 0 && line_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width > width {
                for c in word.chars() {
                    let char_width = c.width().unwrap_or(0);
                    if line_width + char_width > width {
                        lines.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(c);
                    line_width += char_width;
                }
                continue;
            }

            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }

        lines.push(line);
    }

    lines.join("\n")
}

pub fn truncate_text(s: &str, max_height: usize) -> String {
    if max_height == 0 {
        return String::from("");
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() > max_height {
        if max_height == 1 {
            String::from("...")
        } else {
            format!("{}\n...", lines[..max_height - 1].join("\n"))
        }
    } else {
        s.to_string()
    }
}

/// Wrap `content` in typographic quotes
pub fn quote(content: &str) -> String {
    format!("“{}”", content.trim())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wrap_text_no_wrap_alnum() {
        let actual = wrap_text("hello, world!", 13);
        let expected = "hello, world!";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_wrap_at_word_boundary() {
        let actual = wrap_text("hello, world!", 8);
        let expected = "hello,\nworld!";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_breaks_long_word() {
        let actual = wrap_text("supercalifragilistic", 8);
        let expected = "supercal\nifragili\nstic";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_wrap_double_width() {
        let actual = wrap_text("こんにちは、世界！", 7);
        let expected = "こんに\nちは、\n世界！";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_wrap_emoji() {
        let actual = wrap_text("🫲🫱🫲🫱🫲🫱", 5);
        let expected = "🫲🫱\n🫲🫱\n🫲🫱";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_keeps_paragraphs() {
        let actual = wrap_text("first line\nsecond", 20);
        let expected = "first line\nsecond";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        let actual = wrap_text("hello, world!", 0);
        let expected = "";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_truncate_text_no_truncate() {
        let actual = truncate_text("foo\nbar\nbaz", 3);
        let expected = "foo\nbar\nbaz";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_truncate_text_truncate() {
        let actual = truncate_text("foo\nbar\nbaz", 2);
        let expected = "foo\n...";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_truncate_text_single_line() {
        let actual = truncate_text("foo\nbar", 1);
        let expected = "...";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("  Loved it. "), "“Loved it.”");
    }
}
