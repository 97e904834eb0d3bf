use crate::config::DisplayConfig;
use unicode_width::UnicodeWidthStr;

/// Box-drawing characters for table borders
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub selector: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            selector: "►".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            selector: ">".to_string(),
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `display` - Display configuration to determine unicode vs ASCII
///
/// # Returns
/// A formatted string with the header text and underline separator matching the text width
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let separator_char = if double_line {
        &display.box_chars.double_horizontal
    } else {
        &display.box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Left-align `text` in a column of `width` terminal cells, truncating if needed
pub fn pad_right(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

/// Left-align `text` in at least `width` terminal cells; longer text is kept whole
pub fn pad_min(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(text.width())))
}

/// Inner width of a box holding `rows`: at least `min`, wide enough for every row
pub fn box_inner_width<'a, I>(rows: I, min: usize) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    rows.into_iter()
        .map(|row| row.width() + 2)
        .fold(min, usize::max)
}

/// Horizontal box border of `inner` cells between the given corner pieces
pub fn build_border(left: &str, right: &str, inner: usize, display: &DisplayConfig) -> String {
    format!("{}{}{}", left, display.box_chars.horizontal.repeat(inner), right)
}

/// One boxed content row: `│ text │` padded to `inner` cells
pub fn build_row(text: &str, inner: usize, display: &DisplayConfig) -> String {
    let v = &display.box_chars.vertical;
    format!("{} {} {}", v, pad_right(text, inner.saturating_sub(2)), v)
}
