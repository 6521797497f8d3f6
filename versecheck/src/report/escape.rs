/// Escapes the five HTML-significant characters, leaving everything else
/// untouched. Every piece of externally sourced text goes through here
/// before it is placed into markup; nothing from the backend is ever
/// trusted as HTML.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
