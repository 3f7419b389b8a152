pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if max_len == 1 {
        return "…".to_string();
    }

    if s.char_indices().nth(max_len).is_none() {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .nth(max_len - 1)
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    let mut out = String::with_capacity(cut + '…'.len_utf8());
    out.push_str(&s[..cut]);
    out.push('…');
    out
}

/// Comma-separated molecule ids, cut short with a count of the remainder
/// once `max_len` characters would be exceeded.
pub fn id_summary<'a>(ids: impl IntoIterator<Item = &'a str>, max_len: usize) -> String {
    let ids: Vec<&str> = ids.into_iter().collect();
    let mut out = String::new();

    for (shown, id) in ids.iter().enumerate() {
        let sep = if shown == 0 { "" } else { ", " };
        let remaining = ids.len() - shown;
        let tail = if remaining > 1 {
            format!(", +{} more", remaining - 1)
        } else {
            String::new()
        };
        let needed = out.chars().count() + sep.len() + id.chars().count() + tail.chars().count();
        if needed > max_len && shown > 0 {
            out.push_str(&format!(" +{} more", remaining));
            return out;
        }
        out.push_str(sep);
        out.push_str(id);
    }

    out
}
