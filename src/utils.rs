//! Small display helpers shared by the terminal front end and the JSON dump.

/// Format a Pokémon `name` into a human-friendly form.
///
/// Examples: `mr-mime` -> `Mr Mime`, `ho_oh` -> `Ho Oh`.
pub fn format_name(name: &str) -> String {
    let replaced = name.replace(['-', '_'], " ");
    let parts: Vec<String> = replaced.split_whitespace().map(capitalize).collect();
    parts.join(" ")
}

/// Upper-case the first character, lower-case the rest.
pub fn capitalize(word: &str) -> String {
    let mut chs = word.chars();
    match chs.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chs.as_str().to_lowercase(),
    }
}

/// `25` -> `#025`. Ids past three digits are printed in full.
pub fn format_dex_number(id: u32) -> String {
    format!("#{:03}", id)
}

pub fn text_to_lines(s: &str, width: usize) -> Vec<String> {
    // Greedy wrap; a single word longer than `width` gets its own line.
    let mut lines = vec![];
    let mut current = String::new();
    for word in s.split_whitespace() {
        if current.len() + word.len() + 1 > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Pastel background per type name, as RGB.
pub fn type_color(type_name: &str) -> (u8, u8, u8) {
    match type_name.to_lowercase().as_str() {
        "normal" => (0xEA, 0xEA, 0xDE),
        "fire" => (0xF7, 0xE2, 0xCC),
        "water" => (0xD6, 0xEA, 0xF8),
        "grass" => (0xD2, 0xEB, 0xD3),
        "electric" => (0xF9, 0xF1, 0xD0),
        "ice" => (0xDB, 0xF0, 0xF0),
        "fighting" => (0xE6, 0xD0, 0xD0),
        "poison" => (0xE0, 0xD0, 0xE0),
        "ground" => (0xEB, 0xDD, 0xBF),
        "flying" => (0xDC, 0xE5, 0xEA),
        "psychic" => (0xF6, 0xD6, 0xD6),
        "bug" => (0xE0, 0xE6, 0xC8),
        "rock" => (0xE2, 0xDF, 0xC7),
        "ghost" => (0xD7, 0xD2, 0xE0),
        "dragon" => (0xD8, 0xD0, 0xF0),
        "steel" => (0xE6, 0xE6, 0xEB),
        "dark" => (0xD6, 0xD1, 0xD1),
        "fairy" => (0xF4, 0xD6, 0xDF),
        _ => (0xF2, 0xF2, 0xF2),
    }
}
