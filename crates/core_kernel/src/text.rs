//! Text helpers for rendering entity names

/// Derives display initials from a person or organisation name.
///
/// Two or more words yield the first letters of the first and last word;
/// a single word yields its first two characters. Empty input yields "?".
pub fn initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [] => "?".to_string(),
        [single] => single.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => {
            let mut out = String::new();
            out.extend(first.chars().next());
            out.extend(last.chars().next());
            out.to_uppercase()
        }
    }
}
