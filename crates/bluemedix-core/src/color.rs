//! Deterministic name-to-color hashing for avatar backgrounds.
//!
//! The output must be byte-identical to the console's historical palette:
//! screenshots and visual regression baselines depend on it, so the 32-bit
//! wraparound semantics of the original hash are reproduced exactly.

/// Color used when the name is empty.
pub const FALLBACK: &str = "#1976d2";

/// Map a display name to an RGB hex string, e.g. `"#410000"` for `"A"`.
///
/// The hash folds UTF-16 code units with `hash = code + ((hash << 5) - hash)`
/// (`hash * 31 + code`) in 32-bit signed wraparound arithmetic, then renders
/// the three low bytes in order as 2-digit lowercase hex.
pub fn color_for(name: &str) -> String {
  if name.is_empty() {
    return FALLBACK.to_owned();
  }

  let mut hash: i32 = 0;
  for code in name.encode_utf16() {
    hash = i32::from(code).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
  }

  let mut color = String::with_capacity(7);
  color.push('#');
  for i in 0..3 {
    let byte = (hash >> (i * 8)) & 0xff;
    color.push_str(&format!("{byte:02x}"));
  }
  color
}

/// Avatar initials: the first character of each whitespace-separated word.
pub fn initials(name: &str) -> String {
  name
    .split_whitespace()
    .filter_map(|word| word.chars().next())
    .collect()
}
