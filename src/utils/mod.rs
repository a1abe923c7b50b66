/// Build a string of `count` copies of `ch`.
///
/// Used for soft tabs (`repeat(' ', tab_width)`) and tab-only prefixes.
pub fn repeat(ch: char, count: usize) -> String {
    std::iter::repeat_n(ch, count).collect()
}
