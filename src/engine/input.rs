/// Splits the raw input blob into an ordered sequence of value tokens.
///
/// The input text is split on line breaks; each line is trimmed and empty
/// lines are discarded. The resulting tokens are consumed left-to-right, by
/// index, by whichever executor runs.
///
/// # Example
/// ```
/// use minirun::engine::input::tokenize;
///
/// let tokens = tokenize("  5 \n\n3\r\n");
/// assert_eq!(tokens, vec!["5".to_string(), "3".to_string()]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    input.lines()
         .map(str::trim)
         .filter(|line| !line.is_empty())
         .map(str::to_string)
         .collect()
}
