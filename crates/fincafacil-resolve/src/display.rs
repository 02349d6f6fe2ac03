use fincafacil_core::Id;

/// Parse the UI combo-box display shape `"<id> - <name>"`.
///
/// The id prefix is unambiguous, so callers trust it directly without a
/// name lookup. Bare names (the import format) do not match and fall
/// through to a name lookup instead.
pub fn parse_display(input: &str) -> Option<(Id, &str)> {
    let (id_part, name) = input.split_once(" - ")?;
    let id = id_part.trim().parse::<Id>().ok()?;
    if id < 0 {
        return None;
    }
    Some((id, name.trim()))
}
