/// Move the row at `from` onto the row at `to`, the way a drop does:
/// dragging downwards lands after the target, dragging upwards lands before it.
/// Returns `None` when nothing moves (same row or out of range).
pub fn drop_reorder(ids: &[String], from: usize, to: usize) -> Option<Vec<String>> {
    if from == to || from >= ids.len() || to >= ids.len() {
        return None;
    }

    let mut reordered = ids.to_vec();
    let dragged = reordered.remove(from);
    // Inserting at `to` after the removal lands after the target when moving
    // down and before it when moving up.
    reordered.insert(to, dragged);
    Some(reordered)
}

/// Get the marker shown on the row that is being dragged or targeted
pub fn drag_marker(is_source: bool, is_target: bool) -> &'static str {
    match (is_source, is_target) {
        (true, _) => "⇅ ",
        (false, true) => "▸ ",
        _ => "  ",
    }
}
