//! Free-form input to canonical id.

use crate::core::error::HallwayError;
use crate::core::ids::{RoomId, RoomKey};
use crate::core::layout::Layout;

/// Resolve what a person typed into a canonical id.
///
/// Whitespace is trimmed and case is ignored. Special-area names (and their
/// aliases) are tried before canonical ids. A miss reports the input exactly
/// as given.
pub fn resolve(layout: &Layout, input: &str) -> Result<RoomId, HallwayError> {
    let wanted = input.trim();

    for area in layout.special_areas() {
        let named = area.display_name.eq_ignore_ascii_case(wanted)
            || area
                .kind
                .aliases()
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(wanted));
        if named {
            tracing::trace!(input, id = %area.id, "resolved special area by name");
            return Ok(area.id.clone());
        }
    }

    if let Some(key) = RoomKey::decode(wanted) {
        let id = key.encode();
        if layout.room(&id).is_some() {
            tracing::trace!(input, id = %id, "resolved canonical id");
            return Ok(id);
        }
    }

    tracing::trace!(input, "no room matches");
    Err(HallwayError::RoomNotFound(input.to_string()))
}
