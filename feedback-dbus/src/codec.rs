//! Property codec: wire dictionaries to property bags
//!
//! Decoding never fails. An entry whose value is not one of the four
//! bag-representable types is skipped and the rest of the dictionary is
//! still decoded; an empty dictionary yields an empty bag.

use feedback_core::PropList;

use crate::wire::{DictEntry, WireValue};

/// Decode a wire dictionary into a property bag.
///
/// Entries with `Uint64`, `Double` or nested `Dict` values are dropped with
/// a debug log; later entries overwrite earlier ones on key clash, matching
/// the bag's last-write-wins rule.
pub fn decode_properties(entries: &[DictEntry]) -> PropList {
    let mut properties = PropList::new();

    for entry in entries {
        match &entry.value {
            WireValue::Str(s) => properties.set_string(&entry.key, s.clone()),
            WireValue::Uint32(v) => properties.set_uint(&entry.key, *v),
            WireValue::Int32(v) => properties.set_int(&entry.key, *v),
            WireValue::Bool(v) => properties.set_bool(&entry.key, *v),
            other => {
                tracing::debug!(
                    "skipping property '{}' with unsupported value {:?}",
                    entry.key,
                    other
                );
            }
        }
    }

    properties
}
