/// A backend record addressable by a stable identifier.
///
/// The identifier is assigned server-side (`_id` on the wire) and is the key
/// used for local reconciliation after update/delete calls. Rows without an
/// identifier are a construction-time error, never a positional fallback.
pub trait Record {
    fn id(&self) -> &str;
}
