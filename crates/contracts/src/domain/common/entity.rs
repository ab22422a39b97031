/// Static metadata every domain record type exposes to the UI and the
/// data layer: REST collection path, display names, empty-state text.
pub trait Entity {
    /// Server-assigned identifier.
    fn id(&self) -> i32;

    /// REST path segment: `GET /api/{collection_name}`.
    fn collection_name() -> &'static str;

    /// Singular display name ("Player").
    fn element_name() -> &'static str;

    /// Plural display name ("Players").
    fn list_name() -> &'static str;

    /// Message for the explicit empty-state render path.
    fn empty_message() -> String {
        format!("No {} Found", Self::list_name())
    }
}
