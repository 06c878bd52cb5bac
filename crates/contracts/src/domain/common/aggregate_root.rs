/// Root of an aggregate exposed over the API.
///
/// Every aggregate carries static naming metadata used for table names on
/// the backend and captions in the UI.
pub trait AggregateRoot {
    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name used for storage (e.g. "barang")
    fn collection_name() -> &'static str;

    /// Singular caption for the UI
    fn element_name() -> &'static str;

    /// Plural caption for the UI
    fn list_name() -> &'static str;

    /// Full system name, e.g. "a001_barang"
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
