/// Numeric conversion helpers.
///
/// Converts integers to floats for mixed arithmetic without silent precision
/// loss. Conversions return a `Result`, which is `Err` when the integer is too
/// large to be represented exactly.
pub mod num;
