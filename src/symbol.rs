//! Closed sets of single-segment symbols, such as hemispheres or fix
//! qualities.
//!
//! Implementations are generated by the `symbols!` macro, which keeps the
//! variant list and its string table in one place.

/// An enumerated segment value with a fixed, ordered symbol table.
pub trait Symbol: Copy + Default {
    /// Type name used in error messages.
    const NAME: &'static str;
    /// Canonical symbols in declaration order.
    const SYMBOLS: &'static [&'static str];

    /// Looks up the variant for `s`, ignoring ASCII case. Only whole symbols
    /// match.
    fn from_symbol(s: &str) -> Option<Self>;

    /// The canonical symbol of this variant.
    fn symbol(&self) -> &'static str;
}
