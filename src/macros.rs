/// Declares an enum together with its `Symbol` table.
///
/// The first variant becomes the `Default`, which is the value accessors
/// return once a sentence has failed. Variants are separated by commas
/// without a trailing comma.
#[macro_export]
macro_rules! symbols {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(#[$fmeta:meta])* $first:ident => $fsym:expr
            $(, $(#[$vmeta:meta])* $variant:ident => $sym:expr)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(#[$fmeta])* $first,
            $($(#[$vmeta])* $variant,)*
        }

        impl $crate::symbol::Symbol for $name {
            const NAME: &'static str = stringify!($name);
            const SYMBOLS: &'static [&'static str] = &[$fsym $(, $sym)*];

            fn from_symbol(s: &str) -> Option<Self> {
                if s.eq_ignore_ascii_case($fsym) {
                    return Some($name::$first);
                }
                $(
                    if s.eq_ignore_ascii_case($sym) {
                        return Some($name::$variant);
                    }
                )*
                None
            }

            fn symbol(&self) -> &'static str {
                match *self {
                    $name::$first => $fsym,
                    $($name::$variant => $sym,)*
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$first
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str($crate::symbol::Symbol::symbol(self))
            }
        }
    };
}
