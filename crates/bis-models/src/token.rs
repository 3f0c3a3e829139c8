//! Closed token set declaration
//!
//! `closed_token_set!` declares an enum whose variants map one-to-one onto
//! wire literals, together with parsing, display and serde support.

macro_rules! closed_token_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($param:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $literal:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $literal)]
                $variant,
            )+
        }

        impl $name {
            /// Every member of the set, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire literal of the token
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $literal,)+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::bis_core::BisError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($literal => Ok($name::$variant),)+
                    _ => Err(::bis_core::BisError::invalid_argument(format!(
                        "Value `{}` is not of valid types for `{}` parameter.",
                        s, $param
                    ))),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
