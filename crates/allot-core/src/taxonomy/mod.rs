//! Closed enumerations used to classify instruments.
//!
//! - [`geo`]: countries, regions and super regions
//! - [`gecs`]: industries, industry groups, sectors and super sectors
//! - [`stylebox`]: sizes and styles
//!
//! Every enumeration exposes the same surface: `ALL`, `id()` (the identifier used
//! in constraint sets and on the wire), `name()` (human-readable), `Display`
//! (the identifier), `FromStr` and serde.

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $variant:ident => $display:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                #[doc = $display]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The identifier used in constraint sets and serialized data.
            #[must_use]
            pub const fn id(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }

            /// The human-readable name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $display,)+
                }
            }

            /// Looks up a value by its identifier (exact match).
            #[must_use]
            pub fn from_id(id: &str) -> Option<Self> {
                $(
                    if id == stringify!($variant) {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.id())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_id(s.trim())
                    .ok_or_else(|| $crate::error::CoreError::unknown_identifier($kind, s))
            }
        }
    };
}

pub mod gecs;
pub mod geo;
pub mod stylebox;

pub use gecs::{Industry, IndustryGroup, Sector, SuperSector};
pub use geo::{Country, Region, SuperRegion};
pub use stylebox::{Size, Style};
