//! # Axis Definitions
//!
//! Every axis is a closed sum type serialized as `{"kind": "...", ...payload}`.
//! [`define_axis!`] declares the enum, its serde representation and its
//! [`AxisKind`] implementation in one place so the kind strings cannot drift
//! from the variants.

/// Discriminator access shared by every axis enum.
pub trait AxisKind {
    /// All kind strings this axis can produce, in declaration order.
    const KINDS: &'static [&'static str];

    /// The kind string of this value.
    fn kind(&self) -> &'static str;
}

/// Declare an axis enum.
///
/// ```ignore
/// define_axis! {
///     /// Whether the graph has vertices.
///     Cardinality {
///         Empty => "empty",
///         Finite { vertices: usize, edges: usize } => "finite",
///     }
/// }
/// ```
macro_rules! define_axis {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident $({ $( $(#[$fmeta:meta])* $field:ident : $fty:ty ),* $(,)? })? => $kind:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(tag = "kind")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $kind)]
                $variant $({ $( $(#[$fmeta])* $field: $fty ),* })?,
            )+
        }

        impl $crate::axis::AxisKind for $name {
            const KINDS: &'static [&'static str] = &[$($kind),+];

            fn kind(&self) -> &'static str {
                match self {
                    $( Self::$variant { .. } => $kind, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::axis::AxisKind::kind(self))
            }
        }
    };
}

pub(crate) use define_axis;

// =============================================================================
// TESTS
// =============================================================================
