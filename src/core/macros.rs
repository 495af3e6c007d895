//! Macros for declaring closed cell-state enumerations.

/// Declare a closed enumeration of cell states, one variant per
/// `(alpha, beta, delta)` flag tuple.
///
/// The macro generates the enum together with:
/// - `ALL`: every variant in declaration order
/// - `flags()`: the variant's binary flag tuple
/// - `label()`: the fixed display string, e.g. `"1, 0, 0"`
/// - `from_flags()`: the inverse lookup, failing with
///   [`StateError::UnknownFlags`](crate::core::StateError) for tuples that are
///   not declared
///
/// # Example
///
/// ```
/// use islet::cell_states;
///
/// cell_states! {
///     pub enum Pair {
///         Off = (0, 0, 0),
///         On = (1, 0, 0),
///     }
/// }
///
/// assert_eq!(Pair::On.label(), "1, 0, 0");
/// assert_eq!(Pair::from_flags(0, 0, 0).unwrap(), Pair::Off);
/// assert!(Pair::from_flags(1, 1, 0).is_err());
/// ```
#[macro_export]
macro_rules! cell_states {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = ($alpha:literal, $beta:literal, $delta:literal)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug,
            serde::Serialize, serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every declared state, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Binary `(alpha, beta, delta)` flags of this state.
            pub const fn flags(self) -> (u8, u8, u8) {
                match self {
                    $(Self::$variant => ($alpha, $beta, $delta)),*
                }
            }

            /// Fixed display string of this state.
            pub const fn label(self) -> &'static str {
                match self {
                    $(
                        Self::$variant => concat!(
                            stringify!($alpha), ", ",
                            stringify!($beta), ", ",
                            stringify!($delta)
                        )
                    ),*
                }
            }

            /// Look up the state declared for a flag tuple.
            pub fn from_flags(
                alpha: u8,
                beta: u8,
                delta: u8,
            ) -> Result<Self, $crate::core::StateError> {
                match (alpha, beta, delta) {
                    $(($alpha, $beta, $delta) => Ok(Self::$variant),)*
                    _ => Err($crate::core::StateError::UnknownFlags { alpha, beta, delta }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}
