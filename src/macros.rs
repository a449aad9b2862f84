//! Internal macros for declaring protocol value types.

/// Declares a nominal newtype over a single protocol byte, along with its defined members and
/// their human-readable descriptions.
///
/// ```ignore
/// usb_value! {
///     /// Docs for the type.
///     pub struct TransferType;
///
///     /// Docs for the member.
///     CONTROL = 0 => "control",
/// }
/// ```
///
/// The generated type holds any `u8`, including values with no assigned meaning. It gets:
/// - an associated constant per member, and `ALL` listing them in declaration order;
/// - [Describe](crate::Describe), which returns `""` for unassigned values;
/// - [Display](std::fmt::Display), which writes the description;
/// - a [Debug] that shows the member name when there is one;
/// - `From<u8>` and `From<Self> for u8`, and nothing else, so two value types that happen to
///   share a bit width cannot be mixed up;
/// - a little-endian [binrw] implementation so it can be used directly as a descriptor field.
macro_rules! usb_value {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident;

        $(
            $(#[$member_meta:meta])*
            $member:ident = $value:expr => $description:literal,
        )+
    ) => {
        $(#[$meta])*
        #[binrw::binrw]
        #[brw(little)]
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[repr(transparent)]
        $vis struct $name(pub u8);

        impl $name {
            $(
                $(#[$member_meta])*
                pub const $member: $name = $name($value);
            )+

            /// Every member with an assigned meaning, in table order.
            pub const ALL: &'static [$name] = &[$($name::$member),+];

            const TABLE: &'static [($name, &'static str, &'static str)] = &[
                $(($name::$member, core::stringify!($member), $description)),+
            ];

            /// Returns the raw protocol byte.
            #[inline]
            pub const fn bits(self) -> u8 {
                self.0
            }

            /// Returns `true` if this value has an entry in the table of defined members.
            pub fn is_known(self) -> bool {
                Self::TABLE.iter().any(|(member, _, _)| *member == self)
            }

            fn lookup(self) -> Option<(&'static str, &'static str)> {
                Self::TABLE
                    .iter()
                    .find(|(member, _, _)| *member == self)
                    .map(|&(_, name, description)| (name, description))
            }
        }

        impl $crate::Describe for $name {
            fn describe(&self) -> &'static str {
                match self.lookup() {
                    Some((_, description)) => description,
                    None => "",
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str($crate::Describe::describe(self))
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self.lookup() {
                    Some((name, _)) => {
                        core::write!(f, "{}::{}", core::stringify!($name), name)
                    }
                    None => core::write!(f, "{}({:#04x})", core::stringify!($name), self.0),
                }
            }
        }

        impl From<u8> for $name {
            #[inline]
            fn from(value: u8) -> Self {
                $name(value)
            }
        }

        impl From<$name> for u8 {
            #[inline]
            fn from(value: $name) -> u8 {
                value.0
            }
        }
    };
}

pub(crate) use usb_value;
