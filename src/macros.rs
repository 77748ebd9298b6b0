//! internal macros

/// Define a closed enum of string tokens.
///
/// Generates `as_str`, [`Display`](std::fmt::Display), a case-insensitive
/// [`FromStr`](std::str::FromStr) which rejects unknown tokens and serde
/// (de)serialization based on the token. There is no catch-all variant:
/// a value of the enum is always one of the declared tokens.
macro_rules! enum_builder {
    (
        $(#[$m:meta])*
        $enum_vis:vis enum $enum_name:ident
        { $( $(#[$enum_meta:meta])* $enum_var:ident => $enum_val:literal ),+ $(,)? }
    ) => {
        $(#[$m])*
        #[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
        $enum_vis enum $enum_name {
            $(
                $(#[$enum_meta])*
                $enum_var
            ),+
        }

        impl $enum_name {
            /// All variants, in declaration order.
            $enum_vis const ALL: &'static [Self] = &[$(Self::$enum_var),+];

            /// Return the token used for this variant on the wire.
            #[must_use]
            $enum_vis const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$enum_var => $enum_val ),+
                }
            }
        }

        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = $crate::error::UnknownVariantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($enum_val) {
                        return Ok(Self::$enum_var);
                    }
                )+
                Err($crate::error::UnknownVariantError::new(stringify!($enum_name), s))
            }
        }

        impl ::serde::Serialize for $enum_name {
            #[inline]
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = <::std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
                s.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use enum_builder;

/// Generate a `with_*` and a `set_*` method from a single builder function.
///
/// The body is written once against `self` and must evaluate to `self`
/// (or `Ok(self)` for the fallible `try_with_*`/`try_set_*` form).
macro_rules! generate_set_and_with {
    (
        $(#[$outer_doc:meta])*
        $vis:vis fn $fn_name:ident(mut $self_token:ident, $($param_name:ident: $param_ty:ty),+ $(,)?) -> Self {
            $($body:tt)*
        }
    ) => {
        ::paste::paste! {
            $(#[$outer_doc])*
            #[must_use]
            $vis fn [<with_ $fn_name>](mut $self_token, $($param_name: $param_ty),+) -> Self {
                $($body)*
            }

            $(#[$outer_doc])*
            $vis fn [<set_ $fn_name>](&mut $self_token, $($param_name: $param_ty),+) -> &mut Self {
                $($body)*
            }
        }
    };
    (
        $(#[$outer_doc:meta])*
        $vis:vis fn $fn_name:ident(mut $self_token:ident, $($param_name:ident: $param_ty:ty),+ $(,)?) -> Result<Self, $error:ty> {
            $($body:tt)*
        }
    ) => {
        ::paste::paste! {
            $(#[$outer_doc])*
            $vis fn [<try_with_ $fn_name>](mut $self_token, $($param_name: $param_ty),+) -> Result<Self, $error> {
                $($body)*
            }

            $(#[$outer_doc])*
            $vis fn [<try_set_ $fn_name>](&mut $self_token, $($param_name: $param_ty),+) -> Result<&mut Self, $error> {
                $($body)*
            }
        }
    };
}

pub(crate) use generate_set_and_with;
