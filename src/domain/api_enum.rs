//! Closed enums that accept unknown wire values.
//!
//! Deserializing never fails: unrecognized values become `Unknown`, which
//! only [`Validate`](crate::Validate) rejects. `Unknown` cannot be serialized.

/// Declare a closed enum over string or boolean wire values.
///
/// ```ignore
/// api_enum! {
///     pub enum SearchMethod {
///         Vector = "vector",
///         Hybrid = "hybrid",
///     }
/// }
/// ```
#[macro_export]
macro_rules! api_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this version of the SDK does not recognize.
            Unknown,
        }

        impl $name {
            pub const KNOWN: &'static [$name] = &[$($name::$variant),+];

            /// 線上格式的值；`Unknown` 沒有對應值
            pub fn to_json(&self) -> Option<$crate::serde_json::Value> {
                match self {
                    $( $name::$variant => Some($crate::serde_json::json!($value)), )+
                    $name::Unknown => None,
                }
            }

            pub fn from_json(value: &$crate::serde_json::Value) -> Self {
                $(
                    if *value == $crate::serde_json::json!($value) {
                        return $name::$variant;
                    }
                )+
                $name::Unknown
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self.to_json() {
                    Some($crate::serde_json::Value::String(s)) => f.write_str(&s),
                    Some(other) => write!(f, "{}", other),
                    None => f.write_str("unknown"),
                }
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                match self.to_json() {
                    Some(value) => $crate::serde::Serialize::serialize(&value, serializer),
                    None => Err(<S::Error as $crate::serde::ser::Error>::custom(concat!(
                        "cannot serialize an unknown ",
                        stringify!($name),
                        " value"
                    ))),
                }
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let value = <$crate::serde_json::Value as $crate::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Ok($name::from_json(&value))
            }
        }

        impl $crate::Validate for $name {
            fn validate(&self) -> $crate::Result<()> {
                if self.is_known() {
                    Ok(())
                } else {
                    Err($crate::SdkError::invalid_data(concat!(
                        "value is not a known ",
                        stringify!($name)
                    )))
                }
            }
        }
    };
}
