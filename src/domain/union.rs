use crate::utils::error::{Result, SdkError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// The closed set of shapes a [`Union`] may take.
///
/// Implemented by [`union_variants!`](crate::union_variants).
pub trait Variants: Sized + Clone + fmt::Debug {
    const NAME: &'static str;

    /// 依宣告順序嘗試每個變體：先反序列化，再驗證；第一個通過者勝出
    fn bind(element: &Value) -> Option<Self>;

    fn to_element(&self) -> Result<Value>;

    fn validate_variant(&self) -> Result<()>;
}

/// A "one of" value: the original JSON element plus the variant it bound to,
/// if any.
#[derive(Clone)]
pub struct Union<V: Variants> {
    element: Value,
    variant: Option<V>,
}

impl<V: Variants> Union<V> {
    pub fn new(variant: impl Into<V>) -> Result<Self> {
        let variant = variant.into();
        let element = variant.to_element()?;
        Ok(Self {
            element,
            variant: Some(variant),
        })
    }

    pub fn from_json(element: Value) -> Self {
        let variant = V::bind(&element);
        if variant.is_none() {
            tracing::debug!("No variant of {} matched, keeping raw element", V::NAME);
        }
        Self { element, variant }
    }

    pub fn json(&self) -> &Value {
        &self.element
    }

    pub fn is_typed(&self) -> bool {
        self.variant.is_some()
    }

    pub fn variant(&self) -> Result<&V> {
        self.variant.as_ref().ok_or_else(Self::untyped_error)
    }

    pub fn into_variant(self) -> Result<V> {
        self.variant.ok_or_else(Self::untyped_error)
    }

    /// Map the bound variant through `f`; fails on an untyped instance.
    pub fn match_with<R>(&self, f: impl FnOnce(&V) -> R) -> Result<R> {
        self.variant().map(f)
    }

    fn untyped_error() -> SdkError {
        SdkError::invalid_data(format!("data did not match any variant of {}", V::NAME))
    }
}

impl<V: Variants> Validate for Union<V> {
    fn validate(&self) -> Result<()> {
        self.variant()?.validate_variant()
    }
}

impl<V: Variants> PartialEq for Union<V> {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

impl<V: Variants> fmt::Debug for Union<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variant {
            Some(variant) => fmt::Debug::fmt(variant, f),
            None => write!(f, "{}(untyped {})", V::NAME, self.element),
        }
    }
}

impl<V: Variants> Serialize for Union<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.element.serialize(serializer)
    }
}

impl<'de, V: Variants> Deserialize<'de> for Union<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_json)
    }
}

/// Declare a union type and its variant enum.
///
/// ```ignore
/// union_variants! {
///     pub union PaymentSource {
///         Card(Card),
///         Token(String),
///     }
/// }
/// ```
///
/// Generates `PaymentSourceVariant` and `type PaymentSource = Union<PaymentSourceVariant>`.
#[macro_export]
macro_rules! union_variants {
    (
        $(#[$meta:meta])*
        $vis:vis union $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident($ty:ty) ),+ $(,)?
        }
    ) => {
        $crate::paste::paste! {
            #[doc = concat!("The variants of [`", stringify!($name), "`].")]
            #[derive(Debug, Clone, PartialEq)]
            $vis enum [<$name Variant>] {
                $( $(#[$vmeta])* $variant($ty), )+
            }

            impl $crate::domain::union::Variants for [<$name Variant>] {
                const NAME: &'static str = stringify!($name);

                fn bind(element: &$crate::serde_json::Value) -> Option<Self> {
                    $(
                        if let Ok(candidate) = <$ty as $crate::serde::Deserialize>::deserialize(element) {
                            if $crate::Validate::validate(&candidate).is_ok() {
                                return Some([<$name Variant>]::$variant(candidate));
                            }
                        }
                    )+
                    None
                }

                fn to_element(&self) -> $crate::Result<$crate::serde_json::Value> {
                    match self {
                        $( [<$name Variant>]::$variant(inner) => Ok($crate::serde_json::to_value(inner)?), )+
                    }
                }

                fn validate_variant(&self) -> $crate::Result<()> {
                    match self {
                        $( [<$name Variant>]::$variant(inner) => $crate::Validate::validate(inner), )+
                    }
                }
            }

            $(
                impl From<$ty> for [<$name Variant>] {
                    fn from(inner: $ty) -> Self {
                        [<$name Variant>]::$variant(inner)
                    }
                }
            )+

            $(#[$meta])*
            $vis type $name = $crate::domain::union::Union<[<$name Variant>]>;
        }
    };
}
