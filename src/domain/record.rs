use crate::domain::raw::{FieldState, RawData};
use crate::utils::error::{Result, SdkError};
use crate::utils::validation::Validate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    RequiredNullable,
    Optional,
    OptionalNullable,
}

/// 欄位在 HTTP 請求中的位置；回應模型一律為 `Body`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Body,
    Path,
    Query,
    Header,
}

/// One declared field of a [`Schema`].
#[derive(Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub presence: Presence,
    pub location: Location,
    pub check: fn(&Value) -> Result<()>,
}

impl FieldSpec {
    pub fn validate_in(&self, raw: &RawData) -> Result<()> {
        match (raw.state(self.key), self.presence) {
            (FieldState::Absent, Presence::Required | Presence::RequiredNullable) => Err(
                SdkError::invalid_data(format!("'{}' cannot be absent", self.key)),
            ),
            (FieldState::Null, Presence::Required) => Err(SdkError::invalid_data(format!(
                "'{}' cannot be null",
                self.key
            ))),
            (FieldState::Absent, _) | (FieldState::Null, _) => Ok(()),
            (FieldState::Present, _) => match raw.get(self.key) {
                Some(value) => (self.check)(value).map_err(|e| e.in_field(self.key)),
                None => Ok(()),
            },
        }
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("key", &self.key)
            .field("presence", &self.presence)
            .field("location", &self.location)
            .finish()
    }
}

pub trait Schema: 'static {
    const NAME: &'static str;
    const FIELDS: &'static [FieldSpec];

    fn field(key: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|spec| spec.key == key)
    }
}

/// Deserialize `value` as `T` and validate the result.
pub fn check_field<T: DeserializeOwned + Validate>(value: &Value) -> Result<()> {
    let parsed = T::deserialize(value).map_err(|e| {
        SdkError::invalid_data(format!(
            "must be of type {}: {}",
            std::any::type_name::<T>(),
            e
        ))
    })?;
    parsed.validate()
}

/// A model over [`RawData`] whose fields are described by `S`.
///
/// Accessors are generated per model by [`raw_model!`](crate::raw_model); this
/// type only carries what every model shares.
pub struct RawRecord<S: Schema> {
    raw: RawData,
    _schema: PhantomData<fn() -> S>,
}

impl<S: Schema> RawRecord<S> {
    pub fn new() -> Self {
        Self {
            raw: RawData::new(),
            _schema: PhantomData,
        }
    }

    /// 從既有資料建立，不做驗證
    pub fn from_raw(map: Map<String, Value>) -> Self {
        Self {
            raw: RawData::from_map(map),
            _schema: PhantomData,
        }
    }

    pub fn raw(&self) -> &RawData {
        &self.raw
    }

    pub fn raw_mut(&mut self) -> &mut RawData {
        &mut self.raw
    }

    pub fn into_raw(self) -> RawData {
        self.raw
    }

    pub fn freeze(&mut self) {
        self.raw.freeze();
    }

    pub fn frozen(mut self) -> Self {
        self.raw.freeze();
        self
    }

    pub fn is_frozen(&self) -> bool {
        self.raw.is_frozen()
    }

    pub fn field_state(&self, key: &str) -> FieldState {
        self.raw.state(key)
    }

    pub fn unset(&mut self, key: &str) -> Result<()> {
        self.raw.unset(key).map(|_| ())
    }

    pub fn additional_properties(&self) -> Map<String, Value> {
        self.raw
            .as_map()
            .iter()
            .filter(|(key, _)| S::field(key).is_none())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    pub fn set_additional_property(&mut self, key: &str, value: Value) -> Result<()> {
        self.raw.set_raw(key, value)
    }
}

impl<S: Schema> Validate for RawRecord<S> {
    fn validate(&self) -> Result<()> {
        for spec in S::FIELDS {
            spec.validate_in(&self.raw)?;
        }
        Ok(())
    }
}

impl<S: Schema> Default for RawRecord<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Schema> Clone for RawRecord<S> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            _schema: PhantomData,
        }
    }
}

impl<S: Schema> PartialEq for RawRecord<S> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<S: Schema> fmt::Debug for RawRecord<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", S::NAME)?;
        fmt::Debug::fmt(&self.raw, f)
    }
}

impl<S: Schema> Serialize for RawRecord<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de, S: Schema> Deserialize<'de> for RawRecord<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Map::deserialize(deserializer).map(Self::from_raw)
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __presence {
    (required) => {
        $crate::domain::record::Presence::Required
    };
    (required_nullable) => {
        $crate::domain::record::Presence::RequiredNullable
    };
    (optional) => {
        $crate::domain::record::Presence::Optional
    };
    (optional_nullable) => {
        $crate::domain::record::Presence::OptionalNullable
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __location {
    () => {
        $crate::domain::record::Location::Body
    };
    (path) => {
        $crate::domain::record::Location::Path
    };
    (query) => {
        $crate::domain::record::Location::Query
    };
    (header) => {
        $crate::domain::record::Location::Header
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_accessors {
    (required, [$(#[$meta:meta])*], $field:ident, $ty:ty, $key:literal) => {
        $crate::paste::paste! {
            $(#[$meta])*
            pub fn $field(&self) -> $crate::Result<$ty> {
                self.raw().get_required($key)
            }

            pub fn [<set_ $field>](&mut self, value: impl Into<$ty>) -> $crate::Result<()> {
                let value: $ty = value.into();
                self.raw_mut().set($key, &value)
            }
        }
    };
    (required_nullable, [$(#[$meta:meta])*], $field:ident, $ty:ty, $key:literal) => {
        $crate::paste::paste! {
            $(#[$meta])*
            pub fn $field(&self) -> $crate::Result<Option<$ty>> {
                self.raw().get_required_nullable($key)
            }

            pub fn [<set_ $field>](&mut self, value: Option<$ty>) -> $crate::Result<()> {
                self.raw_mut().set_nullable($key, value)
            }
        }
    };
    (optional, [$(#[$meta:meta])*], $field:ident, $ty:ty, $key:literal) => {
        $crate::paste::paste! {
            $(#[$meta])*
            pub fn $field(&self) -> $crate::Result<Option<$ty>> {
                self.raw().get_nullable($key)
            }

            pub fn [<set_ $field>](&mut self, value: Option<$ty>) -> $crate::Result<()> {
                self.raw_mut().set_optional($key, value)
            }
        }
    };
    (optional_nullable, [$(#[$meta:meta])*], $field:ident, $ty:ty, $key:literal) => {
        $crate::paste::paste! {
            $(#[$meta])*
            pub fn $field(&self) -> $crate::Result<Option<$ty>> {
                self.raw().get_nullable($key)
            }

            pub fn [<set_ $field>](&mut self, value: Option<$ty>) -> $crate::Result<()> {
                self.raw_mut().set_nullable($key, value)
            }

            pub fn [<clear_ $field>](&mut self) -> $crate::Result<()> {
                self.unset($key)
            }
        }
    };
}

/// Declare a model backed by [`RawRecord`].
///
/// ```ignore
/// raw_model! {
///     /// A document vault.
///     pub struct Vault {
///         required id: String = "id",
///         optional description: String = "description",
///         optional_nullable expires_at: String = "expiresAt",
///     }
/// }
/// ```
///
/// Generates `VaultSchema`, `type Vault = RawRecord<VaultSchema>` and one
/// getter / setter pair per field. Request params may tag fields with a
/// location: `required [path] id: String = "id"`.
#[macro_export]
macro_rules! raw_model {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $presence:ident $([$loc:ident])? $field:ident : $ty:ty = $key:literal
            ),* $(,)?
        }
    ) => {
        $crate::paste::paste! {
            #[doc = concat!("Field schema of [`", stringify!($name), "`].")]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $vis struct [<$name Schema>];

            impl $crate::domain::record::Schema for [<$name Schema>] {
                const NAME: &'static str = stringify!($name);
                const FIELDS: &'static [$crate::domain::record::FieldSpec] = &[
                    $(
                        $crate::domain::record::FieldSpec {
                            key: $key,
                            presence: $crate::__presence!($presence),
                            location: $crate::__location!($($loc)?),
                            check: $crate::domain::record::check_field::<$ty>,
                        },
                    )*
                ];
            }

            $(#[$meta])*
            $vis type $name = $crate::domain::record::RawRecord<[<$name Schema>]>;

            impl $crate::domain::record::RawRecord<[<$name Schema>]> {
                $(
                    $crate::__field_accessors!($presence, [$(#[$fmeta])*], $field, $ty, $key);
                )*
            }
        }
    };
}
