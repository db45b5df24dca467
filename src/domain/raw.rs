use crate::utils::error::{Result, SdkError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// 欄位的三種狀態：不存在、明確為 null、有值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    Absent,
    Null,
    Present,
}

/// Insertion-ordered key to JSON map backing every model.
///
/// Clones share storage and copy on write. After [`RawData::freeze`] every
/// write fails with [`SdkError::FrozenModel`].
#[derive(Clone, Default)]
pub struct RawData {
    map: Arc<Map<String, Value>>,
    frozen: bool,
}

impl RawData {
    pub fn new() -> Self {
        Self::default()
    }

    /// 包裝既有資料（例如反序列化結果），直接凍結
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self {
            map: Arc::new(map),
            frozen: true,
        }
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    pub fn state(&self, key: &str) -> FieldState {
        match self.map.get(key) {
            None => FieldState::Absent,
            Some(Value::Null) => FieldState::Null,
            Some(_) => FieldState::Present,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.map.keys()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.map
    }

    pub fn into_map(self) -> Map<String, Value> {
        Arc::try_unwrap(self.map).unwrap_or_else(|shared| (*shared).clone())
    }

    pub fn get_required<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        match self.map.get(key) {
            None => Err(SdkError::invalid_data(format!("'{}' cannot be absent", key))),
            Some(Value::Null) => Err(SdkError::invalid_data(format!("'{}' cannot be null", key))),
            Some(value) => parse(key, value),
        }
    }

    pub fn get_required_nullable<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.map.get(key) {
            None => Err(SdkError::invalid_data(format!("'{}' cannot be absent", key))),
            Some(Value::Null) => Ok(None),
            Some(value) => parse(key, value).map(Some),
        }
    }

    pub fn get_nullable<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => parse(key, value).map(Some),
        }
    }

    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.set_raw(key, value)
    }

    /// `None` 代表省略：移除該鍵
    pub fn set_optional<T: Serialize>(&mut self, key: &str, value: Option<T>) -> Result<()> {
        match value {
            Some(value) => self.set(key, &value),
            None => self.unset(key).map(|_| ()),
        }
    }

    /// `None` 代表明確的 null
    pub fn set_nullable<T: Serialize>(&mut self, key: &str, value: Option<T>) -> Result<()> {
        match value {
            Some(value) => self.set(key, &value),
            None => self.set_raw(key, Value::Null),
        }
    }

    pub fn set_raw(&mut self, key: &str, value: Value) -> Result<()> {
        self.ensure_writable(key)?;
        Arc::make_mut(&mut self.map).insert(key.to_string(), value);
        Ok(())
    }

    pub fn unset(&mut self, key: &str) -> Result<Option<Value>> {
        self.ensure_writable(key)?;
        if !self.map.contains_key(key) {
            return Ok(None);
        }
        Ok(Arc::make_mut(&mut self.map).shift_remove(key))
    }

    fn ensure_writable(&self, key: &str) -> Result<()> {
        if self.frozen {
            return Err(SdkError::FrozenModel {
                key: key.to_string(),
            });
        }
        Ok(())
    }
}

fn parse<T: DeserializeOwned>(key: &str, value: &Value) -> Result<T> {
    T::deserialize(value).map_err(|e| {
        SdkError::invalid_data(format!(
            "'{}' must be of type {}: {}",
            key,
            std::any::type_name::<T>(),
            e
        ))
    })
}

impl PartialEq for RawData {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl fmt::Debug for RawData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.map, f)
    }
}

impl From<Map<String, Value>> for RawData {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

impl Serialize for RawData {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Map::deserialize(deserializer).map(Self::from_map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_tri_state() {
        let data = RawData::from_map(object(json!({"a": 1, "b": null})));
        assert_eq!(data.state("a"), FieldState::Present);
        assert_eq!(data.state("b"), FieldState::Null);
        assert_eq!(data.state("c"), FieldState::Absent);
    }

    #[test]
    fn test_required_accessor_errors() {
        let data = RawData::from_map(object(json!({"name": null, "count": "three"})));
        let absent = data.get_required::<String>("missing").unwrap_err();
        assert!(absent.to_string().contains("'missing' cannot be absent"));
        let null = data.get_required::<String>("name").unwrap_err();
        assert!(null.to_string().contains("'name' cannot be null"));
        let shape = data.get_required::<i64>("count").unwrap_err();
        assert!(matches!(shape, SdkError::InvalidData { .. }));
    }

    #[test]
    fn test_nullable_accessors() {
        let data = RawData::from_map(object(json!({"note": null})));
        assert_eq!(data.get_nullable::<String>("note").unwrap(), None);
        assert_eq!(data.get_nullable::<String>("missing").unwrap(), None);
        assert_eq!(data.get_required_nullable::<String>("note").unwrap(), None);
        assert!(data.get_required_nullable::<String>("missing").is_err());
    }

    #[test]
    fn test_optional_none_removes_and_nullable_none_keeps_null() {
        let mut data = RawData::new();
        data.set("description", "text").unwrap();
        data.set_optional::<String>("description", None).unwrap();
        assert!(!data.contains_key("description"));

        data.set_nullable::<String>("expiresAt", None).unwrap();
        assert_eq!(data.get("expiresAt"), Some(&Value::Null));
    }

    #[test]
    fn test_unset_preserves_order() {
        let mut data = RawData::new();
        for key in ["a", "b", "c", "d"] {
            data.set(key, &1).unwrap();
        }
        data.unset("b").unwrap();
        let keys: Vec<&String> = data.keys().collect();
        assert_eq!(keys, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_frozen_rejects_writes() {
        let mut data = RawData::new();
        data.set("a", &1).unwrap();
        data.freeze();
        let err = data.set("b", &2).unwrap_err();
        assert!(matches!(err, SdkError::FrozenModel { ref key } if key == "b"));
        assert!(data.unset("a").is_err());
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_clone_is_copy_on_write() {
        let mut original = RawData::new();
        original.set("a", &1).unwrap();
        let snapshot = original.clone();
        original.set("b", &2).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(original.len(), 2);
        assert_ne!(snapshot, original);
    }

    #[test]
    fn test_equality_ignores_frozen_flag() {
        let mut mutable = RawData::new();
        mutable.set("a", &1).unwrap();
        let frozen = RawData::from_map(object(json!({"a": 1})));
        assert_eq!(mutable, frozen);
    }
}
