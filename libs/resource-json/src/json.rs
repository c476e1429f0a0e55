//! Typed decoding of JSON resources.

use crate::{
    error::{ContentError, ResourceError},
    shape::{List, Map, MapOfList, MapOfMap, Scalar, Shape},
    store::ResourceStore,
    string::decode_text,
    temporal::is_temporal_error,
};
use serde::de::DeserializeOwned;
use std::{collections::HashMap, hash::Hash};
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decodes JSON resources into typed values.
///
/// The decoder keeps no state between calls, it only reads from its store. A single instance can
/// be shared by any number of threads.
#[derive(Clone, Debug)]
pub struct ResourceDecoder<S> {
    store: S,
}

impl<S: ResourceStore> ResourceDecoder<S> {
    /// Creates a decoder reading from the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The store resources are read from.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Decode a resource into the given shape.
    pub fn decode<T: Shape>(&self, id: &str) -> Result<T::Output, ResourceError> {
        let shape = T::KIND;
        debug!(id, %shape, "decoding resource");
        let content = self.load(id)?;
        // A leading byte order mark is skipped; `read_string` keeps it.
        let text = content.strip_prefix(UTF8_BOM).unwrap_or(content.as_slice());
        let value = serde_json::from_slice(text).map_err(|e| {
            if is_temporal_error(&e) {
                ResourceError::UnsupportedTemporalFormat { id: id.to_string(), source: e }
            } else {
                ResourceError::MalformedContent { id: id.to_string(), source: ContentError::Json(e) }
            }
        })?;
        debug!(id, %shape, "decoded resource");
        Ok(value)
    }

    /// Read a single value.
    pub fn read_json<T: DeserializeOwned>(&self, id: &str) -> Result<T, ResourceError> {
        self.decode::<Scalar<T>>(id)
    }

    /// Read an ordered sequence of values.
    pub fn read_json_list<T: DeserializeOwned>(&self, id: &str) -> Result<Vec<T>, ResourceError> {
        self.decode::<List<T>>(id)
    }

    /// Read a mapping.
    pub fn read_json_map<K, V>(&self, id: &str) -> Result<HashMap<K, V>, ResourceError>
    where
        K: DeserializeOwned + Eq + Hash,
        V: DeserializeOwned,
    {
        self.decode::<Map<K, V>>(id)
    }

    /// Read a mapping whose values are ordered sequences.
    pub fn read_json_map_of_lists<K, V>(&self, id: &str) -> Result<HashMap<K, Vec<V>>, ResourceError>
    where
        K: DeserializeOwned + Eq + Hash,
        V: DeserializeOwned,
    {
        self.decode::<MapOfList<K, V>>(id)
    }

    /// Read a mapping whose values are mappings.
    pub fn read_json_map_of_maps<K, K2, V2>(&self, id: &str) -> Result<HashMap<K, HashMap<K2, V2>>, ResourceError>
    where
        K: DeserializeOwned + Eq + Hash,
        K2: DeserializeOwned + Eq + Hash,
        V2: DeserializeOwned,
    {
        self.decode::<MapOfMap<K, K2, V2>>(id)
    }

    /// Read the raw text of a resource.
    pub fn read_string(&self, id: &str) -> Result<String, ResourceError> {
        let content = self.load(id)?;
        decode_text(id, content)
    }

    fn load(&self, id: &str) -> Result<Vec<u8>, ResourceError> {
        match self.store.load(id) {
            Ok(Some(content)) => Ok(content),
            Ok(None) => Err(ResourceError::NotFound { id: id.to_string() }),
            Err(e) => Err(ResourceError::Read { id: id.to_string(), source: e }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use super::*;
    use crate::{
        store::EmbeddedStore,
        temporal::{Date, DateTime, Time},
    };
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};
    use serde::Deserialize;
    use std::io;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Model {
        id: u32,
        name: String,
        dates: Vec<Date>,
    }

    fn date(year: i32, month: u32, day: u32) -> Date {
        Date(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    #[fixture]
    fn decoder() -> ResourceDecoder<EmbeddedStore> {
        let store = EmbeddedStore::new()
            .with_resource("string.json", br#""some string""#.as_slice())
            .with_resource("object.json", br#"{"id":1,"name":"model 1","dates":["2018-05-05","2018-06-06"]}"#.as_slice())
            .with_resource("list.json", br#"[3, 1, 2]"#.as_slice())
            .with_resource("map.json", br#"{"1": "one", "2": "two"}"#.as_slice())
            .with_resource("map_of_lists.json", br#"{"1":["s10","s11"],"2":["s20","s21"]}"#.as_slice())
            .with_resource("map_of_maps.json", br#"{"1":{"s1":"01:23:45"}}"#.as_slice())
            .with_resource("bad_date.json", br#"{"id":1,"name":"model 1","dates":["05/05/2018"]}"#.as_slice())
            .with_resource("truncated.json", br#"{"id":1,"#.as_slice())
            .with_resource("latin1.json", b"\"caf\xe9\"".as_slice())
            .with_resource("bom.json", b"\xEF\xBB\xBF{\"1\": [\"x\"]}".as_slice());
        ResourceDecoder::new(store)
    }

    #[rstest]
    fn scalar(decoder: ResourceDecoder<EmbeddedStore>) {
        let value: String = decoder.read_json("string.json").unwrap();
        assert_eq!(value, "some string");
    }

    #[rstest]
    fn raw_text(decoder: ResourceDecoder<EmbeddedStore>) {
        assert_eq!(decoder.read_string("string.json").unwrap(), "\"some string\"");
    }

    #[rstest]
    fn object(decoder: ResourceDecoder<EmbeddedStore>) {
        let model: Model = decoder.read_json("object.json").unwrap();
        assert_eq!(model, Model { id: 1, name: "model 1".into(), dates: vec![date(2018, 5, 5), date(2018, 6, 6)] });
    }

    #[rstest]
    fn list_keeps_document_order(decoder: ResourceDecoder<EmbeddedStore>) {
        let values: Vec<u8> = decoder.read_json_list("list.json").unwrap();
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[rstest]
    fn map(decoder: ResourceDecoder<EmbeddedStore>) {
        let values: HashMap<u64, String> = decoder.read_json_map("map.json").unwrap();
        assert_eq!(values, HashMap::from([(1, "one".to_string()), (2, "two".to_string())]));
    }

    #[rstest]
    fn map_of_lists(decoder: ResourceDecoder<EmbeddedStore>) {
        let values: HashMap<i32, Vec<String>> = decoder.read_json_map_of_lists("map_of_lists.json").unwrap();
        assert_eq!(values[&1], vec!["s10", "s11"]);
        assert_eq!(values[&2], vec!["s20", "s21"]);
        assert_eq!(values.len(), 2);
    }

    #[rstest]
    fn map_of_maps(decoder: ResourceDecoder<EmbeddedStore>) {
        let values: HashMap<i32, HashMap<String, Time>> = decoder.read_json_map_of_maps("map_of_maps.json").unwrap();
        assert_eq!(values[&1]["s1"].to_string(), "01:23:45");
    }

    #[rstest]
    fn shape_descriptor(decoder: ResourceDecoder<EmbeddedStore>) {
        let values = decoder.decode::<MapOfList<i32, String>>("map_of_lists.json").unwrap();
        assert_eq!(values[&2][1], "s21");
    }

    #[rstest]
    fn byte_order_mark(decoder: ResourceDecoder<EmbeddedStore>) {
        let values: HashMap<u8, Vec<String>> = decoder.read_json_map_of_lists("bom.json").unwrap();
        assert_eq!(values[&1], vec!["x"]);

        assert!(decoder.read_string("bom.json").unwrap().starts_with('\u{feff}'));
    }

    #[rstest]
    fn missing_resource(decoder: ResourceDecoder<EmbeddedStore>) {
        let error = decoder.read_json::<String>("absent.json").unwrap_err();
        assert!(matches!(error, ResourceError::NotFound { id } if id == "absent.json"));

        let error = decoder.read_string("absent.json").unwrap_err();
        assert!(matches!(error, ResourceError::NotFound { .. }));
    }

    #[rstest]
    #[case("truncated.json")]
    #[case("latin1.json")]
    fn malformed_json(decoder: ResourceDecoder<EmbeddedStore>, #[case] id: &str) {
        let error = decoder.read_json::<serde_json::Value>(id).unwrap_err();
        assert!(matches!(error, ResourceError::MalformedContent { source: ContentError::Json(_), .. }));
    }

    #[rstest]
    fn shape_mismatch(decoder: ResourceDecoder<EmbeddedStore>) {
        let error = decoder.read_json_map::<String, u32>("list.json").unwrap_err();
        assert!(matches!(error, ResourceError::MalformedContent { source: ContentError::Json(_), .. }));

        let error = decoder.read_json_list::<u32>("map.json").unwrap_err();
        assert!(matches!(error, ResourceError::MalformedContent { .. }));

        // Keys that do not parse into the key type.
        let error = decoder.read_json_map_of_maps::<String, u32, DateTime>("map_of_maps.json").unwrap_err();
        assert!(matches!(error, ResourceError::MalformedContent { .. }));
    }

    #[rstest]
    fn bad_temporal_value(decoder: ResourceDecoder<EmbeddedStore>) {
        let error = decoder.read_json::<Model>("bad_date.json").unwrap_err();
        match error {
            ResourceError::UnsupportedTemporalFormat { id, source } => {
                assert_eq!(id, "bad_date.json");
                assert!(source.to_string().contains("05/05/2018"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[rstest]
    fn invalid_utf8_text(decoder: ResourceDecoder<EmbeddedStore>) {
        let error = decoder.read_string("latin1.json").unwrap_err();
        assert!(matches!(error, ResourceError::MalformedContent { source: ContentError::Encoding(_), .. }));
    }

    struct BrokenStore;

    impl ResourceStore for BrokenStore {
        fn load(&self, _id: &str) -> io::Result<Option<Vec<u8>>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn store_failure() {
        let decoder = ResourceDecoder::new(BrokenStore);
        let error = decoder.read_json::<String>("any.json").unwrap_err();
        assert!(matches!(error, ResourceError::Read { source, .. } if source.kind() == io::ErrorKind::PermissionDenied));
    }
}
