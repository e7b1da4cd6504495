//! Top-level specification types.
//!
//! A [`Specification`] describes one provider plus any number of resources and
//! data sources, each carrying a [`Schema`] of attributes and blocks.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::attribute::Attribute;
use crate::block::Block;

/// The attributes and blocks of one provider, resource, or data source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
}

/// The provider definition. Its schema is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

/// A managed resource definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub schema: Schema,
}

/// A data source definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataSource {
    pub name: String,
    pub schema: Schema,
}

/// The kind of item a schema belongs to.
///
/// ## Examples
///
/// ```
/// use framegen_define::Target;
///
/// assert_eq!(Target::Resource.to_string(), "resource");
/// assert_eq!(Target::DataSource.to_string(), "datasource");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Target {
    Provider,
    Resource,
    DataSource,
}

/// A complete specification document.
///
/// ## Examples
///
/// ```
/// use framegen_define::{Specification, Target};
///
/// let json = r#"{
///     "version": "0.1",
///     "provider": {"name": "example"},
///     "resources": [{
///         "name": "thing",
///         "schema": {
///             "attributes": [{"name": "id", "string": {"computed_optional_required": "computed"}}]
///         }
///     }]
/// }"#;
/// let spec = Specification::from_json(json).unwrap();
///
/// let items: Vec<_> = spec.items().map(|(target, name, _)| (target, name)).collect();
/// assert_eq!(items, vec![(Target::Resource, "thing")]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Specification {
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub datasources: Vec<DataSource>,
}

impl Specification {
    /// Parses a specification from JSON text.
    ///
    /// Only the document shape is checked here; kind cardinality is checked
    /// when the generator assembles each schema.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Iterates every schema-bearing item: the provider (when it has a
    /// schema), then resources, then data sources, each in document order.
    pub fn items(&self) -> impl Iterator<Item = (Target, &str, &Schema)> {
        let provider = self.provider.iter().filter_map(|p| {
            p.schema
                .as_ref()
                .map(|schema| (Target::Provider, p.name.as_str(), schema))
        });
        let resources = self
            .resources
            .iter()
            .map(|r| (Target::Resource, r.name.as_str(), &r.schema));
        let datasources = self
            .datasources
            .iter()
            .map(|d| (Target::DataSource, d.name.as_str(), &d.schema));

        provider.chain(resources).chain(datasources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_follow_document_order() {
        let json = r#"{
            "provider": {"name": "example", "schema": {}},
            "resources": [{"name": "a", "schema": {}}, {"name": "b", "schema": {}}],
            "datasources": [{"name": "c", "schema": {}}]
        }"#;
        let spec = Specification::from_json(json).unwrap();
        let items: Vec<_> = spec.items().map(|(t, n, _)| (t, n)).collect();

        assert_eq!(
            items,
            vec![
                (Target::Provider, "example"),
                (Target::Resource, "a"),
                (Target::Resource, "b"),
                (Target::DataSource, "c"),
            ]
        );
    }

    #[test]
    fn provider_without_schema_is_skipped() {
        let spec = Specification::from_json(r#"{"provider": {"name": "example"}}"#).unwrap();
        assert_eq!(spec.items().count(), 0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Specification::from_json("{\"resources\": 3}").is_err());
    }
}
