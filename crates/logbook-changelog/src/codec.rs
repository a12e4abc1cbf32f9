//! YAML encoding and decoding of changelog documents
//!
//! A document is a mapping with `project` and `versions`. Version identifiers
//! and category names are ordered keys, so decoding walks them with custom
//! visitors instead of going through a hash map, and encoding builds an
//! insertion-ordered [`Mapping`].
//!
//! Keys and entries are read as their literal text: `1.10:` decodes to the
//! identifier `"1.10"`, never to a float.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::changes::Changes;
use crate::types::{Changelog, Version};
use crate::Result;
use logbook_core::ChangelogError;

const PROJECT_KEY: &str = "project";
const VERSIONS_KEY: &str = "versions";
const DATE_KEY: &str = "date";
const INTERNAL_KEY: &str = "internal";

/// Decode a changelog from YAML text
pub fn decode(input: &str) -> Result<Changelog> {
    if input.trim().is_empty() {
        return Ok(Changelog::default());
    }

    let raw: RawChangelog = serde_yaml::from_str(input).map_err(ChangelogError::Decode)?;
    Ok(Changelog {
        project: raw.project.unwrap_or_default(),
        versions: raw.versions.map(|v| v.0).unwrap_or_default(),
    })
}

/// Encode a changelog as YAML text
pub fn encode(changelog: &Changelog) -> Result<String> {
    let mut versions = Mapping::new();
    for version in &changelog.versions {
        versions.insert(
            Value::String(version.identifier.clone()),
            version_body(version),
        );
    }

    let mut root = Mapping::new();
    root.insert(
        Value::String(PROJECT_KEY.to_string()),
        Value::String(changelog.project.clone()),
    );
    root.insert(
        Value::String(VERSIONS_KEY.to_string()),
        Value::Mapping(versions),
    );

    serde_yaml::to_string(&Value::Mapping(root)).map_err(ChangelogError::Encode)
}

/// Encode a single version as a one-key document, `{identifier: body}`
pub fn encode_version_entry(version: &Version) -> Result<String> {
    let mut root = Mapping::new();
    root.insert(
        Value::String(version.identifier.clone()),
        version_body(version),
    );
    serde_yaml::to_string(&Value::Mapping(root)).map_err(ChangelogError::Encode)
}

fn version_body(version: &Version) -> Value {
    let mut body = Mapping::new();

    if let Some(date) = version.date.as_deref().filter(|d| !d.is_empty()) {
        body.insert(
            Value::String(DATE_KEY.to_string()),
            Value::String(date.to_string()),
        );
    }

    append_categories(&mut body, &version.public);

    if !version.internal.is_empty() {
        let mut internal = Mapping::new();
        append_categories(&mut internal, &version.internal);
        body.insert(
            Value::String(INTERNAL_KEY.to_string()),
            Value::Mapping(internal),
        );
    }

    Value::Mapping(body)
}

fn append_categories(mapping: &mut Mapping, changes: &Changes) {
    for category in changes.categories() {
        if category.entries.is_empty() {
            continue;
        }
        let entries = category
            .entries
            .iter()
            .map(|e| Value::String(e.clone()))
            .collect();
        mapping.insert(Value::String(category.name.clone()), Value::Sequence(entries));
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawChangelog {
    #[serde(default)]
    project: Option<String>,
    #[serde(default)]
    versions: Option<RawVersions>,
}

struct RawVersions(Vec<Version>);

impl<'de> Deserialize<'de> for RawVersions {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(VersionsVisitor)
    }
}

struct VersionsVisitor;

impl<'de> Visitor<'de> for VersionsVisitor {
    type Value = RawVersions;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping of version identifiers to version bodies")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut versions: Vec<Version> = Vec::new();

        while let Some(identifier) = map.next_key::<String>()? {
            if versions.iter().any(|v| v.identifier == identifier) {
                return Err(de::Error::custom(format!(
                    "duplicate version {:?}",
                    identifier
                )));
            }

            let body = map.next_value::<Option<RawVersion>>()?.unwrap_or_default();
            versions.push(Version {
                identifier,
                date: body.date,
                public: body.public,
                internal: body.internal,
            });
        }

        Ok(RawVersions(versions))
    }
}

#[derive(Default)]
struct RawVersion {
    date: Option<String>,
    public: Changes,
    internal: Changes,
}

impl<'de> Deserialize<'de> for RawVersion {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(VersionVisitor)
    }
}

struct VersionVisitor;

impl<'de> Visitor<'de> for VersionVisitor {
    type Value = RawVersion;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a version body mapping")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut version = RawVersion::default();
        let mut seen: Vec<String> = Vec::new();

        while let Some(key) = map.next_key::<String>()? {
            if seen.contains(&key) {
                return Err(de::Error::custom(format!("duplicate key {:?}", key)));
            }

            match key.as_str() {
                DATE_KEY => version.date = map.next_value::<Option<String>>()?,
                INTERNAL_KEY => {
                    version.internal = map
                        .next_value::<Option<RawCategories>>()?
                        .map(|c| c.0)
                        .unwrap_or_default();
                }
                _ => {
                    for entry in next_entries(&mut map)? {
                        version.public.append(&key, entry);
                    }
                }
            }
            seen.push(key);
        }

        Ok(version)
    }
}

struct RawCategories(Changes);

impl<'de> Deserialize<'de> for RawCategories {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CategoriesVisitor)
    }
}

struct CategoriesVisitor;

impl<'de> Visitor<'de> for CategoriesVisitor {
    type Value = RawCategories;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping of category names to entry lists")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut changes = Changes::new();
        let mut seen: Vec<String> = Vec::new();

        while let Some(category) = map.next_key::<String>()? {
            if seen.contains(&category) {
                return Err(de::Error::custom(format!(
                    "duplicate category {:?}",
                    category
                )));
            }
            for entry in next_entries(&mut map)? {
                changes.append(&category, entry);
            }
            seen.push(category);
        }

        Ok(RawCategories(changes))
    }
}

/// Read a category's entry list; null lists and null entries decode as empty
fn next_entries<'de, A>(map: &mut A) -> std::result::Result<Vec<String>, A::Error>
where
    A: MapAccess<'de>,
{
    let entries = map.next_value::<Option<Vec<Option<String>>>>()?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}
