//! Library side of the `graphmodel` tool: config loading and the
//! operations behind each subcommand.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use graphmodel_abstractions::serialization::{Parsable, ParsableFactory};
use graphmodel_abstractions::store::BackingStoreExt;
use graphmodel_json::{parse_collection_dyn, parse_dyn, to_json_string, JsonOptions};
use graphmodel_models::{catalog, find_enum, DeviceConfiguration, DirectoryObject, Entity};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Base type whose discriminator factory resolves a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Base {
    Entity,
    #[value(name = "directoryObject")]
    DirectoryObject,
    #[value(name = "deviceConfiguration")]
    DeviceConfiguration,
}

impl Base {
    #[must_use]
    pub fn factory(self) -> ParsableFactory {
        match self {
            Base::Entity => Entity::create_from_discriminator_value,
            Base::DirectoryObject => DirectoryObject::create_from_discriminator_value,
            Base::DeviceConfiguration => DeviceConfiguration::create_from_discriminator_value,
        }
    }
}

/// Settings read from `--config`. Flags given on the command line win.
///
/// There is no changes-only setting: a freshly parsed payload carries no
/// changes, so `inspect` always writes the full model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    #[serde(default = "default_base")]
    pub base: Base,
    #[serde(default)]
    pub pretty: bool,
    #[serde(default)]
    pub strict_enums: bool,
}

fn default_base() -> Base {
    Base::Entity
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            pretty: false,
            strict_enums: false,
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    #[must_use]
    pub fn json_options(&self) -> JsonOptions {
        JsonOptions {
            backing_store_changes_only: false,
            pretty: self.pretty,
            strict_enums: self.strict_enums,
        }
    }
}

/// What `inspect` reports for one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub odata_type: &'static str,
    pub id: Option<String>,
    pub additional_data: usize,
    pub json: String,
}

impl Inspection {
    fn of(model: &dyn Parsable, options: &JsonOptions) -> Result<Self> {
        Ok(Self {
            odata_type: model.odata_type_name(),
            id: model.backing_store().property("id"),
            additional_data: model.additional_data().len(),
            json: to_json_string(model, options).context("Failed to write model")?,
        })
    }

    /// Human-readable block for the terminal.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "type:            {}\nid:              {}\nadditional data: {}\n{}",
            self.odata_type,
            self.id.as_deref().unwrap_or("-"),
            self.additional_data,
            self.json
        )
    }
}

/// Parses a payload that is either a single object or an OData
/// collection page, resolving each object through `base`.
pub fn inspect(json: &str, base: Base, options: &JsonOptions) -> Result<Vec<Inspection>> {
    let root: Value = serde_json::from_str(json).context("Payload is not valid JSON")?;
    let is_page = root.get("value").is_some_and(Value::is_array) && root.get("@odata.type").is_none();

    let models = if is_page {
        let page = parse_collection_dyn(json, base.factory(), options).context("Failed to parse collection")?;
        debug!(items = page.len(), next_link = ?page.next_link, "parsed collection page");
        page.value
    } else {
        vec![parse_dyn(json, base.factory(), options).context("Failed to parse payload")?]
    };

    models
        .iter()
        .map(|model| Inspection::of(model.as_ref(), options))
        .collect()
}

pub fn inspect_file(path: &Path, base: Base, options: &JsonOptions) -> Result<Vec<Inspection>> {
    let json = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    inspect(&json, base, options)
}

/// Field table of a catalog type, sorted.
pub fn fields(type_name: &str) -> Result<Vec<&'static str>> {
    let Some(info) = catalog::find_model(type_name) else {
        bail!("Unknown type: {type_name}");
    };
    let mut names = info.field_names();
    names.sort_unstable();
    Ok(names)
}

/// Integer code for `value` in the named enum, `None` if the value is
/// not in its table.
pub fn enum_code(name: &str, value: &str) -> Result<Option<i64>> {
    let Some(info) = find_enum(name) else {
        bail!("Unknown enum: {name}");
    };
    Ok(info.code_of(value))
}

/// Discriminators the entity factory resolves.
#[must_use]
pub fn entity_types() -> Vec<&'static str> {
    catalog::models()
        .iter()
        .filter(|info| info.is_entity())
        .map(|info| info.odata_type)
        .collect()
}
