use crate::macros::{leaf_factory, properties};
use graphmodel_abstractions::serialization::{Deserializable, FieldDeserializers, ParseNode, SerializationWriter};
use graphmodel_abstractions::store::{backing_store_factory, BackingStore, BackingStoreExt};
use graphmodel_abstractions::{impl_parsable, SerializationResult, ODATA_TYPE_KEY};
use std::sync::LazyLock;

/// Wire names of the label slots, `category1` through `category25`.
pub static CATEGORY_KEYS: [&str; 25] = [
    "category1",
    "category2",
    "category3",
    "category4",
    "category5",
    "category6",
    "category7",
    "category8",
    "category9",
    "category10",
    "category11",
    "category12",
    "category13",
    "category14",
    "category15",
    "category16",
    "category17",
    "category18",
    "category19",
    "category20",
    "category21",
    "category22",
    "category23",
    "category24",
    "category25",
];

/// Display names of the 25 labels a Planner plan can apply to tasks.
#[derive(Debug, Clone)]
pub struct PlannerCategoryDescriptions {
    backing_store: Box<dyn BackingStore>,
}

impl PlannerCategoryDescriptions {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.plannerCategoryDescriptions";

    #[must_use]
    pub fn new() -> Self {
        let mut descriptions = Self {
            backing_store: backing_store_factory().create(),
        };
        descriptions
            .backing_store
            .set_property(ODATA_TYPE_KEY, Self::ODATA_TYPE);
        descriptions
    }

    properties! {
        "@odata.type" => odata_type, set_odata_type: String;
    }

    /// Label `n`, counting from 1. Out-of-range slots read as `None`.
    #[must_use]
    pub fn category(&self, n: usize) -> Option<String> {
        let key = slot_key(n)?;
        self.backing_store.property(key)
    }

    /// Sets label `n`, counting from 1. Returns false for an out-of-range slot.
    pub fn set_category(&mut self, n: usize, value: Option<String>) -> bool {
        match slot_key(n) {
            Some(key) => {
                self.backing_store.set_property(key, value);
                true
            }
            None => false,
        }
    }

    /// `(slot, label)` for every slot with a label.
    #[must_use]
    pub fn categories(&self) -> Vec<(usize, String)> {
        (1..=CATEGORY_KEYS.len())
            .filter_map(|n| self.category(n).map(|label| (n, label)))
            .collect()
    }

    pub(crate) fn write_fields(&self, writer: &mut dyn SerializationWriter) -> SerializationResult<()> {
        writer.write_string_value(Some(ODATA_TYPE_KEY), self.odata_type().as_deref())?;
        for (index, key) in CATEGORY_KEYS.iter().enumerate() {
            writer.write_string_value(Some(*key), self.category(index + 1).as_deref())?;
        }
        Ok(())
    }
}

fn slot_key(n: usize) -> Option<&'static str> {
    n.checked_sub(1).and_then(|index| CATEGORY_KEYS.get(index)).copied()
}

impl Default for PlannerCategoryDescriptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializable for PlannerCategoryDescriptions {
    fn field_deserializers() -> &'static FieldDeserializers<Self> {
        static FIELDS: LazyLock<FieldDeserializers<PlannerCategoryDescriptions>> = LazyLock::new(|| {
            let mut fields = FieldDeserializers::new();
            fields.string(ODATA_TYPE_KEY, PlannerCategoryDescriptions::set_odata_type);
            for (index, key) in CATEGORY_KEYS.iter().enumerate() {
                fields.insert(*key, move |model: &mut PlannerCategoryDescriptions, node: &dyn ParseNode| {
                    if let Some(value) = node.string_value()? {
                        model.set_category(index + 1, Some(value));
                    }
                    Ok(())
                });
            }
            fields
        });
        &FIELDS
    }
}

impl_parsable!(
    PlannerCategoryDescriptions,
    PlannerCategoryDescriptions::ODATA_TYPE,
    store = backing_store
);
leaf_factory!(PlannerCategoryDescriptions);
