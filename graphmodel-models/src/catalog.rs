//! Index of every model type by discriminator, used for polymorphic
//! dispatch and by tooling that works from a type name.

use crate::device::{AlternativeSecurityId, Device};
use crate::directory_object::DirectoryObject;
use crate::device_configuration::DeviceConfiguration;
use crate::endpoint_protection::{Windows10EndpointProtectionConfiguration, WindowsFirewallNetworkProfile};
use crate::entity::Entity;
use crate::org_contact::{OrgContact, Phone, PhysicalOfficeAddress};
use crate::planner::PlannerCategoryDescriptions;
use crate::security::{Alert, AlertComment, AlertEvidence, DeviceEvidence};
use crate::subscription::{ChangeNotification, ChangeNotificationCollection, Subscription};
use crate::todo::{ChecklistItem, DateTimeTimeZone, ItemBody, LinkedResource, TodoTask};
use crate::windows_update::WindowsUpdateForBusinessConfiguration;
use graphmodel_abstractions::serialization::{Deserializable, Parsable, ParseNode};
use graphmodel_abstractions::ODATA_TYPE_KEY;
use tracing::debug;

/// One model type in the catalog.
#[derive(Debug, Clone, Copy)]
pub struct ModelInfo {
    /// Discriminator value, e.g. `#microsoft.graph.todoTask`.
    pub odata_type: &'static str,
    /// Discriminators of the base types, nearest first.
    pub bases: &'static [&'static str],
    create: fn() -> Box<dyn Parsable>,
    field_names: fn() -> Vec<&'static str>,
}

impl ModelInfo {
    /// A fresh, empty instance.
    #[must_use]
    pub fn create(&self) -> Box<dyn Parsable> {
        (self.create)()
    }

    /// Wire names in the type's field table, inherited ones included.
    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        (self.field_names)()
    }

    /// Whether this type is `odata_type` or derives from it.
    #[must_use]
    pub fn derives_from(&self, odata_type: &str) -> bool {
        self.odata_type == odata_type || self.bases.contains(&odata_type)
    }

    #[must_use]
    pub fn is_entity(&self) -> bool {
        self.derives_from(Entity::ODATA_TYPE)
    }
}

macro_rules! model_info {
    ($ty:ty $(, $base:ty)*) => {
        ModelInfo {
            odata_type: <$ty>::ODATA_TYPE,
            bases: &[$(<$base>::ODATA_TYPE),*],
            create: || Box::new(<$ty>::new()),
            field_names: || <$ty as Deserializable>::field_deserializers().names().collect(),
        }
    };
}

static MODELS: &[ModelInfo] = &[
    model_info!(Entity),
    model_info!(TodoTask, Entity),
    model_info!(ChecklistItem, Entity),
    model_info!(LinkedResource, Entity),
    model_info!(Subscription, Entity),
    model_info!(Alert, Entity),
    model_info!(DirectoryObject, Entity),
    model_info!(Device, DirectoryObject, Entity),
    model_info!(OrgContact, DirectoryObject, Entity),
    model_info!(DeviceConfiguration, Entity),
    model_info!(WindowsUpdateForBusinessConfiguration, DeviceConfiguration, Entity),
    model_info!(Windows10EndpointProtectionConfiguration, DeviceConfiguration, Entity),
    model_info!(ItemBody),
    model_info!(DateTimeTimeZone),
    model_info!(ChangeNotification),
    model_info!(ChangeNotificationCollection),
    model_info!(PlannerCategoryDescriptions),
    model_info!(WindowsFirewallNetworkProfile),
    model_info!(PhysicalOfficeAddress),
    model_info!(Phone),
    model_info!(AlternativeSecurityId),
    model_info!(AlertComment),
    model_info!(AlertEvidence),
    model_info!(DeviceEvidence, AlertEvidence),
];

/// Every model type, entities first.
#[must_use]
pub fn models() -> &'static [ModelInfo] {
    MODELS
}

/// Looks up a type by discriminator. The leading `#` is optional.
#[must_use]
pub fn find_model(odata_type: &str) -> Option<&'static ModelInfo> {
    let name = odata_type.trim().trim_start_matches('#');
    MODELS
        .iter()
        .find(|info| info.odata_type.trim_start_matches('#') == name)
}

/// The node's `@odata.type`, if it is a string.
#[must_use]
pub fn discriminator_value(node: &dyn ParseNode) -> Option<String> {
    node.child_node(ODATA_TYPE_KEY)?.string_value().ok().flatten()
}

/// Instance of the type named by the node's discriminator, provided that
/// type derives from `base`.
pub(crate) fn create_derived(node: &dyn ParseNode, base: &str) -> Option<Box<dyn Parsable>> {
    let discriminator = discriminator_value(node)?;
    match find_model(&discriminator) {
        Some(info) if info.derives_from(base) => Some(info.create()),
        Some(_) => {
            debug!(%discriminator, base, "discriminator is not a subtype, using base type");
            None
        }
        None => {
            debug!(%discriminator, base, "unknown discriminator, using base type");
            None
        }
    }
}
