//! Microsoft Graph model types.
//!
//! Each model keeps its properties in a backing store and exposes typed
//! getter/setter pairs over it. Derived types embed their base type, so a
//! [`Device`] holds a [`DirectoryObject`] which holds an [`Entity`], and all
//! three share one store. [`EntityModel`] and [`DirectoryObjectModel`] give
//! uniform access to the inherited properties.
//!
//! Polymorphic properties and collections are resolved through the
//! [`catalog`], which maps each `@odata.type` discriminator to its type.
//!
//! ```ignore
//! use graphmodel_models::{Entity, TodoTask};
//!
//! let task: TodoTask = graphmodel_json::parse(json, TodoTask::create_from_discriminator_value)?;
//! let any = graphmodel_json::parse_dyn(json, Entity::create_from_discriminator_value, &Default::default())?;
//! ```

mod macros;

pub mod catalog;
pub mod device;
pub mod device_configuration;
pub mod directory_object;
pub mod endpoint_protection;
pub mod entity;
pub mod enums;
pub mod org_contact;
pub mod planner;
pub mod security;
pub mod subscription;
pub mod todo;
pub mod windows_update;

pub use catalog::{find_model, models, ModelInfo};
pub use device::{AlternativeSecurityId, Device};
pub use device_configuration::DeviceConfiguration;
pub use directory_object::{DirectoryObject, DirectoryObjectModel};
pub use endpoint_protection::{Windows10EndpointProtectionConfiguration, WindowsFirewallNetworkProfile};
pub use entity::{create_entity_from_discriminator_value, Entity, EntityModel};
pub use enums::{enum_infos, find_enum, EnumInfo};
pub use org_contact::{OrgContact, Phone, PhysicalOfficeAddress};
pub use planner::PlannerCategoryDescriptions;
pub use subscription::{ChangeNotification, ChangeNotificationCollection, Subscription};
pub use todo::{ChecklistItem, DateTimeTimeZone, ItemBody, LinkedResource, TodoTask};
pub use windows_update::WindowsUpdateForBusinessConfiguration;
