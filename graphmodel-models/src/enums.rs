//! Enum and flag-enum property types, plus a by-name index of them.

use graphmodel_abstractions::enums::{GraphEnum, GraphFlags};
use graphmodel_abstractions::{graph_enum, graph_flags};

graph_enum! {
    pub enum Importance: "importance" {
        Low = "low" => 0,
        Normal = "normal" => 1,
        High = "high" => 2,
    }
}

graph_enum! {
    pub enum TaskStatus: "taskStatus" {
        NotStarted = "notStarted" => 0,
        InProgress = "inProgress" => 1,
        Completed = "completed" => 2,
        WaitingOnOthers = "waitingOnOthers" => 3,
        Deferred = "deferred" => 4,
    }
}

graph_enum! {
    pub enum BodyType: "bodyType" {
        Text = "text" => 0,
        Html = "html" => 1,
    }
}

graph_enum! {
    pub enum Sensitivity: "sensitivity" {
        Normal = "normal" => 0,
        Personal = "personal" => 1,
        Private = "private" => 2,
        Confidential = "confidential" => 3,
    }
}

graph_enum! {
    /// Lifecycle notifications sent for a subscription. Unknown values are
    /// rejected rather than dropped.
    pub enum LifecycleEventType: "lifecycleEventType" strict {
        Missed = "missed" => 0,
        SubscriptionRemoved = "subscriptionRemoved" => 1,
        ReauthorizationRequired = "reauthorizationRequired" => 2,
        UnknownFutureValue = "unknownFutureValue" => 3,
    }
}

graph_enum! {
    pub enum ChangeType: "changeType" {
        Created = "created" => 0,
        Updated = "updated" => 1,
        Deleted = "deleted" => 2,
    }
}

graph_enum! {
    pub enum Enablement: "enablement" {
        NotConfigured = "notConfigured" => 0,
        Enabled = "enabled" => 1,
        Disabled = "disabled" => 2,
    }
}

graph_enum! {
    pub enum StateManagementSetting: "stateManagementSetting" {
        NotConfigured = "notConfigured" => 0,
        Blocked = "blocked" => 1,
        Allowed = "allowed" => 2,
    }
}

graph_enum! {
    pub enum PhoneType: "phoneType" {
        Home = "home" => 0,
        Business = "business" => 1,
        Mobile = "mobile" => 2,
        Other = "other" => 3,
        Assistant = "assistant" => 4,
        HomeFax = "homeFax" => 5,
        BusinessFax = "businessFax" => 6,
        OtherFax = "otherFax" => 7,
        Pager = "pager" => 8,
        Radio = "radio" => 9,
    }
}

graph_enum! {
    pub enum AutomaticUpdateMode: "automaticUpdateMode" {
        UserDefined = "userDefined" => 0,
        NotifyDownload = "notifyDownload" => 1,
        AutoInstallAtMaintenanceTime = "autoInstallAtMaintenanceTime" => 2,
        AutoInstallAndRebootAtMaintenanceTime = "autoInstallAndRebootAtMaintenanceTime" => 3,
        AutoInstallAndRebootAtScheduledTime = "autoInstallAndRebootAtScheduledTime" => 4,
        AutoInstallAndRebootWithoutEndUserControl = "autoInstallAndRebootWithoutEndUserControl" => 5,
    }
}

graph_enum! {
    /// Which Windows builds a device is offered.
    pub enum WindowsUpdateType: "windowsUpdateType" {
        UserDefined = "userDefined" => 0,
        All = "all" => 1,
        BusinessReadyOnly = "businessReadyOnly" => 2,
        WindowsInsiderBuildFast = "windowsInsiderBuildFast" => 3,
        WindowsInsiderBuildSlow = "windowsInsiderBuildSlow" => 4,
        WindowsInsiderBuildRelease = "windowsInsiderBuildRelease" => 5,
    }
}

graph_flags! {
    /// Weeks of the month in which scheduled updates install.
    pub struct WindowsUpdateForBusinessUpdateWeeks: "windowsUpdateForBusinessUpdateWeeks" {
        const USER_DEFINED = "userDefined" => 1;
        const FIRST_WEEK = "firstWeek" => 1 << 1;
        const SECOND_WEEK = "secondWeek" => 1 << 2;
        const THIRD_WEEK = "thirdWeek" => 1 << 3;
        const FOURTH_WEEK = "fourthWeek" => 1 << 4;
        const EVERY_WEEK = "everyWeek" => 1 << 5;
        const UNKNOWN_FUTURE_VALUE = "unknownFutureValue" => 1 << 6;
    }
}

/// A catalog enum looked up by schema name.
#[derive(Debug, Clone, Copy)]
pub struct EnumInfo {
    pub name: &'static str,
    pub is_flags: bool,
    pub strict: bool,
    entries: fn() -> Vec<(&'static str, i64)>,
    parse: fn(&str) -> Option<i64>,
}

impl EnumInfo {
    fn of<E: GraphEnum>() -> Self {
        Self {
            name: E::NAME,
            is_flags: false,
            strict: E::STRICT,
            entries: || {
                E::variants()
                    .iter()
                    .map(|variant| (variant.as_str(), i64::from(variant.code())))
                    .collect()
            },
            parse: |raw| E::parse(raw).map(|variant| i64::from(variant.code())),
        }
    }

    fn of_flags<F: GraphFlags>() -> Self {
        Self {
            name: F::NAME,
            is_flags: true,
            strict: false,
            entries: || {
                F::named_flags()
                    .iter()
                    .map(|(name, bits)| (*name, i64::from(*bits)))
                    .collect()
            },
            parse: |raw| F::parse_flags(raw).map(|flags| i64::from(flags.flag_bits())),
        }
    }

    /// `(wire name, code)` pairs; bit values for flag enums.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, i64)> {
        (self.entries)()
    }

    /// Integer code of a wire string, or the combined bits of a flag list.
    #[must_use]
    pub fn code_of(&self, raw: &str) -> Option<i64> {
        (self.parse)(raw)
    }
}

/// Every enum in the catalog.
#[must_use]
pub fn enum_infos() -> Vec<EnumInfo> {
    use crate::security::{
        AlertClassification, AlertDetermination, AlertSeverity, AlertStatus, DefenderAvStatus, DetectionSource,
        DeviceHealthStatus, DeviceRiskScore, EvidenceRemediationStatus, EvidenceRole, EvidenceVerdict,
        OnboardingStatus, ServiceSource,
    };

    vec![
        EnumInfo::of::<Importance>(),
        EnumInfo::of::<TaskStatus>(),
        EnumInfo::of::<BodyType>(),
        EnumInfo::of::<Sensitivity>(),
        EnumInfo::of::<LifecycleEventType>(),
        EnumInfo::of::<ChangeType>(),
        EnumInfo::of::<Enablement>(),
        EnumInfo::of::<StateManagementSetting>(),
        EnumInfo::of::<PhoneType>(),
        EnumInfo::of::<AutomaticUpdateMode>(),
        EnumInfo::of::<WindowsUpdateType>(),
        EnumInfo::of::<AlertSeverity>(),
        EnumInfo::of::<AlertStatus>(),
        EnumInfo::of::<AlertClassification>(),
        EnumInfo::of::<AlertDetermination>(),
        EnumInfo::of::<ServiceSource>(),
        EnumInfo::of::<DetectionSource>(),
        EnumInfo::of::<EvidenceVerdict>(),
        EnumInfo::of::<EvidenceRemediationStatus>(),
        EnumInfo::of::<EvidenceRole>(),
        EnumInfo::of::<DeviceHealthStatus>(),
        EnumInfo::of::<DeviceRiskScore>(),
        EnumInfo::of::<DefenderAvStatus>(),
        EnumInfo::of::<OnboardingStatus>(),
        EnumInfo::of_flags::<WindowsUpdateForBusinessUpdateWeeks>(),
    ]
}

/// Looks up an enum by schema name, ignoring ASCII case.
#[must_use]
pub fn find_enum(name: &str) -> Option<EnumInfo> {
    enum_infos()
        .into_iter()
        .find(|info| info.name.eq_ignore_ascii_case(name))
}
