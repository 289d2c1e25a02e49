//! Types from the `microsoft.graph.security` namespace.

mod alert;
mod evidence;

pub use alert::{Alert, AlertComment};
pub use evidence::{AlertEvidence, DeviceEvidence};

use graphmodel_abstractions::graph_enum;

graph_enum! {
    pub enum AlertSeverity: "alertSeverity" {
        Unknown = "unknown" => 0,
        Informational = "informational" => 1,
        Low = "low" => 2,
        Medium = "medium" => 3,
        High = "high" => 4,
        UnknownFutureValue = "unknownFutureValue" => 5,
    }
}

graph_enum! {
    pub enum AlertStatus: "alertStatus" {
        Unknown = "unknown" => 0,
        New = "new" => 1,
        InProgress = "inProgress" => 2,
        Resolved = "resolved" => 3,
        UnknownFutureValue = "unknownFutureValue" => 4,
    }
}

graph_enum! {
    pub enum AlertClassification: "alertClassification" {
        Unknown = "unknown" => 0,
        FalsePositive = "falsePositive" => 1,
        TruePositive = "truePositive" => 2,
        InformationalExpectedActivity = "informationalExpectedActivity" => 3,
        UnknownFutureValue = "unknownFutureValue" => 4,
    }
}

graph_enum! {
    pub enum AlertDetermination: "alertDetermination" {
        Unknown = "unknown" => 0,
        Apt = "apt" => 1,
        Malware = "malware" => 2,
        SecurityPersonnel = "securityPersonnel" => 3,
        SecurityTesting = "securityTesting" => 4,
        UnwantedSoftware = "unwantedSoftware" => 5,
        Other = "other" => 6,
        MultiStagedAttack = "multiStagedAttack" => 7,
        CompromisedAccount = "compromisedAccount" => 8,
        Phishing = "phishing" => 9,
        MaliciousUserActivity = "maliciousUserActivity" => 10,
        NotMalicious = "notMalicious" => 11,
        NotEnoughDataToValidate = "notEnoughDataToValidate" => 12,
        ConfirmedActivity = "confirmedActivity" => 13,
        LineOfBusinessApplication = "lineOfBusinessApplication" => 14,
        UnknownFutureValue = "unknownFutureValue" => 15,
    }
}

graph_enum! {
    /// Product that raised an alert.
    pub enum ServiceSource: "serviceSource" {
        Unknown = "unknown" => 0,
        MicrosoftDefenderForEndpoint = "microsoftDefenderForEndpoint" => 1,
        MicrosoftDefenderForIdentity = "microsoftDefenderForIdentity" => 2,
        MicrosoftDefenderForCloudApps = "microsoftDefenderForCloudApps" => 3,
        MicrosoftDefenderForOffice365 = "microsoftDefenderForOffice365" => 4,
        Microsoft365Defender = "microsoft365Defender" => 5,
        AzureAdIdentityProtection = "azureAdIdentityProtection" => 6,
        MicrosoftAppGovernance = "microsoftAppGovernance" => 7,
        DataLossPrevention = "dataLossPrevention" => 8,
        UnknownFutureValue = "unknownFutureValue" => 9,
        MicrosoftDefenderForCloud = "microsoftDefenderForCloud" => 10,
        MicrosoftSentinel = "microsoftSentinel" => 11,
    }
}

graph_enum! {
    /// Detection technology within the service that raised an alert.
    pub enum DetectionSource: "detectionSource" {
        Unknown = "unknown" => 0,
        MicrosoftDefenderForEndpoint = "microsoftDefenderForEndpoint" => 1,
        Antivirus = "antivirus" => 2,
        SmartScreen = "smartScreen" => 3,
        CustomTi = "customTi" => 4,
        MicrosoftDefenderForOffice365 = "microsoftDefenderForOffice365" => 5,
        AutomatedInvestigation = "automatedInvestigation" => 6,
        MicrosoftThreatExperts = "microsoftThreatExperts" => 7,
        CustomDetection = "customDetection" => 8,
        MicrosoftDefenderForIdentity = "microsoftDefenderForIdentity" => 9,
        CloudAppSecurity = "cloudAppSecurity" => 10,
        Microsoft365Defender = "microsoft365Defender" => 11,
        AzureAdIdentityProtection = "azureAdIdentityProtection" => 12,
        Manual = "manual" => 13,
        MicrosoftDataLossPrevention = "microsoftDataLossPrevention" => 14,
        AppGovernancePolicy = "appGovernancePolicy" => 15,
        AppGovernanceDetection = "appGovernanceDetection" => 16,
        UnknownFutureValue = "unknownFutureValue" => 17,
        MicrosoftDefenderForCloud = "microsoftDefenderForCloud" => 18,
    }
}

graph_enum! {
    pub enum EvidenceVerdict: "evidenceVerdict" {
        Unknown = "unknown" => 0,
        Suspicious = "suspicious" => 1,
        Malicious = "malicious" => 2,
        NoThreatsFound = "noThreatsFound" => 3,
        UnknownFutureValue = "unknownFutureValue" => 4,
    }
}

graph_enum! {
    pub enum EvidenceRemediationStatus: "evidenceRemediationStatus" {
        None = "none" => 0,
        Remediated = "remediated" => 1,
        Prevented = "prevented" => 2,
        Blocked = "blocked" => 3,
        NotFound = "notFound" => 4,
        UnknownFutureValue = "unknownFutureValue" => 5,
    }
}

graph_enum! {
    pub enum EvidenceRole: "evidenceRole" {
        Unknown = "unknown" => 0,
        Contextual = "contextual" => 1,
        Scanned = "scanned" => 2,
        Source = "source" => 3,
        Destination = "destination" => 4,
        Created = "created" => 5,
        Added = "added" => 6,
        Compromised = "compromised" => 7,
        Edited = "edited" => 8,
        Attacked = "attacked" => 9,
        Attacker = "attacker" => 10,
        CommandAndControl = "commandAndControl" => 11,
        Loaded = "loaded" => 12,
        Suspicious = "suspicious" => 13,
        PolicyViolator = "policyViolator" => 14,
        UnknownFutureValue = "unknownFutureValue" => 15,
    }
}

graph_enum! {
    pub enum DeviceHealthStatus: "deviceHealthStatus" {
        Active = "active" => 0,
        Inactive = "inactive" => 1,
        ImpairedCommunication = "impairedCommunication" => 2,
        NoSensorData = "noSensorData" => 3,
        NoSensorDataImpairedCommunication = "noSensorDataImpairedCommunication" => 4,
        Unknown = "unknown" => 5,
        UnknownFutureValue = "unknownFutureValue" => 6,
    }
}

graph_enum! {
    pub enum DeviceRiskScore: "deviceRiskScore" {
        None = "none" => 0,
        Informational = "informational" => 1,
        Low = "low" => 2,
        Medium = "medium" => 3,
        High = "high" => 4,
        UnknownFutureValue = "unknownFutureValue" => 5,
    }
}

graph_enum! {
    pub enum DefenderAvStatus: "defenderAvStatus" {
        NotReporting = "notReporting" => 0,
        Disabled = "disabled" => 1,
        NotUpdated = "notUpdated" => 2,
        Updated = "updated" => 3,
        Unknown = "unknown" => 4,
        NotSupported = "notSupported" => 5,
        UnknownFutureValue = "unknownFutureValue" => 6,
    }
}

graph_enum! {
    pub enum OnboardingStatus: "onboardingStatus" {
        InsufficientInfo = "insufficientInfo" => 0,
        Onboarded = "onboarded" => 1,
        CanBeOnboarded = "canBeOnboarded" => 2,
        Unsupported = "unsupported" => 3,
        UnknownFutureValue = "unknownFutureValue" => 4,
    }
}
