//! Graph beta 列舉，成員名稱即 wire 字串。

// 裝置設定

wire_enum! {
    pub enum Enablement => ENABLEMENT("enablement") {
        NotConfigured = "notConfigured": 0,
        Enabled = "enabled": 1,
        Disabled = "disabled": 2,
    }
}

wire_enum! {
    /// macOS Gatekeeper 允許的 App 來源
    pub enum MacOSGatekeeperAppSources => MAC_OS_GATEKEEPER_APP_SOURCES("macOSGatekeeperAppSources") {
        NotConfigured = "notConfigured": 0,
        MacAppStore = "macAppStore": 1,
        MacAppStoreAndIdentifiedDevelopers = "macAppStoreAndIdentifiedDevelopers": 2,
        Anywhere = "anywhere": 3,
    }
}

wire_enum! {
    /// FileVault 復原金鑰類型（旗標）
    pub enum MacOSFileVaultRecoveryKeyTypes => MAC_OS_FILE_VAULT_RECOVERY_KEY_TYPES("macOSFileVaultRecoveryKeyTypes", flags) {
        NotConfigured = "notConfigured": 0,
        InstitutionalRecoveryKey = "institutionalRecoveryKey": 1,
        PersonalRecoveryKey = "personalRecoveryKey": 2,
    }
}

wire_enum! {
    pub enum AppListType => APP_LIST_TYPE("appListType") {
        None = "none": 0,
        AppsInListCompliant = "appsInListCompliant": 1,
        AppsNotInListCompliant = "appsNotInListCompliant": 2,
    }
}

wire_enum! {
    pub enum RequiredPasswordType => REQUIRED_PASSWORD_TYPE("requiredPasswordType") {
        DeviceDefault = "deviceDefault": 0,
        Alphanumeric = "alphanumeric": 1,
        Numeric = "numeric": 2,
    }
}

wire_enum! {
    pub enum MacOSSoftwareUpdateDelayPolicy => MAC_OS_SOFTWARE_UPDATE_DELAY_POLICY("macOSSoftwareUpdateDelayPolicy", flags) {
        None = "none": 0,
        DelayOSUpdateVisibility = "delayOSUpdateVisibility": 1,
        DelayAppUpdateVisibility = "delayAppUpdateVisibility": 2,
        UnknownFutureValue = "unknownFutureValue": 4,
        DelayMajorOsUpdateVisibility = "delayMajorOsUpdateVisibility": 8,
    }
}

wire_enum! {
    pub enum MeteredConnectionLimitType => METERED_CONNECTION_LIMIT_TYPE("meteredConnectionLimitType") {
        Unrestricted = "unrestricted": 0,
        Fixed = "fixed": 1,
        Variable = "variable": 2,
    }
}

wire_enum! {
    pub enum WiFiProxySetting => WI_FI_PROXY_SETTING("wiFiProxySetting") {
        None = "none": 0,
        Manual = "manual": 1,
        Automatic = "automatic": 2,
    }
}

wire_enum! {
    pub enum WiFiSecurityType => WI_FI_SECURITY_TYPE("wiFiSecurityType") {
        Open = "open": 0,
        WpaPersonal = "wpaPersonal": 1,
        WpaEnterprise = "wpaEnterprise": 2,
        Wep = "wep": 3,
        Wpa2Personal = "wpa2Personal": 4,
        Wpa2Enterprise = "wpa2Enterprise": 5,
    }
}

// App 保護原則

wire_enum! {
    pub enum ManagedAppDataStorageLocation => MANAGED_APP_DATA_STORAGE_LOCATION("managedAppDataStorageLocation") {
        OneDriveForBusiness = "oneDriveForBusiness": 1,
        SharePoint = "sharePoint": 2,
        Box = "box": 3,
        LocalStorage = "localStorage": 6,
        PhotoLibrary = "photoLibrary": 7,
    }
}

wire_enum! {
    pub enum ManagedAppDataTransferLevel => MANAGED_APP_DATA_TRANSFER_LEVEL("managedAppDataTransferLevel") {
        AllApps = "allApps": 0,
        ManagedApps = "managedApps": 1,
        None = "none": 2,
    }
}

wire_enum! {
    pub enum ManagedAppClipboardSharingLevel => MANAGED_APP_CLIPBOARD_SHARING_LEVEL("managedAppClipboardSharingLevel") {
        AllApps = "allApps": 0,
        ManagedAppsWithPasteIn = "managedAppsWithPasteIn": 1,
        ManagedApps = "managedApps": 2,
        Blocked = "blocked": 3,
    }
}

wire_enum! {
    pub enum ManagedAppRemediationAction => MANAGED_APP_REMEDIATION_ACTION("managedAppRemediationAction") {
        Block = "block": 0,
        Wipe = "wipe": 1,
        Warn = "warn": 2,
    }
}

wire_enum! {
    pub enum ManagedAppPinCharacterSet => MANAGED_APP_PIN_CHARACTER_SET("managedAppPinCharacterSet") {
        Numeric = "numeric": 0,
        AlphanumericAndSymbol = "alphanumericAndSymbol": 1,
    }
}

wire_enum! {
    pub enum ManagedBrowserType => MANAGED_BROWSER_TYPE("managedBrowserType", flags) {
        NotConfigured = "notConfigured": 0,
        MicrosoftEdge = "microsoftEdge": 1,
    }
}

wire_enum! {
    pub enum TargetedManagedAppGroupType => TARGETED_MANAGED_APP_GROUP_TYPE("targetedManagedAppGroupType") {
        SelectedPublicApps = "selectedPublicApps": 0,
        AllCoreMicrosoftApps = "allCoreMicrosoftApps": 1,
        AllMicrosoftApps = "allMicrosoftApps": 2,
        AllApps = "allApps": 3,
    }
}

// 建議事項

wire_enum! {
    pub enum RecommendationCategory => RECOMMENDATION_CATEGORY("recommendationCategory") {
        IdentityBestPractice = "identityBestPractice": 0,
        IdentitySecureScore = "identitySecureScore": 1,
        UnknownFutureValue = "unknownFutureValue": 2,
    }
}

wire_enum! {
    pub enum RecommendationFeatureAreas => RECOMMENDATION_FEATURE_AREAS("recommendationFeatureAreas") {
        Users = "users": 0,
        Groups = "groups": 1,
        Devices = "devices": 2,
        Applications = "applications": 3,
        AccessReviews = "accessReviews": 4,
        ConditionalAccess = "conditionalAccess": 5,
        Governance = "governance": 6,
        UnknownFutureValue = "unknownFutureValue": 7,
    }
}

wire_enum! {
    pub enum RecommendationPriority => RECOMMENDATION_PRIORITY("recommendationPriority") {
        Low = "low": 0,
        Medium = "medium": 1,
        High = "high": 2,
    }
}

wire_enum! {
    pub enum RecommendationStatus => RECOMMENDATION_STATUS("recommendationStatus") {
        Active = "active": 0,
        CompletedBySystem = "completedBySystem": 1,
        CompletedByUser = "completedByUser": 2,
        Dismissed = "dismissed": 3,
        Postponed = "postponed": 4,
        UnknownFutureValue = "unknownFutureValue": 5,
    }
}

wire_enum! {
    pub enum RecommendationType => RECOMMENDATION_TYPE("recommendationType") {
        AdfsAppsMigration = "adfsAppsMigration": 0,
        EnableDesktopSSO = "enableDesktopSSO": 1,
        EnablePHS = "enablePHS": 2,
        EnableProvisioning = "enableProvisioning": 3,
        SwitchFromPerUserMFA = "switchFromPerUserMFA": 4,
        TenantMFA = "tenantMFA": 5,
        ThirdPartyApps = "thirdPartyApps": 6,
        TurnOffPerUserMFA = "turnOffPerUserMFA": 7,
        UseAuthenticatorApp = "useAuthenticatorApp": 8,
        UseMyApps = "useMyApps": 9,
        StaleApps = "staleApps": 10,
        StaleAppCreds = "staleAppCreds": 11,
        ApplicationCredentialExpiry = "applicationCredentialExpiry": 12,
        ServicePrincipalKeyExpiry = "servicePrincipalKeyExpiry": 13,
        AdminMFAV2 = "adminMFAV2": 14,
        BlockLegacyAuthentication = "blockLegacyAuthentication": 15,
        IntegratedApps = "integratedApps": 16,
        MfaRegistrationV2 = "mfaRegistrationV2": 17,
        PwagePolicyNew = "pwagePolicyNew": 18,
        PasswordHashSync = "passwordHashSync": 19,
        OneAdmin = "oneAdmin": 20,
        RoleOverlap = "roleOverlap": 21,
        SelfServicePasswordReset = "selfServicePasswordReset": 22,
        SigninRiskPolicy = "signinRiskPolicy": 23,
        UserRiskPolicy = "userRiskPolicy": 24,
        VerifyAppPublisher = "verifyAppPublisher": 25,
        PrivateLinkForAAD = "privateLinkForAAD": 26,
        AppRoleAssignmentsGroups = "appRoleAssignmentsGroups": 27,
        AppRoleAssignmentsUsers = "appRoleAssignmentsUsers": 28,
        ManagedIdentity = "managedIdentity": 29,
        OverprivilegedApps = "overprivilegedApps": 30,
        UnknownFutureValue = "unknownFutureValue": 31,
    }
}

// 身分識別治理

wire_enum! {
    pub enum LifecycleWorkflowCategory => LIFECYCLE_WORKFLOW_CATEGORY("identityGovernance.lifecycleWorkflowCategory") {
        Joiner = "joiner": 0,
        Leaver = "leaver": 1,
        UnknownFutureValue = "unknownFutureValue": 2,
        Mover = "mover": 3,
    }
}

// 安全性提交

wire_enum! {
    pub enum SubmissionCategory => SUBMISSION_CATEGORY("security.submissionCategory") {
        NotJunk = "notJunk": 0,
        Spam = "spam": 1,
        Phishing = "phishing": 2,
        Malware = "malware": 3,
        UnknownFutureValue = "unknownFutureValue": 4,
    }
}

wire_enum! {
    pub enum SubmissionClientSource => SUBMISSION_CLIENT_SOURCE("security.submissionClientSource") {
        Microsoft = "microsoft": 0,
        Other = "other": 1,
        UnknownFutureValue = "unknownFutureValue": 2,
    }
}

wire_enum! {
    pub enum SubmissionContentType => SUBMISSION_CONTENT_TYPE("security.submissionContentType") {
        Email = "email": 0,
        Url = "url": 1,
        File = "file": 2,
        App = "app": 3,
        UnknownFutureValue = "unknownFutureValue": 4,
    }
}

wire_enum! {
    pub enum SubmissionSource => SUBMISSION_SOURCE("security.submissionSource") {
        User = "user": 0,
        Administrator = "administrator": 1,
        UnknownFutureValue = "unknownFutureValue": 2,
    }
}

wire_enum! {
    pub enum LongRunningOperationStatus => LONG_RUNNING_OPERATION_STATUS("security.longRunningOperationStatus") {
        NotStarted = "notStarted": 0,
        Running = "running": 1,
        Succeeded = "succeeded": 2,
        Failed = "failed": 3,
        UnknownFutureValue = "unknownFutureValue": 4,
    }
}

// 裝置管理指令碼

wire_enum! {
    pub enum DeviceCustomAttributeValueType => DEVICE_CUSTOM_ATTRIBUTE_VALUE_TYPE("deviceCustomAttributeValueType") {
        Integer = "integer": 0,
        String = "string": 1,
        DateTime = "dateTime": 2,
    }
}

wire_enum! {
    pub enum RunAsAccountType => RUN_AS_ACCOUNT_TYPE("runAsAccountType") {
        System = "system": 0,
        User = "user": 1,
    }
}

pub static ENUMS: &[&crate::domain::schema::EnumDef] = &[
    &ENABLEMENT,
    &MAC_OS_GATEKEEPER_APP_SOURCES,
    &MAC_OS_FILE_VAULT_RECOVERY_KEY_TYPES,
    &APP_LIST_TYPE,
    &REQUIRED_PASSWORD_TYPE,
    &MAC_OS_SOFTWARE_UPDATE_DELAY_POLICY,
    &METERED_CONNECTION_LIMIT_TYPE,
    &WI_FI_PROXY_SETTING,
    &WI_FI_SECURITY_TYPE,
    &MANAGED_APP_DATA_STORAGE_LOCATION,
    &MANAGED_APP_DATA_TRANSFER_LEVEL,
    &MANAGED_APP_CLIPBOARD_SHARING_LEVEL,
    &MANAGED_APP_REMEDIATION_ACTION,
    &MANAGED_APP_PIN_CHARACTER_SET,
    &MANAGED_BROWSER_TYPE,
    &TARGETED_MANAGED_APP_GROUP_TYPE,
    &RECOMMENDATION_CATEGORY,
    &RECOMMENDATION_FEATURE_AREAS,
    &RECOMMENDATION_PRIORITY,
    &RECOMMENDATION_STATUS,
    &RECOMMENDATION_TYPE,
    &LIFECYCLE_WORKFLOW_CATEGORY,
    &SUBMISSION_CATEGORY,
    &SUBMISSION_CLIENT_SOURCE,
    &SUBMISSION_CONTENT_TYPE,
    &SUBMISSION_SOURCE,
    &LONG_RUNNING_OPERATION_STATUS,
    &DEVICE_CUSTOM_ATTRIBUTE_VALUE_TYPE,
    &RUN_AS_ACCOUNT_TYPE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::WireEnum;

    #[test]
    fn test_every_enum_round_trips_every_member() {
        for def in ENUMS {
            for (name, value) in def.members {
                let parsed = def.parse(name).unwrap();
                assert_eq!(parsed.value(), *value, "{}.{}", def.name, name);
                assert_eq!(parsed.to_wire_string(), *name, "{}.{}", def.name, name);
            }
            assert!(def.parse("bogus").is_err(), "{}", def.name);
        }
    }

    #[test]
    fn test_typed_member_matches_definition() {
        assert_eq!(WiFiSecurityType::Wpa2Enterprise.value(), 5);
        assert_eq!(WiFiSecurityType::from_value(5), Some(WiFiSecurityType::Wpa2Enterprise));
        assert_eq!(WiFiSecurityType::from_value(42), None);
        assert_eq!(RunAsAccountType::definition().name, "runAsAccountType");
        assert_eq!(ManagedAppPinCharacterSet::AlphanumericAndSymbol.as_str(), "alphanumericAndSymbol");
    }

    #[test]
    fn test_flags_enum_with_gaps() {
        let value = MAC_OS_SOFTWARE_UPDATE_DELAY_POLICY
            .parse("delayOSUpdateVisibility,delayMajorOsUpdateVisibility")
            .unwrap();
        assert_eq!(value.value(), 9);
        assert!(value.contains(MacOSSoftwareUpdateDelayPolicy::DelayMajorOsUpdateVisibility));
        assert!(!value.contains(MacOSSoftwareUpdateDelayPolicy::DelayAppUpdateVisibility));
        assert_eq!(
            value.to_wire_string(),
            "delayOSUpdateVisibility,delayMajorOsUpdateVisibility"
        );
    }
}
