use crate::domain::model::EnumValue;
use crate::domain::schema::{FieldDef, Schema, Subtype, ValueKind};
use crate::models::entity::ENTITY;
use crate::models::enums::{
    MacOSFileVaultRecoveryKeyTypes, MacOSGatekeeperAppSources, WiFiSecurityType, APP_LIST_TYPE,
    ENABLEMENT, MAC_OS_FILE_VAULT_RECOVERY_KEY_TYPES, MAC_OS_GATEKEEPER_APP_SOURCES,
    MAC_OS_SOFTWARE_UPDATE_DELAY_POLICY, METERED_CONNECTION_LIMIT_TYPE, REQUIRED_PASSWORD_TYPE,
    WI_FI_PROXY_SETTING, WI_FI_SECURITY_TYPE,
};

pub static DEVICE_CONFIGURATION: Schema = Schema {
    name: "deviceConfiguration",
    odata_type: None,
    base: Some(&ENTITY),
    fields: &[
        FieldDef::scalar("createdDateTime", ValueKind::DateTime),
        FieldDef::scalar("description", ValueKind::String),
        FieldDef::scalar("displayName", ValueKind::String),
        FieldDef::scalar("lastModifiedDateTime", ValueKind::DateTime),
        FieldDef::collection("roleScopeTagIds", ValueKind::String),
        FieldDef::scalar("supportsScopeTags", ValueKind::Bool),
        FieldDef::scalar("version", ValueKind::Int32),
    ],
    subtypes: &[
        Subtype {
            tag: "#microsoft.graph.macOSEndpointProtectionConfiguration",
            schema: &MAC_OS_ENDPOINT_PROTECTION_CONFIGURATION,
        },
        Subtype {
            tag: "#microsoft.graph.macOSGeneralDeviceConfiguration",
            schema: &MAC_OS_GENERAL_DEVICE_CONFIGURATION,
        },
        Subtype {
            tag: "#microsoft.graph.windowsWifiConfiguration",
            schema: &WINDOWS_WIFI_CONFIGURATION,
        },
    ],
};

pub static MAC_OS_ENDPOINT_PROTECTION_CONFIGURATION: Schema = Schema {
    name: "macOSEndpointProtectionConfiguration",
    odata_type: Some("#microsoft.graph.macOSEndpointProtectionConfiguration"),
    base: Some(&DEVICE_CONFIGURATION),
    fields: &[
        FieldDef::scalar("advancedThreatProtectionAutomaticSampleSubmission", ValueKind::Enum(&ENABLEMENT)),
        FieldDef::scalar("advancedThreatProtectionCloudDelivered", ValueKind::Enum(&ENABLEMENT)),
        FieldDef::scalar("advancedThreatProtectionDiagnosticDataCollection", ValueKind::Enum(&ENABLEMENT)),
        FieldDef::collection("advancedThreatProtectionExcludedExtensions", ValueKind::String),
        FieldDef::collection("advancedThreatProtectionExcludedFiles", ValueKind::String),
        FieldDef::collection("advancedThreatProtectionExcludedFolders", ValueKind::String),
        FieldDef::collection("advancedThreatProtectionExcludedProcesses", ValueKind::String),
        FieldDef::scalar("advancedThreatProtectionRealTime", ValueKind::Enum(&ENABLEMENT)),
        FieldDef::scalar("fileVaultAllowDeferralUntilSignOut", ValueKind::Bool),
        FieldDef::scalar("fileVaultDisablePromptAtSignOut", ValueKind::Bool),
        FieldDef::scalar("fileVaultEnabled", ValueKind::Bool),
        FieldDef::scalar("fileVaultHidePersonalRecoveryKey", ValueKind::Bool),
        FieldDef::scalar("fileVaultInstitutionalRecoveryKeyCertificate", ValueKind::Bytes),
        FieldDef::scalar("fileVaultInstitutionalRecoveryKeyCertificateFileName", ValueKind::String),
        FieldDef::scalar("fileVaultNumberOfTimesUserCanIgnore", ValueKind::Int32),
        FieldDef::scalar("fileVaultPersonalRecoveryKeyHelpMessage", ValueKind::String),
        FieldDef::scalar("fileVaultPersonalRecoveryKeyRotationInMonths", ValueKind::Int32),
        FieldDef::scalar(
            "fileVaultSelectedRecoveryKeyTypes",
            ValueKind::Enum(&MAC_OS_FILE_VAULT_RECOVERY_KEY_TYPES),
        ),
        FieldDef::collection("firewallApplications", ValueKind::Object(&MAC_OS_FIREWALL_APPLICATION)),
        FieldDef::scalar("firewallBlockAllIncoming", ValueKind::Bool),
        FieldDef::scalar("firewallEnabled", ValueKind::Bool),
        FieldDef::scalar("firewallEnableStealthMode", ValueKind::Bool),
        FieldDef::scalar("gatekeeperAllowedAppSource", ValueKind::Enum(&MAC_OS_GATEKEEPER_APP_SOURCES)),
        FieldDef::scalar("gatekeeperBlockOverride", ValueKind::Bool),
    ],
    subtypes: &[],
};

pub static MAC_OS_FIREWALL_APPLICATION: Schema = Schema {
    name: "macOSFirewallApplication",
    odata_type: None,
    base: None,
    fields: &[
        FieldDef::scalar("@odata.type", ValueKind::String),
        FieldDef::scalar("allowsIncomingConnections", ValueKind::Bool),
        FieldDef::scalar("bundleId", ValueKind::String),
    ],
    subtypes: &[],
};

pub static MAC_OS_GENERAL_DEVICE_CONFIGURATION: Schema = Schema {
    name: "macOSGeneralDeviceConfiguration",
    odata_type: Some("#microsoft.graph.macOSGeneralDeviceConfiguration"),
    base: Some(&DEVICE_CONFIGURATION),
    fields: &[
        FieldDef::scalar("addingGameCenterFriendsBlocked", ValueKind::Bool),
        FieldDef::scalar("airDropBlocked", ValueKind::Bool),
        FieldDef::scalar("appleWatchBlockAutoUnlock", ValueKind::Bool),
        FieldDef::scalar("cameraBlocked", ValueKind::Bool),
        FieldDef::scalar("compliantAppListType", ValueKind::Enum(&APP_LIST_TYPE)),
        FieldDef::scalar("contentCachingBlocked", ValueKind::Bool),
        FieldDef::collection("emailInDomainSuffixes", ValueKind::String),
        FieldDef::scalar("iCloudBlockDocumentSync", ValueKind::Bool),
        FieldDef::scalar("iCloudBlockPhotoLibrary", ValueKind::Bool),
        FieldDef::scalar("passwordBlockSimple", ValueKind::Bool),
        FieldDef::scalar("passwordExpirationDays", ValueKind::Int32),
        FieldDef::scalar("passwordMinimumLength", ValueKind::Int32),
        FieldDef::scalar("passwordMinutesOfInactivityBeforeLock", ValueKind::Int32),
        FieldDef::scalar("passwordRequired", ValueKind::Bool),
        FieldDef::scalar("passwordRequiredType", ValueKind::Enum(&REQUIRED_PASSWORD_TYPE)),
        FieldDef::scalar("screenCaptureBlocked", ValueKind::Bool),
        FieldDef::scalar("softwareUpdatesEnforcedDelayInDays", ValueKind::Int32),
        FieldDef::scalar("touchIdTimeoutInHours", ValueKind::Int32),
        FieldDef::scalar("updateDelayPolicy", ValueKind::Enum(&MAC_OS_SOFTWARE_UPDATE_DELAY_POLICY)),
        FieldDef::scalar("wallpaperModificationBlocked", ValueKind::Bool),
    ],
    subtypes: &[],
};

pub static WINDOWS_WIFI_CONFIGURATION: Schema = Schema {
    name: "windowsWifiConfiguration",
    odata_type: Some("#microsoft.graph.windowsWifiConfiguration"),
    base: Some(&DEVICE_CONFIGURATION),
    fields: &[
        FieldDef::scalar("connectAutomatically", ValueKind::Bool),
        FieldDef::scalar("connectToPreferredNetwork", ValueKind::Bool),
        FieldDef::scalar("connectWhenNetworkNameIsHidden", ValueKind::Bool),
        FieldDef::scalar("forceFIPSCompliance", ValueKind::Bool),
        FieldDef::scalar("meteredConnectionLimit", ValueKind::Enum(&METERED_CONNECTION_LIMIT_TYPE)),
        FieldDef::scalar("networkName", ValueKind::String),
        FieldDef::scalar("preSharedKey", ValueKind::String),
        FieldDef::scalar("proxyAutomaticConfigurationUrl", ValueKind::String),
        FieldDef::scalar("proxyManualAddress", ValueKind::String),
        FieldDef::scalar("proxyManualPort", ValueKind::Int32),
        FieldDef::scalar("proxySetting", ValueKind::Enum(&WI_FI_PROXY_SETTING)),
        FieldDef::scalar("ssid", ValueKind::String),
        FieldDef::scalar("wifiSecurityType", ValueKind::Enum(&WI_FI_SECURITY_TYPE)),
    ],
    subtypes: &[],
};

model! {
    pub struct DeviceConfiguration => DEVICE_CONFIGURATION;
}

model! {
    pub struct MacOSEndpointProtectionConfiguration => MAC_OS_ENDPOINT_PROTECTION_CONFIGURATION;
}

model! {
    pub struct MacOSGeneralDeviceConfiguration => MAC_OS_GENERAL_DEVICE_CONFIGURATION;
}

model! {
    pub struct WindowsWifiConfiguration => WINDOWS_WIFI_CONFIGURATION;
}

impl DeviceConfiguration {
    pub fn display_name(&self) -> Option<&str> {
        self.get_str("displayName")
    }

    pub fn role_scope_tag_ids(&self) -> Vec<&str> {
        self.get_strings("roleScopeTagIds").unwrap_or_default()
    }
}

impl MacOSEndpointProtectionConfiguration {
    pub fn gatekeeper_allowed_app_source(&self) -> Option<MacOSGatekeeperAppSources> {
        self.get_enum_as("gatekeeperAllowedAppSource")
    }

    /// 旗標值，可用 `contains` 檢查個別金鑰類型
    pub fn file_vault_selected_recovery_key_types(&self) -> Option<EnumValue> {
        self.get_enum("fileVaultSelectedRecoveryKeyTypes")
    }

    pub fn uses_personal_recovery_key(&self) -> bool {
        self.file_vault_selected_recovery_key_types()
            .is_some_and(|types| types.contains(MacOSFileVaultRecoveryKeyTypes::PersonalRecoveryKey))
    }
}

impl WindowsWifiConfiguration {
    pub fn ssid(&self) -> Option<&str> {
        self.get_str("ssid")
    }

    pub fn wifi_security_type(&self) -> Option<WiFiSecurityType> {
        self.get_enum_as("wifiSecurityType")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::json::{decode_model, encode_json_value, WriterOptions};
    use serde_json::json;

    #[test]
    fn test_endpoint_protection_payload() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.macOSEndpointProtectionConfiguration",
            "id": "4f3b",
            "displayName": "Baseline",
            "version": 3,
            "gatekeeperAllowedAppSource": "macAppStoreAndIdentifiedDevelopers",
            "fileVaultSelectedRecoveryKeyTypes": "institutionalRecoveryKey,personalRecoveryKey",
            "fileVaultInstitutionalRecoveryKeyCertificate": "AAEC",
            "firewallApplications": [
                {"bundleId": "com.example.app", "allowsIncomingConnections": false}
            ],
            "advancedThreatProtectionExcludedFolders": ["/tmp", "/var/log"]
        });

        let config: DeviceConfiguration = decode_model(&payload.to_string()).unwrap();
        assert!(config.is(&MAC_OS_ENDPOINT_PROTECTION_CONFIGURATION));
        assert_eq!(config.display_name(), Some("Baseline"));
        assert_eq!(
            config.get_bytes("fileVaultInstitutionalRecoveryKeyCertificate"),
            Some(&[0u8, 1, 2][..])
        );

        let endpoint = MacOSEndpointProtectionConfiguration::try_from(crate::domain::model::Record::from(config)).unwrap();
        assert_eq!(
            endpoint.gatekeeper_allowed_app_source(),
            Some(MacOSGatekeeperAppSources::MacAppStoreAndIdentifiedDevelopers)
        );
        assert!(endpoint.uses_personal_recovery_key());

        let encoded = encode_json_value(&endpoint, WriterOptions::default()).unwrap();
        assert_eq!(encoded, payload);
    }

    #[test]
    fn test_unknown_enum_member_fails_decode() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.windowsWifiConfiguration",
            "wifiSecurityType": "wpa3Personal"
        });
        let err = decode_model::<DeviceConfiguration>(&payload.to_string()).unwrap_err();
        assert!(err.to_string().contains("wifiSecurityType"));
    }

    #[test]
    fn test_sibling_subtype_does_not_narrow() {
        let wifi = WindowsWifiConfiguration::new();
        let record: crate::domain::model::Record = wifi.into();
        assert!(MacOSEndpointProtectionConfiguration::try_from(record).is_err());
    }
}
