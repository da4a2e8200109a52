//! App 保護原則：managedAppPolicy → managedAppProtection → targeted / default，
//! android 與 iOS 再繼承 targeted。

use crate::domain::duration::IsoDuration;
use crate::domain::model::FieldValue;
use crate::domain::schema::{FieldDef, Schema, Subtype, ValueKind};
use crate::models::entity::ENTITY;
use crate::models::enums::{
    ManagedAppDataStorageLocation, MANAGED_APP_CLIPBOARD_SHARING_LEVEL,
    MANAGED_APP_DATA_STORAGE_LOCATION, MANAGED_APP_DATA_TRANSFER_LEVEL,
    MANAGED_APP_PIN_CHARACTER_SET, MANAGED_APP_REMEDIATION_ACTION, MANAGED_BROWSER_TYPE,
    TARGETED_MANAGED_APP_GROUP_TYPE,
};

pub static MANAGED_APP_POLICY: Schema = Schema {
    name: "managedAppPolicy",
    odata_type: None,
    base: Some(&ENTITY),
    fields: &[
        FieldDef::scalar("createdDateTime", ValueKind::DateTime),
        FieldDef::scalar("description", ValueKind::String),
        FieldDef::scalar("displayName", ValueKind::String),
        FieldDef::scalar("lastModifiedDateTime", ValueKind::DateTime),
        FieldDef::collection("roleScopeTagIds", ValueKind::String),
        FieldDef::scalar("version", ValueKind::String),
    ],
    subtypes: &[],
};

pub static MANAGED_APP_PROTECTION: Schema = Schema {
    name: "managedAppProtection",
    odata_type: Some("#microsoft.graph.managedAppProtection"),
    base: Some(&MANAGED_APP_POLICY),
    fields: &[
        FieldDef::collection(
            "allowedDataStorageLocations",
            ValueKind::Enum(&MANAGED_APP_DATA_STORAGE_LOCATION),
        ),
        FieldDef::scalar(
            "allowedInboundDataTransferSources",
            ValueKind::Enum(&MANAGED_APP_DATA_TRANSFER_LEVEL),
        ),
        FieldDef::scalar("allowedOutboundClipboardSharingExceptionLength", ValueKind::Int32),
        FieldDef::scalar(
            "allowedOutboundClipboardSharingLevel",
            ValueKind::Enum(&MANAGED_APP_CLIPBOARD_SHARING_LEVEL),
        ),
        FieldDef::scalar(
            "allowedOutboundDataTransferDestinations",
            ValueKind::Enum(&MANAGED_APP_DATA_TRANSFER_LEVEL),
        ),
        FieldDef::scalar(
            "appActionIfMaximumPinRetriesExceeded",
            ValueKind::Enum(&MANAGED_APP_REMEDIATION_ACTION),
        ),
        FieldDef::scalar("contactSyncBlocked", ValueKind::Bool),
        FieldDef::scalar("dataBackupBlocked", ValueKind::Bool),
        FieldDef::scalar("deviceComplianceRequired", ValueKind::Bool),
        FieldDef::scalar("fingerprintBlocked", ValueKind::Bool),
        FieldDef::scalar("gracePeriodToBlockAppsDuringOffClockHours", ValueKind::Duration),
        FieldDef::scalar("managedBrowser", ValueKind::Enum(&MANAGED_BROWSER_TYPE)),
        FieldDef::scalar("managedBrowserToOpenLinksRequired", ValueKind::Bool),
        FieldDef::scalar("maximumPinRetries", ValueKind::Int32),
        FieldDef::scalar("minimumPinLength", ValueKind::Int32),
        FieldDef::scalar("minimumRequiredAppVersion", ValueKind::String),
        FieldDef::scalar("minimumRequiredOsVersion", ValueKind::String),
        FieldDef::scalar("organizationalCredentialsRequired", ValueKind::Bool),
        FieldDef::scalar("periodBeforePinReset", ValueKind::Duration),
        FieldDef::scalar("periodOfflineBeforeAccessCheck", ValueKind::Duration),
        FieldDef::scalar("periodOfflineBeforeWipeIsEnforced", ValueKind::Duration),
        FieldDef::scalar("periodOnlineBeforeAccessCheck", ValueKind::Duration),
        FieldDef::scalar("pinCharacterSet", ValueKind::Enum(&MANAGED_APP_PIN_CHARACTER_SET)),
        FieldDef::scalar("pinRequired", ValueKind::Bool),
        FieldDef::scalar("pinRequiredInsteadOfBiometricTimeout", ValueKind::Duration),
        FieldDef::scalar("previousPinBlockCount", ValueKind::Int32),
        FieldDef::scalar("printBlocked", ValueKind::Bool),
        FieldDef::scalar("saveAsBlocked", ValueKind::Bool),
        FieldDef::scalar("simplePinBlocked", ValueKind::Bool),
    ],
    subtypes: &[
        Subtype {
            tag: "#microsoft.graph.androidManagedAppProtection",
            schema: &ANDROID_MANAGED_APP_PROTECTION,
        },
        Subtype {
            tag: "#microsoft.graph.defaultManagedAppProtection",
            schema: &DEFAULT_MANAGED_APP_PROTECTION,
        },
        Subtype {
            tag: "#microsoft.graph.iosManagedAppProtection",
            schema: &IOS_MANAGED_APP_PROTECTION,
        },
        Subtype {
            tag: "#microsoft.graph.targetedManagedAppProtection",
            schema: &TARGETED_MANAGED_APP_PROTECTION,
        },
    ],
};

pub static TARGETED_MANAGED_APP_PROTECTION: Schema = Schema {
    name: "targetedManagedAppProtection",
    odata_type: Some("#microsoft.graph.targetedManagedAppProtection"),
    base: Some(&MANAGED_APP_PROTECTION),
    fields: &[
        FieldDef::scalar("appGroupType", ValueKind::Enum(&TARGETED_MANAGED_APP_GROUP_TYPE)),
        FieldDef::scalar("isAssigned", ValueKind::Bool),
        FieldDef::collection("targetedAppManagementLevels", ValueKind::String),
    ],
    subtypes: &[
        Subtype {
            tag: "#microsoft.graph.androidManagedAppProtection",
            schema: &ANDROID_MANAGED_APP_PROTECTION,
        },
        Subtype {
            tag: "#microsoft.graph.iosManagedAppProtection",
            schema: &IOS_MANAGED_APP_PROTECTION,
        },
    ],
};

pub static ANDROID_MANAGED_APP_PROTECTION: Schema = Schema {
    name: "androidManagedAppProtection",
    odata_type: Some("#microsoft.graph.androidManagedAppProtection"),
    base: Some(&TARGETED_MANAGED_APP_PROTECTION),
    fields: &[
        FieldDef::collection("allowedAndroidDeviceModels", ValueKind::String),
        FieldDef::scalar("blockAfterCompanyPortalUpdateDeferralInDays", ValueKind::Int32),
        FieldDef::scalar("customBrowserPackageId", ValueKind::String),
        FieldDef::scalar("deployedAppCount", ValueKind::Int32),
        FieldDef::scalar("encryptAppData", ValueKind::Bool),
        FieldDef::scalar("minimumRequiredPatchVersion", ValueKind::String),
        FieldDef::scalar("screenCaptureBlocked", ValueKind::Bool),
    ],
    subtypes: &[],
};

pub static IOS_MANAGED_APP_PROTECTION: Schema = Schema {
    name: "iosManagedAppProtection",
    odata_type: Some("#microsoft.graph.iosManagedAppProtection"),
    base: Some(&TARGETED_MANAGED_APP_PROTECTION),
    fields: &[
        FieldDef::scalar("allowedIosDeviceModels", ValueKind::String),
        FieldDef::scalar(
            "appActionIfIosDeviceModelNotAllowed",
            ValueKind::Enum(&MANAGED_APP_REMEDIATION_ACTION),
        ),
        FieldDef::scalar("customBrowserProtocol", ValueKind::String),
        FieldDef::scalar("deployedAppCount", ValueKind::Int32),
        FieldDef::collection("exemptedUniversalLinks", ValueKind::String),
        FieldDef::scalar("faceIdBlocked", ValueKind::Bool),
        FieldDef::collection("managedUniversalLinks", ValueKind::String),
        FieldDef::scalar("minimumRequiredSdkVersion", ValueKind::String),
        FieldDef::scalar("thirdPartyKeyboardsBlocked", ValueKind::Bool),
    ],
    subtypes: &[],
};

pub static DEFAULT_MANAGED_APP_PROTECTION: Schema = Schema {
    name: "defaultManagedAppProtection",
    odata_type: Some("#microsoft.graph.defaultManagedAppProtection"),
    base: Some(&MANAGED_APP_PROTECTION),
    fields: &[
        FieldDef::scalar("allowedAndroidDeviceManufacturers", ValueKind::String),
        FieldDef::collection("allowedAndroidDeviceModels", ValueKind::String),
        FieldDef::scalar("allowedIosDeviceModels", ValueKind::String),
        FieldDef::scalar(
            "appActionIfDeviceLockNotSet",
            ValueKind::Enum(&MANAGED_APP_REMEDIATION_ACTION),
        ),
        FieldDef::scalar("deployedAppCount", ValueKind::Int32),
        FieldDef::scalar("deviceLockRequired", ValueKind::Bool),
        FieldDef::scalar("encryptAppData", ValueKind::Bool),
        FieldDef::scalar("faceIdBlocked", ValueKind::Bool),
        FieldDef::scalar("screenCaptureBlocked", ValueKind::Bool),
        FieldDef::scalar("thirdPartyKeyboardsBlocked", ValueKind::Bool),
    ],
    subtypes: &[],
};

model! {
    pub struct ManagedAppProtection => MANAGED_APP_PROTECTION;
}

model! {
    pub struct TargetedManagedAppProtection => TARGETED_MANAGED_APP_PROTECTION;
}

model! {
    pub struct AndroidManagedAppProtection => ANDROID_MANAGED_APP_PROTECTION;
}

model! {
    pub struct IosManagedAppProtection => IOS_MANAGED_APP_PROTECTION;
}

model! {
    pub struct DefaultManagedAppProtection => DEFAULT_MANAGED_APP_PROTECTION;
}

impl ManagedAppProtection {
    pub fn period_offline_before_wipe_is_enforced(&self) -> Option<IsoDuration> {
        self.get_duration("periodOfflineBeforeWipeIsEnforced")
    }

    pub fn allowed_data_storage_locations(&self) -> Vec<ManagedAppDataStorageLocation> {
        self.get_collection("allowedDataStorageLocations")
            .unwrap_or_default()
            .iter()
            .filter_map(|item| match item {
                FieldValue::Enum(value) => value.as_member(),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::json::{decode_json_value, encode_json_value, WriterOptions};
    use crate::domain::ports::Model;
    use chrono::TimeDelta;
    use serde_json::json;

    #[test]
    fn test_one_hop_resolution_from_middle_of_hierarchy() {
        let payload = json!({"@odata.type": "#microsoft.graph.iosManagedAppProtection"});

        let from_protection = decode_json_value(&payload, &MANAGED_APP_PROTECTION).unwrap();
        assert!(from_protection.is(&IOS_MANAGED_APP_PROTECTION));

        let from_targeted = decode_json_value(&payload, &TARGETED_MANAGED_APP_PROTECTION).unwrap();
        assert!(from_targeted.is(&IOS_MANAGED_APP_PROTECTION));

        // default 不在 targeted 的表中
        let payload = json!({"@odata.type": "#microsoft.graph.defaultManagedAppProtection"});
        let fallback = decode_json_value(&payload, &TARGETED_MANAGED_APP_PROTECTION).unwrap();
        assert!(fallback.is(&TARGETED_MANAGED_APP_PROTECTION));
    }

    #[test]
    fn test_durations_and_enum_collections() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.androidManagedAppProtection",
            "displayName": "Android baseline",
            "periodOfflineBeforeWipeIsEnforced": "P90D",
            "periodOnlineBeforeAccessCheck": "PT30M",
            "allowedDataStorageLocations": ["oneDriveForBusiness", "sharePoint"],
            "pinCharacterSet": "alphanumericAndSymbol",
            "allowedAndroidDeviceModels": ["Pixel 8", "Galaxy S24"]
        });
        let record = decode_json_value(&payload, &MANAGED_APP_PROTECTION).unwrap();
        let protection = ManagedAppProtection::from_record(record).unwrap();

        let wipe = protection.period_offline_before_wipe_is_enforced().unwrap();
        assert_eq!(wipe.to_time_delta(), TimeDelta::try_days(90));
        assert_eq!(
            protection.allowed_data_storage_locations(),
            vec![
                ManagedAppDataStorageLocation::OneDriveForBusiness,
                ManagedAppDataStorageLocation::SharePoint
            ]
        );

        let encoded = encode_json_value(&protection, WriterOptions::default()).unwrap();
        assert_eq!(encoded, payload);
    }

    #[test]
    fn test_malformed_duration_is_rejected() {
        let payload = json!({"periodBeforePinReset": "90 days"});
        let err = decode_json_value(&payload, &MANAGED_APP_PROTECTION).unwrap_err();
        assert!(err.to_string().contains("periodBeforePinReset"));
    }
}
