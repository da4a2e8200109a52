// Models: static Graph beta schemas, their typed facades and wire enums.

pub mod classification;
pub mod device_configuration;
pub mod device_custom_attribute_shell_script;
pub mod entity;
pub mod enums;
pub mod financials;
pub mod identity_governance;
pub mod managed_app_protection;
pub mod microsoft_tunnel_site;
pub mod recommendation;
pub mod security;
pub mod trust_framework_key;

use crate::domain::schema::{EnumDef, Schema};

pub use classification::{ClassifcationErrorBase, ClassificationError, ClassificationInnerError};
pub use device_configuration::{
    DeviceConfiguration, MacOSEndpointProtectionConfiguration, MacOSGeneralDeviceConfiguration,
    WindowsWifiConfiguration,
};
pub use device_custom_attribute_shell_script::DeviceCustomAttributeShellScript;
pub use entity::Entity;
pub use financials::SalesOrderLine;
pub use identity_governance::{Workflow, WorkflowBase, WorkflowVersion};
pub use managed_app_protection::{
    AndroidManagedAppProtection, DefaultManagedAppProtection, IosManagedAppProtection,
    ManagedAppProtection, TargetedManagedAppProtection,
};
pub use microsoft_tunnel_site::MicrosoftTunnelSite;
pub use recommendation::{ActionStep, ActionUrl, ImpactedResource, Recommendation, RecommendationBase};
pub use security::{
    EmailContentThreatSubmission, EmailThreatSubmission, EmailUrlThreatSubmission,
    FileContentThreatSubmission, FileThreatSubmission, FileUrlThreatSubmission, ThreatSubmission,
    UrlThreatSubmission,
};
pub use trust_framework_key::TrustFrameworkKey;

/// 目錄中的所有結構描述（含輔助的複合型別）
pub static ALL_SCHEMAS: &[&Schema] = &[
    &entity::ENTITY,
    &classification::CLASSIFCATION_ERROR_BASE,
    &classification::CLASSIFICATION_ERROR,
    &classification::CLASSIFICATION_INNER_ERROR,
    &recommendation::RECOMMENDATION_BASE,
    &recommendation::RECOMMENDATION,
    &recommendation::ACTION_STEP,
    &recommendation::ACTION_URL,
    &recommendation::IMPACTED_RESOURCE,
    &recommendation::KEY_VALUE,
    &device_configuration::DEVICE_CONFIGURATION,
    &device_configuration::MAC_OS_ENDPOINT_PROTECTION_CONFIGURATION,
    &device_configuration::MAC_OS_FIREWALL_APPLICATION,
    &device_configuration::MAC_OS_GENERAL_DEVICE_CONFIGURATION,
    &device_configuration::WINDOWS_WIFI_CONFIGURATION,
    &managed_app_protection::MANAGED_APP_POLICY,
    &managed_app_protection::MANAGED_APP_PROTECTION,
    &managed_app_protection::TARGETED_MANAGED_APP_PROTECTION,
    &managed_app_protection::ANDROID_MANAGED_APP_PROTECTION,
    &managed_app_protection::IOS_MANAGED_APP_PROTECTION,
    &managed_app_protection::DEFAULT_MANAGED_APP_PROTECTION,
    &identity_governance::WORKFLOW_BASE,
    &identity_governance::WORKFLOW,
    &identity_governance::WORKFLOW_VERSION,
    &security::THREAT_SUBMISSION,
    &security::EMAIL_THREAT_SUBMISSION,
    &security::EMAIL_CONTENT_THREAT_SUBMISSION,
    &security::EMAIL_URL_THREAT_SUBMISSION,
    &security::FILE_THREAT_SUBMISSION,
    &security::FILE_CONTENT_THREAT_SUBMISSION,
    &security::FILE_URL_THREAT_SUBMISSION,
    &security::URL_THREAT_SUBMISSION,
    &security::SUBMISSION_USER_IDENTITY,
    &security::SUBMISSION_ADMIN_REVIEW,
    &device_custom_attribute_shell_script::DEVICE_CUSTOM_ATTRIBUTE_SHELL_SCRIPT,
    &trust_framework_key::TRUST_FRAMEWORK_KEY,
    &financials::SALES_ORDER_LINE,
    &microsoft_tunnel_site::MICROSOFT_TUNNEL_SITE,
];

pub static ALL_ENUMS: &[&EnumDef] = enums::ENUMS;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Record;
    use std::collections::HashSet;

    #[test]
    fn test_schema_names_are_unique() {
        let names: HashSet<_> = ALL_SCHEMAS.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), ALL_SCHEMAS.len());
    }

    #[test]
    fn test_no_schema_redeclares_an_inherited_key() {
        for schema in ALL_SCHEMAS {
            let mut seen = HashSet::new();
            for field in schema.all_fields() {
                assert!(seen.insert(field.key), "{} declares '{}' twice", schema.name, field.key);
            }
        }
    }

    #[test]
    fn test_seeded_tag_matches_own_table_entry() {
        for schema in ALL_SCHEMAS {
            for subtype in schema.subtypes {
                if let Some(tag) = subtype.schema.odata_type {
                    assert_eq!(tag, subtype.tag, "{}", subtype.schema.name);
                }
            }
            if schema.odata_type.is_some() {
                assert!(
                    schema.field("@odata.type").is_some(),
                    "{} seeds a tag but has no @odata.type field",
                    schema.name
                );
                assert!(Record::new(*schema).odata_type().is_some());
            }
        }
    }

    #[test]
    fn test_composite_field_types_are_not_subtypes() {
        let names = |schema: &Schema| -> Vec<&'static str> {
            schema.subtypes.iter().map(|s| s.schema.name).collect()
        };
        assert_eq!(names(&recommendation::RECOMMENDATION_BASE), vec!["recommendation"]);
        assert_eq!(names(&classification::CLASSIFCATION_ERROR_BASE), vec!["classificationError"]);

        for field_type in [
            &recommendation::ACTION_STEP,
            &recommendation::ACTION_URL,
            &recommendation::IMPACTED_RESOURCE,
            &recommendation::KEY_VALUE,
        ] {
            assert!(!field_type.is_a(&recommendation::RECOMMENDATION_BASE), "{}", field_type.name);
        }
        assert!(!classification::CLASSIFICATION_INNER_ERROR
            .is_a(&classification::CLASSIFCATION_ERROR_BASE));
    }
}
