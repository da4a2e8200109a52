use crate::domain::schema::{FieldDef, Schema, Subtype, ValueKind};
use crate::models::{
    device_configuration, device_custom_attribute_shell_script, financials, managed_app_protection,
    microsoft_tunnel_site, recommendation, security,
};

/// 所有實體的根型別
///
/// 判別表直接列出目錄中每個具體的實體子型別（只解析一層）。
pub static ENTITY: Schema = Schema {
    name: "entity",
    odata_type: None,
    base: None,
    fields: &[
        FieldDef::scalar("@odata.type", ValueKind::String),
        FieldDef::scalar("id", ValueKind::String),
    ],
    subtypes: &[
        Subtype {
            tag: "#microsoft.graph.androidManagedAppProtection",
            schema: &managed_app_protection::ANDROID_MANAGED_APP_PROTECTION,
        },
        Subtype {
            tag: "#microsoft.graph.defaultManagedAppProtection",
            schema: &managed_app_protection::DEFAULT_MANAGED_APP_PROTECTION,
        },
        Subtype {
            tag: "#microsoft.graph.deviceConfiguration",
            schema: &device_configuration::DEVICE_CONFIGURATION,
        },
        Subtype {
            tag: "#microsoft.graph.deviceCustomAttributeShellScript",
            schema: &device_custom_attribute_shell_script::DEVICE_CUSTOM_ATTRIBUTE_SHELL_SCRIPT,
        },
        Subtype {
            tag: "#microsoft.graph.impactedResource",
            schema: &recommendation::IMPACTED_RESOURCE,
        },
        Subtype {
            tag: "#microsoft.graph.iosManagedAppProtection",
            schema: &managed_app_protection::IOS_MANAGED_APP_PROTECTION,
        },
        Subtype {
            tag: "#microsoft.graph.macOSEndpointProtectionConfiguration",
            schema: &device_configuration::MAC_OS_ENDPOINT_PROTECTION_CONFIGURATION,
        },
        Subtype {
            tag: "#microsoft.graph.macOSGeneralDeviceConfiguration",
            schema: &device_configuration::MAC_OS_GENERAL_DEVICE_CONFIGURATION,
        },
        Subtype {
            tag: "#microsoft.graph.managedAppProtection",
            schema: &managed_app_protection::MANAGED_APP_PROTECTION,
        },
        Subtype {
            tag: "#microsoft.graph.microsoftTunnelSite",
            schema: &microsoft_tunnel_site::MICROSOFT_TUNNEL_SITE,
        },
        Subtype {
            tag: "#microsoft.graph.recommendation",
            schema: &recommendation::RECOMMENDATION,
        },
        Subtype {
            tag: "#microsoft.graph.recommendationBase",
            schema: &recommendation::RECOMMENDATION_BASE,
        },
        Subtype {
            tag: "#microsoft.graph.salesOrderLine",
            schema: &financials::SALES_ORDER_LINE,
        },
        Subtype {
            tag: "#microsoft.graph.security.emailContentThreatSubmission",
            schema: &security::EMAIL_CONTENT_THREAT_SUBMISSION,
        },
        Subtype {
            tag: "#microsoft.graph.security.emailThreatSubmission",
            schema: &security::EMAIL_THREAT_SUBMISSION,
        },
        Subtype {
            tag: "#microsoft.graph.security.emailUrlThreatSubmission",
            schema: &security::EMAIL_URL_THREAT_SUBMISSION,
        },
        Subtype {
            tag: "#microsoft.graph.security.fileContentThreatSubmission",
            schema: &security::FILE_CONTENT_THREAT_SUBMISSION,
        },
        Subtype {
            tag: "#microsoft.graph.security.fileThreatSubmission",
            schema: &security::FILE_THREAT_SUBMISSION,
        },
        Subtype {
            tag: "#microsoft.graph.security.fileUrlThreatSubmission",
            schema: &security::FILE_URL_THREAT_SUBMISSION,
        },
        Subtype {
            tag: "#microsoft.graph.security.threatSubmission",
            schema: &security::THREAT_SUBMISSION,
        },
        Subtype {
            tag: "#microsoft.graph.security.urlThreatSubmission",
            schema: &security::URL_THREAT_SUBMISSION,
        },
        Subtype {
            tag: "#microsoft.graph.targetedManagedAppProtection",
            schema: &managed_app_protection::TARGETED_MANAGED_APP_PROTECTION,
        },
        Subtype {
            tag: "#microsoft.graph.windowsWifiConfiguration",
            schema: &device_configuration::WINDOWS_WIFI_CONFIGURATION,
        },
    ],
};

model! {
    pub struct Entity => ENTITY;
}

impl Entity {
    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }
}
