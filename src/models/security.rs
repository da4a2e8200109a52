//! 威脅提交（`security` 命名空間）。
//!
//! email 與 file 各自又是多型父型別，`threatSubmission` 的判別表則直接列出全部
//! 七個具體型別。

use crate::domain::schema::{FieldDef, Schema, Subtype, ValueKind};
use crate::models::entity::ENTITY;
use crate::models::enums::{
    LongRunningOperationStatus, SubmissionCategory, LONG_RUNNING_OPERATION_STATUS,
    SUBMISSION_CATEGORY, SUBMISSION_CLIENT_SOURCE, SUBMISSION_CONTENT_TYPE, SUBMISSION_SOURCE,
};

pub static THREAT_SUBMISSION: Schema = Schema {
    name: "security.threatSubmission",
    odata_type: None,
    base: Some(&ENTITY),
    fields: &[
        FieldDef::scalar("adminReview", ValueKind::Object(&SUBMISSION_ADMIN_REVIEW)),
        FieldDef::scalar("category", ValueKind::Enum(&SUBMISSION_CATEGORY)),
        FieldDef::scalar("clientSource", ValueKind::Enum(&SUBMISSION_CLIENT_SOURCE)),
        FieldDef::scalar("contentType", ValueKind::Enum(&SUBMISSION_CONTENT_TYPE)),
        FieldDef::scalar("createdBy", ValueKind::Object(&SUBMISSION_USER_IDENTITY)),
        FieldDef::scalar("createdDateTime", ValueKind::DateTime),
        FieldDef::scalar("source", ValueKind::Enum(&SUBMISSION_SOURCE)),
        FieldDef::scalar("status", ValueKind::Enum(&LONG_RUNNING_OPERATION_STATUS)),
        FieldDef::scalar("tenantId", ValueKind::String),
    ],
    subtypes: &[
        Subtype {
            tag: "#microsoft.graph.security.emailContentThreatSubmission",
            schema: &EMAIL_CONTENT_THREAT_SUBMISSION,
        },
        Subtype {
            tag: "#microsoft.graph.security.emailThreatSubmission",
            schema: &EMAIL_THREAT_SUBMISSION,
        },
        Subtype {
            tag: "#microsoft.graph.security.emailUrlThreatSubmission",
            schema: &EMAIL_URL_THREAT_SUBMISSION,
        },
        Subtype {
            tag: "#microsoft.graph.security.fileContentThreatSubmission",
            schema: &FILE_CONTENT_THREAT_SUBMISSION,
        },
        Subtype {
            tag: "#microsoft.graph.security.fileThreatSubmission",
            schema: &FILE_THREAT_SUBMISSION,
        },
        Subtype {
            tag: "#microsoft.graph.security.fileUrlThreatSubmission",
            schema: &FILE_URL_THREAT_SUBMISSION,
        },
        Subtype {
            tag: "#microsoft.graph.security.urlThreatSubmission",
            schema: &URL_THREAT_SUBMISSION,
        },
    ],
};

pub static EMAIL_THREAT_SUBMISSION: Schema = Schema {
    name: "security.emailThreatSubmission",
    odata_type: Some("#microsoft.graph.security.emailThreatSubmission"),
    base: Some(&THREAT_SUBMISSION),
    fields: &[
        FieldDef::scalar("internetMessageId", ValueKind::String),
        FieldDef::scalar("originalCategory", ValueKind::Enum(&SUBMISSION_CATEGORY)),
        FieldDef::scalar("receivedDateTime", ValueKind::DateTime),
        FieldDef::scalar("recipientEmailAddress", ValueKind::String),
        FieldDef::scalar("sender", ValueKind::String),
        FieldDef::scalar("senderIP", ValueKind::String),
        FieldDef::scalar("subject", ValueKind::String),
    ],
    subtypes: &[
        Subtype {
            tag: "#microsoft.graph.security.emailContentThreatSubmission",
            schema: &EMAIL_CONTENT_THREAT_SUBMISSION,
        },
        Subtype {
            tag: "#microsoft.graph.security.emailUrlThreatSubmission",
            schema: &EMAIL_URL_THREAT_SUBMISSION,
        },
    ],
};

pub static EMAIL_CONTENT_THREAT_SUBMISSION: Schema = Schema {
    name: "security.emailContentThreatSubmission",
    odata_type: Some("#microsoft.graph.security.emailContentThreatSubmission"),
    base: Some(&EMAIL_THREAT_SUBMISSION),
    fields: &[FieldDef::scalar("fileContent", ValueKind::String)],
    subtypes: &[],
};

pub static EMAIL_URL_THREAT_SUBMISSION: Schema = Schema {
    name: "security.emailUrlThreatSubmission",
    odata_type: Some("#microsoft.graph.security.emailUrlThreatSubmission"),
    base: Some(&EMAIL_THREAT_SUBMISSION),
    fields: &[FieldDef::scalar("messageUrl", ValueKind::String)],
    subtypes: &[],
};

pub static FILE_THREAT_SUBMISSION: Schema = Schema {
    name: "security.fileThreatSubmission",
    odata_type: Some("#microsoft.graph.security.fileThreatSubmission"),
    base: Some(&THREAT_SUBMISSION),
    fields: &[FieldDef::scalar("fileName", ValueKind::String)],
    subtypes: &[
        Subtype {
            tag: "#microsoft.graph.security.fileContentThreatSubmission",
            schema: &FILE_CONTENT_THREAT_SUBMISSION,
        },
        Subtype {
            tag: "#microsoft.graph.security.fileUrlThreatSubmission",
            schema: &FILE_URL_THREAT_SUBMISSION,
        },
    ],
};

pub static FILE_CONTENT_THREAT_SUBMISSION: Schema = Schema {
    name: "security.fileContentThreatSubmission",
    odata_type: Some("#microsoft.graph.security.fileContentThreatSubmission"),
    base: Some(&FILE_THREAT_SUBMISSION),
    fields: &[FieldDef::scalar("fileContent", ValueKind::String)],
    subtypes: &[],
};

pub static FILE_URL_THREAT_SUBMISSION: Schema = Schema {
    name: "security.fileUrlThreatSubmission",
    odata_type: Some("#microsoft.graph.security.fileUrlThreatSubmission"),
    base: Some(&FILE_THREAT_SUBMISSION),
    fields: &[FieldDef::scalar("fileUrl", ValueKind::String)],
    subtypes: &[],
};

pub static URL_THREAT_SUBMISSION: Schema = Schema {
    name: "security.urlThreatSubmission",
    odata_type: Some("#microsoft.graph.security.urlThreatSubmission"),
    base: Some(&THREAT_SUBMISSION),
    fields: &[FieldDef::scalar("webUrl", ValueKind::String)],
    subtypes: &[],
};

pub static SUBMISSION_USER_IDENTITY: Schema = Schema {
    name: "security.submissionUserIdentity",
    odata_type: None,
    base: None,
    fields: &[
        FieldDef::scalar("@odata.type", ValueKind::String),
        FieldDef::scalar("displayName", ValueKind::String),
        FieldDef::scalar("email", ValueKind::String),
        FieldDef::scalar("id", ValueKind::String),
    ],
    subtypes: &[],
};

pub static SUBMISSION_ADMIN_REVIEW: Schema = Schema {
    name: "security.submissionAdminReview",
    odata_type: None,
    base: None,
    fields: &[
        FieldDef::scalar("@odata.type", ValueKind::String),
        FieldDef::scalar("reviewBy", ValueKind::String),
        FieldDef::scalar("reviewDateTime", ValueKind::DateTime),
        FieldDef::scalar("reviewResult", ValueKind::Enum(&SUBMISSION_CATEGORY)),
    ],
    subtypes: &[],
};

model! {
    pub struct ThreatSubmission => THREAT_SUBMISSION;
}

model! {
    pub struct EmailThreatSubmission => EMAIL_THREAT_SUBMISSION;
}

model! {
    pub struct EmailContentThreatSubmission => EMAIL_CONTENT_THREAT_SUBMISSION;
}

model! {
    pub struct EmailUrlThreatSubmission => EMAIL_URL_THREAT_SUBMISSION;
}

model! {
    pub struct FileThreatSubmission => FILE_THREAT_SUBMISSION;
}

model! {
    pub struct FileContentThreatSubmission => FILE_CONTENT_THREAT_SUBMISSION;
}

model! {
    pub struct FileUrlThreatSubmission => FILE_URL_THREAT_SUBMISSION;
}

model! {
    pub struct UrlThreatSubmission => URL_THREAT_SUBMISSION;
}

impl ThreatSubmission {
    pub fn category(&self) -> Option<SubmissionCategory> {
        self.get_enum_as("category")
    }

    pub fn status(&self) -> Option<LongRunningOperationStatus> {
        self.get_enum_as("status")
    }

    pub fn created_by_email(&self) -> Option<&str> {
        self.get_object("createdBy")?.get_str("email")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::json::decode_json_collection;
    use crate::domain::ports::{AdditionalDataHolder, Model};
    use serde_json::json;

    #[test]
    fn test_mixed_submission_collection() {
        let payload = json!([
            {
                "@odata.type": "#microsoft.graph.security.emailUrlThreatSubmission",
                "category": "phishing",
                "messageUrl": "https://graph.microsoft.com/beta/users/x/messages/y",
                "createdBy": {"email": "tifc@contoso.com"}
            },
            {
                "@odata.type": "#microsoft.graph.security.fileUrlThreatSubmission",
                "fileUrl": "https://contoso.com/file.exe",
                "status": "running"
            },
            {
                "@odata.type": "#microsoft.graph.security.appThreatSubmission",
                "category": "malware",
                "appId": "com.contoso.app"
            }
        ]);

        let records = decode_json_collection(&payload, &THREAT_SUBMISSION).unwrap();
        assert!(records[0].is(&EMAIL_URL_THREAT_SUBMISSION));
        assert!(records[1].is(&FILE_URL_THREAT_SUBMISSION));
        // 未知子型別退回父型別，專屬欄位進入溢位資料
        assert!(records[2].is(&THREAT_SUBMISSION));
        assert_eq!(records[2].additional_data()["appId"], json!("com.contoso.app"));
        assert_eq!(
            records[2].odata_type(),
            Some("#microsoft.graph.security.appThreatSubmission")
        );

        let email = ThreatSubmission::from_record(records[0].clone()).unwrap();
        assert_eq!(email.category(), Some(SubmissionCategory::Phishing));
        assert_eq!(email.created_by_email(), Some("tifc@contoso.com"));

        let file = ThreatSubmission::from_record(records[1].clone()).unwrap();
        assert_eq!(file.status(), Some(LongRunningOperationStatus::Running));
    }

    #[test]
    fn test_intermediate_base_has_its_own_table() {
        let payload = json!([
            {"@odata.type": "#microsoft.graph.security.emailContentThreatSubmission"},
            {"@odata.type": "#microsoft.graph.security.fileContentThreatSubmission"}
        ]);
        let records = decode_json_collection(&payload, &EMAIL_THREAT_SUBMISSION).unwrap();
        assert!(records[0].is(&EMAIL_CONTENT_THREAT_SUBMISSION));
        // file 子型別不在 email 的表中
        assert!(records[1].is(&EMAIL_THREAT_SUBMISSION));
    }
}
