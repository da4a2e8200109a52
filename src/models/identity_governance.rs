use crate::domain::model::Record;
use crate::domain::schema::{FieldDef, Schema, Subtype, ValueKind};
use crate::models::enums::{LifecycleWorkflowCategory, LIFECYCLE_WORKFLOW_CATEGORY};

/// 生命週期工作流程的共同欄位（複合型別，本身沒有 id）
pub static WORKFLOW_BASE: Schema = Schema {
    name: "identityGovernance.workflowBase",
    odata_type: None,
    base: None,
    fields: &[
        FieldDef::scalar("@odata.type", ValueKind::String),
        FieldDef::scalar("category", ValueKind::Enum(&LIFECYCLE_WORKFLOW_CATEGORY)),
        FieldDef::scalar("createdDateTime", ValueKind::DateTime),
        FieldDef::scalar("description", ValueKind::String),
        FieldDef::scalar("displayName", ValueKind::String),
        FieldDef::scalar("isEnabled", ValueKind::Bool),
        FieldDef::scalar("isSchedulingEnabled", ValueKind::Bool),
        FieldDef::scalar("lastModifiedDateTime", ValueKind::DateTime),
    ],
    subtypes: &[
        Subtype {
            tag: "#microsoft.graph.identityGovernance.workflow",
            schema: &WORKFLOW,
        },
        Subtype {
            tag: "#microsoft.graph.identityGovernance.workflowVersion",
            schema: &WORKFLOW_VERSION,
        },
    ],
};

pub static WORKFLOW: Schema = Schema {
    name: "identityGovernance.workflow",
    odata_type: Some("#microsoft.graph.identityGovernance.workflow"),
    base: Some(&WORKFLOW_BASE),
    fields: &[
        FieldDef::scalar("deletedDateTime", ValueKind::DateTime),
        FieldDef::scalar("id", ValueKind::String),
        FieldDef::scalar("nextScheduleRunDateTime", ValueKind::DateTime),
        FieldDef::scalar("version", ValueKind::Int32),
        FieldDef::collection("versions", ValueKind::Object(&WORKFLOW_VERSION)),
    ],
    subtypes: &[],
};

pub static WORKFLOW_VERSION: Schema = Schema {
    name: "identityGovernance.workflowVersion",
    odata_type: Some("#microsoft.graph.identityGovernance.workflowVersion"),
    base: Some(&WORKFLOW_BASE),
    fields: &[FieldDef::scalar("versionNumber", ValueKind::Int32)],
    subtypes: &[],
};

model! {
    pub struct WorkflowBase => WORKFLOW_BASE;
}

model! {
    pub struct Workflow => WORKFLOW;
}

model! {
    pub struct WorkflowVersion => WORKFLOW_VERSION;
}

impl WorkflowBase {
    pub fn category(&self) -> Option<LifecycleWorkflowCategory> {
        self.get_enum_as("category")
    }
}

impl Workflow {
    pub fn version(&self) -> Option<i32> {
        self.get_i32("version")
    }

    pub fn versions(&self) -> Vec<&Record> {
        self.get_objects("versions").unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::json::{decode_json_value, encode_json_value, WriterOptions};
    use crate::domain::ports::Model;
    use serde_json::json;

    #[test]
    fn test_workflow_with_nested_versions() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.identityGovernance.workflow",
            "id": "156ce798-1eb6-4e0a-8515-e79f54d04390",
            "category": "leaver",
            "displayName": "Offboard employees",
            "isEnabled": true,
            "version": 2,
            "versions": [
                {"versionNumber": 1, "displayName": "first"},
                {"versionNumber": 2, "displayName": "second"}
            ]
        });
        let record = decode_json_value(&payload, &WORKFLOW_BASE).unwrap();
        let workflow = Workflow::from_record(record).unwrap();
        assert_eq!(workflow.version(), Some(2));

        let versions = workflow.versions();
        assert_eq!(versions.len(), 2);
        // 宣告型別本身會帶入預設標籤
        assert_eq!(
            versions[0].odata_type(),
            Some("#microsoft.graph.identityGovernance.workflowVersion")
        );
        assert_eq!(versions[1].get_i32("versionNumber"), Some(2));

        let base = WorkflowBase::from_record(workflow.into_record()).unwrap();
        assert_eq!(base.category(), Some(LifecycleWorkflowCategory::Leaver));
    }

    #[test]
    fn test_version_tags_are_seeded_on_encode() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.identityGovernance.workflow",
            "versions": [{"versionNumber": 1}]
        });
        let record = decode_json_value(&payload, &WORKFLOW_BASE).unwrap();
        let encoded = encode_json_value(&record, WriterOptions::default()).unwrap();
        assert_eq!(
            encoded["versions"][0],
            json!({
                "@odata.type": "#microsoft.graph.identityGovernance.workflowVersion",
                "versionNumber": 1
            })
        );
    }
}
