use crate::domain::model::Record;
use crate::domain::schema::{FieldDef, Schema, Subtype, ValueKind};
use crate::models::entity::ENTITY;
use crate::models::enums::{
    RecommendationFeatureAreas, RecommendationPriority, RecommendationStatus,
    RECOMMENDATION_CATEGORY, RECOMMENDATION_FEATURE_AREAS, RECOMMENDATION_PRIORITY,
    RECOMMENDATION_STATUS, RECOMMENDATION_TYPE,
};

pub static RECOMMENDATION_BASE: Schema = Schema {
    name: "recommendationBase",
    odata_type: None,
    base: Some(&ENTITY),
    fields: &[
        FieldDef::collection("actionSteps", ValueKind::Object(&ACTION_STEP)),
        FieldDef::scalar("benefits", ValueKind::String),
        FieldDef::scalar("category", ValueKind::Enum(&RECOMMENDATION_CATEGORY)),
        FieldDef::scalar("createdDateTime", ValueKind::DateTime),
        FieldDef::scalar("currentScore", ValueKind::Float64),
        FieldDef::scalar("displayName", ValueKind::String),
        FieldDef::collection("featureAreas", ValueKind::Enum(&RECOMMENDATION_FEATURE_AREAS)),
        FieldDef::collection("impactedResources", ValueKind::Object(&IMPACTED_RESOURCE)),
        FieldDef::scalar("impactStartDateTime", ValueKind::DateTime),
        FieldDef::scalar("impactType", ValueKind::String),
        FieldDef::scalar("insights", ValueKind::String),
        FieldDef::scalar("lastCheckedDateTime", ValueKind::DateTime),
        FieldDef::scalar("lastModifiedBy", ValueKind::String),
        FieldDef::scalar("lastModifiedDateTime", ValueKind::DateTime),
        FieldDef::scalar("maxScore", ValueKind::Float64),
        FieldDef::scalar("postponeUntilDateTime", ValueKind::DateTime),
        FieldDef::scalar("priority", ValueKind::Enum(&RECOMMENDATION_PRIORITY)),
        FieldDef::scalar("recommendationType", ValueKind::Enum(&RECOMMENDATION_TYPE)),
        FieldDef::scalar("remediationImpact", ValueKind::String),
        FieldDef::scalar("status", ValueKind::Enum(&RECOMMENDATION_STATUS)),
    ],
    subtypes: &[Subtype {
        tag: "#microsoft.graph.recommendation",
        schema: &RECOMMENDATION,
    }],
};

pub static RECOMMENDATION: Schema = Schema {
    name: "recommendation",
    odata_type: Some("#microsoft.graph.recommendation"),
    base: Some(&RECOMMENDATION_BASE),
    fields: &[],
    subtypes: &[],
};

pub static ACTION_STEP: Schema = Schema {
    name: "actionStep",
    odata_type: None,
    base: None,
    fields: &[
        FieldDef::scalar("@odata.type", ValueKind::String),
        FieldDef::scalar("actionUrl", ValueKind::Object(&ACTION_URL)),
        FieldDef::scalar("stepNumber", ValueKind::Int64),
        FieldDef::scalar("text", ValueKind::String),
    ],
    subtypes: &[],
};

pub static ACTION_URL: Schema = Schema {
    name: "actionUrl",
    odata_type: None,
    base: None,
    fields: &[
        FieldDef::scalar("@odata.type", ValueKind::String),
        FieldDef::scalar("displayName", ValueKind::String),
        FieldDef::scalar("url", ValueKind::String),
    ],
    subtypes: &[],
};

pub static IMPACTED_RESOURCE: Schema = Schema {
    name: "impactedResource",
    odata_type: None,
    base: Some(&ENTITY),
    fields: &[
        FieldDef::scalar("addedDateTime", ValueKind::DateTime),
        FieldDef::collection("additionalDetails", ValueKind::Object(&KEY_VALUE)),
        FieldDef::scalar("apiUrl", ValueKind::String),
        FieldDef::scalar("displayName", ValueKind::String),
        FieldDef::scalar("lastModifiedBy", ValueKind::String),
        // wire 上是字串而不是時間戳
        FieldDef::scalar("lastModifiedDateTime", ValueKind::String),
        FieldDef::scalar("owner", ValueKind::String),
        FieldDef::scalar("portalUrl", ValueKind::String),
        FieldDef::scalar("postponeUntilDateTime", ValueKind::DateTime),
        FieldDef::scalar("rank", ValueKind::Int32),
        FieldDef::scalar("recommendationId", ValueKind::String),
        FieldDef::scalar("resourceType", ValueKind::String),
        FieldDef::scalar("status", ValueKind::Enum(&RECOMMENDATION_STATUS)),
        FieldDef::scalar("subjectId", ValueKind::String),
    ],
    subtypes: &[],
};

pub static KEY_VALUE: Schema = Schema {
    name: "keyValue",
    odata_type: None,
    base: None,
    fields: &[
        FieldDef::scalar("@odata.type", ValueKind::String),
        FieldDef::scalar("key", ValueKind::String),
        FieldDef::scalar("value", ValueKind::String),
    ],
    subtypes: &[],
};

model! {
    pub struct RecommendationBase => RECOMMENDATION_BASE;
}

model! {
    pub struct Recommendation => RECOMMENDATION;
}

model! {
    pub struct ActionStep => ACTION_STEP;
}

model! {
    pub struct ActionUrl => ACTION_URL;
}

model! {
    pub struct ImpactedResource => IMPACTED_RESOURCE;
}

impl RecommendationBase {
    pub fn priority(&self) -> Option<RecommendationPriority> {
        self.get_enum_as("priority")
    }

    pub fn status(&self) -> Option<RecommendationStatus> {
        self.get_enum_as("status")
    }

    pub fn feature_areas(&self) -> Vec<RecommendationFeatureAreas> {
        self.get_collection("featureAreas")
            .unwrap_or_default()
            .iter()
            .filter_map(|item| match item {
                crate::domain::model::FieldValue::Enum(value) => value.as_member(),
                _ => None,
            })
            .collect()
    }

    /// 依 `stepNumber` 排列的處理步驟
    pub fn action_steps(&self) -> Vec<&Record> {
        let mut steps = self.get_objects("actionSteps").unwrap_or_default();
        steps.sort_by_key(|step| step.get_i64("stepNumber").unwrap_or(i64::MAX));
        steps
    }
}

impl ImpactedResource {
    pub fn rank(&self) -> Option<i32> {
        self.get_i32("rank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::json::{decode_json_value, encode_json_value, WriterOptions};
    use crate::domain::ports::Model;
    use serde_json::json;

    #[test]
    fn test_collection_of_enums_round_trips_in_order() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.recommendation",
            "featureAreas": ["groups", "users", "conditionalAccess"],
            "priority": "high",
            "currentScore": 2.5,
            "maxScore": 10.0
        });
        let record = decode_json_value(&payload, &RECOMMENDATION_BASE).unwrap();
        assert!(record.is(&RECOMMENDATION));

        let recommendation = RecommendationBase::from_record(record).unwrap();
        assert_eq!(
            recommendation.feature_areas(),
            vec![
                RecommendationFeatureAreas::Groups,
                RecommendationFeatureAreas::Users,
                RecommendationFeatureAreas::ConditionalAccess
            ]
        );
        assert_eq!(recommendation.priority(), Some(RecommendationPriority::High));

        let encoded = encode_json_value(&recommendation, WriterOptions::default()).unwrap();
        assert_eq!(encoded, payload);
    }

    #[test]
    fn test_action_steps_sorted_by_step_number() {
        let payload = json!({
            "actionSteps": [
                {"stepNumber": 2, "text": "second"},
                {"stepNumber": 1, "text": "first", "actionUrl": {"displayName": "Portal", "url": "https://example.com"}}
            ]
        });
        let record = decode_json_value(&payload, &RECOMMENDATION_BASE).unwrap();
        let recommendation = RecommendationBase::from_record(record).unwrap();

        let texts: Vec<_> = recommendation
            .action_steps()
            .iter()
            .map(|step| step.get_str("text").unwrap())
            .collect();
        assert_eq!(texts, vec!["first", "second"]);

        // 原本的集合順序不受影響
        let raw = recommendation.get_objects("actionSteps").unwrap();
        assert_eq!(raw[0].get_str("text"), Some("second"));
    }
}
