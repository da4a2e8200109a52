use crate::domain::schema::{FieldDef, Schema, ValueKind};
use crate::models::entity::ENTITY;
use chrono::NaiveTime;

pub static MICROSOFT_TUNNEL_SITE: Schema = Schema {
    name: "microsoftTunnelSite",
    odata_type: None,
    base: Some(&ENTITY),
    fields: &[
        FieldDef::scalar("description", ValueKind::String),
        FieldDef::scalar("displayName", ValueKind::String),
        FieldDef::scalar("internalNetworkProbeUrl", ValueKind::String),
        FieldDef::scalar("publicAddress", ValueKind::String),
        FieldDef::collection("roleScopeTagIds", ValueKind::String),
        FieldDef::scalar("upgradeAutomatically", ValueKind::Bool),
        FieldDef::scalar("upgradeAvailable", ValueKind::Bool),
        FieldDef::scalar("upgradeWindowEndTime", ValueKind::TimeOfDay),
        FieldDef::scalar("upgradeWindowStartTime", ValueKind::TimeOfDay),
        FieldDef::scalar("upgradeWindowUtcOffsetInMinutes", ValueKind::Int32),
    ],
    subtypes: &[],
};

model! {
    pub struct MicrosoftTunnelSite => MICROSOFT_TUNNEL_SITE;
}

impl MicrosoftTunnelSite {
    /// 升級時段 (開始, 結束)；任一端未設定時回傳 None
    pub fn upgrade_window(&self) -> Option<(NaiveTime, NaiveTime)> {
        Some((
            self.get_time("upgradeWindowStartTime")?,
            self.get_time("upgradeWindowEndTime")?,
        ))
    }

    /// 時段是否跨越午夜
    pub fn upgrade_window_wraps(&self) -> bool {
        self.upgrade_window().is_some_and(|(start, end)| end < start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::json::{decode_model, encode_json_value, WriterOptions};
    use serde_json::json;

    #[test]
    fn test_time_of_day_window() {
        let payload = json!({
            "displayName": "Seattle",
            "upgradeWindowStartTime": "22:00:00",
            "upgradeWindowEndTime": "02:30:00",
            "upgradeWindowUtcOffsetInMinutes": -480
        });
        let site: MicrosoftTunnelSite = decode_model(&payload.to_string()).unwrap();

        let (start, end) = site.upgrade_window().unwrap();
        assert_eq!(start, NaiveTime::from_hms_opt(22, 0, 0).unwrap());
        assert_eq!(end, NaiveTime::from_hms_opt(2, 30, 0).unwrap());
        assert!(site.upgrade_window_wraps());

        let encoded = encode_json_value(&site, WriterOptions::default()).unwrap();
        assert_eq!(encoded, payload);
    }

    #[test]
    fn test_out_of_range_hour_is_malformed() {
        let payload = json!({"upgradeWindowStartTime": "25:00:00"});
        assert!(decode_model::<MicrosoftTunnelSite>(&payload.to_string()).is_err());
    }
}
