use crate::domain::model::EnumValue;
use crate::domain::schema::EnumDef;
use crate::utils::error::DecodeError;

impl EnumDef {
    /// wire 字串 → 常數；未知字串直接失敗，不退回預設值
    pub fn parse(&'static self, text: &str) -> Result<EnumValue, DecodeError> {
        let unknown = |value: &str| DecodeError::UnknownEnumValue {
            enum_name: self.name,
            value: value.to_string(),
        };

        if !self.flags {
            return self
                .value_of(text)
                .map(|value| EnumValue::new(self, value))
                .ok_or_else(|| unknown(text));
        }

        let mut mask = 0;
        for part in text.split(',') {
            let name = part.trim();
            mask |= self.value_of(name).ok_or_else(|| unknown(name))?;
        }
        Ok(EnumValue::new(self, mask))
    }

    /// 檢查整數值是否為合法常數（旗標列舉需由成員組成）
    pub fn value(&'static self, value: i32) -> Option<EnumValue> {
        let valid = if self.flags {
            let all = self.members.iter().fold(0, |acc, (_, v)| acc | v);
            value & !all == 0
        } else {
            self.name_of(value).is_some()
        };
        valid.then(|| EnumValue::new(self, value))
    }
}

impl EnumValue {
    pub fn to_wire_string(&self) -> String {
        let def = self.def();
        let value = self.value();

        if !def.flags {
            return def.name_of(value).unwrap_or_default().to_string();
        }

        if value == 0 {
            return def.name_of(0).unwrap_or_default().to_string();
        }
        def.members
            .iter()
            .filter(|(_, flag)| *flag != 0 && value & flag == *flag)
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{
        MacOSFileVaultRecoveryKeyTypes, MacOSGatekeeperAppSources, MAC_OS_FILE_VAULT_RECOVERY_KEY_TYPES,
        MAC_OS_GATEKEEPER_APP_SOURCES,
    };

    #[test]
    fn test_every_member_round_trips() {
        for (name, value) in MAC_OS_GATEKEEPER_APP_SOURCES.members {
            let parsed = MAC_OS_GATEKEEPER_APP_SOURCES.parse(name).unwrap();
            assert_eq!(parsed.value(), *value);
            assert_eq!(parsed.to_wire_string(), *name);
        }
    }

    #[test]
    fn test_unknown_string_fails_closed() {
        let err = MAC_OS_GATEKEEPER_APP_SOURCES.parse("bogus").unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownEnumValue {
                enum_name: "macOSGatekeeperAppSources",
                value: "bogus".to_string(),
            }
        );
        // 大小寫不同也視為未知
        assert!(MAC_OS_GATEKEEPER_APP_SOURCES.parse("Anywhere").is_err());
    }

    #[test]
    fn test_flags_parse_and_encode() {
        let both = MAC_OS_FILE_VAULT_RECOVERY_KEY_TYPES
            .parse("institutionalRecoveryKey,personalRecoveryKey")
            .unwrap();
        assert_eq!(both.value(), 3);
        assert!(both.contains(MacOSFileVaultRecoveryKeyTypes::PersonalRecoveryKey));
        assert_eq!(both.to_wire_string(), "institutionalRecoveryKey,personalRecoveryKey");

        let none = MAC_OS_FILE_VAULT_RECOVERY_KEY_TYPES.parse("notConfigured").unwrap();
        assert_eq!(none.to_wire_string(), "notConfigured");

        assert!(MAC_OS_FILE_VAULT_RECOVERY_KEY_TYPES
            .parse("personalRecoveryKey,bogus")
            .is_err());
    }

    #[test]
    fn test_value_validation() {
        assert!(MAC_OS_GATEKEEPER_APP_SOURCES.value(3).is_some());
        assert!(MAC_OS_GATEKEEPER_APP_SOURCES.value(99).is_none());
        assert!(MAC_OS_FILE_VAULT_RECOVERY_KEY_TYPES.value(3).is_some());
        assert!(MAC_OS_FILE_VAULT_RECOVERY_KEY_TYPES.value(4).is_none());
    }

    #[test]
    fn test_typed_enum_from_str() {
        let parsed: MacOSGatekeeperAppSources = "anywhere".parse().unwrap();
        assert_eq!(parsed, MacOSGatekeeperAppSources::Anywhere);
        assert!("bogus".parse::<MacOSGatekeeperAppSources>().is_err());
        assert_eq!(MacOSGatekeeperAppSources::MacAppStore.to_string(), "macAppStore");
    }
}
