use anyhow::Result;
use graph_beta_models::config::{default_model, writer_options, ModelsConfig};
use graph_beta_models::utils::error::ModelError;
use graph_beta_models::utils::validation::{validate_required_field, Validate};
use graph_beta_models::{decode_json, encode_json, ModelRegistry, NullPolicy};
use std::io::Write;
use tempfile::NamedTempFile;

/// 設定檔決定預設模型與序列化方式，解碼結果依判別標籤解析
#[test]
fn test_file_config_drives_decode_and_encode() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(
        br#"
[serialization]
null_policy = "emit"
pretty = false

[logging]
level = "debug"
format = "compact"

[decode]
default_model = "security.threatSubmission"
"#,
    )?;

    let config = ModelsConfig::from_file(temp_file.path())?;
    config.validate()?;

    let options = writer_options(&config, None)?;
    assert_eq!(options.null_policy, NullPolicy::EmitNull);

    let model = default_model(&config, None).unwrap();
    let base = ModelRegistry::global().schema(model)?;

    let record = decode_json(
        r##"{"@odata.type": "#microsoft.graph.security.urlThreatSubmission", "webUrl": "https://contoso.com"}"##,
        base,
    )?;
    assert_eq!(record.schema().name, "security.urlThreatSubmission");

    let encoded: serde_json::Value = serde_json::from_str(&encode_json(&record, options)?)?;
    assert_eq!(encoded["webUrl"], "https://contoso.com");
    assert!(encoded["status"].is_null());
    assert!(encoded.as_object().unwrap().contains_key("status"));
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let err = ModelsConfig::from_file("/nonexistent/graph-models.toml").unwrap_err();
    assert_eq!(
        err.category(),
        graph_beta_models::utils::error::ErrorCategory::System
    );
}

#[test]
fn test_registry_resolves_names_tags_and_enums() -> Result<()> {
    let registry = ModelRegistry::global();

    let base = registry.schema("classifcationErrorBase")?;
    assert!(base.is_polymorphic());

    let sub = registry
        .by_tag("#microsoft.graph.classificationError")
        .unwrap();
    assert!(sub.is_a(base));

    let def = registry.enum_def("macOSGatekeeperAppSources")?;
    assert_eq!(def.parse("anywhere")?.value(), 3);

    assert!(registry.schema("classificationErrorBase").is_err());
    assert!(registry.enum_def("noSuchEnum").is_err());
    Ok(())
}

/// 旗標與設定檔都沒有指定模型時應回報缺少設定
#[test]
fn test_missing_default_model_is_config_error() -> Result<()> {
    let config = ModelsConfig::from_toml_str(
        r#"
[serialization]
null_policy = "omit"
"#,
    )?;

    let model = default_model(&config, None);
    let err = validate_required_field("decode.default_model", &model).unwrap_err();
    assert!(matches!(err, ModelError::MissingConfigError { ref field } if field == "decode.default_model"));

    let file = ModelsConfig::from_toml_str(
        r#"
[decode]
default_model = "classifcationErrorBase"
"#,
    )?;
    let model = default_model(&config, Some(&file));
    assert_eq!(*validate_required_field("decode.default_model", &model)?, "classifcationErrorBase");
    Ok(())
}
