use super::*;
use crate::models::GlobalConfig;
use serde_json::{Value, json};

fn valid_document() -> Value {
    json!({
        "meta": {
            "name": "Splunk_TA_example",
            "restRoot": "splunk_ta_example",
            "version": "1.0.0",
            "displayName": "Example add-on"
        },
        "pages": {
            "configuration": [
                {
                    "name": "account",
                    "title": "Account",
                    "table": { "actions": ["edit", "delete", "clone"] },
                    "entity": [
                        {
                            "field": "name",
                            "label": "Name",
                            "type": "text",
                            "validators": [
                                { "type": "string", "minLength": 1, "maxLength": 50 },
                                { "type": "regex", "pattern": "^[a-zA-Z]\\w*$" }
                            ]
                        },
                        {
                            "field": "service_account",
                            "label": "Service account",
                            "type": "file",
                            "options": { "supportedFileTypes": ["json"] }
                        }
                    ]
                },
                {
                    "name": "logging",
                    "title": "Logging",
                    "entity": [
                        { "field": "name", "label": "Name", "type": "text" },
                        {
                            "field": "interval",
                            "label": "Interval",
                            "type": "text",
                            "validators": [{ "type": "number", "range": [1, 60] }]
                        }
                    ]
                }
            ],
            "inputs": {
                "services": [
                    {
                        "name": "example_input_one",
                        "title": "Example Input One",
                        "entity": [
                            { "field": "name", "label": "Name", "type": "text" },
                            {
                                "field": "port",
                                "label": "Port",
                                "type": "text",
                                "validators": [{ "type": "number", "range": [1, 65535] }]
                            },
                            {
                                "field": "index",
                                "label": "Single Select",
                                "type": "singleSelect",
                                "options": {
                                    "autoCompleteFields": [
                                        {
                                            "label": "Group One",
                                            "value": "group_one",
                                            "children": [
                                                { "label": "main", "value": "main" },
                                                { "label": "summary", "value": "summary" }
                                            ]
                                        },
                                        {
                                            "label": "Group Two",
                                            "value": "group_two",
                                            "children": [{ "label": "main", "value": "main" }]
                                        }
                                    ]
                                }
                            }
                        ]
                    },
                    {
                        "name": "example_input_two",
                        "title": "Example Input Two",
                        "restHandlerName": "example_rh",
                        "entity": [{ "field": "name", "label": "Name", "type": "text" }]
                    }
                ],
                "multiLevelMenu": [
                    {
                        "groupName": "example_group",
                        "groupTitle": "Example Group",
                        "serviceNames": ["example_input_one"]
                    },
                    { "groupName": "example_input_two", "groupTitle": "Example Input Two" }
                ]
            }
        }
    })
}

fn validate_value(doc: Value) -> Result<(), ValidationError> {
    let config: GlobalConfig = serde_json::from_value(doc).unwrap();
    validate(&config)
}

fn error_message(doc: Value) -> String {
    validate_value(doc).unwrap_err().to_string()
}

#[test]
fn test_valid_document_passes() {
    assert!(validate_value(valid_document()).is_ok());
}

#[test]
fn test_document_without_pages_passes() {
    let mut doc = valid_document();
    doc["pages"] = json!({});
    assert!(validate_value(doc).is_ok());
}

#[test]
fn test_empty_configuration_is_too_short() {
    let mut doc = valid_document();
    doc["pages"]["configuration"] = json!([]);

    let err = validate_value(doc).unwrap_err();
    assert_eq!(err.to_string(), "[] is too short");
    assert!(matches!(err, ValidationError::StructuralOmission { .. }));
}

#[test]
fn test_tab_without_name_field() {
    let mut doc = valid_document();
    doc["pages"]["configuration"][0]["entity"][0]["field"] = json!("username");

    assert_eq!(
        error_message(doc),
        "Tab 'account' should have entity with field 'name'"
    );
}

#[test]
fn test_non_table_tab_without_name_field() {
    let mut doc = valid_document();
    doc["pages"]["configuration"][1]["entity"][0]["field"] = json!("loglevel");

    assert_eq!(
        error_message(doc),
        "Tab 'logging' should have entity with field 'name'"
    );
}

#[test]
fn test_file_entity_without_options() {
    let mut doc = valid_document();
    let file = &mut doc["pages"]["configuration"][0]["entity"][1];
    file.as_object_mut().unwrap().remove("options");

    assert_eq!(
        error_message(doc),
        "Options field for the file type should be present for 'service_account' field."
    );
}

#[test]
fn test_file_entity_without_supported_file_types() {
    let mut doc = valid_document();
    doc["pages"]["configuration"][0]["entity"][1]["options"] = json!({ "maxFileSize": 100 });

    assert_eq!(
        error_message(doc),
        "You should define your supported file types in the `supportedFileTypes` field \
         for the 'service_account' field."
    );
}

#[test]
fn test_string_validator_in_configuration_and_inputs() {
    let expected = "Entity 'name' has incorrect string validator, \
                    'maxLength' should be greater or equal than 'minLength'.";
    let bad = json!([{ "type": "string", "minLength": 10, "maxLength": 5 }]);

    let mut doc = valid_document();
    doc["pages"]["configuration"][0]["entity"][0]["validators"] = bad.clone();
    assert_eq!(error_message(doc), expected);

    let mut doc = valid_document();
    doc["pages"]["inputs"]["services"][0]["entity"][0]["validators"] = bad;
    assert_eq!(error_message(doc), expected);
}

#[test]
fn test_number_validator_range_length() {
    let mut doc = valid_document();
    doc["pages"]["configuration"][1]["entity"][1]["validators"] =
        json!([{ "type": "number", "range": [1, 30, 60] }]);
    assert_eq!(
        error_message(doc),
        "Entity 'interval' has incorrect number validator, \
         it should have 2 elements under 'range' field."
    );

    let mut doc = valid_document();
    doc["pages"]["inputs"]["services"][0]["entity"][1]["validators"] =
        json!([{ "type": "number", "range": [1] }]);
    assert_eq!(
        error_message(doc),
        "Entity 'port' has incorrect number validator, \
         it should have 2 elements under 'range' field."
    );
}

#[test]
fn test_number_validator_range_order() {
    let mut doc = valid_document();
    doc["pages"]["configuration"][1]["entity"][1]["validators"] =
        json!([{ "type": "number", "range": [60, 1] }]);
    assert_eq!(
        error_message(doc),
        "Entity 'interval' has incorrect number validator, \
         second element should be greater or equal than first element."
    );

    let mut doc = valid_document();
    doc["pages"]["inputs"]["services"][0]["entity"][1]["validators"] =
        json!([{ "type": "number", "range": [65535, 1] }]);
    assert_eq!(
        error_message(doc),
        "Entity 'port' has incorrect number validator, \
         second element should be greater or equal than first element."
    );
}

#[test]
fn test_regex_validator_not_compilable() {
    let expected = "Entity 'name' has incorrect regex validator, \
                    pattern provided in the 'pattern' field is not compilable.";
    let bad = json!([{ "type": "regex", "pattern": "^[a-z" }]);

    let mut doc = valid_document();
    doc["pages"]["configuration"][0]["entity"][0]["validators"] = bad.clone();
    assert_eq!(error_message(doc), expected);

    let mut doc = valid_document();
    doc["pages"]["inputs"]["services"][0]["entity"][0]["validators"] = bad;
    assert_eq!(error_message(doc), expected);
}

#[test]
fn test_regex_validator_with_lookaround_passes() {
    let mut doc = valid_document();
    doc["pages"]["configuration"][0]["entity"][0]["validators"] =
        json!([{ "type": "regex", "pattern": "^(?!admin$).+$" }]);
    doc["pages"]["inputs"]["services"][0]["entity"][0]["validators"] =
        json!([{ "type": "regex", "pattern": "^(\\w)\\1$" }]);

    assert!(validate_value(doc).is_ok());
}

#[test]
fn test_tab_duplicates() {
    let mut doc = valid_document();
    doc["pages"]["configuration"][1]["title"] = json!("Account");

    let err = validate_value(doc).unwrap_err();
    assert_eq!(err.to_string(), "Duplicates found for tabs names or titles");
    assert!(matches!(
        err,
        ValidationError::DuplicateKey { ref duplicates, .. } if duplicates == &["Account"]
    ));
}

#[test]
fn test_service_duplicates() {
    let mut doc = valid_document();
    doc["pages"]["inputs"]["services"][1]["name"] = json!("example_input_one");

    assert_eq!(
        error_message(doc),
        "Duplicates found for inputs (services) names or titles"
    );
}

#[test]
fn test_entity_duplicates_in_configuration_and_inputs() {
    let mut doc = valid_document();
    doc["pages"]["configuration"][1]["entity"][1]["label"] = json!("Name");
    assert_eq!(error_message(doc), "Duplicates found for entity field or label");

    let mut doc = valid_document();
    doc["pages"]["inputs"]["services"][0]["entity"][1]["field"] = json!("name");
    assert_eq!(error_message(doc), "Duplicates found for entity field or label");
}

#[test]
fn test_auto_complete_duplicates() {
    let mut doc = valid_document();
    doc["pages"]["inputs"]["services"][0]["entity"][2]["options"]["autoCompleteFields"][1]
        ["label"] = json!("Group One");

    assert_eq!(
        error_message(doc),
        "Duplicates found for autoCompleteFields: 'Single Select'"
    );
}

#[test]
fn test_auto_complete_children_duplicates() {
    let mut doc = valid_document();
    doc["pages"]["inputs"]["services"][0]["entity"][2]["options"]["autoCompleteFields"][0]
        ["children"][1]["value"] = json!("main");

    assert_eq!(
        error_message(doc),
        "Duplicates found for autoCompleteFields children in entity 'Single Select'"
    );
}

#[test]
fn test_rest_handler_name_with_module() {
    let mut doc = valid_document();
    doc["pages"]["inputs"]["services"][0]["restHandlerName"] = json!("example_rh");
    doc["pages"]["inputs"]["services"][0]["restHandlerModule"] = json!("example_module");

    let err = validate_value(doc).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Input 'example_input_one' has both 'restHandlerName' and 'restHandlerModule' or \
         'restHandlerClass' fields present. Please use only 'restHandlerName' or \
         'restHandlerModule' and 'restHandlerClass'."
    );
    assert!(matches!(
        err,
        ValidationError::RestHandlerBindingConflict { ref service, .. }
            if service == "example_input_one"
    ));
}

#[test]
fn test_rest_handler_class_only() {
    let mut doc = valid_document();
    doc["pages"]["inputs"]["services"][0]["restHandlerClass"] = json!("ExampleHandler");

    assert_eq!(
        error_message(doc),
        "Input 'example_input_one' should have both 'restHandlerModule' and \
         'restHandlerClass' fields present, only 1 of them was found."
    );
}

#[test]
fn test_multilevel_menu_unknown_service() {
    let mut doc = valid_document();
    doc["pages"]["inputs"]["multiLevelMenu"][0]["serviceNames"] =
        json!(["example_input_one", "example_input_three"]);

    assert_eq!(
        error_message(doc),
        "example_input_three ServiceName in the multi-level menu does not match any \
         services name."
    );
}

#[test]
fn test_multilevel_menu_unknown_group_identity() {
    let mut doc = valid_document();
    doc["pages"]["inputs"]["multiLevelMenu"][1] =
        json!({ "groupName": "example_input_three", "groupTitle": "Example Input Three" });

    assert_eq!(
        error_message(doc),
        "example_input_three groupName or Example Input Three groupTitle in the \
         multi-level menu does not match any services name or title."
    );
}

#[test]
fn test_multilevel_menu_duplicate_groups() {
    let mut doc = valid_document();
    doc["pages"]["inputs"]["multiLevelMenu"][0]["groupTitle"] = json!("Example Input Two");

    assert_eq!(
        error_message(doc),
        "Duplicates found for multi-level menu groups' names or titles."
    );
}

#[test]
fn test_tabs_are_checked_before_inputs() {
    let mut doc = valid_document();
    doc["pages"]["configuration"][1]["entity"][1]["validators"] =
        json!([{ "type": "number", "range": [60, 1] }]);
    doc["pages"]["inputs"]["services"][0]["restHandlerClass"] = json!("ExampleHandler");

    assert!(error_message(doc).starts_with("Entity 'interval'"));
}

#[test]
fn test_structural_checks_before_tab_duplicates() {
    let mut doc = valid_document();
    doc["pages"]["configuration"][1]["name"] = json!("account");
    doc["pages"]["configuration"][1]["entity"][0]["field"] = json!("username");

    assert_eq!(
        error_message(doc),
        "Tab 'account' should have entity with field 'name'"
    );
}

#[test]
fn test_service_duplicates_before_rest_handlers() {
    let mut doc = valid_document();
    doc["pages"]["inputs"]["services"][1]["title"] = json!("Example Input One");
    doc["pages"]["inputs"]["services"][0]["restHandlerModule"] = json!("example_module");

    assert_eq!(
        error_message(doc),
        "Duplicates found for inputs (services) names or titles"
    );
}

#[test]
fn test_validation_is_idempotent() {
    let mut doc = valid_document();
    doc["pages"]["inputs"]["services"][0]["restHandlerModule"] = json!("example_module");
    let config: GlobalConfig = serde_json::from_value(doc).unwrap();

    let validator = GlobalConfigValidator::new();
    let first = validator.validate(&config);
    let second = validator.validate(&config);
    assert!(first.is_err());
    assert_eq!(first, second);

    let valid: GlobalConfig = serde_json::from_value(valid_document()).unwrap();
    assert_eq!(validate(&valid), validate(&valid));
}
