//! Integration tests for the full inference pipeline
//!
//! Tests the end-to-end flow: sample JSON → definitions table → merged
//! swagger YAML on disk → reload.

use pretty_assertions::assert_eq;
use serde_json::json;
use swaggen::schema::{infer_definitions, SchemaInferrer, SchemaType};
use swaggen::{DefinitionsTable, SwaggerDocument};

// ============================================================================
// Pipeline Tests
// ============================================================================

#[test]
fn test_pipeline_from_scratch() {
    let dir = tempfile::tempdir().unwrap();
    let swagger_path = dir.path().join("api.swagger.yaml");

    let sample = json!({
        "user": {
            "name": "Ann",
            "addresses": [{"street": "5th Ave", "zip": "10001"}]
        },
        "active": true
    });

    // No swagger file yet: load yields an empty document
    let mut document = SwaggerDocument::load(&swagger_path).unwrap();
    let mut definitions = document.definitions().unwrap();
    assert!(definitions.is_empty());

    infer_definitions(&mut definitions, &sample, "Account").unwrap();
    document.set_definitions(&definitions).unwrap();
    document.save(&swagger_path).unwrap();

    // Reload from disk and check the inferred entities survived
    let reloaded = SwaggerDocument::load(&swagger_path).unwrap();
    let definitions = reloaded.definitions().unwrap();

    assert!(definitions.contains_key("Account"));
    assert!(definitions.contains_key("User"));
    assert!(definitions.contains_key("Address"));

    let user = definitions.get("User").unwrap();
    let addresses = user.get_property("addresses").unwrap();
    assert_eq!(addresses.schema_type, Some(SchemaType::Array));
    assert_eq!(
        addresses.items.as_ref().unwrap().reference,
        "#/definitions/Address"
    );
}

#[test]
fn test_pipeline_merges_into_existing_document() {
    let dir = tempfile::tempdir().unwrap();
    let swagger_path = dir.path().join("api.swagger.yaml");

    std::fs::write(
        &swagger_path,
        "\
swagger: '2.0'
info:
  title: Billing API
  version: '1.0'
paths:
  /invoices:
    get:
      summary: List invoices
definitions:
  Invoice:
    type: object
    title: Invoice
    description: Invoice Entity
    properties:
      total:
        type: number
        example: 12.5
",
    )
    .unwrap();

    let mut document = SwaggerDocument::load(&swagger_path).unwrap();
    let mut definitions = document.definitions().unwrap();
    let invoice_before = definitions.get("Invoice").unwrap().clone();

    infer_definitions(
        &mut definitions,
        &json!({"name": "Ann", "tags": [{"label": "vip"}]}),
        "Customer",
    )
    .unwrap();

    document.set_definitions(&definitions).unwrap();
    document.save(&swagger_path).unwrap();

    let output = std::fs::read_to_string(&swagger_path).unwrap();
    let reloaded = SwaggerDocument::load(&swagger_path).unwrap();
    let definitions = reloaded.definitions().unwrap();

    // Prior entity and unrelated sections are untouched
    assert_eq!(definitions.get("Invoice").unwrap(), &invoice_before);
    assert!(output.contains("Billing API"));
    assert!(output.contains("/invoices"));

    // New entities merged in
    assert!(definitions.contains_key("Customer"));
    assert!(definitions.contains_key("Tag"));
}

#[test]
fn test_pipeline_is_idempotent_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let swagger_path = dir.path().join("api.swagger.yaml");
    let sample = json!({"order": {"items": [{"sku": "A1", "qty": 2}]}});

    let run = || {
        let mut document = SwaggerDocument::load(&swagger_path).unwrap();
        let mut definitions = document.definitions().unwrap();
        infer_definitions(&mut definitions, &sample, "Root").unwrap();
        document.set_definitions(&definitions).unwrap();
        document.save(&swagger_path).unwrap();
        std::fs::read_to_string(&swagger_path).unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
}

// ============================================================================
// Inference Behavior Through the Public API
// ============================================================================

#[test]
fn test_differently_shaped_samples_overlay() {
    let mut definitions = DefinitionsTable::new();

    infer_definitions(
        &mut definitions,
        &json!({"payment": {"method": "card"}}),
        "Checkout",
    )
    .unwrap();
    infer_definitions(&mut definitions, &json!({"payment": "card"}), "Checkout").unwrap();

    let payment = definitions
        .get("Checkout")
        .unwrap()
        .get_property("payment")
        .unwrap();

    // Both the $ref facet and the scalar facets are present
    assert_eq!(payment.reference.as_deref(), Some("#/definitions/Payment"));
    assert_eq!(payment.schema_type, Some(SchemaType::String));
    assert_eq!(payment.example, Some(json!("card")));
}

#[test]
fn test_depth_bound_via_builder() {
    let mut definitions = DefinitionsTable::new();
    let result = SchemaInferrer::new().with_max_depth(1).infer(
        &mut definitions,
        &json!({"a": {"b": {"c": 1}}}),
        "Root",
    );

    assert!(result.is_err());
    assert!(definitions.is_empty());
}
