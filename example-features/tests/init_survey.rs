//! The built-in features driven through the whole initialization survey.

use example_features::{Database, Gateway, features, services};
use surveyor::{
    Feature, InitError, InitOptions, Registry, ScriptedAdapter, SurveyError, executor,
    run_init_survey,
};

fn base(adapter: ScriptedAdapter) -> ScriptedAdapter {
    adapter
        .with_answer("name", "orders")
        .with_answer("product", "commerce")
        .with_list("lifecycle", ["start"])
}

#[test]
fn feature_list_hides_non_cli_features() {
    let registry = features();
    assert_eq!(registry.feature_names(), ["database", "auth", "tracker"]);
    assert!(registry.contains("mikros_health"));
}

#[test]
fn auth_feature_end_to_end() {
    let features = features();
    let services = services();
    let options = InitOptions::new()
        .with_features(&features)
        .with_services(&services);
    let mut adapter = base(ScriptedAdapter::new())
        .with_answer("type", "grpc")
        .with_list("features", ["auth"])
        .with_bool("scopes", true);

    let answers = run_init_survey(&mut adapter, &options).unwrap();

    assert_eq!(answers.kind, "grpc");
    assert_eq!(answers.lifecycle, ["start"]);
    assert!(answers.service.is_none());
    let auth = &answers.definitions["auth"];
    assert_eq!(auth.definition, serde_json::json!({ "scopes": true }));
    assert!(auth.save);
}

#[test]
fn every_feature_at_once() {
    let features = features();
    let options = InitOptions::new().with_features(&features);
    let mut adapter = base(ScriptedAdapter::new())
        .with_answer("type", "http")
        .with_list("features", ["database", "tracker", "auth"])
        .with_answer("kind", "postgres")
        .with_answer("url", "postgres://localhost/orders")
        .with_bool("migrations", false)
        .with_bool("scopes", false);

    let answers = run_init_survey(&mut adapter, &options).unwrap();

    assert_eq!(
        answers.definitions["database"].definition,
        serde_json::json!({
            "kind": "postgres",
            "url": "postgres://localhost/orders",
            "migrations": false,
        })
    );
    assert!(!answers.definitions["tracker"].save);
    let persisted: Vec<_> = answers.persisted().map(|(name, _)| name).collect();
    assert_eq!(persisted, ["auth", "database"]);
    assert!(adapter.is_exhausted());
}

#[test]
fn database_skips_url_for_sqlite() {
    let survey = Database.survey().unwrap();
    let mut adapter = ScriptedAdapter::new()
        .with_answer("kind", "sqlite")
        .with_bool("migrations", true);

    let answers = executor::run(&mut adapter, &survey, "database").unwrap();
    assert!(!answers.contains("url"));
    assert_eq!(
        adapter.asked(),
        ["[database] Database engine:", "[database] Manage migrations?"]
    );
}

#[test]
fn gateway_service_with_rpcs() {
    let features = features();
    let services = services();
    let options = InitOptions::new()
        .with_kind("gateway")
        .with_features(&features)
        .with_services(&services);
    let mut adapter = base(ScriptedAdapter::new())
        .with_bool("authenticated", true)
        .with_answer("name", "GetOrder")
        .with_answer("method", "get")
        .with_answer("endpoint", "/orders/{id}")
        .with_answer("name", "CreateOrder")
        .with_answer("method", "post")
        .with_answer("endpoint", "/orders")
        .with_confirms([true, false]);

    let answers = run_init_survey(&mut adapter, &options).unwrap();

    let service = answers.service.as_ref().unwrap();
    assert!(service.save);
    assert_eq!(service.definition["authenticated"], true);
    assert_eq!(service.definition["rpcs"][1]["method"], "post");
    assert!(answers.definitions.is_empty());
    assert!(
        adapter
            .asked()
            .contains(&"Do you want to add a new RPC?".to_string())
    );
}

#[test]
fn gateway_endpoint_is_validated() {
    let survey = Gateway.survey().unwrap();
    let mut adapter = ScriptedAdapter::new()
        .with_bool("authenticated", false)
        .with_answer("name", "GetOrder")
        .with_answer("method", "get")
        .with_answer("endpoint", "orders");

    let err = executor::run(&mut adapter, &survey, "gateway").unwrap_err();
    assert!(matches!(
        err,
        SurveyError::Validation { ref question, .. } if question == "endpoint"
    ));
}

#[test]
fn gateway_offered_as_service_type() {
    let services = services();
    let options = InitOptions::new().with_services(&services);
    assert_eq!(
        options.service_types(),
        ["gateway", "grpc", "http", "native", "script"]
    );
}

#[test]
fn health_contributes_nothing() {
    let features = features();
    let extra = vec!["health".to_string()];
    let options = InitOptions::new()
        .with_features(&features)
        .with_feature_names(&extra);
    let mut adapter = base(ScriptedAdapter::new())
        .with_answer("type", "grpc")
        .with_list("features", ["health"]);

    // resolvable through the prefix, but it contributes nothing
    let answers = run_init_survey(&mut adapter, &options).unwrap();
    assert!(answers.definitions.is_empty());
}

#[test]
fn features_outside_the_list_are_rejected() {
    let features = features();
    let mut adapter = base(ScriptedAdapter::new())
        .with_answer("type", "grpc")
        .with_list("features", ["billing"]);
    let options = InitOptions::new().with_features(&features);
    assert!(matches!(
        run_init_survey(&mut adapter, &options),
        Err(InitError::Survey(SurveyError::Validation { .. }))
    ));
}
