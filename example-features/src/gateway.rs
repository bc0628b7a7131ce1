//! The `gateway` service kind: an HTTP front door that exposes a list of RPCs.

use serde::Serialize;
use surveyor::{AnswerSet, ConfirmLoop, Feature, FeatureDefinition, Question, Survey, Validator};

/// Methods an RPC can be exposed with.
pub const HTTP_METHODS: [&str; 5] = ["get", "post", "put", "delete", "patch"];

#[derive(Debug, Clone, Copy, Default)]
pub struct Gateway;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rpc {
    pub name: String,
    pub method: String,
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayDefinition {
    pub authenticated: bool,
    pub rpcs: Vec<Rpc>,
}

fn endpoint_validator() -> Validator {
    Validator::new(|value| match value.as_str() {
        Some(endpoint) if endpoint.starts_with('/') => Ok(()),
        Some(_) => Err("endpoint must start with '/'".to_string()),
        None => Err("endpoint has an invalid value type".to_string()),
    })
}

impl Feature for Gateway {
    fn name(&self) -> &str {
        "gateway"
    }

    fn survey(&self) -> Option<Survey> {
        let rpc = Survey::new(vec![
            Question::input("name", "RPC name:").required(),
            Question::select("method", "HTTP method:", HTTP_METHODS),
            Question::input("endpoint", "Endpoint path:").with_validator(endpoint_validator()),
        ])
        .one_at_a_time()
        .with_confirm_loop(ConfirmLoop::after("Do you want to add a new RPC?"));

        Some(
            Survey::new(vec![
                Question::confirm("authenticated", "Require authentication?"),
                Question::sub_survey("rpcs", "RPCs", rpc),
            ])
            .one_at_a_time(),
        )
    }

    fn answers(&self, answers: &AnswerSet) -> anyhow::Result<Option<FeatureDefinition>> {
        let rpcs = answers
            .get_nested_list("rpcs")?
            .iter()
            .map(|rpc| -> anyhow::Result<Rpc> {
                Ok(Rpc {
                    name: rpc.get_string("name")?.to_string(),
                    method: rpc.get_string("method")?.to_string(),
                    endpoint: rpc.get_string("endpoint")?.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let definition = GatewayDefinition {
            authenticated: answers.get_bool("authenticated")?,
            rpcs,
        };
        Ok(Some(FeatureDefinition::saved(serde_json::to_value(
            definition,
        )?)))
    }
}
