//! Workflow entity.
//!
//! A workflow is a trigger plus an ordered list of steps. The backend accepts
//! two spellings for a step's discriminator (`type` / `action`) and for its
//! settings (`configuration` / `config`); both are modelled so payloads go
//! out exactly as the cases write them.

use serde::Serialize;
use serde_json::Value;

/// What starts a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trigger {
    /// Started by an explicit execute call
    Manual,
    /// Started on a cron schedule
    Schedule { cron: String },
}

/// Step discriminator, serialized under the key the variant names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StepKind {
    #[serde(rename = "type")]
    Type(String),
    #[serde(rename = "action")]
    Action(String),
}

/// Step settings object, serialized under the key the variant names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StepSettings {
    #[serde(rename = "configuration")]
    Configuration(Value),
    #[serde(rename = "config")]
    Config(Value),
}

/// One step of a workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub kind: StepKind,

    #[serde(flatten)]
    pub settings: StepSettings,
}

impl Step {
    /// Step discriminated by `type`, settings under `configuration`
    pub fn typed(kind: &str, configuration: Value) -> Self {
        Self {
            id: None,
            name: None,
            kind: StepKind::Type(kind.into()),
            settings: StepSettings::Configuration(configuration),
        }
    }

    /// Step discriminated by `action`, settings under `config`
    pub fn action(action: &str, config: Value) -> Self {
        Self {
            id: None,
            name: None,
            kind: StepKind::Action(action.into()),
            settings: StepSettings::Config(config),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Keep the discriminator but move the settings under `config`
    pub fn with_short_config(mut self) -> Self {
        self.settings = match self.settings {
            StepSettings::Configuration(v) | StepSettings::Config(v) => StepSettings::Config(v),
        };
        self
    }
}
