use serde::Serialize;

/// A structured publication posted to the instance root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Publication {
    pub topic: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
}

impl Publication {
    pub fn new(topic: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            message: message.into(),
            actions: Vec::new(),
        }
    }

    /// Attach a tappable action button to the notification.
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }
}

/// A notification action button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    pub action: String,
    pub label: String,
    pub url: String,
}

impl Action {
    /// An action that opens `url` when tapped.
    pub fn view(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            action: "view".to_string(),
            label: label.into(),
            url: url.into(),
        }
    }
}
