use serde::Serialize;
use std::fmt::{self, Display};

use super::NodeAction;

/// Tooltip text split into the lines the renderer breaks on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TooltipContent {
    lines: Vec<String>,
}

impl TooltipContent {
    pub fn single(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Display for TooltipContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join(" "))
    }
}

/// One entry of the node action menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDescriptor {
    pub value: NodeAction,
    pub label: &'static str,
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip_content: Option<TooltipContent>,
}

impl ActionDescriptor {
    pub fn enabled(action: NodeAction) -> Self {
        Self {
            value: action,
            label: action.label(),
            disabled: false,
            tooltip_content: None,
        }
    }

    pub fn disable(&mut self, tooltip: TooltipContent) {
        self.disabled = true;
        self.tooltip_content = Some(tooltip);
    }
}
