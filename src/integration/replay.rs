use std::{path::Path, time::Duration};

use color_eyre::eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        msg::{copy::CopyMsg, Msg},
        raw_msg::RawMsg,
    },
    domain::grid::ColumnDef,
    integration::runtime::Runtime,
};

/// Recorded grid session: the layout it ran against and its input events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayScript {
    pub columns: Vec<ColumnDef>,
    pub row_count: usize,
    #[serde(default)]
    pub events: Vec<RawMsg>,
}

impl ReplayScript {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .wrap_err_with(|| format!("Failed to parse replay script {}", path.display()))
    }
}

/// Where a replay ended up
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplayOutcome {
    pub text: Option<String>,
    pub error: Option<String>,
    pub copied: bool,
    pub write_error: Option<String>,
}

/// Feed `events` through the runtime, wait for the last copy build and,
/// when `confirm` is set, write its text to the clipboard.
pub async fn replay(
    runtime: &mut Runtime,
    events: Vec<RawMsg>,
    confirm: bool,
    timeout: Duration,
) -> Result<ReplayOutcome> {
    for event in events {
        runtime.send_raw_msg(event);
    }
    runtime.settle(timeout).await?;

    let copy = &runtime.state().copy;
    let mut outcome = ReplayOutcome {
        text: copy.text().map(str::to_owned),
        error: copy.error.clone(),
        ..Default::default()
    };

    if confirm && outcome.text.is_some() {
        runtime.send_msg(Msg::Copy(CopyMsg::Confirm));
        runtime.settle(timeout).await?;
        outcome.write_error = runtime.state().copy.write_error.clone();
        outcome.copied = outcome.write_error.is_none();
    }

    Ok(outcome)
}
