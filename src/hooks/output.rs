//! Hook output types.

use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Decision returned to Claude Code.
///
/// `PreToolUse` answers with a permission verdict; every other event answers
/// with a continuation flag. The host reads the two fields differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Decision {
    /// `{"continue": ...}`
    Continue {
        /// Whether Claude Code should keep going.
        #[serde(rename = "continue")]
        proceed: bool,
    },

    /// `{"permissionDecision": ...}`
    Permission {
        /// Verdict for the pending tool call.
        #[serde(rename = "permissionDecision")]
        permission_decision: PermissionDecision,
    },
}

impl Decision {
    /// Let Claude Code continue.
    #[must_use]
    pub fn proceed() -> Self {
        Self::Continue { proceed: true }
    }

    /// Allow the pending tool call.
    #[must_use]
    pub fn allow() -> Self {
        Self::Permission {
            permission_decision: PermissionDecision::Allow,
        }
    }
}

/// Permission decision for `PreToolUse` hooks. Tools are never gated, so
/// `allow` is the only verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    /// Allow the tool to execute.
    Allow,
}

/// Write a decision as a single JSON line and flush.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_decision<W: Write>(writer: &mut W, decision: &Decision) -> Result<()> {
    let json = serde_json::to_string(decision)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
