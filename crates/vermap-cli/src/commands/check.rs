use serde::Serialize;
use vermap_core::VersioningConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Valid,
    /// The mapping is readable but its loggable metadata is incoherent.
    Invalid,
    /// The mapping could not be read.
    Error,
}

#[derive(Debug, Serialize)]
pub struct ClassCheck {
    pub class: String,
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<VersioningConfig>,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub classes: usize,
    pub invalid: usize,
    pub results: Vec<ClassCheck>,
}

/// Handle `vermap check`.
pub fn handle(args: &CheckArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = build_report(ctx, args.fail_fast || ctx.fail_fast);
    output(&report, flags.format)?;

    if report.invalid > 0 {
        anyhow::bail!(
            "{} of {} mapped classes failed the loggable check",
            report.invalid,
            report.classes
        );
    }
    Ok(())
}

pub fn build_report(ctx: &AppContext, fail_fast: bool) -> CheckReport {
    let mut results = Vec::with_capacity(ctx.classes.len());
    for class in &ctx.classes {
        let check = match ctx.factory.config_for(class) {
            Ok(config) => ClassCheck {
                class: class.clone(),
                status: CheckStatus::Valid,
                error: None,
                config: Some(config.as_ref().clone()),
            },
            Err(error) => {
                tracing::debug!(class = %class, %error, "loggable check failed");
                ClassCheck {
                    class: class.clone(),
                    status: if error.is_invalid_mapping() {
                        CheckStatus::Invalid
                    } else {
                        CheckStatus::Error
                    },
                    error: Some(error.to_string()),
                    config: None,
                }
            }
        };

        let failed = check.status != CheckStatus::Valid;
        results.push(check);
        if failed && fail_fast {
            break;
        }
    }

    CheckReport {
        classes: results.len(),
        invalid: results
            .iter()
            .filter(|check| check.status != CheckStatus::Valid)
            .count(),
        results,
    }
}
