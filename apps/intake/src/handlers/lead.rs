use crate::args::LeadArgs;
use anyhow::{Result, bail};
use safar::domain::config::IntakeConfig;
use safar::domain::fields::FormFields;
use safar::domain::outcome::SubmissionOutcome;
use safar::features::registration::{RegistrationForm, ScriptTransport, audit, validate_message};
use safar::kernel::i18n::Catalog;
use tracing::{debug, info, warn};

/// Checks the form as the visitor would have filled it, without sending it.
pub async fn validate_lead(config: &IntakeConfig, lead: &LeadArgs) -> Result<()> {
    let catalog = Catalog::for_tag(&config.locale);
    let form = safar::open(config)?;
    fill(&form, lead).await;

    let snapshot = form.form().snapshot();
    let Some(message) = validate_message(&snapshot, &catalog) else {
        println!("OK");
        return Ok(());
    };

    println!("{message}");
    println!("Fields to fix: {}", field_names(audit(&snapshot)));
    bail!("The form is not valid")
}

/// Sends the form and reports the visitor-facing outcome.
pub async fn submit_lead(config: &IntakeConfig, lead: &LeadArgs, no_wait: bool) -> Result<()> {
    let form = safar::open(config)?;
    fill(&form, lead).await;

    let mut updates = form.controller().subscribe();
    let outcome = form.submit().await;

    if let Some(feedback) = form.controller().view().banner() {
        println!("{}", feedback.text);
    }

    if !no_wait {
        info!("Waiting for the feedback to expire");
        // The controller always schedules a clear after publishing feedback.
        if let Err(err) = updates.wait_for(|view| view.feedback.is_none()).await {
            debug!(error = %err, "Submission view closed before the feedback expired");
        }
    }

    match outcome {
        SubmissionOutcome::Succeeded => Ok(()),
        SubmissionOutcome::Failed { .. } => bail!("The lead could not be sent"),
        _ => bail!("The form is not valid"),
    }
}

/// Types `lead` into the form through the same setters the page uses.
async fn fill(form: &RegistrationForm<ScriptTransport>, lead: &LeadArgs) {
    let directory = form.directory().ready().await;

    let fields = form.form();
    fields.set_first_name(lead.first_name.as_str());
    fields.set_last_name(lead.last_name.as_str());
    fields.set_phone_suffix(&lead.phone);
    fields.set_message(lead.message.as_str());

    if !lead.country.is_empty() && !fields.select_country(&lead.country, &directory) {
        warn!(country = %lead.country, "Country is not offered by the directory, leaving it blank");
    }
}

fn field_names(fields: FormFields) -> String {
    fields
        .iter_names()
        .map(|(name, _)| name.to_lowercase().replace('_', " "))
        .collect::<Vec<_>>()
        .join(", ")
}
