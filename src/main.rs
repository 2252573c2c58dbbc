use std::io::Write;

use anyhow::Context;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

use registration_form::client::RegistrationClient;
use registration_form::error::SubmitError;
use registration_form::form::{Field, FormState, SubmissionState};
use registration_form::settings::Settings;
use registration_form::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;

    let subscriber = telemetry::create_subscriber(&settings.log.filter, std::io::stderr);
    telemetry::set_subscriber(subscriber)?;

    let client = RegistrationClient::new(settings.registration.api_base_url()?)
        .context("Failed to create registration client")?;
    let mut form = FormState::with_display_window(client, settings.form.display_window());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        // Only ask again for what is missing or wrong
        for field in Field::ALL {
            while form.validate(field).is_err() {
                prompt(&format!("{}: ", field.label()))?;
                let Some(line) = lines.next_line().await? else {
                    return Ok(());
                };
                form.set_value(field, line);
                form.touch(field);

                let message = form.error_message_for(field);
                if !message.is_empty() {
                    println!("  {}", message);
                }
            }
        }

        match form.submit().await {
            Ok(()) => {
                println!("Registrazione completata!");
                return Ok(());
            }
            Err(SubmitError::Invalid(e)) => {
                println!("  {}", form.error_message_for(e.field));
            }
            Err(SubmitError::Submission(_)) => {
                if let SubmissionState::Failed(message) = form.state() {
                    println!("{}", message);
                }
                wait_for_idle(form.subscribe()).await?;

                prompt("Premi Invio per riprovare ")?;
                if lines.next_line().await?.is_none() {
                    return Ok(());
                }
            }
        }
    }
}

fn prompt(text: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", text)?;
    stdout.flush().context("Failed to write prompt")
}

async fn wait_for_idle(mut state: watch::Receiver<SubmissionState>) -> anyhow::Result<()> {
    while !state.borrow_and_update().is_idle() {
        state.changed().await?;
    }
    Ok(())
}
