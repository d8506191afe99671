use std::io::Write;

use anyhow::{bail, ensure, Context};
use clap::{Args, Subcommand};
use encoders_core_contact_contracts::{ContactFormService, ContactSubmitError};
use encoders_core_site_contracts::SiteService;
use encoders_models::contact::{ContactForm, ContactFormField, ContactFormFields, ContactFormState};
use tokio::{
    io::{AsyncBufReadExt, BufReader, Lines, Stdin},
    sync::watch,
};
use tracing::{info, warn};

use crate::{environment::Environment, render};

type Input = Lines<BufReader<Stdin>>;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Fill out and submit the contact form step by step
    #[command(aliases(["i"]))]
    Interactive,
    /// Submit the contact form with the given values
    #[command(aliases(["s"]))]
    Send {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Validate the given values without submitting them
    #[command(aliases(["v"]))]
    Validate {
        #[command(flatten)]
        fields: FieldArgs,
    },
}

#[derive(Debug, Args)]
pub struct FieldArgs {
    /// Your name
    #[arg(long, default_value = "")]
    name: String,
    /// Your email address
    #[arg(long, default_value = "")]
    email: String,
    /// The subject of your message
    #[arg(long, default_value = "")]
    subject: String,
    /// The message itself
    #[arg(long, default_value = "")]
    message: String,
}

impl From<FieldArgs> for ContactFormFields {
    fn from(value: FieldArgs) -> Self {
        Self {
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
        }
    }
}

impl ContactCommand {
    pub async fn invoke(self, environment: &Environment) -> anyhow::Result<()> {
        match self {
            ContactCommand::Interactive => interactive(environment).await,
            ContactCommand::Send { fields } => send(environment, fields.into()).await,
            ContactCommand::Validate { fields } => validate(fields.into()),
        }
    }
}

async fn send(environment: &Environment, fields: ContactFormFields) -> anyhow::Result<()> {
    let form = environment.contact_form();
    for field in ContactFormField::ALL {
        form.update_field(field, fields.get(field).into());
    }

    let result = form.submit().await;

    let page = &environment.site().content().contact;
    render::contact_form(&mut std::io::stdout(), page, &form.form())?;
    result.context("Failed to submit the contact form")
}

fn validate(fields: ContactFormFields) -> anyhow::Result<()> {
    let errors = fields.validate().err().map(|err| err.errors).unwrap_or_default();

    let report = serde_json::json!({
        "valid": errors.is_empty(),
        "errors": &errors,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    ensure!(errors.is_empty(), "The contact form is invalid: {errors}");
    Ok(())
}

async fn interactive(environment: &Environment) -> anyhow::Result<()> {
    let page = &environment.site().content().contact;
    let form = environment.contact_form();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("## {}", page.form.title);
    println!("{}", page.form.text);
    println!("Press enter to keep the current value of a field.");

    let observer = tokio::spawn(observe(form.subscribe(), std::io::stdout()));

    let mut pending = ContactFormField::ALL.to_vec();
    let result = loop {
        for field in pending.drain(..) {
            let value = prompt_field(&form, field, &mut input).await?;
            form.update_field(field, value);
        }

        match form.submit().await {
            Ok(()) => {
                render::contact_form(&mut std::io::stdout(), page, &form.form())?;
                form.subscribe()
                    .wait_for(|form| form.state == ContactFormState::Idle)
                    .await?;
                if !confirm("Send another message? [y/N]", false, &mut input).await? {
                    break Ok(());
                }
                pending = ContactFormField::ALL.to_vec();
            }
            Err(ContactSubmitError::Validation(err)) => {
                pending = err.errors.fields().collect();
            }
            Err(ContactSubmitError::Send) => {
                if !confirm("Try again? [Y/n]", true, &mut input).await? {
                    break Err(anyhow::Error::from(ContactSubmitError::Send)
                        .context("Failed to submit the contact form"));
                }
            }
            Err(ContactSubmitError::NotIdle) => {
                form.subscribe()
                    .wait_for(|form| form.state == ContactFormState::Idle)
                    .await?;
            }
        }
    };

    observer.abort();
    result
}

/// Asks for a new value of `field`. An empty answer keeps the current value.
async fn prompt_field(
    form: &impl ContactFormService,
    field: ContactFormField,
    input: &mut Input,
) -> anyhow::Result<String> {
    let current = form.form();
    {
        let mut out = std::io::stdout().lock();
        render::field_line(&mut out, &current, field)?;
        write!(out, "> ")?;
        out.flush()?;
    }

    let Some(line) = input.next_line().await? else {
        info!("Input closed");
        bail!("Input closed before the contact form was submitted");
    };

    Ok(match line.trim().is_empty() {
        true => current.fields.get(field).into(),
        false => line,
    })
}

async fn confirm(question: &str, default: bool, input: &mut Input) -> anyhow::Result<bool> {
    print!("{question} ");
    std::io::stdout().flush()?;

    let answer = input.next_line().await?.unwrap_or_default();
    Ok(match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    })
}

/// Prints every state transition of the form until it is dropped.
async fn observe(mut form: watch::Receiver<ContactForm>, mut out: impl Write) {
    let mut last = form.borrow().state;
    while form.changed().await.is_ok() {
        let state = form.borrow_and_update().state;
        if state != last {
            last = state;
            if let Err(err) = render::state_change(&mut out, state) {
                warn!("Failed to show form state: {err}");
            }
        }
    }
}
