//! # Rosterly Main Entry Point
//!
//! Drives one add-or-edit form flow from the command line: detect the mode
//! from the route, load the record in edit mode, apply the field flags as
//! edits, submit, and report the outcome.

use anyhow::Result;
use rosterly::cmd_args::CommandLineArgs;
use rosterly::{
    config, Field, FetchState, FormController, Gender, Mode, StudentApi, SubmissionResult,
    TracingNotifier,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CommandLineArgs::parse();

    let default_filter = if args.verbose() {
        "rosterly=debug"
    } else {
        "rosterly=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let base_url = args
        .api_url()
        .cloned()
        .unwrap_or_else(config::get_api_base_url);
    let api = StudentApi::new(&base_url)?;
    let mode = Mode::from_route(args.route())?;

    let mut controller = FormController::new(mode, api, TracingNotifier);
    controller.start();

    // Let the edit-mode fetch settle before applying edits.
    while *controller.state().fetch_state() == FetchState::Loading {
        match controller.recv_message().await {
            Some(message) => controller.handle_message(message),
            None => break,
        }
    }
    if let FetchState::Failed(message) = controller.state().fetch_state() {
        anyhow::bail!("could not load student: {message}");
    }

    for (field, value) in args.field_edits().iter().cloned() {
        // The form's gender input is a fixed selection; free text still goes
        // through and the server answers with its 422 if it objects.
        if field == Field::Gender && value.parse::<Gender>().is_err() {
            tracing::warn!(%value, "gender is not one of the selection values");
        }
        controller.edit_field(field, value);
    }

    controller.submit()?;
    while controller.state().is_submitting() {
        match controller.recv_message().await {
            Some(message) => controller.handle_message(message),
            None => break,
        }
    }

    match controller.state().submission() {
        Some(SubmissionResult::Accepted { .. }) => {
            if mode.is_add() {
                println!("Student created successfully");
            } else {
                println!("Student updated successfully");
            }
            Ok(())
        }
        Some(SubmissionResult::Rejected { .. }) => {
            for field in Field::ALL {
                if let Some(message) = controller.state().field_error(field) {
                    eprintln!("{field}: {message}");
                }
            }
            anyhow::bail!("the server rejected the submission")
        }
        Some(SubmissionResult::Errored { message, .. }) => {
            anyhow::bail!("submission failed: {message}")
        }
        None => anyhow::bail!("submission produced no result"),
    }
}
