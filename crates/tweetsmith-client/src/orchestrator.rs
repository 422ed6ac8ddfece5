//! Drives one complete submission: lock the form, send, apply the outcome.

use tracing::debug;

use tweetsmith_core::{Completion, FormState, Notifier};

use crate::client::SubmitTransport;

/// Run a full submit cycle against `transport`.
///
/// Returns `None` when the form was already submitting (nothing is sent).
/// Otherwise exactly one request goes out and the form is back to idle with
/// cleared inputs when this returns.
pub async fn submit_form<T>(
    form: &mut FormState,
    transport: &T,
    notifier: &mut dyn Notifier,
) -> Option<Completion>
where
    T: SubmitTransport + ?Sized,
{
    let ticket = form.begin_submit()?;
    debug!(request_id = ticket.request_id, "Sending submission");

    let outcome = transport.submit(&ticket.payload).await;
    Some(form.finish_submit(ticket.request_id, outcome, notifier))
}
