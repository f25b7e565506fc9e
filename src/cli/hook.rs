//! Hook command implementation.

use crate::config::load_config_or_default;
use crate::error::{Error, Result};
use crate::hooks::{
    Decision, UNKNOWN_EVENT, dispatch_hook, read_input, resolve_event, write_decision,
};
use crate::logging;
use crate::notify::{self, Notifier};
use std::any::Any;
use std::io::{self, Read, Write};
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, info, info_span, warn};

/// Exit status telling the host a blocking error occurred.
pub const BLOCKING_EXIT_CODE: u8 = 2;

/// Run the hook for one event.
///
/// Loads config, installs logging, then reads JSON from stdin, dispatches,
/// and writes the decision to stdout.
///
/// # Errors
///
/// Returns an error if stdin cannot be read, stdout cannot be written, or a
/// handler panics.
pub fn run(event_arg: Option<&str>) -> Result<()> {
    // A broken config file must not take the hook down with it.
    let (config, config_err) = load_config_or_default();

    logging::init(&config.logging);
    if let Some(e) = config_err {
        warn!("failed to load config, using defaults: {e}");
    }

    let notifier = notify::from_config(&config.sounds);

    let stdin = io::stdin();
    let stdout = io::stdout();
    handle(stdin.lock(), &mut stdout.lock(), event_arg, notifier.as_ref()).map(drop)
}

/// Read one event from `reader`, dispatch it, and write the decision.
///
/// Every failure is logged, tagged with the event in flight, before it is
/// returned.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or a handler panics.
pub fn handle<R: Read, W: Write>(
    reader: R,
    writer: &mut W,
    event_arg: Option<&str>,
    notifier: &dyn Notifier,
) -> Result<Decision> {
    let input = {
        let _span = info_span!("hook", event = %UNKNOWN_EVENT).entered();
        read_input(reader).inspect_err(|e| error!("Hook handler error: {e}"))?
    };

    let event = resolve_event(event_arg, &input);
    let _span = info_span!("hook", event = %event).entered();
    info!("Processing event: {event}");

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        dispatch_hook(&event, &input, notifier)
    }))
    .map_err(|payload| Error::Panicked(panic_message(&*payload)))
    .and_then(|decision| write_decision(writer, &decision).map(|()| decision));

    if let Err(e) = &result {
        error!("Hook handler error: {e}");
    }
    result
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
