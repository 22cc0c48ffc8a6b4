//! Mail templates - the HTML bodies sent by the trip lifecycle.

use super::{MailAddress, MailMessage};
use crate::entities::{Participant, Trip};
use chrono::{DateTime, Utc};

/// Long date form used inside the bodies, e.g. "August 29, 2026".
fn format_long_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Message sent to the owner right after trip creation, carrying the
/// trip-wide confirmation link.
pub fn trip_created(
    sender: &MailAddress,
    trip: &Trip,
    owner_name: &str,
    owner_email: &str,
    api_base_url: &str,
) -> MailMessage {
    let starts = format_long_date(&trip.starts_at);
    let ends = format_long_date(&trip.ends_at);
    let confirmation_link = format!("{}/trips/{}/confirm", api_base_url, trip.trip_id);

    let html_body = format!(
        r#"<div style="font-family: sans-serif; font-size: 16px; line-height: 1.6">
  <p>You requested the creation of a trip to <strong>{destination}</strong> from <strong>{starts}</strong> to <strong>{ends}</strong>.</p>
  <p>To confirm your trip, click the link below:</p>
  <p><a href="{confirmation_link}">Confirm trip</a></p>
  <p>If you did not request this trip, please ignore this email.</p>
</div>"#,
        destination = trip.destination,
    );

    MailMessage {
        from: sender.clone(),
        to: MailAddress::new(owner_name, owner_email),
        subject: format!("Confirm your trip to {}", trip.destination),
        html_body,
    }
}

/// Message sent to an invited participant, carrying their personal
/// confirmation link. `inviter_name` is known when the invitation goes out
/// as part of trip confirmation; a bare invite created later omits it.
pub fn participant_confirmation(
    sender: &MailAddress,
    trip: &Trip,
    inviter_name: Option<&str>,
    participant: &Participant,
    api_base_url: &str,
) -> MailMessage {
    let starts = format_long_date(&trip.starts_at);
    let ends = format_long_date(&trip.ends_at);
    let confirmation_link = format!(
        "{}/trips/{}/confirm/{}",
        api_base_url, trip.trip_id, participant.participant_id
    );

    let invited = match inviter_name {
        Some(name) => format!("You were invited by {name} to join a trip"),
        None => "You have been invited to join a trip".to_string(),
    };

    let html_body = format!(
        r#"<div style="font-family: sans-serif; font-size: 16px; line-height: 1.6">
  <p>{invited} to <strong>{destination}</strong> from <strong>{starts}</strong> to <strong>{ends}</strong>.</p>
  <p>To confirm your presence, click the link below:</p>
  <p><a href="{confirmation_link}">Confirm trip</a></p>
  <p>If you do not plan to attend, or do not know what this is about, please ignore this email.</p>
</div>"#,
        destination = trip.destination,
    );

    MailMessage {
        from: sender.clone(),
        to: match &participant.name {
            Some(name) => MailAddress::new(name, &participant.email),
            None => MailAddress::bare(&participant.email),
        },
        subject: format!("Confirm your presence on the trip to {}", trip.destination),
        html_body,
    }
}
