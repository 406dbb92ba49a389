use chrono::{DateTime, Utc};
use htmlescape::encode_minimal;

use super::model::ContactRequest;
use crate::email::{EmailMessage, MailContext};

const SENDER_NAME: &str = "Contact Form";

fn paragraphs(text: &str) -> String {
  encode_minimal(text.trim()).replace('\n', "<br>")
}

/// Forwards a contact submission to the site operator; replies go to the visitor.
pub fn operator_notification(mail: &MailContext, request: &ContactRequest, received_at: DateTime<Utc>) -> EmailMessage {
  let name = encode_minimal(request.name.trim());
  let email = encode_minimal(request.email.trim());
  let subject = encode_minimal(request.subject.trim());
  let received_at = received_at.format("%Y-%m-%d %H:%M:%S UTC").to_string();

  let html = format!(
    r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>New Contact Message</title>
</head>
<body style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background-color: #000; color: #fff; padding: 20px; border-radius: 8px; text-align: center; margin-bottom: 20px;">
    <h1 style="margin: 0; font-size: 24px;">New Contact Message</h1>
  </div>
  <div style="background-color: #f8f9fa; padding: 20px; border-radius: 6px; border-left: 4px solid #000;">
    <p style="margin: 0; font-size: 16px;"><strong>Name:</strong> {name}</p>
    <p style="margin: 10px 0 0; font-size: 16px;"><strong>Email:</strong> {email}</p>
    <p style="margin: 10px 0 0; font-size: 16px;"><strong>Subject:</strong> {subject}</p>
    <p style="margin: 10px 0 0; color: #666; font-size: 14px;"><strong>Received at:</strong> {received_at}</p>
  </div>
  <div style="padding: 20px 0;">
    <p style="margin: 0;">{message}</p>
  </div>
</body>
</html>
"#,
    message = paragraphs(&request.message),
  );

  let text = format!(
    "New Contact Message\n\nName: {}\nEmail: {}\nSubject: {}\nReceived at: {}\n\n{}\n",
    request.name.trim(),
    request.email.trim(),
    request.subject.trim(),
    received_at,
    request.message.trim(),
  );

  EmailMessage::new(
    SENDER_NAME,
    mail.sender_address(),
    mail.operator_or_sender(),
    format!("Contact: {}", request.subject.trim()),
    html,
    text,
  )
  .with_reply_to(request.email.trim())
}

pub fn acknowledgement(mail: &MailContext, request: &ContactRequest) -> EmailMessage {
  let name = encode_minimal(request.name.trim());
  let subject = encode_minimal(request.subject.trim());

  let html = format!(
    r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>We received your message</title>
</head>
<body style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="text-align: center; padding: 40px 20px; background-color: #000; color: #fff; border-radius: 8px; margin-bottom: 30px;">
    <h1 style="margin: 0; font-size: 28px; font-weight: bold;">Thanks, {name}!</h1>
    <p style="margin: 10px 0 0; font-size: 16px; opacity: 0.9;">Your message has reached us</p>
  </div>
  <div style="padding: 0 20px;">
    <p style="color: #666;">We received your message about <strong>{subject}</strong> and will get back to you as soon as we can.</p>
    <div style="background-color: #f8f9fa; padding: 20px; border-radius: 6px; margin: 30px 0; border-left: 4px solid #000;">
      <p style="margin: 0; color: #666; font-size: 14px;">{message}</p>
    </div>
    <p style="color: #666; font-size: 14px; text-align: center; margin-top: 40px; padding-top: 20px; border-top: 1px solid #eee;">
      If you didn't send this message, please ignore this email.
    </p>
  </div>
</body>
</html>
"#,
    message = paragraphs(&request.message),
  );

  let text = format!(
    "Thanks, {}!\n\nWe received your message about \"{}\" and will get back to you as soon as we can.\n\n---\n{}\n---\n\nIf you didn't send this message, please ignore this email.\n",
    request.name.trim(),
    request.subject.trim(),
    request.message.trim(),
  );

  EmailMessage::new(
    SENDER_NAME,
    mail.sender_address(),
    request.email.trim(),
    "We received your message",
    html,
    text,
  )
}
