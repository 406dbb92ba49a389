use chrono::{DateTime, Utc};
use htmlescape::encode_minimal;

use crate::email::{EmailMessage, MailContext};

pub fn welcome_message(mail: &MailContext, subscriber: &str) -> EmailMessage {
  let escaped = encode_minimal(subscriber);

  let html = format!(
    r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Welcome to our Newsletter</title>
</head>
<body style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="text-align: center; padding: 40px 20px; background-color: #000; color: #fff; border-radius: 8px; margin-bottom: 30px;">
    <h1 style="margin: 0; font-size: 28px; font-weight: bold;">Welcome!</h1>
    <p style="margin: 10px 0 0; font-size: 16px; opacity: 0.9;">Thank you for subscribing to our newsletter</p>
  </div>
  <div style="padding: 0 20px;">
    <h2 style="color: #000; font-size: 20px; margin-bottom: 15px;">What to expect:</h2>
    <ul style="color: #666; padding-left: 20px;">
      <li style="margin-bottom: 8px;">Weekly updates with the latest news</li>
      <li style="margin-bottom: 8px;">Exclusive content and insights</li>
      <li style="margin-bottom: 8px;">Special offers and announcements</li>
    </ul>
    <div style="background-color: #f8f9fa; padding: 20px; border-radius: 6px; margin: 30px 0; border-left: 4px solid #000;">
      <p style="margin: 0; color: #666; font-size: 14px;">
        <strong>Note:</strong> You can unsubscribe at any time by clicking the unsubscribe link in any of our emails.
      </p>
    </div>
    <p style="color: #666; font-size: 14px; text-align: center; margin-top: 40px; padding-top: 20px; border-top: 1px solid #eee;">
      This email was sent to {escaped}. If you didn't subscribe to this newsletter, please ignore this email.
    </p>
  </div>
</body>
</html>
"#
  );

  let text = format!(
    "Welcome to our Newsletter!\n\n\
     Thank you for subscribing to our newsletter. Here's what you can expect:\n\n\
     - Weekly updates with the latest news\n\
     - Exclusive content and insights\n\
     - Special offers and announcements\n\n\
     You can unsubscribe at any time by clicking the unsubscribe link in any of our emails.\n\n\
     This email was sent to {subscriber}. If you didn't subscribe to this newsletter, please ignore this email.\n"
  );

  EmailMessage::new(
    "Newsletter",
    mail.sender_address(),
    subscriber,
    "Welcome to our Newsletter!",
    html,
    text,
  )
}

/// The operator notice, or `None` when no notification address is configured.
pub fn admin_notification(mail: &MailContext, subscriber: &str, subscribed_at: DateTime<Utc>) -> Option<EmailMessage> {
  let operator = mail.operator_address()?;
  let escaped = encode_minimal(subscriber);
  let subscribed_at = subscribed_at.format("%Y-%m-%d %H:%M:%S UTC").to_string();

  let html = format!(
    r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>New Newsletter Subscription</title>
</head>
<body style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background-color: #000; color: #fff; padding: 20px; border-radius: 8px; text-align: center; margin-bottom: 20px;">
    <h1 style="margin: 0; font-size: 24px;">New Subscription!</h1>
  </div>
  <div style="background-color: #f8f9fa; padding: 20px; border-radius: 6px; border-left: 4px solid #000;">
    <p style="margin: 0; font-size: 16px;"><strong>Email:</strong> {escaped}</p>
    <p style="margin: 10px 0 0; color: #666; font-size: 14px;"><strong>Subscribed at:</strong> {subscribed_at}</p>
  </div>
</body>
</html>
"#
  );

  let text = format!("New Newsletter Subscription\n\nEmail: {subscriber}\nSubscribed at: {subscribed_at}\n");

  Some(EmailMessage::new(
    "Newsletter System",
    mail.sender_address(),
    operator,
    "New Newsletter Subscription",
    html,
    text,
  ))
}
