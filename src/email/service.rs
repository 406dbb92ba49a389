use crate::email::{
  types::{EmailMessage, SmtpConfig},
  Mailer,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::{
  message::{Mailbox, MultiPart},
  transport::smtp::authentication::Credentials,
  Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

const IMPLICIT_TLS_PORT: u16 = 465;

pub struct EmailService {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailService {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else if smtp_config.port == IMPLICIT_TLS_PORT {
      AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(EmailService {
      smtp_config,
      transporter,
    })
  }

  /// Opens a connection to the relay and reports whether it accepted us.
  pub async fn test_connection(&self) -> Result<bool> {
    self
      .transporter
      .test_connection()
      .await
      .with_context(|| format!("SMTP connection check against {} failed", self.smtp_config.host))
  }

  pub fn build_message(message: &EmailMessage) -> Result<Message> {
    let from_address: Address = message
      .from_address
      .parse()
      .with_context(|| format!("invalid sender address: {}", message.from_address))?;
    let from = Mailbox::new(Some(message.from_name.clone()), from_address);
    let to: Mailbox = message
      .to
      .parse()
      .with_context(|| format!("invalid recipient address: {}", message.to))?;

    let mut builder = Message::builder().from(from).to(to).subject(&message.subject);
    if let Some(reply_to) = &message.reply_to {
      let reply_to: Mailbox = reply_to
        .parse()
        .with_context(|| format!("invalid reply-to address: {}", reply_to))?;
      builder = builder.reply_to(reply_to);
    }

    let email = builder.multipart(MultiPart::alternative_plain_html(
      message.text_body.clone(),
      message.html_body.clone(),
    ))?;

    Ok(email)
  }
}

#[async_trait]
impl Mailer for EmailService {
  async fn send(&self, message: &EmailMessage) -> Result<()> {
    let email = Self::build_message(message)?;
    self.transporter.send(email).await?;
    Ok(())
  }
}
