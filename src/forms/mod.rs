//! Browser-side form logic for the contact and newsletter widgets, driven
//! against the site API through [`client::SiteApiClient`] or any other
//! endpoint implementation.

pub mod client;
pub mod contact;
pub mod newsletter;

pub use client::{ContactEndpoint, EndpointReply, NewsletterEndpoint, SiteApiClient};
pub use contact::{ContactForm, FormStatus};
pub use newsletter::{NewsletterForm, SubscribeStatus};
