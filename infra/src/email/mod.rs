//! Email delivery module

mod mailgun;
mod mock_email;

pub use mailgun::MailgunEmailService;
pub use mock_email::MockEmailService;
