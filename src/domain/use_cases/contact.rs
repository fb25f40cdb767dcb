use crate::entities::contact_me::ContactMeForm;

#[derive(Debug, Default, Clone)]
pub struct ContactMeHandler;

impl ContactMeHandler {
    pub fn new() -> Self {
        ContactMeHandler
    }

    /// Accepts a contact message without storing or forwarding it.
    pub fn accept_message(&self, form: ContactMeForm) {
        tracing::info!(
            has_name = form.name.is_some(),
            has_email = form.email.is_some(),
            message_len = form.message.as_deref().map_or(0, str::len),
            "Contact message received and discarded"
        );
    }
}
