use std::time::Duration;

use encoders_core_contact_contracts::{ContactFormService, MockContactSendService};
use encoders_models::contact::{ContactFormField, ContactFormFields};
use encoders_notify_contracts::MockNotificationService;

use crate::{ContactFormServiceConfig, ContactFormServiceImpl};

mod update_field;

type Sut = ContactFormServiceImpl<MockContactSendService, MockNotificationService>;

const RESET_DELAY: Duration = Duration::from_secs(3);

fn sut(sender: MockContactSendService, notify: MockNotificationService) -> Sut {
    ContactFormServiceImpl::new(
        sender,
        notify,
        ContactFormServiceConfig {
            reset_delay: RESET_DELAY,
        },
    )
}

fn fill(sut: &Sut, fields: &ContactFormFields) {
    for field in ContactFormField::ALL {
        sut.update_field(field, fields.get(field).into());
    }
}
