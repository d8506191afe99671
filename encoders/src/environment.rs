use encoders_config::Config;
use encoders_core_contact_impl::{
    send::{SimulatedContactSendServiceConfig, SimulatedContactSendServiceImpl},
    ContactFormServiceConfig, ContactFormServiceImpl,
};
use encoders_core_site_impl::SiteServiceImpl;
use encoders_notify_impl::{ToastNotificationServiceConfig, ToastNotificationServiceImpl};

pub type ContactFormFeature =
    ContactFormServiceImpl<SimulatedContactSendServiceImpl, ToastNotificationServiceImpl>;
pub type Site = SiteServiceImpl;

/// Wires the services of the site from the configuration.
#[derive(Debug)]
pub struct Environment {
    site: Site,
    contact_form: ContactFormConfig,
}

#[derive(Debug, Clone)]
struct ContactFormConfig {
    form: ContactFormServiceConfig,
    send: SimulatedContactSendServiceConfig,
    notify: ToastNotificationServiceConfig,
}

impl Environment {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let site = SiteServiceImpl::new(config.site)?;

        let contact_form = ContactFormConfig {
            form: ContactFormServiceConfig {
                reset_delay: config.contact.reset_delay.into(),
            },
            send: SimulatedContactSendServiceConfig {
                delay: config.contact.send_delay.into(),
            },
            notify: ToastNotificationServiceConfig {
                success: config.notify.success,
                failure: config.notify.failure,
                send_failure: config.notify.send_failure,
            },
        };

        Ok(Self { site, contact_form })
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    /// Mounts a fresh contact form. Every call returns an independent form.
    pub fn contact_form(&self) -> ContactFormFeature {
        let config = self.contact_form.clone();
        ContactFormServiceImpl::new(
            SimulatedContactSendServiceImpl { config: config.send },
            ToastNotificationServiceImpl::stdout(config.notify),
            config.form,
        )
    }
}
